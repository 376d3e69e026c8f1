//! Loader configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wortschatz_core::LoadError;

use crate::source::{Resource, Sources};

/// Top-level wortschatz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WortschatzConfig {
    /// Base URL the database names are resolved against.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Directory the database names are resolved against when no base URL is set.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Database document names, merged in this order.
    #[serde(default = "default_databases")]
    pub databases: Vec<String>,
    /// A single document loaded instead of `databases`.
    #[serde(default)]
    pub embedded: Option<PathBuf>,
    /// Per-request fetch timeout. Unset means no timeout.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_databases() -> Vec<String> {
    [
        "database 1-4.json",
        "database 5-10.json",
        "database 11-14.json",
        "database 15-18.json",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for WortschatzConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: default_data_dir(),
            databases: default_databases(),
            embedded: None,
            fetch_timeout_secs: None,
        }
    }
}

impl WortschatzConfig {
    /// Resolve the configured database names to fetchable resources.
    ///
    /// Names that already are URLs are kept as they are.
    pub fn resources(&self) -> Vec<Resource> {
        self.databases
            .iter()
            .map(|name| match Resource::parse(name) {
                Resource::Url(url) => Resource::Url(url),
                Resource::File(path) => match &self.base_url {
                    Some(base) => Resource::Url(format!(
                        "{}/{}",
                        base.trim_end_matches('/'),
                        path.display()
                    )),
                    None => Resource::File(self.data_dir.join(path)),
                },
            })
            .collect()
    }

    /// Sources for a load: the embedded document if one is configured,
    /// otherwise the resolved resources.
    pub fn sources(&self) -> Result<Sources, LoadError> {
        match &self.embedded {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| LoadError::EmbeddedUnreadable {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Sources::Embedded(content))
            }
            None => Ok(Sources::Resources(self.resources())),
        }
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let value = std::env::var(&result[start + 2..start + end]).unwrap_or_default();
        result.replace_range(start..start + end + 1, &value);
        from = start + value.len();
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `wortschatz.toml` in the current directory
/// 2. `~/.config/wortschatz/config.toml`
///
/// `WORTSCHATZ_BASE_URL` overrides `base_url`.
pub fn load_config_from(path: Option<&Path>) -> Result<WortschatzConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wortschatz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<WortschatzConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => WortschatzConfig::default(),
    };

    if let Ok(url) = std::env::var("WORTSCHATZ_BASE_URL") {
        if !url.is_empty() {
            config.base_url = Some(url);
        }
    }

    config.base_url = config.base_url.as_deref().map(resolve_env_vars);
    config.databases = config
        .databases
        .iter()
        .map(|d| resolve_env_vars(d))
        .collect();

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wortschatz"))
}
