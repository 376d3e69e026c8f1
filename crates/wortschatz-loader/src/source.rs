//! Where database documents come from.

use std::fmt;
use std::path::PathBuf;

/// One named database resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl Resource {
    /// Interpret a user-supplied location: `http://` and `https://`
    /// prefixes mean a URL, anything else a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Resource::Url(trimmed.to_string())
        } else {
            Resource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Url(url) => write!(f, "{url}"),
            Resource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Input to a load: one embedded document, or resources to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    /// A complete JSON document bundled with the application.
    Embedded(String),
    /// Resources fetched concurrently and merged in this order.
    Resources(Vec<Resource>),
}

impl Sources {
    /// Build resource sources from user-supplied locations.
    pub fn from_locations<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Sources::Resources(
            locations
                .into_iter()
                .map(|l| Resource::parse(l.as_ref()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locations() {
        assert_eq!(
            Resource::parse("https://example.org/db.json"),
            Resource::Url("https://example.org/db.json".into())
        );
        assert_eq!(
            Resource::parse(" data/database 1-4.json "),
            Resource::File(PathBuf::from("data/database 1-4.json"))
        );
    }

    #[test]
    fn sources_from_locations_keep_order() {
        let sources = Sources::from_locations(["b.json", "http://host/a.json"]);
        assert_eq!(
            sources,
            Sources::Resources(vec![
                Resource::File(PathBuf::from("b.json")),
                Resource::Url("http://host/a.json".into()),
            ])
        );
    }

    #[test]
    fn display() {
        assert_eq!(Resource::Url("http://h/x".into()).to_string(), "http://h/x");
        assert_eq!(Resource::File(PathBuf::from("x.json")).to_string(), "x.json");
    }
}
