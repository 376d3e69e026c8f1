//! Subcommands and the plumbing they share.

pub mod init;
pub mod lessons;
pub mod pages;
pub mod validate;
pub mod words;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wortschatz_core::{AvailablePage, Lesson, LoadError, PageId, Presenter, StudySession, Word};
use wortschatz_loader::config::load_config_from;
use wortschatz_loader::{DatabaseLoader, Sources};
use wortschatz_report::QuizDeck;

/// Where the database comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Database file or URL (repeatable); replaces the configured databases
    #[arg(long = "database")]
    pub databases: Vec<String>,

    /// Load a single bundled database file instead
    #[arg(long)]
    pub embedded: Option<PathBuf>,
}

/// Presenter that traces every UI update.
#[derive(Debug, Default)]
pub struct TracePresenter;

impl Presenter for TracePresenter {
    fn on_lessons_loaded(&mut self, lessons: &[Lesson]) {
        tracing::debug!(count = lessons.len(), "lessons rendered");
    }

    fn on_pages_changed(&mut self, pages: &[AvailablePage]) {
        tracing::debug!(count = pages.len(), "pages rendered");
    }

    fn on_words_changed(&mut self, words: &[Word]) {
        tracing::debug!(count = words.len(), "words rendered");
    }
}

pub type CliSession = StudySession<TracePresenter, QuizDeck>;

/// Load the database and install it into a fresh session.
pub async fn open_session(args: &SourceArgs) -> Result<CliSession> {
    let mut config = load_config_from(args.config.as_deref())?;

    if !args.databases.is_empty() {
        config.embedded = None;
    }
    if let Some(embedded) = &args.embedded {
        config.embedded = Some(embedded.clone());
    }

    let sources = if config.embedded.is_none() && !args.databases.is_empty() {
        Ok(Sources::from_locations(&args.databases))
    } else {
        config.sources()
    };

    let loader = DatabaseLoader::with_default_fetcher(config.fetch_timeout())?;
    let db = match sources {
        Ok(sources) => loader.load(&sources).await,
        Err(e) => Err(e),
    }
    .context(LoadError::USER_MESSAGE)?;

    let mut session = StudySession::with_observers(TracePresenter, QuizDeck::default());
    session.install_database(db);
    Ok(session)
}

/// Apply a `--lessons` argument: comma-separated numbers or `all`.
pub fn select_lessons(session: &mut CliSession, lessons: Option<&str>) -> Result<()> {
    let Some(lessons) = lessons.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(());
    };

    if lessons.eq_ignore_ascii_case("all") {
        session.set_all_lessons(true);
        return Ok(());
    }

    for part in lessons.split(',') {
        let number: i64 = part
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid lesson number: '{}'", part.trim()))?;
        if session
            .database()
            .is_some_and(|db| db.find_lesson(number).is_none())
        {
            tracing::warn!("lesson {number} not found in database");
        }
        session.toggle_lesson(number, true);
    }
    Ok(())
}

/// Apply a `--pages` argument: keep only the listed pages.
pub fn select_pages(session: &mut CliSession, pages: Option<&str>) -> Result<()> {
    let Some(pages) = pages.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    let ids = pages
        .split(',')
        .map(|p| p.parse::<PageId>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;

    session.set_all_pages(false);
    for id in ids {
        if !session.available_pages().iter().any(|p| p.id == id) {
            tracing::warn!("page {id} is not available for the selected lessons");
        }
        session.toggle_page(id, true);
    }
    Ok(())
}

/// Text rendering of a checkbox.
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
