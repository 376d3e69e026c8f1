//! JSON quiz deck.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wortschatz_core::{QuizOptions, QuizSink, Word};

/// The word list and direction handed to the quiz module.
///
/// A session keeps a deck current by using it as its [`QuizSink`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizDeck {
    pub reverse: bool,
    pub words: Vec<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl QuizDeck {
    pub fn new(words: Vec<Word>, options: QuizOptions) -> Self {
        Self {
            reverse: options.reverse,
            words,
            generated_at: None,
        }
    }

    pub fn options(&self) -> QuizOptions {
        QuizOptions {
            reverse: self.reverse,
        }
    }

    /// Prompt/answer pairs in the deck's direction.
    pub fn cards(&self) -> impl Iterator<Item = (&str, &str)> {
        let reverse = self.reverse;
        self.words.iter().map(move |w| w.prompt_and_answer(reverse))
    }

    /// Write the deck as pretty JSON, stamped with the current time.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let stamped = QuizDeck {
            generated_at: Some(Utc::now()),
            ..self.clone()
        };
        let json = serde_json::to_string_pretty(&stamped)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write quiz deck: {}", path.display()))?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read quiz deck: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse quiz deck: {}", path.display()))
    }
}

impl QuizSink for QuizDeck {
    fn set_words(&mut self, words: &[Word]) {
        self.words = words.to_vec();
    }

    fn set_options(&mut self, options: QuizOptions) {
        self.reverse = options.reverse;
    }
}
