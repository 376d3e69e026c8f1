//! Core data model types for wortschatz.
//!
//! Documents are loosely shaped JSON, so every field that may be absent is
//! an `Option`. Malformed entries are filtered out at the load boundary by
//! [`crate::document`]; nothing here validates word contents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{lenient_number, lenient_vec};

/// A single vocabulary entry: a German/Czech term pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Word {
    /// German term.
    #[serde(default)]
    pub german: Option<String>,
    /// Czech translation.
    #[serde(default)]
    pub czech: Option<String>,
    /// Example sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Plural form of the German noun.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

impl Word {
    /// Shown in place of a missing German or Czech term.
    pub const PLACEHOLDER: &'static str = "???";

    pub fn new(german: &str, czech: &str) -> Self {
        Self {
            german: Some(german.to_string()),
            czech: Some(czech.to_string()),
            example: None,
            plural: None,
        }
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    pub fn with_plural(mut self, plural: &str) -> Self {
        self.plural = Some(plural.to_string());
        self
    }

    /// German term, or [`Word::PLACEHOLDER`] if missing or empty.
    pub fn german_or_placeholder(&self) -> &str {
        non_empty(self.german.as_deref()).unwrap_or(Self::PLACEHOLDER)
    }

    /// Czech term, or [`Word::PLACEHOLDER`] if missing or empty.
    pub fn czech_or_placeholder(&self) -> &str {
        non_empty(self.czech.as_deref()).unwrap_or(Self::PLACEHOLDER)
    }

    /// Prompt/answer pair for a quiz in the given direction.
    ///
    /// Normal mode prompts in German; reverse mode prompts in Czech.
    pub fn prompt_and_answer(&self, reverse: bool) -> (&str, &str) {
        if reverse {
            (self.czech_or_placeholder(), self.german_or_placeholder())
        } else {
            (self.german_or_placeholder(), self.czech_or_placeholder())
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// A numbered subdivision of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number, unique within its lesson.
    #[serde(default, deserialize_with = "lenient_number")]
    pub number: Option<i64>,
    /// Words on this page, in order.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub words: Vec<Word>,
}

impl Page {
    pub fn new(number: i64, words: Vec<Word>) -> Self {
        Self {
            number: Some(number),
            words,
        }
    }
}

/// A numbered unit of the course.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson number. Missing numbers sort as 0.
    #[serde(default, deserialize_with = "lenient_number")]
    pub number: Option<i64>,
    /// Optional lesson title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pages in stored order.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub pages: Vec<Page>,
}

impl Lesson {
    pub fn new(number: i64, pages: Vec<Page>) -> Self {
        Self {
            number: Some(number),
            name: None,
            pages,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Key used to order lessons after merge.
    pub fn sort_key(&self) -> i64 {
        self.number.unwrap_or(0)
    }

    /// Checkbox label: `"3 - Name"`, or just `"3"` without a name.
    pub fn label(&self) -> String {
        let number = self
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        match self.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => format!("{number} - {name}"),
            None => number,
        }
    }

    /// Total number of words across all pages.
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(|p| p.words.len()).sum()
    }

    /// Enumerate the addressable pages of this lesson in stored order.
    ///
    /// Yields nothing for a lesson without a number, and skips pages
    /// without a number.
    pub fn available_pages(&self) -> impl Iterator<Item = AvailablePage> + '_ {
        let lesson = self.number;
        self.pages.iter().filter_map(move |p| {
            Some(AvailablePage {
                id: PageId::new(lesson?, p.number?),
                word_count: p.words.len(),
            })
        })
    }
}

/// Composite key identifying a page across all lessons.
///
/// Its textual form is `"<lesson>-<page>"`, e.g. `"2-1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId {
    pub lesson: i64,
    pub page: i64,
}

impl PageId {
    pub fn new(lesson: i64, page: i64) -> Self {
        Self { lesson, page }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lesson, self.page)
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // The separator is the first dash after a possible leading sign.
        let split = trimmed
            .get(1..)
            .and_then(|rest| rest.find('-'))
            .map(|i| i + 1)
            .ok_or_else(|| format!("invalid page id '{s}', expected <lesson>-<page>"))?;
        let (lesson, page) = (&trimmed[..split], &trimmed[split + 1..]);
        let lesson = lesson
            .parse::<i64>()
            .map_err(|_| format!("invalid lesson number in page id '{s}'"))?;
        let page = page
            .parse::<i64>()
            .map_err(|_| format!("invalid page number in page id '{s}'"))?;
        Ok(PageId::new(lesson, page))
    }
}

impl TryFrom<String> for PageId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.to_string()
    }
}

/// A page offered for selection after the lesson selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailablePage {
    pub id: PageId,
    /// Number of words on the page.
    pub word_count: usize,
}

impl AvailablePage {
    /// Checkbox label: `"Seite 2 (L5)"`.
    pub fn label(&self) -> String {
        format!("Seite {} (L{})", self.id.page, self.id.lesson)
    }
}
