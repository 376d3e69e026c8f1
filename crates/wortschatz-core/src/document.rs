//! JSON database document parsing and validation.
//!
//! Documents are tolerated rather than rejected: a document without a
//! `lessons` array is ignored as a whole, and a malformed lesson, page or
//! word inside a valid document is skipped with a warning.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::database::LessonDatabase;
use crate::model::Lesson;

/// One database document: `{ "lessons": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub lessons: Vec<Lesson>,
}

impl Document {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// Interpret a loaded JSON value as a document.
    ///
    /// Returns `None` when the value has no `lessons` array.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.get("lessons").is_some_and(Value::is_array) {
            return None;
        }
        match serde_json::from_value(value) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("ignoring malformed document: {e}");
                None
            }
        }
    }
}

/// Deserialize a sequence, skipping elements that do not match `T`.
///
/// A missing or `null` sequence becomes empty.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping malformed entry at index {index}: {e}");
                None
            }
        })
        .collect())
}

/// Deserialize a lesson or page number.
///
/// Accepts integers, integral floats (`2.0`) and numeric strings (`"3"`).
/// Anything else becomes `None` so the surrounding entry is kept.
pub(crate) fn lenient_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let number = number_from_value(&raw);
    if number.is_none() {
        tracing::warn!("ignoring unusable number {raw}");
    }
    Ok(number)
}

fn number_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = (i64::MIN as f64..=i64::MAX as f64).contains(&f);
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Parse a JSON string into a `Document` (useful for testing).
///
/// Unlike the loader, this reports a missing `lessons` array as an error.
pub fn parse_document_str(content: &str, source_path: &Path) -> Result<Document> {
    let value: Value = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;
    Document::from_value(value)
        .with_context(|| format!("no lessons array in {}", source_path.display()))
}

/// Parse a single JSON database file.
pub fn parse_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read database file: {}", path.display()))?;

    parse_document_str(&content, path)
}

/// A warning from database validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Lesson number or page id the warning refers to, if any.
    pub location: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn at(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            message: message.into(),
        }
    }
}

/// Validate a lesson database for common issues.
pub fn validate_database(db: &LessonDatabase) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_lessons = HashSet::new();
    for (index, lesson) in db.lessons().iter().enumerate() {
        let Some(number) = lesson.number else {
            warnings.push(ValidationWarning {
                location: None,
                message: format!("lesson at position {index} has no number"),
            });
            continue;
        };
        if !seen_lessons.insert(number) {
            warnings.push(ValidationWarning::at(
                format!("L{number}"),
                format!("duplicate lesson number: {number}"),
            ));
        }

        let mut seen_pages = HashSet::new();
        for (page_index, page) in lesson.pages.iter().enumerate() {
            let Some(page_number) = page.number else {
                warnings.push(ValidationWarning::at(
                    format!("L{number}"),
                    format!("page at position {page_index} has no number"),
                ));
                continue;
            };
            let location = format!("{number}-{page_number}");
            if !seen_pages.insert(page_number) {
                warnings.push(ValidationWarning::at(
                    location.clone(),
                    format!("duplicate page number: {page_number}"),
                ));
            }
            for (word_index, word) in page.words.iter().enumerate() {
                if word.german.as_deref().map_or(true, str::is_empty) {
                    warnings.push(ValidationWarning::at(
                        location.clone(),
                        format!("word {word_index} has no german term"),
                    ));
                }
                if word.czech.as_deref().map_or(true, str::is_empty) {
                    warnings.push(ValidationWarning::at(
                        location.clone(),
                        format!("word {word_index} has no czech term"),
                    ));
                }
            }
        }
    }

    warnings
}
