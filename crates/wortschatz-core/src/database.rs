//! The merged, ordered lesson database.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::model::Lesson;

/// All lessons from every loaded document, sorted by lesson number.
///
/// Replaced wholesale on reload; read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDatabase {
    lessons: Vec<Lesson>,
}

impl LessonDatabase {
    /// Build a database from lessons, sorting them by number.
    pub fn new(mut lessons: Vec<Lesson>) -> Self {
        // Stable: lessons with equal numbers keep their input order.
        lessons.sort_by_key(Lesson::sort_key);
        Self { lessons }
    }

    /// Merge load results in input order.
    ///
    /// `None` entries (failed or invalid sources) are skipped.
    pub fn merge<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Option<Document>>,
    {
        let lessons = documents
            .into_iter()
            .flatten()
            .flat_map(|doc| doc.lessons)
            .collect();
        Self::new(lessons)
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// First lesson carrying `number`.
    pub fn find_lesson(&self, number: i64) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.number == Some(number))
    }

    /// Lessons whose number is in `numbers`, in database order.
    ///
    /// Only the first lesson carrying a given number is yielded.
    pub fn lessons_in<'a>(
        &'a self,
        numbers: &'a BTreeSet<i64>,
    ) -> impl Iterator<Item = &'a Lesson> + 'a {
        let mut seen = HashSet::new();
        self.lessons.iter().filter(move |lesson| match lesson.number {
            Some(n) => numbers.contains(&n) && seen.insert(n),
            None => false,
        })
    }

    /// Distinct lesson numbers in database order.
    pub fn lesson_numbers(&self) -> Vec<i64> {
        let mut numbers: Vec<i64> = Vec::with_capacity(self.lessons.len());
        for number in self.lessons.iter().filter_map(|l| l.number) {
            if !numbers.contains(&number) {
                numbers.push(number);
            }
        }
        numbers
    }

    pub fn page_count(&self) -> usize {
        self.lessons.iter().map(|l| l.pages.len()).sum()
    }

    pub fn word_count(&self) -> usize {
        self.lessons.iter().map(Lesson::word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Word};

    fn doc(numbers: &[i64]) -> Document {
        Document::new(numbers.iter().map(|&n| Lesson::new(n, vec![])).collect())
    }

    fn numbers(db: &LessonDatabase) -> Vec<Option<i64>> {
        db.lessons().iter().map(|l| l.number).collect()
    }

    #[test]
    fn merge_sorts_across_documents() {
        let db = LessonDatabase::merge(vec![Some(doc(&[5, 1, 3])), Some(doc(&[2, 4]))]);
        assert_eq!(numbers(&db), vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);

        let reversed = LessonDatabase::merge(vec![Some(doc(&[2, 4])), Some(doc(&[5, 1, 3]))]);
        assert_eq!(numbers(&reversed), numbers(&db));
    }

    #[test]
    fn merge_skips_missing_documents() {
        let db = LessonDatabase::merge(vec![None, Some(doc(&[7])), None]);
        assert_eq!(numbers(&db), vec![Some(7)]);

        let empty = LessonDatabase::merge(vec![None, None]);
        assert!(empty.is_empty());
    }

    #[test]
    fn merge_is_stable_and_missing_numbers_sort_as_zero() {
        let first = Lesson::new(2, vec![]).with_name("first");
        let second = Lesson::new(2, vec![]).with_name("second");
        let unnumbered = Lesson::default().with_name("none");
        let db = LessonDatabase::merge(vec![
            Some(Document::new(vec![first, Lesson::new(1, vec![])])),
            Some(Document::new(vec![second, unnumbered])),
        ]);

        let names: Vec<Option<&str>> = db.lessons().iter().map(|l| l.name.as_deref()).collect();
        assert_eq!(names, vec![Some("none"), None, Some("first"), Some("second")]);
        assert_eq!(db.find_lesson(2).unwrap().name.as_deref(), Some("first"));
        assert_eq!(db.lesson_numbers(), vec![1, 2]);

        let selected = BTreeSet::from([2, 1, 9]);
        let picked: Vec<Option<&str>> = db
            .lessons_in(&selected)
            .map(|l| l.name.as_deref())
            .collect();
        assert_eq!(picked, vec![None, Some("first")]);
    }

    #[test]
    fn counts() {
        let lesson = Lesson::new(
            1,
            vec![
                Page::new(1, vec![Word::new("a", "b"), Word::new("c", "d")]),
                Page::new(2, vec![Word::new("e", "f")]),
            ],
        );
        let db = LessonDatabase::new(vec![lesson]);
        assert_eq!(db.page_count(), 2);
        assert_eq!(db.word_count(), 3);
        assert!(db.find_lesson(9).is_none());
    }
}
