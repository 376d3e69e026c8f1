//! Word aggregation over the current selection.

use std::collections::BTreeSet;

use crate::database::LessonDatabase;
use crate::model::{PageId, Word};

/// Flatten the words of every selected page of every selected lesson.
///
/// Lessons are visited in database order and pages in stored order, so the
/// result depends only on the database and the two sets. If either set is
/// empty the result is empty: nothing has been picked yet, which is not the
/// same as "all words".
pub fn compute_words(
    db: &LessonDatabase,
    selected_lessons: &BTreeSet<i64>,
    selected_pages: &BTreeSet<PageId>,
) -> Vec<Word> {
    if selected_lessons.is_empty() || selected_pages.is_empty() {
        return Vec::new();
    }

    let mut words = Vec::new();
    for lesson in db.lessons_in(selected_lessons) {
        let Some(lesson_number) = lesson.number else {
            continue;
        };
        for page in &lesson.pages {
            let Some(page_number) = page.number else {
                continue;
            };
            if selected_pages.contains(&PageId::new(lesson_number, page_number)) {
                words.extend(page.words.iter().cloned());
            }
        }
    }
    words
}
