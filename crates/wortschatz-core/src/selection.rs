//! Lesson and page selection store.
//!
//! Holds the selected lesson numbers and the selected page ids. The page
//! selection is rebuilt from scratch whenever the lesson selection changes,
//! with every page of a selected lesson starting out selected.

use std::collections::BTreeSet;

use crate::database::LessonDatabase;
use crate::model::{AvailablePage, PageId};

/// Selection state for one study session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected_lessons: BTreeSet<i64>,
    selected_pages: BTreeSet<PageId>,
    /// Pages enumerated by the last lesson selection change.
    available_pages: Vec<AvailablePage>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a lesson number.
    ///
    /// Call [`SelectionStore::on_lesson_selection_changed`] afterwards.
    pub fn toggle_lesson(&mut self, number: i64, included: bool) {
        if included {
            self.selected_lessons.insert(number);
        } else {
            self.selected_lessons.remove(&number);
        }
    }

    /// Select or deselect every lesson number known to `db`.
    pub fn set_all_lessons(&mut self, db: &LessonDatabase, included: bool) {
        for number in db.lesson_numbers() {
            self.toggle_lesson(number, included);
        }
    }

    /// Rebuild the page selection from the current lesson selection.
    ///
    /// Returns the enumerated pages; an empty slice means no pages are
    /// available and the caller should say so instead of listing pages.
    pub fn on_lesson_selection_changed(&mut self, db: &LessonDatabase) -> &[AvailablePage] {
        self.selected_pages.clear();
        self.available_pages = db
            .lessons_in(&self.selected_lessons)
            .flat_map(|lesson| lesson.available_pages())
            .collect();
        self.selected_pages
            .extend(self.available_pages.iter().map(|p| p.id));

        tracing::debug!(
            lessons = self.selected_lessons.len(),
            pages = self.available_pages.len(),
            "lesson selection changed"
        );

        &self.available_pages
    }

    /// Add or remove a page. Pages not currently available are ignored.
    pub fn toggle_page(&mut self, id: PageId, included: bool) {
        if !self.is_available(id) {
            tracing::debug!("ignoring toggle of unavailable page {id}");
            return;
        }
        if included {
            self.selected_pages.insert(id);
        } else {
            self.selected_pages.remove(&id);
        }
    }

    /// Select or deselect every currently available page.
    pub fn set_all_pages(&mut self, included: bool) {
        if included {
            self.selected_pages
                .extend(self.available_pages.iter().map(|p| p.id));
        } else {
            for page in &self.available_pages {
                self.selected_pages.remove(&page.id);
            }
        }
    }

    /// Drop all selection state, e.g. after the database was replaced.
    pub fn clear(&mut self) {
        self.selected_lessons.clear();
        self.selected_pages.clear();
        self.available_pages.clear();
    }

    pub fn selected_lessons(&self) -> &BTreeSet<i64> {
        &self.selected_lessons
    }

    pub fn selected_pages(&self) -> &BTreeSet<PageId> {
        &self.selected_pages
    }

    pub fn available_pages(&self) -> &[AvailablePage] {
        &self.available_pages
    }

    pub fn is_lesson_selected(&self, number: i64) -> bool {
        self.selected_lessons.contains(&number)
    }

    pub fn is_page_selected(&self, id: PageId) -> bool {
        self.selected_pages.contains(&id)
    }

    /// State of the "select all lessons" checkbox.
    pub fn all_lessons_selected(&self, db: &LessonDatabase) -> bool {
        let numbers = db.lesson_numbers();
        !numbers.is_empty() && numbers.iter().all(|n| self.selected_lessons.contains(n))
    }

    /// State of the "select all pages" checkbox.
    pub fn all_pages_selected(&self) -> bool {
        !self.available_pages.is_empty()
            && self
                .available_pages
                .iter()
                .all(|p| self.selected_pages.contains(&p.id))
    }

    fn is_available(&self, id: PageId) -> bool {
        self.available_pages.iter().any(|p| p.id == id)
    }
}
