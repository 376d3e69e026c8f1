//! Study session: the application state for one user.
//!
//! A `StudySession` owns the installed database, the selection store, the
//! current word list and the reverse-mode flag. Selection events are plain
//! method calls; after each committed change the session notifies two
//! independent observers: a [`Presenter`] that renders lessons, pages and
//! words, and a [`QuizSink`] that feeds the quiz module.

use serde::{Deserialize, Serialize};

use crate::aggregate::compute_words;
use crate::database::LessonDatabase;
use crate::model::{AvailablePage, Lesson, PageId, Word};
use crate::selection::SelectionStore;

/// Options forwarded to the quiz module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOptions {
    /// Prompt in Czech and answer in German instead of the other way round.
    pub reverse: bool,
}

/// Receives everything a user interface needs to render.
pub trait Presenter: Send {
    /// A new database was installed.
    fn on_lessons_loaded(&mut self, lessons: &[Lesson]);
    /// The page list was rebuilt. Empty means no lesson is selected yet.
    fn on_pages_changed(&mut self, pages: &[AvailablePage]);
    /// The word list was recomputed. Empty means the placeholder state.
    fn on_words_changed(&mut self, words: &[Word]);
}

/// The quiz module's input.
pub trait QuizSink: Send {
    fn set_words(&mut self, words: &[Word]);
    fn set_options(&mut self, options: QuizOptions);
}

/// No-op presenter.
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn on_lessons_loaded(&mut self, _: &[Lesson]) {}
    fn on_pages_changed(&mut self, _: &[AvailablePage]) {}
    fn on_words_changed(&mut self, _: &[Word]) {}
}

/// No-op quiz sink.
#[derive(Debug, Default)]
pub struct NoopQuizSink;

impl QuizSink for NoopQuizSink {
    fn set_words(&mut self, _: &[Word]) {}
    fn set_options(&mut self, _: QuizOptions) {}
}

impl<T: Presenter + ?Sized> Presenter for Box<T> {
    fn on_lessons_loaded(&mut self, lessons: &[Lesson]) {
        (**self).on_lessons_loaded(lessons)
    }
    fn on_pages_changed(&mut self, pages: &[AvailablePage]) {
        (**self).on_pages_changed(pages)
    }
    fn on_words_changed(&mut self, words: &[Word]) {
        (**self).on_words_changed(words)
    }
}

impl<T: QuizSink + ?Sized> QuizSink for Box<T> {
    fn set_words(&mut self, words: &[Word]) {
        (**self).set_words(words)
    }
    fn set_options(&mut self, options: QuizOptions) {
        (**self).set_options(options)
    }
}

/// Application state for one study session.
pub struct StudySession<P: Presenter = NoopPresenter, Q: QuizSink = NoopQuizSink> {
    database: Option<LessonDatabase>,
    selection: SelectionStore,
    current_words: Vec<Word>,
    reverse_mode: bool,
    presenter: P,
    quiz: Q,
}

impl StudySession {
    /// A session without observers.
    pub fn new() -> Self {
        Self::with_observers(NoopPresenter, NoopQuizSink)
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Presenter, Q: QuizSink> StudySession<P, Q> {
    pub fn with_observers(presenter: P, quiz: Q) -> Self {
        Self {
            database: None,
            selection: SelectionStore::new(),
            current_words: Vec::new(),
            reverse_mode: false,
            presenter,
            quiz,
        }
    }

    /// Replace the database. All selection state is dropped.
    pub fn install_database(&mut self, db: LessonDatabase) {
        tracing::info!(
            lessons = db.lessons().len(),
            words = db.word_count(),
            "database installed"
        );
        self.selection.clear();
        let db = self.database.insert(db);
        self.presenter.on_lessons_loaded(db.lessons());
        self.presenter.on_pages_changed(&[]);
        self.recompute();
    }

    pub fn database(&self) -> Option<&LessonDatabase> {
        self.database.as_ref()
    }

    /// Select or deselect one lesson. Unknown lessons are ignored.
    pub fn toggle_lesson(&mut self, number: i64, included: bool) -> &[Word] {
        let known = self
            .database
            .as_ref()
            .is_some_and(|db| db.find_lesson(number).is_some());
        if !known {
            tracing::debug!("ignoring toggle of unknown lesson {number}");
            return &self.current_words;
        }
        self.selection.toggle_lesson(number, included);
        self.lesson_selection_changed()
    }

    /// Select or deselect every lesson.
    pub fn set_all_lessons(&mut self, included: bool) -> &[Word] {
        let Some(db) = self.database.as_ref() else {
            return &self.current_words;
        };
        self.selection.set_all_lessons(db, included);
        self.lesson_selection_changed()
    }

    /// Select or deselect one of the currently available pages.
    pub fn toggle_page(&mut self, id: PageId, included: bool) -> &[Word] {
        self.selection.toggle_page(id, included);
        self.recompute()
    }

    /// Select or deselect all currently available pages.
    pub fn set_all_pages(&mut self, included: bool) -> &[Word] {
        self.selection.set_all_pages(included);
        self.recompute()
    }

    /// Change the quiz direction. The quiz sink is told only on change.
    pub fn set_reverse_mode(&mut self, reverse: bool) {
        if self.reverse_mode == reverse {
            return;
        }
        self.reverse_mode = reverse;
        let options = self.quiz_options();
        self.quiz.set_options(options);
    }

    pub fn words(&self) -> &[Word] {
        &self.current_words
    }

    pub fn word_count(&self) -> usize {
        self.current_words.len()
    }

    pub fn reverse_mode(&self) -> bool {
        self.reverse_mode
    }

    pub fn quiz_options(&self) -> QuizOptions {
        QuizOptions {
            reverse: self.reverse_mode,
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn available_pages(&self) -> &[AvailablePage] {
        self.selection.available_pages()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn quiz(&self) -> &Q {
        &self.quiz
    }

    fn lesson_selection_changed(&mut self) -> &[Word] {
        if let Some(db) = self.database.as_ref() {
            let pages = self.selection.on_lesson_selection_changed(db);
            self.presenter.on_pages_changed(pages);
        }
        self.recompute()
    }

    fn recompute(&mut self) -> &[Word] {
        self.current_words = match self.database.as_ref() {
            Some(db) => compute_words(
                db,
                self.selection.selected_lessons(),
                self.selection.selected_pages(),
            ),
            None => Vec::new(),
        };
        tracing::debug!(words = self.current_words.len(), "word list recomputed");

        self.presenter.on_words_changed(&self.current_words);
        self.quiz.set_words(&self.current_words);
        let options = self.quiz_options();
        self.quiz.set_options(options);
        &self.current_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    #[derive(Default)]
    struct RecordingPresenter {
        lessons_loaded: usize,
        pages: Vec<Vec<String>>,
        word_counts: Vec<usize>,
    }

    impl Presenter for RecordingPresenter {
        fn on_lessons_loaded(&mut self, _: &[Lesson]) {
            self.lessons_loaded += 1;
        }
        fn on_pages_changed(&mut self, pages: &[AvailablePage]) {
            self.pages
                .push(pages.iter().map(|p| p.id.to_string()).collect());
        }
        fn on_words_changed(&mut self, words: &[Word]) {
            self.word_counts.push(words.len());
        }
    }

    #[derive(Default)]
    struct RecordingQuiz {
        words: Vec<Word>,
        options: Vec<QuizOptions>,
        word_pushes: usize,
    }

    impl QuizSink for RecordingQuiz {
        fn set_words(&mut self, words: &[Word]) {
            self.words = words.to_vec();
            self.word_pushes += 1;
        }
        fn set_options(&mut self, options: QuizOptions) {
            self.options.push(options);
        }
    }

    fn sample_db() -> LessonDatabase {
        LessonDatabase::new(vec![
            Lesson::new(
                1,
                vec![
                    Page::new(1, vec![Word::new("A", "a"), Word::new("B", "b")]),
                    Page::new(2, vec![Word::new("C", "c")]),
                ],
            ),
            Lesson::new(
                2,
                vec![
                    Page::new(1, vec![Word::new("D", "d")]),
                    Page::new(2, vec![Word::new("E", "e")]),
                ],
            ),
        ])
    }

    fn session() -> StudySession<RecordingPresenter, RecordingQuiz> {
        let mut session =
            StudySession::with_observers(RecordingPresenter::default(), RecordingQuiz::default());
        session.install_database(sample_db());
        session
    }

    fn germans(words: &[Word]) -> Vec<String> {
        words
            .iter()
            .map(|w| w.german_or_placeholder().to_string())
            .collect()
    }

    #[test]
    fn install_notifies_and_starts_empty() {
        let session = session();
        assert_eq!(session.presenter().lessons_loaded, 1);
        assert_eq!(session.presenter().pages, vec![Vec::<String>::new()]);
        assert!(session.words().is_empty());
        assert_eq!(session.quiz().word_pushes, 1);
    }

    #[test]
    fn toggling_lessons_and_pages() {
        let mut session = session();
        assert_eq!(germans(session.toggle_lesson(1, true)), vec!["A", "B", "C"]);
        assert_eq!(
            germans(session.toggle_page(PageId::new(1, 1), false)),
            vec!["C"]
        );
        assert_eq!(session.quiz().words, session.words().to_vec());
        assert_eq!(session.presenter().word_counts.last(), Some(&1));
    }

    #[test]
    fn switching_lessons_resets_pages() {
        let mut session = session();
        session.toggle_lesson(1, true);
        session.toggle_page(PageId::new(1, 2), false);
        session.toggle_lesson(1, false);
        session.toggle_lesson(2, true);

        let pages: Vec<String> = session
            .selection()
            .selected_pages()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(pages, vec!["2-1", "2-2"]);
        assert_eq!(germans(session.words()), vec!["D", "E"]);
        assert_eq!(
            session.presenter().pages.last().unwrap(),
            &vec!["2-1".to_string(), "2-2".to_string()]
        );
    }

    #[test]
    fn deselecting_last_lesson_clears_words() {
        let mut session = session();
        session.toggle_lesson(2, true);
        assert_eq!(session.word_count(), 2);
        assert!(session.toggle_lesson(2, false).is_empty());
        assert!(session.presenter().pages.last().unwrap().is_empty());
        assert!(session.quiz().words.is_empty());
    }

    #[test]
    fn select_all_pages_recomputes() {
        let mut session = session();
        session.set_all_lessons(true);
        assert_eq!(session.word_count(), 5);
        assert!(session.set_all_pages(false).is_empty());
        let pushes = session.quiz().word_pushes;
        assert_eq!(session.set_all_pages(true).len(), 5);
        assert_eq!(session.quiz().word_pushes, pushes + 1);
    }

    #[test]
    fn unknown_lesson_is_a_no_op() {
        let mut session = session();
        let pushes = session.quiz().word_pushes;
        assert!(session.toggle_lesson(77, true).is_empty());
        assert!(session.selection().selected_lessons().is_empty());
        assert_eq!(session.quiz().word_pushes, pushes);
    }

    #[test]
    fn reverse_mode_is_pushed_on_change() {
        let mut session = session();
        let before = session.quiz().options.len();
        session.set_reverse_mode(true);
        session.set_reverse_mode(true);
        assert_eq!(session.quiz().options.len(), before + 1);
        assert_eq!(
            session.quiz().options.last(),
            Some(&QuizOptions { reverse: true })
        );

        session.toggle_lesson(1, true);
        assert_eq!(
            session.quiz().options.last(),
            Some(&QuizOptions { reverse: true })
        );
    }

    #[test]
    fn reinstall_drops_selection() {
        let mut session = session();
        session.toggle_lesson(1, true);
        session.install_database(sample_db());
        assert!(session.selection().selected_lessons().is_empty());
        assert!(session.words().is_empty());
        assert_eq!(session.presenter().lessons_loaded, 2);
    }

    #[test]
    fn session_without_database_ignores_events() {
        let mut session = StudySession::new();
        assert!(session.toggle_lesson(1, true).is_empty());
        assert!(session.set_all_lessons(true).is_empty());
        assert!(session.set_all_pages(true).is_empty());
        assert!(session.database().is_none());
    }
}
