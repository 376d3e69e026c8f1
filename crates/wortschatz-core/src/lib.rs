//! wortschatz-core: Lesson database, selection and word aggregation.
//!
//! This crate defines the vocabulary data model, the merge of loaded
//! documents into one ordered lesson database, the lesson/page selection
//! store, and the study session that ties them together.

pub mod aggregate;
pub mod database;
pub mod document;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;

pub use database::LessonDatabase;
pub use error::LoadError;
pub use model::{AvailablePage, Lesson, Page, PageId, Word};
pub use selection::SelectionStore;
pub use session::{NoopPresenter, NoopQuizSink, Presenter, QuizOptions, QuizSink, StudySession};
