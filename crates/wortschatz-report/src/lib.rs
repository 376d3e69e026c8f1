//! wortschatz-report: Rendering of word lists.
//!
//! Word cards as a self-contained HTML page, and the JSON quiz deck handed
//! to the quiz module.

pub mod deck;
pub mod html;

pub use deck::QuizDeck;
pub use html::{generate_html, write_html_report};
