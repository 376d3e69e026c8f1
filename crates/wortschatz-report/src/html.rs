//! HTML word card generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use wortschatz_core::{QuizOptions, Word};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render one word card.
fn word_card(word: &Word, options: QuizOptions) -> String {
    let (front, back) = word.prompt_and_answer(options.reverse);
    let mut card = String::from("<div class=\"word-card\">\n");
    card.push_str(&format!(
        "  <div class=\"front\">{}</div>\n",
        html_escape(front)
    ));
    card.push_str(&format!("  <div class=\"back\">{}</div>\n", html_escape(back)));
    if let Some(plural) = word.plural.as_deref().filter(|p| !p.is_empty()) {
        card.push_str(&format!(
            "  <div class=\"plural\">(Pl. {})</div>\n",
            html_escape(plural)
        ));
    }
    if let Some(example) = word.example.as_deref().filter(|e| !e.is_empty()) {
        card.push_str(&format!(
            "  <div class=\"example\">\u{201e}{}\u{201c}</div>\n",
            html_escape(example)
        ));
    }
    card.push_str("</div>\n");
    card
}

/// Generate an HTML page of word cards.
///
/// An empty word list renders the "choose lessons" placeholder.
pub fn generate_html(words: &[Word], options: QuizOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Wortschatz</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str("<h1>Wortschatz</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\"><span class=\"badge\">{} Wörter</span> | {} | {}</p>\n",
        words.len(),
        if options.reverse {
            "Tschechisch → Deutsch"
        } else {
            "Deutsch → Tschechisch"
        },
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"words\">\n");
    if words.is_empty() {
        html.push_str("<p class=\"empty\">Wähle Lektionen und Seiten, um Wörter anzuzeigen.</p>\n");
    } else {
        for word in words {
            html.push_str(&word_card(word, options));
        }
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the word card page to a file.
pub fn write_html_report(words: &[Word], options: QuizOptions, path: &Path) -> Result<()> {
    let html = generate_html(words, options);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --muted: #6b7280; --accent: #2563eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --muted: #9ca3af; --accent: #60a5fa; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.meta { color: var(--muted); }
.badge { background: var(--accent); color: #fff; border-radius: 999px; padding: 0.1rem 0.6rem; font-weight: bold; }
.words { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.word-card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; }
.front { font-size: 1.2rem; font-weight: bold; }
.back { margin-top: 0.25rem; }
.plural { color: var(--muted); font-size: 0.9rem; }
.example { margin-top: 0.5rem; font-style: italic; color: var(--muted); }
.empty { color: var(--muted); grid-column: 1 / -1; text-align: center; }
"#;
