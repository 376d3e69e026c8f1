//! The `wortschatz words` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wortschatz_core::Word;
use wortschatz_report::html::{generate_html, write_html_report};

use super::{open_session, select_lessons, select_pages, SourceArgs};

pub async fn execute(
    lessons: Option<String>,
    pages: Option<String>,
    reverse: bool,
    format: String,
    output: Option<PathBuf>,
    source: SourceArgs,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "html"),
        "unknown format: '{format}' (expected text, json or html)"
    );

    let mut session = open_session(&source).await?;
    select_lessons(&mut session, lessons.as_deref())?;
    select_pages(&mut session, pages.as_deref())?;
    session.set_reverse_mode(reverse);

    let options = session.quiz_options();
    let words = session.words();

    match (format.as_str(), &output) {
        ("json", Some(path)) => {
            session.quiz().save_json(path)?;
            eprintln!("Quiz deck saved to: {}", path.display());
        }
        ("json", None) => {
            println!("{}", serde_json::to_string_pretty(session.quiz())?);
        }
        ("html", Some(path)) => {
            write_html_report(words, options, path)?;
            eprintln!("HTML word cards: {}", path.display());
        }
        ("html", None) => {
            println!("{}", generate_html(words, options));
        }
        (_, Some(path)) => {
            std::fs::write(path, render_text(words, reverse))?;
            eprintln!("Word list saved to: {}", path.display());
        }
        (_, None) => {
            print!("{}", render_text(words, reverse));
        }
    }

    Ok(())
}

fn render_text(words: &[Word], reverse: bool) -> String {
    if words.is_empty() {
        return "Wähle Lektionen und Seiten, um Wörter anzuzeigen.\n".to_string();
    }

    let mut table = Table::new();
    if reverse {
        table.set_header(vec!["Tschechisch", "Deutsch", "Plural", "Beispiel"]);
    } else {
        table.set_header(vec!["Deutsch", "Tschechisch", "Plural", "Beispiel"]);
    }

    for word in words {
        let (prompt, answer) = word.prompt_and_answer(reverse);
        table.add_row(vec![
            Cell::new(prompt),
            Cell::new(answer),
            Cell::new(word.plural.as_deref().unwrap_or("")),
            Cell::new(word.example.as_deref().unwrap_or("")),
        ]);
    }

    format!("{table}\n{} Wörter\n", words.len())
}
