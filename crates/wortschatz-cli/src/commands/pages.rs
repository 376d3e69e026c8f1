//! The `wortschatz pages` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{checkbox, open_session, select_lessons, select_pages, SourceArgs};

pub async fn execute(
    lessons: Option<String>,
    pages: Option<String>,
    source: SourceArgs,
) -> Result<()> {
    let mut session = open_session(&source).await?;
    select_lessons(&mut session, lessons.as_deref())?;
    select_pages(&mut session, pages.as_deref())?;

    let selection = session.selection();
    let pages = selection.available_pages();
    if pages.is_empty() {
        println!("Wähle zuerst eine Lektion...");
        return Ok(());
    }

    println!("{} Alle Seiten", checkbox(selection.all_pages_selected()));

    let mut table = Table::new();
    table.set_header(vec!["", "Page", "Label", "Words"]);
    for page in pages {
        table.add_row(vec![
            Cell::new(checkbox(selection.is_page_selected(page.id))),
            Cell::new(page.id),
            Cell::new(page.label()),
            Cell::new(page.word_count),
        ]);
    }

    println!("{table}");
    println!("{} Wörter ausgewählt", session.word_count());
    Ok(())
}
