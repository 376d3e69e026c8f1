//! The `wortschatz lessons` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{checkbox, open_session, select_lessons, SourceArgs};

pub async fn execute(lessons: Option<String>, source: SourceArgs) -> Result<()> {
    let mut session = open_session(&source).await?;
    select_lessons(&mut session, lessons.as_deref())?;

    let Some(db) = session.database().filter(|db| !db.is_empty()) else {
        println!("No lessons found. Check the configured databases.");
        return Ok(());
    };
    let selection = session.selection();

    println!(
        "{} Alle Lektionen",
        checkbox(selection.all_lessons_selected(db))
    );

    let mut table = Table::new();
    table.set_header(vec!["", "Lektion", "Pages", "Words"]);
    for lesson in db.lessons() {
        let selected = lesson
            .number
            .is_some_and(|n| selection.is_lesson_selected(n));
        table.add_row(vec![
            Cell::new(checkbox(selected)),
            Cell::new(lesson.label()),
            Cell::new(lesson.pages.len()),
            Cell::new(lesson.word_count()),
        ]);
    }

    println!("{table}");
    println!("{} lesson(s)", db.lessons().len());
    Ok(())
}
