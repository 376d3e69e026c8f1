//! The `wortschatz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use wortschatz_core::document::{parse_document, validate_database};
use wortschatz_core::LessonDatabase;

pub fn execute(files: Vec<PathBuf>) -> Result<()> {
    let mut total_warnings = 0;

    for path in &files {
        let document = parse_document(path)?;
        let db = LessonDatabase::new(document.lessons);
        println!(
            "Database: {} ({} lessons, {} pages, {} words)",
            path.display(),
            db.lessons().len(),
            db.page_count(),
            db.word_count()
        );

        let warnings = validate_database(&db);
        for w in &warnings {
            let prefix = w
                .location
                .as_ref()
                .map(|loc| format!("  [{loc}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All databases valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
