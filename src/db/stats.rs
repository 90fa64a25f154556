use crate::db::migrate::applied_migrations;
use crate::db::{filters, history, jobs};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let saved = jobs::count_saved_jobs(conn)?;
    let searches = history::count_searches(conn)?;
    println!("{}• Saved jobs:{} {}{}{}", CYAN, RESET, GREEN, saved, RESET);
    println!("{}• Searches:{} {}{}{}", CYAN, RESET, GREEN, searches, RESET);

    //
    // 3) BOOKMARK RANGE
    //
    let newest: Option<String> = conn
        .query_row(
            "SELECT title FROM saved_jobs ORDER BY saved_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last saved:{} {}",
        CYAN,
        RESET,
        newest.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) FILTERS + SCHEMA
    //
    match filters::load_filter_preferences(conn)? {
        Some(p) => println!(
            "{}• Filters:{} category='{}' job_type='{}'",
            CYAN, RESET, p.category, p.job_type
        ),
        None => println!("{}• Filters:{} {GREY}--{RESET}", CYAN, RESET),
    }

    let versions = applied_migrations(conn)?;
    println!(
        "{}• Schema:{} {} migration(s), latest {}",
        CYAN,
        RESET,
        versions.len(),
        versions.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
