//! The single-row `filter_preferences` table.

use crate::errors::AppResult;
use crate::models::filter_preferences::{FILTER_PREFERENCES_ID, FilterPreferences};
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_filter_preferences(conn: &Connection) -> AppResult<Option<FilterPreferences>> {
    let mut stmt = conn.prepare_cached(
        "SELECT category, job_type, last_updated FROM filter_preferences WHERE id = ?1",
    )?;
    Ok(stmt
        .query_row([FILTER_PREFERENCES_ID], |row| {
            Ok(FilterPreferences {
                category: row.get(0)?,
                job_type: row.get(1)?,
                last_updated: row.get(2)?,
            })
        })
        .optional()?)
}

/// Replaces the row wholesale.
pub fn save_filter_preferences(conn: &Connection, prefs: &FilterPreferences) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO filter_preferences (id, category, job_type, last_updated)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            FILTER_PREFERENCES_ID,
            prefs.category,
            prefs.job_type,
            prefs.last_updated
        ],
    )?;
    Ok(())
}

pub fn clear_filter_preferences(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM filter_preferences", [])?;
    Ok(())
}
