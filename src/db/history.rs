//! Queries on the `search_history` table.

use crate::errors::AppResult;
use crate::models::search_history::SearchHistoryEntry;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<SearchHistoryEntry> {
    Ok(SearchHistoryEntry {
        id: row.get("id")?,
        query: row.get("search_query")?,
        timestamp: row.get("timestamp")?,
    })
}

/// Returns the id of the new row.
pub fn insert_search(conn: &Connection, query: &str, timestamp: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO search_history (search_query, timestamp) VALUES (?1, ?2)",
        params![query, timestamp],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent first, at most `limit` rows.
pub fn load_recent_searches(conn: &Connection, limit: usize) -> AppResult<Vec<SearchHistoryEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, search_query, timestamp FROM search_history
         ORDER BY timestamp DESC, id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_search(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM search_history WHERE id = ?1", [id])?)
}

pub fn delete_search_by_query(conn: &Connection, query: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM search_history WHERE search_query = ?1",
        [query],
    )?)
}

pub fn clear_all_searches(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM search_history", [])?)
}

pub fn count_searches(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM search_history", [], |row| row.get(0))?)
}
