use serde::Serialize;

/// Read view of the history table is capped to this many rows.
pub const RECENT_SEARCHES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHistoryEntry {
    pub id: i64,
    pub query: String,
    pub timestamp: i64, // epoch millis
}
