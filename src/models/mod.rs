pub mod alert_preferences;
pub mod filter;
pub mod filter_preferences;
pub mod job;
pub mod saved_job;
pub mod search_history;
pub mod ui_state;
