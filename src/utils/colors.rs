/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Bookmark marker: green star when saved, grey dot otherwise.
pub fn bookmark_marker(saved: bool) -> String {
    if saved {
        format!("{GREEN}★{RESET}")
    } else {
        format!("{GREY}·{RESET}")
    }
}

/// Salary cell, greyed out when upstream did not list one.
pub fn colorize_salary(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "Not specified" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
