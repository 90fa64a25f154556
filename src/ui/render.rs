//! Terminal rendering of jobs, history and preferences.

use crate::models::alert_preferences::AlertPreferences;
use crate::models::job::Job;
use crate::models::search_history::SearchHistoryEntry;
use crate::models::ui_state::UiState;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, bookmark_marker, colorize_salary};
use crate::utils::formatting::{bold, epoch_millis_to_local, italic};
use crate::utils::html::strip_html;
use crate::utils::table::{Column, Table};
use std::collections::HashSet;

const DESCRIPTION_WIDTH: usize = 80;

pub fn jobs_table(jobs: &[Job], saved: &HashSet<i64>) -> String {
    let mut table = Table::new(vec![
        Column::new(" ", 1),
        Column::new("ID", 8),
        Column::new("TITLE", 36),
        Column::new("COMPANY", 22),
        Column::new("TYPE", 12),
        Column::new("LOCATION", 18),
        Column::new("POSTED", 10),
    ]);

    for job in jobs {
        table.add_row(vec![
            // the marker carries ANSI codes, so keep it out of the width math
            String::new(),
            job.id.to_string(),
            job.title.clone(),
            job.company_name.clone(),
            job.job_type.clone(),
            job.location.clone(),
            job.posted_day().to_string(),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();
    let mut out = String::new();

    for line in lines.by_ref().take(2) {
        out.push_str(line);
        out.push('\n');
    }
    for (job, line) in jobs.iter().zip(lines) {
        out.push_str(&bookmark_marker(saved.contains(&job.id)));
        out.push_str(line.get(1..).unwrap_or_default());
        out.push('\n');
    }
    out
}

/// Full posting: header block, tags, plain-text wrapped description.
pub fn job_details(job: &Job, saved: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", bookmark_marker(saved), bold(&job.title)));
    out.push_str(&format!("{CYAN}Company:{RESET}  {}\n", job.company_name));
    out.push_str(&format!("{CYAN}Location:{RESET} {}\n", job.location));
    out.push_str(&format!("{CYAN}Type:{RESET}     {}\n", job.job_type));
    out.push_str(&format!("{CYAN}Category:{RESET} {}\n", job.category));
    out.push_str(&format!(
        "{CYAN}Salary:{RESET}   {}\n",
        colorize_salary(job.salary.as_deref().unwrap_or_default())
    ));
    out.push_str(&format!("{CYAN}Posted:{RESET}   {}\n", job.posted_day()));

    if !job.tags.is_empty() {
        let tags: Vec<String> = job.tags.iter().map(|t| format!("[{t}]")).collect();
        out.push_str(&format!("{YELLOW}{}{RESET}\n", tags.join(" ")));
    }

    out.push('\n');
    for paragraph in strip_html(&job.description).split('\n') {
        if paragraph.trim().is_empty() {
            out.push('\n');
            continue;
        }
        for line in textwrap::wrap(paragraph, DESCRIPTION_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(&format!("\n{} {}\n", italic("Apply:"), job.apply_url));
    out
}

/// One line per state; `Success` delegates to the table.
pub fn jobs_state(state: &UiState<Vec<Job>>, saved: &HashSet<i64>) -> String {
    match state {
        UiState::Loading => format!("{GREY}Loading…{RESET}\n"),
        UiState::Empty => "📭 No jobs found.\n".to_string(),
        UiState::Error(msg) => format!("❌ {msg}\n"),
        UiState::Success(jobs) => jobs_table(jobs, saved),
    }
}

pub fn history_table(entries: &[SearchHistoryEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("WHEN", 16),
        Column::new("QUERY", 40),
    ]);
    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            epoch_millis_to_local(e.timestamp),
            e.query.clone(),
        ]);
    }
    table.render()
}

pub fn alert_preferences(prefs: &AlertPreferences) -> String {
    let types = if prefs.job_types.is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        prefs.job_types.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    format!(
        "{CYAN}Alerts:{RESET}    {}\n{CYAN}Frequency:{RESET} {}\n{CYAN}Job types:{RESET} {}\n",
        if prefs.enable_alerts { "on" } else { "off" },
        prefs.alert_frequency,
        types
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            company_name: "Acme".into(),
            company_logo: String::new(),
            location: "Worldwide".into(),
            salary: Some("Not specified".into()),
            description: "<p>Hello <b>world</b></p>".into(),
            category: "Design".into(),
            job_type: "Full-time".into(),
            tags: vec!["Full-time".into(), "Design".into()],
            posted_date: "2025-06-18T10:00:00".into(),
            apply_url: "https://example.com/apply".into(),
        }
    }

    #[test]
    fn table_has_one_line_per_job() {
        let out = jobs_table(&[job(1), job(2)], &HashSet::from([2]));
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("Job 2"));
        assert!(out.contains("2025-06-18"));
    }

    #[test]
    fn details_strip_description_markup() {
        let out = job_details(&job(7), true);
        assert!(out.contains("Hello world"));
        assert!(!out.contains("<b>"));
        assert!(out.contains("[Design]"));
    }
}
