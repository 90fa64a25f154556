use crate::errors::{AppError, AppResult};

const JOB_PREFIX: &str = "jobfinder://job/";

pub fn job_deep_link(job_id: i64) -> String {
    format!("{JOB_PREFIX}{job_id}")
}

/// `jobfinder://job/42` → 42. Trailing slashes and query strings are ignored.
pub fn parse_job_deep_link(link: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidDeepLink(link.to_string());

    let rest = link.trim().strip_prefix(JOB_PREFIX).ok_or_else(invalid)?;
    let id = rest
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    id.parse::<i64>().map_err(|_| invalid())
}
