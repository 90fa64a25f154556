use super::job::Job;
use serde::{Deserialize, Serialize};

/// Search criteria applied to a job search. Every field defaults to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    pub search_query: String,
    pub category: String,
    pub company_name: String,
    pub job_type: String,
}

/// The single criterion the jobs endpoint is queried with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteQuery {
    Search(String),
    Category(String),
    Company(String),
    All,
}

impl JobFilter {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            search_query: q.into(),
            ..Self::default()
        }
    }

    pub fn category(c: impl Into<String>) -> Self {
        Self {
            category: c.into(),
            ..Self::default()
        }
    }

    /// First non-empty field wins: query > category > company > all.
    pub fn remote_query(&self) -> RemoteQuery {
        if !self.search_query.is_empty() {
            RemoteQuery::Search(self.search_query.clone())
        } else if !self.category.is_empty() {
            RemoteQuery::Category(self.category.clone())
        } else if !self.company_name.is_empty() {
            RemoteQuery::Company(self.company_name.clone())
        } else {
            RemoteQuery::All
        }
    }

    /// Job type is never sent upstream; callers may narrow results with it.
    pub fn matches_job_type(&self, job: &Job) -> bool {
        self.job_type.is_empty() || job.job_type.eq_ignore_ascii_case(&self.job_type)
    }
}

impl RemoteQuery {
    /// Query-string pair for the jobs endpoint, `None` for the unfiltered call.
    pub fn param(&self) -> Option<(&'static str, &str)> {
        match self {
            RemoteQuery::Search(q) => Some(("search", q)),
            RemoteQuery::Category(c) => Some(("category", c)),
            RemoteQuery::Company(c) => Some(("company_name", c)),
            RemoteQuery::All => None,
        }
    }
}
