#![allow(dead_code)]
//! In-memory stand-ins for the remote collaborators.

use jobfinder::errors::{AppError, AppResult};
use jobfinder::models::filter::RemoteQuery;
use jobfinder::remote::JobSource;
use jobfinder::remote::PreferencesGateway;
use jobfinder::remote::dto::{
    JobDto, JobResponseDto, PreferenceRequestDto, PreferenceResponseDto,
};
use std::sync::Mutex;

pub fn job_dto(id: i64, title: &str) -> JobDto {
    JobDto {
        id,
        url: format!("https://remotive.com/remote-jobs/{id}"),
        title: title.to_string(),
        company_name: "Acme".to_string(),
        company_logo: String::new(),
        category: "Software Development".to_string(),
        job_type: Some("full_time".to_string()),
        publication_date: "2025-06-18T10:00:00".to_string(),
        location: "Worldwide".to_string(),
        salary: None,
        description: "<p>Build things.</p>".to_string(),
    }
}

/// `n` jobs with ids 0..n, titled "Job i".
pub fn numbered_jobs(n: usize) -> Vec<JobDto> {
    (0..n).map(|i| job_dto(i as i64, &format!("Job {i}"))).collect()
}

/// Records every call and answers with a fixed listing (or a fixed error).
pub struct FakeSource {
    jobs: Mutex<Vec<JobDto>>,
    fail_with: Option<u16>,
    pub calls: Mutex<Vec<(RemoteQuery, Option<u32>)>>,
}

impl FakeSource {
    pub fn with_jobs(jobs: Vec<JobDto>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            fail_with: Some(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_jobs(&self, jobs: Vec<JobDto>) {
        *self.jobs.lock().unwrap() = jobs;
    }

    pub fn calls(&self) -> Vec<(RemoteQuery, Option<u32>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl JobSource for FakeSource {
    async fn remote_jobs(
        &self,
        query: &RemoteQuery,
        limit: Option<u32>,
    ) -> AppResult<JobResponseDto> {
        self.calls.lock().unwrap().push((query.clone(), limit));

        if let Some(status) = self.fail_with {
            return Err(AppError::Api {
                status,
                message: "Failed to fetch jobs".to_string(),
            });
        }

        let jobs = self.jobs.lock().unwrap().clone();
        Ok(JobResponseDto {
            legal_notice: String::new(),
            job_count: jobs.len() as i64,
            jobs,
        })
    }
}

/// Preferences endpoint double.
pub struct FakeGateway {
    fail: bool,
    crash: bool,
    pub requests: Mutex<Vec<PreferenceRequestDto>>,
}

impl FakeGateway {
    pub fn ok() -> Self {
        Self {
            fail: false,
            crash: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            crash: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Panics inside the save call, so no outcome is ever published.
    pub fn crashing() -> Self {
        Self {
            fail: false,
            crash: true,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl PreferencesGateway for FakeGateway {
    async fn save_preference(
        &self,
        request: &PreferenceRequestDto,
    ) -> AppResult<PreferenceResponseDto> {
        self.requests.lock().unwrap().push(request.clone());
        if self.crash {
            panic!("preferences endpoint crashed");
        }
        if self.fail {
            return Err(AppError::Api {
                status: 503,
                message: "Failed to save preferences".to_string(),
            });
        }
        Ok(PreferenceResponseDto {
            message: "Preferences saved".to_string(),
            preference_id: Some("pref-1".to_string()),
        })
    }
}
