//! One handler per subcommand. Handlers that need jobs build the
//! repository through [`open_repository`], which honours `--fixture`.

pub mod config;
pub mod db;
pub mod filters;
pub mod history;
pub mod home;
pub mod init;
pub mod log;
pub mod prefs;
pub mod profile;
pub mod push;
pub mod saved;
pub mod search;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::JobRepository;
use crate::db::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::remote::{FixtureSource, PreferencesApi, RemoteSource, RemotiveApi};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub type Repository = JobRepository<RemoteSource>;

pub fn job_source(cli: &Cli, cfg: &Config) -> AppResult<RemoteSource> {
    match &cli.fixture {
        Some(path) => Ok(RemoteSource::Fixture(FixtureSource::new(path))),
        None => Ok(RemoteSource::Http(RemotiveApi::new(
            &cfg.jobs_api_url,
            cfg.request_timeout(),
        )?)),
    }
}

pub fn open_repository(cli: &Cli, cfg: &Config) -> AppResult<Arc<Repository>> {
    let store = LocalStore::open(&cfg.database)?;
    let repository = JobRepository::new(job_source(cli, cfg)?, store).with_limit(cfg.result_limit);
    Ok(Arc::new(repository))
}

pub fn preferences_api(cfg: &Config) -> AppResult<Arc<PreferencesApi>> {
    Ok(Arc::new(PreferencesApi::new(
        &cfg.preferences_api_url,
        cfg.request_timeout(),
    )?))
}

/// Wait for a screen task; a panicked or cancelled task becomes an error.
pub async fn join(handle: JoinHandle<()>) -> AppResult<()> {
    handle
        .await
        .map_err(|e| AppError::Other(format!("background task failed: {e}")))
}
