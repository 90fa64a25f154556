//! Local store: one SQLite connection behind a mutex plus a watch channel per
//! table, republished after every write so readers observe a continuously
//! updated view.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{filters, history, jobs, log};
use crate::errors::{AppError, AppResult};
use crate::models::filter_preferences::FilterPreferences;
use crate::models::job::Job;
use crate::models::saved_job::SavedJob;
use crate::models::search_history::{RECENT_SEARCHES_LIMIT, SearchHistoryEntry};
use chrono::Utc;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

struct Inner {
    pool: Mutex<DbPool>,
    saved: watch::Sender<Vec<SavedJob>>,
    searches: watch::Sender<Vec<SearchHistoryEntry>>,
    filters: watch::Sender<Option<FilterPreferences>>,
}

/// Cheap to clone; every clone shares the same connection and channels.
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<Inner>,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl LocalStore {
    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;

        let saved = jobs::load_saved_jobs(&pool.conn)?;
        let searches = history::load_recent_searches(&pool.conn, RECENT_SEARCHES_LIMIT)?;
        let prefs = filters::load_filter_preferences(&pool.conn)?;

        Ok(Self {
            inner: Arc::new(Inner {
                pool: Mutex::new(pool),
                saved: watch::Sender::new(saved),
                searches: watch::Sender::new(searches),
                filters: watch::Sender::new(prefs),
            }),
        })
    }

    /// Run `func` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let guard = self
            .inner
            .pool
            .lock()
            .map_err(|_| AppError::Store("connection mutex poisoned".into()))?;
        func(&guard.conn)
    }

    // ---------------------------
    // saved_jobs
    // ---------------------------

    pub fn get_job_by_id(&self, id: i64) -> AppResult<Option<Job>> {
        Ok(self.with_conn(|c| jobs::get_job_by_id(c, id))?.map(|s| s.job))
    }

    pub fn insert_job(&self, job: &Job) -> AppResult<()> {
        let snapshot = self.with_conn(|c| {
            jobs::insert_job(c, job, now_millis())?;
            log::ttlog(c, "save", &job.id.to_string(), &job.title)?;
            jobs::load_saved_jobs(c)
        })?;
        tracing::debug!(job_id = job.id, "job saved");
        self.inner.saved.send_replace(snapshot);
        Ok(())
    }

    /// Deleting an id that is not saved is a no-op.
    pub fn delete_job_by_id(&self, id: i64) -> AppResult<()> {
        let snapshot = self.with_conn(|c| {
            if jobs::delete_job_by_id(c, id)? > 0 {
                log::ttlog(c, "unsave", &id.to_string(), "Removed from saved jobs")?;
            }
            jobs::load_saved_jobs(c)
        })?;
        tracing::debug!(job_id = id, "job removed");
        self.inner.saved.send_replace(snapshot);
        Ok(())
    }

    pub fn clear_saved_jobs(&self) -> AppResult<usize> {
        let (n, snapshot) = self.with_conn(|c| {
            let n = jobs::delete_all_jobs(c)?;
            log::ttlog(c, "unsave", "all", &format!("Removed {} saved jobs", n))?;
            Ok((n, jobs::load_saved_jobs(c)?))
        })?;
        self.inner.saved.send_replace(snapshot);
        Ok(n)
    }

    pub fn is_job_saved(&self, id: i64) -> AppResult<bool> {
        self.with_conn(|c| jobs::is_job_saved(c, id))
    }

    pub fn saved_jobs_now(&self) -> Vec<SavedJob> {
        self.inner.saved.borrow().clone()
    }

    /// Receiver that re-fires after each insert/delete on `saved_jobs`.
    pub fn watch_saved_jobs(&self) -> watch::Receiver<Vec<SavedJob>> {
        self.inner.saved.subscribe()
    }

    // ---------------------------
    // search_history
    // ---------------------------

    pub fn insert_search(&self, query: &str) -> AppResult<i64> {
        let (id, snapshot) = self.with_conn(|c| {
            let id = history::insert_search(c, query, now_millis())?;
            Ok((id, history::load_recent_searches(c, RECENT_SEARCHES_LIMIT)?))
        })?;
        self.inner.searches.send_replace(snapshot);
        Ok(id)
    }

    pub fn delete_search(&self, id: i64) -> AppResult<()> {
        self.mutate_history(|c| history::delete_search(c, id))
    }

    pub fn delete_search_by_query(&self, query: &str) -> AppResult<()> {
        self.mutate_history(|c| history::delete_search_by_query(c, query))
    }

    pub fn clear_all_searches(&self) -> AppResult<()> {
        self.mutate_history(|c| {
            let n = history::clear_all_searches(c)?;
            log::ttlog(c, "history", "clear", &format!("Removed {} searches", n))?;
            Ok(n)
        })
    }

    fn mutate_history<F>(&self, func: F) -> AppResult<()>
    where
        F: FnOnce(&Connection) -> AppResult<usize>,
    {
        let snapshot = self.with_conn(|c| {
            func(c)?;
            history::load_recent_searches(c, RECENT_SEARCHES_LIMIT)
        })?;
        self.inner.searches.send_replace(snapshot);
        Ok(())
    }

    pub fn recent_searches_now(&self) -> Vec<SearchHistoryEntry> {
        self.inner.searches.borrow().clone()
    }

    pub fn watch_recent_searches(&self) -> watch::Receiver<Vec<SearchHistoryEntry>> {
        self.inner.searches.subscribe()
    }

    // ---------------------------
    // filter_preferences
    // ---------------------------

    pub fn save_filter_preferences(&self, category: &str, job_type: &str) -> AppResult<()> {
        let prefs = FilterPreferences {
            category: category.to_string(),
            job_type: job_type.to_string(),
            last_updated: now_millis(),
        };
        self.with_conn(|c| {
            filters::save_filter_preferences(c, &prefs)?;
            log::ttlog(
                c,
                "filters",
                "save",
                &format!("category='{}' job_type='{}'", category, job_type),
            )
        })?;
        self.inner.filters.send_replace(Some(prefs));
        Ok(())
    }

    pub fn clear_filter_preferences(&self) -> AppResult<()> {
        self.with_conn(filters::clear_filter_preferences)?;
        self.inner.filters.send_replace(None);
        Ok(())
    }

    pub fn filter_preferences_now(&self) -> Option<FilterPreferences> {
        self.inner.filters.borrow().clone()
    }

    // ---------------------------
    // internal log
    // ---------------------------

    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.with_conn(|c| log::ttlog(c, operation, target, message))
    }
}
