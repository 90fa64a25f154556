//! Queries on the `saved_jobs` table.

use crate::errors::AppResult;
use crate::models::job::Job;
use crate::models::saved_job::SavedJob;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<SavedJob> {
    let tags: String = row.get("tags")?;

    Ok(SavedJob {
        job: Job {
            id: row.get("id")?,
            title: row.get("title")?,
            company_name: row.get("company_name")?,
            company_logo: row.get("company_logo")?,
            location: row.get("location")?,
            salary: row.get("salary")?,
            description: row.get("description")?,
            category: row.get("category")?,
            job_type: row.get("job_type")?,
            tags: Job::split_tags(&tags),
            posted_date: row.get("posted_date")?,
            apply_url: row.get("apply_url")?,
        },
        saved_at: row.get("saved_at")?,
    })
}

/// Upsert: bookmarking an already saved job refreshes its row.
pub fn insert_job(conn: &Connection, job: &Job, saved_at: i64) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO saved_jobs
            (id, title, company_name, company_logo, location, salary, description,
             category, job_type, tags, posted_date, apply_url, saved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            job.id,
            job.title,
            job.company_name,
            job.company_logo,
            job.location,
            job.salary,
            job.description,
            job.category,
            job.job_type,
            job.tags_joined(),
            job.posted_date,
            job.apply_url,
            saved_at,
        ],
    )?;
    Ok(())
}

pub fn get_job_by_id(conn: &Connection, id: i64) -> AppResult<Option<SavedJob>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM saved_jobs WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Most recently saved first.
pub fn load_saved_jobs(conn: &Connection) -> AppResult<Vec<SavedJob>> {
    let mut stmt =
        conn.prepare_cached("SELECT * FROM saved_jobs ORDER BY saved_at DESC, rowid DESC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn is_job_saved(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT EXISTS(SELECT 1 FROM saved_jobs WHERE id = ?1)")?;
    Ok(stmt.query_row([id], |row| row.get(0))?)
}

/// Returns the number of deleted rows (0 when the id was not saved).
pub fn delete_job_by_id(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM saved_jobs WHERE id = ?1", [id])?)
}

pub fn delete_all_jobs(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM saved_jobs", [])?)
}

pub fn count_saved_jobs(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM saved_jobs", [], |row| row.get(0))?)
}
