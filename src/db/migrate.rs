use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema steps. Each one is applied once and then recorded in the
/// `log` table as `migration_applied` with its version as target.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20251018_0001_create_saved_jobs",
        "Created saved_jobs table",
        r#"
        CREATE TABLE IF NOT EXISTS saved_jobs (
            id            INTEGER PRIMARY KEY,
            title         TEXT NOT NULL,
            company_name  TEXT NOT NULL,
            company_logo  TEXT NOT NULL DEFAULT '',
            location      TEXT NOT NULL DEFAULT '',
            salary        TEXT,
            description   TEXT NOT NULL DEFAULT '',
            category      TEXT NOT NULL DEFAULT '',
            job_type      TEXT NOT NULL DEFAULT '',
            tags          TEXT NOT NULL DEFAULT '',
            posted_date   TEXT NOT NULL DEFAULT '',
            apply_url     TEXT NOT NULL DEFAULT '',
            saved_at      INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_saved_jobs_saved_at ON saved_jobs(saved_at);
        "#,
    ),
    (
        "20251018_0002_create_search_history",
        "Created search_history table",
        r#"
        CREATE TABLE IF NOT EXISTS search_history (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            search_query  TEXT NOT NULL,
            timestamp     INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_search_history_ts ON search_history(timestamp);
        "#,
    ),
    (
        "20251018_0003_create_filter_preferences",
        "Created filter_preferences table",
        r#"
        CREATE TABLE IF NOT EXISTS filter_preferences (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            category      TEXT NOT NULL DEFAULT '',
            job_type      TEXT NOT NULL DEFAULT '',
            last_updated  INTEGER NOT NULL
        );
        "#,
    ),
];

/// Ensure that the `log` table exists; migration markers live there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded in the `log` table.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
/// Returns how many steps were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;
        tx.commit()?;

        tracing::info!(version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert_eq!(applied_migrations(&conn).unwrap().len(), MIGRATIONS.len());
    }
}
