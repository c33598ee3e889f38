//! Schema migrations.
//!
//! Every table is created with `IF NOT EXISTS`, then additive column
//! migrations run against databases created by older releases.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    create_base_schema(conn)?;
    migrate_workers_wage_visible(conn)?;
    migrate_tasks_priority(conn)?;
    Ok(())
}

fn create_base_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS organizations (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            subscription  TEXT NOT NULL DEFAULT 'trial',
            trial_expires TEXT
        );

        CREATE TABLE IF NOT EXISTS sites (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id INTEGER NOT NULL REFERENCES organizations(id),
            name   TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'active'
                   CHECK (status IN ('active', 'completed'))
        );

        CREATE TABLE IF NOT EXISTS workers (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id          INTEGER NOT NULL REFERENCES organizations(id),
            name            TEXT NOT NULL,
            role            TEXT NOT NULL DEFAULT 'employee'
                            CHECK (role IN ('admin', 'employee')),
            hourly_rate     REAL NOT NULL DEFAULT 0,
            active          INTEGER NOT NULL DEFAULT 1,
            fixed_job_title TEXT,
            wage_visible    INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS transactions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id      INTEGER NOT NULL REFERENCES organizations(id),
            tx_type     TEXT NOT NULL CHECK (tx_type IN ('invoice', 'expense')),
            amount      REAL NOT NULL,
            date        TEXT NOT NULL,
            category    TEXT NOT NULL DEFAULT 'Iné',
            paid        INTEGER NOT NULL DEFAULT 0,
            site_id     INTEGER REFERENCES sites(id),
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS attendance_logs (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id        INTEGER NOT NULL REFERENCES organizations(id),
            worker_id     INTEGER NOT NULL REFERENCES workers(id),
            site_id       INTEGER NOT NULL REFERENCES sites(id),
            date          TEXT NOT NULL,
            hours         REAL NOT NULL DEFAULT 0,
            pay_type      TEXT NOT NULL DEFAULT 'hourly'
                          CHECK (pay_type IN ('hourly', 'fixed')),
            fixed_amount  REAL,
            rate_snapshot REAL,
            description   TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS fuel_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id      INTEGER NOT NULL REFERENCES organizations(id),
            site_id     INTEGER NOT NULL REFERENCES sites(id),
            date        TEXT NOT NULL,
            amount      REAL NOT NULL,
            liters      REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS materials (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id      INTEGER NOT NULL REFERENCES organizations(id),
            site_id     INTEGER NOT NULL REFERENCES sites(id),
            date        TEXT NOT NULL,
            amount      REAL NOT NULL,
            quantity    REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS diary_records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id       INTEGER NOT NULL REFERENCES organizations(id),
            site_id      INTEGER NOT NULL REFERENCES sites(id),
            date         TEXT NOT NULL,
            weather      TEXT NOT NULL DEFAULT '',
            temp_morning REAL,
            temp_noon    REAL,
            equipment    TEXT NOT NULL DEFAULT '',
            notes        TEXT NOT NULL DEFAULT '',
            status       TEXT NOT NULL DEFAULT 'draft'
                         CHECK (status IN ('draft', 'signed')),
            UNIQUE (org_id, site_id, date)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id    INTEGER NOT NULL REFERENCES organizations(id),
            site_id   INTEGER REFERENCES sites(id),
            worker_id INTEGER REFERENCES workers(id),
            date      TEXT NOT NULL,
            title     TEXT NOT NULL,
            category  TEXT NOT NULL DEFAULT '',
            status    TEXT NOT NULL DEFAULT 'todo'
                      CHECK (status IN ('todo', 'done')),
            priority  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL,
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_org_date
            ON transactions (org_id, date);
        CREATE INDEX IF NOT EXISTS idx_attendance_org_date
            ON attendance_logs (org_id, date);
        CREATE INDEX IF NOT EXISTS idx_fuel_org_date
            ON fuel_logs (org_id, date);
        CREATE INDEX IF NOT EXISTS idx_materials_org_date
            ON materials (org_id, date);
        CREATE INDEX IF NOT EXISTS idx_diary_org_site_date
            ON diary_records (org_id, site_id, date);",
    )
    .map_err(|e| AppError::Migration(format!("base schema: {e}")))?;

    Ok(())
}

/// Returns true when `table` already has `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Databases created before 0.3.0 miss `workers.wage_visible`.
fn migrate_workers_wage_visible(conn: &Connection) -> AppResult<()> {
    if !has_column(conn, "workers", "wage_visible")? {
        conn.execute(
            "ALTER TABLE workers ADD COLUMN wage_visible INTEGER NOT NULL DEFAULT 1",
            [],
        )
        .map_err(|e| AppError::Migration(format!("workers.wage_visible: {e}")))?;
    }
    Ok(())
}

/// Priority used to be encoded as a '[!] ' title prefix.
/// Adds the dedicated column and converts legacy rows.
fn migrate_tasks_priority(conn: &Connection) -> AppResult<()> {
    if !has_column(conn, "tasks", "priority")? {
        conn.execute(
            "ALTER TABLE tasks ADD COLUMN priority INTEGER NOT NULL DEFAULT 0",
            [],
        )
        .map_err(|e| AppError::Migration(format!("tasks.priority: {e}")))?;

        conn.execute(
            "UPDATE tasks SET priority = 1, title = substr(title, 5)
             WHERE title LIKE '[!] %'",
            [],
        )
        .map_err(|e| AppError::Migration(format!("tasks legacy priority: {e}")))?;
    }
    Ok(())
}
