//! All SQL lives here. Handlers never build query strings themselves.
//!
//! Every read and write is scoped to an organization id; no query may
//! cross tenants.

use crate::models::attendance::{AttendanceLog, PayType};
use crate::models::diary::{DiaryRecord, DiaryStatus};
use crate::models::fuel::FuelLog;
use crate::models::material::Material;
use crate::models::organization::{Organization, Subscription};
use crate::models::site::{Site, SiteStatus};
use crate::models::task::{Task, TaskStatus};
use crate::models::transaction::{Transaction, TxType};
use crate::models::worker::{Role, Worker};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};

fn decode_err(idx: usize, raw: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        format!("unknown value: {raw}").into(),
    )
}

fn date_col(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn opt_date_col(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
    }
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

fn map_org(row: &Row) -> rusqlite::Result<Organization> {
    let sub: String = row.get(2)?;
    Ok(Organization {
        id: row.get(0)?,
        name: row.get(1)?,
        subscription: Subscription::from_db_str(&sub),
        trial_expires: opt_date_col(row, 3)?,
    })
}

pub fn insert_org(
    conn: &Connection,
    name: &str,
    subscription: Subscription,
    trial_expires: Option<NaiveDate>,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO organizations (name, subscription, trial_expires)
         VALUES (?1, ?2, ?3)",
        params![
            name,
            subscription.to_db_str(),
            trial_expires.map(|d| d.format("%Y-%m-%d").to_string()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_org(conn: &Connection, id: i64) -> rusqlite::Result<Option<Organization>> {
    conn.query_row(
        "SELECT id, name, subscription, trial_expires
         FROM organizations WHERE id = ?1",
        params![id],
        map_org,
    )
    .map(Some)
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    })
}

pub fn list_orgs(conn: &Connection) -> rusqlite::Result<Vec<Organization>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, subscription, trial_expires
         FROM organizations ORDER BY id",
    )?;
    let rows = stmt.query_map([], map_org)?;
    rows.collect()
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

fn map_site(row: &Row) -> rusqlite::Result<Site> {
    let status: String = row.get(3)?;
    Ok(Site {
        id: row.get(0)?,
        org_id: row.get(1)?,
        name: row.get(2)?,
        status: SiteStatus::from_db_str(&status).ok_or_else(|| decode_err(3, &status))?,
    })
}

pub fn insert_site(conn: &Connection, org_id: i64, name: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO sites (org_id, name) VALUES (?1, ?2)",
        params![org_id, name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_site(conn: &Connection, org_id: i64, id: i64) -> rusqlite::Result<Option<Site>> {
    conn.query_row(
        "SELECT id, org_id, name, status FROM sites WHERE org_id = ?1 AND id = ?2",
        params![org_id, id],
        map_site,
    )
    .map(Some)
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    })
}

pub fn list_sites(
    conn: &Connection,
    org_id: i64,
    include_completed: bool,
) -> rusqlite::Result<Vec<Site>> {
    let sql = if include_completed {
        "SELECT id, org_id, name, status FROM sites WHERE org_id = ?1 ORDER BY id"
    } else {
        "SELECT id, org_id, name, status FROM sites
         WHERE org_id = ?1 AND status = 'active' ORDER BY id"
    };
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![org_id], map_site)?;
    rows.collect()
}

pub fn set_site_status(
    conn: &Connection,
    org_id: i64,
    id: i64,
    status: SiteStatus,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE sites SET status = ?3 WHERE org_id = ?1 AND id = ?2",
        params![org_id, id, status.to_db_str()],
    )
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

fn map_worker(row: &Row) -> rusqlite::Result<Worker> {
    let role: String = row.get(3)?;
    Ok(Worker {
        id: row.get(0)?,
        org_id: row.get(1)?,
        name: row.get(2)?,
        role: Role::from_db_str(&role).ok_or_else(|| decode_err(3, &role))?,
        hourly_rate: row.get(4)?,
        active: row.get(5)?,
        fixed_job_title: row.get(6)?,
        wage_visible: row.get(7)?,
    })
}

const WORKER_COLS: &str =
    "id, org_id, name, role, hourly_rate, active, fixed_job_title, wage_visible";

pub fn insert_worker(
    conn: &Connection,
    org_id: i64,
    name: &str,
    role: Role,
    hourly_rate: f64,
    fixed_job_title: Option<&str>,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO workers (org_id, name, role, hourly_rate, fixed_job_title)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![org_id, name, role.to_db_str(), hourly_rate, fixed_job_title],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_worker(conn: &Connection, org_id: i64, id: i64) -> rusqlite::Result<Option<Worker>> {
    conn.query_row(
        &format!("SELECT {WORKER_COLS} FROM workers WHERE org_id = ?1 AND id = ?2"),
        params![org_id, id],
        map_worker,
    )
    .map(Some)
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    })
}

pub fn list_workers(
    conn: &Connection,
    org_id: i64,
    include_archived: bool,
) -> rusqlite::Result<Vec<Worker>> {
    let sql = if include_archived {
        format!("SELECT {WORKER_COLS} FROM workers WHERE org_id = ?1 ORDER BY id")
    } else {
        format!(
            "SELECT {WORKER_COLS} FROM workers
             WHERE org_id = ?1 AND active = 1 ORDER BY id"
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![org_id], map_worker)?;
    rows.collect()
}

pub fn set_worker_rate(
    conn: &Connection,
    org_id: i64,
    id: i64,
    rate: f64,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE workers SET hourly_rate = ?3 WHERE org_id = ?1 AND id = ?2",
        params![org_id, id, rate],
    )
}

pub fn set_worker_active(
    conn: &Connection,
    org_id: i64,
    id: i64,
    active: bool,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE workers SET active = ?3 WHERE org_id = ?1 AND id = ?2",
        params![org_id, id, active],
    )
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

fn map_tx(row: &Row) -> rusqlite::Result<Transaction> {
    let tx_type: String = row.get(2)?;
    Ok(Transaction {
        id: row.get(0)?,
        org_id: row.get(1)?,
        tx_type: TxType::from_db_str(&tx_type).ok_or_else(|| decode_err(2, &tx_type))?,
        amount: row.get(3)?,
        date: date_col(row, 4)?,
        category: row.get(5)?,
        paid: row.get(6)?,
        site_id: row.get(7)?,
        description: row.get(8)?,
    })
}

const TX_COLS: &str = "id, org_id, tx_type, amount, date, category, paid, site_id, description";

pub struct NewTransaction<'a> {
    pub tx_type: TxType,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: &'a str,
    pub paid: bool,
    pub site_id: Option<i64>,
    pub description: &'a str,
}

pub fn insert_tx(conn: &Connection, org_id: i64, tx: &NewTransaction) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO transactions (org_id, tx_type, amount, date, category, paid, site_id, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            org_id,
            tx.tx_type.to_db_str(),
            tx.amount,
            tx.date.format("%Y-%m-%d").to_string(),
            tx.category,
            tx.paid,
            tx.site_id,
            tx.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_tx(conn: &Connection, org_id: i64, id: i64) -> rusqlite::Result<Option<Transaction>> {
    conn.query_row(
        &format!("SELECT {TX_COLS} FROM transactions WHERE org_id = ?1 AND id = ?2"),
        params![org_id, id],
        map_tx,
    )
    .map(Some)
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    })
}

pub fn list_tx_between(
    conn: &Connection,
    org_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TX_COLS} FROM transactions
         WHERE org_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date, id"
    ))?;
    let rows = stmt.query_map(
        params![
            org_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_tx,
    )?;
    rows.collect()
}

pub fn set_tx_paid(conn: &Connection, org_id: i64, id: i64, paid: bool) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE transactions SET paid = ?3 WHERE org_id = ?1 AND id = ?2",
        params![org_id, id, paid],
    )
}

pub fn delete_tx(conn: &Connection, org_id: i64, id: i64) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM transactions WHERE org_id = ?1 AND id = ?2",
        params![org_id, id],
    )
}

/// Open receivables for the whole organization.
/// Deliberately unbounded by date: an invoice from last year is still owed.
pub fn unpaid_invoices(conn: &Connection, org_id: i64) -> rusqlite::Result<(f64, i64)> {
    conn.query_row(
        "SELECT COALESCE(SUM(amount), 0), COUNT(*)
         FROM transactions
         WHERE org_id = ?1 AND tx_type = 'invoice' AND paid = 0",
        params![org_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

fn map_attendance(row: &Row) -> rusqlite::Result<AttendanceLog> {
    let pay_type: String = row.get(6)?;
    Ok(AttendanceLog {
        id: row.get(0)?,
        org_id: row.get(1)?,
        worker_id: row.get(2)?,
        site_id: row.get(3)?,
        date: date_col(row, 4)?,
        hours: row.get(5)?,
        pay_type: PayType::from_db_str(&pay_type).ok_or_else(|| decode_err(6, &pay_type))?,
        fixed_amount: row.get(7)?,
        rate_snapshot: row.get(8)?,
        description: row.get(9)?,
    })
}

const ATT_COLS: &str =
    "id, org_id, worker_id, site_id, date, hours, pay_type, fixed_amount, rate_snapshot, description";

pub struct NewAttendance<'a> {
    pub worker_id: i64,
    pub site_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub pay_type: PayType,
    pub fixed_amount: Option<f64>,
    pub rate_snapshot: Option<f64>,
    pub description: &'a str,
}

pub fn insert_attendance(
    conn: &Connection,
    org_id: i64,
    log: &NewAttendance,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO attendance_logs
            (org_id, worker_id, site_id, date, hours, pay_type, fixed_amount, rate_snapshot, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            org_id,
            log.worker_id,
            log.site_id,
            log.date.format("%Y-%m-%d").to_string(),
            log.hours,
            log.pay_type.to_db_str(),
            log.fixed_amount,
            log.rate_snapshot,
            log.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_attendance_between(
    conn: &Connection,
    org_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<AttendanceLog>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ATT_COLS} FROM attendance_logs
         WHERE org_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date, id"
    ))?;
    let rows = stmt.query_map(
        params![
            org_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_attendance,
    )?;
    rows.collect()
}

pub fn list_attendance_site_between(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<AttendanceLog>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ATT_COLS} FROM attendance_logs
         WHERE org_id = ?1 AND site_id = ?2 AND date BETWEEN ?3 AND ?4
         ORDER BY date, id"
    ))?;
    let rows = stmt.query_map(
        params![
            org_id,
            site_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_attendance,
    )?;
    rows.collect()
}

// ---------------------------------------------------------------------------
// Fuel
// ---------------------------------------------------------------------------

fn map_fuel(row: &Row) -> rusqlite::Result<FuelLog> {
    Ok(FuelLog {
        id: row.get(0)?,
        org_id: row.get(1)?,
        site_id: row.get(2)?,
        date: date_col(row, 3)?,
        amount: row.get(4)?,
        liters: row.get(5)?,
        description: row.get(6)?,
    })
}

pub fn insert_fuel(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    date: NaiveDate,
    amount: f64,
    liters: f64,
    description: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO fuel_logs (org_id, site_id, date, amount, liters, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            org_id,
            site_id,
            date.format("%Y-%m-%d").to_string(),
            amount,
            liters,
            description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_fuel_between(
    conn: &Connection,
    org_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<FuelLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, org_id, site_id, date, amount, liters, description
         FROM fuel_logs
         WHERE org_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map(
        params![
            org_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_fuel,
    )?;
    rows.collect()
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

fn map_material(row: &Row) -> rusqlite::Result<Material> {
    Ok(Material {
        id: row.get(0)?,
        org_id: row.get(1)?,
        site_id: row.get(2)?,
        date: date_col(row, 3)?,
        amount: row.get(4)?,
        quantity: row.get(5)?,
        description: row.get(6)?,
    })
}

pub fn insert_material(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    date: NaiveDate,
    amount: f64,
    quantity: f64,
    description: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO materials (org_id, site_id, date, amount, quantity, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            org_id,
            site_id,
            date.format("%Y-%m-%d").to_string(),
            amount,
            quantity,
            description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_materials_between(
    conn: &Connection,
    org_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<Material>> {
    let mut stmt = conn.prepare(
        "SELECT id, org_id, site_id, date, amount, quantity, description
         FROM materials
         WHERE org_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map(
        params![
            org_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_material,
    )?;
    rows.collect()
}

pub fn list_materials_site_between(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<Material>> {
    let mut stmt = conn.prepare(
        "SELECT id, org_id, site_id, date, amount, quantity, description
         FROM materials
         WHERE org_id = ?1 AND site_id = ?2 AND date BETWEEN ?3 AND ?4
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map(
        params![
            org_id,
            site_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_material,
    )?;
    rows.collect()
}

// ---------------------------------------------------------------------------
// Diary
// ---------------------------------------------------------------------------

fn map_diary(row: &Row) -> rusqlite::Result<DiaryRecord> {
    let status: String = row.get(9)?;
    Ok(DiaryRecord {
        id: row.get(0)?,
        org_id: row.get(1)?,
        site_id: row.get(2)?,
        date: date_col(row, 3)?,
        weather: row.get(4)?,
        temp_morning: row.get(5)?,
        temp_noon: row.get(6)?,
        equipment: row.get(7)?,
        notes: row.get(8)?,
        status: DiaryStatus::from_db_str(&status).ok_or_else(|| decode_err(9, &status))?,
    })
}

const DIARY_COLS: &str =
    "id, org_id, site_id, date, weather, temp_morning, temp_noon, equipment, notes, status";

pub fn get_diary(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    date: NaiveDate,
) -> rusqlite::Result<Option<DiaryRecord>> {
    conn.query_row(
        &format!(
            "SELECT {DIARY_COLS} FROM diary_records
             WHERE org_id = ?1 AND site_id = ?2 AND date = ?3"
        ),
        params![org_id, site_id, date.format("%Y-%m-%d").to_string()],
        map_diary,
    )
    .map(Some)
    .or_else(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    })
}

pub fn insert_diary(conn: &Connection, record: &DiaryRecord) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO diary_records
            (org_id, site_id, date, weather, temp_morning, temp_noon, equipment, notes, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.org_id,
            record.site_id,
            record.date.format("%Y-%m-%d").to_string(),
            record.weather,
            record.temp_morning,
            record.temp_noon,
            record.equipment,
            record.notes,
            record.status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_diary(conn: &Connection, record: &DiaryRecord) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE diary_records
         SET weather = ?2, temp_morning = ?3, temp_noon = ?4,
             equipment = ?5, notes = ?6
         WHERE id = ?1",
        params![
            record.id,
            record.weather,
            record.temp_morning,
            record.temp_noon,
            record.equipment,
            record.notes,
        ],
    )
}

pub fn set_diary_status(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    date: NaiveDate,
    status: DiaryStatus,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE diary_records SET status = ?4
         WHERE org_id = ?1 AND site_id = ?2 AND date = ?3",
        params![
            org_id,
            site_id,
            date.format("%Y-%m-%d").to_string(),
            status.to_db_str(),
        ],
    )
}

pub fn list_diary_site_between(
    conn: &Connection,
    org_id: i64,
    site_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<DiaryRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {DIARY_COLS} FROM diary_records
         WHERE org_id = ?1 AND site_id = ?2 AND date BETWEEN ?3 AND ?4
         ORDER BY date"
    ))?;
    let rows = stmt.query_map(
        params![
            org_id,
            site_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_diary,
    )?;
    rows.collect()
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

fn map_task(row: &Row) -> rusqlite::Result<Task> {
    let status: String = row.get(7)?;
    Ok(Task {
        id: row.get(0)?,
        org_id: row.get(1)?,
        site_id: row.get(2)?,
        worker_id: row.get(3)?,
        date: date_col(row, 4)?,
        title: row.get(5)?,
        category: row.get(6)?,
        status: TaskStatus::from_db_str(&status).ok_or_else(|| decode_err(7, &status))?,
        priority: row.get(8)?,
    })
}

const TASK_COLS: &str = "id, org_id, site_id, worker_id, date, title, category, status, priority";

pub struct NewTask<'a> {
    pub site_id: Option<i64>,
    pub worker_id: Option<i64>,
    pub date: NaiveDate,
    pub title: &'a str,
    pub category: &'a str,
    pub priority: bool,
}

pub fn insert_task(conn: &Connection, org_id: i64, task: &NewTask) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO tasks (org_id, site_id, worker_id, date, title, category, priority)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            org_id,
            task.site_id,
            task.worker_id,
            task.date.format("%Y-%m-%d").to_string(),
            task.title,
            task.category,
            task.priority,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Priority tasks first, then by date, then by id.
pub fn list_tasks(
    conn: &Connection,
    org_id: i64,
    include_done: bool,
) -> rusqlite::Result<Vec<Task>> {
    let sql = if include_done {
        format!(
            "SELECT {TASK_COLS} FROM tasks WHERE org_id = ?1
             ORDER BY priority DESC, date, id"
        )
    } else {
        format!(
            "SELECT {TASK_COLS} FROM tasks
             WHERE org_id = ?1 AND status = 'todo'
             ORDER BY priority DESC, date, id"
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![org_id], map_task)?;
    rows.collect()
}

pub fn set_task_status(
    conn: &Connection,
    org_id: i64,
    id: i64,
    status: TaskStatus,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE tasks SET status = ?3 WHERE org_id = ?1 AND id = ?2",
        params![org_id, id, status.to_db_str()],
    )
}
