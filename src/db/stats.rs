use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const COUNTED_TABLES: [&str; 8] = [
    "sites",
    "workers",
    "transactions",
    "attendance_logs",
    "fuel_logs",
    "materials",
    "diary_records",
    "tasks",
];

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in COUNTED_TABLES {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        println!("    {:<16} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) LEDGER DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT MIN(date) FROM (
                SELECT date FROM transactions
                UNION ALL SELECT date FROM attendance_logs
                UNION ALL SELECT date FROM fuel_logs
                UNION ALL SELECT date FROM materials
            )",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(date) FROM (
                SELECT date FROM transactions
                UNION ALL SELECT date FROM attendance_logs
                UNION ALL SELECT date FROM fuel_logs
                UNION ALL SELECT date FROM materials
            )",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Ledger date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
