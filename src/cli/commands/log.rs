use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;

        let mut stmt = pool.conn.prepare(
            "SELECT date, operation, target, message
             FROM log ORDER BY id DESC LIMIT 100",
        )?;
        let rows: Vec<(String, String, String, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<_, _>>()?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 32),
            Column::new("Operation", 10),
            Column::new("Target", 30),
            Column::new("Message", 40),
        ]);
        for (date, op, target, message) in rows {
            table.add_row(vec![date, op, target, message]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
