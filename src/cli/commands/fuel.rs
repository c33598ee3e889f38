use crate::cli::parser::{Commands, FuelAction};
use crate::config::Config;
use crate::core::period::Period;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date_or_today;
use crate::utils::formatting::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fuel { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            FuelAction::Add {
                amount,
                liters,
                date,
                site,
                desc,
            } => {
                if *amount <= 0.0 {
                    return Err(AppError::InvalidAmount(amount.to_string()));
                }

                let d = parse_date_or_today(date.as_deref())?;

                queries::get_site(conn, org, *site)?.ok_or(AppError::SiteNotFound(*site))?;

                let id = queries::insert_fuel(conn, org, *site, d, *amount, *liters, desc)?;
                ttlog(conn, "fuel", &id.to_string(), "Fuel purchase added")?;
                success(format!(
                    "Fuel purchase of {} ({:.1} l) added with id {}.",
                    format_amount(*amount, &cfg.currency),
                    liters,
                    id
                ));
            }

            FuelAction::List { period } => {
                let p = match period {
                    Some(raw) => Period::parse(raw)?,
                    None => Period::current_month(),
                };
                let (start, end) = p.resolve()?;
                let logs = queries::list_fuel_between(conn, org, start, end)?;

                if logs.is_empty() {
                    println!("No fuel purchases for {}.", p.label());
                    return Ok(());
                }

                println!("⛽ Fuel purchases for {}", p.label());
                let mut total = 0.0;
                for log in &logs {
                    total += log.amount;
                    println!(
                        "[{}] {} {:>12} {:>8.1} l  {}",
                        log.id,
                        log.date,
                        format_amount(log.amount, &cfg.currency),
                        log.liters,
                        log.description
                    );
                }
                println!("Total: {}", format_amount(total, &cfg.currency));
            }
        }
    }

    Ok(())
}
