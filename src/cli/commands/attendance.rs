use crate::cli::parser::{AttAction, Commands};
use crate::config::Config;
use crate::core::period::Period;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, NewAttendance};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::PayType;
use crate::ui::messages::success;
use crate::utils::date::parse_date_or_today;
use crate::utils::formatting::{format_amount, format_hours};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Att { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            AttAction::Add {
                worker,
                site,
                date,
                hours,
                fixed,
                desc,
            } => {
                let w = queries::get_worker(conn, org, *worker)?
                    .ok_or(AppError::WorkerNotFound(*worker))?;
                queries::get_site(conn, org, *site)?.ok_or(AppError::SiteNotFound(*site))?;

                let d = parse_date_or_today(date.as_deref())?;

                // The rate is frozen at log time so later raises do not
                // rewrite past wages.
                let (pay_type, fixed_amount, rate_snapshot) = match fixed {
                    Some(amount) => (PayType::Fixed, Some(*amount), None),
                    None => (PayType::Hourly, None, Some(w.hourly_rate)),
                };

                queries::insert_attendance(
                    conn,
                    org,
                    &NewAttendance {
                        worker_id: *worker,
                        site_id: *site,
                        date: d,
                        hours: *hours,
                        pay_type,
                        fixed_amount,
                        rate_snapshot,
                        description: desc,
                    },
                )?;
                ttlog(conn, "att", &w.name, "Attendance logged")?;

                let pay = match fixed {
                    Some(amount) => format_amount(*amount, &cfg.currency),
                    None => format!(
                        "{} × {}",
                        format_hours(*hours),
                        format_amount(w.hourly_rate, &cfg.currency)
                    ),
                };
                success(format!("Logged {} on {} ({}).", w.name, d, pay));
            }

            AttAction::List { period, site } => {
                let p = match period {
                    Some(raw) => Period::parse(raw)?,
                    None => Period::current_month(),
                };
                let (start, end) = p.resolve()?;

                let logs = match site {
                    Some(site_id) => {
                        queries::list_attendance_site_between(conn, org, *site_id, start, end)?
                    }
                    None => queries::list_attendance_between(conn, org, start, end)?,
                };

                if logs.is_empty() {
                    println!("No attendance logs for {}.", p.label());
                    return Ok(());
                }

                let workers = queries::list_workers(conn, org, true)?;
                let name_of = |id: i64| {
                    workers
                        .iter()
                        .find(|w| w.id == id)
                        .map(|w| w.name.clone())
                        .unwrap_or_else(|| format!("worker #{id}"))
                };

                let mut table = Table::new(vec![
                    Column::new("Date", 10),
                    Column::new("Worker", 25),
                    Column::new("Site", 6),
                    Column::new("Hours", 8),
                    Column::new("Pay", 14),
                    Column::new("Description", 30),
                ]);

                let mut total_hours = 0.0;
                for log in &logs {
                    total_hours += log.hours;
                    let pay = match log.pay_type {
                        PayType::Fixed => {
                            format_amount(log.fixed_amount.unwrap_or(0.0), &cfg.currency)
                        }
                        PayType::Hourly => format_amount(
                            log.hours * log.rate_snapshot.unwrap_or(0.0),
                            &cfg.currency,
                        ),
                    };
                    table.add_row(vec![
                        log.date.to_string(),
                        name_of(log.worker_id),
                        log.site_id.to_string(),
                        format_hours(log.hours),
                        pay,
                        log.description.clone(),
                    ]);
                }

                println!("📅 Attendance for {}", p.label());
                println!("{}", table.render());
                println!(
                    "Total: {} rows, {}",
                    logs.len(),
                    format_hours(total_hours)
                );
            }
        }
    }

    Ok(())
}
