use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::worker::Role;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, MAGENTA, RESET};
use crate::utils::formatting::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            WorkerAction::Add {
                name,
                rate,
                admin,
                job_title,
            } => {
                let role = if *admin { Role::Admin } else { Role::Employee };
                let id =
                    queries::insert_worker(conn, org, name, role, *rate, job_title.as_deref())?;
                ttlog(conn, "worker", name, "Worker created")?;
                success(format!(
                    "Worker '{}' created with id {} ({}/h)",
                    name,
                    id,
                    format_amount(*rate, &cfg.currency)
                ));
            }

            WorkerAction::List { all } => {
                let workers = queries::list_workers(conn, org, *all)?;
                if workers.is_empty() {
                    println!("No workers.");
                    return Ok(());
                }

                for w in workers {
                    let role = match w.role {
                        Role::Admin => format!("{MAGENTA}admin{RESET}"),
                        Role::Employee => "employee".to_string(),
                    };
                    let archived = if w.active {
                        String::new()
                    } else {
                        format!(" {GREY}(archived){RESET}")
                    };
                    let title = w
                        .fixed_job_title
                        .as_deref()
                        .map(|t| format!(" [{}]", t))
                        .unwrap_or_default();
                    println!(
                        "[{}] {:<25} {:<18} {}/h{}{}",
                        w.id,
                        w.name,
                        role,
                        format_amount(w.hourly_rate, &cfg.currency),
                        title,
                        archived
                    );
                }
            }

            WorkerAction::Rate { id, rate } => {
                let updated = queries::set_worker_rate(conn, org, *id, *rate)?;
                if updated == 0 {
                    return Err(AppError::WorkerNotFound(*id));
                }
                ttlog(conn, "worker", &id.to_string(), "Hourly rate changed")?;
                success(format!(
                    "Worker {} hourly rate set to {}.",
                    id,
                    format_amount(*rate, &cfg.currency)
                ));
            }

            WorkerAction::Archive { id } => {
                let updated = queries::set_worker_active(conn, org, *id, false)?;
                if updated == 0 {
                    return Err(AppError::WorkerNotFound(*id));
                }
                ttlog(conn, "worker", &id.to_string(), "Worker archived")?;
                success(format!("Worker {} archived. History is kept.", id));
            }

            WorkerAction::Restore { id } => {
                let updated = queries::set_worker_active(conn, org, *id, true)?;
                if updated == 0 {
                    return Err(AppError::WorkerNotFound(*id));
                }
                ttlog(conn, "worker", &id.to_string(), "Worker restored")?;
                success(format!("Worker {} restored.", id));
            }
        }
    }

    Ok(())
}
