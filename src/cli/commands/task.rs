use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, NewTask};
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskStatus;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RED, RESET};
use crate::utils::date::parse_date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            TaskAction::Add {
                title,
                date,
                site,
                worker,
                category,
                priority,
            } => {
                let d = parse_date_or_today(date.as_deref())?;

                if let Some(site_id) = site {
                    queries::get_site(conn, org, *site_id)?
                        .ok_or(AppError::SiteNotFound(*site_id))?;
                }
                if let Some(worker_id) = worker {
                    queries::get_worker(conn, org, *worker_id)?
                        .ok_or(AppError::WorkerNotFound(*worker_id))?;
                }

                let id = queries::insert_task(
                    conn,
                    org,
                    &NewTask {
                        site_id: *site,
                        worker_id: *worker,
                        date: d,
                        title,
                        category,
                        priority: *priority,
                    },
                )?;
                ttlog(conn, "task", title, "Task created")?;

                if *priority {
                    success(format!("Priority task '{}' created with id {}.", title, id));
                } else {
                    success(format!("Task '{}' created with id {}.", title, id));
                }
            }

            TaskAction::List { all } => {
                let tasks = queries::list_tasks(conn, org, *all)?;
                if tasks.is_empty() {
                    println!("No tasks.");
                    return Ok(());
                }

                for t in tasks {
                    let flag = if t.priority {
                        format!("{RED}!{RESET}")
                    } else {
                        " ".to_string()
                    };
                    let state = match t.status {
                        TaskStatus::Todo => "[ ]".to_string(),
                        TaskStatus::Done => format!("{GREY}[x]{RESET}"),
                    };
                    let cat = if t.category.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", t.category)
                    };
                    println!("{} {} [{}] {} {}{}", state, flag, t.id, t.date, t.title, cat);
                }
            }

            TaskAction::Done { id } => {
                let updated = queries::set_task_status(conn, org, *id, TaskStatus::Done)?;
                if updated == 0 {
                    return Err(AppError::TaskNotFound(*id));
                }
                ttlog(conn, "task", &id.to_string(), "Task done")?;
                success(format!("Task {} marked as done.", id));
            }

            TaskAction::Reopen { id } => {
                let updated = queries::set_task_status(conn, org, *id, TaskStatus::Todo)?;
                if updated == 0 {
                    return Err(AppError::TaskNotFound(*id));
                }
                ttlog(conn, "task", &id.to_string(), "Task reopened")?;
                success(format!("Task {} reopened.", id));
            }
        }
    }

    Ok(())
}
