use crate::cli::parser::{Commands, OrgAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::organization::Subscription;
use crate::ui::messages::success;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Org { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        match action {
            OrgAction::Add { name } => {
                let trial_expires = today() + chrono::Duration::days(14);
                let id = queries::insert_org(conn, name, Subscription::Trial, Some(trial_expires))?;
                ttlog(conn, "org", name, "Organization created")?;
                success(format!(
                    "Organization '{}' created with id {} (trial until {})",
                    name, id, trial_expires
                ));
            }

            OrgAction::List => {
                let orgs = queries::list_orgs(conn)?;
                if orgs.is_empty() {
                    println!("No organizations. Run `stavlog org add <NAME>`.");
                    return Ok(());
                }

                for org in orgs {
                    let marker = if org.id == cfg.organization_id {
                        format!("{GREEN}*{RESET}")
                    } else {
                        " ".to_string()
                    };
                    let sub = match org.subscription {
                        Subscription::Trial => {
                            let until = org
                                .trial_expires
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| "?".into());
                            format!("{YELLOW}trial until {}{RESET}", until)
                        }
                        Subscription::Active => format!("{GREEN}active{RESET}"),
                        Subscription::Inactive => format!("{GREY}inactive{RESET}"),
                    };
                    println!("{} [{}] {:<30} {}", marker, org.id, org.name, sub);
                }
            }

            OrgAction::Use { id } => {
                let org = queries::get_org(conn, *id)?.ok_or(AppError::OrgNotFound(*id))?;

                // Config update is skipped in test mode, same as `init`.
                if !is_test {
                    let mut new_cfg = Config::load();
                    new_cfg.organization_id = org.id;
                    new_cfg.organization = org.name.clone();
                    new_cfg.save().map_err(|_| AppError::ConfigSave)?;
                }

                success(format!("Active organization is now '{}'", org.name));
            }
        }
    }

    Ok(())
}
