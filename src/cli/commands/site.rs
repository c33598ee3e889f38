use crate::cli::parser::{Commands, SiteAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::site::SiteStatus;
use crate::ui::messages::success;
use crate::utils::colors::{GREEN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Site { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            SiteAction::Add { name } => {
                let id = queries::insert_site(conn, org, name)?;
                ttlog(conn, "site", name, "Site created")?;
                success(format!("Site '{}' created with id {}", name, id));
            }

            SiteAction::List { all } => {
                let sites = queries::list_sites(conn, org, *all)?;
                if sites.is_empty() {
                    println!("No sites.");
                    return Ok(());
                }

                for site in sites {
                    let status = match site.status {
                        SiteStatus::Active => format!("{GREEN}active{RESET}"),
                        SiteStatus::Completed => format!("{GREY}completed{RESET}"),
                    };
                    println!("[{}] {:<30} {}", site.id, site.name, status);
                }
            }

            SiteAction::Complete { id } => {
                let updated = queries::set_site_status(conn, org, *id, SiteStatus::Completed)?;
                if updated == 0 {
                    return Err(AppError::SiteNotFound(*id));
                }
                ttlog(conn, "site", &id.to_string(), "Site completed")?;
                success(format!("Site {} marked as completed.", id));
            }

            SiteAction::Reopen { id } => {
                let updated = queries::set_site_status(conn, org, *id, SiteStatus::Active)?;
                if updated == 0 {
                    return Err(AppError::SiteNotFound(*id));
                }
                ttlog(conn, "site", &id.to_string(), "Site reopened")?;
                success(format!("Site {} reopened.", id));
            }
        }
    }

    Ok(())
}
