use crate::cli::parser::{Commands, MaterialAction};
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
    if let Commands::Material { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            MaterialAction::Add {
                amount,
                quantity,
                date,
                site,
                desc,
            } => {
                if *amount <= 0.0 {
                    return Err(AppError::InvalidAmount(amount.to_string()));
                }

                let d = parse_date_or_today(date.as_deref())?;

                queries::get_site(conn, org, *site)?.ok_or(AppError::SiteNotFound(*site))?;

                let id = queries::insert_material(conn, org, *site, d, *amount, *quantity, desc)?;
                ttlog(conn, "material", &id.to_string(), "Material purchase added")?;
                success(format!(
                    "Material purchase of {} added with id {}.",
                    format_amount(*amount, &cfg.currency),
                    id
                ));
            }

            MaterialAction::List { period } => {
                let p = match period {
                    Some(raw) => Period::parse(raw)?,
                    None => Period::current_month(),
                };
                let (start, end) = p.resolve()?;
                let rows = queries::list_materials_between(conn, org, start, end)?;

                if rows.is_empty() {
                    println!("No material purchases for {}.", p.label());
                    return Ok(());
                }

                println!("🧱 Material purchases for {}", p.label());
                let mut total = 0.0;
                for m in &rows {
                    total += m.amount;
                    println!(
                        "[{}] {} {:>12}  {}",
                        m.id,
                        m.date,
                        format_amount(m.amount, &cfg.currency),
                        m.description
                    );
                }
                println!("Total: {}", format_amount(total, &cfg.currency));
            }
        }
    }

    Ok(())
}
