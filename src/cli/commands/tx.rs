use crate::cli::parser::{Commands, TxAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, NewTransaction};
use crate::errors::{AppError, AppResult};
use crate::models::transaction::{self, TxType};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use crate::utils::date::parse_date_or_today;
use crate::utils::formatting::format_amount;

use crate::core::period::Period;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tx { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            TxAction::Add {
                amount,
                kind,
                date,
                category,
                paid,
                site,
                desc,
            } => {
                if *amount <= 0.0 {
                    return Err(AppError::InvalidAmount(amount.to_string()));
                }

                let tx_type = match kind.as_str() {
                    "invoice" => TxType::Invoice,
                    _ => TxType::Expense,
                };
                let d = parse_date_or_today(date.as_deref())?;

                if let Some(site_id) = site {
                    queries::get_site(conn, org, *site_id)?
                        .ok_or(AppError::SiteNotFound(*site_id))?;
                }

                let category = category
                    .clone()
                    .unwrap_or_else(|| transaction::CAT_OTHER.to_string());

                // Free-form column, but a typo silently starts a new
                // breakdown bucket, so flag anything non-canonical.
                if !transaction::CATEGORIES.contains(&category.as_str()) {
                    warning(format!(
                        "Unknown category '{}' (canonical: {})",
                        category,
                        transaction::CATEGORIES.join(", ")
                    ));
                }

                let id = queries::insert_tx(
                    conn,
                    org,
                    &NewTransaction {
                        tx_type,
                        amount: *amount,
                        date: d,
                        category: &category,
                        paid: *paid,
                        site_id: *site,
                        description: desc,
                    },
                )?;
                ttlog(conn, "tx", &id.to_string(), "Transaction added")?;

                let label = match tx_type {
                    TxType::Invoice => "Invoice",
                    TxType::Expense => "Expense",
                };
                success(format!(
                    "{} of {} added with id {} ({}, {})",
                    label,
                    format_amount(*amount, &cfg.currency),
                    id,
                    category,
                    d
                ));
            }

            TxAction::List { period } => {
                let p = match period {
                    Some(raw) => Period::parse(raw)?,
                    None => Period::current_month(),
                };
                let (start, end) = p.resolve()?;
                let txs = queries::list_tx_between(conn, org, start, end)?;

                if txs.is_empty() {
                    println!("No transactions for {}.", p.label());
                    return Ok(());
                }

                println!("📅 Transactions for {}", p.label());
                for tx in &txs {
                    let (sign, color) = match tx.tx_type {
                        TxType::Invoice => ("+", GREEN),
                        TxType::Expense => ("-", RED),
                    };
                    let paid = if tx.paid {
                        String::new()
                    } else {
                        format!(" {YELLOW}[unpaid]{RESET}")
                    };
                    println!(
                        "[{}] {} {}{}{}{} {:<10} {}{}",
                        tx.id,
                        tx.date,
                        color,
                        sign,
                        format_amount(tx.amount, &cfg.currency),
                        RESET,
                        tx.category,
                        tx.description,
                        paid
                    );
                }
            }

            TxAction::Paid { id } => {
                let tx = queries::get_tx(conn, org, *id)?.ok_or(AppError::TxNotFound(*id))?;
                queries::set_tx_paid(conn, org, *id, !tx.paid)?;
                ttlog(conn, "tx", &id.to_string(), "Paid flag toggled")?;

                if tx.paid {
                    success(format!("Transaction {} marked as unpaid.", id));
                } else {
                    success(format!("Transaction {} marked as paid.", id));
                }
            }

            TxAction::Del { id } => {
                let tx = queries::get_tx(conn, org, *id)?.ok_or(AppError::TxNotFound(*id))?;

                let prompt = format!(
                    "Delete transaction #{} ({} on {})? This action is irreversible.",
                    id,
                    format_amount(tx.amount, &cfg.currency),
                    tx.date
                );
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                queries::delete_tx(conn, org, *id)?;
                ttlog(conn, "tx", &id.to_string(), "Transaction deleted")?;
                success(format!("Transaction {} deleted.", id));
            }
        }
    }

    Ok(())
}
