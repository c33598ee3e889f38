use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{LedgerFilter, Pager};
use crate::core::ledger;
use crate::core::period::Period;
use crate::core::summary;
use crate::core::wages;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ledger::EntryType;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, color_for_profit, colorize_amount};
use crate::utils::formatting::{format_amount, format_percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Finance {
        period,
        entry_type,
        site,
        category,
        search,
        page,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        //
        // 1) Resolve the period (default: current month)
        //
        let p = match period {
            Some(raw) => Period::parse(raw)?,
            None => Period::current_month(),
        };
        let (start, end) = p.resolve()?;

        //
        // 2) Fetch the four sources for the period
        //
        let transactions = queries::list_tx_between(conn, org, start, end)?;
        let attendance = queries::list_attendance_between(conn, org, start, end)?;
        let fuels = queries::list_fuel_between(conn, org, start, end)?;
        let materials = queries::list_materials_between(conn, org, start, end)?;

        // Archived workers still priced: their logs stay in the ledger.
        let workers = queries::list_workers(conn, org, true)?;

        //
        // 3) Aggregate wages, then normalize everything into one ledger
        //
        let wage_entries = wages::aggregate_wages(&attendance, &workers);
        let entries = ledger::normalize(&transactions, wage_entries, &fuels, &materials);

        //
        // 4) Apply in-memory filters
        //
        let filter = LedgerFilter {
            entry_type: entry_type.as_deref().and_then(EntryType::from_db_str),
            site_id: *site,
            category: category.clone(),
            search: search.clone(),
        };
        let filtered = filter.apply(&entries);

        //
        // 5) Summary: filtered period ledger + org-wide unpaid invoices
        //
        let (unpaid_total, unpaid_count) = queries::unpaid_invoices(conn, org)?;
        let summary = summary::summarize(&filtered, unpaid_total, unpaid_count);

        header(format!("Finance: {}", p.label()));

        if filtered.is_empty() {
            println!("No entries for this period and filter.\n");
        } else {
            //
            // 6) Paginate: each requested page widens the visible window
            //
            let mut pager = Pager::new(cfg.page_size);
            for _ in 1..*page {
                pager.advance();
            }

            let mut table = Table::new(vec![
                Column::new("Date", 10),
                Column::new("Amount", 14),
                Column::new("Category", 10),
                Column::new("Site", 5),
                Column::new("Src", 8),
                Column::new("Description", 34),
            ]);

            for e in pager.window(&filtered) {
                let signed = match e.entry_type {
                    EntryType::Income => format!("+{}", format_amount(e.amount, &cfg.currency)),
                    EntryType::Expense => format!("-{}", format_amount(e.amount, &cfg.currency)),
                };
                let site_str = e.site_id.map(|s| s.to_string()).unwrap_or_default();
                let desc = if e.paid {
                    e.description.clone()
                } else {
                    format!("{} [unpaid]", e.description)
                };
                table.add_row(vec![
                    e.date.to_string(),
                    signed,
                    e.category.clone(),
                    site_str,
                    e.origin.code().to_string(),
                    desc,
                ]);
            }

            // Color after rendering so ANSI codes do not break alignment.
            let rendered = table.render();
            let mut lines = rendered.lines();
            if let Some(head) = lines.next() {
                println!("{CYAN}{head}{RESET}");
            }
            if let Some(sep) = lines.next() {
                println!("{GREY}{sep}{RESET}");
            }
            for (line, e) in lines.zip(pager.window(&filtered)) {
                println!(
                    "{}",
                    colorize_amount(line, e.entry_type == EntryType::Income)
                );
            }

            if pager.has_more(&filtered) {
                println!(
                    "{GREY}… {} more rows, rerun with --page {}{RESET}",
                    filtered.len() - pager.visible(),
                    page + 1
                );
            }
            println!();
        }

        //
        // 7) Summary block
        //
        println!(
            "Income:  {}",
            colorize_amount(&format_amount(summary.income, &cfg.currency), true)
        );
        println!(
            "Expense: {}",
            colorize_amount(&format_amount(summary.expense, &cfg.currency), false)
        );
        println!(
            "Profit:  {}{}{}",
            color_for_profit(summary.profit),
            format_amount(summary.profit, &cfg.currency),
            RESET
        );

        if !summary.breakdown.is_empty() {
            println!("\n{CYAN}Expense breakdown:{RESET}");
            for cat in &summary.breakdown {
                println!(
                    "  {:<12} {:>14}  {:>6}",
                    cat.category,
                    format_amount(cat.amount, &cfg.currency),
                    format_percent(cat.percent)
                );
            }
        }

        if summary.unpaid_count > 0 {
            println!(
                "\n{YELLOW}⚠️  Unpaid invoices (all time): {} ({} open){RESET}",
                format_amount(summary.unpaid_total, &cfg.currency),
                summary.unpaid_count
            );
        }
    }

    Ok(())
}
