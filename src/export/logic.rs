use crate::config::Config;
use crate::core::ledger;
use crate::core::period::Period;
use crate::core::wages;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{
    DiaryExport, LedgerExport, diary_headers, diary_to_table, ledger_headers, ledger_to_table,
};
use crate::models::ledger::EntryType;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use std::io;
use std::path::Path;

/// High-level export entry point: ledger by default, site diary with
/// `--diary`.
pub struct ExportLogic;

impl ExportLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        diary: bool,
        site: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let p = match period {
            Some(raw) => Period::parse(raw)?,
            None => Period::All,
        };
        let (start, end) = p.resolve()?;

        if diary {
            let site_id = site.ok_or_else(|| {
                AppError::Export("--diary export requires --site".to_string())
            })?;
            Self::export_diary(pool, cfg, format, path, &p, site_id, start, end)
        } else {
            Self::export_ledger(pool, cfg, format, path, &p, start, end)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn export_ledger(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        path: &Path,
        period: &Period,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> AppResult<()> {
        let conn = &pool.conn;
        let org = cfg.organization_id;

        let transactions = queries::list_tx_between(conn, org, start, end)?;
        let attendance = queries::list_attendance_between(conn, org, start, end)?;
        let fuels = queries::list_fuel_between(conn, org, start, end)?;
        let materials = queries::list_materials_between(conn, org, start, end)?;
        let workers = queries::list_workers(conn, org, true)?;

        let wage_entries = wages::aggregate_wages(&attendance, &workers);
        let entries = ledger::normalize(&transactions, wage_entries, &fuels, &materials);

        if entries.is_empty() {
            warning("No ledger entries found for the selected period.");
            return Ok(());
        }

        let rows: Vec<LedgerExport> = entries.iter().map(LedgerExport::from_entry).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&ledger_headers(), &ledger_to_table(&rows), path)?,
            ExportFormat::Pdf => {
                let title = format!("Finance ledger: {}", period.label());

                let income: f64 = entries
                    .iter()
                    .filter(|e| e.entry_type == EntryType::Income)
                    .map(|e| e.amount)
                    .sum();
                let expense: f64 = entries
                    .iter()
                    .filter(|e| e.entry_type == EntryType::Expense)
                    .map(|e| e.amount)
                    .sum();

                let totals = vec![
                    "Totals".to_string(),
                    String::new(),
                    format!("{:+.2}", income - expense),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    format!("income {income:.2} / expense {expense:.2}"),
                ];

                export_pdf(
                    &ledger_headers(),
                    &ledger_to_table(&rows),
                    Some(&totals),
                    path,
                    &title,
                )?
            }
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn export_diary(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        path: &Path,
        period: &Period,
        site_id: i64,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> AppResult<()> {
        let conn = &pool.conn;
        let org = cfg.organization_id;

        let site = queries::get_site(conn, org, site_id)?
            .ok_or(AppError::SiteNotFound(site_id))?;

        let records = queries::list_diary_site_between(conn, org, site_id, start, end)?;

        if records.is_empty() {
            warning("No diary records found for the selected period.");
            return Ok(());
        }

        let rows: Vec<DiaryExport> = records.iter().map(DiaryExport::from_record).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&diary_headers(), &diary_to_table(&rows), path)?,
            ExportFormat::Pdf => {
                let title = format!("Site diary: {} ({})", site.name, period.label());
                export_pdf(
                    &diary_headers(),
                    &diary_to_table(&rows),
                    None,
                    path,
                    &title,
                )?
            }
        }

        Ok(())
    }
}
