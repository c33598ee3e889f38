use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// PDF export over the flattened table, with an optional totals row.
pub(crate) fn export_pdf(
    headers: &[&str],
    rows: &[Vec<String>],
    totals: Option<&[String]>,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(title, headers, rows, totals);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
