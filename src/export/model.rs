use crate::models::diary::DiaryRecord;
use crate::models::ledger::LedgerEntry;
use serde::Serialize;

/// Flat row for ledger exports.
#[derive(Serialize, Clone, Debug)]
pub struct LedgerExport {
    pub date: String,
    pub entry_type: String,
    pub amount: f64,
    pub category: String,
    pub site: String,
    pub origin: String,
    pub paid: bool,
    pub description: String,
}

impl LedgerExport {
    pub fn from_entry(e: &LedgerEntry) -> Self {
        Self {
            date: e.date.format("%Y-%m-%d").to_string(),
            entry_type: e.entry_type.to_db_str().to_string(),
            amount: e.amount,
            category: e.category.clone(),
            site: e.site_id.map(|s| s.to_string()).unwrap_or_default(),
            origin: e.origin.code().to_string(),
            paid: e.paid,
            description: e.description.clone(),
        }
    }
}

pub(crate) fn ledger_headers() -> Vec<&'static str> {
    vec![
        "date",
        "entry_type",
        "amount",
        "category",
        "site",
        "origin",
        "paid",
        "description",
    ]
}

pub(crate) fn ledger_to_row(e: &LedgerExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.entry_type.clone(),
        format!("{:.2}", e.amount),
        e.category.clone(),
        e.site.clone(),
        e.origin.clone(),
        e.paid.to_string(),
        e.description.clone(),
    ]
}

pub(crate) fn ledger_to_table(entries: &[LedgerExport]) -> Vec<Vec<String>> {
    entries.iter().map(ledger_to_row).collect()
}

/// Flat row for site-diary exports.
#[derive(Serialize, Clone, Debug)]
pub struct DiaryExport {
    pub date: String,
    pub weather: String,
    pub temp_morning: String,
    pub temp_noon: String,
    pub equipment: String,
    pub notes: String,
    pub status: String,
}

impl DiaryExport {
    pub fn from_record(r: &DiaryRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            weather: r.weather.clone(),
            temp_morning: r.temp_morning.map(|t| format!("{t:.1}")).unwrap_or_default(),
            temp_noon: r.temp_noon.map(|t| format!("{t:.1}")).unwrap_or_default(),
            equipment: r.equipment.clone(),
            notes: r.notes.clone(),
            status: r.status.to_db_str().to_string(),
        }
    }
}

pub(crate) fn diary_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weather",
        "temp_morning",
        "temp_noon",
        "equipment",
        "notes",
        "status",
    ]
}

pub(crate) fn diary_to_row(r: &DiaryExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.weather.clone(),
        r.temp_morning.clone(),
        r.temp_noon.clone(),
        r.equipment.clone(),
        r.notes.clone(),
        r.status.clone(),
    ]
}

pub(crate) fn diary_to_table(records: &[DiaryExport]) -> Vec<Vec<String>> {
    records.iter().map(diary_to_row).collect()
}
