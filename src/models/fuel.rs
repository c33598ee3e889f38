use chrono::NaiveDate;
use serde::Serialize;

/// Append-only fuel expense record, site-scoped.
#[derive(Debug, Clone, Serialize)]
pub struct FuelLog {
    pub id: i64,
    pub org_id: i64,
    pub site_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub liters: f64,
    pub description: String,
}
