use chrono::NaiveDate;
use serde::Serialize;

/// Append-only material purchase, site-scoped.
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    pub id: i64,
    pub org_id: i64,
    pub site_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub quantity: f64,
    pub description: String,
}
