use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayType {
    Hourly,
    Fixed,
}

impl PayType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PayType::Hourly => "hourly",
            PayType::Fixed => "fixed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "hourly" => Some(PayType::Hourly),
            "fixed" => Some(PayType::Fixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceLog {
    pub id: i64,
    pub org_id: i64,
    pub worker_id: i64,
    pub site_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub pay_type: PayType,
    /// Agreed price for `fixed` entries; ignored for hourly ones.
    pub fixed_amount: Option<f64>,
    /// Hourly rate captured when the entry was written. Immutable after
    /// insert so later rate changes never alter historical pay.
    pub rate_snapshot: Option<f64>,
    pub description: String,
}
