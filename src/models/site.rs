use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SiteStatus {
    Active,
    Completed,
}

impl SiteStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active",
            SiteStatus::Completed => "completed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(SiteStatus::Active),
            "completed" => Some(SiteStatus::Completed),
            _ => None,
        }
    }
}

/// A construction project; the scoping key for diary records, attendance,
/// materials, fuel logs and (optionally) transactions.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    pub status: SiteStatus,
}
