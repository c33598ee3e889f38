use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiaryStatus {
    Draft,
    Signed,
}

impl DiaryStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DiaryStatus::Draft => "draft",
            DiaryStatus::Signed => "signed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(DiaryStatus::Draft),
            "signed" => Some(DiaryStatus::Signed),
            _ => None,
        }
    }
}

/// One structured site-diary entry per (site, date), the "stavebný denník".
/// Once signed the record is locked; edits are rejected until an explicit
/// unlock puts it back into draft.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryRecord {
    pub id: i64,
    pub org_id: i64,
    pub site_id: i64,
    pub date: NaiveDate,
    pub weather: String,
    pub temp_morning: Option<f64>,
    pub temp_noon: Option<f64>,
    pub equipment: String,
    pub notes: String,
    pub status: DiaryStatus,
}

impl DiaryRecord {
    pub fn is_locked(&self) -> bool {
        self.status == DiaryStatus::Signed
    }
}
