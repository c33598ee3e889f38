use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subscription {
    Trial,
    Active,
    Inactive,
}

impl Subscription {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Subscription::Trial => "trial",
            Subscription::Active => "active",
            Subscription::Inactive => "inactive",
        }
    }

    /// Convert DB string → enum. Unknown statuses (from older versions or
    /// manual edits) are treated as inactive rather than rejected.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "trial" => Subscription::Trial,
            "active" => Subscription::Active,
            _ => Subscription::Inactive,
        }
    }
}

/// Tenant root: every other record carries this organization's id and is
/// never visible from another organization.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub subscription: Subscription,
    pub trial_expires: Option<NaiveDate>,
}
