use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "income" => Some(EntryType::Income),
            "expense" => Some(EntryType::Expense),
            _ => None,
        }
    }
}

/// Which source collection an entry was normalized from. Only manual
/// transactions may be deleted or toggled from the ledger view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    Manual,
    Wage,
    Fuel,
    Material,
}

impl Origin {
    pub fn code(&self) -> &'static str {
        match self {
            Origin::Manual => "manual",
            Origin::Wage => "wage",
            Origin::Fuel => "fuel",
            Origin::Material => "material",
        }
    }
}

/// Normalized union of the four cost/income sources, produced per view and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub entry_type: EntryType,
    pub amount: f64,
    pub site_id: Option<i64>,
    /// Always true for non-manual origins; derived records are settled by
    /// definition.
    pub paid: bool,
    pub origin: Origin,
    /// Backing transaction id for manual entries, None otherwise.
    pub source_id: Option<i64>,
}

impl LedgerEntry {
    pub fn deletable(&self) -> bool {
        self.origin == Origin::Manual
    }
}
