use chrono::NaiveDate;
use serde::Serialize;

/// Canonical expense categories. The column itself is free-form text, these
/// are the values the rest of the aggregation understands.
pub const CAT_OVERHEAD: &str = "Réžia";
pub const CAT_MATERIAL: &str = "Materiál";
pub const CAT_WAGES: &str = "Mzdy";
pub const CAT_FUEL: &str = "PHM";
pub const CAT_OTHER: &str = "Iné";

/// Canonical set in display order, used when warning about typos.
pub const CATEGORIES: [&str; 5] = [CAT_OVERHEAD, CAT_MATERIAL, CAT_WAGES, CAT_FUEL, CAT_OTHER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxType {
    Invoice,
    Expense,
}

impl TxType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TxType::Invoice => "invoice",
            TxType::Expense => "expense",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "invoice" => Some(TxType::Invoice),
            "expense" => Some(TxType::Expense),
            _ => None,
        }
    }
}

/// Manual ledger entry. The only record kind the user can delete or toggle
/// the paid flag on.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub org_id: i64,
    pub tx_type: TxType,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub paid: bool,
    pub site_id: Option<i64>,
    pub description: String,
}
