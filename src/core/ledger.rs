//! Record normalization: four heterogeneous source collections become one
//! ordered ledger-entry sequence. Pure transform, no side effects.

use crate::models::fuel::FuelLog;
use crate::models::ledger::{EntryType, LedgerEntry, Origin};
use crate::models::material::Material;
use crate::models::transaction::{CAT_FUEL, CAT_MATERIAL, Transaction, TxType};

/// Merge manual transactions, pre-aggregated wage entries, fuel logs and
/// material purchases into one list sorted by date descending (most recent
/// first). Non-manual entries are settled by definition, so paid = true.
pub fn normalize(
    transactions: &[Transaction],
    wage_entries: Vec<LedgerEntry>,
    fuels: &[FuelLog],
    materials: &[Material],
) -> Vec<LedgerEntry> {
    let mut entries = wage_entries;
    entries.reserve(transactions.len() + fuels.len() + materials.len());

    for tx in transactions {
        entries.push(transaction_entry(tx));
    }
    for f in fuels {
        entries.push(fuel_entry(f));
    }
    for m in materials {
        entries.push(material_entry(m));
    }

    // Stable: same-day entries keep their per-source order.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

fn transaction_entry(tx: &Transaction) -> LedgerEntry {
    let entry_type = match tx.tx_type {
        TxType::Invoice => EntryType::Income,
        TxType::Expense => EntryType::Expense,
    };

    LedgerEntry {
        date: tx.date,
        description: tx.description.clone(),
        category: tx.category.clone(),
        entry_type,
        amount: tx.amount,
        site_id: tx.site_id,
        paid: tx.paid,
        origin: Origin::Manual,
        source_id: Some(tx.id),
    }
}

fn fuel_entry(f: &FuelLog) -> LedgerEntry {
    let description = if f.description.is_empty() {
        format!("fuel: {:.1} l", f.liters)
    } else {
        f.description.clone()
    };

    LedgerEntry {
        date: f.date,
        description,
        category: CAT_FUEL.to_string(),
        entry_type: EntryType::Expense,
        amount: f.amount,
        site_id: Some(f.site_id),
        paid: true,
        origin: Origin::Fuel,
        source_id: None,
    }
}

fn material_entry(m: &Material) -> LedgerEntry {
    let description = if m.description.is_empty() {
        "material purchase".to_string()
    } else {
        m.description.clone()
    };

    LedgerEntry {
        date: m.date,
        description,
        category: CAT_MATERIAL.to_string(),
        entry_type: EntryType::Expense,
        amount: m.amount,
        site_id: Some(m.site_id),
        paid: true,
        origin: Origin::Material,
        source_id: None,
    }
}
