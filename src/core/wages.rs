//! Wage aggregation: attendance logs grouped per worker into one derived
//! expense entry each. A pure read-side projection; the logs themselves
//! stay the source of truth and are never touched.

use crate::models::attendance::{AttendanceLog, PayType};
use crate::models::ledger::{EntryType, LedgerEntry, Origin};
use crate::models::transaction::CAT_WAGES;
use crate::models::worker::Worker;
use chrono::NaiveDate;
use std::collections::HashMap;

struct WageGroup {
    total: f64,
    last_date: NaiveDate,
}

/// One ledger entry per worker with at least one log in the period:
/// fixed entries add their agreed amount, hourly entries add
/// hours × rate snapshot (falling back to the worker's current rate when
/// the snapshot is absent). Zero-amount groups emit nothing.
pub fn aggregate_wages(logs: &[AttendanceLog], workers: &[Worker]) -> Vec<LedgerEntry> {
    let by_id: HashMap<i64, &Worker> = workers.iter().map(|w| (w.id, w)).collect();

    let mut groups: HashMap<i64, WageGroup> = HashMap::new();

    for log in logs {
        let amount = match log.pay_type {
            PayType::Fixed => log.fixed_amount.unwrap_or(0.0),
            PayType::Hourly => {
                let rate = log
                    .rate_snapshot
                    .or_else(|| by_id.get(&log.worker_id).map(|w| w.hourly_rate))
                    .unwrap_or(0.0);
                log.hours * rate
            }
        };

        groups
            .entry(log.worker_id)
            .and_modify(|g| {
                g.total += amount;
                if log.date > g.last_date {
                    g.last_date = log.date;
                }
            })
            .or_insert(WageGroup {
                total: amount,
                last_date: log.date,
            });
    }

    let mut entries: Vec<LedgerEntry> = groups
        .into_iter()
        .filter(|(_, g)| g.total != 0.0)
        .map(|(worker_id, g)| {
            let name = by_id
                .get(&worker_id)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| format!("worker #{}", worker_id));

            LedgerEntry {
                date: g.last_date,
                description: format!("wage: {}", name),
                category: CAT_WAGES.to_string(),
                entry_type: EntryType::Expense,
                amount: g.total,
                site_id: None,
                paid: true,
                origin: Origin::Wage,
                source_id: None,
            }
        })
        .collect();

    // Deterministic order before the date-desc merge sort.
    entries.sort_by(|a, b| a.description.cmp(&b.description));
    entries
}
