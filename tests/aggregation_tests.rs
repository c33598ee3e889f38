use chrono::NaiveDate;

use stavlog::core::diary::can_edit;
use stavlog::core::filter::{LedgerFilter, Pager};
use stavlog::core::ledger::normalize;
use stavlog::core::period::{Period, month_last_day};
use stavlog::core::summary::summarize;
use stavlog::core::wages::aggregate_wages;
use stavlog::models::attendance::{AttendanceLog, PayType};
use stavlog::models::diary::{DiaryRecord, DiaryStatus};
use stavlog::models::ledger::{EntryType, LedgerEntry, Origin};
use stavlog::models::transaction::{CAT_MATERIAL, CAT_WAGES, Transaction, TxType};
use stavlog::models::worker::{Role, Worker};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn worker(id: i64, name: &str, rate: f64) -> Worker {
    Worker {
        id,
        org_id: 1,
        name: name.to_string(),
        role: Role::Employee,
        hourly_rate: rate,
        active: true,
        fixed_job_title: None,
        wage_visible: true,
    }
}

fn hourly_log(worker_id: i64, date: NaiveDate, hours: f64, snapshot: Option<f64>) -> AttendanceLog {
    AttendanceLog {
        id: 0,
        org_id: 1,
        worker_id,
        site_id: 1,
        date,
        hours,
        pay_type: PayType::Hourly,
        fixed_amount: None,
        rate_snapshot: snapshot,
        description: String::new(),
    }
}

fn fixed_log(worker_id: i64, date: NaiveDate, amount: f64) -> AttendanceLog {
    AttendanceLog {
        id: 0,
        org_id: 1,
        worker_id,
        site_id: 1,
        date,
        hours: 0.0,
        pay_type: PayType::Fixed,
        fixed_amount: Some(amount),
        rate_snapshot: None,
        description: String::new(),
    }
}

fn expense(date: NaiveDate, amount: f64, category: &str) -> LedgerEntry {
    LedgerEntry {
        date,
        description: String::new(),
        category: category.to_string(),
        entry_type: EntryType::Expense,
        amount,
        site_id: None,
        paid: true,
        origin: Origin::Manual,
        source_id: None,
    }
}

// ---------------------------------------------------------------------------
// Period resolution
// ---------------------------------------------------------------------------

#[test]
fn month_resolution_is_leap_aware() {
    let (s, e) = Period::parse("2024-02").unwrap().resolve().unwrap();
    assert_eq!(s, d(2024, 2, 1));
    assert_eq!(e, d(2024, 2, 29));

    let (_, e) = Period::parse("2025-02").unwrap().resolve().unwrap();
    assert_eq!(e, d(2025, 2, 28));

    // century rule
    assert_eq!(month_last_day(1900, 2), Some(28));
    assert_eq!(month_last_day(2000, 2), Some(29));
}

#[test]
fn period_parse_forms() {
    assert_eq!(
        Period::parse("2025").unwrap().resolve().unwrap(),
        (d(2025, 1, 1), d(2025, 12, 31))
    );
    assert_eq!(
        Period::parse("2025-03-15").unwrap().resolve().unwrap(),
        (d(2025, 3, 15), d(2025, 3, 15))
    );
    assert_eq!(
        Period::parse("2025-01:2025-03").unwrap().resolve().unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );

    assert!(Period::parse("2025-13").is_err());
    assert!(Period::parse("banana").is_err());
}

#[test]
fn inverted_range_is_accepted_and_empty() {
    // from > to parses fine; resolution keeps the inverted pair and any
    // BETWEEN query over it matches nothing.
    let (s, e) = Period::parse("2025-06-01:2025-01-01")
        .unwrap()
        .resolve()
        .unwrap();
    assert!(s > e);
}

// ---------------------------------------------------------------------------
// Wage aggregation
// ---------------------------------------------------------------------------

#[test]
fn wages_mix_fixed_and_hourly_into_one_entry() {
    let w = vec![worker(1, "Jan", 10.0)];
    let logs = vec![
        fixed_log(1, d(2025, 4, 1), 80.0),
        hourly_log(1, d(2025, 4, 3), 5.0, Some(10.0)),
    ];

    let entries = aggregate_wages(&logs, &w);
    assert_eq!(entries.len(), 1);

    let e = &entries[0];
    assert_eq!(e.amount, 130.0);
    assert_eq!(e.description, "wage: Jan");
    assert_eq!(e.category, CAT_WAGES);
    assert_eq!(e.entry_type, EntryType::Expense);
    assert_eq!(e.origin, Origin::Wage);
    // dated at the worker's latest log
    assert_eq!(e.date, d(2025, 4, 3));
}

#[test]
fn wages_fall_back_to_current_rate_without_snapshot() {
    let w = vec![worker(1, "Jan", 12.0)];
    let logs = vec![hourly_log(1, d(2025, 4, 1), 4.0, None)];

    let entries = aggregate_wages(&logs, &w);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 48.0);
}

#[test]
fn wages_zero_total_emits_nothing() {
    let w = vec![worker(1, "Jan", 0.0)];
    let logs = vec![hourly_log(1, d(2025, 4, 1), 8.0, None)];

    assert!(aggregate_wages(&logs, &w).is_empty());
}

#[test]
fn wages_one_entry_per_worker_sorted_by_name() {
    let w = vec![worker(2, "Peter", 10.0), worker(1, "Anna", 10.0)];
    let logs = vec![
        hourly_log(2, d(2025, 4, 1), 8.0, None),
        hourly_log(1, d(2025, 4, 1), 8.0, None),
        hourly_log(2, d(2025, 4, 2), 8.0, None),
    ];

    let entries = aggregate_wages(&logs, &w);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "wage: Anna");
    assert_eq!(entries[1].description, "wage: Peter");
    assert_eq!(entries[1].amount, 160.0);
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_sorts_date_descending() {
    let txs = vec![
        Transaction {
            id: 1,
            org_id: 1,
            tx_type: TxType::Invoice,
            amount: 100.0,
            date: d(2025, 5, 1),
            category: "Iné".to_string(),
            paid: true,
            site_id: None,
            description: "old".to_string(),
        },
        Transaction {
            id: 2,
            org_id: 1,
            tx_type: TxType::Expense,
            amount: 50.0,
            date: d(2025, 5, 20),
            category: "Iné".to_string(),
            paid: true,
            site_id: None,
            description: "new".to_string(),
        },
    ];

    let entries = normalize(&txs, Vec::new(), &[], &[]);
    assert_eq!(entries[0].description, "new");
    assert_eq!(entries[1].description, "old");
    assert!(entries[0].deletable());
    assert_eq!(entries[0].source_id, Some(2));
}

#[test]
fn normalize_and_filter_are_idempotent_over_a_snapshot() {
    let workers = vec![worker(1, "Jan", 10.0)];
    let logs = vec![
        fixed_log(1, d(2025, 5, 2), 80.0),
        hourly_log(1, d(2025, 5, 5), 6.0, Some(10.0)),
    ];
    let txs = vec![Transaction {
        id: 1,
        org_id: 1,
        tx_type: TxType::Invoice,
        amount: 400.0,
        date: d(2025, 5, 3),
        category: "Iné".to_string(),
        paid: false,
        site_id: Some(1),
        description: "zaloha".to_string(),
    }];

    // Same fetched snapshot, processed twice: the pipeline must not
    // accumulate state or depend on iteration order.
    let wages = aggregate_wages(&logs, &workers);
    let run_a = normalize(&txs, wages.clone(), &[], &[]);
    let run_b = normalize(&txs, wages, &[], &[]);
    assert_eq!(run_a, run_b);

    let filter = LedgerFilter {
        entry_type: Some(EntryType::Expense),
        ..Default::default()
    };
    assert_eq!(filter.apply(&run_a), filter.apply(&run_b));

    // Filtering a second time over its own output changes nothing.
    let once = filter.apply(&run_a);
    assert_eq!(filter.apply(&once), once);
}

// ---------------------------------------------------------------------------
// Filtering and paging
// ---------------------------------------------------------------------------

#[test]
fn filters_compose_conjunctively() {
    let entries = vec![
        LedgerEntry {
            description: "Cement delivery".to_string(),
            site_id: Some(1),
            ..expense(d(2025, 5, 1), 100.0, CAT_MATERIAL)
        },
        LedgerEntry {
            description: "cement bags".to_string(),
            site_id: Some(2),
            ..expense(d(2025, 5, 2), 50.0, CAT_MATERIAL)
        },
        expense(d(2025, 5, 3), 30.0, "Iné"),
    ];

    let f = LedgerFilter {
        category: Some(CAT_MATERIAL.to_string()),
        search: Some("CEMENT".to_string()),
        ..Default::default()
    };
    assert_eq!(f.apply(&entries).len(), 2);

    let f = LedgerFilter {
        category: Some(CAT_MATERIAL.to_string()),
        search: Some("cement".to_string()),
        site_id: Some(2),
        ..Default::default()
    };
    let hits = f.apply(&entries);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description, "cement bags");
}

#[test]
fn pager_window_grows_and_resets() {
    let items: Vec<i32> = (0..45).collect();
    let mut pager = Pager::new(20);

    assert_eq!(pager.window(&items).len(), 20);
    assert!(pager.has_more(&items));

    pager.advance();
    assert_eq!(pager.window(&items).len(), 40);

    pager.advance();
    // window is clamped to the list length
    assert_eq!(pager.window(&items).len(), 45);
    assert!(!pager.has_more(&items));

    pager.reset();
    assert_eq!(pager.visible(), 20);
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[test]
fn breakdown_partitions_expense_total() {
    let entries = vec![
        LedgerEntry {
            entry_type: EntryType::Income,
            ..expense(d(2025, 5, 1), 1000.0, "Iné")
        },
        expense(d(2025, 5, 2), 300.0, CAT_WAGES),
        expense(d(2025, 5, 3), 100.0, CAT_MATERIAL),
        expense(d(2025, 5, 4), 100.0, CAT_MATERIAL),
    ];

    let s = summarize(&entries, 0.0, 0);
    assert_eq!(s.income, 1000.0);
    assert_eq!(s.expense, 500.0);
    assert_eq!(s.profit, 500.0);

    // categories partition the expense total, percentages sum to 100
    let total: f64 = s.breakdown.iter().map(|c| c.amount).sum();
    assert_eq!(total, s.expense);
    let pct: f64 = s.breakdown.iter().map(|c| c.percent).sum();
    assert!((pct - 100.0).abs() < 1e-9);

    // sorted descending by amount
    assert_eq!(s.breakdown[0].category, CAT_WAGES);
    assert_eq!(s.breakdown[0].percent, 60.0);
    assert_eq!(s.breakdown[1].percent, 40.0);
}

#[test]
fn summary_of_empty_ledger_keeps_unpaid_passthrough() {
    let s = summarize(&[], 250.0, 1);
    assert_eq!(s.income, 0.0);
    assert_eq!(s.expense, 0.0);
    assert!(s.breakdown.is_empty());
    assert_eq!(s.unpaid_total, 250.0);
    assert_eq!(s.unpaid_count, 1);
}

// ---------------------------------------------------------------------------
// Diary edit gating
// ---------------------------------------------------------------------------

#[test]
fn diary_edit_gating() {
    let mut rec = DiaryRecord {
        id: 1,
        org_id: 1,
        site_id: 1,
        date: d(2025, 6, 2),
        weather: String::new(),
        temp_morning: None,
        temp_noon: None,
        equipment: String::new(),
        notes: String::new(),
        status: DiaryStatus::Draft,
    };

    // no record yet -> first save allowed
    assert!(can_edit(None));
    assert!(can_edit(Some(&rec)));

    rec.status = DiaryStatus::Signed;
    assert!(!can_edit(Some(&rec)));
    assert!(rec.is_locked());
}
