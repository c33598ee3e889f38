use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_site_and_worker, setup_test_db, stv};

#[test]
fn test_finance_income_expense_profit() {
    let db_path = setup_test_db("finance_profit");
    init_db_with_site_and_worker(&db_path);

    // Paid invoice of 1000
    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "1000",
            "--kind",
            "invoice",
            "--paid",
            "--date",
            "2025-03-10",
            "--desc",
            "faktura za byt",
        ])
        .assert()
        .success();

    // 8 h at 12.50/h -> 100 of wages
    stv()
        .args([
            "--db", &db_path, "worker", "rate", "1", "12.5",
        ])
        .assert()
        .success();
    stv()
        .args([
            "--db",
            &db_path,
            "att",
            "add",
            "--worker",
            "1",
            "--site",
            "1",
            "--date",
            "2025-03-11",
            "--hours",
            "8",
        ])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "finance", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Income:"))
        .stdout(contains("1 000.00 €"))
        .stdout(contains("100.00 €"))
        .stdout(contains("900.00 €"))
        .stdout(contains("Mzdy"))
        .stdout(contains("100.0%"));
}

#[test]
fn test_wage_aggregation_one_entry_per_worker() {
    let db_path = setup_test_db("finance_wages");
    init_db_with_site_and_worker(&db_path);

    // Fixed 80 on one day, 5 h at 10/h on another -> one wage entry of 130
    stv()
        .args([
            "--db",
            &db_path,
            "att",
            "add",
            "--worker",
            "1",
            "--site",
            "1",
            "--date",
            "2025-04-01",
            "--fixed",
            "80",
        ])
        .assert()
        .success();
    stv()
        .args([
            "--db",
            &db_path,
            "att",
            "add",
            "--worker",
            "1",
            "--site",
            "1",
            "--date",
            "2025-04-03",
            "--hours",
            "5",
        ])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "finance", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(contains("wage: Jan Kovac").count(1))
        .stdout(contains("130.00 €"))
        // wage entry dated at the worker's latest log in the period
        .stdout(contains("2025-04-03"));
}

#[test]
fn test_wage_uses_rate_snapshot_not_current_rate() {
    let db_path = setup_test_db("finance_snapshot");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "att",
            "add",
            "--worker",
            "1",
            "--site",
            "1",
            "--date",
            "2025-05-05",
            "--hours",
            "5",
        ])
        .assert()
        .success();

    // Raise after the log was written; past wages must not move.
    stv()
        .args(["--db", &db_path, "worker", "rate", "1", "99"])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "finance", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(contains("50.00 €"))
        .stdout(contains("495.00").not());
}

#[test]
fn test_inverted_custom_range_yields_empty_ledger() {
    let db_path = setup_test_db("finance_inverted");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "500",
            "--kind",
            "invoice",
            "--paid",
            "--date",
            "2025-03-15",
        ])
        .assert()
        .success();

    // from > to is accepted and simply matches nothing
    stv()
        .args([
            "--db",
            &db_path,
            "finance",
            "--period",
            "2025-06-01:2025-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("No entries"))
        .stdout(contains("0.00 €"));
}

#[test]
fn test_unpaid_invoices_are_period_independent() {
    let db_path = setup_test_db("finance_unpaid");
    init_db_with_site_and_worker(&db_path);

    // Unpaid invoice from January
    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "250",
            "--kind",
            "invoice",
            "--date",
            "2025-01-20",
            "--desc",
            "neuhradena faktura",
        ])
        .assert()
        .success();

    // A completely different year still reports the open receivable.
    stv()
        .args(["--db", &db_path, "finance", "--period", "2030"])
        .assert()
        .success()
        .stdout(contains("Unpaid invoices"))
        .stdout(contains("250.00 €"))
        .stdout(contains("1 open"));
}

#[test]
fn test_finance_filters_compose() {
    let db_path = setup_test_db("finance_filters");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "300",
            "--kind",
            "invoice",
            "--paid",
            "--date",
            "2025-07-01",
            "--desc",
            "zaloha bytovka",
        ])
        .assert()
        .success();
    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "40",
            "--date",
            "2025-07-02",
            "--category",
            "Réžia",
            "--desc",
            "kancelaria",
        ])
        .assert()
        .success();

    // Type filter: only the invoice remains
    stv()
        .args([
            "--db", &db_path, "finance", "--period", "2025-07", "--type", "income",
        ])
        .assert()
        .success()
        .stdout(contains("zaloha bytovka"))
        .stdout(contains("kancelaria").not());

    // Search filter is case-insensitive
    stv()
        .args([
            "--db", &db_path, "finance", "--period", "2025-07", "--search", "KANCEL",
        ])
        .assert()
        .success()
        .stdout(contains("kancelaria"))
        .stdout(contains("zaloha bytovka").not());
}

#[test]
fn test_fuel_and_material_normalize_into_ledger() {
    let db_path = setup_test_db("finance_sources");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "fuel",
            "add",
            "60",
            "--liters",
            "45.5",
            "--site",
            "1",
            "--date",
            "2025-08-04",
        ])
        .assert()
        .success();
    stv()
        .args([
            "--db",
            &db_path,
            "material",
            "add",
            "220",
            "--site",
            "1",
            "--date",
            "2025-08-05",
            "--desc",
            "cement 25kg",
        ])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "finance", "--period", "2025-08"])
        .assert()
        .success()
        .stdout(contains("PHM"))
        .stdout(contains("Materiál"))
        .stdout(contains("cement 25kg"))
        // 60 + 220 expense total
        .stdout(contains("280.00 €"));
}
