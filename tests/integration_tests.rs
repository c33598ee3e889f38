use predicates::function::function;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_site_and_worker, setup_test_db, stv};

#[test]
fn test_init_creates_schema_and_default_org() {
    let db_path = setup_test_db("it_init");
    init_db(&db_path);

    stv()
        .args(["--db", &db_path, "org", "list"])
        .assert()
        .success()
        .stdout(contains("My Company"))
        .stdout(contains("trial until"));

    // re-running init must not fail or duplicate the default org
    init_db(&db_path);
    stv()
        .args(["--db", &db_path, "org", "list"])
        .assert()
        .success()
        .stdout(contains("My Company").count(1));
}

#[test]
fn test_org_add_and_use() {
    let db_path = setup_test_db("it_org");
    init_db(&db_path);

    stv()
        .args(["--db", &db_path, "org", "add", "Stavex s.r.o."])
        .assert()
        .success()
        .stdout(contains("Stavex s.r.o."))
        .stdout(contains("trial until"));

    stv()
        .args(["--db", &db_path, "--test", "org", "use", "2"])
        .assert()
        .success()
        .stdout(contains("Active organization is now 'Stavex s.r.o.'"));

    stv()
        .args(["--db", &db_path, "--test", "org", "use", "99"])
        .assert()
        .failure()
        .stderr(contains("99"));
}

#[test]
fn test_site_lifecycle() {
    let db_path = setup_test_db("it_site");
    init_db(&db_path);

    stv()
        .args(["--db", &db_path, "site", "add", "Skolka Petrzalka"])
        .assert()
        .success()
        .stdout(contains("created with id 1"));

    stv()
        .args(["--db", &db_path, "site", "complete", "1"])
        .assert()
        .success();

    // completed sites are hidden by default, shown with --all
    stv()
        .args(["--db", &db_path, "site", "list"])
        .assert()
        .success()
        .stdout(contains("Skolka Petrzalka").not());
    stv()
        .args(["--db", &db_path, "site", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Skolka Petrzalka"))
        .stdout(contains("completed"));

    stv()
        .args(["--db", &db_path, "site", "reopen", "1"])
        .assert()
        .success();
    stv()
        .args(["--db", &db_path, "site", "list"])
        .assert()
        .success()
        .stdout(contains("Skolka Petrzalka"));

    stv()
        .args(["--db", &db_path, "site", "complete", "42"])
        .assert()
        .failure()
        .stderr(contains("42"));
}

#[test]
fn test_worker_archive_keeps_history() {
    let db_path = setup_test_db("it_worker");
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
            "2025-02-03",
            "--hours",
            "8",
        ])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "worker", "archive", "1"])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Jan Kovac").not());
    stv()
        .args(["--db", &db_path, "worker", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Jan Kovac"))
        .stdout(contains("archived"));

    // archived workers still show up in wage aggregation
    stv()
        .args(["--db", &db_path, "finance", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("wage: Jan Kovac"));

    stv()
        .args(["--db", &db_path, "worker", "restore", "1"])
        .assert()
        .success();
    stv()
        .args(["--db", &db_path, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Jan Kovac"));
}

#[test]
fn test_attendance_list_totals_hours() {
    let db_path = setup_test_db("it_att");
    init_db_with_site_and_worker(&db_path);

    for (date, hours) in [("2025-03-03", "8"), ("2025-03-04", "6.5")] {
        stv()
            .args([
                "--db", &db_path, "att", "add", "--worker", "1", "--site", "1", "--date", date,
                "--hours", hours,
            ])
            .assert()
            .success();
    }

    stv()
        .args(["--db", &db_path, "att", "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Jan Kovac"))
        .stdout(contains("2 rows"))
        .stdout(contains("14.5 h"));
}

#[test]
fn test_tx_rejects_non_positive_amount() {
    let db_path = setup_test_db("it_tx_amount");
    init_db(&db_path);

    stv()
        .args(["--db", &db_path, "tx", "add", "0"])
        .assert()
        .failure()
        .stderr(contains("amount"));
}

#[test]
fn test_tx_warns_on_non_canonical_category() {
    let db_path = setup_test_db("it_tx_category");
    init_db(&db_path);

    // Canonical category passes silently.
    stv()
        .args([
            "--db", &db_path, "tx", "add", "90", "--category", "Réžia", "--desc", "najom",
        ])
        .assert()
        .success()
        .stdout(contains("Unknown category").not());

    // A typo still writes the row but gets flagged.
    stv()
        .args([
            "--db", &db_path, "tx", "add", "60", "--category", "Rezia", "--desc", "najom",
        ])
        .assert()
        .success()
        .stdout(contains("Unknown category 'Rezia'"))
        .stdout(contains("Réžia"));
}

#[test]
fn test_tx_paid_toggle_and_delete() {
    let db_path = setup_test_db("it_tx");
    init_db(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "tx",
            "add",
            "150",
            "--kind",
            "invoice",
            "--date",
            "2025-04-10",
            "--desc",
            "zaloha",
        ])
        .assert()
        .success();

    stv()
        .args(["--db", &db_path, "tx", "list", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(contains("[unpaid]"));

    stv()
        .args(["--db", &db_path, "tx", "paid", "1"])
        .assert()
        .success()
        .stdout(contains("marked as paid"));
    stv()
        .args(["--db", &db_path, "tx", "list", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(contains("[unpaid]").not());

    // refusing the prompt keeps the row
    stv()
        .args(["--db", &db_path, "tx", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));
    stv()
        .args(["--db", &db_path, "tx", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted"));

    stv()
        .args(["--db", &db_path, "tx", "list", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(contains("No transactions"));
}

#[test]
fn test_task_priority_sorts_first() {
    let db_path = setup_test_db("it_task");
    init_db(&db_path);

    stv()
        .args([
            "--db", &db_path, "task", "add", "objednat strk", "--date", "2025-05-01",
        ])
        .assert()
        .success();
    stv()
        .args([
            "--db",
            &db_path,
            "task",
            "add",
            "revizia leseni",
            "--date",
            "2025-05-02",
            "--priority",
        ])
        .assert()
        .success()
        .stdout(contains("Priority task"));

    // priority entry is listed before the older plain one
    stv()
        .args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(function(|out: &str| {
            match (out.find("revizia leseni"), out.find("objednat strk")) {
                (Some(a), Some(b)) => a < b,
                _ => false,
            }
        }));

    stv()
        .args(["--db", &db_path, "task", "done", "2"])
        .assert()
        .success();
    stv()
        .args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("revizia leseni").not());
    stv()
        .args(["--db", &db_path, "task", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("revizia leseni"))
        .stdout(contains("[x]"));

    stv()
        .args(["--db", &db_path, "task", "reopen", "2"])
        .assert()
        .success();
    stv()
        .args(["--db", &db_path, "task", "list"])
        .assert()
        .success()
        .stdout(contains("revizia leseni"));
}

#[test]
fn test_fuel_and_material_require_existing_site() {
    let db_path = setup_test_db("it_site_required");
    init_db(&db_path);

    stv()
        .args(["--db", &db_path, "fuel", "add", "50", "--site", "7"])
        .assert()
        .failure()
        .stderr(contains("7"));
    stv()
        .args(["--db", &db_path, "material", "add", "50", "--site", "7"])
        .assert()
        .failure()
        .stderr(contains("7"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("it_db");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    stv()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("sites"))
        .stdout(contains("workers"))
        .stdout(contains("Ledger date range"));

    stv()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    stv()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("it_log");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Site created"))
        .stdout(contains("Worker created"));
}
