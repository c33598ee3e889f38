use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_site_and_worker, setup_test_db, stv, temp_out};

fn seed_ledger(db_path: &str) {
    stv()
        .args([
            "--db",
            db_path,
            "tx",
            "add",
            "1500",
            "--kind",
            "invoice",
            "--paid",
            "--date",
            "2025-09-01",
            "--desc",
            "faktura september",
        ])
        .assert()
        .success();

    stv()
        .args([
            "--db",
            db_path,
            "att",
            "add",
            "--worker",
            "1",
            "--site",
            "1",
            "--date",
            "2025-09-02",
            "--hours",
            "8",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_ledger_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_site_and_worker(&db_path);
    seed_ledger(&db_path);

    let out = temp_out("export_csv", "csv");

    stv()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--period", "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("date,entry_type,amount"));
    assert!(content.contains("faktura september"));
    assert!(content.contains("wage: Jan Kovac"));
}

#[test]
fn test_export_ledger_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_site_and_worker(&db_path);
    seed_ledger(&db_path);

    let out = temp_out("export_json", "json");

    stv()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r["entry_type"] == "income"));
    assert!(rows.iter().any(|r| r["origin"] == "wage"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_export_diary_csv_requires_site() {
    let db_path = setup_test_db("export_diary");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db",
            &db_path,
            "diary",
            "add",
            "--site",
            "1",
            "--date",
            "2025-09-03",
            "--weather",
            "jasno",
            "--notes",
            "izolacia strechy",
        ])
        .assert()
        .success();

    let out = temp_out("export_diary", "csv");

    stv()
        .args([
            "--db", &db_path, "export", "--diary", "--site", "1", "--format", "csv", "--file",
            &out, "--period", "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("izolacia strechy"));
    assert!(content.contains("draft"));
}

#[test]
fn test_export_pdf_writes_file() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_site_and_worker(&db_path);
    seed_ledger(&db_path);

    let out = temp_out("export_pdf", "pdf");

    stv()
        .args([
            "--db", &db_path, "export", "--format", "pdf", "--file", &out, "--period", "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_site_and_worker(&db_path);
    seed_ledger(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "placeholder").expect("seed file");

    // Refusing the overwrite prompt aborts the export.
    stv()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    // --force skips the prompt entirely.
    stv()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("faktura september"));
}
