use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_site_and_worker, setup_test_db, stv};

#[test]
fn test_diary_add_and_show() {
    let db_path = setup_test_db("diary_add");
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
            "2025-06-02",
            "--weather",
            "slnečno",
            "--temp-morning",
            "12",
            "--temp-noon",
            "24",
            "--notes",
            "betonovanie zakladov",
        ])
        .assert()
        .success()
        .stdout(contains("created"));

    stv()
        .args([
            "--db", &db_path, "diary", "show", "--site", "1", "--date", "2025-06-02",
        ])
        .assert()
        .success()
        .stdout(contains("slnečno"))
        .stdout(contains("12 °C"))
        .stdout(contains("betonovanie zakladov"))
        .stdout(contains("draft"));
}

#[test]
fn test_diary_same_day_merges_instead_of_duplicating() {
    let db_path = setup_test_db("diary_upsert");
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
            "2025-06-03",
            "--weather",
            "dážď",
        ])
        .assert()
        .success()
        .stdout(contains("created"));

    // Second add for the same site and day updates the existing record.
    stv()
        .args([
            "--db",
            &db_path,
            "diary",
            "add",
            "--site",
            "1",
            "--date",
            "2025-06-03",
            "--notes",
            "murovanie priecok",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    // Both fields live on the one record.
    stv()
        .args([
            "--db", &db_path, "diary", "show", "--site", "1", "--date", "2025-06-03",
        ])
        .assert()
        .success()
        .stdout(contains("dážď"))
        .stdout(contains("murovanie priecok"));
}

#[test]
fn test_signed_diary_rejects_edits_until_unlock() {
    let db_path = setup_test_db("diary_sign");
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
            "2025-06-04",
            "--notes",
            "osadenie okien",
        ])
        .assert()
        .success();

    stv()
        .args([
            "--db", &db_path, "diary", "sign", "--site", "1", "--date", "2025-06-04",
        ])
        .assert()
        .success()
        .stdout(contains("signed"));

    // Edits are rejected while signed.
    stv()
        .args([
            "--db",
            &db_path,
            "diary",
            "add",
            "--site",
            "1",
            "--date",
            "2025-06-04",
            "--notes",
            "dodatok",
        ])
        .assert()
        .failure()
        .stderr(contains("signed"));

    stv()
        .args([
            "--db", &db_path, "diary", "unlock", "--site", "1", "--date", "2025-06-04",
        ])
        .assert()
        .success();

    // Unlock puts the record back into draft and edits work again.
    stv()
        .args([
            "--db",
            &db_path,
            "diary",
            "add",
            "--site",
            "1",
            "--date",
            "2025-06-04",
            "--notes",
            "dodatok",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));
}

#[test]
fn test_diary_month_view_merges_attendance_hours() {
    let db_path = setup_test_db("diary_month");
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
            "2025-06-10",
            "--weather",
            "oblačno",
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
            "2025-06-10",
            "--hours",
            "8",
            "--desc",
            "vykopove prace",
        ])
        .assert()
        .success();

    stv()
        .args([
            "--db", &db_path, "diary", "month", "--site", "1", "--month", "2025-06",
        ])
        .assert()
        .success()
        .stdout(contains("2025-06-10"))
        .stdout(contains("8.0 h"))
        .stdout(contains("vykopove prace"))
        // every day of June is listed, including empty ones
        .stdout(contains("2025-06-30"));
}

#[test]
fn test_diary_show_missing_record_fails() {
    let db_path = setup_test_db("diary_missing");
    init_db_with_site_and_worker(&db_path);

    stv()
        .args([
            "--db", &db_path, "diary", "show", "--site", "1", "--date", "2025-06-20",
        ])
        .assert()
        .failure()
        .stderr(contains("No diary record"));

    // Signing a missing record fails the same way.
    stv()
        .args([
            "--db", &db_path, "diary", "sign", "--site", "1", "--date", "2025-06-20",
        ])
        .assert()
        .failure()
        .stderr(contains("No diary record").or(contains("not found")));
}
