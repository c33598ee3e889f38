#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stv() -> Command {
    cargo_bin_cmd!("stavlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stavlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema + default org) in test mode.
pub fn init_db(db_path: &str) {
    stv()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and seed one site and one worker, ids 1 and 1.
pub fn init_db_with_site_and_worker(db_path: &str) {
    init_db(db_path);

    stv()
        .args(["--db", db_path, "site", "add", "Bytovka Ruzinov"])
        .assert()
        .success();

    stv()
        .args([
            "--db", db_path, "worker", "add", "Jan Kovac", "--rate", "10",
        ])
        .assert()
        .success();
}
