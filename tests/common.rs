#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jf() -> Command {
    cargo_bin_cmd!("jobfinder")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobfinder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// 45 jobs in the Remotive response format: ids 1001..=1045, titles cycling
/// "Rust Engineer N" / "Product Designer N" / "Growth Marketer N".
pub fn fixture() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("remotive.json");
    path.to_string_lossy().to_string()
}

/// `jobfinder --db <db> --test --fixture <fixture>` ready for a subcommand.
pub fn jf_offline(db_path: &str) -> Command {
    let mut cmd = jf();
    cmd.args(["--db", db_path, "--test", "--fixture", &fixture()]);
    cmd
}

/// Initialize a fresh DB through the CLI
pub fn init_db(db_path: &str) {
    jf().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
