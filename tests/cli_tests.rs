use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, jf, jf_offline, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    jf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_search_first_and_last_page() {
    let db_path = setup_test_db("cli_search_pages");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["search", "--page-size", "20"])
        .assert()
        .success()
        .stdout(contains("Page 1 (20 jobs)"))
        .stdout(contains("next: 2"))
        .stdout(contains("Rust Engineer 1"));

    jf_offline(&db_path)
        .args(["search", "--page-size", "20", "--page", "3"])
        .assert()
        .success()
        .stdout(contains("Page 3 (5 jobs)"))
        .stdout(contains("prev: 2"))
        .stdout(contains("Rust Engineer 43"));

    jf_offline(&db_path)
        .args(["search", "--page-size", "20", "--page", "4"])
        .assert()
        .success()
        .stdout(contains("No jobs on page 4."));
}

#[test]
fn test_search_all_walks_every_page() {
    let db_path = setup_test_db("cli_search_all");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["search", "--page-size", "20", "--all"])
        .assert()
        .success()
        .stdout(contains("Page 3 (5 jobs)"))
        .stdout(contains("45 jobs across 3 page(s)."));
}

#[test]
fn test_search_page_zero_is_rejected() {
    let db_path = setup_test_db("cli_search_page0");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["search", "--page", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid page number: 0"));
}

#[test]
fn test_query_wins_and_lands_in_history() {
    let db_path = setup_test_db("cli_search_history");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["search", "rust", "--category", "Design"])
        .assert()
        .success()
        .stdout(contains("Rust Engineer 1"))
        .stdout(contains("Product Designer").not());

    jf_offline(&db_path)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("Recent searches"))
        .stdout(contains("rust"));

    jf_offline(&db_path)
        .args(["history", "--clear"])
        .assert()
        .success()
        .stdout(contains("Search history cleared."))
        .stdout(contains("No recent searches."));
}

#[test]
fn test_category_search_only_returns_that_category() {
    let db_path = setup_test_db("cli_search_category");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["search", "--category", "Design", "--company", "Acme"])
        .assert()
        .success()
        .stdout(contains("Page 1 (15 jobs)"))
        .stdout(contains("Product Designer 2"))
        .stdout(contains("Rust Engineer").not());
}

#[test]
fn test_save_show_unsave_flow() {
    let db_path = setup_test_db("cli_bookmarks");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["save", "1003"])
        .assert()
        .success()
        .stdout(contains("Saved: Growth Marketer 3"));

    jf_offline(&db_path)
        .args(["save", "1003"])
        .assert()
        .success()
        .stdout(contains("already saved"));

    jf_offline(&db_path)
        .args(["saved"])
        .assert()
        .success()
        .stdout(contains("Saved jobs (1)"))
        .stdout(contains("Growth Marketer 3"));

    jf_offline(&db_path)
        .args(["unsave", "1003"])
        .assert()
        .success()
        .stdout(contains("Removed: Growth Marketer 3"));

    jf_offline(&db_path)
        .args(["saved"])
        .assert()
        .success()
        .stdout(contains("No saved jobs."));

    jf_offline(&db_path)
        .args(["unsave", "1003"])
        .assert()
        .success()
        .stdout(contains("is not saved"));

    jf_offline(&db_path).args(["save", "1001"]).assert().success();
    jf_offline(&db_path).args(["save", "1002"]).assert().success();

    jf_offline(&db_path)
        .args(["saved", "--clear"])
        .assert()
        .success()
        .stdout(contains("Removed 2 saved job(s)."))
        .stdout(contains("No saved jobs."));
}

#[test]
fn test_show_renders_plain_text_details() {
    let db_path = setup_test_db("cli_show");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["show", "1001"])
        .assert()
        .success()
        .stdout(contains("Rust Engineer 1"))
        .stdout(contains("Join Acme as a rust engineer."))
        .stdout(contains("• Flexible hours"))
        .stdout(contains("🌍 Worldwide"))
        .stdout(contains("<p>").not());
}

#[test]
fn test_show_unknown_job_fails() {
    let db_path = setup_test_db("cli_show_missing");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["show", "9999"])
        .assert()
        .failure()
        .stderr(contains("Job not found: 9999"));
}

#[test]
fn test_deep_links_open_job_details() {
    let db_path = setup_test_db("cli_deep_link");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["show", "--link", "jobfinder://job/1002"])
        .assert()
        .success()
        .stdout(contains("Product Designer 2"));

    jf_offline(&db_path)
        .args(["push", "open", "jobfinder://job/1004"])
        .assert()
        .success()
        .stdout(contains("Rust Engineer 4"));

    jf_offline(&db_path)
        .args(["show", "--link", "https://remotive.com/1002"])
        .assert()
        .failure()
        .stderr(contains("Invalid deep link"));
}

#[test]
fn test_saved_filters_drive_the_home_feed() {
    let db_path = setup_test_db("cli_home_filters");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["filters", "--category", "Design"])
        .assert()
        .success()
        .stdout(contains("Filter preferences saved."))
        .stdout(contains("Design"));

    jf_offline(&db_path)
        .args(["home"])
        .assert()
        .success()
        .stdout(contains("Filters: category='Design'"))
        .stdout(contains("Product Designer 2"))
        .stdout(contains("Growth Marketer").not());

    jf_offline(&db_path)
        .args(["filters", "--clear"])
        .assert()
        .success()
        .stdout(contains("No filter preferences saved."));

    jf_offline(&db_path)
        .args(["home", "--refresh"])
        .assert()
        .success()
        .stdout(contains("Growth Marketer 3"));
}

#[test]
fn test_push_message_becomes_notification() {
    let db_path = setup_test_db("cli_push_message");
    init_db(&db_path);

    jf_offline(&db_path)
        .args([
            "push",
            "message",
            "--json",
            r#"{"notification":{"title":"New Rust role","body":"Acme is hiring"},"data":{"jobId":"1007"}}"#,
        ])
        .assert()
        .success()
        .stdout(contains("New Rust role"))
        .stdout(contains("View Job"))
        .stdout(contains("jobfinder://job/1007"));

    jf_offline(&db_path)
        .args(["push", "message", "--json", r#"{"data":{"foo":"bar"}}"#])
        .assert()
        .success()
        .stdout(contains("nothing to show"));
}

#[test]
fn test_prefs_save_without_token_fails() {
    let db_path = setup_test_db("cli_prefs_no_token");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["prefs", "save", "--frequency", "weekly", "--token", ""])
        .assert()
        .failure()
        .stderr(contains("No push token registered"));

    jf_offline(&db_path)
        .args(["prefs", "save", "--frequency", "hourly", "--token", ""])
        .assert()
        .failure()
        .stderr(contains("Invalid alert frequency"));
}

#[test]
fn test_db_info_log_and_profile() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);

    jf_offline(&db_path)
        .args(["save", "1010"])
        .assert()
        .success();

    jf_offline(&db_path)
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Saved jobs:"))
        .stdout(contains("Integrity check passed."));

    jf_offline(&db_path)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("save"));

    jf_offline(&db_path)
        .args(["profile"])
        .assert()
        .success()
        .stdout(contains("Saved jobs:"))
        .stdout(contains("1"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("cli_db_migrate");
    init_db(&db_path);

    jf().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("0 applied"));
}
