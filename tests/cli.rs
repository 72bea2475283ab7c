use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn shelfz(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelfz").unwrap();
    cmd.arg("--no-color").arg("--config-dir").arg(config_dir);
    cmd
}

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("users.json"),
        r#"[{"id":1,"name":"Max","sex":"m"},{"id":2,"name":"Anna","sex":"f"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("categories.json"),
        r#"[{"id":1,"title":"Snacks","icon":"🍫","ownerId":1},
            {"id":2,"title":"Drinks","icon":"🍺","ownerId":2}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("products.json"),
        r#"[{"id":1,"name":"Chocolate","categoryId":1},
            {"id":2,"name":"Beer","categoryId":2}]"#,
    )
    .unwrap();
}

#[test]
fn naked_run_lists_builtin_catalog() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Users:      [All]  Roma  Anna  Max  John",
        ))
        .stdout(predicate::str::contains("🍞 - Grocery"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Apple"));
}

#[test]
fn list_by_user_shows_owned_products() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["list", "--user", "Max"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Max]"))
        .stdout(predicate::str::contains("Jacket"))
        .stdout(predicate::str::contains("Socks"))
        .stdout(predicate::str::contains("Milk").not());
}

#[test]
fn list_by_category() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["ls", "-c", "Fruits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Fruits]"))
        .stdout(predicate::str::contains("Banana"))
        .stdout(predicate::str::contains("Beer").not());
}

#[test]
fn search_without_match_reports_it() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ))
        .stdout(predicate::str::contains("ID ↕").not());
}

#[test]
fn later_filter_replaces_earlier_one_by_default() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["list", "--user", "Max", "--category", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beer"))
        .stdout(predicate::str::contains("Jacket").not());
}

#[test]
fn combine_flag_narrows_filters() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["--combine", "list", "--user", "Max", "--category", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ));
}

#[test]
fn browse_reads_actions_from_stdin() {
    let temp = tempfile::tempdir().unwrap();
    let output = shelfz(temp.path())
        .arg("browse")
        .write_stdin("user Anna\nsearch zzz\nreset\nquit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("[Anna]"));
    assert!(text.contains("No products matching selected criteria"));
    // Initial view, three actions, no prompts when stdin is not a terminal.
    assert_eq!(text.matches("Filters").count(), 4);
    assert!(!text.contains("> "));
}

#[test]
fn fixtures_directory_is_loaded() {
    let temp = tempfile::tempdir().unwrap();
    let fixtures = tempfile::tempdir().unwrap();
    write_fixtures(fixtures.path());

    shelfz(temp.path())
        .arg("--fixtures")
        .arg(fixtures.path())
        .args(["list", "-u", "Anna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🍺 - Drinks"))
        .stdout(predicate::str::contains("Chocolate").not());
}

#[test]
fn missing_fixtures_fail() {
    let temp = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();

    shelfz(temp.path())
        .arg("--fixtures")
        .arg(empty.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("users.json"));
}

#[test]
fn config_sets_filter_mode() {
    let temp = tempfile::tempdir().unwrap();

    shelfz(temp.path())
        .args(["config", "filter-mode", "combined"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filter-mode set to combined"));

    shelfz(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter-mode = combined"));

    shelfz(temp.path())
        .args(["list", "--user", "Max", "--category", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("combined"))
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ));
}

#[test]
fn config_rejects_unknown_mode() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .args(["config", "filter-mode", "sideways"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sideways"));
    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn users_and_categories_are_listed() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna (f)"))
        .stdout(predicate::str::contains("John (m)"));

    shelfz(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("👚 Clothes  (owner: Max)"));
}

#[test]
fn help_groups_commands() {
    let temp = tempfile::tempdir().unwrap();
    shelfz(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse Commands:"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn rust_log_overrides_default_level() {
    let temp = tempfile::tempdir().unwrap();
    let fixtures = tempfile::tempdir().unwrap();
    write_fixtures(fixtures.path());
    fs::write(
        fixtures.path().join("products.json"),
        r#"[{"id":1,"name":"Stray","categoryId":42}]"#,
    )
    .unwrap();

    shelfz(temp.path())
        .env_remove("RUST_LOG")
        .arg("--fixtures")
        .arg(fixtures.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown category").not());

    shelfz(temp.path())
        .env("RUST_LOG", "shelfz=debug")
        .arg("--fixtures")
        .arg(fixtures.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stray"))
        .stderr(predicate::str::contains(
            "product references an unknown category",
        ));
}
