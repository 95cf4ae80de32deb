use std::process::Command;

fn supermaids() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_supermaids"));
    cmd.env_remove("SUPERMAIDS_QUIET");
    cmd
}

#[test]
fn test_unopenable_database_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let output = supermaids()
        .current_dir(dir.path())
        .arg("--database")
        .arg(blocker.join("supermaids.db"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error connecting to database:"), "stdout: {}", stdout);
}

#[test]
fn test_full_run_prints_five_transactions_then_closing_banner() {
    let dir = tempfile::tempdir().unwrap();

    let output = supermaids()
        .current_dir(dir.path())
        .arg("--database")
        .arg(dir.path().join("supermaids.db"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut last = 0;
    for n in 1..=5 {
        let title = format!("Transaction {}:", n);
        let at = stdout.find(&title).unwrap_or_else(|| panic!("missing {}", title));
        assert!(at > last, "{} out of order", title);
        last = at;
    }

    let closing = stdout.find("Database connection closed successfully").unwrap();
    assert!(closing > last);
    assert!(stdout.contains("Industrial Floor Cleaner"));
    assert!(stdout.contains("Mike Brown"));
}

#[test]
fn test_init_config_is_picked_up_by_later_commands() {
    let dir = tempfile::tempdir().unwrap();

    let init = supermaids()
        .current_dir(dir.path())
        .args(["init", "--database", "jobs/cleaning.db"])
        .output()
        .unwrap();
    assert!(init.status.success());
    assert!(dir.path().join("supermaids.toml").exists());

    let load = supermaids().current_dir(dir.path()).arg("load").output().unwrap();
    assert!(load.status.success());
    assert!(dir.path().join("jobs").join("cleaning.db").exists());
}
