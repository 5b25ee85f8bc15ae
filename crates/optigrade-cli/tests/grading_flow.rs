//! End-to-end grading flows through the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn optigrade(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("optigrade").unwrap();
    cmd.current_dir(dir.path())
        .arg("--session")
        .arg(dir.path().join("session.json"))
        .arg("--history-dir")
        .arg(dir.path().join("history"));
    cmd
}

fn only_record_file(dir: &TempDir) -> String {
    let mut names: Vec<String> = std::fs::read_dir(dir.path().join("history"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1, "expected exactly one record, got {names:?}");
    names.pop().unwrap()
}

#[test]
fn full_grading_pipeline() {
    let dir = TempDir::new().unwrap();
    optigrade(&dir)
        .args(["new", "--title", "Mock exam"])
        .assert()
        .success();

    // 10 correct, 8 wrong, question 19 picked-but-empty, 20 untouched.
    for n in 1..=10 {
        optigrade(&dir)
            .args(["pick", &n.to_string(), "A"])
            .assert()
            .success();
        optigrade(&dir)
            .args(["mark", &n.to_string(), "correct"])
            .assert()
            .success();
    }
    for n in 11..=18 {
        optigrade(&dir)
            .args(["pick", &n.to_string(), "B"])
            .assert()
            .success();
        optigrade(&dir)
            .args(["mark", &n.to_string(), "wrong"])
            .assert()
            .success();
    }
    optigrade(&dir).args(["pick", "19", "C"]).assert().success();
    optigrade(&dir)
        .args(["mark", "19", "empty"])
        .assert()
        .success();

    optigrade(&dir)
        .arg("finish")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Score: 40.0/100 | Correct: 10 | Wrong: 8 | Empty: 2",
        ));

    optigrade(&dir)
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved attempt to"));

    optigrade(&dir)
        .arg("save")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already been saved"));

    optigrade(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mock exam"))
        .stdout(predicate::str::contains("40.0"))
        .stdout(predicate::str::contains("10/8/2"))
        .stdout(predicate::str::contains("1 saved attempt(s)"));

    let record = only_record_file(&dir);
    optigrade(&dir)
        .args(["history", "show", &record])
        .assert()
        .success()
        .stdout(predicate::str::contains("A picked, judged correct"))
        .stdout(predicate::str::contains("B picked, judged wrong"))
        .stdout(predicate::str::contains("C picked, counted empty"))
        .stdout(predicate::str::contains("untouched"));

    optigrade(&dir)
        .args(["history", "delete", &record])
        .assert()
        .success();
    optigrade(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved attempts."));
}

#[test]
fn wrong_override_records_true_answer() {
    let dir = TempDir::new().unwrap();
    optigrade(&dir).arg("new").assert().success();
    optigrade(&dir).args(["pick", "1", "A"]).assert().success();
    optigrade(&dir)
        .args(["mark", "1", "wrong"])
        .assert()
        .success();

    optigrade(&dir)
        .args(["pick", "1", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true answer"));

    // The wrong-marked pick survives; D shows as the annotated answer.
    optigrade(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrong"))
        .stdout(predicate::str::contains("D"));
}

#[test]
fn clear_after_finish_keeps_completed_state() {
    let dir = TempDir::new().unwrap();
    optigrade(&dir)
        .args(["new", "--title", "Quirk"])
        .assert()
        .success();
    optigrade(&dir).args(["pick", "1", "A"]).assert().success();
    optigrade(&dir)
        .args(["mark", "1", "correct"])
        .assert()
        .success();
    optigrade(&dir).arg("finish").assert().success();

    optigrade(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Score: 0.0/100 | Correct: 0 | Wrong: 0 | Empty: 20",
        ));

    // Still finished (no re-finish possible), no longer saved, and the
    // wiped sheet can be saved as-is.
    optigrade(&dir)
        .arg("finish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already finished"));
    optigrade(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("finished, not saved"));
    optigrade(&dir).arg("save").assert().success();
    optigrade(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quirk"));
}

#[test]
fn locked_sheet_rejects_new_picks_but_empty_stays_open() {
    let dir = TempDir::new().unwrap();
    optigrade(&dir).arg("new").assert().success();
    optigrade(&dir).args(["pick", "1", "A"]).assert().success();
    optigrade(&dir)
        .args(["mark", "2", "empty"])
        .assert()
        .success();
    optigrade(&dir).arg("finish").assert().success();

    optigrade(&dir)
        .args(["pick", "1", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locked"));

    optigrade(&dir)
        .args(["pick", "2", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picked E"));
}
