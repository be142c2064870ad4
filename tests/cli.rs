// End-to-end runs of the binary over piped stdin

use assert_cmd::Command;
use predicates::prelude::*;

fn rostty() -> Command {
    let mut cmd = Command::cargo_bin("rostty").expect("binary builds");
    cmd.args(["--plain", "--no-color"]).env_remove("RUST_LOG");
    cmd
}

#[test]
fn scripted_session_prints_every_report() {
    let script = "1\nAlice\n2\n10000\nMath\n4\n10000\n30\n3\n10000\n5\n10000\n3\n99999\n6\n";
    rostty()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Student Management System"))
        .stdout(predicate::str::contains(
            "Student Alice added successfully. Student ID: 10000",
        ))
        .stdout(predicate::str::contains("Alice enrolled in Math successfully"))
        .stdout(predicate::str::contains("Remaining Balance: $70"))
        .stdout(predicate::str::contains("Balance for Alice: 70"))
        .stdout(predicate::str::contains("Courses: Math"))
        .stdout(predicate::str::contains(
            "Student not found. Please enter a correct student ID",
        ))
        .stdout(predicate::str::ends_with(
            "Thank you for using the Student Management System. Exiting...\n",
        ));
}

#[test]
fn strict_lookups_report_missing_enrollment() {
    rostty()
        .arg("--strict-lookups")
        .write_stdin("2\n42\nMath\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student not found"));
}

#[test]
fn lenient_lookups_stay_silent_on_missing_enrollment() {
    rostty()
        .write_stdin("2\n42\nMath\n5\n42\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student not found").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn reported_misses_do_not_log_at_default_level() {
    rostty()
        .write_stdin("3\n42\n4\n42\n10\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn first_id_flag_moves_the_counter() {
    rostty()
        .args(["--first-id", "500", "--opening-balance", "20"])
        .write_stdin("1\nZed\n3\n500\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID: 500"))
        .stdout(predicate::str::contains("Balance for Zed: 20"));
}

#[test]
fn bad_flag_fails_fast() {
    Command::cargo_bin("rostty")
        .unwrap()
        .arg("--save-to")
        .assert()
        .failure();
}
