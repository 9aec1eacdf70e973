//! Black-box tests for the `linecount` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn linecount(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("linecount").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn sample_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "1\n2\n3\n").unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/c.rs"), "fn main() {}").unwrap();
    dir
}

#[test]
fn prints_two_summary_lines() {
    let dir = sample_tree();
    let assert = linecount(dir.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert!(
        lines[0].starts_with("Counted 4 lines on 3 files in "),
        "{stdout}"
    );
    assert!(lines[0].ends_with('s'));
    assert!(lines[1].starts_with("Throughput: "), "{stdout}");
    assert!(lines[1].ends_with(" lines/s"));
}

#[test]
fn quiet_without_debug() {
    let dir = sample_tree();
    fs::write(dir.path().join("bad.bin"), [0xFFu8, 0x00, 0xFE]).unwrap();

    linecount(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 4 lines on 4 files in "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_reports_non_utf8_files() {
    let dir = sample_tree();
    fs::write(dir.path().join("bad.bin"), [0xFFu8, 0x00, 0xFE]).unwrap();

    linecount(dir.path())
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 4 lines on 4 files in "))
        .stderr(predicate::str::contains("Not a UTF-8 file: "))
        .stderr(predicate::str::contains("bad.bin"));
}

#[test]
fn unknown_arguments_are_ignored() {
    let dir = sample_tree();
    linecount(dir.path())
        .args(["--format", "json", "elsewhere", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 4 lines on 3 files in "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn fast_run_reports_throughput_without_crashing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "only\n").unwrap();

    // A tiny tree finishes well under a second; the divisor is clamped to 1.
    linecount(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 1 lines on 1 files in 0s"))
        .stdout(predicate::str::contains("Throughput: 1 lines/s"));
}

#[test]
fn empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    linecount(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Counted 0 lines on 0 files in "));
}

#[cfg(unix)]
#[test]
fn locked_directory_is_reported_in_debug() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "1\n2\n3\n").unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("c.txt"), "x\n".repeat(10)).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let privileged = fs::read_dir(&locked).is_ok();
    let assert = linecount(dir.path()).arg("--debug").assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if privileged {
        return;
    }

    assert
        .success()
        .stdout(predicate::str::contains("Counted 3 lines on 2 files in "))
        .stderr(predicate::str::contains("Access to folder '"))
        .stderr(predicate::str::contains("was denied, therefore skipping it."));
}

#[cfg(unix)]
mod unreadable {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Tree with an unreadable file and a locked directory, or `None` when
    /// the current user bypasses permissions.
    fn restricted_tree() -> Option<tempfile::TempDir> {
        let dir = sample_tree();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "a\nb\n").unwrap();
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("c.txt"), "x\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::File::open(&secret).is_ok() || fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return None;
        }
        Some(dir)
    }

    fn unlock(dir: &tempfile::TempDir) {
        fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn debug_reports_read_errors_with_detail() {
        let Some(dir) = restricted_tree() else {
            return;
        };
        let assert = linecount(dir.path()).arg("--debug").assert();
        unlock(&dir);

        assert
            .success()
            .stdout(predicate::str::contains("Counted 4 lines on 4 files in "))
            .stderr(predicate::str::contains("Error reading file "))
            .stderr(predicate::str::contains("secret.txt"))
            .stderr(predicate::str::contains("FileRead {"));
    }

    #[test]
    fn no_diagnostics_without_debug() {
        let Some(dir) = restricted_tree() else {
            return;
        };
        let assert = linecount(dir.path()).assert();
        unlock(&dir);

        assert
            .success()
            .stdout(predicate::str::contains("Counted 4 lines on 4 files in "))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn version_flag() {
    let dir = tempfile::tempdir().unwrap();
    linecount(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(linecount_cli::VERSION));
}
