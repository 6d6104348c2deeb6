use assert_cmd::Command;

fn pmf_scanner() -> Command {
    Command::cargo_bin("pmf-scanner").unwrap()
}

#[test]
fn help_lists_flags() {
    let output = pmf_scanner().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--interface"));
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("--timeout"));
}

#[test]
fn failed_scan_exits_non_zero_without_table() {
    // Either iw is missing or the interface does not exist: both must fail cleanly
    let output = pmf_scanner()
        .args(["--no-color", "-i", "pmf-test-does-not-exist0", "-t", "10"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scanning on interface pmf-test-does-not-exist0..."));
    assert!(stdout.contains("Error:"));
    assert!(!stdout.contains("PMF/802.11w Scanner Results"));
    assert!(!stdout.contains("Statistics:"));
}

#[test]
fn rejects_unknown_flag() {
    let output = pmf_scanner().arg("--frobnicate").output().unwrap();
    assert!(!output.status.success());
}
