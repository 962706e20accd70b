// File: crates/statchart/tests/cli.rs
// Purpose: End-to-end runs of the binary: stdin payload in, PNGs in the working directory,
// completion line on stdout, exit status on failure.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const FILES: [&str; 5] = [
    "kd_chart.png",
    "adr_chart.png",
    "wins_chart.png",
    "kpr_chart.png",
    "kills_chart.png",
];

fn work_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli").join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("clear work dir");
    }
    std::fs::create_dir_all(&dir).expect("create work dir");
    dir
}

fn run(dir: &PathBuf, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_statchart"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn statchart");
    child.stdin.take().expect("stdin").write_all(stdin.as_bytes()).expect("write stdin");
    child.wait_with_output().expect("wait")
}

#[test]
fn success_prints_single_line_and_writes_charts() {
    let dir = work_dir("ok");
    let out = run(
        &dir,
        r#"[{"name": "Alice", "summaryStats": {"kd": 150, "adr": 80.5, "wins": 3, "kpr": 0.75, "kills": 20}}]"#,
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Charts generated successfully\n");
    for f in FILES {
        assert!(dir.join(f).is_file(), "{f} missing");
    }
}

#[test]
fn empty_array_succeeds() {
    let dir = work_dir("empty");
    let out = run(&dir, "[]");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Charts generated successfully\n");
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 5);
}

#[test]
fn bad_json_exits_non_zero_without_output() {
    let dir = work_dir("bad_json");
    let out = run(&dir, "{not json");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn missing_field_exits_non_zero() {
    let dir = work_dir("missing_field");
    let out = run(&dir, r#"[{"name": "Bob"}]"#);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("summaryStats"));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}
