//! Headless binary fed with clicks through stdin.

use std::{
    io::Write as _,
    process::{Command, Stdio},
};

/// Runs the binary with the provided `initial` count, feeding `clicks` lines
/// into its stdin, and returns its stdout and stderr.
fn run(initial: i64, clicks: usize) -> (String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_clickcount"))
        .env("CLICKCOUNT_COUNTER__INITIAL", initial.to_string())
        .env("CLICKCOUNT_LOG__LEVEL", "INFO")
        .env_remove("CLICKCOUNT_CONF")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        for _ in 0..clicks {
            stdin.write_all(b"click\n").unwrap();
        }
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn stdout_holds_only_rendered_counts() {
    let (stdout, _) = run(5, 3);

    let counts: Vec<i64> = stdout
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();

    assert_eq!(counts, vec![5, 6, 7, 8]);
}

#[test]
fn logs_go_to_stderr() {
    let (_, stderr) = run(0, 1);

    // Rendering on start, then read and write on the click.
    let logged = stderr
        .lines()
        .filter(|line| line.contains("\"msg\":\"current count\""))
        .count();
    assert_eq!(logged, 3);
}
