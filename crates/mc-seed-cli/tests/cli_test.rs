//! End-to-end tests running the `mc-seed` binary against a mock Supabase server.

use std::process::{Command, Output};

use mockito::{Matcher, Server};
use serde_json::Value;
use tempfile::TempDir;

const TABLE: &str = "/rest/v1/mc_suggestions";

/// Run the binary in an empty directory so no stray `.env` is picked up.
fn run_seed(url: &str, args: &[&str]) -> Output {
    let workdir = TempDir::new().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_mc-seed"))
        .args(args)
        .current_dir(workdir.path())
        .env("SUPABASE_URL", url)
        .env("SUPABASE_KEY", "cli-test-key")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run mc-seed")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Mirror the request body back with ids, like PostgREST does.
fn echo_body(request: &mockito::Request) -> Vec<u8> {
    let mut rows: Vec<Value> = serde_json::from_slice(request.body().unwrap()).unwrap();
    for (i, row) in rows.iter_mut().enumerate() {
        row["id"] = Value::from(i + 1);
    }
    serde_json::to_vec(&rows).unwrap()
}

#[test]
fn test_successful_seed_exits_zero() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", TABLE)
        .match_header("authorization", "Bearer cli-test-key")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body_from_request(echo_body)
        .expect(1)
        .create();

    let output = run_seed(&server.url(), &[]);
    let out = stdout(&output);

    mock.assert();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Seeding 4 suggestions into mc_suggestions..."));
    assert!(out.contains("Successfully inserted 4 suggestions"));
    assert!(out.contains("[HIGH] overdue_task: 3 Overdue Tasks seit > 7 Tagen"));
    assert!(out.contains("[HIGH] calendar_gap: Morgen Shoot E&V Große Elbstraße — Equipment ready?"));
}

#[test]
fn test_verbose_prints_server_ids() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", TABLE)
        .with_status(201)
        .with_body_from_request(echo_body)
        .create();

    let output = run_seed(&server.url(), &["--verbose"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("id:      4"));
}

#[test]
fn test_bad_request_exits_one() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", TABLE)
        .with_status(400)
        .with_body(r#"{"message":"bad request"}"#)
        .create();

    let output = run_seed(&server.url(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.lines().any(|l| l == r#"ERROR 400: {"message":"bad request"}"#),
        "stderr: {err}"
    );
    assert!(!err.contains("Error: ERROR"));
    assert!(!stdout(&output).contains("Successfully inserted"));
}

#[test]
fn test_dry_run_sends_nothing() {
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let output = run_seed(&server.url(), &["--dry-run"]);
    let out = stdout(&output);

    mock.assert();
    assert!(output.status.success());
    assert!(out.contains(&format!("{}{}", server.url(), TABLE)));

    let json_start = out.find('[').unwrap();
    let rows: Vec<Value> = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r["status"] == "pending"));
}

#[test]
fn test_invalid_url_exits_one_without_request() {
    let output = run_seed("ftp://example.com", &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("http or https"));
    assert!(!stdout(&output).contains("Seeding"));
}
