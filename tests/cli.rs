use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".login-form").join("config.json")
}

const BINARY_NAME: &str = "login-form";

fn login_url(server: &MockServer) -> String {
    format!("{}/api/users/login", server.uri())
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[tokio::test]
/// A successful submit prints the response body.
async fn submit_prints_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(
            serde_json::json!({"username": "ada@example.com", "password": "hunter2"}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["submit", "--email", "ada@example.com", "--endpoint"])
        .arg(login_url(&server))
        .env("HOME", tmp.path())
        .env("LOGIN_FORM_PASSWORD", "hunter2")
        .assert()
        .success()
        .stdout(contains("Login successful"))
        .stdout(contains("\"token\": \"abc\""));
}

#[tokio::test]
/// A rejected submit prints the server's message and fails.
async fn submit_reports_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["submit", "--email", "ada@example.com", "--password", "wrong"])
        .arg("--endpoint")
        .arg(login_url(&server))
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
/// Addresses without a scheme are refused before any request is made.
fn submit_rejects_scheme_less_endpoint() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["submit", "--email", "ada@example.com", "--password", "pw"])
        .args(["--endpoint", "37.60.249.24:8195/api/users/login"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("missing URL scheme"));
}

#[test]
/// set-endpoint should persist the URL, reset should delete the file.
fn set_endpoint_then_reset() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["set-endpoint", "https://auth.example.com/api/users/login"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Endpoint saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("https://auth.example.com/api/users/login"));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Resetting"));

    assert!(!config_path.exists());
}
