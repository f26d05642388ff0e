use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};

const UNREACHABLE_REPS_URL: &str = "http://127.0.0.1:9/api/sales-reps";
const UNREACHABLE_ORIGIN: &str = "http://127.0.0.1:9";

fn get_salesdash_binary() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace_root = PathBuf::from(&manifest_dir).join("..");
    let binary_path = workspace_root.join("target").join("debug").join("salesdash");

    if binary_path.exists() {
        return binary_path;
    }

    let direct = PathBuf::from(&manifest_dir)
        .join("target")
        .join("debug")
        .join("salesdash");
    if direct.exists() {
        return direct;
    }

    PathBuf::from("target/debug/salesdash")
}

fn run_salesdash(args: &[&str]) -> Output {
    Command::new(get_salesdash_binary())
        .args(args)
        .output()
        .expect("Failed to execute salesdash command")
}

fn run_salesdash_with_env(args: &[&str], env_vars: Vec<(&str, &str)>) -> Output {
    let mut cmd = Command::new(get_salesdash_binary());
    cmd.args(args);
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute salesdash command")
}

async fn run_salesdash_async(args: &[&str], env_vars: Vec<(&str, String)>) -> Output {
    let mut cmd = tokio::process::Command::new(get_salesdash_binary());
    cmd.args(args);
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    cmd.output()
        .await
        .expect("Failed to execute salesdash command")
}

fn output_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn unreachable_backend() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SALESDASH_API__SALES_REPS_URL", UNREACHABLE_REPS_URL),
        ("SALESDASH_API__PAGE_ORIGIN", UNREACHABLE_ORIGIN),
        ("NO_COLOR", "1"),
    ]
}

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_salesdash(&["version"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version command should succeed");
        assert!(stdout.contains("salesdash"), "output should contain 'salesdash'");
        assert!(
            stdout.contains("0.1.0"),
            "output should contain version number"
        );
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_salesdash(&["version", "--detailed"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version --detailed should succeed");
        assert!(stdout.contains("Version"), "output should contain 'Version'");
        assert!(
            stdout.contains("Apache-2.0"),
            "output should contain license type"
        );
        assert!(
            stdout.contains("salesdash-tui"),
            "output should mention the interactive front end"
        );
    }
}

mod help_command_tests {
    use super::*;

    #[test]
    fn test_help_command() {
        let output = run_salesdash(&["--help"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "--help should succeed");
        assert!(stdout.contains("Salesdash"), "help should mention Salesdash");
        assert!(stdout.contains("reps"), "help should mention reps command");
        assert!(stdout.contains("ask"), "help should mention ask command");
        assert!(stdout.contains("config"), "help should mention config command");
        assert!(stdout.contains("--verbose"), "help should list --verbose");
    }

    #[test]
    fn test_unknown_command_fails() {
        let output = run_salesdash(&["deals"]);
        assert!(!output.status.success(), "unknown command should fail");
    }
}

mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_shows_defaults() {
        let output = run_salesdash_with_env(&["config"], vec![("NO_COLOR", "1")]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "config should succeed");
        assert!(stdout.contains("sales_reps_url"));
        assert!(stdout.contains("/api/ai"));
        assert!(stdout.contains("tick_rate_ms"));
    }

    #[test]
    fn test_config_env_override() {
        let output = run_salesdash_with_env(&["config", "--format", "json"], unreachable_backend());
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "config --format json should succeed");
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["api"]["sales_reps_url"], UNREACHABLE_REPS_URL);
        assert_eq!(value["api"]["page_origin"], UNREACHABLE_ORIGIN);
    }

    #[test]
    fn test_config_loads_with_logging_off() {
        let output = run_salesdash_with_env(
            &["config", "--format", "json"],
            vec![("RUST_LOG", "off"), ("NO_COLOR", "1")],
        );
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "RUST_LOG=off should not break loading");
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["logging"]["level"], "off");
    }

    #[test]
    fn test_config_rejects_invalid_url() {
        let output = run_salesdash_with_env(
            &["config"],
            vec![("SALESDASH_API__SALES_REPS_URL", "not a url")],
        );
        let stderr = stderr_to_string(&output);

        assert!(!output.status.success(), "invalid URL should fail");
        assert!(stderr.contains("E2002"), "stderr should carry the error code");
    }
}

mod reps_command_tests {
    use super::*;

    #[test]
    fn test_unreachable_backend_renders_empty_page() {
        let output = run_salesdash_with_env(&["reps"], unreachable_backend());
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "fetch failures are not fatal");
        assert!(stdout.contains("No sales representatives found."));
    }

    #[test]
    fn test_unreachable_backend_json_is_empty_list() {
        let output = run_salesdash_with_env(&["reps", "--format", "json"], unreachable_backend());
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert_eq!(stdout.trim(), "[]");
    }

    #[tokio::test]
    async fn test_renders_cards_from_backend() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sales-reps"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[
                    {"id": 1, "name": "Alice", "role": "Senior Sales Executive", "deals": [
                        {"id": 1, "client": "Acme", "status": "won", "value": 12000},
                        {"id": 2, "client": "Globex", "status": "pending"}
                    ]},
                    {"id": 2, "name": "Bob", "role": "Account Manager", "deals": []}
                ]"#,
            ))
            .mount(&server)
            .await;

        let output = run_salesdash_async(
            &["reps"],
            vec![
                (
                    "SALESDASH_API__SALES_REPS_URL",
                    format!("{}/api/sales-reps", server.uri()),
                ),
                ("NO_COLOR", "1".to_string()),
            ],
        )
        .await;
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Alice"));
        assert!(stdout.contains("Senior Sales Executive"));
        assert!(stdout.contains("Acme"));
        assert!(stdout.contains("$12,000"));
        assert!(stdout.contains("N/A"));
        assert!(stdout.contains("Bob"));
        assert!(stdout.contains("No deals recorded for this representative."));
    }
}

mod ask_command_tests {
    use super::*;

    #[test]
    fn test_empty_question_is_rejected() {
        let output = run_salesdash_with_env(&["ask", "   "], unreachable_backend());
        let stderr = stderr_to_string(&output);

        assert!(!output.status.success(), "empty question should fail");
        assert!(stderr.contains("E9001"));
    }

    #[test]
    fn test_ask_failure_prints_fixed_error() {
        let output = run_salesdash_with_env(&["ask", "Who is winning?"], unreachable_backend());
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Error getting AI response."));
    }

    #[tokio::test]
    async fn test_ask_prints_answer() {
        use wiremock::matchers::{body_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ai"))
            .and(body_json(serde_json::json!({"question": "Best rep?"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"answer": "Alice"})),
            )
            .mount(&server)
            .await;

        let output = run_salesdash_async(
            &["ask", "Best rep?"],
            vec![
                ("SALESDASH_API__PAGE_ORIGIN", server.uri()),
                ("NO_COLOR", "1".to_string()),
            ],
        )
        .await;
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("A: Alice"));
    }
}
