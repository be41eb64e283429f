//! End-to-end integration tests for the scenario generator
//!
//! These tests run the whole pipeline against OpenAPI fixtures: extract
//! the model, synthesize a scenario (with a mock probe where live
//! capture is involved), write the YAML document and read it back. The
//! CLI binary itself is exercised for the dry-run and failure paths.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

use async_trait::async_trait;
use serde_json::{json, Value};

use spec2scenario::probe::Probe;
use spec2scenario::scenario::{self, writer, Scenario};
use spec2scenario::{spec, Error, OverrideStore, Result};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Probe returning a canned body for every request
struct CannedProbe(Value);

#[async_trait]
impl Probe for CannedProbe {
    async fn probe(
        &self,
        _url: &str,
        _query: &BTreeMap<String, Value>,
        _method: &str,
    ) -> Result<Value> {
        Ok(self.0.clone())
    }
}

/// Probe simulating a transport failure
struct FailingProbe;

#[async_trait]
impl Probe for FailingProbe {
    async fn probe(
        &self,
        url: &str,
        _query: &BTreeMap<String, Value>,
        _method: &str,
    ) -> Result<Value> {
        Err(Error::ProbeTransport {
            url: url.to_string(),
            error: "connection refused".to_string(),
        })
    }
}

#[tokio::test]
async fn static_pipeline_writes_expected_scenario() {
    let api_spec = spec::extract(&fixture("user_api.yaml"), &[]).unwrap();
    let generated = scenario::synthesize(&api_spec, None, &FailingProbe)
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scenario.yml");
    writer::write(&generated, &out).unwrap();

    let parsed: Scenario =
        serde_yaml::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed, generated);

    assert_eq!(parsed.title, "User API");
    // /users/{id} GET has two responses, /users POST and /health GET one each.
    assert_eq!(parsed.steps.len(), 4);

    let get_user = parsed
        .steps
        .iter()
        .find(|s| s.title == "Get a user" && s.expect.code == 200)
        .unwrap();
    assert_eq!(get_user.protocol, "http");
    assert_eq!(get_user.request.method, "GET");
    assert_eq!(
        get_user.request.url,
        "https://api.example.com/v1/users/{id}"
    );
    assert_eq!(get_user.expect.body, Some(json!({"active": true})));

    // The 404 variant has no example, so no expected body is emitted.
    let not_found = parsed
        .steps
        .iter()
        .find(|s| s.expect.code == 404)
        .unwrap();
    assert_eq!(not_found.expect.body, None);
}

#[tokio::test]
async fn override_pipeline_probes_matched_paths() {
    let api_spec = spec::extract(&fixture("user_api.yaml"), &[]).unwrap();
    let overrides = OverrideStore::from_csv(&fixture("overrides.csv")).unwrap();
    let probe = CannedProbe(json!({"id": 42, "active": true}));

    let generated = scenario::synthesize(&api_spec, Some(&overrides), &probe)
        .await
        .unwrap();

    let get_user = generated
        .steps
        .iter()
        .find(|s| s.title == "Get a user" && s.expect.code == 200)
        .unwrap();
    // /users/42 matches the /users/{id} template and replaces the URL.
    assert_eq!(get_user.request.url, "https://api.example.com/v1/users/42");
    assert_eq!(get_user.request.query.get("status"), Some(&json!("active")));
    assert_eq!(get_user.expect.body, Some(json!({"id": 42, "active": true})));

    // /users POST has no matching override; the spec path stays.
    let create = generated
        .steps
        .iter()
        .find(|s| s.title == "Create a user")
        .unwrap();
    assert_eq!(create.request.url, "https://api.example.com/v1/users");
    assert!(create.request.query.is_empty());
}

#[tokio::test]
async fn probe_failure_produces_no_document() {
    let api_spec = spec::extract(&fixture("user_api.yaml"), &[]).unwrap();
    let overrides = OverrideStore::from_csv(&fixture("overrides.csv")).unwrap();

    let err = scenario::synthesize(&api_spec, Some(&overrides), &FailingProbe)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProbeTransport { .. }));
}

#[tokio::test]
async fn case_filter_limits_response_variants() {
    let cases = vec!["200".to_string()];
    let api_spec = spec::extract(&fixture("user_api.yaml"), &cases).unwrap();
    let generated = scenario::synthesize(&api_spec, None, &FailingProbe)
        .await
        .unwrap();

    assert!(generated.steps.iter().all(|s| s.expect.code == 200));
    // The POST's only response is 201, so it contributes no step.
    assert_eq!(generated.steps.len(), 2);
}

#[test]
fn dry_run_prints_the_model_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scenario.yml");

    let output = Command::new(env!("CARGO_BIN_EXE_spec2scenario"))
        .arg(fixture("user_api.yaml"))
        .arg("--dry-run")
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User API"));
    assert!(stdout.contains("/users/{id}"));
    assert!(!out.exists());
}

#[test]
fn missing_spec_file_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_spec2scenario"))
        .arg("/nonexistent/spec.yaml")
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load API spec"));
}

#[test]
fn host_flag_grounds_generated_urls() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scenario.yml");

    let output = Command::new(env!("CARGO_BIN_EXE_spec2scenario"))
        .arg(fixture("user_api.yaml"))
        .arg("--host")
        .arg("http://localhost:8080")
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let parsed: Scenario =
        serde_yaml::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(parsed
        .steps
        .iter()
        .all(|s| s.request.url.starts_with("http://localhost:8080/")));
}
