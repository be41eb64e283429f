//! Error types for the scenario generator
//!
//! Every failure in the pipeline is terminal for the run: nothing retries
//! and no stage is skipped-and-continued. The variants keep the stages
//! distinguishable so the caller can tell a spec-load failure from a
//! probe or write failure.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the scenario generator
#[derive(Error, Debug)]
pub enum Error {
    // === Specification Errors ===
    #[error("Failed to load API spec '{path}': {error}")]
    SpecLoad { path: String, error: String },

    // === Override File Errors ===
    #[error("Failed to read override file '{path}': {error}")]
    OverrideRead { path: String, error: String },

    #[error("Malformed override file: {0}")]
    OverrideParse(String),

    #[error("Override row at line {line} must have 3 columns (path, method, body), found {found}")]
    OverrideRow { line: u64, found: usize },

    #[error("Malformed query pair '{pair}' in override row at line {line} (expected key=value)")]
    OverrideQuery { line: u64, pair: String },

    // === Probe Errors ===
    #[error("Query parameter '{key}' has a non-scalar {kind} value")]
    QueryValue { key: String, kind: &'static str },

    #[error("Invalid HTTP method '{0}'")]
    InvalidMethod(String),

    #[error("Request to {url} failed: {error}")]
    ProbeTransport { url: String, error: String },

    #[error("Failed to read response body from {url}: {error}")]
    ProbeRead { url: String, error: String },

    #[error("Failed to decode response from {url} as a JSON object: {error}")]
    ProbeDecode { url: String, error: String },

    // === Output Errors ===
    #[error("Scenario file cannot be created: {0}")]
    ScenarioCreate(#[source] std::io::Error),

    #[error("Scenario cannot be converted to YAML: {0}")]
    ScenarioConvert(#[source] serde_yaml::Error),

    #[error("Scenario file cannot be written: {0}")]
    ScenarioWrite(#[source] std::io::Error),
}
