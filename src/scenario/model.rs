//! Output scenario document types
//!
//! These serialize to the YAML scenario format consumed by the test
//! runner: `{title, steps: [{title, protocol, request, expect}]}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transport label stamped on every step
pub const PROTOCOL_HTTP: &str = "http";

/// A complete generated scenario document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// One request/expectation pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub protocol: String,
    pub request: RequestInfo,
    pub expect: ExpectInfo,
}

/// The request half of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, Value>,
}

/// The expectation half of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectInfo {
    /// Status code parsed from the response label; 0 for non-numeric labels
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}
