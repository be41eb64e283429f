//! Intermediate model extracted from an OpenAPI document
//!
//! Each value is built once by the extractor and never mutated afterwards;
//! the synthesizer only reads it.

use serde_json::Value;

/// Normalized view of an API specification
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSpec {
    pub title: String,
    pub description: String,
    pub version: String,
    /// First declared server URL, or [`BASE_URL_SENTINEL`](super::BASE_URL_SENTINEL)
    /// when the spec declares no servers
    pub base_url: String,
    /// Paths in spec declaration order
    pub paths: Vec<PathSpec>,
}

/// One path template and its operations
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    /// Path template, may contain `{name}` placeholders
    pub path: String,
    /// Operations sorted lexicographically by verb
    pub methods: Vec<MethodSpec>,
}

/// One operation on a path
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Uppercase HTTP verb ("GET", "POST", ...)
    pub method: String,
    pub summary: String,
    /// Declared query parameters
    pub params: Vec<ParamSpec>,
    /// JSON request-body properties
    pub body: Vec<ParamSpec>,
    /// Included response variants, sorted numerically by status label
    pub responses: Vec<ResponseSpec>,
}

/// A named field with a primitive type label and an optional example
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub type_name: String,
    pub example: Option<Value>,
}

/// One response variant of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    /// Status-code label ("200", "404", "default", ...)
    pub name: String,
    pub description: String,
    /// Static JSON example from the spec, if declared
    pub example: Option<Value>,
}
