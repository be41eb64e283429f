//! Live response probing
//!
//! Issues one HTTP request per (url, query, method) and captures the
//! decoded JSON body as the expected test value. Probing is strictly
//! sequential and never retried; transport, read and decode failures are
//! surfaced as distinct errors so the failing stage is identifiable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::common::{Error, Result};

/// Header carrying the static API credential
const API_KEY_HEADER: &str = "x-api-key";

/// Seam for issuing probe requests, mockable in tests.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Issue one request and decode the response body as a JSON object.
    async fn probe(
        &self,
        url: &str,
        query: &BTreeMap<String, Value>,
        method: &str,
    ) -> Result<Value>;
}

/// Probe backed by a real HTTP client.
///
/// The credential is an explicit constructor argument rather than an
/// environment read inside the request path; the CLI decides where it
/// comes from.
pub struct HttpProbe {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl HttpProbe {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(
        &self,
        url: &str,
        query: &BTreeMap<String, Value>,
        method: &str,
    ) -> Result<Value> {
        let query_string = build_query_string(query)?;
        let request_url = if query_string.is_empty() {
            url.to_string()
        } else {
            format!("{url}?{query_string}")
        };

        tracing::info!(url = %request_url, %method, "probing endpoint");

        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|_| Error::InvalidMethod(method.to_string()))?;

        let mut request = self.client.request(method, request_url.as_str());
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.as_str());
        }

        let response = request.send().await.map_err(|e| Error::ProbeTransport {
            url: request_url.clone(),
            error: e.to_string(),
        })?;

        let body = response.bytes().await.map_err(|e| Error::ProbeRead {
            url: request_url.clone(),
            error: e.to_string(),
        })?;

        let decoded: serde_json::Map<String, Value> =
            serde_json::from_slice(&body).map_err(|e| Error::ProbeDecode {
                url: request_url,
                error: e.to_string(),
            })?;

        Ok(Value::Object(decoded))
    }
}

/// Concatenate `key=value&` pairs in map order.
///
/// Only scalar values are accepted; a null, array or object value fails
/// with a typed error instead of being stringified blindly.
pub fn build_query_string(query: &BTreeMap<String, Value>) -> Result<String> {
    let mut out = String::new();
    for (key, value) in query {
        let value = scalar_text(key, value)?;
        out.push_str(&format!("{key}={value}&"));
    }
    Ok(out)
}

fn scalar_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(query_value_error(key, "null")),
        Value::Array(_) => Err(query_value_error(key, "array")),
        Value::Object(_) => Err(query_value_error(key, "object")),
    }
}

fn query_value_error(key: &str, kind: &'static str) -> Error {
    Error::QueryValue {
        key: key.to_string(),
        kind,
    }
}
