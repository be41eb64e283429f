//! Scenario synthesis
//!
//! Combines the intermediate model, matched overrides and probe results
//! into the ordered scenario document. Steps are appended in
//! path-then-method-then-response traversal order, which the extractor
//! already made deterministic.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::common::Result;
use crate::overrides::OverrideStore;
use crate::probe::Probe;
use crate::route;
use crate::spec::ApiSpec;

use super::model::{ExpectInfo, RequestInfo, Scenario, Step, PROTOCOL_HTTP};

/// Build a scenario document from the extracted model.
///
/// With `overrides` present, each path adopts the query and URL of the
/// first matching override entry and every expected body is captured
/// live through `probe`. Without overrides no request is issued and the
/// static spec examples are used instead.
///
/// A probe failure aborts the whole synthesis; no partial document is
/// returned.
pub async fn synthesize(
    spec: &ApiSpec,
    overrides: Option<&OverrideStore>,
    probe: &dyn Probe,
) -> Result<Scenario> {
    let mut steps = Vec::new();

    for path in &spec.paths {
        // The URL is decided once per path: the spec path is the default
        // and only an actual override match replaces it. Non-matching
        // override entries never touch it.
        let mut url = format!("{}{}", spec.base_url, path.path);
        let mut query = BTreeMap::new();

        if let Some(store) = overrides {
            let matched = store
                .iter()
                .find(|(template, _)| route::templates_match(&path.path, template));
            if let Some((_, entry)) = matched {
                url = format!("{}{}", spec.base_url, entry.path);
                query = entry.query.clone();
            }
        }

        for method in &path.methods {
            for response in &method.responses {
                let body = if overrides.is_some() {
                    Some(probe.probe(&url, &query, &method.method).await?)
                } else {
                    response.example.clone()
                };

                steps.push(Step {
                    title: method.summary.clone(),
                    protocol: PROTOCOL_HTTP.to_string(),
                    request: RequestInfo {
                        method: method.method.clone(),
                        url: url.clone(),
                        query: query.clone(),
                    },
                    expect: ExpectInfo {
                        code: status_code(&response.name),
                        body,
                    },
                });
            }
        }
    }

    Ok(Scenario {
        title: spec.title.clone(),
        steps,
    })
}

/// Parse a status-code label into the expected status code.
///
/// Non-numeric labels such as `"default"` degrade to 0; the value is
/// emitted as-is rather than silently corrected.
pub fn status_code(label: &str) -> u16 {
    label.parse().unwrap_or(0)
}
