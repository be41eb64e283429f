//! Extraction of the intermediate model from an OpenAPI document
//!
//! The document itself is parsed by the `openapiv3` crate; this module only
//! walks it. The spec is never validated here: missing parameters, bodies or
//! examples yield empty lists, not errors. Only a document that cannot be
//! loaded at all fails the extraction.

use std::cmp::Ordering;
use std::path::Path;

use openapiv3::{
    OpenAPI, Operation, ParameterSchemaOrContent, ReferenceOr, Schema, SchemaKind, Type,
};

use crate::common::{Error, Result};

use super::model::{ApiSpec, MethodSpec, ParamSpec, PathSpec, ResponseSpec};

/// Base URL used when the spec declares no servers
pub const BASE_URL_SENTINEL: &str = "dummy URL";

/// Load an OpenAPI file (YAML or JSON) and extract the intermediate model.
///
/// `cases` filters the response variants: an empty list includes every
/// declared response, a non-empty list includes only responses whose
/// status-code label is an exact member.
pub fn extract(path: &Path, cases: &[String]) -> Result<ApiSpec> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::SpecLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    // YAML is a superset of JSON, so one parser covers both input formats.
    let doc: OpenAPI = serde_yaml::from_str(&content).map_err(|e| Error::SpecLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    Ok(from_document(&doc, cases))
}

/// Extract the intermediate model from an already-parsed document.
pub fn from_document(doc: &OpenAPI, cases: &[String]) -> ApiSpec {
    let base_url = doc
        .servers
        .first()
        .map(|s| s.url.clone())
        .unwrap_or_else(|| BASE_URL_SENTINEL.to_string());

    let mut paths = Vec::new();
    for (path, item) in doc.paths.iter() {
        let Some(item) = item.as_item() else { continue };

        // Lexicographic verb order keeps generated scenarios reproducible
        // across runs regardless of declaration order.
        let mut methods: Vec<MethodSpec> = item
            .iter()
            .map(|(verb, op)| method_spec(verb, op, cases))
            .collect();
        methods.sort_by(|a, b| a.method.cmp(&b.method));

        paths.push(PathSpec {
            path: path.clone(),
            methods,
        });
    }

    ApiSpec {
        title: doc.info.title.clone(),
        description: doc.info.description.clone().unwrap_or_default(),
        version: doc.info.version.clone(),
        base_url,
        paths,
    }
}

fn method_spec(verb: &str, op: &Operation, cases: &[String]) -> MethodSpec {
    let params = op
        .parameters
        .iter()
        .filter_map(|p| p.as_item())
        .filter_map(|p| match p {
            openapiv3::Parameter::Query { parameter_data, .. } => Some(ParamSpec {
                name: parameter_data.name.clone(),
                type_name: match &parameter_data.format {
                    ParameterSchemaOrContent::Schema(s) => {
                        s.as_item().map(type_label).unwrap_or("any").to_string()
                    }
                    ParameterSchemaOrContent::Content(_) => "any".to_string(),
                },
                example: parameter_data.example.clone(),
            }),
            _ => None,
        })
        .collect();

    let body = op
        .request_body
        .as_ref()
        .and_then(|b| b.as_item())
        .and_then(|b| b.content.get("application/json"))
        .and_then(|media| media.schema.as_ref())
        .and_then(|s| s.as_item())
        .map(body_fields)
        .unwrap_or_default();

    let mut responses: Vec<ResponseSpec> = Vec::new();
    for (code, resp) in &op.responses.responses {
        push_response(&mut responses, &code.to_string(), resp, cases);
    }
    if let Some(resp) = &op.responses.default {
        push_response(&mut responses, "default", resp, cases);
    }
    // Numeric labels first in status order; non-numeric labels after them.
    // The sort is stable, so case filtering keeps relative order intact.
    responses.sort_by(|a, b| match (a.name.parse::<u16>(), b.name.parse::<u16>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.name.cmp(&b.name),
    });

    MethodSpec {
        method: verb.to_uppercase(),
        summary: op.summary.clone().unwrap_or_default(),
        params,
        body,
        responses,
    }
}

fn push_response(
    out: &mut Vec<ResponseSpec>,
    label: &str,
    resp: &ReferenceOr<openapiv3::Response>,
    cases: &[String],
) {
    if !cases.is_empty() && !cases.iter().any(|c| c == label) {
        return;
    }
    let Some(resp) = resp.as_item() else { return };
    out.push(ResponseSpec {
        name: label.to_string(),
        description: resp.description.clone(),
        example: resp
            .content
            .get("application/json")
            .and_then(|media| media.example.clone()),
    });
}

fn body_fields(schema: &Schema) -> Vec<ParamSpec> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Object(obj)) => obj
            .properties
            .iter()
            .map(|(name, prop)| {
                let prop = prop.as_item();
                ParamSpec {
                    name: name.clone(),
                    type_name: prop
                        .map(|s| type_label(s))
                        .unwrap_or("any")
                        .to_string(),
                    example: prop.and_then(|s| s.schema_data.example.clone()),
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn type_label(schema: &Schema) -> &'static str {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(_)) => "string",
        SchemaKind::Type(Type::Number(_)) => "number",
        SchemaKind::Type(Type::Integer(_)) => "integer",
        SchemaKind::Type(Type::Object(_)) => "object",
        SchemaKind::Type(Type::Array(_)) => "array",
        SchemaKind::Type(Type::Boolean { .. }) => "boolean",
        _ => "any",
    }
}
