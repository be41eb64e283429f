//! OpenAPI specification handling
//!
//! Walks a parsed OpenAPI document and produces the normalized
//! intermediate model the synthesizer consumes.

mod extract;
mod model;

pub use extract::{extract, from_document, BASE_URL_SENTINEL};
pub use model::*;
