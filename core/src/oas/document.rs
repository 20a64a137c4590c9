#![deny(missing_docs)]

//! # Document Entry Points
//!
//! The two-phase conversion pipeline: the raw document tree is parsed once
//! into the [`Api`] aggregate, then that tree is walked a second time,
//! independently, to produce the Markdown text. No formatting starts before
//! parsing of the entire document completes.

use crate::error::AppResult;
use crate::markdown::render_document;
use crate::oas::models::Api;
use crate::oas::routes::{parse_info, parse_paths};
use crate::oas::schemas::parse_components;
use crate::oas::validation::ensure_openapi_3;
use serde_json::Value;

/// Parses an OpenAPI 3.x document (YAML or JSON text) into the [`Api`] tree.
///
/// The version gate runs before anything else; a non-3.x document never
/// reaches the parser.
pub fn parse_document(content: &str) -> AppResult<Api> {
    let document: Value = serde_yaml::from_str(content)?;
    ensure_openapi_3(&document)?;

    let info = parse_info(document.get("info").unwrap_or(&Value::Null));
    let paths = parse_paths(&document)?;
    let components = match document.get("components") {
        Some(seg) if seg.is_object() => Some(parse_components(seg, &document)?),
        _ => None,
    };

    Ok(Api {
        info,
        paths,
        components,
    })
}

/// Converts an OpenAPI 3.x document into its Markdown rendition.
pub fn convert_str(content: &str) -> AppResult<String> {
    let api = parse_document(content)?;
    Ok(render_document(&api))
}
