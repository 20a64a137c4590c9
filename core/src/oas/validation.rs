#![deny(missing_docs)]

//! # OpenAPI Validation
//!
//! Structural checks applied before any parsing. The converter is not a
//! general validator; the only hard requirement is an OpenAPI 3.x version
//! declaration at the document root.

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Ensures the document declares a supported OpenAPI major version.
///
/// Anything whose top-level `openapi` field does not start with `3.` is
/// rejected before parsing begins — including Swagger 2 documents and
/// documents missing the field entirely.
pub(crate) fn ensure_openapi_3(document: &Value) -> AppResult<()> {
    let version = document
        .get("openapi")
        .and_then(Value::as_str)
        .unwrap_or("");
    if !version.starts_with("3.") {
        return Err(AppError::UnsupportedVersion(format!(
            "expected an OpenAPI 3.x document, found openapi '{}'",
            version
        )));
    }
    Ok(())
}
