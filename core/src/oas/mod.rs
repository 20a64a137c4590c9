#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **models**: Intermediate Representation definitions.
//! - **document**: Two-phase conversion entry points.
//! - **refs**: Same-document `$ref` resolution.
//! - **schemas**: Schema-node and component-schema parsing.
//! - **routes**: Path/operation/parameter parsing.
//! - **validation**: Root version check.

pub mod document;
pub mod models;
pub(crate) mod refs;
pub(crate) mod routes;
pub(crate) mod schemas;
pub(crate) mod validation;

// Re-export public API to keep call sites short
pub use document::{convert_str, parse_document};
