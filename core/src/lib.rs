#![deny(missing_docs)]

//! # openapi2md Core
//!
//! Core library for converting OpenAPI 3.x definitions into Markdown
//! documentation.
//!
//! The conversion is a pure function of the input text: the document is
//! parsed once into an [`Api`] tree, then that tree is rendered in a second,
//! independent pass. There is no global state, so the crate is usable as a
//! library as well as from the bundled CLI.

/// Shared error types.
pub mod error;

/// Example value synthesis.
pub mod example;

/// Markdown rendering (the format phase).
pub mod markdown;

/// OpenAPI parsing (the parse phase).
pub mod oas;

pub use error::{AppError, AppResult};
pub use example::{component_example, example_value};
pub use markdown::render_document;
pub use oas::models::{
    Api, BodyFormat, ComponentSchema, Components, Contact, Info, License, Operation,
    ParamLocation, Parameter, PathItem, RequestBody, Response, SchemaKind, SchemaNode,
};
pub use oas::{convert_str, parse_document};
