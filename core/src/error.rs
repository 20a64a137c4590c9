#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for document load errors (YAML or JSON input).
    #[display("Document Error: {_0}")]
    Document(serde_yaml::Error),

    /// The input is not an OpenAPI 3.x definition.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Unsupported Version: {_0}")]
    UnsupportedVersion(String),

    /// A `$ref` chain revisits a schema it is currently expanding.
    #[from(ignore)]
    #[display("Cyclic Reference: {_0}")]
    CyclicSchema(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because several
/// variants carry a `String`, which does not implement `std::error::Error`,
/// causing auto-derived `source()` implementations to fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
