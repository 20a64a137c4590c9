#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Definition of Intermediate Representation (IR) structures for parsed
//! OpenAPI elements.
//!
//! These structs are built once during the parse phase and consumed read-only
//! by the Markdown renderer during the format phase. Nothing here holds on to
//! the raw document tree.

use derive_more::Display;
use indexmap::IndexMap;
use serde_json::Value;

/// Shape of one schema node, selected by the raw `type` tag.
///
/// The variant guarantees at construction time that exactly one of
/// {named fields, item child, nothing} is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// `type: object` — named child fields, sorted by name.
    Object(Vec<SchemaNode>),
    /// `type: array` — exactly one anonymous item schema.
    Array(Box<SchemaNode>),
    /// Any other type tag (including none): a leaf.
    Scalar,
}

/// The parsed representation of one schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Property name; empty for anonymous nodes such as array items.
    pub name: String,
    /// Raw `type` tag (`object`, `array`, `string`, ...). Empty when the
    /// source omitted it or a reference failed to resolve.
    pub type_name: String,
    /// `description` text.
    pub description: String,
    /// Whether the parent object's `required` list names this field.
    pub required: bool,
    /// Literal `example` value, if supplied by the source.
    pub example: Option<Value>,
    /// Named `x-examples` overrides in source insertion order.
    pub examples: IndexMap<String, Value>,
    /// Children, selected by the type tag.
    pub kind: SchemaKind,
}

/// A reusable schema from `components.schemas`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSchema {
    /// Component name (the `components.schemas` key).
    pub name: String,
    /// `title` text.
    pub title: String,
    /// `description` text.
    pub description: String,
    /// `x-tags` labels.
    pub tags: Vec<String>,
    /// The schema tree rooted at this component.
    pub root: SchemaNode,
}

/// The document-wide collection of reusable schemas, sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    /// Reusable schemas in lexicographic name order.
    pub schemas: Vec<ComponentSchema>,
}

/// The source location of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParamLocation {
    /// `in: query`
    #[display("query")]
    Query,
    /// `in: path`
    #[display("path")]
    Path,
    /// `in: header`
    #[display("header")]
    Header,
    /// `in: cookie`
    #[display("cookie")]
    Cookie,
    /// Any other `in` value, kept verbatim.
    #[display("{_0}")]
    Other(String),
}

impl From<&str> for ParamLocation {
    fn from(raw: &str) -> Self {
        match raw {
            "query" => Self::Query,
            "path" => Self::Path,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A single operation parameter. Flat, no recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name in the source.
    pub name: String,
    /// Declared schema type; `string` when the schema omits it.
    pub type_name: String,
    /// Location (`in`).
    pub location: ParamLocation,
    /// Required flag.
    pub required: bool,
    /// `description` text.
    pub description: String,
}

/// Supported body content types, recorded by label only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyFormat {
    /// application/json
    Json,
    /// multipart/form-data
    FormData,
}

impl BodyFormat {
    /// The media-type label this format was selected under.
    pub fn media_type(&self) -> &'static str {
        match self {
            BodyFormat::Json => "application/json",
            BodyFormat::FormData => "multipart/form-data",
        }
    }
}

/// A request body for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    /// `description` text.
    pub description: String,
    /// The selected content type, if any content matched.
    pub format: Option<BodyFormat>,
    /// Root schema of the selected content, if declared.
    pub schema: Option<SchemaNode>,
    /// Literal named example overrides in source insertion order.
    /// Only the first entry is ever rendered.
    pub examples: IndexMap<String, Value>,
}

/// One response entry of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code string (the `responses` key, e.g. `200` or `default`).
    pub status: String,
    /// `description` text.
    pub description: String,
    /// The selected content type, if any content matched.
    pub format: Option<BodyFormat>,
    /// Root schema of the selected content, if declared.
    pub schema: Option<SchemaNode>,
    /// Literal named example overrides in source insertion order.
    /// Only the first entry is ever rendered.
    pub examples: IndexMap<String, Value>,
}

/// One HTTP method under a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Lowercase HTTP method name (the path-item key).
    pub method: String,
    /// `summary` text.
    pub summary: String,
    /// `description` text.
    pub description: String,
    /// `operationId`.
    pub id: String,
    /// Operation tags.
    pub tags: Vec<String>,
    /// Parameters in source declaration order.
    pub parameters: Vec<Parameter>,
    /// Request body, if declared.
    pub request_body: Option<RequestBody>,
    /// Responses sorted by ascending status-code string.
    pub responses: Vec<Response>,
}

/// One URL path entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    /// URL template string (the `paths` key).
    pub path: String,
    /// Operations sorted by ascending HTTP method name.
    pub operations: Vec<Operation>,
    /// Path-level parameters. Modeled but not rendered.
    pub parameters: Vec<Parameter>,
}

/// Contact block of the document metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// License block of the document metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    /// License name.
    pub name: String,
    /// License URL.
    pub url: String,
}

/// Document metadata (`info`).
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    /// Document title.
    pub title: String,
    /// Document version.
    pub version: String,
    /// Document description.
    pub description: String,
    /// Optional contact block.
    pub contact: Option<Contact>,
    /// Optional license block.
    pub license: Option<License>,
}

/// Root aggregate of one parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    /// Document metadata.
    pub info: Info,
    /// Paths sorted by URL template.
    pub paths: Vec<PathItem>,
    /// Reusable schema collection, present iff the document declares a
    /// `components` mapping.
    pub components: Option<Components>,
}
