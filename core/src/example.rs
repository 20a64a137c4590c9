#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Generates schema-shaped sample values used as documentation filler when a
//! schema supplies no literal example.
//!
//! The placeholder policy is fixed for output stability: `0` for numeric
//! types, `false` for booleans, the bare type name for every other tag, and
//! the empty mapping for a missing tag (an unresolved reference).

use crate::oas::models::{SchemaKind, SchemaNode};
use serde_json::{json, Map, Value};

/// Synthesizes an example value for a standalone schema node.
///
/// Named `x-examples` overrides short-circuit synthesis entirely: the first
/// entry's declared value is returned verbatim.
pub fn example_value(node: &SchemaNode) -> Value {
    if let Some((_, value)) = node.examples.first() {
        return value.clone();
    }
    match &node.kind {
        SchemaKind::Object(fields) => {
            let mut map = Map::new();
            for field in fields {
                map.insert(field.name.clone(), example_value(field));
            }
            Value::Object(map)
        }
        SchemaKind::Array(item) => Value::Array(vec![example_value(item)]),
        SchemaKind::Scalar => scalar_example(node),
    }
}

/// Synthesizes the example for a reusable component schema's root.
///
/// Identical to [`example_value`] except an array root yields two item
/// copies, signalling a list in the rendered document.
pub fn component_example(root: &SchemaNode) -> Value {
    if let Some((_, value)) = root.examples.first() {
        return value.clone();
    }
    match &root.kind {
        SchemaKind::Array(item) => {
            let item_example = example_value(item);
            Value::Array(vec![item_example.clone(), item_example])
        }
        _ => example_value(root),
    }
}

fn scalar_example(node: &SchemaNode) -> Value {
    if let Some(example) = &node.example {
        return example.clone();
    }
    match node.type_name.as_str() {
        "integer" | "number" => json!(0),
        "boolean" => json!(false),
        "" => Value::Object(Map::new()),
        other => Value::String(other.to_string()),
    }
}
