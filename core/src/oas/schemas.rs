#![deny(missing_docs)]

//! # Schema Parsing
//!
//! Recursive descent over raw schema fragments into [`SchemaNode`] trees,
//! plus parsing of the reusable `components` section.
//!
//! Parsing is pure relative to the document tree: no mutation, fully
//! deterministic given the same fragment and document.

use crate::error::AppResult;
use crate::oas::models::{ComponentSchema, Components, SchemaKind, SchemaNode};
use crate::oas::refs::{resolve_pointer, RefTrail};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Parses one raw schema fragment into a [`SchemaNode`].
///
/// `required` is supplied by the parent: true iff the parent object's
/// `required` list names this field. Non-mapping fragments degrade to the
/// empty mapping.
pub(crate) fn parse_schema_node(
    name: &str,
    seg: &Value,
    document: &Value,
    required: bool,
) -> AppResult<SchemaNode> {
    let mut trail = RefTrail::default();
    parse_node(name, seg, document, required, &mut trail)
}

fn parse_node(
    name: &str,
    seg: &Value,
    document: &Value,
    required: bool,
    trail: &mut RefTrail,
) -> AppResult<SchemaNode> {
    let empty = Map::new();
    let seg = seg.as_object().unwrap_or(&empty);

    // A reference node contributes nothing of its own: resolve and re-parse
    // the target in place, keeping the caller-supplied name/required.
    if let Some(ref_str) = seg.get("$ref").and_then(Value::as_str) {
        trail.enter(ref_str)?;
        let resolved = resolve_pointer(ref_str, document);
        let node = parse_node(name, &resolved, document, required, trail);
        trail.leave(ref_str);
        return node;
    }

    let type_name = string_field(seg, "type");
    let kind = match type_name.as_str() {
        "object" => {
            let required_keys = required_list(seg);
            let mut fields = Vec::new();
            if let Some(properties) = seg.get("properties").and_then(Value::as_object) {
                let mut names: Vec<&String> = properties.keys().collect();
                names.sort();
                for field_name in names {
                    let child_required = required_keys.iter().any(|key| key == field_name);
                    fields.push(parse_node(
                        field_name,
                        &properties[field_name.as_str()],
                        document,
                        child_required,
                        trail,
                    )?);
                }
            }
            SchemaKind::Object(fields)
        }
        "array" => {
            let items = seg.get("items").cloned().unwrap_or(Value::Null);
            let item = parse_node("", &items, document, false, trail)?;
            SchemaKind::Array(Box::new(item))
        }
        _ => SchemaKind::Scalar,
    };

    Ok(SchemaNode {
        name: name.to_string(),
        type_name,
        description: string_field(seg, "description"),
        required,
        example: seg.get("example").cloned(),
        examples: named_examples(seg.get("x-examples")),
        kind,
    })
}

/// Parses the `components` mapping; schemas come out sorted by name.
pub(crate) fn parse_components(seg: &Value, document: &Value) -> AppResult<Components> {
    let mut schemas = Vec::new();
    if let Some(entries) = seg.get("schemas").and_then(Value::as_object) {
        let mut names: Vec<&String> = entries.keys().collect();
        names.sort();
        for name in names {
            schemas.push(parse_component_schema(
                name,
                &entries[name.as_str()],
                document,
            )?);
        }
    }
    Ok(Components { schemas })
}

fn parse_component_schema(
    name: &str,
    seg: &Value,
    document: &Value,
) -> AppResult<ComponentSchema> {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);
    Ok(ComponentSchema {
        name: name.to_string(),
        title: string_field(map, "title"),
        description: string_field(map, "description"),
        tags: string_list(map.get("x-tags")),
        root: parse_schema_node("", seg, document, false)?,
    })
}

/// Reads a string field, defaulting to empty.
pub(crate) fn string_field(seg: &Map<String, Value>, key: &str) -> String {
    seg.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

/// Reads a list of strings; a bare string becomes a single entry.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

/// Reads a named-example mapping preserving source insertion order.
pub(crate) fn named_examples(value: Option<&Value>) -> IndexMap<String, Value> {
    value
        .and_then(Value::as_object)
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

fn required_list(seg: &Map<String, Value>) -> Vec<String> {
    seg.get("required")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    fn parse(seg: Value, document: Value) -> SchemaNode {
        parse_schema_node("", &seg, &document, false).unwrap()
    }

    #[test]
    fn test_object_fields_sorted_and_required() {
        let seg = json!({
            "type": "object",
            "required": ["b"],
            "properties": {
                "b": { "type": "string" },
                "a": { "type": "integer" }
            }
        });
        let node = parse(seg, json!({}));
        let SchemaKind::Object(fields) = &node.kind else {
            panic!("expected object kind");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "a");
        assert!(!fields[0].required);
        assert_eq!(fields[1].name, "b");
        assert!(fields[1].required);
    }

    #[test]
    fn test_array_has_single_anonymous_item() {
        let seg = json!({ "type": "array", "items": { "type": "string" } });
        let node = parse(seg, json!({}));
        let SchemaKind::Array(item) = &node.kind else {
            panic!("expected array kind");
        };
        assert_eq!(item.name, "");
        assert_eq!(item.type_name, "string");
        assert!(!item.required);
    }

    #[test]
    fn test_array_missing_items_degrades() {
        let seg = json!({ "type": "array" });
        let node = parse(seg, json!({}));
        let SchemaKind::Array(item) = &node.kind else {
            panic!("expected array kind");
        };
        assert_eq!(item.type_name, "");
        assert_eq!(item.kind, SchemaKind::Scalar);
    }

    #[test]
    fn test_ref_resolves_to_inlined_equivalent() {
        let document = json!({
            "components": {
                "schemas": {
                    "Pet": {
                        "type": "object",
                        "required": ["name"],
                        "properties": { "name": { "type": "string" } }
                    }
                }
            }
        });
        let by_ref = parse_schema_node(
            "pet",
            &json!({ "$ref": "#/components/schemas/Pet" }),
            &document,
            true,
        )
        .unwrap();
        let inlined = parse_schema_node(
            "pet",
            &document["components"]["schemas"]["Pet"],
            &document,
            true,
        )
        .unwrap();
        assert_eq!(by_ref, inlined);
    }

    #[test]
    fn test_unresolved_ref_yields_empty_schema() {
        // Permissive by design; flagged as a silent-data-loss risk.
        let node = parse_schema_node(
            "ghost",
            &json!({ "$ref": "#/components/schemas/Missing" }),
            &json!({ "components": { "schemas": {} } }),
            false,
        )
        .unwrap();
        assert_eq!(node.type_name, "");
        assert_eq!(node.kind, SchemaKind::Scalar);
    }

    #[test]
    fn test_self_referential_schema_errors() {
        let document = json!({
            "components": {
                "schemas": {
                    "Node": {
                        "type": "object",
                        "properties": {
                            "next": { "$ref": "#/components/schemas/Node" }
                        }
                    }
                }
            }
        });
        let err = parse_schema_node(
            "",
            &document["components"]["schemas"]["Node"],
            &document,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CyclicSchema(_)));
    }

    #[test]
    fn test_mutually_recursive_schemas_error() {
        let document = json!({
            "components": {
                "schemas": {
                    "A": {
                        "type": "object",
                        "properties": { "b": { "$ref": "#/components/schemas/B" } }
                    },
                    "B": {
                        "type": "object",
                        "properties": { "a": { "$ref": "#/components/schemas/A" } }
                    }
                }
            }
        });
        let err = parse_schema_node(
            "",
            &document["components"]["schemas"]["A"],
            &document,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CyclicSchema(_)));
    }

    #[test]
    fn test_repeated_sibling_refs_are_not_a_cycle() {
        let document = json!({
            "components": {
                "schemas": {
                    "Leaf": { "type": "string" },
                    "Pair": {
                        "type": "object",
                        "properties": {
                            "left": { "$ref": "#/components/schemas/Leaf" },
                            "right": { "$ref": "#/components/schemas/Leaf" }
                        }
                    }
                }
            }
        });
        let node = parse_schema_node(
            "",
            &document["components"]["schemas"]["Pair"],
            &document,
            false,
        )
        .unwrap();
        let SchemaKind::Object(fields) = &node.kind else {
            panic!("expected object kind");
        };
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|f| f.type_name == "string"));
    }

    #[test]
    fn test_example_and_x_examples_captured() {
        let seg = json!({
            "type": "string",
            "example": "fido",
            "x-examples": { "first": "a", "second": "b" }
        });
        let node = parse(seg, json!({}));
        assert_eq!(node.example, Some(json!("fido")));
        assert_eq!(node.examples.first(), Some((&"first".to_string(), &json!("a"))));
    }

    #[test]
    fn test_non_mapping_fragment_degrades() {
        let node = parse(json!("oops"), json!({}));
        assert_eq!(node.type_name, "");
        assert_eq!(node.kind, SchemaKind::Scalar);
    }

    #[test]
    fn test_parse_components_sorted() {
        let document = json!({
            "components": {
                "schemas": {
                    "Zebra": { "type": "object" },
                    "Ant": { "type": "string", "title": "An Ant", "x-tags": ["fauna"] }
                }
            }
        });
        let components = parse_components(&document["components"], &document).unwrap();
        let names: Vec<&str> = components.schemas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ant", "Zebra"]);
        assert_eq!(components.schemas[0].title, "An Ant");
        assert_eq!(components.schemas[0].tags, vec!["fauna"]);
    }
}
