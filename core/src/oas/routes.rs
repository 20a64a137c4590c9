#![deny(missing_docs)]

//! # Path and Operation Parsing
//!
//! Parsing logic for the document's `info` and `paths` sections: operations,
//! parameters, request bodies, and responses.

use crate::error::AppResult;
use crate::oas::models::{
    BodyFormat, Contact, Info, License, Operation, ParamLocation, Parameter, PathItem,
    RequestBody, Response, SchemaNode,
};
use crate::oas::schemas::{named_examples, parse_schema_node, string_field, string_list};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Path-item keys that define operations. Alphabetical, so iterating this
/// list yields operations already sorted by method name.
const HTTP_METHODS: [&str; 8] = [
    "delete", "get", "head", "options", "patch", "post", "put", "trace",
];

/// Parses the document's `info` mapping.
pub(crate) fn parse_info(seg: &Value) -> Info {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);

    let contact = map
        .get("contact")
        .and_then(Value::as_object)
        .map(|contact| Contact {
            name: string_field(contact, "name"),
            email: string_field(contact, "email"),
        });

    let license = map
        .get("license")
        .and_then(Value::as_object)
        .map(|license| License {
            name: string_field(license, "name"),
            url: string_field(license, "url"),
        });

    Info {
        title: string_field(map, "title"),
        version: string_field(map, "version"),
        description: string_field(map, "description"),
        contact,
        license,
    }
}

/// Parses the `paths` mapping, sorted by URL template.
pub(crate) fn parse_paths(document: &Value) -> AppResult<Vec<PathItem>> {
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };
    let mut templates: Vec<&String> = paths.keys().collect();
    templates.sort();

    let mut out = Vec::new();
    for template in templates {
        out.push(parse_path_item(
            template,
            &paths[template.as_str()],
            document,
        )?);
    }
    Ok(out)
}

fn parse_path_item(path: &str, seg: &Value, document: &Value) -> AppResult<PathItem> {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);

    let mut parameters = Vec::new();
    if let Some(list) = map.get("parameters").and_then(Value::as_array) {
        for value in list {
            parameters.push(parse_parameter(value));
        }
    }

    let mut operations = Vec::new();
    for method in HTTP_METHODS {
        if let Some(op) = map.get(method) {
            operations.push(parse_operation(method, op, document)?);
        }
    }

    Ok(PathItem {
        path: path.to_string(),
        operations,
        parameters,
    })
}

fn parse_operation(method: &str, seg: &Value, document: &Value) -> AppResult<Operation> {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);

    // Source declaration order is kept for parameters.
    let mut parameters = Vec::new();
    if let Some(list) = map.get("parameters").and_then(Value::as_array) {
        for value in list {
            parameters.push(parse_parameter(value));
        }
    }

    let mut responses = Vec::new();
    if let Some(entries) = map.get("responses").and_then(Value::as_object) {
        let mut statuses: Vec<&String> = entries.keys().collect();
        statuses.sort();
        for status in statuses {
            responses.push(parse_response(
                status,
                &entries[status.as_str()],
                document,
            )?);
        }
    }

    let request_body = match map.get("requestBody") {
        Some(body) => Some(parse_request_body(body, document)?),
        None => None,
    };

    Ok(Operation {
        method: method.to_string(),
        summary: string_field(map, "summary"),
        description: string_field(map, "description"),
        id: string_field(map, "operationId"),
        tags: string_list(map.get("tags")),
        parameters,
        request_body,
        responses,
    })
}

fn parse_parameter(seg: &Value) -> Parameter {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);

    let type_name = map
        .get("schema")
        .and_then(|schema| schema.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("string")
        .to_string();

    Parameter {
        name: string_field(map, "name"),
        type_name,
        location: ParamLocation::from(map.get("in").and_then(Value::as_str).unwrap_or("")),
        required: map.get("required").and_then(Value::as_bool).unwrap_or(false),
        description: string_field(map, "description"),
    }
}

fn parse_request_body(seg: &Value, document: &Value) -> AppResult<RequestBody> {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);
    let content = parse_media_content(map, document)?;
    Ok(RequestBody {
        description: string_field(map, "description"),
        format: content.format,
        schema: content.schema,
        examples: content.examples,
    })
}

fn parse_response(status: &str, seg: &Value, document: &Value) -> AppResult<Response> {
    let empty = Map::new();
    let map = seg.as_object().unwrap_or(&empty);
    let content = parse_media_content(map, document)?;
    Ok(Response {
        status: status.to_string(),
        description: string_field(map, "description"),
        format: content.format,
        schema: content.schema,
        examples: content.examples,
    })
}

/// Extracted body/response content for the selected media type.
struct MediaContent {
    format: Option<BodyFormat>,
    schema: Option<SchemaNode>,
    examples: IndexMap<String, Value>,
}

/// Picks the content entry to document: JSON first, then form-data by label.
/// A missing `content` (or neither media type) is a normal condition and
/// yields an empty selection.
fn parse_media_content(seg: &Map<String, Value>, document: &Value) -> AppResult<MediaContent> {
    let mut selected = MediaContent {
        format: None,
        schema: None,
        examples: IndexMap::new(),
    };
    let Some(content) = seg.get("content").and_then(Value::as_object) else {
        return Ok(selected);
    };

    for format in [BodyFormat::Json, BodyFormat::FormData] {
        let Some(media) = content.get(format.media_type()).and_then(Value::as_object) else {
            continue;
        };
        selected.schema = match media.get("schema") {
            Some(schema_seg) => Some(parse_schema_node("", schema_seg, document, false)?),
            None => None,
        };
        selected.examples = media_examples(media);
        selected.format = Some(format);
        break;
    }

    Ok(selected)
}

/// Reads the media type's named example overrides. An entry shaped like an
/// OpenAPI Example Object (a mapping with `value`) contributes that value;
/// any other shape is kept verbatim.
fn media_examples(media: &Map<String, Value>) -> IndexMap<String, Value> {
    named_examples(media.get("examples"))
        .into_iter()
        .map(|(name, entry)| {
            let value = match &entry {
                Value::Object(map) if map.contains_key("value") => map["value"].clone(),
                _ => entry,
            };
            (name, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_info_full() {
        let info = parse_info(&json!({
            "title": "Pets",
            "version": "1.0.0",
            "description": "All about pets.",
            "contact": { "name": "API Support", "email": "support@example.com" },
            "license": { "name": "Apache 2.0", "url": "https://example.com/license" }
        }));
        assert_eq!(info.title, "Pets");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.contact.as_ref().map(|c| c.email.as_str()), Some("support@example.com"));
        assert_eq!(info.license.as_ref().map(|l| l.name.as_str()), Some("Apache 2.0"));
    }

    #[test]
    fn test_parse_info_missing_blocks() {
        let info = parse_info(&json!({ "title": "Bare" }));
        assert!(info.contact.is_none());
        assert!(info.license.is_none());
        assert_eq!(info.description, "");
    }

    #[test]
    fn test_paths_sorted_by_template() {
        let document = json!({
            "paths": {
                "/zoo": { "get": { "responses": {} } },
                "/pets": { "get": { "responses": {} } }
            }
        });
        let paths = parse_paths(&document).unwrap();
        let templates: Vec<&str> = paths.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(templates, vec!["/pets", "/zoo"]);
    }

    #[test]
    fn test_operations_sorted_by_method() {
        let document = json!({
            "paths": {
                "/pets": {
                    "post": { "responses": {} },
                    "get": { "responses": {} },
                    "delete": { "responses": {} }
                }
            }
        });
        let paths = parse_paths(&document).unwrap();
        let methods: Vec<&str> = paths[0]
            .operations
            .iter()
            .map(|op| op.method.as_str())
            .collect();
        assert_eq!(methods, vec!["delete", "get", "post"]);
    }

    #[test]
    fn test_non_method_path_keys_ignored() {
        let document = json!({
            "paths": {
                "/pets": {
                    "summary": "ignored",
                    "parameters": [ { "name": "tenant", "in": "header" } ],
                    "get": { "responses": {} }
                }
            }
        });
        let paths = parse_paths(&document).unwrap();
        assert_eq!(paths[0].operations.len(), 1);
        assert_eq!(paths[0].parameters.len(), 1);
        assert_eq!(paths[0].parameters[0].location, ParamLocation::Header);
    }

    #[test]
    fn test_parameter_defaults() {
        let parameter = parse_parameter(&json!({ "name": "limit", "in": "query" }));
        assert_eq!(parameter.type_name, "string");
        assert!(!parameter.required);
        assert_eq!(parameter.description, "");
    }

    #[test]
    fn test_parameter_schema_type() {
        let parameter = parse_parameter(&json!({
            "name": "limit",
            "in": "query",
            "required": true,
            "schema": { "type": "integer" },
            "description": "Page size."
        }));
        assert_eq!(parameter.type_name, "integer");
        assert!(parameter.required);
        assert_eq!(parameter.location, ParamLocation::Query);
    }

    #[test]
    fn test_responses_sorted_by_status() {
        let operation = parse_operation(
            "get",
            &json!({
                "responses": {
                    "404": { "description": "missing" },
                    "200": { "description": "ok" },
                    "default": { "description": "fallback" }
                }
            }),
            &json!({}),
        )
        .unwrap();
        let statuses: Vec<&str> = operation
            .responses
            .iter()
            .map(|r| r.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["200", "404", "default"]);
    }

    #[test]
    fn test_content_prefers_json() {
        let body = parse_request_body(
            &json!({
                "content": {
                    "multipart/form-data": { "schema": { "type": "string" } },
                    "application/json": { "schema": { "type": "object" } }
                }
            }),
            &json!({}),
        )
        .unwrap();
        assert_eq!(body.format, Some(BodyFormat::Json));
        assert_eq!(body.schema.as_ref().map(|s| s.type_name.as_str()), Some("object"));
    }

    #[test]
    fn test_content_falls_back_to_form_data() {
        let body = parse_request_body(
            &json!({
                "content": {
                    "multipart/form-data": { "schema": { "type": "string" } }
                }
            }),
            &json!({}),
        )
        .unwrap();
        assert_eq!(body.format, Some(BodyFormat::FormData));
    }

    #[test]
    fn test_no_matching_content_is_not_an_error() {
        let response = parse_response(
            "204",
            &json!({ "description": "no content" }),
            &json!({}),
        )
        .unwrap();
        assert_eq!(response.format, None);
        assert!(response.schema.is_none());
        assert!(response.examples.is_empty());
    }

    #[test]
    fn test_media_examples_unwrap_value() {
        let response = parse_response(
            "200",
            &json!({
                "description": "ok",
                "content": {
                    "application/json": {
                        "schema": { "type": "object" },
                        "examples": {
                            "main": { "value": { "id": 1 } },
                            "bare": { "id": 2 }
                        }
                    }
                }
            }),
            &json!({}),
        )
        .unwrap();
        assert_eq!(response.examples.first(), Some((&"main".to_string(), &json!({ "id": 1 }))));
        assert_eq!(response.examples.get("bare"), Some(&json!({ "id": 2 })));
    }
}
