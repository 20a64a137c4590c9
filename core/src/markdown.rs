#![deny(missing_docs)]

//! # Markdown Rendering
//!
//! The format phase: walks the parsed [`Api`] tree and accumulates the
//! output document. Table rows are pipe-delimited; nesting depth inside a
//! schema table is encoded by prefixing the field name with one `»` per
//! level. Example payloads are fenced JSON blocks with 4-space indentation.

use crate::example::{component_example, example_value};
use crate::oas::models::{
    Api, ComponentSchema, Components, Info, Operation, PathItem, RequestBody, Response,
    SchemaKind, SchemaNode,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Marker prefixed to a field name once per nesting level.
const NESTING_MARKER: &str = "»";

/// Header of every schema/properties table.
const FIELD_TABLE_HEADER: &str = "|Field|Type|Required|Description|\n|---|---|---|---|\n";

/// Renders the full Markdown document for a parsed API.
pub fn render_document(api: &Api) -> String {
    let mut out = String::new();
    out.push_str(&render_info(&api.info));
    if !api.paths.is_empty() {
        out.push_str("## API\n\n");
        for path in &api.paths {
            out.push_str(&render_path(path));
        }
    }
    if let Some(components) = &api.components {
        out.push_str(&render_components(components));
    }
    out
}

fn render_info(info: &Info) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", info.title));
    out.push_str(&format!("{}\n\n", info.description));
    if let Some(contact) = &info.contact {
        out.push_str("Contact:\n\n");
        out.push_str(&format!("Name: {}\n\n", contact.name));
        out.push_str(&format!("Email: {}\n\n", contact.email));
    }
    if let Some(license) = &info.license {
        out.push_str("License:\n\n");
        out.push_str(&format!("Name: {}\n\n", license.name));
        out.push_str(&format!("URL: {}\n\n", license.url));
    }
    out
}

fn render_path(path: &PathItem) -> String {
    let mut out = String::new();
    out.push_str(&format!("### {}\n\n", path.path));
    for operation in &path.operations {
        out.push_str(&render_operation(operation));
    }
    out
}

fn render_operation(op: &Operation) -> String {
    let mut out = String::new();
    out.push_str(&format!("#### {}\n\n", op.method.to_uppercase()));
    if !op.description.is_empty() {
        out.push_str(&format!("{}\n\n", op.description));
    }

    if !op.parameters.is_empty() {
        out.push_str("##### Parameters\n\n");
        out.push_str("|Field|In|Type|Required|Description|\n|---|---|---|---|---|\n");
        for parameter in &op.parameters {
            out.push_str(&format!(
                "|{}|{}|{}|{}|{}|\n",
                parameter.name,
                parameter.location,
                parameter.type_name,
                parameter.required,
                parameter.description
            ));
        }
    }

    if let Some(body) = &op.request_body {
        out.push_str("##### Request Body\n\n");
        out.push_str(&render_request_body(body));
        out.push_str(&render_request_body_example(body));
    }

    if !op.responses.is_empty() {
        out.push_str("##### Responses\n\n");
        out.push_str("|Status|Description|\n|---|---|\n");
        for response in &op.responses {
            out.push_str(&format!("|{}|{}|\n", response.status, response.description));
        }

        // All schema tables first, then all example blocks. The two loops are
        // never interleaved per response.
        out.push_str("##### Response Schema\n\n");
        for response in &op.responses {
            out.push_str(&render_response_schema(response));
        }

        out.push_str("##### Response Example\n\n");
        for response in &op.responses {
            out.push_str(&render_response_example(response));
        }
    }

    out
}

fn render_request_body(body: &RequestBody) -> String {
    let Some(schema) = &body.schema else {
        return String::new();
    };
    let mut out = String::new();
    out.push_str("Body Parameter\n\n");
    out.push_str(FIELD_TABLE_HEADER);
    out.push_str(&render_schema_rows(schema, 0));
    out
}

fn render_request_body_example(body: &RequestBody) -> String {
    let Some(example) = media_example(&body.examples, body.schema.as_ref()) else {
        return String::new();
    };
    format!("Body Example\n\n{}", json_block(&example))
}

fn render_response_schema(response: &Response) -> String {
    let Some(schema) = &response.schema else {
        return String::new();
    };
    let mut out = String::new();
    out.push_str(&format!("Status Code {}\n\n", response.status));
    out.push_str(FIELD_TABLE_HEADER);
    out.push_str(&render_schema_rows(schema, 0));
    out
}

fn render_response_example(response: &Response) -> String {
    let Some(example) = media_example(&response.examples, response.schema.as_ref()) else {
        return String::new();
    };
    format!("{} Response\n\n{}", response.status, json_block(&example))
}

/// A literal named example (first entry) beats the synthesized one.
fn media_example(examples: &IndexMap<String, Value>, schema: Option<&SchemaNode>) -> Option<Value> {
    if let Some((_, value)) = examples.first() {
        return Some(value.clone());
    }
    schema.map(example_value)
}

fn render_components(components: &Components) -> String {
    let mut out = String::new();
    out.push_str("## Schemas\n\n");
    for schema in &components.schemas {
        out.push_str(&render_component_schema(schema));
    }
    out
}

fn render_component_schema(schema: &ComponentSchema) -> String {
    let mut out = String::new();
    out.push_str(&format!("### {}\n\n", schema.name));
    if !schema.description.is_empty() {
        out.push_str(&format!("{}\n\n", schema.description));
    }

    out.push_str("**Properties**\n\n");
    out.push_str(FIELD_TABLE_HEADER);
    match &schema.root.kind {
        SchemaKind::Object(_) => out.push_str(&render_schema_rows(&schema.root, 0)),
        SchemaKind::Array(item) => {
            // The component's own name stands in for the anonymous root row.
            out.push_str(&format!(
                "|{}|[{}]|{}|{}|\n",
                schema.name, item.type_name, schema.root.required, schema.description
            ));
            out.push_str(&render_schema_rows(item, 0));
        }
        SchemaKind::Scalar => {
            out.push_str(&format!(
                "|{}|{}|{}|{}|\n",
                schema.name, schema.root.type_name, schema.root.required, schema.description
            ));
        }
    }

    let example = component_example(&schema.root);
    out.push_str("**Example**\n\n");
    out.push_str(&json_block(&example));
    out
}

/// Renders one table row per emitting node at the supplied nesting level.
///
/// Object nodes emit a row only when named, then recurse one level deeper
/// (anonymous objects recurse at the same level). Array nodes always emit a
/// row typed `[<item type>]` and recurse into the item. Scalar nodes emit a
/// row only when named; an empty type tag (unresolved reference) emits
/// nothing.
fn render_schema_rows(node: &SchemaNode, level: usize) -> String {
    let mut out = String::new();
    match &node.kind {
        SchemaKind::Object(fields) => {
            let mut child_level = level;
            if !node.name.is_empty() {
                out.push_str(&schema_row(node, &node.type_name, level));
                child_level += 1;
            }
            for field in fields {
                out.push_str(&render_schema_rows(field, child_level));
            }
        }
        SchemaKind::Array(item) => {
            out.push_str(&schema_row(node, &format!("[{}]", item.type_name), level));
            out.push_str(&render_schema_rows(item, level + 1));
        }
        SchemaKind::Scalar => {
            if node.name.is_empty() || node.type_name.is_empty() {
                return out;
            }
            out.push_str(&schema_row(node, &node.type_name, level));
        }
    }
    out
}

fn schema_row(node: &SchemaNode, type_label: &str, level: usize) -> String {
    format!(
        "|{}{}|{}|{}|{}|\n",
        NESTING_MARKER.repeat(level),
        node.name,
        type_label,
        node.required,
        node.description
    )
}

fn json_block(value: &Value) -> String {
    format!("```json\n{}\n```\n", pretty_json(value))
}

/// Pretty-prints a JSON value with 4-space indentation.
fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .expect("serializing an in-memory Value cannot fail");
    String::from_utf8(buf).expect("serde_json emits UTF-8")
}
