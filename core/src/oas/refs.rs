#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Helpers for resolving same-document `$ref` pointers against the raw
//! document tree.
//!
//! Resolution is intentionally permissive: a pointer segment that does not
//! exist in the tree degrades to an empty mapping instead of failing, so a
//! dangling reference yields an empty schema fragment. External documents are
//! never fetched.

use crate::error::{AppError, AppResult};
use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The set of `$ref` strings currently being expanded on one resolution path.
///
/// Invariant: a reference re-entered while still active is a self-referential
/// schema; resolution fails with [`AppError::CyclicSchema`] instead of
/// recursing until stack exhaustion.
#[derive(Debug, Default)]
pub(crate) struct RefTrail {
    active: HashSet<String>,
}

impl RefTrail {
    /// Marks a reference as being expanded.
    pub(crate) fn enter(&mut self, ref_str: &str) -> AppResult<()> {
        if !self.active.insert(ref_str.to_string()) {
            return Err(AppError::CyclicSchema(ref_str.to_string()));
        }
        Ok(())
    }

    /// Releases a reference once its subtree is fully parsed.
    pub(crate) fn leave(&mut self, ref_str: &str) {
        self.active.remove(ref_str);
    }
}

/// Resolves a reference string against the document tree.
///
/// The fragment marker is stripped, the pointer is split on `/`, each segment
/// is decoded, and the tree is walked key-by-key. Any miss along the way
/// degrades to the empty mapping.
pub(crate) fn resolve_pointer(ref_str: &str, document: &Value) -> Value {
    let pointer = ref_str.trim_matches(|c| c == '#' || c == '/');
    let mut current = Some(document);
    for segment in pointer.split('/') {
        let key = decode_pointer_segment(segment);
        current = current.and_then(|value| value.get(key.as_str()));
    }
    current
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
