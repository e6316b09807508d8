//! Reader for document-conversion service responses.
//!
//! The conversion service returns its extracted content at a depth that varies
//! between endpoints and versions (`{"md_content": ..}` at the root, or nested
//! under `document`, or inside an array of per-file results). Fields are
//! therefore located by name with a depth-first search in document order
//! rather than through a fixed schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ChunklineError, Result};

/// Metadata about the converted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    pub title: Option<String>,
    /// Number of pages the service processed (0 when not reported).
    pub pages: u32,
    /// Service-side processing time in seconds (0 when not reported).
    pub processing_time: f64,
}

/// Extracted content of one conversion response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub markdown: Option<String>,
    pub text: Option<String>,
    /// Raw JSON text of the root-level `json_content` field.
    pub json: Option<String>,
    pub html: Option<String>,
    pub metadata: DocMeta,
}

impl ConversionResult {
    /// Parse a response body that has already been received.
    pub fn from_json(body: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(body)
            .map_err(|e| ChunklineError::Conversion(format!("invalid response body: {e}")))?;
        Ok(Self::from_value(&root))
    }

    pub fn from_value(root: &Value) -> Self {
        let result = Self {
            markdown: content_field(root, "md_content"),
            text: content_field(root, "text_content"),
            json: root.get("json_content").map(Value::to_string),
            html: content_field(root, "html_content"),
            metadata: DocMeta {
                title: find_first_string(root, "title").map(str::to_string),
                pages: find_first_u32(root, "pages").unwrap_or(0),
                processing_time: find_first_f64(root, "processing_time").unwrap_or(0.0),
            },
        };
        debug!(
            markdown = result.markdown.is_some(),
            text = result.text.is_some(),
            json = result.json.is_some(),
            html = result.html.is_some(),
            pages = result.metadata.pages,
            "parsed conversion response"
        );
        result
    }

    /// The text worth chunking: markdown when present, plain text otherwise.
    pub fn content(&self) -> Option<&str> {
        self.markdown.as_deref().or(self.text.as_deref())
    }
}

/// Root-level string wins; otherwise the first match anywhere in the tree.
fn content_field(root: &Value, name: &str) -> Option<String> {
    root.get(name)
        .and_then(Value::as_str)
        .or_else(|| find_first_string(root, name))
        .map(str::to_string)
}

/// Depth-first search for the first property `name` whose value satisfies `pick`.
///
/// Each property is tested before descending into its value, and the search
/// descends before moving on to the next sibling.
fn find_first<'a, T>(
    value: &'a Value,
    name: &str,
    pick: &impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    match value {
        Value::Object(map) => map.iter().find_map(|(key, inner)| {
            let hit = if key == name { pick(inner) } else { None };
            hit.or_else(|| find_first(inner, name, pick))
        }),
        Value::Array(items) => items.iter().find_map(|item| find_first(item, name, pick)),
        _ => None,
    }
}

pub fn find_first_string<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    find_first(value, name, &Value::as_str)
}

pub fn find_first_u32(value: &Value, name: &str) -> Option<u32> {
    find_first(value, name, &|v: &Value| v.as_u64().and_then(|n| u32::try_from(n).ok()))
}

pub fn find_first_f64(value: &Value, name: &str) -> Option<f64> {
    find_first(value, name, &Value::as_f64)
}
