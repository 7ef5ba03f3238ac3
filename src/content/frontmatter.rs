//! Front matter extraction.
//!
//! A document starts with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-05-01
//! categories: [Go, 容器]
//! tags:
//!   - 日志
//!   - name: tracing
//!     url: /custom/tracing/
//! ---
//! body...
//! ```
//!
//! The block is parsed as YAML and flattened into [`MetaValue`]s: scalars
//! become trimmed strings, sequences become ordered term lists (duplicates
//! kept). A list item may be a `{name, url}` mapping to pin the term URL.

use super::error::MetadataError;
use crate::log;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::{collections::BTreeMap, sync::LazyLock};

/// Leading `---` line, lazily captured block, closing `---` line.
static RE_FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\A---\r?\n((?s:.*?))^---\r?$").unwrap());

/// One entry of a list-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermInput {
    pub name: String,
    /// Explicit URL from a `{name, url}` item
    pub url: Option<String>,
}

impl TermInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    #[cfg(test)]
    pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }
}

/// Flattened front matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Scalar(String),
    List(Vec<TermInput>),
}

/// Key/value metadata of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, MetaValue>,
}

impl FrontMatter {
    /// Non-empty scalar value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            MetaValue::Scalar(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Terms of a multi-value field. A non-empty scalar counts as one term.
    pub fn terms(&self, key: &str) -> Vec<TermInput> {
        match self.fields.get(key) {
            Some(MetaValue::List(items)) => items.clone(),
            Some(MetaValue::Scalar(s)) if !s.is_empty() => vec![TermInput::new(s.clone())],
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `text` into (front matter block, body).
///
/// Returns `None` when the text does not open with a `---` line.
pub fn split_front_matter(text: &str) -> Option<Result<(&str, &str), MetadataError>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if !(text.starts_with("---\n") || text.starts_with("---\r\n")) {
        return None;
    }

    let Some(captures) = RE_FRONT_MATTER.captures(text) else {
        return Some(Err(MetadataError::Unterminated));
    };
    let block = captures.get(1).map_or("", |m| m.as_str());
    let end = captures.get(0).map_or(text.len(), |m| m.end());
    let body = text[end..].trim_start_matches(['\r', '\n']);
    Some(Ok((block, body)))
}

/// Strict parse: missing front matter is an empty map, broken front matter an error.
pub fn parse_front_matter(text: &str) -> Result<FrontMatter, MetadataError> {
    let block = match split_front_matter(text) {
        None => return Ok(FrontMatter::default()),
        Some(split) => split?.0,
    };

    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(mapping) => Ok(flatten_mapping(mapping)),
        Value::Null => Ok(FrontMatter::default()),
        _ => Err(MetadataError::NotAMapping),
    }
}

/// Tolerant parse used by the build: failures are logged and yield empty metadata.
pub fn extract_metadata(text: &str, source: &str) -> FrontMatter {
    parse_front_matter(text).unwrap_or_else(|err| {
        log!("warn"; "{source}: {err}, using empty metadata");
        FrontMatter::default()
    })
}

fn flatten_mapping(mapping: Mapping) -> FrontMatter {
    let fields = mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let key = scalar_text(&key)?;
            let value = flatten_value(value)?;
            Some((key, value))
        })
        .collect();
    FrontMatter { fields }
}

fn flatten_value(value: Value) -> Option<MetaValue> {
    match value {
        Value::Sequence(items) => Some(MetaValue::List(
            items.into_iter().filter_map(term_input).collect(),
        )),
        Value::Mapping(_) => term_input(value).map(|term| MetaValue::List(vec![term])),
        Value::Tagged(tagged) => flatten_value(tagged.value),
        Value::Null => Some(MetaValue::Scalar(String::new())),
        scalar => scalar_text(&scalar).map(MetaValue::Scalar),
    }
}

/// A list item: plain scalar, or mapping with `name` and optional `url`.
fn term_input(value: Value) -> Option<TermInput> {
    match value {
        Value::Mapping(mapping) => {
            let name = mapping.get("name").and_then(scalar_text)?;
            let url = mapping
                .get("url")
                .and_then(scalar_text)
                .filter(|url| !url.is_empty());
            Some(TermInput { name, url })
        }
        Value::Tagged(tagged) => term_input(tagged.value),
        Value::Null | Value::Sequence(_) => None,
        scalar => scalar_text(&scalar).map(TermInput::new),
    }
}

/// Trimmed text of a scalar YAML value.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
