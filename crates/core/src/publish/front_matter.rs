//! Front-matter extraction
//!
//! A note may open with a YAML block fenced by `---` lines. The block is
//! parsed leniently: unknown keys are ignored, scalar values are coerced the
//! way a note author expects, and a block that fails to parse yields default
//! metadata rather than an error.

use ghostpress_domain::NoteMetadata;
use serde_yaml::{Mapping, Value};

const FENCE: &str = "---";

/// Split `text` into an optional YAML block and the remaining body.
///
/// The block must start on the first line; an unterminated block is treated
/// as ordinary body text.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(rest) = strip_opening_fence(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

fn strip_opening_fence(text: &str) -> Option<&str> {
    let (first, rest) = text.split_once('\n')?;
    (first.trim_end() == FENCE).then_some(rest)
}

/// Parse a YAML block into [`NoteMetadata`].
pub fn parse_metadata(yaml: &str) -> NoteMetadata {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => metadata_from_mapping(&map),
        Ok(Value::Null) => NoteMetadata::default(),
        Ok(other) => {
            tracing::debug!(kind = value_kind(&other), "front matter is not a mapping, ignoring");
            NoteMetadata::default()
        }
        Err(e) => {
            tracing::debug!(error = %e, "malformed front matter, using defaults");
            NoteMetadata::default()
        }
    }
}

/// Metadata and body of a raw note in one pass.
pub fn extract(text: &str) -> (NoteMetadata, &str) {
    match split_front_matter(text) {
        (Some(block), body) => (parse_metadata(block), body),
        (None, body) => (NoteMetadata::default(), body),
    }
}

fn metadata_from_mapping(map: &Mapping) -> NoteMetadata {
    let get = |key: &str| map.get(key);

    NoteMetadata {
        title: get("title").and_then(non_empty_scalar),
        tags: get("tags").map(tags_of).unwrap_or_default(),
        featured: get("featured").is_some_and(is_truthy),
        published: get("published").is_some_and(is_truthy),
        excerpt: get("excerpt").and_then(non_empty_scalar),
        feature_image: get("feature_image").and_then(non_empty_scalar),
    }
}

/// Loose truthiness: `false`, `0`, `""` and `null` are false, anything else true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Tags from a YAML list or a comma-separated string, de-duplicated in order.
pub fn tags_of(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        other => scalar_text(other).into_iter().collect(),
    };

    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

fn non_empty_scalar(value: &Value) -> Option<String> {
    scalar_text(value).filter(|s| !s.trim().is_empty())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
