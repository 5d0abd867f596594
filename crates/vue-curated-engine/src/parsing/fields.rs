//! Schema-driven extraction of inline field annotations.
//!
//! The trailing text of a module line carries annotations of the form
//! `key:value`. A marker is a declared key followed by `:`, found at the
//! start of the text or right after whitespace; its value runs to the next
//! recognized marker or the end of the line. Array values are split on `,`
//! (elements cannot themselves contain commas, there is no escaping). Text
//! that belongs to no marker is ignored.
//!
//! The descriptor table is the single source of truth for the line grammar:
//! a new annotation means a new [`FieldSpec`] row, not a new code path.

use std::collections::BTreeMap;

use crate::models::Link;

/// One extracted annotation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldToken {
    Text(String),
    Link(Link),
}

/// The extracted value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(FieldToken),
    List(Vec<FieldToken>),
}

/// Error raised when a declared transform rejects a token.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("malformed link token `{0}`")]
    MalformedLink(String),
}

/// Transform applied to each raw token of a field before storage.
pub type MapFn = fn(&str) -> Result<FieldToken, FieldError>;

/// Declarative description of one field a line may carry.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    /// Split the raw value on `,` into a list instead of taking it whole.
    pub array: bool,
    pub map: Option<MapFn>,
}

/// Fields extracted from one line, keyed by descriptor key. Array fields are
/// always present (possibly empty); scalar fields only when found.
pub type ParsedFields = BTreeMap<&'static str, FieldValue>;

/// Extracts every declared field from `text`, independent of the order the
/// markers appear in.
pub fn parse_fields(text: &str, specs: &[FieldSpec]) -> Result<ParsedFields, FieldError> {
    let mut markers: Vec<(usize, &FieldSpec)> = specs
        .iter()
        .filter_map(|spec| find_marker(text, spec.key).map(|pos| (pos, spec)))
        .collect();
    markers.sort_by_key(|&(pos, _)| pos);

    let mut out = ParsedFields::new();
    for (i, &(pos, spec)) in markers.iter().enumerate() {
        let value_start = pos + spec.key.len() + 1;
        let value_end = markers.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let raw = text[value_start..value_end].trim();

        let value = if spec.array {
            let mut tokens = Vec::new();
            for piece in raw.split(',') {
                let piece = piece.trim();
                if piece.is_empty() {
                    continue;
                }
                tokens.push(apply_map(spec, piece)?);
            }
            FieldValue::List(tokens)
        } else {
            FieldValue::Scalar(apply_map(spec, raw)?)
        };
        out.insert(spec.key, value);
    }

    // A declared array field defaults to an empty list when absent.
    for spec in specs {
        if spec.array {
            out.entry(spec.key)
                .or_insert_with(|| FieldValue::List(Vec::new()));
        }
    }

    Ok(out)
}

/// Finds `key:` at the start of `text` or right after whitespace, so that a
/// key embedded in another token is not mistaken for a marker.
fn find_marker(text: &str, key: &str) -> Option<usize> {
    let needle = format!("{key}:");
    let mut from = 0;
    while let Some(rel) = text[from..].find(&needle) {
        let pos = from + rel;
        if pos == 0 || text[..pos].ends_with(char::is_whitespace) {
            return Some(pos);
        }
        from = pos + needle.len();
    }
    None
}

fn apply_map(spec: &FieldSpec, raw: &str) -> Result<FieldToken, FieldError> {
    match spec.map {
        Some(map) => map(raw),
        None => Ok(FieldToken::Text(raw.to_string())),
    }
}
