//! Line-by-line catalog parsing.
//!
//! The walker classifies each line of the document (category heading,
//! module entry, anything else), delegates module entries to the link, URL
//! and field parsers, and accumulates the final [`Catalog`]. Parsing is a
//! pure single-pass transformation: the first malformed line aborts the
//! whole document, no partial catalog is ever returned.

pub mod fields;
pub mod ids;
pub mod link;
pub mod repo_url;

use crate::models::{Catalog, Category, Link, Module, Release};
use fields::{FieldError, FieldSpec, FieldToken, FieldValue, ParsedFields};
use link::parse_markdown_link;
use repo_url::parse_repo_url;

/// Line prefix introducing a category heading.
const CATEGORY_MARKER: &str = "# ";
/// Line prefix introducing a module entry.
const MODULE_MARKER: &str = "- ";
/// Release labels are the version token under this fixed prefix.
const RELEASE_LABEL_PREFIX: &str = "Vue ";

/// The fixed schema of annotations a module line may carry.
const MODULE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "vue",
        array: true,
        map: None,
    },
    FieldSpec {
        key: "links",
        array: true,
        map: Some(link_token),
    },
    FieldSpec {
        key: "status",
        array: false,
        map: None,
    },
    FieldSpec {
        key: "badge",
        array: false,
        map: None,
    },
];

/// Error aborting a catalog parse.
///
/// Every variant carries the 1-based number and raw text of the offending
/// line, so the caller gets a single descriptive failure.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line_no}: module entry does not start with a `[label](url)` link: `{line}`")]
    MalformedLink { line_no: usize, line: String },

    #[error("line {line_no}: repository URL `{url}` is not of the form host/owner/repo")]
    MalformedRepoUrl {
        line_no: usize,
        line: String,
        url: String,
    },

    #[error("line {line_no}: {source} in `{line}`")]
    MalformedField {
        line_no: usize,
        line: String,
        source: FieldError,
    },

    #[error("line {line_no}: module entry appears before any category heading: `{line}`")]
    ModuleBeforeCategory { line_no: usize, line: String },
}

/// Parses a full catalog document into its normalized collections.
///
/// Lines starting with `"# "` open a category, lines starting with `"- "`
/// are module entries owned by the most recent category, everything else is
/// ignored. Categories come back sorted by label and releases by id (both
/// ordinal); modules keep their document order.
pub fn parse_catalog(source: &str) -> Result<Catalog, ParseError> {
    let mut modules: Vec<Module> = Vec::new();
    let mut categories: Vec<Category> = Vec::new();
    let mut releases: Vec<Release> = Vec::new();
    let mut last_category: Option<Category> = None;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(heading) = line.strip_prefix(CATEGORY_MARKER) {
            let label = heading.trim().to_string();
            let category = Category {
                id: ids::category_id(&label),
                label,
            };
            categories.push(category.clone());
            last_category = Some(category);
        } else if let Some(rest) = line.strip_prefix(MODULE_MARKER) {
            let module = parse_module_line(rest, line, line_no, last_category.as_ref())?;

            for vue in &module.vue {
                if !releases.iter().any(|r| r.id == *vue) {
                    releases.push(Release {
                        id: vue.clone(),
                        label: format!("{}{}", RELEASE_LABEL_PREFIX, vue),
                    });
                }
            }

            modules.push(module);
        }
    }

    categories.sort_by(|a, b| a.label.cmp(&b.label));
    releases.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(Catalog {
        modules,
        categories,
        releases,
    })
}

/// Parses one module entry from the text following its `"- "` marker.
fn parse_module_line(
    rest: &str,
    line: &str,
    line_no: usize,
    last_category: Option<&Category>,
) -> Result<Module, ParseError> {
    let link = parse_markdown_link(rest).ok_or_else(|| ParseError::MalformedLink {
        line_no,
        line: line.to_string(),
    })?;

    let repo = parse_repo_url(&link.url).ok_or_else(|| ParseError::MalformedRepoUrl {
        line_no,
        line: line.to_string(),
        url: link.url.clone(),
    })?;

    let mut data =
        fields::parse_fields(&rest[link.len..], MODULE_FIELDS).map_err(|source| {
            ParseError::MalformedField {
                line_no,
                line: line.to_string(),
                source,
            }
        })?;

    let category = last_category.ok_or_else(|| ParseError::ModuleBeforeCategory {
        line_no,
        line: line.to_string(),
    })?;

    Ok(Module {
        id: ids::module_id(&repo.domain, &repo.owner, &repo.repo_name),
        label: link.label,
        url: link.url,
        owner: repo.owner,
        repo_name: repo.repo_name,
        category_id: category.id.clone(),
        vue: take_texts(&mut data, "vue"),
        links: take_links(&mut data, "links"),
        status: take_scalar(&mut data, "status"),
        badge: take_scalar(&mut data, "badge"),
    })
}

/// Transform for the `links` field: each array element must be exactly one
/// `[label](url)` token.
fn link_token(raw: &str) -> Result<FieldToken, FieldError> {
    match parse_markdown_link(raw) {
        Some(link) if link.len == raw.len() => Ok(FieldToken::Link(Link {
            label: link.label,
            url: link.url,
        })),
        _ => Err(FieldError::MalformedLink(raw.to_string())),
    }
}

fn take_texts(data: &mut ParsedFields, key: &str) -> Vec<String> {
    match data.remove(key) {
        Some(FieldValue::List(tokens)) => tokens
            .into_iter()
            .filter_map(|t| match t {
                FieldToken::Text(s) => Some(s),
                FieldToken::Link(_) => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn take_links(data: &mut ParsedFields, key: &str) -> Vec<Link> {
    match data.remove(key) {
        Some(FieldValue::List(tokens)) => tokens
            .into_iter()
            .filter_map(|t| match t {
                FieldToken::Link(link) => Some(link),
                FieldToken::Text(_) => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn take_scalar(data: &mut ParsedFields, key: &str) -> Option<String> {
    match data.remove(key) {
        Some(FieldValue::Scalar(FieldToken::Text(s))) => Some(s),
        _ => None,
    }
}
