//! Deterministic id derivation for categories and modules.

/// Separator between the domain, owner and repository-name segments of a
/// module id. Dots in the domain are rewritten to `_` before joining, so no
/// segment can ever contain the separator itself.
const MODULE_ID_SEPARATOR: &str = "::";

/// Derives a category id from its heading label.
///
/// The label is trimmed and lower-cased, whitespace runs collapse to a
/// single `_`, and every remaining non-word character is stripped. Distinct
/// labels can collide: `"Foo Bar"` and `"foo  bar"` both normalize to
/// `"foo_bar"`. An empty label yields an empty id.
pub fn category_id(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Derives a module id from the parts of its repository URL, e.g.
/// `github_com::vuejs::vue-router`.
pub fn module_id(domain: &str, owner: &str, repo_name: &str) -> String {
    [domain.replace('.', "_"), owner.to_string(), repo_name.to_string()]
        .join(MODULE_ID_SEPARATOR)
}

/// Splits a module id back into its owner and repository-name segments.
///
/// Returns `None` when the id does not consist of exactly three segments.
pub fn split_module_id(id: &str) -> Option<(&str, &str)> {
    let mut parts = id.split(MODULE_ID_SEPARATOR);
    let _domain = parts.next()?;
    let owner = parts.next()?;
    let repo_name = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((owner, repo_name))
}
