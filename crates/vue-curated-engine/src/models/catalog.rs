use serde::{Deserialize, Serialize};

/// A labeled grouping of modules, introduced by a `# ` heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// A secondary link attached to a module through its `links:` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One curated catalog entry, always owned by exactly one category and
/// backed by exactly one source repository.
///
/// Field names follow the serialized catalog shape consumed downstream:
/// `repo_name` serializes as `repoName`, and absent scalar annotations are
/// omitted from the JSON output entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub label: String,
    pub url: String,
    pub owner: String,
    #[serde(rename = "repoName")]
    pub repo_name: String,
    /// Id of the nearest category heading preceding this entry's line.
    pub category_id: String,
    /// Framework versions this module is compatible with.
    pub vue: Vec<String>,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// A distinct framework version referenced by at least one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub label: String,
}

/// The complete result of parsing one catalog document.
///
/// Categories are sorted by label and releases by id; modules keep their
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub modules: Vec<Module>,
    pub categories: Vec<Category>,
    pub releases: Vec<Release>,
}
