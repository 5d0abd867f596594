use regex::Regex;
use std::sync::OnceLock;

/// Host, owner and repository-name parts of a repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    pub domain: String,
    pub owner: String,
    pub repo_name: String,
}

/// Decomposes a hosting URL of the two-segment path shape `host/owner/repo`.
///
/// The protocol, a single trailing `/` and a `.git` suffix are stripped.
/// Deeper paths, query strings and URLs with fewer than two path segments
/// are rejected.
pub fn parse_repo_url(url: &str) -> Option<RepoUrl> {
    static REPO_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REPO_URL_REGEX.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?([^/?#]+)/([^/?#]+)/([^/?#]+?)(?:\.git)?/?$")
            .expect("invalid repo url regex")
    });

    let caps = re.captures(url.trim())?;
    Some(RepoUrl {
        domain: caps[1].to_string(),
        owner: caps[2].to_string(),
        repo_name: caps[3].to_string(),
    })
}
