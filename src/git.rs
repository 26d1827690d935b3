//! Git-derived default values for the bootstrap prompts.
//! Reads the origin remote and the user identity from the repository the
//! project root lives in. Everything here degrades to `None`: a missing
//! repository or remote must never abort a bootstrap run.

use git2::Repository;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static SSH_REMOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^git@github\.com:(.+?)(?:\.git)?$").expect("valid pattern"));
static HTTPS_REMOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https://github\.com/.+?)(?:\.git)?$").expect("valid pattern"));
static URL_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^/:]+?)(?:\.git)?$").expect("valid pattern"));

/// Origin remote of the project, with GitHub-normalized derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOrigin {
    /// Remote URL exactly as configured
    pub raw_url: String,
    /// `https://github.com/OWNER/REPO` form, when the remote is on GitHub
    pub repository_url: Option<String>,
    /// Repository name extracted from the URL tail
    pub repo_name: Option<String>,
}

/// Reads the `origin` remote of the repository containing `root`.
pub fn discover_origin(root: &Path) -> Option<ProjectOrigin> {
    let repo = Repository::discover(root).ok()?;
    let remote = repo.find_remote("origin").ok()?;
    let raw_url = remote.url()?.trim().to_string();
    if raw_url.is_empty() {
        return None;
    }

    let repository_url = normalize_github_url(&raw_url);
    let repo_name = repo_name_from_url(&raw_url)
        .or_else(|| repository_url.as_deref().and_then(repo_name_from_url));

    Some(ProjectOrigin { raw_url, repository_url, repo_name })
}

/// Reads a git configuration value (e.g. `user.name`) visible from `root`.
pub fn config_value(root: &Path, key: &str) -> Option<String> {
    let repo = Repository::discover(root).ok()?;
    let config = repo.config().ok()?;
    let value = config.get_string(key).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalizes ssh and https GitHub remotes to the canonical https form.
/// Non-GitHub remotes yield `None`.
pub fn normalize_github_url(remote_url: &str) -> Option<String> {
    let url = remote_url.trim().trim_end_matches('/');

    if let Some(caps) = SSH_REMOTE.captures(url) {
        return Some(format!("https://github.com/{}", &caps[1]));
    }
    if let Some(caps) = HTTPS_REMOTE.captures(url) {
        return Some(caps[1].to_string());
    }

    None
}

/// Extracts the repository name from the tail of a remote URL.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let normalized = url.trim_end_matches('/');
    let caps = URL_TAIL.captures(normalized)?;
    let repo_name = caps.get(1)?.as_str();
    if repo_name.is_empty() {
        None
    } else {
        Some(repo_name.to_string())
    }
}
