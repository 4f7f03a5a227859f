//! core::validate
//!
//! GitHub naming rules for hosted repository references.
//!
//! # Order of checks
//!
//! 1. Host must be `github.com`
//! 2. Owner must be a valid GitHub username
//! 3. Owner and name must not be blank
//!
//! The host is checked first so an unsupported host never surfaces as an
//! invalid owner.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::RepoRefError;
use super::locator::{HostedRepo, DEFAULT_HOST};

/// Alphanumerics and single hyphens, no leading or trailing hyphen, 1 to 39 chars.
static GITHUB_USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[-A-Za-z0-9]{0,37}[A-Za-z0-9])?$")
        .expect("username pattern is valid")
});

/// Check a hosted triple against GitHub's naming rules.
///
/// # Errors
///
/// - `RepoRefError::UnsupportedHost` if the host is not `github.com`
/// - `RepoRefError::InvalidOwner` if the owner is not a valid username
/// - `RepoRefError::InvalidIdentity` if owner or name is blank
///
/// # Example
///
/// ```
/// use repo_ref::core::locator::HostedRepo;
/// use repo_ref::core::validate::validate_github;
///
/// assert!(validate_github(&HostedRepo::new("github.com", "foo-bar", "baz")).is_ok());
/// assert!(validate_github(&HostedRepo::new("github.com", "foo--bar", "baz")).is_err());
/// ```
pub fn validate_github(repo: &HostedRepo) -> Result<(), RepoRefError> {
    if repo.host != DEFAULT_HOST {
        return Err(RepoRefError::UnsupportedHost(repo.host.clone()));
    }

    if !is_valid_username(&repo.owner) {
        return Err(RepoRefError::InvalidOwner(repo.owner.clone()));
    }

    if repo.owner.trim().is_empty() || repo.name.trim().is_empty() {
        return Err(RepoRefError::InvalidIdentity(repo.canonical_url()));
    }

    Ok(())
}

/// Whether `owner` is a syntactically valid GitHub username.
pub fn is_valid_username(owner: &str) -> bool {
    GITHUB_USERNAME.is_match(owner) && !owner.contains("--")
}
