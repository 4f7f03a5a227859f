//! core::locator
//!
//! Where a repository lives: a local directory or a hosted triple.
//!
//! # Types
//!
//! - [`RepoKind`] - Discriminator used by analysis code for dispatch
//! - [`LocalPath`] - Filesystem location of a checked-out repository
//! - [`HostedRepo`] - `(host, owner, name)` on a hosting service
//! - [`Locator`] - Sum of the two

use std::fmt;

use serde::Serialize;

/// The hosting domain assumed when an input omits the host.
pub const DEFAULT_HOST: &str = "github.com";

/// Which locator variant backs a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoKind {
    /// Backed by a hosted `(host, owner, name)` triple.
    Url,
    /// Backed by a directory on disk.
    LocalDir,
}

impl RepoKind {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            RepoKind::Url => "url",
            RepoKind::LocalDir => "local directory",
        }
    }
}

impl fmt::Display for RepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A repository on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocalPath {
    pub path: String,
}

/// A repository on a hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HostedRepo {
    /// Host, including a non-default port if one was given
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl HostedRepo {
    /// Create a hosted triple without validation.
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `host/owner/repo`, without a scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use repo_ref::core::locator::HostedRepo;
    ///
    /// let repo = HostedRepo::new("github.com", "octocat", "hello-world");
    /// assert_eq!(repo.canonical_url(), "github.com/octocat/hello-world");
    /// ```
    pub fn canonical_url(&self) -> String {
        format!("{}/{}/{}", self.host, self.owner, self.name)
    }

    /// `host-owner-repo`, safe to use as a file name or log key.
    pub fn display_key(&self) -> String {
        format!("{}-{}-{}", self.host, self.owner, self.name)
    }
}

/// Where a repository reference points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Locator {
    Local(LocalPath),
    Hosted(HostedRepo),
}

impl Locator {
    /// The kind discriminator for this locator.
    pub fn kind(&self) -> RepoKind {
        match self {
            Locator::Local(_) => RepoKind::LocalDir,
            Locator::Hosted(_) => RepoKind::Url,
        }
    }

    /// The hosted triple, if this is a hosted locator.
    pub fn as_hosted(&self) -> Option<&HostedRepo> {
        match self {
            Locator::Hosted(repo) => Some(repo),
            Locator::Local(_) => None,
        }
    }

    /// The local path, if this is a local locator.
    pub fn as_local(&self) -> Option<&LocalPath> {
        match self {
            Locator::Local(local) => Some(local),
            Locator::Hosted(_) => None,
        }
    }
}
