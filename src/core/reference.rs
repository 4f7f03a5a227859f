//! core::reference
//!
//! [`RepositoryReference`]: the value passed to everything downstream that
//! needs to know which repository is being analyzed.
//!
//! # Equality
//!
//! Two references are equal when their locators are equal and their
//! metadata tags are equal *as sets*. Storage keeps insertion order and
//! duplicates; comparison ignores both.
//!
//! # Example
//!
//! ```
//! use repo_ref::core::parse::ParseMode;
//! use repo_ref::core::reference::RepositoryReference;
//!
//! let a = RepositoryReference::from_url("github.com/ossf/scorecard", ParseMode::Legacy).unwrap();
//! let b = RepositoryReference::from_url("ossf/scorecard", ParseMode::Legacy).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "github.com-ossf-scorecard");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;

use super::errors::RepoRefError;
use super::locator::{HostedRepo, LocalPath, Locator, RepoKind};
use super::parse::{parse, ParseMode};
use super::validate::validate_github;

/// A parsed repository identity plus free-form metadata tags.
#[derive(Debug, Clone)]
pub struct RepositoryReference {
    locator: Locator,
    metadata: Vec<String>,
}

impl RepositoryReference {
    /// Build a reference from a URL-like string.
    ///
    /// In strict mode a `file://` input yields a local-directory reference.
    ///
    /// # Errors
    ///
    /// Returns `RepoRefError::InvalidFormat` if `input` does not parse.
    pub fn from_url(input: &str, mode: ParseMode) -> Result<Self, RepoRefError> {
        Ok(Self {
            locator: parse(input, mode)?,
            metadata: Vec::new(),
        })
    }

    /// Build a reference to a directory on disk. The path is stored as given.
    pub fn from_local_dir(path: impl Into<String>) -> Self {
        Self {
            locator: Locator::Local(LocalPath { path: path.into() }),
            metadata: Vec::new(),
        }
    }

    /// Build a reference from an already-resolved locator.
    pub fn from_locator(locator: Locator) -> Self {
        Self {
            locator,
            metadata: Vec::new(),
        }
    }

    /// Re-point a URL-backed reference at `input`.
    ///
    /// On failure the reference is left unchanged.
    ///
    /// # Errors
    ///
    /// - `RepoRefError::InvalidRepoType` if this is a local-directory reference
    /// - `RepoRefError::InvalidFormat` if `input` does not parse
    pub fn set_url(&mut self, input: &str, mode: ParseMode) -> Result<(), RepoRefError> {
        self.require_kind(RepoKind::Url)?;
        self.locator = parse(input, mode)?;
        Ok(())
    }

    /// Check the hosted triple against GitHub naming rules.
    ///
    /// # Errors
    ///
    /// `RepoRefError::InvalidRepoType` for local-directory references,
    /// otherwise whatever [`validate_github`] reports.
    pub fn validate_github(&self) -> Result<(), RepoRefError> {
        match &self.locator {
            Locator::Hosted(repo) => validate_github(repo),
            Locator::Local(_) => Err(RepoRefError::InvalidRepoType {
                expected: RepoKind::Url,
                found: RepoKind::LocalDir,
            }),
        }
    }

    /// Replace all metadata tags.
    pub fn set_metadata(&mut self, tags: Vec<String>) {
        self.metadata = tags;
    }

    /// Append metadata tags, keeping existing ones.
    pub fn append_metadata<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.extend(tags.into_iter().map(Into::into));
    }

    /// Metadata tags in insertion order.
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    pub fn kind(&self) -> RepoKind {
        self.locator.kind()
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// The hosted triple, for URL-backed references.
    pub fn hosted(&self) -> Option<&HostedRepo> {
        self.locator.as_hosted()
    }

    /// The stored path, for local-directory references.
    pub fn path(&self) -> Option<&str> {
        self.locator.as_local().map(|local| local.path.as_str())
    }

    /// `host/owner/repo`, for URL-backed references.
    pub fn canonical_url(&self) -> Option<String> {
        self.hosted().map(HostedRepo::canonical_url)
    }

    /// `host-owner-repo` for URL-backed references, the path otherwise.
    pub fn display_key(&self) -> String {
        match &self.locator {
            Locator::Hosted(repo) => repo.display_key(),
            Locator::Local(local) => local.path.clone(),
        }
    }

    /// Name of this value type when used as a command-line flag.
    pub fn type_name() -> &'static str {
        "repo"
    }

    fn require_kind(&self, expected: RepoKind) -> Result<(), RepoRefError> {
        let found = self.kind();
        if found == expected {
            Ok(())
        } else {
            Err(RepoRefError::InvalidRepoType { expected, found })
        }
    }

    fn metadata_set(&self) -> BTreeSet<&str> {
        self.metadata.iter().map(String::as_str).collect()
    }
}

impl PartialEq for RepositoryReference {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator && self.metadata_set() == other.metadata_set()
    }
}

impl Eq for RepositoryReference {}

impl Hash for RepositoryReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
        self.metadata_set().hash(state);
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_key())
    }
}

/// Parses with the legacy grammar.
impl FromStr for RepositoryReference {
    type Err = RepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(s, ParseMode::Legacy)
    }
}

impl Serialize for RepositoryReference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            kind: RepoKind,
            locator: &'a Locator,
            #[serde(skip_serializing_if = "Option::is_none")]
            url: Option<String>,
            key: String,
            metadata: &'a [String],
        }

        View {
            kind: self.kind(),
            locator: &self.locator,
            url: self.canonical_url(),
            key: self.display_key(),
            metadata: &self.metadata,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn legacy(input: &str) -> RepositoryReference {
        RepositoryReference::from_url(input, ParseMode::Legacy).unwrap()
    }

    fn tagged(input: &str, tags: &[&str]) -> RepositoryReference {
        let mut r = legacy(input);
        r.set_metadata(tags.iter().map(|t| t.to_string()).collect());
        r
    }

    mod construction {
        use super::*;

        #[test]
        fn from_url_is_url_kind() {
            let r = legacy("ossf/scorecard");
            assert_eq!(r.kind(), RepoKind::Url);
            assert_eq!(r.canonical_url().as_deref(), Some("github.com/ossf/scorecard"));
            assert_eq!(r.path(), None);
        }

        #[test]
        fn from_local_dir() {
            let r = RepositoryReference::from_local_dir("/src/project");
            assert_eq!(r.kind(), RepoKind::LocalDir);
            assert_eq!(r.path(), Some("/src/project"));
            assert_eq!(r.canonical_url(), None);
        }

        #[test]
        fn strict_file_url_is_local_kind() {
            let r = RepositoryReference::from_url("file:///tmp/x", ParseMode::Strict).unwrap();
            assert_eq!(r.kind(), RepoKind::LocalDir);
            assert_eq!(r.path(), Some("/tmp/x"));
        }

        #[test]
        fn from_str_uses_legacy() {
            let r: RepositoryReference = "ossf/scorecard".parse().unwrap();
            assert_eq!(r, legacy("github.com/ossf/scorecard"));
        }

        #[test]
        fn type_name_is_repo() {
            assert_eq!(RepositoryReference::type_name(), "repo");
        }
    }

    mod set_url {
        use super::*;

        #[test]
        fn retargets_url_reference() {
            let mut r = legacy("a/b");
            r.set_url("c/d", ParseMode::Legacy).unwrap();
            assert_eq!(r.canonical_url().as_deref(), Some("github.com/c/d"));
        }

        #[test]
        fn file_url_overrides_kind() {
            let mut r = legacy("a/b");
            r.set_url("file:///tmp/x", ParseMode::Strict).unwrap();
            assert_eq!(r.kind(), RepoKind::LocalDir);
            assert_eq!(r.path(), Some("/tmp/x"));
        }

        #[test]
        fn rejected_on_local_reference() {
            let mut r = RepositoryReference::from_local_dir("/tmp/x");
            let err = r.set_url("a/b", ParseMode::Legacy).unwrap_err();
            assert_eq!(
                err,
                RepoRefError::InvalidRepoType {
                    expected: RepoKind::Url,
                    found: RepoKind::LocalDir,
                }
            );
            assert_eq!(r.path(), Some("/tmp/x"));
        }

        #[test]
        fn failure_leaves_reference_unchanged() {
            let mut r = legacy("a/b");
            assert!(r.set_url("onlyoneword", ParseMode::Legacy).is_err());
            assert_eq!(r, legacy("a/b"));
        }
    }

    mod metadata {
        use super::*;

        #[test]
        fn append_keeps_order_and_duplicates() {
            let mut r = legacy("a/b");
            r.append_metadata(["x", "y"]);
            r.append_metadata(["x"]);
            assert_eq!(r.metadata(), ["x", "y", "x"]);
        }

        #[test]
        fn set_replaces() {
            let mut r = tagged("a/b", &["x", "y"]);
            r.set_metadata(vec!["z".to_string()]);
            assert_eq!(r.metadata(), ["z"]);
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn shorthand_equals_host_qualified() {
            assert_eq!(legacy("github.com/A/B"), legacy("A/B"));
        }

        #[test]
        fn metadata_compared_as_set() {
            assert_eq!(tagged("a/b", &["x", "y"]), tagged("a/b", &["y", "x", "x"]));
            assert_ne!(tagged("a/b", &["x", "y"]), tagged("a/b", &["x"]));
        }

        #[test]
        fn kind_matters() {
            let url = legacy("a/b");
            let local = RepositoryReference::from_local_dir("a/b");
            assert_ne!(url, local);
        }

        #[test]
        fn owner_case_matters() {
            assert_ne!(legacy("a/b"), legacy("A/b"));
        }

        #[test]
        fn hash_agrees_with_eq() {
            let mut set = HashSet::new();
            set.insert(tagged("a/b", &["x", "y"]));
            set.insert(tagged("github.com/a/b", &["y", "x", "x"]));
            assert_eq!(set.len(), 1);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn url_reference_is_validated() {
            assert!(legacy("ossf/scorecard").validate_github().is_ok());
            assert!(matches!(
                legacy("gitlab.com/a/b").validate_github(),
                Err(RepoRefError::UnsupportedHost(_))
            ));
        }

        #[test]
        fn local_reference_cannot_be_validated() {
            let r = RepositoryReference::from_local_dir("/tmp/x");
            assert!(matches!(
                r.validate_github(),
                Err(RepoRefError::InvalidRepoType { .. })
            ));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn hosted_key() {
            assert_eq!(legacy("ossf/scorecard").to_string(), "github.com-ossf-scorecard");
        }

        #[test]
        fn local_key_is_path() {
            assert_eq!(RepositoryReference::from_local_dir("/tmp/x").to_string(), "/tmp/x");
        }

        #[test]
        fn json_view() {
            let r = tagged("ossf/scorecard", &["ci"]);
            let json = serde_json::to_value(&r).unwrap();
            assert_eq!(json["kind"], "url");
            assert_eq!(json["url"], "github.com/ossf/scorecard");
            assert_eq!(json["key"], "github.com-ossf-scorecard");
            assert_eq!(json["metadata"][0], "ci");
        }

        #[test]
        fn json_view_omits_url_for_local() {
            let r = RepositoryReference::from_local_dir("/tmp/x");
            let json = serde_json::to_value(&r).unwrap();
            assert_eq!(json["kind"], "local_dir");
            assert!(json.get("url").is_none());
            assert_eq!(json["locator"]["path"], "/tmp/x");
        }
    }
}
