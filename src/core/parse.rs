//! core::parse
//!
//! Turn user-supplied strings into a [`Locator`].
//!
//! # Grammars
//!
//! Two grammars are supported, selected by [`ParseMode`]:
//!
//! - **Legacy** accepts `owner/repo` shorthand (host defaults to
//!   `github.com`), `host/owner/repo`, and full URLs. A missing scheme is
//!   filled in as `https://`.
//! - **Strict** requires an explicit `https://` URL or a `file://` path.
//!
//! Both are pure functions. The environment toggle that historically chose
//! between them is read only by [`ParseMode::from_env`], at the CLI edge.
//!
//! # Example
//!
//! ```
//! use repo_ref::core::locator::{HostedRepo, Locator};
//! use repo_ref::core::parse::{parse, ParseMode};
//!
//! let locator = parse("ossf/scorecard", ParseMode::Legacy).unwrap();
//! assert_eq!(
//!     locator,
//!     Locator::Hosted(HostedRepo::new("github.com", "ossf", "scorecard"))
//! );
//!
//! assert!(parse("ossf/scorecard", ParseMode::Strict).is_err());
//! ```

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use super::errors::{FormatReason, RepoRefError};
use super::locator::{HostedRepo, LocalPath, Locator, DEFAULT_HOST};

/// Environment variable whose presence selects [`ParseMode::Strict`].
pub const STRICT_ENV_VAR: &str = "REPO_REF_STRICT";

const SCHEME_SEPARATOR: &str = "://";

/// Which input grammar to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Shorthand-friendly grammar; scheme and host may be omitted.
    #[default]
    Legacy,
    /// Scheme-qualified grammar; only `https://` and `file://`.
    Strict,
}

impl ParseMode {
    /// Select a mode from the process environment.
    ///
    /// Presence of [`STRICT_ENV_VAR`] selects `Strict`; its value is ignored.
    pub fn from_env() -> Self {
        if std::env::var_os(STRICT_ENV_VAR).is_some() {
            ParseMode::Strict
        } else {
            ParseMode::Legacy
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParseMode::Legacy => "legacy",
            ParseMode::Strict => "strict",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse `input` with the given grammar.
///
/// # Errors
///
/// Returns `RepoRefError::InvalidFormat` when the input cannot be resolved
/// to a repository identity.
pub fn parse(input: &str, mode: ParseMode) -> Result<Locator, RepoRefError> {
    match mode {
        ParseMode::Legacy => parse_legacy(input).map(Locator::Hosted),
        ParseMode::Strict => parse_strict(input),
    }
}

/// Parse with the legacy grammar.
///
/// - `owner/repo` becomes `https://github.com/owner/repo`
/// - `host/owner/repo` and full URLs are used as-is
/// - anything without `://` gets an `https://` prefix
pub fn parse_legacy(input: &str) -> Result<HostedRepo, RepoRefError> {
    let segments = input.split('/').count();

    let mut candidate = match segments {
        0 | 1 => return Err(RepoRefError::format(input, FormatReason::AmbiguousSplit)),
        2 => format!("{}/{}", DEFAULT_HOST, input),
        _ => input.to_string(),
    };

    if !candidate.contains(SCHEME_SEPARATOR) {
        candidate.insert_str(0, "https://");
    }

    hosted_from_url(input, &candidate)
}

/// Parse with the strict grammar.
///
/// `file://` inputs produce a local locator holding everything after the
/// prefix, verbatim, once its escapes are known to be well formed;
/// `https://` inputs are parsed as URLs. Any other scheme fails.
pub fn parse_strict(input: &str) -> Result<Locator, RepoRefError> {
    let Some((scheme, rest)) = input.split_once(SCHEME_SEPARATOR) else {
        return Err(RepoRefError::format(input, FormatReason::MissingScheme));
    };

    match scheme {
        "https" => hosted_from_url(input, input).map(Locator::Hosted),
        "file" => {
            check_file_remainder(rest)
                .map_err(|msg| RepoRefError::format(input, FormatReason::UrlParse(msg)))?;
            Ok(Locator::Local(LocalPath {
                path: rest.to_string(),
            }))
        }
        other => Err(RepoRefError::format(
            input,
            FormatReason::UnsupportedScheme(other.to_string()),
        )),
    }
}

/// Parse `candidate` as a URL and split its path into owner and name.
///
/// Errors report `input`, the string the caller actually supplied.
fn hosted_from_url(input: &str, candidate: &str) -> Result<HostedRepo, RepoRefError> {
    let url = Url::parse(candidate)
        .map_err(|e| RepoRefError::format(input, FormatReason::UrlParse(e.to_string())))?;

    let path = percent_decode_str(url.path())
        .decode_utf8()
        .map_err(|e| RepoRefError::format(input, FormatReason::UrlParse(e.to_string())))?;

    let (owner, name) = split_owner_repo(&path)
        .ok_or_else(|| RepoRefError::format(input, FormatReason::SegmentCount))?;

    Ok(HostedRepo {
        host: host_with_port(&url),
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

/// Split a URL path into `(owner, rest)` at the first `/`.
///
/// Leading and trailing slashes are ignored. Everything after the owner
/// belongs to the name, so `a/b/c` yields `("a", "b/c")`.
fn split_owner_repo(path: &str) -> Option<(&str, &str)> {
    path.trim_matches('/').split_once('/')
}

/// Reject what a URL parser would: control characters and `%` not
/// followed by two hex digits.
fn check_file_remainder(rest: &str) -> Result<(), String> {
    if rest.chars().any(|c| c.is_ascii_control()) {
        return Err("invalid control character in URL".to_string());
    }

    let bytes = rest.as_bytes();
    for (i, _) in rest.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(rest.len());
            return Err(format!(
                "invalid URL escape '{}'",
                rest.get(i..end).unwrap_or("%")
            ));
        }
    }
    Ok(())
}

/// The `url` crate lowercases hosts, so `GitHub.com` comes back as `github.com`.
fn host_with_port(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}
