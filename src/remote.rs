//! Repository identity from `git remote -v` output.
//!
//! Each listing line has the shape `<name>\t<url> (<direction>)`. Only `push`
//! lines for the configured remote are candidates, and the URL must point at
//! the hosting domain in one of these shapes:
//!
//! | Shape                                   | Separator |
//! |-----------------------------------------|-----------|
//! | `https://[git@]host/owner/repo[.git]`   | `/`       |
//! | `ssh://[git@]host/owner/repo[.git]`     | `/`       |
//! | `[git@]host:owner/repo[.git]`           | `:`       |
//!
//! Owner and repository names are ASCII: letters, digits, `_` and `-`, with
//! `.` also allowed in the repository name.
//!
//! The first matching line wins. A listing with no match is not an error,
//! the caller simply learns nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RemoteIdentity;

/// Remote name used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";
/// Hosting domain matched by default.
pub const DEFAULT_HOST: &str = "github.com";

static DEFAULT_PATTERN: LazyLock<RemotePattern> =
    LazyLock::new(|| RemotePattern::new(DEFAULT_REMOTE, DEFAULT_HOST));

/// A compiled matcher for one (remote name, host) pair.
#[derive(Debug, Clone)]
pub struct RemotePattern {
    regex: Regex,
}

impl RemotePattern {
    pub fn new(remote_name: &str, host: &str) -> Self {
        let remote = regex::escape(remote_name);
        let host = regex::escape(host);
        let pattern = format!(
            r"^{remote}\s+(?:(?:https|ssh)://(?:git@)?{host}/|(?:git@)?{host}:)(?P<owner>[A-Za-z0-9_-]+)/(?P<name>[A-Za-z0-9_.-]+?)(?:\.git)?\s+\(push\)\s*$"
        );
        let regex =
            Regex::new(&pattern).expect("spr-config: remote pattern built from escaped input");
        Self { regex }
    }

    /// Match a single listing line.
    pub fn parse_line(&self, line: &str) -> Option<RemoteIdentity> {
        let caps = self.regex.captures(line.trim())?;
        Some(RemoteIdentity {
            owner: caps["owner"].to_string(),
            name: caps["name"].to_string(),
        })
    }

    /// Scan a multi-line listing and return the first match.
    pub fn find_identity(&self, listing: &str) -> Option<RemoteIdentity> {
        listing.lines().find_map(|line| self.parse_line(line))
    }
}

/// Parse a listing against the default `origin` remote on `github.com`.
pub fn parse_remote(listing: &str) -> Option<RemoteIdentity> {
    DEFAULT_PATTERN.find_identity(listing)
}
