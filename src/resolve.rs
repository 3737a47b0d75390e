//! Top-level resolution: build both configs, validate identity, bump the run
//! count and write everything back.
//!
//! ```text
//! repo:  defaults → git remote → <git-root>/.spr.yml → write <git-root>/.spr.yml
//!        validate owner (MissingOwner), then name (MissingRepoName)
//! user:  defaults → <home>/.spr.yml
//!        run_count += 1
//!        write <home>/.spr.yml
//! ```
//!
//! The repository file is written before identity is validated, so a run
//! that cannot infer the owner or name still leaves a file with `null`
//! placeholders for the user to fill in.

use std::path::PathBuf;

use confique::Config;
use tracing::debug;

use crate::config::{RepoConfig, SprConfig, UserConfig};
use crate::error::SprConfigError;
use crate::file;
use crate::git::Git;
use crate::loader::Loader;
use crate::remote::DEFAULT_HOST;
use crate::source::{DefaultSource, FileSource, FileWriter, RemoteSource, convert};
use crate::validate;

/// Builder for a configuration resolution against one git working tree.
pub struct Resolver<'g> {
    git: &'g dyn Git,
    home_dir: Option<PathBuf>,
    remote_host: String,
    strict: bool,
}

impl<'g> Resolver<'g> {
    pub fn new(git: &'g dyn Git) -> Self {
        Self {
            git,
            home_dir: None,
            remote_host: DEFAULT_HOST.to_string(),
            strict: false,
        }
    }

    /// Use `dir` instead of the current user's home directory.
    pub fn home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Infer identity from remotes on `host` (default: `github.com`).
    pub fn remote_host(mut self, host: &str) -> Self {
        self.remote_host = host.to_string();
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, unknown keys in config files produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the repository config file.
    pub fn repo_config_path(&self) -> Result<PathBuf, SprConfigError> {
        Ok(file::repo_config_path(&self.git.root_dir()?))
    }

    /// Path of the user config file.
    pub fn user_config_path(&self) -> Result<PathBuf, SprConfigError> {
        let home = match &self.home_dir {
            Some(dir) => dir.clone(),
            None => file::home_dir()?,
        };
        Ok(file::user_config_path(&home))
    }

    /// Resolve both scopes.
    pub fn resolve(&self) -> Result<SprConfig, SprConfigError> {
        let repo = self.resolve_repo()?;
        let user = self.resolve_user()?;
        Ok(SprConfig { repo, user })
    }

    /// Resolve and persist the repository config, then check its identity.
    pub fn resolve_repo(&self) -> Result<RepoConfig, SprConfigError> {
        let path = self.repo_config_path()?;
        debug!("resolving repository config at {}", path.display());

        let layer = Loader::new()
            .source(DefaultSource::new())
            .source(RemoteSource::new(self.git).host(&self.remote_host))
            .source(FileSource::<RepoConfig>::new(&path).strict(self.strict))
            .source(FileWriter::<RepoConfig>::new(&path))
            .run()?;

        validate::validate_identity(&layer)?;
        RepoConfig::from_layer(layer).map_err(SprConfigError::from)
    }

    /// Resolve the user config, count this run and persist it.
    pub fn resolve_user(&self) -> Result<UserConfig, SprConfigError> {
        let path = self.user_config_path()?;
        debug!("resolving user config at {}", path.display());

        let layer = Loader::new()
            .source(DefaultSource::new())
            .source(FileSource::<UserConfig>::new(&path).strict(self.strict))
            .run()?;
        let mut user = UserConfig::from_layer(layer)?;

        let count = user.run_count;
        user.run_count = count
            .checked_add(1)
            .ok_or_else(|| SprConfigError::InvalidValue {
                key: "runcount".into(),
                reason: format!("run count {count} cannot be incremented"),
            })?;
        debug!(run_count = user.run_count, "bumped run count");

        Loader::new()
            .source(FileWriter::<UserConfig>::new(&path))
            .run_on(convert(&user)?)?;
        Ok(user)
    }
}

/// Resolve the configuration for the working tree `git` operates on, using
/// the current user's home directory.
pub fn parse_config(git: &dyn Git) -> Result<SprConfig, SprConfigError> {
    Resolver::new(git).resolve()
}
