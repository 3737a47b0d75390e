//! Layered configuration resolution for spr.
//!
//! spr keeps two YAML files, both named `.spr.yml`: one at the root of the
//! git working tree for repository settings, one in the home directory for
//! user settings. Resolving them is a single pass:
//!
//! ```ignore
//! let git = GitCli::new();
//! let config = Resolver::new(&git).resolve()?;
//! println!("{}/{}", config.repo.owner_name, config.repo.repo_name);
//! ```
//!
//! # Layer precedence
//!
//! Each config is built by folding an ordered list of [`Source`]s with the
//! [`Loader`]. Every source returns a sparse update; the last source to set a
//! field wins.
//!
//! ```text
//! Repository                          User
//! ----------                          ----
//! compiled defaults                   compiled defaults
//!        ↑ overridden by                     ↑ overridden by
//! git remote (owner, name)            <home>/.spr.yml
//!        ↑ overridden by
//! <git-root>/.spr.yml
//! ```
//!
//! Both files are written back after loading, so they always list every key
//! with its effective value. The user file also carries a run counter that is
//! bumped once per resolution.
//!
//! # Repository identity
//!
//! The owner and name of the hosted repository are inferred from the `push`
//! URL of the configured remote (see [`remote`]). When neither the remote nor
//! the repository file supplies them, resolution fails with
//! [`SprConfigError::MissingOwner`] or [`SprConfigError::MissingRepoName`].
//! [`SprConfigError::exit_code()`] maps these to exit statuses 3 and 4.
//!
//! # Error handling
//!
//! All fallible operations return [`SprConfigError`]. Library code never
//! exits the process; the `spr-config` binary turns errors into exit codes.

pub mod error;
pub mod remote;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod config;
mod file;
mod git;
mod loader;
pub mod ops;
mod resolve;
mod source;
mod validate;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use config::{RepoConfig, SprConfig, UserConfig};
pub use error::SprConfigError;
pub use file::{CONFIG_FILE_NAME, repo_config_path, user_config_path};
pub use git::{Git, GitCli};
pub use loader::Loader;
pub use ops::ConfigResult;
pub use remote::{RemotePattern, parse_remote};
pub use resolve::{Resolver, parse_config};
pub use source::{DefaultSource, FileSource, FileWriter, RemoteSource, Source};
pub use types::{ConfigAction, RemoteIdentity, Scope};
