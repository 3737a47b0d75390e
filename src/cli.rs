//! Clap adapter.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`ConfigArgs`] in a clap derive to get `config list|get` subcommands, then
//! call [`ConfigArgs::into_action()`] to hand a framework-agnostic
//! [`ConfigAction`] to [`ops::handle`](crate::ops::handle).

use clap::{Args, Subcommand};

use crate::types::{ConfigAction, Scope};

/// Clap-derived args for the `config` subcommand group.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Restrict output to one config file ("repo" or "user").
    #[arg(long, global = true)]
    pub scope: Option<Scope>,

    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show all resolved configuration values.
    List,
    /// Show the resolved value of one key (e.g. "githubBranch").
    Get {
        /// Key as written in .spr.yml.
        key: String,
    },
}

impl ConfigArgs {
    /// Convert clap-parsed args into a `ConfigAction`.
    ///
    /// Bare `config` (no subcommand) and explicit `config list` both map to
    /// `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        let scope = self.scope;
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List { scope },
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key, scope },
        }
    }
}
