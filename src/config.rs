//! Configuration structs for the two scopes spr reads.
//!
//! Both structs derive [`confique::Config`] for defaults and the all-optional
//! layer type the loader folds over, plus [`Serialize`]/[`Deserialize`] for
//! the YAML files. The `layer_attr` forwards keep the layer's keys in step
//! with the struct's serde names, so a file decoded into a layer and a config
//! encoded for write-back use the same spelling.

use confique::{Config, Layer};
use serde::{Deserialize, Serialize};

use crate::error::SprConfigError;

/// Repository-scoped settings, stored at `<git-root>/.spr.yml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[config(layer_attr(derive(serde::Serialize)))]
pub struct RepoConfig {
    /// Owner of the hosted repository (user or organization).
    #[serde(rename = "githubRepoOwner")]
    #[config(layer_attr(serde(rename = "githubRepoOwner")))]
    pub owner_name: String,

    /// Name of the hosted repository.
    #[serde(rename = "githubRepoName")]
    #[config(layer_attr(serde(rename = "githubRepoName")))]
    pub repo_name: String,

    /// Require status checks to pass before merging.
    #[serde(rename = "requireChecks")]
    #[config(default = true, layer_attr(serde(rename = "requireChecks")))]
    pub require_checks: bool,

    /// Require an approving review before merging.
    #[serde(rename = "requireApproval")]
    #[config(default = true, layer_attr(serde(rename = "requireApproval")))]
    pub require_approval: bool,

    /// Name of the git remote that points at the hosted repository.
    #[serde(rename = "githubRemote")]
    #[config(default = "origin", layer_attr(serde(rename = "githubRemote")))]
    pub remote_name: String,

    /// Branch pull requests are merged into.
    #[serde(rename = "githubBranch")]
    #[config(default = "master", layer_attr(serde(rename = "githubBranch")))]
    pub branch_name: String,
}

/// User-scoped settings, stored at `<home>/.spr.yml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[config(layer_attr(derive(serde::Serialize)))]
pub struct UserConfig {
    /// Print the pull request link after each action.
    #[serde(rename = "showPRLink")]
    #[config(default = true, layer_attr(serde(rename = "showPRLink")))]
    pub show_link_after_action: bool,

    /// Log every git command that is run.
    #[serde(rename = "logGitCommands")]
    #[config(default = false, layer_attr(serde(rename = "logGitCommands")))]
    pub log_commands: bool,

    /// Log every call made to the hosting API.
    #[serde(rename = "logGitHubCalls")]
    #[config(default = false, layer_attr(serde(rename = "logGitHubCalls")))]
    pub log_remote_calls: bool,

    /// Show the header explaining the status bits.
    #[serde(rename = "statusBitsHeader")]
    #[config(default = true, layer_attr(serde(rename = "statusBitsHeader")))]
    pub show_status_header: bool,

    /// Whether the user already answered the star prompt.
    #[serde(rename = "stargazer")]
    #[config(default = false, layer_attr(serde(rename = "stargazer")))]
    pub opted_into_prompt: bool,

    /// Number of successful resolutions so far.
    ///
    /// A negative count in the file is malformed and fails to decode.
    #[serde(rename = "runcount")]
    #[config(default = 0, layer_attr(serde(rename = "runcount")))]
    pub run_count: u64,
}

impl UserConfig {
    /// A user configuration holding only compiled defaults.
    pub fn defaults() -> Result<Self, SprConfigError> {
        Self::builder().load().map_err(SprConfigError::from)
    }
}

/// The resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SprConfig {
    pub repo: RepoConfig,
    pub user: UserConfig,
}

impl SprConfig {
    /// Compiled defaults for both scopes, without touching git or any file.
    ///
    /// The repository identity has no default and is left empty.
    pub fn defaults() -> Result<Self, SprConfigError> {
        let mut layer = <RepoConfig as Config>::Layer::default_values();
        layer.owner_name = Some(String::new());
        layer.repo_name = Some(String::new());
        Ok(Self {
            repo: RepoConfig::from_layer(layer)?,
            user: UserConfig::defaults()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type RepoLayer = <RepoConfig as Config>::Layer;

    #[test]
    fn user_defaults() {
        let user = UserConfig::defaults().unwrap();
        assert!(user.show_link_after_action);
        assert!(!user.log_commands);
        assert!(!user.log_remote_calls);
        assert!(user.show_status_header);
        assert!(!user.opted_into_prompt);
        assert_eq!(user.run_count, 0);
    }

    #[test]
    fn repo_defaults_leave_identity_unset() {
        let result = RepoConfig::from_layer(RepoLayer::default_values());
        assert!(result.is_err());
    }

    #[test]
    fn defaults_for_both_scopes() {
        let config = SprConfig::defaults().unwrap();
        assert_eq!(config.repo.owner_name, "");
        assert_eq!(config.repo.repo_name, "");
        assert_eq!(config.repo.remote_name, "origin");
        assert_eq!(config.repo.branch_name, "master");
        assert!(config.repo.require_checks);
        assert!(config.repo.require_approval);
        assert_eq!(config.user, UserConfig::defaults().unwrap());
    }

    #[test]
    fn negative_run_count_does_not_decode() {
        let decoded = serde_yaml::from_str::<<UserConfig as Config>::Layer>("runcount: -1\n");
        assert!(decoded.is_err());
    }

    #[test]
    fn repo_serializes_with_file_keys() {
        let repo = RepoConfig {
            owner_name: "acme".into(),
            repo_name: "widgets".into(),
            require_checks: true,
            require_approval: false,
            remote_name: "origin".into(),
            branch_name: "main".into(),
        };
        let yaml = serde_yaml::to_string(&repo).unwrap();
        assert!(yaml.contains("githubRepoOwner: acme"));
        assert!(yaml.contains("githubRepoName: widgets"));
        assert!(yaml.contains("requireApproval: false"));
        assert!(yaml.contains("githubBranch: main"));
    }

    #[test]
    fn layer_uses_file_keys() {
        let layer: RepoLayer =
            serde_yaml::from_str("githubRepoOwner: acme\ngithubRepoName: widgets\n").unwrap();
        let layer = layer.with_fallback(RepoLayer::default_values());
        let repo = RepoConfig::from_layer(layer).unwrap();
        assert_eq!(repo.owner_name, "acme");
        assert_eq!(repo.repo_name, "widgets");
        assert_eq!(repo.remote_name, "origin");
        assert_eq!(repo.branch_name, "master");
    }
}
