//! Config operations: key lookup, listing, and result types.
//!
//! Provides the logic behind `config list` and `config get`, and the
//! `ConfigResult` enum that callers use to display results. Keys are the
//! names used in the YAML files (`githubRepoOwner`, `runcount`, ...).

use std::fmt;

use serde::Serialize;

use crate::config::SprConfig;
use crate::error::SprConfigError;
use crate::types::{ConfigAction, Scope};

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A single key's resolved value.
    KeyValue { key: String, value: String },
    /// All resolved configuration key-value pairs.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::KeyValue { key, value } => write!(f, "{key}: {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Run a [`ConfigAction`] against an already resolved configuration.
///
/// Without a scope, `list` shows both scopes (repository first) and `get`
/// looks in the repository scope, then the user scope.
pub fn handle(config: &SprConfig, action: &ConfigAction) -> Result<ConfigResult, SprConfigError> {
    match action {
        ConfigAction::List { scope } => match scope {
            Some(Scope::Repo) => list_values(&config.repo),
            Some(Scope::User) => list_values(&config.user),
            None => {
                let mut entries = listing(&config.repo)?;
                entries.extend(listing(&config.user)?);
                Ok(ConfigResult::Listing { entries })
            }
        },
        ConfigAction::Get { key, scope } => match scope {
            Some(Scope::Repo) => get_value(&config.repo, key),
            Some(Scope::User) => get_value(&config.user, key),
            None => match get_value(&config.repo, key) {
                Err(SprConfigError::KeyNotFound(_)) => get_value(&config.user, key),
                other => other,
            },
        },
    }
}

/// Get a config value by key.
pub fn get_value<C: Serialize>(config: &C, key: &str) -> Result<ConfigResult, SprConfigError> {
    let mapping = to_mapping(config)?;
    let value = mapping
        .get(key)
        .ok_or_else(|| SprConfigError::KeyNotFound(key.into()))?;
    Ok(ConfigResult::KeyValue {
        key: key.into(),
        value: format_value(value),
    })
}

/// List all config values in declaration order.
pub fn list_values<C: Serialize>(config: &C) -> Result<ConfigResult, SprConfigError> {
    Ok(ConfigResult::Listing {
        entries: listing(config)?,
    })
}

fn listing<C: Serialize>(config: &C) -> Result<Vec<(String, String)>, SprConfigError> {
    let mapping = to_mapping(config)?;
    Ok(mapping
        .iter()
        .filter_map(|(k, v)| Some((k.as_str()?.to_string(), format_value(v))))
        .collect())
}

fn to_mapping<C: Serialize>(config: &C) -> Result<serde_yaml::Mapping, SprConfigError> {
    let value = serde_yaml::to_value(config).map_err(|e| SprConfigError::InvalidValue {
        key: "<config>".into(),
        reason: e.to_string(),
    })?;
    match value {
        serde_yaml::Value::Mapping(m) => Ok(m),
        _ => Err(SprConfigError::InvalidValue {
            key: "<config>".into(),
            reason: "config did not serialize to a mapping".into(),
        }),
    }
}

/// Format a YAML value for display.
fn format_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "<not set>".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
