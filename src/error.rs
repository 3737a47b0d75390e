use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a repository owner that could not be determined.
pub const EXIT_MISSING_OWNER: i32 = 3;
/// Exit status for a repository name that could not be determined.
pub const EXIT_MISSING_REPO_NAME: i32 = 4;

#[derive(Debug, Error)]
pub enum SprConfigError {
    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Unknown keys in config file")]
    UnknownKeys(Vec<SprConfigError>),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config for {path}: {source}")]
    SerializeError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("I/O error on {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] confique::Error),

    #[error("git {command} failed: {reason}")]
    GitError { command: String, reason: String },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("unable to auto configure repository owner - must be set manually in .spr.yml")]
    MissingOwner,

    #[error("unable to auto configure repository name - must be set manually in .spr.yml")]
    MissingRepoName,
}

impl SprConfigError {
    /// Process exit status for this error.
    ///
    /// Missing identity gets a distinct status per field so scripts can tell
    /// the cases apart; every other failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SprConfigError::MissingOwner => EXIT_MISSING_OWNER,
            SprConfigError::MissingRepoName => EXIT_MISSING_REPO_NAME,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_formats_correctly() {
        let err = SprConfigError::UnknownKey {
            key: "typo_key".into(),
            path: "/home/user/.spr.yml".into(),
            line: 42,
        };
        let msg = err.to_string();
        assert!(msg.contains("typo_key"));
        assert!(msg.contains(".spr.yml"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn missing_identity_names_the_field() {
        assert!(SprConfigError::MissingOwner.to_string().contains("owner"));
        assert!(SprConfigError::MissingRepoName.to_string().contains("name"));
    }

    #[test]
    fn exit_codes_distinguish_missing_fields() {
        assert_eq!(SprConfigError::MissingOwner.exit_code(), 3);
        assert_eq!(SprConfigError::MissingRepoName.exit_code(), 4);
        assert_eq!(SprConfigError::NoHomeDir.exit_code(), 1);
        let git = SprConfigError::GitError {
            command: "remote -v".into(),
            reason: "not a git repository".into(),
        };
        assert_eq!(git.exit_code(), 1);
    }

    #[test]
    fn git_error_mentions_command() {
        let err = SprConfigError::GitError {
            command: "remote -v".into(),
            reason: "boom".into(),
        };
        assert_eq!(err.to_string(), "git remote -v failed: boom");
    }
}
