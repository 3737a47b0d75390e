use std::fmt;
use std::str::FromStr;

/// Owner and name of a hosted repository, as inferred from a git remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    pub owner: String,
    pub name: String,
}

/// Which configuration file an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `<git-root>/.spr.yml`
    Repo,
    /// `<home>/.spr.yml`
    User,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Repo => write!(f, "repo"),
            Scope::User => write!(f, "user"),
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repo" | "repository" => Ok(Scope::Repo),
            "user" => Ok(Scope::User),
            other => Err(format!("unknown scope '{other}' (expected 'repo' or 'user')")),
        }
    }
}

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// List resolved values, optionally for a single scope.
    List { scope: Option<Scope> },
    /// Show one resolved value.
    Get { key: String, scope: Option<Scope> },
}
