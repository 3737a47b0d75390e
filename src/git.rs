//! The git capability the resolver consumes.
//!
//! Resolution needs two things from git: the working-tree root (to place the
//! repository config file) and the remote listing (to infer identity). Both go
//! through the [`Git`] trait so tests can substitute canned output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::SprConfigError;

pub trait Git {
    /// Root directory of the current working tree.
    fn root_dir(&self) -> Result<PathBuf, SprConfigError>;

    /// Run `git <args>` and return its standard output.
    ///
    /// `args` is split on whitespace, e.g. `"remote -v"`.
    fn run(&self, args: &str) -> Result<String, SprConfigError>;
}

/// [`Git`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git commands from `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }
}

impl Git for GitCli {
    fn root_dir(&self) -> Result<PathBuf, SprConfigError> {
        let out = self.run("rev-parse --show-toplevel")?;
        Ok(PathBuf::from(out.trim()))
    }

    fn run(&self, args: &str) -> Result<String, SprConfigError> {
        debug!("git {args}");
        let mut cmd = Command::new("git");
        cmd.args(args.split_whitespace());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| SprConfigError::GitError {
            command: args.to_string(),
            reason: e.to_string(),
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SprConfigError::GitError {
                command: args.to_string(),
                reason: stderr.trim().to_string(),
            })
        }
    }
}
