#[cfg(test)]
pub mod test {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::error::SprConfigError;
    use crate::git::Git;

    /// A [`Git`] with a canned working-tree root and remote listing.
    pub struct FakeGit {
        root: PathBuf,
        remotes: String,
        fail: bool,
        commands: RefCell<Vec<String>>,
    }

    impl FakeGit {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                remotes: String::new(),
                fail: false,
                commands: RefCell::new(Vec::new()),
            }
        }

        /// A git whose commands all fail.
        pub fn failing(root: impl Into<PathBuf>) -> Self {
            Self {
                fail: true,
                ..Self::new(root)
            }
        }

        /// Output returned for `remote -v`.
        pub fn remotes(mut self, listing: &str) -> Self {
            self.remotes = listing.to_string();
            self
        }

        /// Every command run so far, in order.
        pub fn commands(&self) -> Vec<String> {
            self.commands.borrow().clone()
        }
    }

    impl Git for FakeGit {
        fn root_dir(&self) -> Result<PathBuf, SprConfigError> {
            Ok(self.root.clone())
        }

        fn run(&self, args: &str) -> Result<String, SprConfigError> {
            self.commands.borrow_mut().push(args.to_string());
            if self.fail {
                return Err(SprConfigError::GitError {
                    command: args.to_string(),
                    reason: "fatal: not a git repository".into(),
                });
            }
            match args {
                "remote -v" => Ok(self.remotes.clone()),
                other => Err(SprConfigError::GitError {
                    command: other.to_string(),
                    reason: "unexpected command".into(),
                }),
            }
        }
    }

    #[test]
    fn fake_git_records_commands() {
        let git = FakeGit::new("/repo").remotes("origin\tx (push)\n");
        assert_eq!(git.run("remote -v").unwrap(), "origin\tx (push)\n");
        assert!(git.run("status").is_err());
        assert_eq!(git.commands(), vec!["remote -v", "status"]);
    }
}
