//! Config file locations and raw file I/O.
//!
//! Both scopes use the same file name, `.spr.yml`: the repository file lives
//! at the git working-tree root, the user file in the home directory.
//!
//! Reads treat a missing file as "nothing to overlay". Only actual I/O errors
//! (permissions, etc.) are propagated. Writes go through a temp file in the
//! target directory that is then renamed over the destination, so a reader
//! never sees a half-written file.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SprConfigError;

/// File name shared by the repository and user config files.
pub const CONFIG_FILE_NAME: &str = ".spr.yml";

/// `<root>/.spr.yml`
pub fn repo_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// `<home>/.spr.yml`
pub fn user_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf, SprConfigError> {
    let user = directories::UserDirs::new().ok_or(SprConfigError::NoHomeDir)?;
    Ok(user.home_dir().to_path_buf())
}

/// Read a file, returning `None` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, SprConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SprConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Create or replace `path` with `content`.
/// Creates parent directories if needed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), SprConfigError> {
    let io_err = |p: &Path| {
        let p = p.to_path_buf();
        move |source: std::io::Error| SprConfigError::IoError { path: p, source }
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err(parent))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err(parent))?;
    tmp.write_all(content.as_bytes()).map_err(io_err(path))?;
    tmp.persist(path).map_err(|e| SprConfigError::IoError {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
