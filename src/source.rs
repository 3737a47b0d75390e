//! Configuration sources.
//!
//! A [`Source`] is a pure transform from the current partial state of a config
//! to a partial update. The update only carries the fields the source
//! addresses; every other field is `None` and falls through to the state below
//! when the [`Loader`](crate::Loader) folds it in.
//!
//! | Source            | Produces                                         |
//! |-------------------|--------------------------------------------------|
//! | [`DefaultSource`] | every `#[config(default)]` value                 |
//! | [`RemoteSource`]  | owner and name inferred from `git remote -v`     |
//! | [`FileSource`]    | whatever a YAML file sets (nothing if missing)   |
//! | [`FileWriter`]    | nothing; persists the current state as a side effect |

use std::marker::PhantomData;
use std::path::PathBuf;

use confique::{Config, Layer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RepoConfig;
use crate::error::SprConfigError;
use crate::file;
use crate::git::Git;
use crate::remote::{DEFAULT_HOST, DEFAULT_REMOTE, RemotePattern};
use crate::validate;

type RepoLayer = <RepoConfig as Config>::Layer;

pub trait Source<C: Config> {
    /// Short label used in log output.
    fn name(&self) -> &str;

    /// Compute this source's update given the state built so far.
    fn load(&self, current: &C::Layer) -> Result<C::Layer, SprConfigError>;
}

/// Compiled defaults for every field that declares one.
pub struct DefaultSource<C>(PhantomData<C>);

impl<C> DefaultSource<C> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C> Default for DefaultSource<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Config> Source<C> for DefaultSource<C> {
    fn name(&self) -> &str {
        "defaults"
    }

    fn load(&self, _current: &C::Layer) -> Result<C::Layer, SprConfigError> {
        Ok(C::Layer::default_values())
    }
}

/// Repository owner and name inferred from the git remote listing.
///
/// The remote to inspect is read from the state built so far (normally the
/// default, `origin`). A listing with no matching line yields an empty update.
pub struct RemoteSource<'g> {
    git: &'g dyn Git,
    host: String,
}

impl<'g> RemoteSource<'g> {
    pub fn new(git: &'g dyn Git) -> Self {
        Self {
            git,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Match remotes on `host` instead of `github.com`.
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }
}

#[derive(Serialize, Deserialize, Default)]
struct RemoteFields {
    #[serde(rename = "githubRepoOwner", skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(rename = "githubRepoName", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "githubRemote", skip_serializing_if = "Option::is_none")]
    remote: Option<String>,
}

impl Source<RepoConfig> for RemoteSource<'_> {
    fn name(&self) -> &str {
        "git remote"
    }

    fn load(&self, current: &RepoLayer) -> Result<RepoLayer, SprConfigError> {
        let current: RemoteFields = convert(current)?;
        let remote_name = current.remote.as_deref().unwrap_or(DEFAULT_REMOTE);

        let listing = self.git.run("remote -v")?;
        let pattern = RemotePattern::new(remote_name, &self.host);
        match pattern.find_identity(&listing) {
            Some(identity) => {
                debug!(
                    owner = %identity.owner,
                    name = %identity.name,
                    "inferred repository from remote '{remote_name}'"
                );
                convert(&RemoteFields {
                    owner: Some(identity.owner),
                    name: Some(identity.name),
                    remote: None,
                })
            }
            None => {
                debug!("no '{remote_name}' push remote on {}", self.host);
                Ok(RepoLayer::empty())
            }
        }
    }
}

/// Overlay of a YAML config file. A missing file contributes nothing.
pub struct FileSource<C> {
    path: PathBuf,
    strict: bool,
    _phantom: PhantomData<C>,
}

impl<C> FileSource<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
            _phantom: PhantomData,
        }
    }

    /// Reject unknown keys instead of logging them (default: `false`).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl<C: Config> Source<C> for FileSource<C>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self, _current: &C::Layer) -> Result<C::Layer, SprConfigError> {
        let Some(content) = file::read_optional(&self.path)? else {
            debug!("{} not found, nothing to overlay", self.path.display());
            return Ok(C::Layer::empty());
        };

        let (layer, unknown) = validate::decode_layer::<C>(&content, &self.path)?;
        if !unknown.is_empty() {
            if self.strict {
                return Err(SprConfigError::UnknownKeys(unknown));
            }
            for err in &unknown {
                warn!("{err}");
            }
        }
        debug!("loaded {}", self.path.display());
        Ok(layer)
    }
}

/// Persists the current state to a YAML file, creating or replacing it.
pub struct FileWriter<C> {
    path: PathBuf,
    _phantom: PhantomData<C>,
}

impl<C> FileWriter<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }
}

impl<C: Config> Source<C> for FileWriter<C>
where
    C::Layer: Serialize,
{
    fn name(&self) -> &str {
        "file writer"
    }

    fn load(&self, current: &C::Layer) -> Result<C::Layer, SprConfigError> {
        let content =
            serde_yaml::to_string(current).map_err(|e| SprConfigError::SerializeError {
                path: self.path.clone(),
                source: e,
            })?;
        file::write_atomic(&self.path, &content)?;
        info!("wrote {}", self.path.display());
        Ok(C::Layer::empty())
    }
}

/// Re-shape one serde value as another through a YAML value.
///
/// Used to move between a config, its layer, and narrow views of a layer,
/// which all share the same field names.
pub(crate) fn convert<T, U>(value: &T) -> Result<U, SprConfigError>
where
    T: Serialize,
    U: for<'de> Deserialize<'de>,
{
    let yaml = serde_yaml::to_value(value).map_err(|e| SprConfigError::InvalidValue {
        key: "<layer>".into(),
        reason: e.to_string(),
    })?;
    serde_yaml::from_value(yaml).map_err(|e| SprConfigError::InvalidValue {
        key: "<layer>".into(),
        reason: e.to_string(),
    })
}
