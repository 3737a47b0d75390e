//! The layered loader: fold an ordered list of sources into one layer.
//!
//! Order is the entire precedence model. Each source sees the state built so
//! far and returns a sparse update; the update wins for the fields it sets and
//! everything else falls through:
//!
//! ```text
//! state = update.with_fallback(state)
//! ```
//!
//! There is no rollback. The first source that fails aborts the fold and its
//! error is returned unchanged.

use confique::{Config, Layer};
use tracing::debug;

use crate::error::SprConfigError;
use crate::source::Source;

/// An ordered list of sources for config type `C`.
pub struct Loader<'a, C: Config> {
    sources: Vec<Box<dyn Source<C> + 'a>>,
}

impl<'a, C: Config> Loader<'a, C> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source. Later sources take precedence.
    pub fn source(mut self, source: impl Source<C> + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Fold all sources starting from an empty layer.
    pub fn run(&self) -> Result<C::Layer, SprConfigError> {
        self.run_on(C::Layer::empty())
    }

    /// Fold all sources on top of `state`.
    pub fn run_on(&self, state: C::Layer) -> Result<C::Layer, SprConfigError> {
        self.sources.iter().try_fold(state, |state, source| {
            debug!("applying {} source", source.name());
            let update = source.load(&state)?;
            Ok(update.with_fallback(state))
        })
    }
}

impl<C: Config> Default for Loader<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}
