mod config;
mod error;
mod fetcher;
pub mod mock;
mod source;
pub mod view;

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use reqwest::Url;

pub use pokedex_profile::{
    EvolutionStep, MoveEntry, PokemonProfile, RequestTicket, SearchState, SearchTracker,
    StalePolicy, StatEntry, Type, type_color,
};
pub use pokedex_protocol::DEFAULT_BASE_URL;

pub use config::{ClientConfig, ConfigError};
pub use error::{FetchStage, LookupError, NOT_FOUND_MESSAGE, SourceError};
pub use fetcher::normalize_query;
pub use source::{DexSource, HttpSource};
pub use view::{RenderOptions, render_profile, render_state};

/// Main Pokedex client.
///
/// Owns a [`DexSource`] and the single result slot shown to the user.
/// Clones share the slot, so searches issued from several tasks race for it
/// as described by [`StalePolicy`].
#[derive(Clone)]
pub struct Pokedex<S = HttpSource> {
    source: S,
    base_url: Url,
    tracker: Arc<RwLock<SearchTracker>>,
}

impl Pokedex<HttpSource> {
    /// Create a client that talks to the real API
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let source = HttpSource::new(config)?;
        Self::with_source(source, config)
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env())
    }
}

impl<S: DexSource> Pokedex<S> {
    /// Create a client over any source
    pub fn with_source(source: S, config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            source,
            base_url: config.base()?,
            tracker: Arc::new(RwLock::new(SearchTracker::new(config.stale_policy))),
        })
    }

    /// Run a search and record its outcome in the result slot.
    ///
    /// Returns the slot as it stands once this search has settled. With
    /// overlapping searches that may be another search's outcome.
    pub async fn search(&self, query: &str) -> SearchState {
        let ticket = self.tracker_mut().begin(normalize_query(query));

        let outcome = self.fetch_profile(query).await.map_err(|e| {
            tracing::warn!(
                query = %query,
                seq = ticket.seq(),
                stage = ?e.stage(),
                error = %e,
                "Lookup failed"
            );
            e.user_message().to_string()
        });

        let mut tracker = self.tracker_mut();
        tracker.settle(ticket, outcome);
        tracker.state().clone()
    }

    /// Snapshot of the result slot
    pub fn state(&self) -> SearchState {
        self.tracker
            .read()
            .map(|t| t.state().clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().state().clone())
    }

    /// Clear the result slot back to idle
    pub fn reset(&self) {
        self.tracker_mut().reset();
    }

    pub fn policy(&self) -> StalePolicy {
        self.tracker
            .read()
            .map(|t| t.policy())
            .unwrap_or_else(|poisoned| poisoned.into_inner().policy())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn tracker_mut(&self) -> RwLockWriteGuard<'_, SearchTracker> {
        self.tracker.write().unwrap_or_else(PoisonError::into_inner)
    }
}
