//! SearchTracker - the single "current result" slot

use crate::types::PokemonProfile;

/// What the view is showing
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// No search issued yet
    #[default]
    Idle,

    /// A search is outstanding
    Fetching { query: String, seq: u64 },

    /// The last applied search produced a profile
    Success(PokemonProfile),

    /// The last applied search failed; any previous profile is gone
    Error(String),
}

impl SearchState {
    pub fn profile(&self) -> Option<&PokemonProfile> {
        match self {
            SearchState::Success(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, SearchState::Fetching { .. })
    }
}

/// How outcomes of overlapping searches are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Every outcome is applied as it arrives, so the search that
    /// resolves last wins even if it was issued first
    #[default]
    LastToSettle,

    /// Outcomes of searches superseded by a newer one are dropped
    LatestIssued,
}

/// Handle for one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Tracks the outcome of searches against one result slot.
///
/// Each [`begin`](Self::begin) issues a ticket with a fresh sequence number;
/// [`settle`](Self::settle) applies the outcome according to the
/// [`StalePolicy`].
#[derive(Debug, Clone, Default)]
pub struct SearchTracker {
    state: SearchState,
    policy: StalePolicy,

    /// Sequence number of the newest issued search (0 = none)
    latest_seq: u64,
}

impl SearchTracker {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            state: SearchState::Idle,
            policy,
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Sequence number of the newest issued search
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Register a new search and enter `Fetching`
    pub fn begin(&mut self, query: impl Into<String>) -> RequestTicket {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.state = SearchState::Fetching {
            query: query.into(),
            seq,
        };
        RequestTicket { seq }
    }

    /// Whether a ticket has been superseded by a later search
    pub fn is_stale(&self, ticket: RequestTicket) -> bool {
        ticket.seq < self.latest_seq
    }

    /// Apply the outcome of a search.
    ///
    /// Returns `false` if the outcome was discarded as stale.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PokemonProfile, String>,
    ) -> bool {
        if self.policy == StalePolicy::LatestIssued && self.is_stale(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale search outcome"
            );
            return false;
        }

        self.state = match outcome {
            Ok(profile) => SearchState::Success(profile),
            Err(message) => SearchState::Error(message),
        };
        true
    }

    /// Return to `Idle`, keeping the sequence counter
    pub fn reset(&mut self) {
        self.state = SearchState::Idle;
    }
}
