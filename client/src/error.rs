use pokedex_protocol::ParseError;
use thiserror::Error;

/// The only failure message shown to users, whatever went wrong
pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which of the three chained requests failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Pokemon,
    Species,
    EvolutionChain,
}

impl FetchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStage::Pokemon => "pokemon",
            FetchStage::Species => "species",
            FetchStage::EvolutionChain => "evolution chain",
        }
    }
}

impl std::fmt::Display for FetchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of a single GET against a [`DexSource`](crate::DexSource)
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl SourceError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return SourceError::Timeout {
                url: url.to_string(),
            };
        }
        if let Some(status) = error.status() {
            return SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }
        SourceError::Transport {
            url: url.to_string(),
            source: Box::new(error),
        }
    }
}

/// Failure of a profile lookup.
///
/// Variants keep the failing stage for logs; users only ever see
/// [`LookupError::user_message`].
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Query {0:?} is not a pokemon name or number")]
    InvalidQuery(String),

    #[error("No {stage} at {url}")]
    NotFound { stage: FetchStage, url: String },

    #[error("Fetching {stage} failed")]
    Source {
        stage: FetchStage,
        #[source]
        source: SourceError,
    },

    #[error("Malformed {stage} response")]
    Malformed {
        stage: FetchStage,
        #[source]
        source: ParseError,
    },

    #[error("Cannot build request URL from {base}")]
    InvalidUrl { base: String },
}

impl LookupError {
    pub(crate) fn from_source(stage: FetchStage, error: SourceError) -> Self {
        match error {
            SourceError::Status { url, status: 404 } => LookupError::NotFound { stage, url },
            other => LookupError::Source {
                stage,
                source: other,
            },
        }
    }

    /// The request that failed, if any was made
    pub fn stage(&self) -> Option<FetchStage> {
        match self {
            LookupError::NotFound { stage, .. }
            | LookupError::Source { stage, .. }
            | LookupError::Malformed { stage, .. } => Some(*stage),
            LookupError::EmptyQuery
            | LookupError::InvalidQuery(_)
            | LookupError::InvalidUrl { .. } => None,
        }
    }

    /// Message to show the user
    pub fn user_message(&self) -> &'static str {
        NOT_FOUND_MESSAGE
    }
}
