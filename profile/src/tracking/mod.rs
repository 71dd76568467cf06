//! Search outcome tracking

mod search;

pub use search::{RequestTicket, SearchState, SearchTracker, StalePolicy};
