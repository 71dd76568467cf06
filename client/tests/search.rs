mod common;

use std::time::Duration;

use common::*;
use pokedex_client::{NOT_FOUND_MESSAGE, SearchState, StalePolicy};

#[tokio::test]
async fn test_search_success() {
    let dex = pokedex(mock_api());
    assert_eq!(dex.state(), SearchState::Idle);

    let state = dex.search("Ivysaur").await;

    assert_eq!(state.profile().map(|p| p.id), Some(2));
    assert_eq!(dex.state(), state);
}

#[tokio::test]
async fn test_failed_search_clears_previous_profile() {
    let dex = pokedex(mock_api());
    dex.search("ivysaur").await;
    assert!(dex.state().profile().is_some());

    let state = dex.search("zzznotapokemon").await;

    assert_eq!(state, SearchState::Error(NOT_FOUND_MESSAGE.to_string()));
    assert!(dex.state().profile().is_none());
}

#[tokio::test]
async fn test_empty_search_is_an_error() {
    let source = mock_api();
    let dex = pokedex(source.clone());
    dex.search("eevee").await;

    let state = dex.search("").await;

    assert_eq!(state.error(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(source.request_count(), 3);
}

#[tokio::test]
async fn test_success_replaces_error() {
    let dex = pokedex(mock_api());
    dex.search("missingno").await;
    assert!(dex.state().error().is_some());

    let state = dex.search("eevee").await;

    assert!(state.error().is_none());
    assert_eq!(state.profile().map(|p| p.name.as_str()), Some("eevee"));
}

#[tokio::test]
async fn test_reset() {
    let dex = pokedex(mock_api());
    dex.search("eevee").await;
    dex.reset();

    assert_eq!(dex.state(), SearchState::Idle);
}

/// The first search is slow and the second fast; by default whichever
/// resolves last owns the slot, so the older search wins.
#[tokio::test]
async fn test_interleaved_searches_last_to_settle_wins() {
    let source = mock_api().with_delay(IVYSAUR_URL, Duration::from_millis(100));
    let dex = pokedex(source);
    assert_eq!(dex.policy(), StalePolicy::LastToSettle);

    let (slow, fast) = tokio::join!(dex.search("ivysaur"), dex.search("eevee"));

    assert_eq!(fast.profile().map(|p| p.name.as_str()), Some("eevee"));
    assert_eq!(slow.profile().map(|p| p.name.as_str()), Some("ivysaur"));
    assert_eq!(
        dex.state().profile().map(|p| p.name.as_str()),
        Some("ivysaur")
    );
}

#[tokio::test]
async fn test_interleaved_searches_latest_issued_discards_stale() {
    let source = mock_api().with_delay(IVYSAUR_URL, Duration::from_millis(100));
    let dex = pokedex_with_policy(source, StalePolicy::LatestIssued);

    let (slow, _fast) = tokio::join!(dex.search("ivysaur"), dex.search("eevee"));

    // the slow search's own outcome was dropped, the slot still holds eevee
    assert_eq!(slow.profile().map(|p| p.name.as_str()), Some("eevee"));
    assert_eq!(dex.state().profile().map(|p| p.name.as_str()), Some("eevee"));
}

#[tokio::test]
async fn test_interleaved_stale_error_does_not_clobber() {
    let source = mock_api()
        .with_status(IVYSAUR_URL, 503)
        .with_delay(IVYSAUR_URL, Duration::from_millis(100));
    let dex = pokedex_with_policy(source, StalePolicy::LatestIssued);

    tokio::join!(dex.search("ivysaur"), dex.search("eevee"));

    assert!(dex.state().error().is_none());
    assert_eq!(dex.state().profile().map(|p| p.id), Some(133));
}

#[tokio::test]
async fn test_clones_share_the_slot() {
    let dex = pokedex(mock_api());
    let other = dex.clone();

    let handle = tokio::spawn(async move { other.search("eevee").await });
    handle.await.unwrap();

    assert_eq!(dex.state().profile().map(|p| p.id), Some(133));
}
