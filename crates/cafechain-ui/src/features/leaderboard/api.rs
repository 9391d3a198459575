//! API helpers for the leaderboard.

use crate::core::store::{ActionSink, AppAction};
use crate::services::api::ApiClient;
use tracing::warn;

const LOAD_FAILED: &str = "Could not load the leaderboard.";

/// Fetch the ranked list and record the outcome in the store.
pub(crate) async fn load_leaderboard(client: &ApiClient, sink: &dyn ActionSink) {
    sink.dispatch(AppAction::LeaderboardRequested);
    match client.fetch_leaderboard().await {
        Ok(entries) => sink.dispatch(AppAction::LeaderboardLoaded(entries)),
        Err(err) => {
            warn!(error = %err, "leaderboard fetch failed");
            sink.dispatch(AppAction::LeaderboardFailed(LOAD_FAILED.to_string()));
        }
    }
}
