//! API helpers for the cafe listing.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Report progress to the store through [`ActionSink`] only.
//! - Tag every outcome with its search term so the store can drop late replies.

use crate::core::store::{ActionSink, AppAction};
use crate::services::api::ApiClient;
use tracing::warn;

const LOAD_FAILED: &str = "Could not load cafes. Please try again.";

/// Fetch the listing for `search` and record the outcome in the store.
pub(crate) async fn load_cafes(client: &ApiClient, sink: &dyn ActionSink, search: Option<&str>) {
    let query = search.map(str::to_string);
    sink.dispatch(AppAction::CafesRequested(query.clone()));
    match client.fetch_cafes(search).await {
        Ok(list) => sink.dispatch(AppAction::CafesLoaded { query, list }),
        Err(err) => {
            warn!(error = %err, "cafe listing fetch failed");
            sink.dispatch(AppAction::CafesFailed {
                query,
                message: LOAD_FAILED.to_string(),
            });
        }
    }
}
