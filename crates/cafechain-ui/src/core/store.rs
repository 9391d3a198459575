//! App-wide yewdux store, typed actions and selectors.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Every mutation goes through [`apply_action`]; components only read via
//!   `select_*` helpers and dispatch [`AppAction`] values.
//! - Subscribers are notified synchronously by the dispatch that applied the action.

use crate::core::session::Session;
use crate::features::cafes::state::Cafe;
use crate::features::leaderboard::state::{LEADERBOARD_WIDGET_SIZE, LeaderboardEntry};
use tracing::debug;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Signed-in user, if any.
    pub session: SessionSlice,
    /// Cafe listing plus the owner's open/closed flag.
    pub cafes: CafeSlice,
    /// Ranked leaderboard rows.
    pub leaderboard: LeaderboardSlice,
}

/// Authentication slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Active session; `None` means signed out.
    pub current: Option<Session>,
    /// Set once the persisted session has been checked at startup.
    pub restored: bool,
}

/// Cafe listing and owner status slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CafeSlice {
    /// Whether the owner's cafe is open for orders.
    pub is_open: bool,
    /// Search term of the most recent listing request.
    pub query: Option<String>,
    /// Last fetched listing, in backend order.
    pub list: Vec<Cafe>,
    /// Fetch in flight.
    pub loading: bool,
    /// Last fetch failure shown to the user.
    pub error: Option<String>,
}

/// Leaderboard slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LeaderboardSlice {
    /// Entries already sorted by rank.
    pub entries: Vec<LeaderboardEntry>,
    /// Fetch in flight.
    pub loading: bool,
    /// Last fetch failure shown to the user.
    pub error: Option<String>,
}

/// State-change intents accepted by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    /// Login succeeded.
    SignedIn(Session),
    /// User logged out or the session was discarded; per-user data is reset.
    SignedOut,
    /// Startup restore finished, with the persisted session if one was found.
    SessionRestored(Option<Session>),
    /// Flip the owner's open/closed flag.
    ToggleOpen,
    /// Force the owner's open/closed flag.
    SetOpen(bool),
    /// A listing fetch started for the given search term.
    CafesRequested(Option<String>),
    /// A listing fetch completed. Dropped unless `query` is the latest request.
    CafesLoaded {
        /// Search term the reply answers.
        query: Option<String>,
        /// Listing in backend order.
        list: Vec<Cafe>,
    },
    /// A listing fetch failed. Dropped unless `query` is the latest request.
    CafesFailed {
        /// Search term the failed request carried.
        query: Option<String>,
        /// User-facing error text.
        message: String,
    },
    /// A leaderboard fetch started.
    LeaderboardRequested,
    /// A leaderboard fetch completed.
    LeaderboardLoaded(Vec<LeaderboardEntry>),
    /// A leaderboard fetch failed.
    LeaderboardFailed(String),
}

/// Apply one action to the store. This is the only transition function.
pub fn apply_action(store: &mut AppStore, action: AppAction) {
    debug!(?action, "store action");
    match action {
        AppAction::SignedIn(session) => {
            store.session.current = Some(session);
            store.session.restored = true;
        }
        AppAction::SignedOut => {
            store.session.current = None;
            store.cafes = CafeSlice::default();
            store.leaderboard = LeaderboardSlice::default();
        }
        AppAction::SessionRestored(session) => {
            if store.session.current.is_none() {
                store.session.current = session;
            }
            store.session.restored = true;
        }
        AppAction::ToggleOpen => store.cafes.is_open = !store.cafes.is_open,
        AppAction::SetOpen(open) => store.cafes.is_open = open,
        AppAction::CafesRequested(query) => {
            store.cafes.query = query;
            store.cafes.loading = true;
            store.cafes.error = None;
        }
        AppAction::CafesLoaded { query, list } => {
            if query != store.cafes.query {
                debug!(?query, "dropping stale cafe listing");
                return;
            }
            store.cafes.list = list;
            store.cafes.loading = false;
            store.cafes.error = None;
        }
        AppAction::CafesFailed { query, message } => {
            if query != store.cafes.query {
                return;
            }
            store.cafes.loading = false;
            store.cafes.error = Some(message);
        }
        AppAction::LeaderboardRequested => {
            store.leaderboard.loading = true;
            store.leaderboard.error = None;
        }
        AppAction::LeaderboardLoaded(entries) => {
            store.leaderboard.entries = entries;
            store.leaderboard.loading = false;
            store.leaderboard.error = None;
        }
        AppAction::LeaderboardFailed(message) => {
            store.leaderboard.loading = false;
            store.leaderboard.error = Some(message);
        }
    }
}

/// Narrow dispatch seam so controllers do not depend on yewdux directly.
pub trait ActionSink {
    /// Apply an action; subscribers must observe it before this returns.
    fn dispatch(&self, action: AppAction);
}

impl ActionSink for Dispatch<AppStore> {
    fn dispatch(&self, action: AppAction) {
        let mut action = Some(action);
        self.reduce_mut(|store| {
            if let Some(action) = action.take() {
                apply_action(store, action);
            }
        });
    }
}

/// Read the active session.
#[must_use]
pub fn select_session(store: &AppStore) -> Option<Session> {
    store.session.current.clone()
}

/// Whether an authenticated session is active.
#[must_use]
pub fn select_is_authenticated(store: &AppStore) -> bool {
    store
        .session
        .current
        .as_ref()
        .is_some_and(|session| session.authenticated)
}

/// Read the owner's open/closed flag.
#[must_use]
pub const fn select_is_open(store: &AppStore) -> bool {
    store.cafes.is_open
}

/// Read the cafe listing in backend order.
#[must_use]
pub fn select_cafes(store: &AppStore) -> Vec<Cafe> {
    store.cafes.list.clone()
}

/// Read the leaderboard rows shown by the widget (first five, unsorted).
#[must_use]
pub fn select_top_entries(store: &AppStore) -> Vec<LeaderboardEntry> {
    store
        .leaderboard
        .entries
        .iter()
        .take(LEADERBOARD_WIDGET_SIZE)
        .cloned()
        .collect()
}

/// Read every leaderboard row.
#[must_use]
pub fn select_all_entries(store: &AppStore) -> Vec<LeaderboardEntry> {
    store.leaderboard.entries.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::leaderboard::state::Trend;

    fn session() -> Session {
        Session {
            user_id: "u1".into(),
            name: Some("Asha".into()),
            email: None,
            profile_image: None,
            token: Some("tok".into()),
            authenticated: true,
        }
    }

    fn entry(n: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: format!("c{n}"),
            name: format!("Cafe {n}"),
            logo: None,
            points: 1_000 - n,
            trend: Trend::Flat,
        }
    }

    #[test]
    fn sign_in_and_out_round_trip() {
        let mut store = AppStore::default();
        assert!(!select_is_authenticated(&store));
        apply_action(&mut store, AppAction::SignedIn(session()));
        assert!(select_is_authenticated(&store));
        assert_eq!(select_session(&store), Some(session()));
        apply_action(&mut store, AppAction::SignedOut);
        assert!(!select_is_authenticated(&store));
        assert_eq!(select_session(&store), None);
    }

    #[test]
    fn restore_does_not_clobber_a_fresh_login() {
        let mut store = AppStore::default();
        apply_action(&mut store, AppAction::SignedIn(session()));
        apply_action(&mut store, AppAction::SessionRestored(None));
        assert!(store.session.restored);
        assert!(select_is_authenticated(&store));
    }

    #[test]
    fn toggle_flips_open_flag() {
        let mut store = AppStore::default();
        assert!(!select_is_open(&store));
        apply_action(&mut store, AppAction::ToggleOpen);
        assert!(select_is_open(&store));
        apply_action(&mut store, AppAction::ToggleOpen);
        assert!(!select_is_open(&store));
        apply_action(&mut store, AppAction::SetOpen(true));
        assert!(select_is_open(&store));
    }

    #[test]
    fn top_entries_keep_order_and_cap_at_five() {
        let mut store = AppStore::default();
        let entries: Vec<_> = (1..=8).map(entry).collect();
        apply_action(&mut store, AppAction::LeaderboardLoaded(entries));
        let top = select_top_entries(&store);
        assert_eq!(top.len(), 5);
        let ids: Vec<_> = top.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3", "c4", "c5"]);
        assert_eq!(select_all_entries(&store).len(), 8);
    }

    #[test]
    fn fetch_lifecycle_tracks_loading_and_errors() {
        let mut store = AppStore::default();
        apply_action(&mut store, AppAction::CafesRequested(None));
        assert!(store.cafes.loading);
        apply_action(
            &mut store,
            AppAction::CafesFailed {
                query: None,
                message: "offline".into(),
            },
        );
        assert!(!store.cafes.loading);
        assert_eq!(store.cafes.error.as_deref(), Some("offline"));
        apply_action(
            &mut store,
            AppAction::CafesLoaded {
                query: None,
                list: Vec::new(),
            },
        );
        assert_eq!(store.cafes.error, None);
        apply_action(&mut store, AppAction::LeaderboardRequested);
        apply_action(&mut store, AppAction::LeaderboardFailed("boom".into()));
        assert_eq!(store.leaderboard.error.as_deref(), Some("boom"));
    }

    fn cafe(id: &str) -> Cafe {
        Cafe {
            id: id.into(),
            name: id.into(),
            address: String::new(),
            phone: String::new(),
            features: Vec::new(),
            images: Vec::new(),
        }
    }

    fn loaded(query: Option<&str>, ids: &[&str]) -> AppAction {
        AppAction::CafesLoaded {
            query: query.map(str::to_string),
            list: ids.iter().map(|id| cafe(id)).collect(),
        }
    }

    #[test]
    fn late_listing_for_an_older_search_is_dropped() {
        let mut store = AppStore::default();
        apply_action(&mut store, AppAction::CafesRequested(None));
        apply_action(&mut store, AppAction::CafesRequested(Some("mocha".into())));
        apply_action(&mut store, loaded(Some("mocha"), &["mocha-house"]));
        apply_action(&mut store, loaded(None, &["a", "b", "c"]));
        let ids: Vec<_> = select_cafes(&store).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["mocha-house"]);
        assert!(!store.cafes.loading);
    }

    #[test]
    fn stale_failure_does_not_mask_pending_request() {
        let mut store = AppStore::default();
        apply_action(&mut store, AppAction::CafesRequested(Some("mo".into())));
        apply_action(&mut store, AppAction::CafesRequested(Some("mocha".into())));
        apply_action(
            &mut store,
            AppAction::CafesFailed {
                query: Some("mo".into()),
                message: "offline".into(),
            },
        );
        assert!(store.cafes.loading);
        assert_eq!(store.cafes.error, None);
    }

    #[test]
    fn sign_out_discards_previous_user_data() {
        let mut store = AppStore::default();
        apply_action(&mut store, AppAction::SignedIn(session()));
        apply_action(&mut store, AppAction::SetOpen(true));
        apply_action(&mut store, AppAction::CafesRequested(None));
        apply_action(&mut store, loaded(None, &["a"]));
        apply_action(&mut store, AppAction::LeaderboardLoaded(vec![entry(1)]));
        apply_action(&mut store, AppAction::SignedOut);
        assert_eq!(store.cafes, CafeSlice::default());
        assert_eq!(store.leaderboard, LeaderboardSlice::default());
        assert!(!select_is_open(&store));
    }
}
