//! Two-way binding between the navbar search box and the `search` URL parameter.
//!
//! # Design
//! - One synchronizer shared by both navbar variants; the only difference
//!   between them is the explicit [`BlankPolicy`].
//! - The URL is only ever written while the listing route is active.
//! - Returns the URL effect to perform instead of touching the router, so the
//!   rules are testable without a DOM.

use crate::core::nav::LISTING_PATH;

/// Query parameter mirrored by the search box.
pub const SEARCH_PARAM: &str = "search";

/// How whitespace-only input is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankPolicy {
    /// Whitespace-only input counts as absent: the parameter is removed and
    /// submitting does nothing.
    Trimmed,
    /// Only the empty string counts as absent; whitespace is a real query.
    Verbatim,
}

impl BlankPolicy {
    /// Whether `value` counts as "no query" under this policy.
    #[must_use]
    pub fn is_blank(self, value: &str) -> bool {
        match self {
            Self::Trimmed => value.trim().is_empty(),
            Self::Verbatim => value.is_empty(),
        }
    }

    /// Parameter value for `value`, or `None` when it must be removed.
    #[must_use]
    pub fn param_for(self, value: &str) -> Option<String> {
        if self.is_blank(value) {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Router side effect requested by the synchronizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlEffect {
    /// Leave the URL alone.
    Keep,
    /// Replace the current history entry on the listing route; `None` removes
    /// the parameter.
    Replace(Option<String>),
    /// Push a navigation to the listing route; `None` navigates without a
    /// parameter.
    Navigate(Option<String>),
}

/// Whether `path` is the listing route where search applies.
#[must_use]
pub fn is_listing_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == LISTING_PATH
}

/// Local search value bound to the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSync {
    policy: BlankPolicy,
    value: String,
}

impl SearchSync {
    /// Create an empty synchronizer with the given blank policy.
    #[must_use]
    pub const fn new(policy: BlankPolicy) -> Self {
        Self {
            policy,
            value: String::new(),
        }
    }

    /// Create a synchronizer initialised from the current location.
    #[must_use]
    pub fn from_location(policy: BlankPolicy, path: &str, param: Option<&str>) -> Self {
        let mut sync = Self::new(policy);
        sync.sync_location(path, param);
        sync
    }

    /// Current input value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Blank policy in force.
    #[must_use]
    pub const fn policy(&self) -> BlankPolicy {
        self.policy
    }

    /// React to a location change.
    ///
    /// Off the listing route the value resets to empty. On it, the value adopts
    /// the URL parameter unless the URL already reflects the current value
    /// (which is the case right after our own replace).
    pub fn sync_location(&mut self, path: &str, param: Option<&str>) {
        if !is_listing_path(path) {
            self.value.clear();
            return;
        }
        let ours = self.policy.param_for(&self.value);
        if ours.as_deref() != param {
            self.value = param.unwrap_or_default().to_string();
        }
    }

    /// Record a keystroke and return the URL effect it requires.
    pub fn input(&mut self, path: &str, value: impl Into<String>) -> UrlEffect {
        self.value = value.into();
        if is_listing_path(path) {
            UrlEffect::Replace(self.policy.param_for(&self.value))
        } else {
            UrlEffect::Keep
        }
    }

    /// Handle form submission.
    #[must_use]
    pub fn submit(&self, path: &str) -> UrlEffect {
        if is_listing_path(path) {
            return UrlEffect::Keep;
        }
        match self.policy {
            BlankPolicy::Trimmed if self.policy.is_blank(&self.value) => UrlEffect::Keep,
            _ => UrlEffect::Navigate(self.policy.param_for(&self.value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "/user/cafes";
    const HOME: &str = "/user/home";
    const OTHER_ROUTES: [&str; 6] = [
        "/user/home",
        "/user/leaderboard",
        "/user/rewards",
        "/user/profile",
        "/user/forgot-password",
        "/cafe/auth/login",
    ];

    #[test]
    fn initial_value_reads_param_only_on_listing() {
        let on_listing = SearchSync::from_location(BlankPolicy::Trimmed, LISTING, Some("mocha"));
        assert_eq!(on_listing.value(), "mocha");
        let elsewhere = SearchSync::from_location(BlankPolicy::Trimmed, HOME, Some("mocha"));
        assert_eq!(elsewhere.value(), "");
        let trailing = SearchSync::from_location(BlankPolicy::Verbatim, "/user/cafes/", Some("x"));
        assert_eq!(trailing.value(), "x");
    }

    #[test]
    fn leaving_listing_always_resets() {
        for policy in [BlankPolicy::Trimmed, BlankPolicy::Verbatim] {
            for route in OTHER_ROUTES {
                let mut sync = SearchSync::from_location(policy, LISTING, Some("latte"));
                let _ = sync.input(LISTING, "flat white");
                sync.sync_location(route, None);
                assert_eq!(sync.value(), "", "{policy:?} {route}");
            }
        }
    }

    #[test]
    fn keystrokes_on_listing_mirror_exactly() {
        for policy in [BlankPolicy::Trimmed, BlankPolicy::Verbatim] {
            let mut sync = SearchSync::new(policy);
            let mut typed = String::new();
            for ch in "cold brew".chars() {
                typed.push(ch);
                let effect = sync.input(LISTING, typed.clone());
                let expected = policy.param_for(&typed);
                assert_eq!(effect, UrlEffect::Replace(expected));
            }
            assert_eq!(
                sync.input(LISTING, "cold brew"),
                UrlEffect::Replace(Some("cold brew".into()))
            );
        }
    }

    #[test]
    fn clearing_removes_param_instead_of_empty_string() {
        for policy in [BlankPolicy::Trimmed, BlankPolicy::Verbatim] {
            let mut sync = SearchSync::from_location(policy, LISTING, Some("tea"));
            assert_eq!(sync.input(LISTING, ""), UrlEffect::Replace(None));
        }
    }

    #[test]
    fn whitespace_follows_policy_on_keystroke() {
        let mut trimmed = SearchSync::new(BlankPolicy::Trimmed);
        assert_eq!(trimmed.input(LISTING, "  "), UrlEffect::Replace(None));
        let mut verbatim = SearchSync::new(BlankPolicy::Verbatim);
        assert_eq!(
            verbatim.input(LISTING, "  "),
            UrlEffect::Replace(Some("  ".into()))
        );
    }

    #[test]
    fn keystrokes_elsewhere_leave_url_alone() {
        for route in OTHER_ROUTES {
            let mut sync = SearchSync::new(BlankPolicy::Verbatim);
            assert_eq!(sync.input(route, "espresso"), UrlEffect::Keep);
            assert_eq!(sync.value(), "espresso");
        }
    }

    #[test]
    fn submit_navigates_from_other_routes() {
        let mut sync = SearchSync::new(BlankPolicy::Trimmed);
        let _ = sync.input(HOME, "matcha");
        assert_eq!(sync.submit(HOME), UrlEffect::Navigate(Some("matcha".into())));
        assert_eq!(sync.submit(LISTING), UrlEffect::Keep);
    }

    #[test]
    fn submit_blank_policy_divergence() {
        let mut trimmed = SearchSync::new(BlankPolicy::Trimmed);
        let _ = trimmed.input(HOME, "   ");
        assert_eq!(trimmed.submit(HOME), UrlEffect::Keep);

        let mut verbatim = SearchSync::new(BlankPolicy::Verbatim);
        let _ = verbatim.input(HOME, "   ");
        assert_eq!(
            verbatim.submit(HOME),
            UrlEffect::Navigate(Some("   ".into()))
        );
        let _ = verbatim.input(HOME, "");
        assert_eq!(verbatim.submit(HOME), UrlEffect::Navigate(None));
    }

    #[test]
    fn own_replace_does_not_clobber_trimmed_whitespace() {
        let mut sync = SearchSync::new(BlankPolicy::Trimmed);
        let effect = sync.input(LISTING, " ");
        assert_eq!(effect, UrlEffect::Replace(None));
        sync.sync_location(LISTING, None);
        assert_eq!(sync.value(), " ");
    }

    #[test]
    fn external_param_change_is_adopted() {
        let mut sync = SearchSync::from_location(BlankPolicy::Verbatim, LISTING, Some("a"));
        sync.sync_location(LISTING, Some("b"));
        assert_eq!(sync.value(), "b");
        sync.sync_location(LISTING, None);
        assert_eq!(sync.value(), "");
    }

    #[test]
    fn text_typed_off_listing_is_kept_until_the_route_changes() {
        let mut sync = SearchSync::from_location(BlankPolicy::Verbatim, HOME, None);
        assert_eq!(sync.input(HOME, "lat"), UrlEffect::Keep);
        assert_eq!(sync.input(HOME, "latte"), UrlEffect::Keep);
        assert_eq!(sync.value(), "latte");
        assert_eq!(
            sync.submit(HOME),
            UrlEffect::Navigate(Some("latte".to_string()))
        );
    }
}
