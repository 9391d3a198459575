//! Navigation targets and the narrow-viewport menu state machine.
//!
//! # Design
//! - Route paths are declared once here; the router enum mirrors them.
//! - The menu animates through explicit transitional states so toggles that
//!   arrive mid-animation are ignored rather than queued.

/// Customer home route.
pub const HOME_PATH: &str = "/user/home";
/// Listing route where search applies.
pub const LISTING_PATH: &str = "/user/cafes";
/// Leaderboard route.
pub const LEADERBOARD_PATH: &str = "/user/leaderboard";
/// Rewards route.
pub const REWARDS_PATH: &str = "/user/rewards";
/// Profile route.
pub const PROFILE_PATH: &str = "/user/profile";
/// Password recovery route.
pub const FORGOT_PASSWORD_PATH: &str = "/user/forgot-password";
/// Login route.
pub const LOGIN_PATH: &str = "/cafe/auth/login";
/// Cafe owner dashboard route.
pub const CAFE_DASHBOARD_PATH: &str = "/cafe/dashboard";

/// Duration of the menu open/close animation, in milliseconds.
pub const MENU_TRANSITION_MS: u32 = 200;

/// Destinations shown in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Home page.
    Home,
    /// Cafe listing.
    Cafes,
    /// Leaderboard.
    Leaderboard,
    /// Rewards.
    Rewards,
}

impl NavTarget {
    /// Links in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Home, Self::Cafes, Self::Leaderboard, Self::Rewards]
    }

    /// Link text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cafes => "Cafes",
            Self::Leaderboard => "Leaderboard",
            Self::Rewards => "Rewards",
        }
    }

    /// Route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Cafes => LISTING_PATH,
            Self::Leaderboard => LEADERBOARD_PATH,
            Self::Rewards => REWARDS_PATH,
        }
    }

    /// Whether the link should render as active for `current_path`.
    #[must_use]
    pub fn is_active(self, current_path: &str) -> bool {
        current_path.trim_end_matches('/') == self.path()
    }
}

/// Links to render for the given authentication state; none when signed out.
#[must_use]
pub fn visible_links(authenticated: bool) -> Vec<NavTarget> {
    if authenticated {
        NavTarget::all().to_vec()
    } else {
        Vec::new()
    }
}

/// Whether `path` requires a signed-in user.
#[must_use]
pub fn requires_session(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    if path == FORGOT_PASSWORD_PATH {
        return false;
    }
    path.starts_with("/user/") || path == CAFE_DASHBOARD_PATH
}

/// Mobile menu visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Hidden.
    #[default]
    Closed,
    /// Sliding in.
    Opening,
    /// Fully shown.
    Open,
    /// Sliding out.
    Closing,
}

impl MenuState {
    /// Transition for a toggle click; ignored while animating.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Opening,
            Self::Open => Self::Closing,
            Self::Opening | Self::Closing => self,
        }
    }

    /// Transition when the animation timer fires.
    #[must_use]
    pub const fn settle(self) -> Self {
        match self {
            Self::Opening => Self::Open,
            Self::Closing => Self::Closed,
            Self::Open | Self::Closed => self,
        }
    }

    /// Transition on navigation: an open menu starts closing.
    #[must_use]
    pub const fn dismiss(self) -> Self {
        match self {
            Self::Open | Self::Opening => Self::Closing,
            Self::Closing | Self::Closed => self,
        }
    }

    /// Whether the panel is in the DOM.
    #[must_use]
    pub const fn is_rendered(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether a settle timer must be scheduled.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// CSS class driving the slide animation.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Closed => "menu-closed",
            Self::Opening => "menu-opening",
            Self::Open => "menu-open",
            Self::Closing => "menu-closing",
        }
    }
}
