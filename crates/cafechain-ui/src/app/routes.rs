//! Routing definitions for the CafeChain UI.
use crate::core::nav::NavTarget;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Root,
    #[at("/user/home")]
    Home,
    #[at("/user/cafes")]
    Cafes,
    #[at("/user/leaderboard")]
    Leaderboard,
    #[at("/user/rewards")]
    Rewards,
    #[at("/user/profile")]
    Profile,
    #[at("/user/forgot-password")]
    ForgotPassword,
    #[at("/cafe/auth/login")]
    Login,
    #[at("/cafe/dashboard")]
    CafeDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Self::Home,
            NavTarget::Cafes => Self::Cafes,
            NavTarget::Leaderboard => Self::Leaderboard,
            NavTarget::Rewards => Self::Rewards,
        }
    }
}
