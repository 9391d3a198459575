//! Home page: greeting, leaderboard widget and cafe preview.

use crate::core::store::select_session;
use crate::features::cafes::view::CafePreview;
use crate::features::home::greeting;
use crate::features::leaderboard::view::{LeaderboardWidget, use_leaderboard_loader};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    use_leaderboard_loader();
    let session = use_selector(select_session);
    html! {
        <section class="page home-page">
            <h1>{greeting((*session).as_ref())}</h1>
            <div class="home-grid">
                <LeaderboardWidget />
                <CafePreview />
            </div>
        </section>
    }
}
