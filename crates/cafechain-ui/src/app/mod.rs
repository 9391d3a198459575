//! Application root: router, shared contexts and startup wiring.
//!
//! # Design
//! - One [`ApiCtx`] and one [`AuthCtx`] per boot, created in the root and
//!   handed down.
//! - Routing waits until the persisted session has been restored so guards
//!   never bounce a returning user to the login page.

use crate::components::navbar::{MobileNavbar, Navbar};
use crate::core::auth::{AuthCtx, AuthService};
use crate::core::breakpoints::{Breakpoint, NavVariant, for_width, nav_variant};
use crate::core::nav::requires_session;
use crate::core::store::{AppStore, select_is_authenticated, select_session};
use crate::features::account::view::{ForgotPasswordPage, ProfilePage, RewardsPage};
use crate::features::cafes::view::CafesPage;
use crate::features::home::view::HomePage;
use crate::features::leaderboard::view::LeaderboardPage;
use crate::features::login::view::LoginPage;
use crate::features::status::view::CafeDashboardPage;
use crate::telemetry::init_logging;
use gloo::events::EventListener;
use gloo::utils::window;
use preferences::{LocalSessionStore, load_config, load_log_level};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod preferences;
mod routes;

#[function_component(CafeChainApp)]
pub(crate) fn cafechain_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(load_config()), ());
    let auth = {
        let service: Rc<dyn AuthService> = api_ctx.client.clone();
        use_memo(
            move |_| {
                AuthCtx::new(
                    service,
                    Rc::new(Dispatch::<AppStore>::new()),
                    Rc::new(LocalSessionStore),
                )
            },
            (),
        )
    };
    let breakpoint = use_state(current_breakpoint);
    let restored = *use_selector(|store: &AppStore| store.session.restored);
    let authenticated = *use_selector(select_is_authenticated);
    let session = use_selector(select_session);

    {
        let auth = (*auth).clone();
        use_effect_with_deps(
            move |_| {
                auth.restore();
                || ()
            },
            (),
        );
    }
    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |session| {
                api_ctx
                    .client
                    .set_token((**session).as_ref().and_then(|s| s.token.clone()));
                || ()
            },
            session,
        );
    }
    {
        let breakpoint = breakpoint.clone();
        use_effect(move || {
            apply_breakpoint(*breakpoint);
            let handler = EventListener::new(&window(), "resize", {
                let breakpoint = breakpoint.clone();
                move |_event| {
                    let bp = current_breakpoint();
                    if bp != *breakpoint {
                        breakpoint.set(bp);
                    }
                }
            });
            move || drop(handler)
        });
    }

    if !restored {
        return html! { <div class="splash" aria-busy="true"></div> };
    }

    let auth = (*auth).clone();
    let navbar = match nav_variant(*breakpoint) {
        NavVariant::Desktop => html! { <Navbar auth={auth.clone()} /> },
        NavVariant::Mobile => html! { <MobileNavbar auth={auth.clone()} /> },
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                {navbar}
                <main class="content">
                    <Switch<Route> render={move |route| switch(route, &auth, authenticated)} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route, auth: &AuthCtx, authenticated: bool) -> Html {
    if !authenticated && requires_session(&route.to_path()) {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Home} /> },
        Route::Home => html! { <HomePage /> },
        Route::Cafes => html! { <CafesPage /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
        Route::Rewards => html! { <RewardsPage /> },
        Route::Profile => html! { <ProfilePage auth={auth.clone()} /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::Login => html! { <LoginPage auth={auth.clone()} /> },
        Route::CafeDashboard => html! { <CafeDashboardPage /> },
        Route::NotFound => html! {
            <section class="page not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
            </section>
        },
    }
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(document) = window().document()
        && let Some(body) = document.body()
    {
        let _ = body.set_attribute("data-bp", bp.name);
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(1280, |w| w.clamp(0.0, f64::from(u16::MAX)) as u16);
    for_width(width)
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    init_logging(load_log_level().as_deref());
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CafeChainApp>::with_root(root).render();
    } else {
        yew::Renderer::<CafeChainApp>::new().render();
    }
}
