//! Session-aware navigation bars.
//!
//! # Design
//! - Signed-out visitors get the brand and a login link only.
//! - The desktop bar trims blank searches; the mobile bar keeps them verbatim.
//! - The mobile panel animates through [`MenuState`], settled by a timer.
//!   Its search box stays mounted while the panel is hidden so typed text
//!   survives a close.

use crate::app::Route;
use crate::components::avatar::ProfileAvatar;
use crate::components::search_box::SearchBox;
use crate::core::auth::AuthCtx;
use crate::core::nav::{MENU_TRANSITION_MS, MenuState, NavTarget, visible_links};
use crate::core::search::BlankPolicy;
use crate::core::session::Session;
use crate::core::store::select_session;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub auth: AuthCtx,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let session = use_selector(select_session);
    let path = use_current_path();
    let on_logout = use_logout(props.auth.clone());

    let Some(session) = (*session).clone().filter(|s| s.authenticated) else {
        return signed_out_bar("navbar");
    };

    html! {
        <header class="navbar">
            {brand()}
            <nav class="nav-links">
                {nav_links(session.authenticated, &path, &Callback::noop())}
            </nav>
            <SearchBox policy={BlankPolicy::Trimmed} class={classes!("navbar-search")} />
            {profile_menu(&session, on_logout)}
        </header>
    }
}

#[function_component(MobileNavbar)]
pub(crate) fn mobile_navbar(props: &NavbarProps) -> Html {
    let session = use_selector(select_session);
    let path = use_current_path();
    let menu = use_state(MenuState::default);
    let on_logout = use_logout(props.auth.clone());

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |state: &MenuState| {
                let timer = state.is_animating().then(|| {
                    let next = state.settle();
                    Timeout::new(MENU_TRANSITION_MS, move || menu.set(next))
                });
                move || drop(timer)
            },
            *menu,
        );
    }
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                let next = menu.dismiss();
                if next != *menu {
                    menu.set(next);
                }
                || ()
            },
            path.clone(),
        );
    }

    let Some(session) = (*session).clone().filter(|s| s.authenticated) else {
        return signed_out_bar("navbar navbar-mobile");
    };

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggle();
            if next != *menu {
                menu.set(next);
            }
        })
    };
    let dismiss = {
        let menu = menu.clone();
        Callback::from(move |()| {
            let next = menu.dismiss();
            if next != *menu {
                menu.set(next);
            }
        })
    };
    let expanded = if matches!(*menu, MenuState::Open | MenuState::Opening) {
        "true"
    } else {
        "false"
    };

    html! {
        <header class="navbar navbar-mobile">
            {brand()}
            <button
                class="ghost menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded={expanded}
                onclick={toggle}
            >
                {"☰"}
            </button>
            <div class={classes!("mobile-menu", menu.css_class())} hidden={!menu.is_rendered()}>
                <SearchBox policy={BlankPolicy::Verbatim} on_navigate={dismiss.clone()} />
                if menu.is_rendered() {
                    <nav class="nav-links">
                        {nav_links(session.authenticated, &path, &dismiss)}
                    </nav>
                    {profile_menu(&session, on_logout)}
                }
            </div>
        </header>
    }
}

#[hook]
fn use_current_path() -> String {
    use_location()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default()
}

#[hook]
fn use_logout(auth: AuthCtx) -> Callback<MouseEvent> {
    let navigator = use_navigator();
    Callback::from(move |_: MouseEvent| {
        auth.logout();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}

fn brand() -> Html {
    html! {
        <Link<Route> to={Route::Home} classes={classes!("brand")}>
            <strong>{"CafeChain"}</strong>
        </Link<Route>>
    }
}

fn signed_out_bar(class: &'static str) -> Html {
    html! {
        <header class={class}>
            {brand()}
            <Link<Route> to={Route::Login} classes={classes!("login-link")}>{"Login"}</Link<Route>>
        </header>
    }
}

fn nav_links(authenticated: bool, path: &str, on_pick: &Callback<()>) -> Html {
    visible_links(authenticated)
        .into_iter()
        .map(|target| nav_item(target, path, on_pick.clone()))
        .collect()
}

fn nav_item(target: NavTarget, path: &str, on_pick: Callback<()>) -> Html {
    let classes = classes!("nav-item", target.is_active(path).then_some("active"));
    html! {
        <span onclick={Callback::from(move |_: MouseEvent| on_pick.emit(()))}>
            <Link<Route> to={Route::from(target)} classes={classes}>{target.label()}</Link<Route>>
        </span>
    }
}

fn profile_menu(session: &Session, on_logout: Callback<MouseEvent>) -> Html {
    html! {
        <div class="profile-menu">
            <Link<Route> to={Route::Profile} classes={classes!("profile-link")}>
                <ProfileAvatar session={Some(session.clone())} />
                <span class="profile-name">{session.display_name()}</span>
            </Link<Route>>
            <button class="ghost logout" onclick={on_logout}>{"Logout"}</button>
        </div>
    }
}
