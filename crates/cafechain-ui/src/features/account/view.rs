//! Profile, rewards and password recovery pages.

use crate::app::Route;
use crate::components::avatar::ProfileAvatar;
use crate::core::auth::AuthCtx;
use crate::core::store::select_session;
use crate::features::account::state::{ForgotPasswordState, MSG_RESET_REQUESTED};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfilePageProps {
    pub auth: AuthCtx,
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &ProfilePageProps) -> Html {
    let session = use_selector(select_session);
    let navigator = use_navigator();
    let on_logout = {
        let auth = props.auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };
    let session = (*session).clone();
    let field = |label: &'static str, value: Option<String>| {
        html! {
            <div class="profile-field">
                <dt>{label}</dt>
                <dd>{value.unwrap_or_else(|| "-".to_string())}</dd>
            </div>
        }
    };

    html! {
        <section class="page profile-page">
            <div class="card profile-card">
                <ProfileAvatar session={session.clone()} class={classes!("avatar-lg")} />
                <h1>{session.as_ref().map_or("Guest", |s| s.display_name()).to_string()}</h1>
                <dl>
                    {field("Name", session.as_ref().and_then(|s| s.name.clone()))}
                    {field("Email", session.as_ref().and_then(|s| s.email.clone()))}
                </dl>
                <button class="btn" onclick={on_logout}>{"Logout"}</button>
            </div>
        </section>
    }
}

#[function_component(RewardsPage)]
pub(crate) fn rewards_page() -> Html {
    html! {
        <section class="page rewards-page">
            <h1>{"Rewards"}</h1>
            <p class="muted">{"Earn points with every order and redeem them at participating cafes."}</p>
            <Link<Route> to={Route::Cafes} classes={classes!("btn")}>{"Find a cafe"}</Link<Route>>
        </section>
    }
}

#[function_component(ForgotPasswordPage)]
pub(crate) fn forgot_password_page() -> Html {
    let state = use_state(ForgotPasswordState::default);

    let on_phone = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*state).clone();
                next.phone = input.value();
                state.set(next);
            }
        })
    };
    let on_submit = {
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*state).clone();
            if next.submit() {
                tracing::info!("password reset requested");
            }
            state.set(next);
        })
    };

    html! {
        <section class="page forgot-password-page">
            <form class="card" onsubmit={on_submit} novalidate={true}>
                <h1>{"Reset password"}</h1>
                if state.submitted {
                    <p class="success" role="status">{MSG_RESET_REQUESTED}</p>
                } else {
                    <label class="field">
                        <span>{"Mobile number"}</span>
                        <input
                            type="tel"
                            inputmode="numeric"
                            value={state.phone.clone()}
                            oninput={on_phone}
                        />
                    </label>
                    if let Some(error) = state.error.clone() {
                        <p class="error" role="alert">{error}</p>
                    }
                    <button type="submit" class="btn btn-primary">{"Send reset link"}</button>
                }
                <Link<Route> to={Route::Login} classes={classes!("back-link")}>{"Back to login"}</Link<Route>>
            </form>
        </section>
    }
}
