//! Login page.
//!
//! # Design
//! - Form state lives in a ref cell so the async completion sees the latest
//!   input; renders are requested explicitly.
//! - Unmounting aborts an in-flight request.
//! - A visitor who is already signed in is sent home; a fresh sign-in
//!   navigates home itself.

use crate::app::Route;
use crate::core::auth::AuthCtx;
use crate::core::store::{AppStore, select_is_authenticated};
use crate::features::login::state::{LoginFormState, LoginOutcome};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPageProps {
    pub auth: AuthCtx,
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &LoginPageProps) -> Html {
    let signed_in_at_mount =
        *use_state(|| select_is_authenticated(&Dispatch::<AppStore>::new().get()));
    let form = use_mut_ref(LoginFormState::default);
    let redraw = use_force_update();
    let navigator = use_navigator();

    {
        let auth = props.auth.clone();
        use_effect_with_deps(move |_| move || auth.cancel_pending(), ());
    }

    if signed_in_at_mount {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let on_phone = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.borrow_mut().phone = input.value();
                redraw.force_update();
            }
        })
    };
    let on_password = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.borrow_mut().password = input.value();
                redraw.force_update();
            }
        })
    };
    let on_toggle_visibility = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().toggle_password_visibility();
            redraw.force_update();
        })
    };
    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let auth = props.auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = form.borrow_mut().begin_submit();
            redraw.force_update();
            let Some(credentials) = credentials else {
                return;
            };
            let form = form.clone();
            let redraw = redraw.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                let result = auth.login(&credentials.phone, &credentials.password).await;
                let outcome = form.borrow_mut().finish_submit(&result);
                redraw.force_update();
                if outcome == LoginOutcome::SignedIn
                    && let Some(navigator) = navigator
                {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    let state = form.borrow().clone();
    let submitting = state.submitting();
    let password_type = if state.show_password { "text" } else { "password" };
    let visibility_label = if state.show_password {
        "Hide password"
    } else {
        "Show password"
    };

    html! {
        <section class="page login-page">
            <form class="card login-form" onsubmit={on_submit} novalidate={true}>
                <h1>{"Welcome back"}</h1>
                <label class="field">
                    <span>{"Mobile number"}</span>
                    <input
                        type="tel"
                        inputmode="numeric"
                        autocomplete="tel"
                        placeholder="10-digit mobile number"
                        value={state.phone.clone()}
                        oninput={on_phone}
                    />
                </label>
                <label class="field">
                    <span>{"Password"}</span>
                    <div class="password-row">
                        <input
                            type={password_type}
                            autocomplete="current-password"
                            value={state.password.clone()}
                            oninput={on_password}
                        />
                        <button
                            type="button"
                            class="ghost"
                            aria-label={visibility_label}
                            onclick={on_toggle_visibility}
                        >
                            {if state.show_password { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>
                if let Some(error) = state.error.clone() {
                    <p class="error" role="alert">{error}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    {if submitting { "Signing in…" } else { "Sign in" }}
                </button>
                <Link<Route> to={Route::ForgotPassword} classes={classes!("forgot-link")}>
                    {"Forgot password?"}
                </Link<Route>>
            </form>
        </section>
    }
}
