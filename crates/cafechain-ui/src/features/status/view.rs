//! Status toggle and the cafe dashboard that hosts it.

use crate::core::store::{ActionSink, AppAction, AppStore, select_is_open};
use crate::features::status::state::{status_class, status_label, toggle_label};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(StatusToggle)]
pub(crate) fn status_toggle() -> Html {
    let is_open = *use_selector(select_is_open);
    let onclick = Callback::from(|_: MouseEvent| {
        Dispatch::<AppStore>::new().dispatch(AppAction::ToggleOpen);
    });
    html! {
        <div class="status-toggle">
            <span class={classes!("badge", status_class(is_open))}>{status_label(is_open)}</span>
            <button class="btn" aria-pressed={is_open.to_string()} onclick={onclick}>
                {toggle_label(is_open)}
            </button>
        </div>
    }
}

#[function_component(CafeDashboardPage)]
pub(crate) fn cafe_dashboard_page() -> Html {
    html! {
        <section class="page cafe-dashboard">
            <h1>{"Cafe dashboard"}</h1>
            <p class="muted">{"Let customers know whether you are taking orders."}</p>
            <StatusToggle />
        </section>
    }
}
