//! Leaderboard widget and page.

use crate::app::ApiCtx;
use crate::core::store::{AppStore, select_all_entries, select_top_entries};
use crate::features::leaderboard::api::load_leaderboard;
use crate::features::leaderboard::state::{
    LEADERBOARD_WIDGET_SIZE, RankedRow, format_points, logo_initial, ranked_rows,
};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Fetch the leaderboard once when the calling component mounts.
#[hook]
pub(crate) fn use_leaderboard_loader() {
    let api_ctx = use_context::<ApiCtx>();
    use_effect_with_deps(
        move |_| {
            if let Some(api_ctx) = api_ctx {
                yew::platform::spawn_local(async move {
                    let dispatch = Dispatch::<AppStore>::new();
                    load_leaderboard(&api_ctx.client, &dispatch).await;
                });
            }
            || ()
        },
        (),
    );
}

#[function_component(LeaderboardWidget)]
pub(crate) fn leaderboard_widget() -> Html {
    let entries = use_selector(select_top_entries);
    let loading = *use_selector(|store: &AppStore| store.leaderboard.loading);
    let error = use_selector(|store: &AppStore| store.leaderboard.error.clone());

    let body = if let Some(message) = (*error).clone() {
        html! { <p class="error">{message}</p> }
    } else if entries.is_empty() && loading {
        html! { <p class="muted">{"Loading…"}</p> }
    } else if entries.is_empty() {
        html! { <p class="muted">{"No rankings yet."}</p> }
    } else {
        html! {
            <ol class="leaderboard-rows">
                {for ranked_rows(&entries, LEADERBOARD_WIDGET_SIZE).into_iter().map(leaderboard_row)}
            </ol>
        }
    };

    html! {
        <section class="card leaderboard-widget">
            <h2>{"Top cafes"}</h2>
            {body}
        </section>
    }
}

#[function_component(LeaderboardPage)]
pub(crate) fn leaderboard_page() -> Html {
    use_leaderboard_loader();
    let all = use_selector(select_all_entries);
    let rest: Vec<RankedRow> = ranked_rows(&all, all.len())
        .into_iter()
        .skip(LEADERBOARD_WIDGET_SIZE)
        .collect();

    html! {
        <section class="page leaderboard-page">
            <h1>{"Leaderboard"}</h1>
            <LeaderboardWidget />
            if !rest.is_empty() {
                <ol class="leaderboard-rows leaderboard-rest">
                    {for rest.into_iter().map(leaderboard_row)}
                </ol>
            }
        </section>
    }
}

fn leaderboard_row(row: RankedRow) -> Html {
    let RankedRow { badge, entry } = row;
    let trend = entry.trend;
    let logo = match entry.logo.clone() {
        Some(src) => html! { <img class="logo" src={src} alt={entry.name.clone()} /> },
        None => html! { <span class="logo logo-initial">{logo_initial(&entry.name)}</span> },
    };
    html! {
        <li class="leaderboard-row" key={entry.id.clone()}>
            <span class="rank-badge">{badge}</span>
            {logo}
            <span class="name">{entry.name.clone()}</span>
            <span class="points">{format_points(entry.points)}</span>
            <span class={classes!("trend", trend.css_class())} title={trend.label()}>
                {trend.icon()}
            </span>
        </li>
    }
}
