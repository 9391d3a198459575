//! Cafe listing page, cards and the home preview.

use crate::app::{ApiCtx, Route};
use crate::components::search_box::SearchQuery;
use crate::core::store::{AppStore, select_cafes};
use crate::features::cafes::api::load_cafes;
use crate::features::cafes::state::{Cafe, results_heading};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const MAX_BADGES: usize = 3;
const PREVIEW_SIZE: usize = 3;

/// Fetch the listing whenever `search` changes.
#[hook]
pub(crate) fn use_cafes_loader(search: Option<String>) {
    let api_ctx = use_context::<ApiCtx>();
    use_effect_with_deps(
        move |search: &Option<String>| {
            if let Some(api_ctx) = api_ctx {
                let search = search.clone();
                yew::platform::spawn_local(async move {
                    let dispatch = Dispatch::<AppStore>::new();
                    load_cafes(&api_ctx.client, &dispatch, search.as_deref()).await;
                });
            }
            || ()
        },
        search,
    );
}

#[function_component(CafesPage)]
pub(crate) fn cafes_page() -> Html {
    let search = use_location()
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .and_then(|query| query.search);
    use_cafes_loader(search.clone());
    let cafes = use_selector(select_cafes);
    let loading = *use_selector(|store: &AppStore| store.cafes.loading);
    let error = use_selector(|store: &AppStore| store.cafes.error.clone());

    let body = if let Some(message) = (*error).clone() {
        html! { <p class="error">{message}</p> }
    } else if loading && cafes.is_empty() {
        html! { <p class="muted">{"Loading cafes…"}</p> }
    } else if cafes.is_empty() {
        html! { <p class="muted">{"No cafes found."}</p> }
    } else {
        html! {
            <div class="cafe-grid">
                {for cafes.iter().map(|cafe| html! { <CafeCard key={cafe.id.clone()} cafe={cafe.clone()} /> })}
            </div>
        }
    };

    html! {
        <section class="page cafes-page">
            <h1>{results_heading(search.as_deref(), cafes.len())}</h1>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CafeCardProps {
    pub cafe: Cafe,
}

#[function_component(CafeCard)]
pub(crate) fn cafe_card(props: &CafeCardProps) -> Html {
    let cafe = &props.cafe;
    let (badges, hidden) = cafe.feature_badges(MAX_BADGES);
    html! {
        <article class="card cafe-card">
            if let Some(src) = cafe.cover_image() {
                <img class="cover" src={src.to_string()} alt={cafe.name.clone()} />
            } else {
                <div class="cover cover-placeholder">{"☕"}</div>
            }
            <h3>{cafe.name.clone()}</h3>
            <p class="address">{cafe.address.clone()}</p>
            <p class="phone">{cafe.phone.clone()}</p>
            <div class="badges">
                {for badges.into_iter().map(|tag| html! { <span class="badge">{tag.to_string()}</span> })}
                if hidden > 0 {
                    <span class="badge badge-more">{format!("+{hidden}")}</span>
                }
            </div>
        </article>
    }
}

#[function_component(CafePreview)]
pub(crate) fn cafe_preview() -> Html {
    use_cafes_loader(None);
    let cafes = use_selector(select_cafes);
    html! {
        <section class="card cafe-preview">
            <h2>{"Cafes near you"}</h2>
            <div class="cafe-grid">
                {for cafes.iter().take(PREVIEW_SIZE).map(|cafe| html! { <CafeCard key={cafe.id.clone()} cafe={cafe.clone()} /> })}
            </div>
            <Link<Route> to={Route::Cafes} classes={classes!("see-all")}>{"See all cafes"}</Link<Route>>
        </section>
    }
}
