//! Navbar search box bound to the `search` query parameter.
//!
//! # Design
//! - All rules live in [`SearchSync`]; this component only feeds it router
//!   events and applies the [`UrlEffect`] it returns.
//! - Both navbars mount this with a different [`BlankPolicy`].

use crate::app::Route;
use crate::core::search::{BlankPolicy, SearchSync, UrlEffect};
use serde::{Deserialize, Serialize};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

/// Query string carried by the listing route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SearchBoxProps {
    pub policy: BlankPolicy,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a submit that navigated away.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

#[function_component(SearchBox)]
pub(crate) fn search_box(props: &SearchBoxProps) -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();
    let param = location
        .as_ref()
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .and_then(|query| query.search);

    let policy = props.policy;
    let sync = {
        let path = path.clone();
        let param = param.clone();
        use_mut_ref(move || SearchSync::from_location(policy, &path, param.as_deref()))
    };
    let value = use_state(|| sync.borrow().value().to_string());

    {
        let sync = sync.clone();
        let value = value.clone();
        use_effect_with_deps(
            move |(path, param)| {
                let next = {
                    let mut sync = sync.borrow_mut();
                    sync.sync_location(path, param.as_deref());
                    sync.value().to_string()
                };
                if *value != next {
                    value.set(next);
                }
                || ()
            },
            (path.clone(), param),
        );
    }

    let oninput = {
        let sync = sync.clone();
        let value = value.clone();
        let navigator = navigator.clone();
        let path = path.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let next = input.value();
            let effect = sync.borrow_mut().input(&path, next.clone());
            value.set(next);
            apply_url_effect(navigator.as_ref(), effect);
        })
    };

    let onsubmit = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let effect = sync.borrow().submit(&path);
            let navigated = matches!(effect, UrlEffect::Navigate(_));
            apply_url_effect(navigator.as_ref(), effect);
            if navigated {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <form class={classes!("search-box", props.class.clone())} role="search" onsubmit={onsubmit}>
            <input
                type="search"
                name="search"
                placeholder="Search cafes"
                aria-label="Search cafes"
                value={AttrValue::from((*value).clone())}
                oninput={oninput}
            />
            <button type="submit" class="ghost" aria-label="Search">{"🔍"}</button>
        </form>
    }
}

fn apply_url_effect(navigator: Option<&Navigator>, effect: UrlEffect) {
    let Some(navigator) = navigator else {
        return;
    };
    let result = match effect {
        UrlEffect::Keep => Ok(()),
        UrlEffect::Replace(None) => {
            navigator.replace(&Route::Cafes);
            Ok(())
        }
        UrlEffect::Replace(Some(search)) => navigator.replace_with_query(
            &Route::Cafes,
            &SearchQuery {
                search: Some(search),
            },
        ),
        UrlEffect::Navigate(None) => {
            navigator.push(&Route::Cafes);
            Ok(())
        }
        UrlEffect::Navigate(Some(search)) => navigator.push_with_query(
            &Route::Cafes,
            &SearchQuery {
                search: Some(search),
            },
        ),
    };
    if let Err(err) = result {
        warn!(error = ?err, "search navigation failed");
    }
}
