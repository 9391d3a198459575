//! Profile affordance: picture when known, otherwise a one-letter badge.

use crate::core::session::{Avatar, Session, avatar_for};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfileAvatarProps {
    #[prop_or_default]
    pub session: Option<Session>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProfileAvatar)]
pub(crate) fn profile_avatar(props: &ProfileAvatarProps) -> Html {
    let alt = props
        .session
        .as_ref()
        .map_or("Profile", Session::display_name)
        .to_string();
    match avatar_for(props.session.as_ref()) {
        Avatar::Image(src) => html! {
            <img class={classes!("avatar", props.class.clone())} src={src} alt={alt} />
        },
        Avatar::Initial(letter) => html! {
            <span class={classes!("avatar", "avatar-initial", props.class.clone())} aria-label={alt}>
                {letter}
            </span>
        },
    }
}
