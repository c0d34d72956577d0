use chrono::{DateTime, Utc};
use shared::{format_time_ago, name_to_avatar, UserProfile};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::format_created_at;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub user_profile: UserProfile,
    pub now: DateTime<Utc>,
    pub on_edit_picture: Callback<()>,
    pub on_picture_error: Callback<()>,
}

/// Avatar with edit badge, name and account age
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let profile = &props.user_profile;

    let on_edit_click = {
        let on_edit_picture = props.on_edit_picture.clone();
        Callback::from(move |_: MouseEvent| {
            on_edit_picture.emit(());
        })
    };

    let on_image_error = {
        let on_picture_error = props.on_picture_error.clone();
        Callback::from(move |_: Event| {
            on_picture_error.emit(());
        })
    };

    let avatar = match &profile.profile_picture {
        Some(src) => html! {
            <img class="avatar avatar-image" src={src.clone()} alt="Profile picture" onerror={on_image_error} />
        },
        None => html! {
            <div class="avatar avatar-initials">{name_to_avatar(profile.name())}</div>
        },
    };

    html! {
        <div class="profile-card">
            <div class="avatar-badge-wrapper" onclick={on_edit_click}>
                {avatar}
                <button type="button" class="avatar-edit-badge" aria-label="Change profile picture">
                    {"✎"}
                </button>
            </div>
            <div class="profile-name">{profile.name().unwrap_or_default().to_string()}</div>
            <div class="profile-age">
                <span class="profile-age-info" title={format_created_at(profile.created_at)}>{"ⓘ"}</span>
                <span>{format!(" Registered since {}", format_time_ago(profile.created_at, props.now))}</span>
            </div>
        </div>
    }
}
