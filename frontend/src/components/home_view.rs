use std::rc::Rc;

use shared::{validate_name, Notice, Route, SettingsConfig, UserProfile};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_document_title::use_document_title;
use crate::services::date_utils::now_utc;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub user_profile: UserProfile,
    pub config: Rc<SettingsConfig>,
    pub set_user_profile: Callback<UserProfile>,
    pub on_notify: Callback<Notice>,
    pub navigate: Callback<Route>,
}

/// Entry route: start a session, or head to the settings screen
#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let name = use_state(String::new);
    let name_error = use_state(|| Option::<String>::None);
    use_document_title(props.config.app_title.clone());

    let on_name_input = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            name_error.set(None);
        })
    };

    let on_start = {
        let name = name.clone();
        let name_error = name_error.clone();
        let config = props.config.clone();
        let set_user_profile = props.set_user_profile.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = (*name).trim().to_string();
            if let Err(error) = validate_name(&draft, &config) {
                name_error.set(Some(error.to_string()));
                return;
            }

            Logger::info_with_component("home", "starting a new profile");
            set_user_profile.emit(UserProfile::new(draft.clone(), now_utc()));
            on_notify.emit(Notice::success(format!("Welcome, {}!", draft)));
            name.set(String::new());
        })
    };

    let on_settings_click = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Settings))
    };

    html! {
        <div class="home-container">
            <h1 class="home-title">{&props.config.app_title}</h1>
            {if let Some(player) = props.user_profile.name() {
                html! {
                    <>
                        <p class="home-greeting">{format!("Welcome back, {}!", player)}</p>
                        <button type="button" class="btn btn-primary" onclick={on_settings_click}>
                            {"⚙ Settings"}
                        </button>
                    </>
                }
            } else {
                html! {
                    <form class="home-form" onsubmit={on_start}>
                        <div class="form-group">
                            <label for="player-name">{"Your Name"}</label>
                            <input
                                id="player-name"
                                type="text"
                                class={classes!("settings-input", name_error.is_some().then_some("settings-input-invalid"))}
                                value={(*name).clone()}
                                oninput={on_name_input}
                                autofocus=true
                            />
                            {if let Some(error) = (*name_error).clone() {
                                html! { <small class="helper-text helper-text-error">{error}</small> }
                            } else {
                                html! {}
                            }}
                        </div>
                        <button type="submit" class="btn btn-primary">{"Start"}</button>
                    </form>
                }
            }}
        </div>
    }
}
