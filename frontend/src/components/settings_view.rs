use std::rc::Rc;

use shared::{redirect_guard, LogoutDialog, Notice, PictureDialog, Route, SettingsAction, SettingsConfig, UserProfile};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::back_button::BackButton;
use super::logout_dialog::LogoutDialog as LogoutDialogModal;
use super::picture_dialog::PictureDialog as PictureDialogModal;
use super::profile_card::ProfileCard;
use crate::hooks::use_document_title::use_document_title;
use crate::hooks::use_settings::use_settings;
use crate::services::date_utils::now_utc;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SettingsViewProps {
    pub user_profile: UserProfile,
    pub config: Rc<SettingsConfig>,
    pub set_user_profile: Callback<UserProfile>,
    pub on_notify: Callback<Notice>,
    pub navigate: Callback<Route>,
}

#[function_component(SettingsView)]
pub fn settings_view(props: &SettingsViewProps) -> Html {
    let settings = use_settings(
        &props.user_profile,
        props.config.clone(),
        props.set_user_profile.clone(),
        props.on_notify.clone(),
    );
    use_document_title(props.config.settings_title(props.user_profile.name()));

    // Nothing to show without a session; leave for the entry route on mount
    use_effect_with((), {
        let user_profile = props.user_profile.clone();
        let navigate = props.navigate.clone();
        move |_| {
            if let Some(route) = redirect_guard(&user_profile) {
                Logger::info_with_component("settings", "no active profile, redirecting");
                navigate.emit(route);
            }
            || ()
        }
    });

    let send = |action: SettingsAction| {
        let dispatch = settings.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(action.clone()))
    };

    let on_name_input = {
        let dispatch = settings.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(SettingsAction::EditName(input.value()));
        })
    };

    let on_save_click = {
        let dispatch = settings.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(SettingsAction::SaveName))
    };

    let on_logout_click = {
        let dispatch = settings.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(SettingsAction::OpenLogoutDialog))
    };

    let on_link_input = {
        let dispatch = settings.dispatch.clone();
        Callback::from(move |link: String| dispatch.emit(SettingsAction::EditPictureLink(link)))
    };

    if !props.user_profile.has_session() {
        return html! {};
    }

    let state = &settings.state;
    let name_error = state.name_error.as_ref().map(ToString::to_string);
    let picture_has_error =
        state.picture_error.is_some() || state.picture_draft_over_limit(&props.config);

    html! {
        <>
            <BackButton navigate={props.navigate.clone()} />
            <div class="settings-container">
                <ProfileCard
                    user_profile={props.user_profile.clone()}
                    now={now_utc()}
                    on_edit_picture={send(SettingsAction::OpenPictureDialog)}
                    on_picture_error={send(SettingsAction::PictureLoadFailed)}
                />

                <div class="form-group">
                    <label for="change-name">{"Change Name"}</label>
                    <input
                        id="change-name"
                        type="text"
                        class={classes!("settings-input", name_error.is_some().then_some("settings-input-invalid"))}
                        value={state.name_draft.clone()}
                        oninput={on_name_input}
                    />
                    {if let Some(error) = name_error {
                        html! { <small class="helper-text helper-text-error">{error}</small> }
                    } else {
                        html! {}
                    }}
                </div>

                if state.can_save_name() {
                    <button type="button" class="btn btn-primary save-button" onclick={on_save_click}>
                        {"Save"}
                    </button>
                }

                <button type="button" class="btn btn-danger logout-button" onclick={on_logout_click}>
                    {"⎋ logout"}
                </button>
            </div>

            <PictureDialogModal
                is_open={state.picture_dialog == PictureDialog::Open}
                link={state.picture_draft.clone()}
                helper_text={state.picture_helper_text(&props.config)}
                has_error={picture_has_error}
                on_link_input={on_link_input}
                on_delete={send(SettingsAction::DeletePicture)}
                on_cancel={send(SettingsAction::CancelPictureDialog)}
                on_confirm={send(SettingsAction::ConfirmPicture)}
            />

            <LogoutDialogModal
                is_open={state.logout_dialog == LogoutDialog::Open}
                on_confirm={send(SettingsAction::ConfirmLogout)}
                on_cancel={send(SettingsAction::CancelLogoutDialog)}
            />
        </>
    }
}
