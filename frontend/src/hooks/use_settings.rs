use std::rc::Rc;

use shared::{Notice, SettingsAction, SettingsConfig, SettingsEffect, SettingsState, UserProfile};
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseSettingsResult {
    pub state: SettingsState,
    pub dispatch: Callback<SettingsAction>,
}

/// Local form state of the settings screen.
///
/// `dispatch` runs an action through [`SettingsState::apply`] against the
/// profile as rendered, then hands the resulting effects to the container's
/// callbacks in order.
#[hook]
pub fn use_settings(
    profile: &UserProfile,
    config: Rc<SettingsConfig>,
    set_user_profile: Callback<UserProfile>,
    on_notify: Callback<Notice>,
) -> UseSettingsResult {
    let state = use_state(SettingsState::new);

    let dispatch = {
        let state = state.clone();
        let profile = profile.clone();

        Callback::from(move |action: SettingsAction| {
            let mut next = (*state).clone();
            let effects = next.apply(action, &profile, &config);
            state.set(next);

            for effect in effects {
                match effect {
                    SettingsEffect::ReplaceProfile(profile) => {
                        Logger::debug_with_component("settings", "replacing profile");
                        set_user_profile.emit(profile);
                    }
                    SettingsEffect::Notify(notice) => on_notify.emit(notice),
                }
            }
        })
    };

    UseSettingsResult {
        state: (*state).clone(),
        dispatch,
    }
}
