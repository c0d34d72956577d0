//! # Settings State Module
//!
//! Local state of the settings screen and the transitions between its states.
//!
//! ## Responsibilities:
//! - Name editor draft and its inline validation error
//! - Picture dialog open/closed state, link draft and inline error
//! - Logout confirmation dialog state
//!
//! ## Purpose:
//! The view owns none of the profile. Every handler goes through
//! [`SettingsState::apply`], which mutates only local form state and returns
//! the side effects (profile replacement, toasts) for the caller to carry
//! out. That keeps the dialogs testable without rendering anything.

use crate::config::SettingsConfig;
use crate::profile::UserProfile;
use crate::validation::{self, NameError, PictureUrlError};

pub const NAME_UNCHANGED_MESSAGE: &str = "The new name cannot be the same as the previous one";
pub const NAME_CHANGED_MESSAGE: &str = "Changed name successful";
pub const PICTURE_CHANGED_MESSAGE: &str = "Changed image successful";
pub const LOGGED_OUT_MESSAGE: &str = "Successfully logged out";

/// Change-picture dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PictureDialog {
    #[default]
    Closed,
    Open,
}

/// Logout confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutDialog {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// User events the settings screen reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    EditName(String),
    SaveName,
    OpenPictureDialog,
    EditPictureLink(String),
    DeletePicture,
    ConfirmPicture,
    /// Cancel button or backdrop click
    CancelPictureDialog,
    OpenLogoutDialog,
    ConfirmLogout,
    CancelLogoutDialog,
    /// The avatar image could not be loaded
    PictureLoadFailed,
}

/// Work the owner of the profile has to carry out after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEffect {
    /// Replace the whole profile with this value
    ReplaceProfile(UserProfile),
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub name_draft: String,
    pub name_error: Option<NameError>,
    pub picture_dialog: PictureDialog,
    pub picture_draft: String,
    pub picture_error: Option<PictureUrlError>,
    pub logout_dialog: LogoutDialog,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save is only offered while there is a pending edit
    pub fn can_save_name(&self) -> bool {
        !self.name_draft.is_empty()
    }

    pub fn picture_draft_len(&self) -> usize {
        validation::char_len(&self.picture_draft)
    }

    pub fn picture_draft_over_limit(&self, config: &SettingsConfig) -> bool {
        self.picture_draft_len() > config.max_picture_url_len
    }

    /// Helper line under the link field: the error if any, else "len/max"
    pub fn picture_helper_text(&self, config: &SettingsConfig) -> String {
        match &self.picture_error {
            Some(error) => error.to_string(),
            None => format!("{}/{}", self.picture_draft_len(), config.max_picture_url_len),
        }
    }

    /// Run one user event to completion.
    ///
    /// `profile` is the value currently owned by the container. Returned
    /// effects must be applied in order.
    pub fn apply(
        &mut self,
        action: SettingsAction,
        profile: &UserProfile,
        config: &SettingsConfig,
    ) -> Vec<SettingsEffect> {
        log::debug!("settings action: {:?}", action);

        match action {
            SettingsAction::EditName(draft) => {
                self.name_draft = draft;
                self.name_error = None;
                Vec::new()
            }
            SettingsAction::SaveName => self.save_name(profile, config),
            SettingsAction::OpenPictureDialog => {
                self.picture_dialog = PictureDialog::Open;
                Vec::new()
            }
            SettingsAction::EditPictureLink(draft) => {
                if self.picture_dialog == PictureDialog::Open {
                    self.picture_draft = draft;
                    self.picture_error = None;
                }
                Vec::new()
            }
            SettingsAction::DeletePicture => {
                if self.picture_dialog != PictureDialog::Open {
                    return Vec::new();
                }
                self.picture_dialog = PictureDialog::Closed;
                self.picture_draft.clear();
                self.picture_error = None;
                vec![SettingsEffect::ReplaceProfile(
                    profile.with_profile_picture(None),
                )]
            }
            SettingsAction::ConfirmPicture => self.confirm_picture(profile, config),
            SettingsAction::CancelPictureDialog => {
                // draft and error survive; they show up again on reopen
                self.picture_dialog = PictureDialog::Closed;
                Vec::new()
            }
            SettingsAction::OpenLogoutDialog => {
                self.logout_dialog = LogoutDialog::Open;
                Vec::new()
            }
            SettingsAction::ConfirmLogout => {
                if self.logout_dialog != LogoutDialog::Open {
                    return Vec::new();
                }
                self.logout_dialog = LogoutDialog::Closed;
                vec![
                    SettingsEffect::ReplaceProfile(UserProfile::logged_out()),
                    SettingsEffect::Notify(Notice::success(LOGGED_OUT_MESSAGE)),
                ]
            }
            SettingsAction::CancelLogoutDialog => {
                self.logout_dialog = LogoutDialog::Closed;
                Vec::new()
            }
            SettingsAction::PictureLoadFailed => {
                if profile.profile_picture.is_none() {
                    return Vec::new();
                }
                log::warn!("profile picture failed to load, falling back to initials");
                vec![SettingsEffect::ReplaceProfile(
                    profile.with_profile_picture(None),
                )]
            }
        }
    }

    fn save_name(&mut self, profile: &UserProfile, config: &SettingsConfig) -> Vec<SettingsEffect> {
        if !self.can_save_name() {
            return Vec::new();
        }

        if let Err(error) = validation::validate_name(&self.name_draft, config) {
            log::debug!("name rejected: {}", error);
            self.name_error = Some(error);
            return Vec::new();
        }

        if profile.name() == Some(self.name_draft.as_str()) {
            return vec![SettingsEffect::Notify(Notice::error(NAME_UNCHANGED_MESSAGE))];
        }

        let name = std::mem::take(&mut self.name_draft);
        vec![
            SettingsEffect::ReplaceProfile(profile.with_name(name)),
            SettingsEffect::Notify(Notice::success(NAME_CHANGED_MESSAGE)),
        ]
    }

    fn confirm_picture(
        &mut self,
        profile: &UserProfile,
        config: &SettingsConfig,
    ) -> Vec<SettingsEffect> {
        if self.picture_dialog != PictureDialog::Open {
            return Vec::new();
        }

        if let Err(error) = validation::validate_picture_url(&self.picture_draft, config) {
            log::debug!("picture link rejected: {:?}", error);
            self.picture_error = Some(error);
            return Vec::new();
        }

        self.picture_dialog = PictureDialog::Closed;
        let link = std::mem::take(&mut self.picture_draft);
        let picture = if link.is_empty() { None } else { Some(link) };
        vec![
            SettingsEffect::ReplaceProfile(profile.with_profile_picture(picture)),
            SettingsEffect::Notify(Notice::success(PICTURE_CHANGED_MESSAGE)),
        ]
    }
}
