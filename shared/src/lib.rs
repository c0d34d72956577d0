//! Domain types and rules shared by the Honey Clicker frontend.
//!
//! Nothing in here touches the DOM, so everything is unit tested natively.

pub mod avatar;
pub mod config;
pub mod profile;
pub mod route;
pub mod settings;
pub mod time_ago;
pub mod validation;

pub use avatar::name_to_avatar;
pub use config::{ConfigError, SettingsConfig};
pub use profile::UserProfile;
pub use route::{redirect_guard, Route};
pub use settings::{
    LogoutDialog, Notice, NoticeLevel, PictureDialog, SettingsAction, SettingsEffect,
    SettingsState,
};
pub use time_ago::format_time_ago;
pub use validation::{is_image_url, validate_name, validate_picture_url, NameError, PictureUrlError};
