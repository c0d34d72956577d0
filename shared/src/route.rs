use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Screens of the game reachable from the client-side router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Entry route; where a player without a session is sent
    Home,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Settings => "/settings",
        }
    }

    /// Unknown paths fall back to the entry route
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/settings" => Route::Settings,
            _ => Route::Home,
        }
    }
}

/// Where to send the player after the profile changed, if anywhere.
///
/// Called by the profile owner after every replace, and when the settings
/// screen mounts: without a name there is nothing to show, so the player
/// goes back to the entry route.
pub fn redirect_guard(profile: &UserProfile) -> Option<Route> {
    if profile.has_session() {
        None
    } else {
        Some(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/settings"), Route::Settings);
        assert_eq!(Route::from_path("/settings/"), Route::Settings);
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(Route::Settings.path()), Route::Settings);
    }

    #[test]
    fn test_redirect_guard() {
        assert_eq!(redirect_guard(&UserProfile::logged_out()), Some(Route::Home));
        assert_eq!(redirect_guard(&UserProfile::new("Bob", Utc::now())), None);
    }
}
