use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current player.
///
/// A profile is never edited in place: the settings view builds a modified
/// copy and hands it to the owning container, which replaces its value
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name. `None` means there is no active session.
    pub name: Option<String>,
    /// Avatar image URL. `None` means the avatar shows generated initials.
    pub profile_picture: Option<String>,
    /// When the profile was created (RFC 3339 on the wire)
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Start a new session for `name`
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.into()),
            profile_picture: None,
            created_at,
        }
    }

    /// The logged-out profile: no name, no picture, created at the epoch
    pub fn logged_out() -> Self {
        Self {
            name: None,
            profile_picture: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn has_session(&self) -> bool {
        self.name.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self.clone()
        }
    }

    pub fn with_profile_picture(&self, profile_picture: Option<String>) -> Self {
        Self {
            profile_picture,
            ..self.clone()
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::logged_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_logged_out_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile, UserProfile::logged_out());
        assert!(!profile.has_session());
        assert_eq!(profile.profile_picture, None);
        assert_eq!(profile.created_at.timestamp(), 0);
    }

    #[test]
    fn test_copies_keep_other_fields() {
        let profile = UserProfile::new("Bob", created())
            .with_profile_picture(Some("http://x.com/a.png".to_string()));

        let renamed = profile.with_name("Robert");
        assert_eq!(renamed.name(), Some("Robert"));
        assert_eq!(renamed.profile_picture.as_deref(), Some("http://x.com/a.png"));
        assert_eq!(renamed.created_at, created());

        let cleared = renamed.with_profile_picture(None);
        assert_eq!(cleared.name(), Some("Robert"));
        assert_eq!(cleared.profile_picture, None);

        // the original value is untouched
        assert_eq!(profile.name(), Some("Bob"));
    }

    #[test]
    fn test_serde_field_names() {
        let profile = UserProfile::new("Bob", created());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["name"], "Bob");
        assert!(json["profilePicture"].is_null());
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");

        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
