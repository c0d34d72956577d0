//! Input rules for the settings forms.
//!
//! Error `Display` strings are exactly what the player sees, so the view can
//! render them without any further mapping.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::SettingsConfig;

/// http(s) URL whose path ends in a known image extension, optionally
/// followed by a query string or fragment.
static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://[^\s/?#]+(?:/[^\s?#]*)?\.(?:apng|avif|bmp|gif|ico|jpe?g|png|svg|webp)(?:[?#]\S*)?$",
    )
    .expect("image url pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Can be up to {max} characters long")]
    TooLong { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PictureUrlError {
    #[error("Please provide a valid image URL.")]
    NotAnImage,
    #[error("Please provide a valid image URL.")]
    TooLong { len: usize, max: usize },
}

/// Character count used for every length rule (Unicode scalar values)
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check a draft display name against the configured length bounds
pub fn validate_name(draft: &str, config: &SettingsConfig) -> Result<(), NameError> {
    let len = char_len(draft);
    if len < config.min_name_len {
        Err(NameError::TooShort {
            min: config.min_name_len,
        })
    } else if len > config.max_name_len {
        Err(NameError::TooLong {
            max: config.max_name_len,
        })
    } else {
        Ok(())
    }
}

pub fn is_image_url(url: &str) -> bool {
    IMAGE_URL_RE.is_match(url)
}

/// Check a draft picture link.
///
/// An empty draft is accepted and means "remove the picture".
pub fn validate_picture_url(draft: &str, config: &SettingsConfig) -> Result<(), PictureUrlError> {
    let len = char_len(draft);
    if len > config.max_picture_url_len {
        return Err(PictureUrlError::TooLong {
            len,
            max: config.max_picture_url_len,
        });
    }
    if draft.is_empty() || is_image_url(draft) {
        Ok(())
    } else {
        Err(PictureUrlError::NotAnImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        let config = SettingsConfig::default();
        assert_eq!(
            validate_name("Al", &config),
            Err(NameError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_name("abc", &config),
            Err(NameError::TooShort { min: 4 })
        );
        assert!(validate_name("abcd", &config).is_ok());
        assert!(validate_name("Alexandra1234567", &config).is_ok());
        assert_eq!(
            validate_name("Alexandra12345678", &config),
            Err(NameError::TooLong { max: 16 })
        );
    }

    #[test]
    fn test_name_error_messages() {
        assert_eq!(
            NameError::TooShort { min: 4 }.to_string(),
            "Must be at least 4 characters long"
        );
        assert_eq!(
            NameError::TooLong { max: 16 }.to_string(),
            "Can be up to 16 characters long"
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let config = SettingsConfig::default();
        // four characters, more than four bytes
        assert!(validate_name("Zoë!", &config).is_ok());
        assert!(validate_name("ÄÖÜ", &config).is_err());
    }

    #[test]
    fn test_is_image_url() {
        assert!(is_image_url("http://x.com/a.png"));
        assert!(is_image_url("https://cdn.example.org/img/cat.JPEG"));
        assert!(is_image_url("https://example.org/pic.webp?size=128"));
        assert!(is_image_url("https://example.org/pic.gif#frame"));

        assert!(!is_image_url("http://x.com/a.txt"));
        assert!(!is_image_url("http://x.com/a.png.html"));
        assert!(!is_image_url("ftp://x.com/a.png"));
        assert!(!is_image_url("x.com/a.png"));
        assert!(!is_image_url("http://x.com/my picture.png"));
        assert!(!is_image_url(""));
    }

    #[test]
    fn test_picture_url_rules() {
        let config = SettingsConfig::default();
        assert!(validate_picture_url("http://x.com/a.png", &config).is_ok());
        assert!(validate_picture_url("", &config).is_ok());
        assert_eq!(
            validate_picture_url("http://x.com/a.txt", &config),
            Err(PictureUrlError::NotAnImage)
        );

        let long = format!("http://x.com/{}.png", "a".repeat(250));
        assert!(char_len(&long) > 255);
        assert_eq!(
            validate_picture_url(&long, &config),
            Err(PictureUrlError::TooLong {
                len: char_len(&long),
                max: 255
            })
        );
        assert_eq!(
            PictureUrlError::NotAnImage.to_string(),
            "Please provide a valid image URL."
        );
    }

    #[test]
    fn test_picture_url_at_limit() {
        let config = SettingsConfig::default();
        let prefix = "http://x.com/";
        let url = format!("{}{}.png", prefix, "a".repeat(255 - prefix.len() - 4));
        assert_eq!(char_len(&url), 255);
        assert!(validate_picture_url(&url, &config).is_ok());
    }
}
