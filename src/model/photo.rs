use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s$.?#].[^\s]*$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "album must be a valid reference id"))]
    pub album: String,
    #[validate(custom(function = object_ref, message = "uploadedBy must be a valid reference id"))]
    pub uploaded_by: String,
    #[validate(regex(path = *URL_PATTERN, message = "url must be a valid http(s) url"))]
    pub url: String,
    #[validate(length(max = 300, message = "caption must be at most 300 characters long"))]
    pub caption: Option<String>,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample() -> Photo {
        Photo {
            id: Uuid::new_v4().to_string(),
            album: Uuid::new_v4().to_string(),
            uploaded_by: Uuid::new_v4().to_string(),
            url: "https://cdn.example.com/photos/1.jpg".to_string(),
            caption: None,
            created_at: 0,
        }
    }

    #[test]
    fn valid_photo_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let mut photo = sample();
        photo.url = "ftp://cdn.example.com/photos/1.jpg".to_string();
        assert!(photo.validate().is_err());
    }

    #[test]
    fn url_with_spaces_is_rejected() {
        let mut photo = sample();
        photo.url = "https://cdn.example.com/a photo.jpg".to_string();
        assert!(photo.validate().is_err());
    }
}
