use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::photos::repo::Photo;

/// Request body for creating or replacing a photo. The owner is never taken
/// from the payload; handlers bind it to the authenticated user.
#[derive(Debug, Deserialize, Validate)]
pub struct PhotoPayload {
    pub title: Option<String>,
    #[validate(url(message = "not a valid URL"))]
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title,
            url: photo.url,
            description: photo.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_a_valid_url() {
        let payload = PhotoPayload {
            title: Some("Test 1".into()),
            url: "goldhill.png".into(),
            description: None,
        };
        assert!(payload.validate().is_err());

        let payload = PhotoPayload {
            title: Some("Test 1".into()),
            url: "https://homepages.cae.wisc.edu/~ece533/images/goldhill.png".into(),
            description: Some("Lorem Ipsum".into()),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn response_echoes_fields_without_owner() {
        let photo = Photo {
            id: 3,
            title: Some("Test 1".into()),
            url: "https://example.com/goldhill.png".into(),
            description: Some("Lorem Ipsum".into()),
            user_id: 9,
        };
        let json = serde_json::to_value(PhotoResponse::from(photo)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Test 1");
        assert_eq!(json["url"], "https://example.com/goldhill.png");
        assert_eq!(json["description"], "Lorem Ipsum");
        assert!(json.get("user_id").is_none());
    }
}
