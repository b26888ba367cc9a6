use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::users::repo::User;

/// Request body for registration. The password is write-only; it only ever
/// leaves this process as an argon2 hash.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    #[validate(email(message = "not a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Public part of a user returned to clients.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_carries_no_password_field() {
        let user = User {
            id: 7,
            name: Some("Tester".into()),
            email: "another@client.com".into(),
            password_hash: "$argon2id$v=19$hash".into(),
        };
        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Tester");
        assert_eq!(json["email"], "another@client.com");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn create_user_request_requires_valid_email() {
        let req = CreateUserRequest {
            name: None,
            email: "another@client".into(),
            password: "12345".into(),
        };
        assert!(req.validate().is_err());

        let req = CreateUserRequest {
            name: None,
            email: "another@client.com".into(),
            password: "12345".into(),
        };
        assert!(req.validate().is_ok());
    }
}
