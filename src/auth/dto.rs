use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "not a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_rejects_bad_email() {
        let req = LoginRequest {
            email: "nope".into(),
            password: "12345".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn token_response_serializes_access_token() {
        let json = serde_json::to_string(&TokenResponse {
            access_token: "abc".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"access_token":"abc"}"#);
    }
}
