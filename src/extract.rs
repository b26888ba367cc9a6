use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{ApiError, FieldError};

/// JSON extractor that also runs the payload's declared validation rules.
/// Any failure, whether malformed JSON or a rule violation, becomes a 422
/// listing the offending fields.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(vec![FieldError {
                    field: "body".into(),
                    message: rejection.body_text(),
                }])
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};

    #[derive(Debug, serde::Deserialize, Validate)]
    struct SignupProbe {
        #[validate(email(message = "not a valid e-mail address"))]
        email: String,
        #[allow(dead_code)]
        password: String,
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let req = json_request(r#"{"email":"a@b.co","password":"12345"}"#);
        let ValidatedJson(probe) = ValidatedJson::<SignupProbe>::from_request(req, &())
            .await
            .expect("valid payload");
        assert_eq!(probe.email, "a@b.co");
    }

    #[tokio::test]
    async fn missing_required_field_is_a_validation_error() {
        let req = json_request(r#"{"email":"a@b.co"}"#);
        let err = ValidatedJson::<SignupProbe>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn rule_violation_names_the_field() {
        let req = json_request(r#"{"email":"nope","password":"12345"}"#);
        let err = ValidatedJson::<SignupProbe>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
