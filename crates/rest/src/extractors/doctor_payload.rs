//! Doctor payload extractor.
//!
//! Parses a [`DoctorDraft`] from the request body and validates it before the
//! handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use doctr_persistence::error::{ValidationDetail, ValidationError};
use doctr_persistence::types::DoctorDraft;
use doctr_persistence::validation::validate_doctor;

use crate::error::RestError;

/// Axum extractor for a validated doctor payload.
///
/// Unknown members (including `id` and `_links`) are ignored; missing fields
/// are reported as validation errors rather than parse errors.
///
/// # Example
///
/// ```rust,ignore
/// use doctr_rest::extractors::DoctorPayload;
///
/// async fn create_handler(DoctorPayload(draft): DoctorPayload) {
///     println!("Creating {} {}", draft.first_name, draft.last_name);
/// }
/// ```
#[derive(Debug)]
pub struct DoctorPayload(pub DoctorDraft);

/// Error type for doctor payload extraction failures.
#[derive(Debug)]
pub enum DoctorPayloadRejection {
    /// The body could not be read, e.g. it exceeded the size limit.
    Body {
        /// Status reported by the body reader.
        status: axum::http::StatusCode,
        /// Error message.
        message: String,
    },
    /// JSON parsing failed.
    InvalidJson(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
    /// The payload parsed but violated field constraints.
    Invalid(Vec<ValidationDetail>),
}

impl IntoResponse for DoctorPayloadRejection {
    fn into_response(self) -> Response {
        let error = match self {
            DoctorPayloadRejection::Body { status, message } => {
                if status == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                    RestError::PayloadTooLarge { message }
                } else {
                    RestError::BadRequest { message }
                }
            }
            DoctorPayloadRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            DoctorPayloadRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
            DoctorPayloadRejection::Invalid(details) => RestError::Validation { details },
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for DoctorPayload
where
    S: Send + Sync,
{
    type Rejection = DoctorPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(DoctorPayloadRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            DoctorPayloadRejection::Body {
                status: e.status(),
                message: e.body_text(),
            }
        })?;

        let draft: DoctorDraft = serde_json::from_slice(&bytes)
            .map_err(|e| DoctorPayloadRejection::InvalidJson(e.to_string()))?;

        validate_doctor(&draft).map_err(|e| match e {
            ValidationError::InvalidDoctor { details } => DoctorPayloadRejection::Invalid(details),
        })?;

        Ok(DoctorPayload(draft))
    }
}

/// Returns true for `application/json` and `application/*+json` media types.
fn is_json_content_type(content_type: &str) -> bool {
    content_type.parse::<mime::Mime>().is_ok_and(|media| {
        media.type_() == mime::APPLICATION
            && (media.subtype() == mime::JSON || media.suffix() == Some(mime::JSON))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let req = json_request(
            r#"{"firstName":"Srikanth","lastName":"Kakumanu","address":"Lakshmi Prasad Arcade","city":"Tenali","pincode":"522201"}"#,
        );
        let DoctorPayload(draft) = DoctorPayload::from_request(req, &()).await.unwrap();
        assert_eq!(draft.pincode, "522201");
    }

    #[tokio::test]
    async fn test_ignores_client_id() {
        let req = json_request(
            r#"{"id":77,"firstName":"A","lastName":"B","address":"C","city":"D","pincode":"12345"}"#,
        );
        assert!(DoctorPayload::from_request(req, &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_fields_are_validation_errors() {
        let req = json_request(r#"{"firstName":"Srikanth"}"#);
        let err = DoctorPayload::from_request(req, &()).await.unwrap_err();
        match err {
            DoctorPayloadRejection::Invalid(details) => {
                let fields: Vec<_> = details.iter().map(|d| d.field.as_str()).collect();
                assert_eq!(fields, vec!["lastName", "address", "city", "pincode"]);
            }
            other => panic!("expected validation rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let req = json_request("{not json");
        let err = DoctorPayload::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, DoctorPayloadRejection::InvalidJson(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_content_type() {
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();
        let err = DoctorPayload::from_request(req, &()).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_json_media_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/hal+json"));

        assert!(!is_json_content_type("text/x-notjson"));
        assert!(!is_json_content_type("application/jsonp"));
        assert!(!is_json_content_type("text/json"));
        assert!(!is_json_content_type("not a media type"));
    }

    #[tokio::test]
    async fn test_json_lookalike_content_type_rejected() {
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "text/x-notjson")
            .body(Body::from("{}"))
            .unwrap();
        let err = DoctorPayload::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, DoctorPayloadRejection::UnsupportedMediaType(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
