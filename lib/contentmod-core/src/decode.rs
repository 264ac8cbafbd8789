//! Response decoding: registered statuses are read as the success type, anything else
//! through the operation's error envelope.

use std::fmt;

use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::descriptor::{OperationDescriptor, ResponseKind};
use crate::error::InvokeError;
use crate::transport::RawResponse;

/// Maximum number of body characters kept in decode diagnostics.
const BODY_MAX_LENGTH: usize = 1024;

/// Code and message extracted from an error body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorDetails {
    /// Service error code.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
    /// The whole error body, `null` when empty.
    pub body: Value,
}

/// How error bodies of an operation are read.
#[derive(Debug, Clone, Copy)]
pub struct ErrorEnvelope {
    /// Envelope name, used in diagnostics.
    pub name: &'static str,
    /// Parses a raw error body.
    pub parse: fn(&[u8]) -> Result<ErrorDetails, serde_json::Error>,
}

impl ErrorEnvelope {
    /// The moderation service envelope: `{"Code": .., "Message": ..}`, possibly nested
    /// under `"Error"`. Keys are also accepted in lower case.
    pub const API_ERROR: Self = Self {
        name: "APIError",
        parse: parse_api_error,
    };
}

#[derive(Debug, Default, Deserialize)]
struct Details {
    #[serde(default, rename = "Code", alias = "code")]
    code: Option<String>,
    #[serde(default, rename = "Message", alias = "message")]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default, rename = "Error", alias = "error")]
    error: Option<Details>,
    #[serde(flatten)]
    details: Details,
}

fn parse_api_error(body: &[u8]) -> Result<ErrorDetails, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ErrorDetails::default());
    }

    let body = serde_json::from_slice::<Value>(body)?;
    let Envelope { error, details } = Envelope::deserialize(&body)?;
    let nested = error.unwrap_or_default();

    Ok(ErrorDetails {
        code: nested.code.or(details.code),
        message: nested.message.or(details.message),
        body,
    })
}

/// A response whose status is not registered as a success by the operation.
#[derive(Debug, Clone, PartialEq, derive_more::Error)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// Service error code.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
    /// The whole error body, `null` when empty.
    pub body: Value,
}

impl ApiError {
    fn new(status: u16, details: ErrorDetails) -> Self {
        let ErrorDetails {
            code,
            message,
            body,
        } = details;
        Self {
            status,
            code,
            message,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation returned an invalid status code {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Decodes a response for an operation.
///
/// # Errors
///
/// - [`InvokeError::Api`] for any status the operation does not register,
/// - [`InvokeError::Decode`] when the body cannot be read as `R` (or as the error envelope).
pub fn decode<R>(raw: &RawResponse, descriptor: &OperationDescriptor) -> Result<R, InvokeError>
where
    R: DeserializeOwned,
{
    let status = raw.status();

    let Some(spec) = descriptor.response(status) else {
        debug!(operation = descriptor.id, status, envelope = descriptor.error.name, "error response");
        return match (descriptor.error.parse)(raw.body()) {
            Ok(details) => Err(InvokeError::Api(ApiError::new(status, details))),
            Err(err) => Err(decode_error(status, raw.body(), &err)),
        };
    };

    debug!(operation = descriptor.id, status, schema = spec.schema, "decoding response");
    match spec.kind {
        ResponseKind::Empty => from_null(status, raw.body()),
        ResponseKind::Json if raw.body().iter().all(u8::is_ascii_whitespace) => {
            from_null(status, raw.body())
        }
        ResponseKind::Json => {
            let deserializer = &mut serde_json::Deserializer::from_slice(raw.body());
            serde_path_to_error::deserialize(deserializer)
                .map_err(|err| decode_error(status, raw.body(), &err))
        }
    }
}

fn from_null<R>(status: u16, body: &Bytes) -> Result<R, InvokeError>
where
    R: DeserializeOwned,
{
    R::deserialize(Value::Null).map_err(|err| decode_error(status, body, &err))
}

fn decode_error(status: u16, body: &Bytes, err: &dyn fmt::Display) -> InvokeError {
    let text = String::from_utf8_lossy(body);
    let excerpt = if text.chars().count() > BODY_MAX_LENGTH {
        let truncated: String = text.chars().take(BODY_MAX_LENGTH).collect();
        format!("{truncated}... (truncated)")
    } else {
        text.into_owned()
    };
    debug!(status, body = %excerpt, "failed to decode response");

    InvokeError::Decode {
        status,
        body: body.clone(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderMap;
    use serde::Deserialize;

    use super::*;
    use crate::descriptor::{HttpVerb, ResponseSpec};

    const GET_DETAILS: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTermLists_GetDetails",
        method: HttpVerb::Get,
        path: "contentmoderator/lists/v1.0/termlists/{listId}",
        responses: &[ResponseSpec::json(200, "TermList")],
        ..OperationDescriptor::DEFAULT
    };

    const DELETE_TERM: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTerm_DeleteTerm",
        method: HttpVerb::Delete,
        path: "contentmoderator/lists/v1.0/termlists/{listId}/terms/{term}",
        responses: &[ResponseSpec::empty(204)],
        ..OperationDescriptor::DEFAULT
    };

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct TermList {
        id: Option<i32>,
        name: Option<String>,
    }

    fn response(status: u16, body: &'static str) -> RawResponse {
        RawResponse::new(status, HeaderMap::new(), body)
    }

    #[test]
    fn test_decode_registered_json() {
        let list: TermList = decode(&response(200, r#"{"Id": 12, "Name": "terms"}"#), &GET_DETAILS)
            .expect("decodes");

        assert_eq!(
            list,
            TermList {
                id: Some(12),
                name: Some("terms".to_string())
            }
        );
    }

    #[test]
    fn test_decode_empty_json_body_reads_null() {
        let list: Option<TermList> = decode(&response(200, ""), &GET_DETAILS).expect("decodes");
        assert_eq!(list, None);
    }

    #[test]
    fn test_decode_empty_response() {
        let result: Result<(), _> = decode(&response(204, ""), &DELETE_TERM);
        assert!(result.is_ok());

        let result: Result<(), _> = decode(&response(204, "ignored"), &DELETE_TERM);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unregistered_success_status_is_an_error() {
        let error = decode::<()>(&response(200, ""), &DELETE_TERM).expect_err("200 not registered");

        let api = error.api_error().expect("api error");
        assert_eq!(api.status, 200);
        assert_eq!(api.body, Value::Null);
    }

    #[test]
    fn test_api_error_flat_envelope() {
        let error = decode::<TermList>(
            &response(404, r#"{"Message": "list not found"}"#),
            &GET_DETAILS,
        )
        .expect_err("404");

        insta::assert_snapshot!(error, @"Operation returned an invalid status code 404: list not found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_api_error_nested_envelope() {
        let error = decode::<TermList>(
            &response(
                401,
                r#"{"error": {"code": "Unauthorized", "message": "Access denied"}}"#,
            ),
            &GET_DETAILS,
        )
        .expect_err("401");

        let api = error.api_error().expect("api error");
        assert_eq!(api.code.as_deref(), Some("Unauthorized"));
        assert_eq!(api.message.as_deref(), Some("Access denied"));
        insta::assert_snapshot!(error, @"Operation returned an invalid status code 401 [Unauthorized]: Access denied");
    }

    #[test]
    fn test_malformed_error_body_is_a_decode_error() {
        let error = decode::<TermList>(&response(500, "<html>oops</html>"), &GET_DETAILS)
            .expect_err("500");

        let InvokeError::Decode { status, body, .. } = error else {
            panic!("expected a decode error, got {error:?}");
        };
        assert_eq!(status, 500);
        assert_eq!(body.as_ref(), b"<html>oops</html>");
    }

    #[test]
    fn test_success_body_type_mismatch_reports_path() {
        let error = decode::<TermList>(&response(200, r#"{"Id": "twelve"}"#), &GET_DETAILS)
            .expect_err("Id is not an integer");

        let InvokeError::Decode { reason, .. } = error else {
            panic!("expected a decode error, got {error:?}");
        };
        assert!(reason.starts_with("Id:"), "{reason}");
    }
}
