use std::fmt::Debug;

use bytes::Bytes;

use crate::decode::ApiError;
use crate::descriptor::ValueKind;
use crate::transport::TransportError;

/// Errors that can occur when invoking an operation.
///
/// Validation variants ([`MissingRequiredParameter`](Self::MissingRequiredParameter),
/// [`MissingBaseUrl`](Self::MissingBaseUrl), [`MissingHostParameter`](Self::MissingHostParameter),
/// [`InvalidParameterValue`](Self::InvalidParameterValue), [`UnexpectedBody`](Self::UnexpectedBody))
/// are produced before any network I/O.
/// Everything else comes out of the transport or the response decoder.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum InvokeError {
    /// A required parameter (or a required body) had no value.
    #[display("Parameter {name} is required and cannot be null (operation {operation})")]
    #[from(skip)]
    MissingRequiredParameter {
        /// The operation id.
        operation: &'static str,
        /// The parameter name as declared by the operation descriptor.
        name: &'static str,
    },

    /// No base URL was configured before the first call.
    #[display("A base URL is required and cannot be empty")]
    #[from(skip)]
    MissingBaseUrl,

    /// A placeholder of the parameterized host has no configured value.
    #[display("Host parameter {name} is required and cannot be null")]
    #[from(skip)]
    MissingHostParameter {
        /// The placeholder name.
        name: String,
    },

    /// The operation id is not part of the operation table.
    #[display("Unknown operation: {id}")]
    #[from(skip)]
    UnknownOperation {
        /// The requested operation id.
        id: String,
    },

    /// A parameter value does not match the kind declared by the descriptor.
    #[display("Parameter {name} of operation {operation} expects {expected} value, got {value}")]
    #[from(skip)]
    InvalidParameterValue {
        /// The operation id.
        operation: &'static str,
        /// The parameter name.
        name: &'static str,
        /// The declared kind.
        expected: ValueKind,
        /// The rejected value, rendered for diagnostics.
        value: String,
    },

    /// A body was supplied that the operation does not accept (or of the wrong kind).
    #[display("Operation {operation} does not accept a {found} body")]
    #[from(skip)]
    UnexpectedBody {
        /// The operation id.
        operation: &'static str,
        /// The kind of body that was supplied.
        found: &'static str,
    },

    /// The resolved URL cannot be parsed.
    InvalidUrl(url::ParseError),

    /// A header parameter name is not a valid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// A header value contains invalid characters.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// The request body could not be serialized to JSON.
    Serialization(serde_json::Error),

    /// The underlying network call failed.
    Transport(TransportError),

    /// The service answered with a status the operation does not register as a success.
    Api(ApiError),

    /// The response body could not be read as the success type nor as the error envelope.
    #[display("Failed to decode response with status {status}: {reason}")]
    #[from(skip)]
    Decode {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: Bytes,
        /// Why decoding failed.
        reason: String,
    },

    /// The caller cancelled the call before it completed.
    #[display("Operation cancelled")]
    #[from(skip)]
    Cancelled,

    /// The blocking runtime could not be created.
    Runtime(std::io::Error),
}

impl InvokeError {
    /// Returns the HTTP status code carried by API and decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the API error envelope, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// True when the call ended because of a cancellation request.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::Transport(TransportError::Cancelled)
        )
    }

    /// True for errors detected before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredParameter { .. }
                | Self::MissingBaseUrl
                | Self::MissingHostParameter { .. }
                | Self::UnknownOperation { .. }
                | Self::InvalidParameterValue { .. }
                | Self::UnexpectedBody { .. }
        )
    }
}
