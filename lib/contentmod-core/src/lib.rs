//! # contentmod-core
//!
//! A typed REST invocation core driven by declarative operation descriptors.
//!
//! An API is described once as static data: an [`ApiDefinition`] holding a
//! [`ParameterizedHost`] and a list of `const` [`OperationDescriptor`]s. A [`Client`]
//! turns a descriptor plus call arguments into an HTTP request, sends it through a
//! [`Transport`], and decodes the response into the caller's type or an [`InvokeError`].
//!
//! ```text
//! OperationCall ──► RequestBuilder ──► Transport::send ──► decode ──► Result<R, InvokeError>
//!                      │                                      │
//!              ParameterizedHost                     ResponseSpec / ErrorEnvelope
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::LazyLock;
//!
//! use contentmod_core::{
//!     ApiDefinition, Client, ClientConfig, HttpVerb, OperationDescriptor, OperationTable,
//!     ParameterSpec, ParameterizedHost, ResponseSpec, ValueKind,
//! };
//!
//! const GET_ALL_TERMS: OperationDescriptor = OperationDescriptor {
//!     id: "ListManagementTerm_GetAllTerms",
//!     method: HttpVerb::Get,
//!     path: "contentmoderator/lists/v1.0/termlists/{listId}/terms",
//!     parameters: &[
//!         ParameterSpec::path("listId"),
//!         ParameterSpec::query("language", ValueKind::String).required(),
//!     ],
//!     responses: &[ResponseSpec::json(200, "Terms")],
//!     ..OperationDescriptor::DEFAULT
//! };
//!
//! static API: ApiDefinition = ApiDefinition {
//!     name: "terms",
//!     host: ParameterizedHost::new("{Endpoint}", "Endpoint"),
//!     operations: &[&GET_ALL_TERMS],
//! };
//!
//! static TABLE: LazyLock<OperationTable> =
//!     LazyLock::new(|| OperationTable::new(&API).expect("a valid operation table"));
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .with_base_url("https://westus.api.cognitive.microsoft.com")
//!     .build();
//! let client = Client::new(&TABLE, config);
//!
//! let terms: serde_json::Value = client
//!     .call(&GET_ALL_TERMS)
//!     .arg("listId", "123")
//!     .arg("language", "eng")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Success and errors
//!
//! Only the statuses registered by the descriptor are successes. Any other status,
//! including an unregistered `2xx`, is read through the operation's [`ErrorEnvelope`]
//! into [`InvokeError::Api`]. Missing or ill-typed arguments fail before any I/O.
//!
//! ## Cancellation and long-running operations
//!
//! Attach a [`CancellationToken`] with [`OperationCall::with_cancellation`]; a cancelled
//! call resolves to [`InvokeError::Cancelled`]. [`OperationCall::poll_until`] re-sends a
//! call until its result is complete, spaced by
//! [`ClientConfig::long_running_operation_retry_timeout`].
//!
//! ## Feature Flags
//!
//! - `mock` - exposes `mock::MockTransport`, a scripted in-memory transport for tests.

mod client;
mod config;
mod decode;
mod descriptor;
mod error;
pub mod host;
mod macros;
mod request;
mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use bytes::Bytes;
pub use tokio_util::sync::CancellationToken;

pub use self::client::{BlockingRuntime, Client, OperationCall};
pub use self::config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_RETRY_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use self::decode::{ApiError, ErrorDetails, ErrorEnvelope, decode};
pub use self::descriptor::{
    ApiDefinition, BodyKind, BodySpec, DescriptorError, HttpVerb, Location, OperationDescriptor,
    OperationTable, ParameterSpec, ResponseKind, ResponseSpec, ValueKind,
};
pub use self::error::InvokeError;
pub use self::host::{ParameterizedHost, ResolvedHost};
pub use self::request::{
    CLIENT_REQUEST_ID_HEADER, CallArgs, InvocationRequest, Multipart, ParamValue, RequestBody,
    RequestBuilder,
};
pub use self::transport::{RawResponse, ReqwestTransport, Transport, TransportError};

/// Result of an operation invocation.
pub type InvocationResult<T> = Result<T, InvokeError>;
