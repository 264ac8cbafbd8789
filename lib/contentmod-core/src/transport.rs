//! The network seam between the request builder and the response decoder.

use std::future::Future;

use bytes::Bytes;
use http::HeaderMap;
use reqwest::{Body, Request};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::request::InvocationRequest;

/// Errors raised by a [`Transport`].
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum TransportError {
    /// The HTTP client failed (connection, TLS, timeout, body read).
    Reqwest(reqwest::Error),

    /// The cancellation token fired before the response was complete.
    #[display("Request cancelled")]
    #[from(skip)]
    Cancelled,

    /// Any other transport failure.
    #[display("Transport failure: {message}")]
    #[from(skip)]
    Other {
        /// Description of the failure.
        message: String,
    },
}

/// A complete HTTP response: status, headers and the whole body.
#[derive(Clone, derive_more::Debug)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    #[debug("{} bytes", body.len())]
    body: Bytes,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Sends an [`InvocationRequest`] and reads the complete response.
///
/// Implementations must stop and return [`TransportError::Cancelled`] when the token
/// fires, and must not retry.
pub trait Transport: Send + Sync + 'static {
    /// Sends the request.
    fn send(
        &self,
        request: InvocationRequest,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// The default [`Transport`], backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps a configured [`reqwest::Client`] (proxy, timeouts, TLS).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn exchange(&self, request: InvocationRequest) -> Result<RawResponse, TransportError> {
        let (method, url, headers, body) = request.into_parts();

        let mut request = Request::new(method, url);
        *request.headers_mut() = headers;
        *request.body_mut() = body.map(Body::from);

        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, headers, body))
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: InvocationRequest,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, TransportError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.exchange(request) => result,
        }
    }
}
