//! A scripted in-memory [`Transport`] for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderValue};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::request::InvocationRequest;
use crate::transport::{RawResponse, Transport, TransportError};

#[derive(Debug)]
enum Scripted {
    Respond(RawResponse),
    Fail(String),
    Hang,
}

#[derive(Debug, Default)]
struct State {
    script: VecDeque<Scripted>,
    requests: Vec<InvocationRequest>,
}

/// Replays scripted responses in order and records every request it receives.
///
/// Clones share the same script and records.
///
/// ```rust
/// use contentmod_core::mock::MockTransport;
///
/// let transport = MockTransport::new()
///     .respond(201, "{}")
///     .respond(404, r#"{"Message": "list not found"}"#)
///     .hang();
/// assert_eq!(transport.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
    in_flight: Arc<Notify>,
    cancel_observed: Arc<AtomicBool>,
}

impl MockTransport {
    /// Creates a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    #[must_use]
    pub fn respond(self, status: u16, body: impl Into<Bytes>) -> Self {
        let response = RawResponse::new(status, HeaderMap::new(), body);
        self.push(Scripted::Respond(response))
    }

    /// Queues a JSON response, with its `content-type`.
    #[must_use]
    pub fn respond_json(self, status: u16, body: &serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        let response = RawResponse::new(status, headers, body.to_string());
        self.push(Scripted::Respond(response))
    }

    /// Queues a transport failure.
    #[must_use]
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Scripted::Fail(message.into()))
    }

    /// Queues a request that never answers: it waits for cancellation.
    #[must_use]
    pub fn hang(self) -> Self {
        self.push(Scripted::Hang)
    }

    /// The requests received so far.
    pub fn requests(&self) -> Vec<InvocationRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Waits until a hanging request is in flight.
    pub async fn wait_in_flight(&self) {
        self.in_flight.notified().await;
    }

    /// True once a hanging request has seen its cancellation.
    pub fn cancel_observed(&self) -> bool {
        self.cancel_observed.load(Ordering::SeqCst)
    }

    fn push(self, scripted: Scripted) -> Self {
        self.lock().script.push_back(scripted);
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        request: InvocationRequest,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, TransportError> {
        let scripted = {
            let mut state = self.lock();
            state.requests.push(request);
            state.script.pop_front()
        };

        match scripted {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(TransportError::Other { message }),
            Some(Scripted::Hang) => {
                self.in_flight.notify_one();
                cancel.cancelled().await;
                self.cancel_observed.store(true, Ordering::SeqCst);
                Err(TransportError::Cancelled)
            }
            None => Err(TransportError::Other {
                message: "no scripted response left".to_string(),
            }),
        }
    }
}
