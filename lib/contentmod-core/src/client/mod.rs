//! The client facade: one shared [`Client`] per service, one [`OperationCall`] per invocation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ClientConfig;
use crate::decode::decode;
use crate::descriptor::{OperationDescriptor, OperationTable};
use crate::error::InvokeError;
use crate::request::{CallArgs, RequestBuilder};
use crate::transport::{ReqwestTransport, Transport, TransportError};

mod blocking;
pub use self::blocking::BlockingRuntime;

mod call;
pub use self::call::OperationCall;

/// A client for every operation of an [`OperationTable`].
///
/// Cloning is cheap: the configuration, the table and the transport are shared.
/// The configuration cannot change once the client is built.
///
/// # Example
///
/// ```rust,no_run
/// use contentmod_core::{CallArgs, Client, ClientConfig, OperationTable};
/// # fn table() -> &'static OperationTable { unimplemented!() }
///
/// # async fn example() -> Result<(), contentmod_core::InvokeError> {
/// let config = ClientConfig::builder()
///     .with_base_url("https://westus.api.cognitive.microsoft.com")
///     .build();
/// let client = Client::new(table(), config);
///
/// let terms: serde_json::Value = client
///     .invoke(
///         "ListManagementTerm_GetAllTerms",
///         CallArgs::new().with("listId", "123").with("language", "eng"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Client<T = ReqwestTransport> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    table: &'static OperationTable,
    config: ClientConfig,
    transport: T,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api", &self.inner.table.name())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Client<ReqwestTransport> {
    /// Creates a client using a default [`reqwest::Client`].
    pub fn new(table: &'static OperationTable, config: ClientConfig) -> Self {
        Self::with_transport(table, config, ReqwestTransport::default())
    }
}

impl<T> Client<T>
where
    T: Transport,
{
    /// Creates a client with a custom transport.
    pub fn with_transport(table: &'static OperationTable, config: ClientConfig, transport: T) -> Self {
        let inner = Inner {
            table,
            config,
            transport,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The operation table.
    pub fn table(&self) -> &'static OperationTable {
        self.inner.table
    }

    /// The transport.
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Starts a call of a known operation.
    pub fn call<R>(&self, descriptor: &'static OperationDescriptor) -> OperationCall<'_, T, R> {
        OperationCall::new(self, descriptor)
    }

    /// Starts a call of an operation looked up by id.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownOperation`] when the id is not in the table.
    pub fn operation<R>(&self, id: &str) -> Result<OperationCall<'_, T, R>, InvokeError> {
        let descriptor = self.lookup(id)?;
        Ok(OperationCall::new(self, descriptor))
    }

    /// Invokes an operation by id.
    ///
    /// # Errors
    ///
    /// Any [`InvokeError`]; validation errors are returned before the transport is used.
    pub async fn invoke<R>(&self, id: &str, args: CallArgs) -> Result<R, InvokeError>
    where
        R: DeserializeOwned,
    {
        let descriptor = self.lookup(id)?;
        self.execute(descriptor, &args, &CancellationToken::new())
            .await
    }

    /// Invokes an operation by id, stopping with [`InvokeError::Cancelled`] when the
    /// token fires.
    ///
    /// # Errors
    ///
    /// Any [`InvokeError`].
    pub async fn invoke_with_cancellation<R>(
        &self,
        id: &str,
        args: CallArgs,
        cancel: &CancellationToken,
    ) -> Result<R, InvokeError>
    where
        R: DeserializeOwned,
    {
        let descriptor = self.lookup(id)?;
        self.execute(descriptor, &args, cancel).await
    }

    fn lookup(&self, id: &str) -> Result<&'static OperationDescriptor, InvokeError> {
        self.inner
            .table
            .lookup(id)
            .ok_or_else(|| InvokeError::UnknownOperation { id: id.to_string() })
    }

    pub(crate) async fn execute<R>(
        &self,
        descriptor: &'static OperationDescriptor,
        args: &CallArgs,
        cancel: &CancellationToken,
    ) -> Result<R, InvokeError>
    where
        R: DeserializeOwned,
    {
        let Inner {
            table,
            config,
            transport,
        } = &*self.inner;

        let request = RequestBuilder::new(config, table.host()).build(descriptor, args)?;
        if cancel.is_cancelled() {
            return Err(InvokeError::Cancelled);
        }

        debug!(
            operation = descriptor.id,
            method = %request.method(),
            url = %request.url(),
            "invoking operation"
        );
        let result = tokio::select! {
            biased;
            result = transport.send(request, cancel) => result,
            () = cancel.cancelled() => Err(TransportError::Cancelled),
        };

        let response = match result {
            Ok(response) => response,
            Err(TransportError::Cancelled) => return Err(InvokeError::Cancelled),
            Err(err) => return Err(err.into()),
        };
        if cancel.is_cancelled() {
            debug!(operation = descriptor.id, "response dropped after cancellation");
            return Err(InvokeError::Cancelled);
        }

        decode(&response, descriptor)
    }
}
