use std::future::IntoFuture;

use tokio::runtime::{Builder, Runtime};

use crate::error::InvokeError;

/// Runs calls to completion from synchronous code.
///
/// A thin adapter over a current-thread tokio runtime: every blocking call is the
/// async call driven to completion, so both surfaces behave identically.
///
/// ```rust,no_run
/// use contentmod_core::{BlockingRuntime, CallArgs, Client, ClientConfig, OperationTable};
/// # fn table() -> &'static OperationTable { unimplemented!() }
///
/// # fn example() -> Result<(), contentmod_core::InvokeError> {
/// let runtime = BlockingRuntime::new()?;
/// let client = Client::new(table(), ClientConfig::default());
///
/// let lists: serde_json::Value =
///     runtime.block_on(client.invoke("ListManagementImageLists_GetAllImageLists", CallArgs::new()))?;
/// # Ok(())
/// # }
/// ```
///
/// Must not be used from within an async context.
#[derive(Debug)]
pub struct BlockingRuntime {
    runtime: Runtime,
}

impl BlockingRuntime {
    /// Creates the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Runtime`] when the runtime cannot be created.
    pub fn new() -> Result<Self, InvokeError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime })
    }

    /// Drives a call (or any future) to completion.
    pub fn block_on<F>(&self, call: F) -> F::Output
    where
        F: IntoFuture,
    {
        self.runtime.block_on(call.into_future())
    }
}
