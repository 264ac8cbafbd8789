use std::fmt;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::Client;
use crate::descriptor::OperationDescriptor;
use crate::error::InvokeError;
use crate::request::{CallArgs, Multipart, ParamValue, RequestBody};
use crate::transport::Transport;

/// Builder for one invocation of an operation, resolved by `.await`.
///
/// # Method Groups
///
/// ## Parameters
/// - [`arg(name, value)`](Self::arg), [`opt_arg(name, value)`](Self::opt_arg)
/// - [`positional(values)`](Self::positional) - required parameters in declaration order
///
/// ## Body
/// - [`json(dto)`](Self::json), [`text(text)`](Self::text), [`bytes(data)`](Self::bytes),
///   [`bytes_with_content_type(data, content_type)`](Self::bytes_with_content_type),
///   [`multipart(form)`](Self::multipart)
///
/// ## Execution
/// - [`accept_language(language)`](Self::accept_language) - per-call override
/// - [`with_cancellation(token)`](Self::with_cancellation)
/// - `.await` - send once and decode
/// - [`poll_until(is_complete)`](Self::poll_until) - re-send until the result is complete
pub struct OperationCall<'a, T, R> {
    client: &'a Client<T>,
    descriptor: &'static OperationDescriptor,
    args: CallArgs,
    cancel: Option<CancellationToken>,
    error: Option<InvokeError>,
    result: PhantomData<fn() -> R>,
}

impl<T, R> fmt::Debug for OperationCall<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationCall")
            .field("operation", &self.descriptor.id)
            .field("args", &self.args)
            .field("cancellable", &self.cancel.is_some())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<'a, T, R> OperationCall<'a, T, R>
where
    T: Transport,
{
    pub(super) fn new(client: &'a Client<T>, descriptor: &'static OperationDescriptor) -> Self {
        Self {
            client,
            descriptor,
            args: CallArgs::new(),
            cancel: None,
            error: None,
            result: PhantomData,
        }
    }

    /// The operation being called.
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    /// The arguments collected so far.
    pub fn args(&self) -> &CallArgs {
        &self.args
    }

    /// Sets a parameter value.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.args.set(name, value);
        self
    }

    /// Sets a parameter value when present.
    #[must_use]
    pub fn opt_arg<V>(mut self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<ParamValue>,
    {
        if let Some(value) = value {
            self.args.set(name, value);
        }
        self
    }

    /// Assigns values to the required parameters, in declaration order.
    #[must_use]
    pub fn positional<const N: usize>(mut self, values: [ParamValue; N]) -> Self {
        let required = self.descriptor.required_parameter_count();
        if required != N {
            warn!(
                operation = self.descriptor.id,
                required,
                supplied = N,
                "positional arguments do not match the required parameters"
            );
        }
        for (param, value) in self.descriptor.required_parameters().zip(values) {
            self.args.set(param.name, value);
        }
        self
    }

    /// Serializes a DTO as the JSON body.
    ///
    /// A serialization failure is reported when the call is awaited.
    #[must_use]
    pub fn json<B>(mut self, body: &B) -> Self
    where
        B: Serialize + ?Sized,
    {
        match RequestBody::json(body) {
            Ok(body) => self.args.set_body(body),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Sends raw bytes with the content type declared by the operation.
    #[must_use]
    pub fn bytes(mut self, data: impl Into<Bytes>) -> Self {
        self.args.set_body(RequestBody::raw(data));
        self
    }

    /// Sends raw bytes with an explicit content type.
    #[must_use]
    pub fn bytes_with_content_type(
        mut self,
        data: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        self.args
            .set_body(RequestBody::raw_with_content_type(data, content_type));
        self
    }

    /// Sends a text body with the content type declared by the operation.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.args.set_body(RequestBody::text(text));
        self
    }

    /// Sends a `multipart/form-data` body.
    #[must_use]
    pub fn multipart(mut self, form: Multipart) -> Self {
        self.args.set_body(form);
        self
    }

    /// Overrides the configured `accept-language`.
    #[must_use]
    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.args.set_accept_language(language);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl<T, R> OperationCall<'_, T, R>
where
    T: Transport,
    R: DeserializeOwned + Send,
{
    async fn send(self) -> Result<R, InvokeError> {
        let Self {
            client,
            descriptor,
            args,
            cancel,
            error,
            result: _,
        } = self;

        if let Some(error) = error {
            return Err(error);
        }
        let cancel = cancel.unwrap_or_default();
        client.execute(descriptor, &args, &cancel).await
    }

    /// Re-sends the call until `is_complete` accepts the result.
    ///
    /// Polls are spaced by the configured long-running operation retry timeout.
    /// Cancelling the attached token stops the polling with [`InvokeError::Cancelled`],
    /// during a request or between two polls.
    ///
    /// # Errors
    ///
    /// The first error of any poll.
    pub async fn poll_until<P>(self, mut is_complete: P) -> Result<R, InvokeError>
    where
        P: FnMut(&R) -> bool + Send,
    {
        let Self {
            client,
            descriptor,
            args,
            cancel,
            error,
            result: _,
        } = self;

        if let Some(error) = error {
            return Err(error);
        }
        let cancel = cancel.unwrap_or_default();
        let delay = client.config().long_running_operation_retry_timeout();

        let mut attempt: u32 = 0;
        loop {
            attempt = attempt.saturating_add(1);
            let result = client.execute::<R>(descriptor, &args, &cancel).await?;
            if is_complete(&result) {
                info!(operation = descriptor.id, attempt, "long-running operation completed");
                return Ok(result);
            }

            debug!(operation = descriptor.id, attempt, ?delay, "operation still running");
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(InvokeError::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        }
    }
}

impl<'a, T, R> IntoFuture for OperationCall<'a, T, R>
where
    T: Transport,
    R: DeserializeOwned + Send + 'a,
{
    type Output = Result<R, InvokeError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;
    use std::time::Duration;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;
    use crate::descriptor::{
        ApiDefinition, BodySpec, HttpVerb, OperationTable, ParameterSpec, ResponseSpec, ValueKind,
    };
    use crate::host::ParameterizedHost;
    use crate::mock::MockTransport;

    const GET_JOB: OperationDescriptor = OperationDescriptor {
        id: "Reviews_GetJobDetails",
        method: HttpVerb::Get,
        path: "contentmoderator/review/v1.0/teams/{teamName}/jobs/{JobId}",
        parameters: &[ParameterSpec::path("teamName"), ParameterSpec::path("JobId")],
        responses: &[ResponseSpec::json(200, "Job")],
        ..OperationDescriptor::DEFAULT
    };

    const CREATE_LIST: OperationDescriptor = OperationDescriptor {
        id: "ListManagementImageLists_Create",
        method: HttpVerb::Post,
        path: "contentmoderator/lists/v1.0/imagelists",
        body: Some(BodySpec::json("body")),
        responses: &[ResponseSpec::json(200, "ImageList")],
        ..OperationDescriptor::DEFAULT
    };

    const ADD_IMAGE: OperationDescriptor = OperationDescriptor {
        id: "ListManagementImage_AddImageFileInput",
        method: HttpVerb::Post,
        path: "contentmoderator/lists/v1.0/imagelists/{listId}/images",
        parameters: &[
            ParameterSpec::path("listId"),
            ParameterSpec::query("tag", ValueKind::Integer),
            ParameterSpec::query("label", ValueKind::String),
        ],
        body: Some(BodySpec::raw("imageStream", "image/gif")),
        responses: &[ResponseSpec::json(200, "Image")],
        ..OperationDescriptor::DEFAULT
    };

    static DEFINITION: ApiDefinition = ApiDefinition {
        name: "calls",
        host: ParameterizedHost::new("{Endpoint}", "Endpoint"),
        operations: &[&GET_JOB, &CREATE_LIST, &ADD_IMAGE],
    };

    static TABLE: LazyLock<OperationTable> =
        LazyLock::new(|| OperationTable::new(&DEFINITION).expect("a valid table"));

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Job {
        status: Option<String>,
    }

    fn client(transport: MockTransport) -> Client<MockTransport> {
        let config = ClientConfig::builder()
            .with_base_url("https://westus.api.cognitive.microsoft.com")
            .with_long_running_operation_retry_timeout(Duration::from_secs(30))
            .build();
        Client::with_transport(&TABLE, config, transport)
    }

    #[tokio::test]
    async fn test_positional_arguments_fill_required_parameters() {
        let transport = MockTransport::new().respond(200, r#"{"Status": "Complete"}"#);
        let client = client(transport.clone());

        let job: Job = client
            .call(&GET_JOB)
            .positional(["team".into(), "job 1".into()])
            .await
            .expect("decoded");

        assert_eq!(job.status.as_deref(), Some("Complete"));
        insta::assert_snapshot!(
            transport.requests()[0].url().path(),
            @"/contentmoderator/review/v1.0/teams/team/jobs/job%201"
        );
    }

    #[tokio::test]
    async fn test_raw_body_with_optional_arguments() {
        let transport = MockTransport::new().respond(200, r#"{"ContentId": "42"}"#);
        let client = client(transport.clone());

        let _image: serde_json::Value = client
            .call(&ADD_IMAGE)
            .arg("listId", "7")
            .opt_arg("tag", Some(101))
            .opt_arg::<&str>("label", None)
            .bytes_with_content_type(vec![0xff, 0xd8], "image/jpeg")
            .await
            .expect("decoded");

        let request = &transport.requests()[0];
        assert_eq!(request.url().query(), Some("tag=101"));
        assert_eq!(request.header("content-type"), Some("image/jpeg"));
        assert_eq!(
            request.body().map(|body| body.as_ref()),
            Some(&[0xff_u8, 0xd8][..])
        );
    }

    #[tokio::test]
    async fn test_json_body_and_accept_language() {
        let transport = MockTransport::new().respond(200, r#"{"Id": 1}"#);
        let client = client(transport.clone());

        let _list: serde_json::Value = client
            .call(&CREATE_LIST)
            .json(&json!({"Name": "images"}))
            .accept_language("de-DE")
            .await
            .expect("decoded");

        let request = &transport.requests()[0];
        assert_eq!(request.header("accept-language"), Some("de-DE"));
        assert_eq!(
            request.body().map(|body| body.as_ref()),
            Some(&br#"{"Name":"images"}"#[..])
        );
    }

    #[tokio::test]
    async fn test_operation_by_id() {
        let transport = MockTransport::new().respond(200, r#"{"Status": "Pending"}"#);
        let client = client(transport.clone());

        let job: Job = client
            .operation("Reviews_GetJobDetails")
            .expect("registered")
            .arg("teamName", "team")
            .arg("JobId", "1")
            .await
            .expect("decoded");

        assert_eq!(job.status.as_deref(), Some("Pending"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_until_completion() {
        let transport = MockTransport::new()
            .respond(200, r#"{"Status": "Pending"}"#)
            .respond(200, r#"{"Status": "InProgress"}"#)
            .respond(200, r#"{"Status": "Complete"}"#);
        let client = client(transport.clone());
        let started = tokio::time::Instant::now();

        let job: Job = client
            .call(&GET_JOB)
            .positional(["team".into(), "1".into()])
            .poll_until(|job: &Job| job.status.as_deref() == Some("Complete"))
            .await
            .expect("completed");

        assert_eq!(job.status.as_deref(), Some("Complete"));
        assert_eq!(transport.call_count(), 3);
        assert!(started.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_until_stops_on_cancellation() {
        let transport = MockTransport::new().respond(200, r#"{"Status": "Pending"}"#);
        let client = client(transport.clone());
        let cancel = CancellationToken::new();

        let poll = client
            .call::<Job>(&GET_JOB)
            .positional(["team".into(), "1".into()])
            .with_cancellation(cancel.clone())
            .poll_until(|job: &Job| job.status.as_deref() == Some("Complete"));
        let canceller = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            cancel.cancel();
        };

        let (result, ()) = tokio::join!(poll, canceller);

        assert!(matches!(result, Err(InvokeError::Cancelled)));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_poll_until_propagates_errors() {
        let transport = MockTransport::new().respond(404, r#"{"Message": "job not found"}"#);
        let client = client(transport.clone());

        let error = client
            .call::<Job>(&GET_JOB)
            .positional(["team".into(), "1".into()])
            .poll_until(|_: &Job| true)
            .await
            .expect_err("404");

        assert_eq!(error.status(), Some(404));
    }
}
