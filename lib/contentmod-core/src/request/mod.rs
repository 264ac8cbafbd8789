//! Request building: descriptor + arguments + configuration → [`InvocationRequest`].

use bytes::Bytes;
use headers::{ContentType, HeaderMapExt, UserAgent};
use http::header::{ACCEPT_LANGUAGE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use tracing::warn;
use url::Url;

use crate::config::ClientConfig;
use crate::descriptor::{BodyKind, Location, OperationDescriptor};
use crate::error::InvokeError;
use crate::host::ParameterizedHost;

mod args;
pub use self::args::{CallArgs, ParamValue};

mod body;
pub use self::body::{Multipart, RequestBody};

mod path;
pub(crate) use self::path::{encode_path_segment, join};
pub use self::path::{placeholders, replace_placeholder, substitute};

/// Header carrying the per-request correlation id.
pub const CLIENT_REQUEST_ID_HEADER: &str = "x-ms-client-request-id";

/// A fully resolved HTTP request, ready for a [`Transport`](crate::Transport).
#[derive(Clone, derive_more::Debug)]
pub struct InvocationRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    #[debug(ignore)]
    body: Option<Bytes>,
}

impl InvocationRequest {
    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The absolute URL, query string included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The encoded body.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// A header value as a string, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Splits the request into its parts.
    pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Turns an operation descriptor and call arguments into an [`InvocationRequest`].
///
/// Validation happens before anything is built: a failing build performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
    host: &'a ParameterizedHost,
}

impl<'a> RequestBuilder<'a> {
    /// Creates a builder for a host and a configuration.
    pub fn new(config: &'a ClientConfig, host: &'a ParameterizedHost) -> Self {
        Self { config, host }
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Fails on missing or ill-typed arguments, an unexpected body, a missing base URL
    /// or host parameter, or an invalid URL or header.
    pub fn build(
        &self,
        descriptor: &OperationDescriptor,
        args: &CallArgs,
    ) -> Result<InvocationRequest, InvokeError> {
        Self::validate(descriptor, args)?;

        let host = self.host.resolve(self.config)?;
        let url = Self::build_url(&host.url, descriptor, args)?;

        let mut headers = HeaderMap::new();
        let body = Self::apply_body(&mut headers, descriptor, args)?;

        let language = args
            .accept_language()
            .unwrap_or_else(|| self.config.accept_language());
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(language)?);

        if let Some((name, value)) = host.header {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(&value)?,
            );
        }

        if let Ok(user_agent) = self.config.user_agent().parse::<UserAgent>() {
            headers.typed_insert(user_agent);
        } else {
            warn!(user_agent = self.config.user_agent(), "invalid user agent ignored");
        }

        if self.config.generate_client_request_id() {
            let id = uuid::Uuid::new_v4().to_string();
            headers.insert(
                HeaderName::from_static(CLIENT_REQUEST_ID_HEADER),
                HeaderValue::from_str(&id)?,
            );
        }

        for param in descriptor.parameters {
            if param.location != Location::Header {
                continue;
            }
            if let Some(value) = args.get(param.name) {
                headers.insert(
                    HeaderName::from_bytes(param.name.to_ascii_lowercase().as_bytes())?,
                    HeaderValue::from_str(&value.to_string())?,
                );
            }
        }

        Ok(InvocationRequest {
            method: descriptor.http_method(),
            url,
            headers,
            body,
        })
    }

    fn validate(descriptor: &OperationDescriptor, args: &CallArgs) -> Result<(), InvokeError> {
        let operation = descriptor.id;

        for param in descriptor.required_parameters() {
            if args.get(param.name).is_none() {
                return Err(InvokeError::MissingRequiredParameter {
                    operation,
                    name: param.name,
                });
            }
        }

        match (descriptor.body, args.body()) {
            (Some(spec), None) if spec.required => {
                return Err(InvokeError::MissingRequiredParameter {
                    operation,
                    name: spec.name,
                });
            }
            (Some(spec), Some(body)) if spec.kind != body.kind() => {
                return Err(InvokeError::UnexpectedBody {
                    operation,
                    found: body_kind_name(body.kind()),
                });
            }
            (None, Some(body)) => {
                return Err(InvokeError::UnexpectedBody {
                    operation,
                    found: body_kind_name(body.kind()),
                });
            }
            _ => {}
        }

        for param in descriptor.parameters {
            let Some(value) = args.get(param.name) else {
                continue;
            };
            let rendered = value.to_string();
            let dot_segment = param.location == Location::Path && is_dot_segment(&rendered);
            if dot_segment || !value.accepts(param.kind) {
                return Err(InvokeError::InvalidParameterValue {
                    operation,
                    name: param.name,
                    expected: param.kind,
                    value: rendered,
                });
            }
        }

        for name in args.names() {
            if descriptor.parameter(name).is_none() {
                warn!(operation, ?name, "argument name not declared by the operation");
            }
        }

        Ok(())
    }

    fn build_url(
        host: &str,
        descriptor: &OperationDescriptor,
        args: &CallArgs,
    ) -> Result<Url, InvokeError> {
        let mut path = descriptor.path.to_string();
        for param in descriptor.parameters {
            if param.location != Location::Path {
                continue;
            }
            if let Some(value) = args.get(param.name) {
                let encoded = encode_path_segment(&value.to_string());
                path = replace_placeholder(&path, param.name, &encoded);
            }
        }

        let mut url = join(host, &path).parse::<Url>()?;

        let query: Vec<_> = descriptor
            .parameters
            .iter()
            .filter(|param| param.location == Location::Query)
            .filter_map(|param| args.get(param.name).map(|value| (param.name, value)))
            .collect();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, &value.to_string());
            }
        }

        Ok(url)
    }

    fn apply_body(
        headers: &mut HeaderMap,
        descriptor: &OperationDescriptor,
        args: &CallArgs,
    ) -> Result<Option<Bytes>, InvokeError> {
        let (Some(spec), Some(body)) = (descriptor.body, args.body()) else {
            return Ok(None);
        };

        let content_type = body.content_type().unwrap_or(spec.content_type);
        match content_type.parse::<mime::Mime>() {
            Ok(mime) => headers.typed_insert(ContentType::from(mime)),
            Err(_) => {
                headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_str(content_type)?,
                );
            }
        }

        Ok(Some(body.data().clone()))
    }
}

/// `.` and `..` would be collapsed by URL normalization, retargeting the request.
fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

fn body_kind_name(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Raw => "raw",
        BodyKind::Json => "json",
        BodyKind::Multipart => "multipart",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::descriptor::{BodySpec, HttpVerb, ParameterSpec, ResponseSpec, ValueKind};

    const HOST: ParameterizedHost = ParameterizedHost::new("{Endpoint}", "Endpoint");

    const ADD_TERM: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTerm_AddTerm",
        method: HttpVerb::Post,
        path: "contentmoderator/lists/v1.0/termlists/{listId}/terms/{term}",
        parameters: &[
            ParameterSpec::path("listId"),
            ParameterSpec::path("term"),
            ParameterSpec::query("language", ValueKind::String).required(),
        ],
        responses: &[ResponseSpec::json(201, "Object")],
        ..OperationDescriptor::DEFAULT
    };

    const SCREEN_TEXT: OperationDescriptor = OperationDescriptor {
        id: "TextModeration_ScreenText",
        method: HttpVerb::Post,
        path: "contentmoderator/moderate/v1.0/ProcessText/Screen/",
        parameters: &[
            ParameterSpec::query("language", ValueKind::String),
            ParameterSpec::query("autocorrect", ValueKind::Boolean),
            ParameterSpec::query("PII", ValueKind::Boolean),
            ParameterSpec::query("listId", ValueKind::String),
            ParameterSpec::query("classify", ValueKind::Boolean),
            ParameterSpec::header("Content-Type").required(),
        ],
        body: Some(BodySpec::raw("textContent", "text/plain")),
        responses: &[ResponseSpec::json(200, "Screen")],
        ..OperationDescriptor::DEFAULT
    };

    const CREATE_LIST: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTermLists_Create",
        method: HttpVerb::Post,
        path: "contentmoderator/lists/v1.0/termlists",
        body: Some(BodySpec::json("body")),
        responses: &[ResponseSpec::json(200, "TermList")],
        ..OperationDescriptor::DEFAULT
    };

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .with_base_url("https://westus.api.cognitive.microsoft.com/")
            .with_user_agent("contentmod-tests/1.0")
            .build()
    }

    #[test]
    fn test_build_path_and_query() {
        let config = config();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "bad word")
            .with("language", "eng");

        let request = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect("valid request");

        assert_eq!(request.method(), Method::POST);
        insta::assert_snapshot!(
            request.url(),
            @"https://westus.api.cognitive.microsoft.com/contentmoderator/lists/v1.0/termlists/123/terms/bad%20word?language=eng"
        );
        assert!(request.body().is_none());
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn test_build_default_headers() {
        let config = config();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "badword")
            .with("language", "eng");

        let request = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect("valid request");

        assert_eq!(request.header("accept-language"), Some("en-US"));
        assert_eq!(request.header("user-agent"), Some("contentmod-tests/1.0"));
        assert_eq!(
            request.header("x-ms-parameterized-host"),
            Some("{Endpoint}, https://westus.api.cognitive.microsoft.com/")
        );
        let id = request
            .header(CLIENT_REQUEST_ID_HEADER)
            .expect("client request id");
        let id = uuid::Uuid::parse_str(id).expect("a uuid");
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_build_without_client_request_id_and_language_override() {
        let config = ClientConfig::builder()
            .with_base_url("https://westus.api.cognitive.microsoft.com")
            .with_generate_client_request_id(false)
            .build();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "badword")
            .with("language", "eng")
            .with_accept_language("fr-FR");

        let request = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect("valid request");

        assert_eq!(request.header(CLIENT_REQUEST_ID_HEADER), None);
        assert_eq!(request.header("accept-language"), Some("fr-FR"));
    }

    #[test]
    fn test_missing_required_parameter() {
        let config = config();
        let args = CallArgs::new().with("listId", "123").with("term", "badword");

        let error = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect_err("language is required");

        insta::assert_snapshot!(error, @"Parameter language is required and cannot be null (operation ListManagementTerm_AddTerm)");
    }

    #[test]
    fn test_missing_required_body() {
        let config = config();

        let error = RequestBuilder::new(&config, &HOST)
            .build(&CREATE_LIST, &CallArgs::new())
            .expect_err("body is required");

        assert!(matches!(
            error,
            InvokeError::MissingRequiredParameter { name: "body", .. }
        ));
    }

    #[test]
    fn test_invalid_parameter_kind() {
        let config = config();
        let args = CallArgs::new()
            .with("Content-Type", "text/plain")
            .with("autocorrect", "yes")
            .with_body(RequestBody::text("some text"));

        let error = RequestBuilder::new(&config, &HOST)
            .build(&SCREEN_TEXT, &args)
            .expect_err("autocorrect is a boolean");

        insta::assert_snapshot!(error, @"Parameter autocorrect of operation TextModeration_ScreenText expects boolean value, got yes");
    }

    #[test]
    fn test_dot_segment_path_values_are_rejected() {
        let config = config();

        for term in [".", ".."] {
            let args = CallArgs::new()
                .with("listId", "123")
                .with("term", term)
                .with("language", "eng");

            let error = RequestBuilder::new(&config, &HOST)
                .build(&ADD_TERM, &args)
                .expect_err("dot segments would change the target path");

            assert!(matches!(
                error,
                InvokeError::InvalidParameterValue { name: "term", .. }
            ));
        }

        let args = CallArgs::new()
            .with("listId", "..")
            .with("term", "badword")
            .with("language", "eng");
        let error = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect_err("listId is a path segment");
        insta::assert_snapshot!(error, @"Parameter listId of operation ListManagementTerm_AddTerm expects string value, got ..");
    }

    #[test]
    fn test_dots_inside_path_values_are_kept() {
        let config = config();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "...")
            .with("language", "eng");

        let request = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect("only exact dot segments are rejected");

        assert!(request.url().path().ends_with("/terms/..."));
    }

    #[test]
    fn test_unexpected_body() {
        let config = config();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "badword")
            .with("language", "eng")
            .with_json(&json!({}))
            .expect("serializable");

        let error = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect_err("no body accepted");
        assert!(matches!(error, InvokeError::UnexpectedBody { found: "json", .. }));

        let args = CallArgs::new()
            .with("Content-Type", "text/plain")
            .with_json(&json!("some text"))
            .expect("serializable");
        let error = RequestBuilder::new(&config, &HOST)
            .build(&SCREEN_TEXT, &args)
            .expect_err("raw body expected");
        assert!(matches!(error, InvokeError::UnexpectedBody { found: "json", .. }));
    }

    #[test]
    fn test_optional_query_parameters_are_omitted() {
        let config = config();
        let args = CallArgs::new()
            .with("Content-Type", "text/html")
            .with("PII", true)
            .with("language", "eng")
            .with_opt::<String>("listId", None)
            .with_body(RequestBody::text("<p>hello</p>"));

        let request = RequestBuilder::new(&config, &HOST)
            .build(&SCREEN_TEXT, &args)
            .expect("valid request");

        insta::assert_snapshot!(
            request.url().query().unwrap_or_default(),
            @"language=eng&PII=true"
        );
        assert_eq!(request.header("content-type"), Some("text/html"));
        assert_eq!(
            request.body().map(|body| body.as_ref()),
            Some(&b"<p>hello</p>"[..])
        );
    }

    #[test]
    fn test_json_body_content_type() {
        let config = config();
        let args = CallArgs::new()
            .with_json(&json!({"Name": "list", "Description": "terms"}))
            .expect("serializable");

        let request = RequestBuilder::new(&config, &HOST)
            .build(&CREATE_LIST, &args)
            .expect("valid request");

        assert_eq!(
            request.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_missing_base_url_is_reported_before_io() {
        let config = ClientConfig::builder().with_base_url("   ").build();
        let args = CallArgs::new()
            .with("listId", "123")
            .with("term", "badword")
            .with("language", "eng");

        let error = RequestBuilder::new(&config, &HOST)
            .build(&ADD_TERM, &args)
            .expect_err("blank base url");

        assert!(matches!(error, InvokeError::MissingBaseUrl));
    }
}
