//! Declarative operation descriptors.
//!
//! An [`OperationDescriptor`] is the static definition of one remote operation: verb,
//! path template, parameters, body, success responses and error envelope. The request
//! builder and the response decoder are driven entirely by these values, so an API
//! surface is a table of `const` descriptors rather than code.
//!
//! ```rust
//! use contentmod_core::{HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind};
//!
//! const ADD_TERM: OperationDescriptor = OperationDescriptor {
//!     id: "ListManagementTerm_AddTerm",
//!     method: HttpVerb::Post,
//!     path: "contentmoderator/lists/v1.0/termlists/{listId}/terms/{term}",
//!     parameters: &[
//!         ParameterSpec::path("listId"),
//!         ParameterSpec::path("term"),
//!         ParameterSpec::query("language", ValueKind::String).required(),
//!     ],
//!     responses: &[ResponseSpec::json(201, "Object")],
//!     ..OperationDescriptor::DEFAULT
//! };
//!
//! assert_eq!(ADD_TERM.required_parameter_count(), 3);
//! ```

use http::Method;

use crate::decode::ErrorEnvelope;

mod param;
pub use self::param::{Location, ParameterSpec, ValueKind};

mod response;
pub(crate) use self::response::find as find_response;
pub use self::response::{ResponseKind, ResponseSpec};

mod table;
pub use self::table::{ApiDefinition, DescriptorError, OperationTable};

/// HTTP verbs used by operation descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HttpVerb {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
    /// `PATCH`
    #[display("PATCH")]
    Patch,
}

impl From<HttpVerb> for Method {
    fn from(value: HttpVerb) -> Self {
        match value {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Delete => Method::DELETE,
            HttpVerb::Patch => Method::PATCH,
        }
    }
}

/// The kind of request body an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BodyKind {
    /// Bytes passed through with the declared content type.
    #[display("raw")]
    Raw,
    /// A DTO serialized as JSON.
    #[display("json")]
    Json,
    /// A `multipart/form-data` payload.
    #[display("multipart")]
    Multipart,
}

/// Declaration of the request body of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySpec {
    /// The body parameter name, reported when a required body is missing.
    pub name: &'static str,
    /// The accepted body kind.
    pub kind: BodyKind,
    /// The default content type. Multipart bodies ignore it (the boundary is generated).
    pub content_type: &'static str,
    /// Whether a body must be supplied.
    pub required: bool,
}

impl BodySpec {
    /// A required JSON body.
    pub const fn json(name: &'static str) -> Self {
        Self {
            name,
            kind: BodyKind::Json,
            content_type: "application/json; charset=utf-8",
            required: true,
        }
    }

    /// A required raw body with a default content type.
    pub const fn raw(name: &'static str, content_type: &'static str) -> Self {
        Self {
            name,
            kind: BodyKind::Raw,
            content_type,
            required: true,
        }
    }

    /// A required multipart body.
    pub const fn multipart(name: &'static str) -> Self {
        Self {
            name,
            kind: BodyKind::Multipart,
            content_type: "multipart/form-data",
            required: true,
        }
    }

    /// Marks the body as optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// The static definition of one remote operation.
///
/// Descriptors are immutable `const` values; see the [module documentation](self).
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    /// Unique operation id.
    pub id: &'static str,
    /// HTTP verb.
    pub method: HttpVerb,
    /// Path template relative to the resolved host, with `{name}` placeholders.
    pub path: &'static str,
    /// Parameters in declaration order.
    pub parameters: &'static [ParameterSpec],
    /// The request body, `None` when the operation sends no body.
    pub body: Option<BodySpec>,
    /// Success-status registry.
    pub responses: &'static [ResponseSpec],
    /// The error envelope read for any unregistered status.
    pub error: ErrorEnvelope,
}

impl OperationDescriptor {
    /// Base value for struct-update syntax: no parameters, no body, no responses,
    /// the default API error envelope.
    pub const DEFAULT: Self = Self {
        id: "",
        method: HttpVerb::Get,
        path: "",
        parameters: &[],
        body: None,
        responses: &[],
        error: ErrorEnvelope::API_ERROR,
    };

    /// Number of required parameters (the body is not counted).
    pub const fn required_parameter_count(&self) -> usize {
        let mut count = 0;
        let mut rest = self.parameters;
        while let [first, tail @ ..] = rest {
            if first.required {
                count += 1;
            }
            rest = tail;
        }
        count
    }

    /// Required parameters, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &'static ParameterSpec> + use<> {
        self.parameters.iter().filter(|param| param.required)
    }

    /// Looks up a parameter by wire name.
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters.iter().find(|param| param.name == name)
    }

    /// Looks up the success response registered for a status code.
    pub fn response(&self, status: u16) -> Option<&'static ResponseSpec> {
        find_response(self.responses, status)
    }

    /// The HTTP method.
    pub fn http_method(&self) -> Method {
        self.method.into()
    }
}
