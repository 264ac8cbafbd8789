/// Where a parameter is carried in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Location {
    /// Substituted into a `{name}` placeholder of the path template.
    #[display("path")]
    Path,
    /// Appended to the query string (omitted when unset).
    #[display("query")]
    Query,
    /// Sent as an HTTP header.
    #[display("header")]
    Header,
}

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ValueKind {
    /// Any string.
    #[display("string")]
    String,
    /// A signed integer.
    #[display("integer")]
    Integer,
    /// `true` or `false`.
    #[display("boolean")]
    Boolean,
    /// Any value, rendered as-is (JSON values are rendered compactly).
    #[display("opaque")]
    Opaque,
}

/// Declaration of one operation parameter.
///
/// Built with `const` constructors so that operation tables stay plain static data:
///
/// ```rust
/// use contentmod_core::{ParameterSpec, ValueKind};
///
/// const PARAMETERS: &[ParameterSpec] = &[
///     ParameterSpec::path("listId"),
///     ParameterSpec::query("language", ValueKind::String).required(),
///     ParameterSpec::query("CacheImage", ValueKind::Boolean),
/// ];
/// assert_eq!(PARAMETERS.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// The wire name of the parameter.
    pub name: &'static str,
    /// Where the parameter goes.
    pub location: Location,
    /// Whether a value must be supplied.
    pub required: bool,
    /// The accepted value kind.
    pub kind: ValueKind,
}

impl ParameterSpec {
    /// A path parameter: always required, string valued.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Path,
            required: true,
            kind: ValueKind::String,
        }
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
            kind,
        }
    }

    /// An optional string header parameter.
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Header,
            required: false,
            kind: ValueKind::String,
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Changes the accepted value kind.
    #[must_use]
    pub const fn with_kind(self, kind: ValueKind) -> Self {
        Self { kind, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_parameter_is_required() {
        let spec = ParameterSpec::path("listId");

        assert_eq!(spec.location, Location::Path);
        assert!(spec.required);
        assert_eq!(spec.kind, ValueKind::String);
    }

    #[test]
    fn test_query_parameter_is_optional_until_marked() {
        let spec = ParameterSpec::query("offset", ValueKind::Integer);
        assert!(!spec.required);

        let spec = spec.required();
        assert!(spec.required);
        assert_eq!(spec.kind, ValueKind::Integer);
    }

    #[test]
    fn test_header_with_kind() {
        let spec = ParameterSpec::header("x-retry").with_kind(ValueKind::Integer);

        insta::assert_debug_snapshot!(spec, @r#"
        ParameterSpec {
            name: "x-retry",
            location: Header,
            required: false,
            kind: Integer,
        }
        "#);
    }
}
