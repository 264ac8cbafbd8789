/// How the body of a registered success response is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ResponseKind {
    /// The body is JSON; an empty body reads as `null`.
    #[display("json")]
    Json,
    /// The body is ignored; the result is read from `null` (`()` or `Option<_>`).
    #[display("empty")]
    Empty,
}

/// One entry of the success-status registry of an operation.
///
/// Only the registered codes count as success: a `202` returned by an operation that
/// only registers `200` is decoded as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSpec {
    /// The HTTP status code.
    pub status: u16,
    /// How to read the body.
    pub kind: ResponseKind,
    /// The result type tag, used in diagnostics.
    pub schema: &'static str,
}

impl ResponseSpec {
    /// A JSON success response.
    pub const fn json(status: u16, schema: &'static str) -> Self {
        Self {
            status,
            kind: ResponseKind::Json,
            schema,
        }
    }

    /// A success response without content.
    pub const fn empty(status: u16) -> Self {
        Self {
            status,
            kind: ResponseKind::Empty,
            schema: "()",
        }
    }
}

/// Finds the response registered for a status code.
pub(crate) fn find(responses: &[ResponseSpec], status: u16) -> Option<&ResponseSpec> {
    responses.iter().find(|response| response.status == status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSES: &[ResponseSpec] = &[
        ResponseSpec::json(200, "ImageList"),
        ResponseSpec::empty(204),
    ];

    #[test]
    fn test_registered_status_is_found() {
        let found = find(RESPONSES, 200).expect("200 is registered");
        assert_eq!(found.kind, ResponseKind::Json);
        assert_eq!(found.schema, "ImageList");

        let found = find(RESPONSES, 204).expect("204 is registered");
        assert_eq!(found.kind, ResponseKind::Empty);
    }

    #[test]
    fn test_unregistered_success_status_is_not_found() {
        assert!(find(RESPONSES, 201).is_none());
        assert!(find(RESPONSES, 202).is_none());
        assert!(find(RESPONSES, 404).is_none());
    }
}
