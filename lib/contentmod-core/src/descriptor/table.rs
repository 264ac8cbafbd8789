use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::{Location, OperationDescriptor};
use crate::host::ParameterizedHost;
use crate::request::placeholders;

/// The static definition of a whole API: its host template and its operations.
#[derive(Debug)]
pub struct ApiDefinition {
    /// Human readable API name, used in logs.
    pub name: &'static str,
    /// The parameterized host every operation path is appended to.
    pub host: ParameterizedHost,
    /// All operations of the API.
    pub operations: &'static [&'static OperationDescriptor],
}

/// Invariant violations found while building an [`OperationTable`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum DescriptorError {
    /// Two operations share the same id.
    #[display("Duplicate operation id: {id}")]
    DuplicateOperation {
        /// The duplicated id.
        id: &'static str,
    },

    /// Two parameters of the same operation share a name.
    #[display("Operation {operation} declares parameter {name} twice")]
    DuplicateParameter {
        /// The operation id.
        operation: &'static str,
        /// The duplicated parameter name.
        name: &'static str,
    },

    /// A path placeholder has no matching path parameter.
    #[display("Operation {operation} has no path parameter for placeholder {{{placeholder}}}")]
    UnboundPlaceholder {
        /// The operation id.
        operation: &'static str,
        /// The placeholder name.
        placeholder: String,
    },

    /// A path parameter does not appear in the path template.
    #[display("Operation {operation} declares path parameter {name} absent from its path")]
    UnusedPathParameter {
        /// The operation id.
        operation: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// A path parameter is declared optional.
    #[display("Operation {operation} declares optional path parameter {name}")]
    OptionalPathParameter {
        /// The operation id.
        operation: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// An operation registers no success response.
    #[display("Operation {operation} registers no success response")]
    MissingResponses {
        /// The operation id.
        operation: &'static str,
    },
}

/// A validated, indexed view over an [`ApiDefinition`].
///
/// Built once per process (typically inside a `LazyLock`) and shared by every client.
#[derive(Debug)]
pub struct OperationTable {
    definition: &'static ApiDefinition,
    index: IndexMap<&'static str, &'static OperationDescriptor>,
}

impl OperationTable {
    /// Validates the definition and indexes its operations by id.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescriptorError`] found.
    pub fn new(definition: &'static ApiDefinition) -> Result<Self, DescriptorError> {
        let mut index = IndexMap::with_capacity(definition.operations.len());

        for &descriptor in definition.operations {
            validate(descriptor)?;
            if index.insert(descriptor.id, descriptor).is_some() {
                return Err(DescriptorError::DuplicateOperation { id: descriptor.id });
            }
        }

        debug!(api = definition.name, operations = index.len(), "operation table ready");
        Ok(Self { definition, index })
    }

    /// Looks up an operation by id.
    pub fn lookup(&self, id: &str) -> Option<&'static OperationDescriptor> {
        self.index.get(id).copied()
    }

    /// All operations, in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &'static OperationDescriptor> + '_ {
        self.index.values().copied()
    }

    /// The host template shared by all operations.
    pub fn host(&self) -> &'static ParameterizedHost {
        &self.definition.host
    }

    /// The API name.
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the table has no operation.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn validate(descriptor: &'static OperationDescriptor) -> Result<(), DescriptorError> {
    let operation = descriptor.id;

    if descriptor.responses.is_empty() {
        return Err(DescriptorError::MissingResponses { operation });
    }

    let mut names = HashSet::new();
    for param in descriptor.parameters {
        if !names.insert(param.name) {
            return Err(DescriptorError::DuplicateParameter {
                operation,
                name: param.name,
            });
        }
    }

    let template: HashSet<&str> = placeholders(descriptor.path).collect();
    for placeholder in &template {
        let bound = descriptor
            .parameters
            .iter()
            .any(|param| param.location == Location::Path && param.name == *placeholder);
        if !bound {
            return Err(DescriptorError::UnboundPlaceholder {
                operation,
                placeholder: (*placeholder).to_string(),
            });
        }
    }

    for param in descriptor.parameters {
        if param.location != Location::Path {
            continue;
        }
        if !template.contains(param.name) {
            return Err(DescriptorError::UnusedPathParameter {
                operation,
                name: param.name,
            });
        }
        if !param.required {
            return Err(DescriptorError::OptionalPathParameter {
                operation,
                name: param.name,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{HttpVerb, ParameterSpec, ResponseSpec, ValueKind};

    const HOST: ParameterizedHost = ParameterizedHost::new("{Endpoint}", "Endpoint");

    const GET_DETAILS: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTermLists_GetDetails",
        method: HttpVerb::Get,
        path: "contentmoderator/lists/v1.0/termlists/{listId}",
        parameters: &[ParameterSpec::path("listId")],
        responses: &[ResponseSpec::json(200, "TermList")],
        ..OperationDescriptor::DEFAULT
    };

    const DELETE: OperationDescriptor = OperationDescriptor {
        id: "ListManagementTermLists_Delete",
        method: HttpVerb::Delete,
        path: "contentmoderator/lists/v1.0/termlists/{listId}",
        parameters: &[ParameterSpec::path("listId")],
        responses: &[ResponseSpec::json(200, "String")],
        ..OperationDescriptor::DEFAULT
    };

    static VALID: ApiDefinition = ApiDefinition {
        name: "test",
        host: HOST,
        operations: &[&GET_DETAILS, &DELETE],
    };

    #[test]
    fn test_valid_table_indexes_operations() {
        let table = OperationTable::new(&VALID).expect("valid table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.name(), "test");
        let found = table
            .lookup("ListManagementTermLists_Delete")
            .expect("registered");
        assert_eq!(found.method, HttpVerb::Delete);
        assert!(table.lookup("ListManagementTermLists_Create").is_none());

        let ids: Vec<_> = table.all().map(|op| op.id).collect();
        insta::assert_debug_snapshot!(ids, @r#"
        [
            "ListManagementTermLists_GetDetails",
            "ListManagementTermLists_Delete",
        ]
        "#);
    }

    #[test]
    fn test_duplicate_operation_is_rejected() {
        static DUPLICATED: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&GET_DETAILS, &GET_DETAILS],
        };

        let error = OperationTable::new(&DUPLICATED).expect_err("duplicated id");
        assert_eq!(
            error,
            DescriptorError::DuplicateOperation {
                id: "ListManagementTermLists_GetDetails"
            }
        );
    }

    #[test]
    fn test_unbound_placeholder_is_rejected() {
        const UNBOUND: OperationDescriptor = OperationDescriptor {
            id: "Unbound",
            path: "teams/{teamName}/reviews/{reviewId}",
            parameters: &[ParameterSpec::path("teamName")],
            responses: &[ResponseSpec::json(200, "Review")],
            ..OperationDescriptor::DEFAULT
        };
        static DEFINITION: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&UNBOUND],
        };

        let error = OperationTable::new(&DEFINITION).expect_err("unbound placeholder");
        insta::assert_snapshot!(error, @"Operation Unbound has no path parameter for placeholder {reviewId}");
    }

    #[test]
    fn test_placeholder_bound_to_query_parameter_is_rejected() {
        const MISPLACED: OperationDescriptor = OperationDescriptor {
            id: "Misplaced",
            path: "termlists/{listId}",
            parameters: &[ParameterSpec::query("listId", ValueKind::String).required()],
            responses: &[ResponseSpec::json(200, "TermList")],
            ..OperationDescriptor::DEFAULT
        };
        static DEFINITION: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&MISPLACED],
        };

        let error = OperationTable::new(&DEFINITION).expect_err("placeholder bound to query");
        assert!(matches!(error, DescriptorError::UnboundPlaceholder { .. }));
    }

    #[test]
    fn test_unused_and_optional_path_parameters_are_rejected() {
        const UNUSED: OperationDescriptor = OperationDescriptor {
            id: "Unused",
            path: "termlists",
            parameters: &[ParameterSpec::path("listId")],
            responses: &[ResponseSpec::json(200, "TermList")],
            ..OperationDescriptor::DEFAULT
        };
        const OPTIONAL: OperationDescriptor = OperationDescriptor {
            id: "Optional",
            path: "termlists/{listId}",
            parameters: &[ParameterSpec {
                required: false,
                ..ParameterSpec::path("listId")
            }],
            responses: &[ResponseSpec::json(200, "TermList")],
            ..OperationDescriptor::DEFAULT
        };
        static WITH_UNUSED: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&UNUSED],
        };
        static WITH_OPTIONAL: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&OPTIONAL],
        };

        let error = OperationTable::new(&WITH_UNUSED).expect_err("unused path parameter");
        assert!(matches!(error, DescriptorError::UnusedPathParameter { .. }));

        let error = OperationTable::new(&WITH_OPTIONAL).expect_err("optional path parameter");
        assert!(matches!(error, DescriptorError::OptionalPathParameter { .. }));
    }

    #[test]
    fn test_operation_without_responses_is_rejected() {
        const NO_RESPONSE: OperationDescriptor = OperationDescriptor {
            id: "NoResponse",
            path: "termlists",
            ..OperationDescriptor::DEFAULT
        };
        static DEFINITION: ApiDefinition = ApiDefinition {
            name: "test",
            host: HOST,
            operations: &[&NO_RESPONSE],
        };

        let error = OperationTable::new(&DEFINITION).expect_err("no response");
        assert_eq!(
            error,
            DescriptorError::MissingResponses {
                operation: "NoResponse"
            }
        );
    }
}
