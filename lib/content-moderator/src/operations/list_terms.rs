//! Terms of a term list.

use contentmod_core::{
    HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind, typed_operations,
};

use super::LIST_ID;
use crate::models::Terms;

const LANGUAGE: ParameterSpec = ParameterSpec::query("language", ValueKind::String).required();

/// Adds a term to a list.
///
/// Only `201 Created` is a success.
pub const ADD_TERM: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTerm_AddTerm",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/termlists/{listId}/terms/{term}",
    parameters: &[LIST_ID, ParameterSpec::path("term"), LANGUAGE],
    responses: &[ResponseSpec::json(201, "Object")],
    ..OperationDescriptor::DEFAULT
};

/// Deletes a term from a list.
pub const DELETE_TERM: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTerm_DeleteTerm",
    method: HttpVerb::Delete,
    responses: &[ResponseSpec::empty(204)],
    ..ADD_TERM
};

/// Returns a page of the terms of a list.
pub const GET_ALL_TERMS: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTerm_GetAllTerms",
    method: HttpVerb::Get,
    path: "contentmoderator/lists/v1.0/termlists/{listId}/terms",
    parameters: &[
        LIST_ID,
        LANGUAGE,
        ParameterSpec::query("offset", ValueKind::Integer),
        ParameterSpec::query("limit", ValueKind::Integer),
    ],
    responses: &[ResponseSpec::json(200, "Terms")],
    ..OperationDescriptor::DEFAULT
};

/// Deletes all the terms of a list.
pub const DELETE_ALL_TERMS: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTerm_DeleteAllTerms",
    method: HttpVerb::Delete,
    path: "contentmoderator/lists/v1.0/termlists/{listId}/terms",
    parameters: &[LIST_ID, LANGUAGE],
    responses: &[ResponseSpec::empty(204)],
    ..OperationDescriptor::DEFAULT
};

typed_operations! {
    /// Operations on the terms of a term list.
    pub struct ListTerms {
        /// Adds a term to a list.
        fn add_term(list_id, term, language) -> serde_json::Value = ADD_TERM;
        /// Deletes a term from a list.
        fn delete_term(list_id, term, language) -> () = DELETE_TERM;
        /// Returns a page of terms; `offset` and `limit` are optional arguments.
        fn get_all_terms(list_id, language) -> Terms = GET_ALL_TERMS;
        /// Deletes all the terms of a list.
        fn delete_all_terms(list_id, language) -> () = DELETE_ALL_TERMS;
    }
}
