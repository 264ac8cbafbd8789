//! Term list management.

use contentmod_core::{
    HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind, typed_operations,
};

use super::{CONTENT_TYPE, LIST_ID, LIST_METADATA};
use crate::models::{ListMetadata, RefreshIndex, TermList};

/// Returns the details of a term list.
pub const GET_DETAILS: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_GetDetails",
    method: HttpVerb::Get,
    path: "contentmoderator/lists/v1.0/termlists/{listId}",
    parameters: &[LIST_ID],
    responses: &[ResponseSpec::json(200, "TermList")],
    ..OperationDescriptor::DEFAULT
};

/// Deletes a term list.
pub const DELETE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_Delete",
    method: HttpVerb::Delete,
    responses: &[ResponseSpec::json(200, "String")],
    ..GET_DETAILS
};

/// Updates the details of a term list.
pub const UPDATE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_Update",
    method: HttpVerb::Put,
    parameters: &[LIST_ID, CONTENT_TYPE],
    body: Some(LIST_METADATA),
    ..GET_DETAILS
};

/// Creates a term list.
pub const CREATE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_Create",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/termlists",
    parameters: &[CONTENT_TYPE],
    body: Some(LIST_METADATA),
    responses: &[ResponseSpec::json(200, "TermList")],
    ..OperationDescriptor::DEFAULT
};

/// Returns all the term lists.
pub const GET_ALL: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_GetAllTermLists",
    method: HttpVerb::Get,
    path: "contentmoderator/lists/v1.0/termlists",
    responses: &[ResponseSpec::json(200, "[TermList]")],
    ..OperationDescriptor::DEFAULT
};

/// Rebuilds the index of a term list for a language.
pub const REFRESH_INDEX: OperationDescriptor = OperationDescriptor {
    id: "ListManagementTermLists_RefreshIndexMethod",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/termlists/{listId}/RefreshIndex",
    parameters: &[
        LIST_ID,
        ParameterSpec::query("language", ValueKind::String).required(),
    ],
    responses: &[ResponseSpec::json(200, "RefreshIndex")],
    ..OperationDescriptor::DEFAULT
};

typed_operations! {
    /// Term list management operations.
    pub struct TermLists {
        /// Returns the details of a list.
        fn get_details(list_id) -> TermList = GET_DETAILS;
        /// Deletes a list.
        fn delete(list_id) -> String = DELETE;
        /// Updates the details of a list.
        fn update(list_id, content_type)
            with json(body: &ListMetadata) -> TermList = UPDATE;
        /// Creates a list.
        fn create(content_type) with json(body: &ListMetadata) -> TermList = CREATE;
        /// Returns all the lists.
        fn get_all() -> Vec<TermList> = GET_ALL;
        /// Rebuilds the index of a list.
        fn refresh_index(list_id, language) -> RefreshIndex = REFRESH_INDEX;
    }
}
