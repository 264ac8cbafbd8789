//! Image list management.

use contentmod_core::{HttpVerb, OperationDescriptor, ResponseSpec, typed_operations};

use super::{CONTENT_TYPE, LIST_ID, LIST_METADATA};
use crate::models::{ImageList, ListMetadata, RefreshIndex};

/// Returns the details of an image list.
pub const GET_DETAILS: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_GetDetails",
    method: HttpVerb::Get,
    path: "contentmoderator/lists/v1.0/imagelists/{listId}",
    parameters: &[LIST_ID],
    responses: &[ResponseSpec::json(200, "ImageList")],
    ..OperationDescriptor::DEFAULT
};

/// Deletes an image list.
pub const DELETE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_Delete",
    method: HttpVerb::Delete,
    responses: &[ResponseSpec::json(200, "String")],
    ..GET_DETAILS
};

/// Updates the details of an image list.
pub const UPDATE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_Update",
    method: HttpVerb::Put,
    parameters: &[LIST_ID, CONTENT_TYPE],
    body: Some(LIST_METADATA),
    ..GET_DETAILS
};

/// Creates an image list.
pub const CREATE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_Create",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/imagelists",
    parameters: &[CONTENT_TYPE],
    body: Some(LIST_METADATA),
    responses: &[ResponseSpec::json(200, "ImageList")],
    ..OperationDescriptor::DEFAULT
};

/// Returns all the image lists.
pub const GET_ALL: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_GetAllImageLists",
    method: HttpVerb::Get,
    path: "contentmoderator/lists/v1.0/imagelists",
    responses: &[ResponseSpec::json(200, "[ImageList]")],
    ..OperationDescriptor::DEFAULT
};

/// Rebuilds the index of an image list.
pub const REFRESH_INDEX: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImageLists_RefreshIndexMethod",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/imagelists/{listId}/RefreshIndex",
    parameters: &[LIST_ID],
    responses: &[ResponseSpec::json(200, "RefreshIndex")],
    ..OperationDescriptor::DEFAULT
};

typed_operations! {
    /// Image list management operations.
    pub struct ImageLists {
        /// Returns the details of a list.
        fn get_details(list_id) -> ImageList = GET_DETAILS;
        /// Deletes a list.
        fn delete(list_id) -> String = DELETE;
        /// Updates the details of a list.
        fn update(list_id, content_type)
            with json(body: &ListMetadata) -> ImageList = UPDATE;
        /// Creates a list.
        fn create(content_type) with json(body: &ListMetadata) -> ImageList = CREATE;
        /// Returns all the lists.
        fn get_all() -> Vec<ImageList> = GET_ALL;
        /// Rebuilds the index of a list.
        fn refresh_index(list_id) -> RefreshIndex = REFRESH_INDEX;
    }
}
