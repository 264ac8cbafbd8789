//! Images of an image list.

use contentmod_core::{
    Bytes, HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind,
    typed_operations,
};

use super::{CONTENT_TYPE, IMAGE_STREAM, IMAGE_URL, LIST_ID};
use crate::models::{BodyModel, Image, ImageIds};

const TAG: ParameterSpec = ParameterSpec::query("tag", ValueKind::Integer);
const LABEL: ParameterSpec = ParameterSpec::query("label", ValueKind::String);

/// Adds the last cached image to a list.
pub const ADD_IMAGE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_AddImage",
    method: HttpVerb::Post,
    path: "contentmoderator/lists/v1.0/imagelists/{listId}/images",
    parameters: &[LIST_ID, TAG, LABEL],
    responses: &[ResponseSpec::json(200, "Image")],
    ..OperationDescriptor::DEFAULT
};

/// Adds an image referenced by URL to a list.
pub const ADD_IMAGE_URL_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_AddImageUrlInput",
    parameters: &[LIST_ID, TAG, LABEL, CONTENT_TYPE],
    body: Some(IMAGE_URL),
    ..ADD_IMAGE
};

/// Adds an uploaded image to a list.
pub const ADD_IMAGE_FILE_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_AddImageFileInput",
    parameters: &[LIST_ID, TAG, LABEL, CONTENT_TYPE],
    body: Some(IMAGE_STREAM),
    ..ADD_IMAGE
};

/// Deletes all the images of a list.
pub const DELETE_ALL_IMAGES: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_DeleteAllImages",
    method: HttpVerb::Delete,
    path: "contentmoderator/lists/v1.0/imagelists/{listId}/images",
    parameters: &[LIST_ID],
    responses: &[ResponseSpec::json(200, "String")],
    ..OperationDescriptor::DEFAULT
};

/// Returns the ids of the images of a list.
pub const GET_ALL_IMAGE_IDS: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_GetAllImageIds",
    method: HttpVerb::Get,
    responses: &[ResponseSpec::json(200, "ImageIds")],
    ..DELETE_ALL_IMAGES
};

/// Deletes an image from a list.
pub const DELETE_IMAGE: OperationDescriptor = OperationDescriptor {
    id: "ListManagementImage_DeleteImage",
    method: HttpVerb::Delete,
    path: "contentmoderator/lists/v1.0/imagelists/{listId}/images/{ImageId}",
    parameters: &[LIST_ID, ParameterSpec::path("ImageId")],
    responses: &[ResponseSpec::json(200, "String")],
    ..OperationDescriptor::DEFAULT
};

typed_operations! {
    /// Operations on the images of an image list.
    ///
    /// `tag` and `label` are optional arguments of the add operations.
    pub struct ListImages {
        /// Adds the last cached image to a list.
        fn add_image(list_id) -> Image = ADD_IMAGE;
        /// Adds an image referenced by URL to a list.
        fn add_image_url_input(list_id, content_type)
            with json(image_url: &BodyModel) -> Image = ADD_IMAGE_URL_INPUT;
        /// Adds an uploaded image to a list.
        fn add_image_file_input(list_id, content_type)
            with bytes(image_stream: impl Into<Bytes>) -> Image = ADD_IMAGE_FILE_INPUT;
        /// Deletes all the images of a list.
        fn delete_all_images(list_id) -> String = DELETE_ALL_IMAGES;
        /// Returns the ids of the images of a list.
        fn get_all_image_ids(list_id) -> ImageIds = GET_ALL_IMAGE_IDS;
        /// Deletes an image from a list.
        fn delete_image(list_id, image_id) -> String = DELETE_IMAGE;
    }
}
