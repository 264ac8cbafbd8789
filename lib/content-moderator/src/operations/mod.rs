//! The operation descriptor table of the moderation service.
//!
//! Every operation is a `const` [`OperationDescriptor`]; the typed wrappers of each
//! group are generated from them with [`typed_operations!`](contentmod_core::typed_operations).

use std::sync::LazyLock;

use contentmod_core::{
    ApiDefinition, BodySpec, OperationDescriptor, OperationTable, ParameterSpec,
    ParameterizedHost, ValueKind,
};

pub mod image_lists;
pub mod image_moderation;
pub mod list_images;
pub mod list_terms;
pub mod reviews;
pub mod term_lists;
pub mod text_moderation;

/// Name of the host placeholder fed from the configured base URL.
pub const BASE_URL_PARAMETER: &str = "baseUrl";

const CONTENT_TYPE: ParameterSpec = ParameterSpec::header("Content-Type").required();
const CACHE_IMAGE: ParameterSpec = ParameterSpec::query("CacheImage", ValueKind::Boolean);
const LIST_ID: ParameterSpec = ParameterSpec::path("listId");

const IMAGE_STREAM: BodySpec = BodySpec::raw("imageStream", "image/gif");
const IMAGE_URL: BodySpec = BodySpec::json("imageUrl");
const LIST_METADATA: BodySpec = BodySpec::json("body");

/// The moderation service.
pub static API: ApiDefinition = ApiDefinition {
    name: "content-moderator",
    host: ParameterizedHost::new("{baseUrl}", BASE_URL_PARAMETER),
    operations: &[
        &image_moderation::FIND_FACES,
        &image_moderation::FIND_FACES_FILE_INPUT,
        &image_moderation::FIND_FACES_URL_INPUT,
        &image_moderation::OCR,
        &image_moderation::OCR_FILE_INPUT,
        &image_moderation::OCR_URL_INPUT,
        &image_moderation::EVALUATE,
        &image_moderation::EVALUATE_FILE_INPUT,
        &image_moderation::EVALUATE_URL_INPUT,
        &image_moderation::MATCH,
        &image_moderation::MATCH_FILE_INPUT,
        &image_moderation::MATCH_URL_INPUT,
        &text_moderation::SCREEN_TEXT,
        &text_moderation::DETECT_LANGUAGE,
        &image_lists::GET_DETAILS,
        &image_lists::DELETE,
        &image_lists::UPDATE,
        &image_lists::CREATE,
        &image_lists::GET_ALL,
        &image_lists::REFRESH_INDEX,
        &list_images::ADD_IMAGE,
        &list_images::ADD_IMAGE_URL_INPUT,
        &list_images::ADD_IMAGE_FILE_INPUT,
        &list_images::DELETE_ALL_IMAGES,
        &list_images::GET_ALL_IMAGE_IDS,
        &list_images::DELETE_IMAGE,
        &term_lists::GET_DETAILS,
        &term_lists::DELETE,
        &term_lists::UPDATE,
        &term_lists::CREATE,
        &term_lists::GET_ALL,
        &term_lists::REFRESH_INDEX,
        &list_terms::ADD_TERM,
        &list_terms::DELETE_TERM,
        &list_terms::GET_ALL_TERMS,
        &list_terms::DELETE_ALL_TERMS,
        &reviews::GET_REVIEW,
        &reviews::GET_JOB_DETAILS,
        &reviews::CREATE_REVIEWS,
        &reviews::CREATE_JOB,
        &reviews::ADD_VIDEO_FRAME,
        &reviews::GET_VIDEO_FRAMES,
        &reviews::PUBLISH_VIDEO_REVIEW,
        &reviews::ADD_VIDEO_TRANSCRIPT_MODERATION_RESULT,
        &reviews::ADD_VIDEO_TRANSCRIPT,
        &reviews::CREATE_VIDEO_REVIEWS,
        &reviews::ADD_VIDEO_FRAME_URL,
        &reviews::ADD_VIDEO_FRAME_STREAM,
    ],
};

static TABLE: LazyLock<OperationTable> =
    LazyLock::new(|| OperationTable::new(&API).expect("a valid operation table"));

/// The validated operation table, built on first use.
pub fn table() -> &'static OperationTable {
    &TABLE
}

/// Looks up an operation by id.
pub fn operation(id: &str) -> Option<&'static OperationDescriptor> {
    table().lookup(id)
}

/// The base URL of the service in an Azure region, e.g. `westus`.
pub fn region_endpoint(region: &str) -> String {
    format!("https://{region}.api.cognitive.microsoft.com")
}
