//! Image moderation: faces, text, adult content and list matches.
//!
//! Each evaluation exists in three flavours: on the last cached image, on an
//! uploaded image (`*_file_input`) and on an image URL (`*_url_input`).

use contentmod_core::{
    Bytes, HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind,
    typed_operations,
};

use super::{CACHE_IMAGE, CONTENT_TYPE, IMAGE_STREAM, IMAGE_URL};
use crate::models::{BodyModel, Evaluate, FoundFaces, MatchResponse, Ocr};

const OCR_LANGUAGE: ParameterSpec = ParameterSpec::query("language", ValueKind::String).required();
const ENHANCED: ParameterSpec = ParameterSpec::query("enhanced", ValueKind::Boolean);
const LIST_ID: ParameterSpec = ParameterSpec::query("listId", ValueKind::String);

/// Finds faces in the last cached image.
pub const FIND_FACES: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_FindFaces",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessImage/FindFaces",
    parameters: &[CACHE_IMAGE],
    responses: &[ResponseSpec::json(200, "FoundFaces")],
    ..OperationDescriptor::DEFAULT
};

/// Finds faces in an uploaded image.
pub const FIND_FACES_FILE_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_FindFacesFileInput",
    parameters: &[CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_STREAM),
    ..FIND_FACES
};

/// Finds faces in an image referenced by URL.
pub const FIND_FACES_URL_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_FindFacesUrlInput",
    parameters: &[CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_URL),
    ..FIND_FACES
};

/// Reads the text of the last cached image.
pub const OCR: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_OCRMethod",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessImage/OCR",
    parameters: &[OCR_LANGUAGE, CACHE_IMAGE, ENHANCED],
    responses: &[ResponseSpec::json(200, "OCR")],
    ..OperationDescriptor::DEFAULT
};

/// Reads the text of an uploaded image.
pub const OCR_FILE_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_OCRFileInput",
    parameters: &[OCR_LANGUAGE, CACHE_IMAGE, ENHANCED, CONTENT_TYPE],
    body: Some(IMAGE_STREAM),
    ..OCR
};

/// Reads the text of an image referenced by URL.
pub const OCR_URL_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_OCRUrlInput",
    parameters: &[OCR_LANGUAGE, CACHE_IMAGE, ENHANCED, CONTENT_TYPE],
    body: Some(IMAGE_URL),
    ..OCR
};

/// Scores the last cached image for adult and racy content.
pub const EVALUATE: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_EvaluateMethod",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessImage/Evaluate",
    parameters: &[CACHE_IMAGE],
    responses: &[ResponseSpec::json(200, "Evaluate")],
    ..OperationDescriptor::DEFAULT
};

/// Scores an uploaded image for adult and racy content.
pub const EVALUATE_FILE_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_EvaluateFileInput",
    parameters: &[CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_STREAM),
    ..EVALUATE
};

/// Scores an image referenced by URL for adult and racy content.
pub const EVALUATE_URL_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_EvaluateUrlInput",
    parameters: &[CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_URL),
    ..EVALUATE
};

/// Matches the last cached image against image lists.
pub const MATCH: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_MatchMethod",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessImage/Match",
    parameters: &[LIST_ID, CACHE_IMAGE],
    responses: &[ResponseSpec::json(200, "MatchResponse")],
    ..OperationDescriptor::DEFAULT
};

/// Matches an uploaded image against image lists.
pub const MATCH_FILE_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_MatchFileInput",
    parameters: &[LIST_ID, CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_STREAM),
    ..MATCH
};

/// Matches an image referenced by URL against image lists.
pub const MATCH_URL_INPUT: OperationDescriptor = OperationDescriptor {
    id: "ImageModeration_MatchUrlInput",
    parameters: &[LIST_ID, CACHE_IMAGE, CONTENT_TYPE],
    body: Some(IMAGE_URL),
    ..MATCH
};

typed_operations! {
    /// Image moderation operations.
    ///
    /// Optional parameters (`CacheImage`, `enhanced`, `listId`) are set on the returned
    /// call with [`OperationCall::arg`](contentmod_core::OperationCall::arg).
    pub struct ImageModeration {
        /// Finds faces in the last cached image.
        fn find_faces() -> FoundFaces = FIND_FACES;
        /// Finds faces in an uploaded image.
        fn find_faces_file_input(content_type)
            with bytes(image_stream: impl Into<Bytes>) -> FoundFaces = FIND_FACES_FILE_INPUT;
        /// Finds faces in an image referenced by URL.
        fn find_faces_url_input(content_type)
            with json(image_url: &BodyModel) -> FoundFaces = FIND_FACES_URL_INPUT;
        /// Reads the text of the last cached image.
        fn ocr(language) -> Ocr = OCR;
        /// Reads the text of an uploaded image.
        fn ocr_file_input(language, content_type)
            with bytes(image_stream: impl Into<Bytes>) -> Ocr = OCR_FILE_INPUT;
        /// Reads the text of an image referenced by URL.
        fn ocr_url_input(language, content_type)
            with json(image_url: &BodyModel) -> Ocr = OCR_URL_INPUT;
        /// Scores the last cached image.
        fn evaluate() -> Evaluate = EVALUATE;
        /// Scores an uploaded image.
        fn evaluate_file_input(content_type)
            with bytes(image_stream: impl Into<Bytes>) -> Evaluate = EVALUATE_FILE_INPUT;
        /// Scores an image referenced by URL.
        fn evaluate_url_input(content_type)
            with json(image_url: &BodyModel) -> Evaluate = EVALUATE_URL_INPUT;
        /// Matches the last cached image against the image lists.
        fn match_image() -> MatchResponse = MATCH;
        /// Matches an uploaded image against the image lists.
        fn match_file_input(content_type)
            with bytes(image_stream: impl Into<Bytes>) -> MatchResponse = MATCH_FILE_INPUT;
        /// Matches an image referenced by URL against the image lists.
        fn match_url_input(content_type)
            with json(image_url: &BodyModel) -> MatchResponse = MATCH_URL_INPUT;
    }
}
