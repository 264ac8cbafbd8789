//! Text moderation.

use contentmod_core::{
    BodySpec, HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind,
    typed_operations,
};

use super::CONTENT_TYPE;
use crate::models::{DetectedLanguage, Screen};

const TEXT_CONTENT: BodySpec = BodySpec::raw("textContent", "text/plain");

/// Screens a text for profanity, personal data and list terms.
pub const SCREEN_TEXT: OperationDescriptor = OperationDescriptor {
    id: "TextModeration_ScreenText",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessText/Screen/",
    parameters: &[
        ParameterSpec::query("language", ValueKind::String),
        ParameterSpec::query("autocorrect", ValueKind::Boolean),
        ParameterSpec::query("PII", ValueKind::Boolean),
        ParameterSpec::query("listId", ValueKind::String),
        ParameterSpec::query("classify", ValueKind::Boolean),
        CONTENT_TYPE,
    ],
    body: Some(TEXT_CONTENT),
    responses: &[ResponseSpec::json(200, "Screen")],
    ..OperationDescriptor::DEFAULT
};

/// Detects the language of a text.
pub const DETECT_LANGUAGE: OperationDescriptor = OperationDescriptor {
    id: "TextModeration_DetectLanguage",
    method: HttpVerb::Post,
    path: "contentmoderator/moderate/v1.0/ProcessText/DetectLanguage",
    parameters: &[CONTENT_TYPE],
    body: Some(TEXT_CONTENT),
    responses: &[ResponseSpec::json(200, "DetectedLanguage")],
    ..OperationDescriptor::DEFAULT
};

typed_operations! {
    /// Text moderation operations.
    pub struct TextModeration {
        /// Screens a text; `language`, `autocorrect`, `PII`, `listId` and `classify`
        /// are optional arguments of the returned call.
        fn screen_text(text_content_type)
            with text(text_content: impl Into<String>) -> Screen = SCREEN_TEXT;
        /// Detects the language of a text.
        fn detect_language(text_content_type)
            with text(text_content: impl Into<String>) -> DetectedLanguage = DETECT_LANGUAGE;
    }
}
