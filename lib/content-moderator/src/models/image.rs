use serde::{Deserialize, Serialize};

use super::{KeyValuePair, Status};

/// Bounding box of a detected face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Face {
    /// Bottom edge.
    pub bottom: Option<i32>,
    /// Left edge.
    pub left: Option<i32>,
    /// Right edge.
    pub right: Option<i32>,
    /// Top edge.
    pub top: Option<i32>,
}

/// Result of a face detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoundFaces {
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
    /// Cache id of the image.
    pub cache_id: Option<String>,
    /// True when faces were found.
    pub result: Option<bool>,
    /// Number of faces found.
    pub count: Option<i32>,
    /// Advanced info.
    #[serde(default)]
    pub advanced_info: Vec<KeyValuePair>,
    /// The faces.
    #[serde(default)]
    pub faces: Vec<Face>,
}

/// Result of an adult and racy content evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Evaluate {
    /// Cache id of the image.
    #[serde(rename = "CacheID")]
    pub cache_id: Option<String>,
    /// Evaluation result.
    pub result: Option<bool>,
    /// Advanced info.
    #[serde(default)]
    pub advanced_info: Vec<KeyValuePair>,
    /// Adult classification score, between 0 and 1.
    pub adult_classification_score: Option<f64>,
    /// True when the image is classified as adult.
    pub is_image_adult_classified: Option<bool>,
    /// Racy classification score, between 0 and 1.
    pub racy_classification_score: Option<f64>,
    /// True when the image is classified as racy.
    pub is_image_racy_classified: Option<bool>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// One text candidate of an OCR result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candidate {
    /// Candidate text.
    pub text: Option<String>,
    /// Confidence, between 0 and 1.
    pub confidence: Option<f64>,
}

/// Result of an optical character recognition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ocr {
    /// Processing status.
    pub status: Option<Status>,
    /// Image metadata.
    #[serde(default)]
    pub metadata: Vec<KeyValuePair>,
    /// Tracking id.
    pub tracking_id: Option<String>,
    /// Cache id of the image.
    pub cache_id: Option<String>,
    /// Language of the text.
    pub language: Option<String>,
    /// The recognized text.
    pub text: Option<String>,
    /// Text candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One match of an image against a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Match {
    /// Match confidence.
    pub score: Option<f64>,
    /// Id of the matched image.
    pub match_id: Option<i32>,
    /// Source of the matched image.
    pub source: Option<String>,
    /// Tags of the matched image.
    #[serde(default)]
    pub tags: Vec<i32>,
    /// Label of the matched image.
    pub label: Option<String>,
}

/// Result of matching an image against image lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchResponse {
    /// Tracking id.
    pub tracking_id: Option<String>,
    /// Cache id of the image.
    #[serde(rename = "CacheID")]
    pub cache_id: Option<String>,
    /// True when at least one image matched.
    pub is_match: Option<bool>,
    /// The matches.
    #[serde(default)]
    pub matches: Vec<Match>,
    /// Processing status.
    pub status: Option<Status>,
}
