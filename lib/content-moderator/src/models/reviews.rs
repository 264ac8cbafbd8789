use serde::{Deserialize, Serialize};

use super::KeyValuePair;

/// A human review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    /// Id of the review.
    pub review_id: Option<String>,
    /// Team the review is assigned to.
    pub sub_team: Option<String>,
    /// Status of the review.
    pub status: Option<String>,
    /// Tags set by the reviewer.
    #[serde(default)]
    pub reviewer_result_tags: Vec<KeyValuePair>,
    /// Creator of the review.
    pub created_by: Option<String>,
    /// Metadata of the review.
    #[serde(default)]
    pub metadata: Vec<KeyValuePair>,
    /// Type of the reviewed content.
    #[serde(rename = "Type")]
    pub content_type: Option<String>,
    /// The reviewed content.
    pub content: Option<String>,
    /// Id of the reviewed content.
    pub content_id: Option<String>,
    /// Endpoint called back when the review completes.
    pub callback_endpoint: Option<String>,
}

/// One step of a job execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobExecutionReportDetails {
    /// Timestamp.
    pub ts: Option<String>,
    /// Message.
    pub msg: Option<String>,
}

/// A moderation job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    /// Id of the job.
    pub id: Option<String>,
    /// Team owning the job.
    pub team_name: Option<String>,
    /// Status of the job.
    pub status: Option<String>,
    /// Workflow run by the job.
    pub workflow_id: Option<String>,
    /// Type of the moderated content.
    #[serde(rename = "Type")]
    pub content_type: Option<String>,
    /// Endpoint called back when the job completes.
    pub call_back_endpoint: Option<String>,
    /// Review created by the job, if any.
    pub review_id: Option<String>,
    /// Results of the workflow.
    #[serde(default)]
    pub result_meta_data: Vec<KeyValuePair>,
    /// Execution steps.
    #[serde(default)]
    pub job_execution_report: Vec<JobExecutionReportDetails>,
}

impl Job {
    /// True once the job left its pending and running states.
    pub fn is_finished(&self) -> bool {
        !matches!(
            self.status.as_deref(),
            None | Some("Pending" | "InProgress" | "Running")
        )
    }
}

/// Id of a created job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobId {
    /// Id of the job.
    pub job_id: Option<String>,
}

/// Content moderated by a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// The content, or its URL.
    pub content_value: String,
}

impl Content {
    /// Creates the content.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            content_value: value.into(),
        }
    }
}

/// A review to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReviewBodyItem {
    /// Type of the content, `Image` or `Text`.
    #[serde(rename = "Type")]
    pub content_type: String,
    /// The content, or its URL.
    pub content: String,
    /// Id of the content.
    pub content_id: String,
    /// Endpoint called back when the review completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_endpoint: Option<String>,
    /// Metadata of the review.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<KeyValuePair>,
}

/// A frame of a video review to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoFramesItem {
    /// Id of the frame.
    pub id: String,
    /// Timestamp of the frame.
    pub timestamp: i64,
    /// URL of the frame image.
    pub frame_image: String,
    /// Tags set by the reviewer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewer_result_tags: Vec<KeyValuePair>,
    /// Metadata of the frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<KeyValuePair>,
}

/// A video review to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVideoReviewsBodyItem {
    /// Frames to review.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_frames: Vec<VideoFramesItem>,
    /// Metadata of the review.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<KeyValuePair>,
    /// URL of the video.
    pub content: String,
    /// Id of the video.
    pub content_id: String,
    /// Status of the review, `Complete`, `Pending` or `Unpublished`.
    pub status: String,
    /// Timescale of the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timescale: Option<i32>,
    /// Endpoint called back when the review completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_endpoint: Option<String>,
}

/// A frame added to a video review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoFrameBodyItem {
    /// Timestamp of the frame.
    pub timestamp: String,
    /// URL of the frame image.
    pub frame_image: String,
    /// Tags set by the reviewer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewer_result_tags: Vec<KeyValuePair>,
    /// Metadata of the frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<KeyValuePair>,
}

/// A term found in a video transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptTerm {
    /// Position of the term.
    pub index: i32,
    /// The term.
    pub term: String,
}

/// Moderation result of a transcript segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptModerationBodyItem {
    /// Timestamp of the segment.
    pub timestamp: String,
    /// Terms found in the segment.
    pub terms: Vec<TranscriptTerm>,
}

/// A frame of a video review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Frame {
    /// Timestamp of the frame.
    pub timestamp: Option<String>,
    /// URL of the frame image.
    pub frame_image: Option<String>,
    /// Metadata of the frame.
    #[serde(default)]
    pub metadata: Vec<KeyValuePair>,
    /// Tags set by the reviewer.
    #[serde(default)]
    pub reviewer_result_tags: Vec<KeyValuePair>,
}

/// The frames of a video review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Frames {
    /// Id of the review.
    pub review_id: Option<String>,
    /// The frames.
    #[serde(default)]
    pub video_frames: Vec<Frame>,
}
