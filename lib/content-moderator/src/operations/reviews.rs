//! Human reviews, moderation jobs and video reviews.

use contentmod_core::{
    BodySpec, Bytes, HttpVerb, InvokeError, Multipart, OperationDescriptor, ParameterSpec,
    ResponseSpec, ValueKind, typed_operations,
};

use super::CONTENT_TYPE;
use crate::models::{
    Content, CreateReviewBodyItem, CreateVideoReviewsBodyItem, Frames, Job, JobId, Review,
    TranscriptModerationBodyItem, VideoFrameBodyItem,
};

const TEAM_NAME: ParameterSpec = ParameterSpec::path("teamName");
const REVIEW_ID: ParameterSpec = ParameterSpec::path("reviewId");
const SUB_TEAM: ParameterSpec = ParameterSpec::query("subTeam", ValueKind::String);
const TIMESCALE: ParameterSpec = ParameterSpec::query("timescale", ValueKind::Integer);

const REVIEWS_PATH: &str = "contentmoderator/review/v1.0/teams/{teamName}/reviews";
const FRAMES_PATH: &str = "contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}/frames";

/// Returns a review.
pub const GET_REVIEW: OperationDescriptor = OperationDescriptor {
    id: "Reviews_GetReview",
    method: HttpVerb::Get,
    path: "contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}",
    parameters: &[TEAM_NAME, REVIEW_ID],
    responses: &[ResponseSpec::json(200, "Review")],
    ..OperationDescriptor::DEFAULT
};

/// Returns the details of a job.
pub const GET_JOB_DETAILS: OperationDescriptor = OperationDescriptor {
    id: "Reviews_GetJobDetails",
    method: HttpVerb::Get,
    path: "contentmoderator/review/v1.0/teams/{teamName}/jobs/{JobId}",
    parameters: &[TEAM_NAME, ParameterSpec::path("JobId")],
    responses: &[ResponseSpec::json(200, "Job")],
    ..OperationDescriptor::DEFAULT
};

/// Creates image or text reviews, returns their ids.
pub const CREATE_REVIEWS: OperationDescriptor = OperationDescriptor {
    id: "Reviews_CreateReviews",
    method: HttpVerb::Post,
    path: REVIEWS_PATH,
    parameters: &[
        TEAM_NAME,
        ParameterSpec::header("UrlContentType").required(),
        SUB_TEAM,
    ],
    body: Some(BodySpec::json("createReviewBody")),
    responses: &[ResponseSpec::json(200, "[String]")],
    ..OperationDescriptor::DEFAULT
};

/// Starts a moderation job, returns its id.
pub const CREATE_JOB: OperationDescriptor = OperationDescriptor {
    id: "Reviews_CreateJob",
    method: HttpVerb::Post,
    path: "contentmoderator/review/v1.0/teams/{teamName}/jobs",
    parameters: &[
        TEAM_NAME,
        ParameterSpec::query("ContentType", ValueKind::String).required(),
        ParameterSpec::query("ContentId", ValueKind::String).required(),
        ParameterSpec::query("WorkflowName", ValueKind::String).required(),
        ParameterSpec::query("CallBackEndpoint", ValueKind::String),
        CONTENT_TYPE,
    ],
    body: Some(BodySpec::json("content")),
    responses: &[ResponseSpec::json(200, "JobId")],
    ..OperationDescriptor::DEFAULT
};

/// Adds the frames of the last cached video to a review.
pub const ADD_VIDEO_FRAME: OperationDescriptor = OperationDescriptor {
    id: "Reviews_AddVideoFrame",
    method: HttpVerb::Post,
    path: FRAMES_PATH,
    parameters: &[TEAM_NAME, REVIEW_ID, TIMESCALE],
    responses: &[ResponseSpec::empty(204)],
    ..OperationDescriptor::DEFAULT
};

/// Returns the frames of a video review.
pub const GET_VIDEO_FRAMES: OperationDescriptor = OperationDescriptor {
    id: "Reviews_GetVideoFrames",
    method: HttpVerb::Get,
    path: FRAMES_PATH,
    parameters: &[
        TEAM_NAME,
        REVIEW_ID,
        ParameterSpec::query("startSeed", ValueKind::Integer),
        ParameterSpec::query("noOfRecords", ValueKind::Integer),
        ParameterSpec::query("filter", ValueKind::String),
    ],
    responses: &[ResponseSpec::json(200, "Frames")],
    ..OperationDescriptor::DEFAULT
};

/// Publishes a video review.
pub const PUBLISH_VIDEO_REVIEW: OperationDescriptor = OperationDescriptor {
    id: "Reviews_PublishVideoReview",
    method: HttpVerb::Post,
    path: "contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}/publish",
    parameters: &[TEAM_NAME, REVIEW_ID],
    responses: &[ResponseSpec::empty(204)],
    ..OperationDescriptor::DEFAULT
};

/// Attaches transcript moderation results to a video review.
pub const ADD_VIDEO_TRANSCRIPT_MODERATION_RESULT: OperationDescriptor = OperationDescriptor {
    id: "Reviews_AddVideoTranscriptModerationResult",
    method: HttpVerb::Put,
    path: "contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}/transcriptmoderationresult",
    parameters: &[TEAM_NAME, REVIEW_ID, CONTENT_TYPE],
    body: Some(BodySpec::json("transcriptModerationBody")),
    responses: &[ResponseSpec::empty(204)],
    ..OperationDescriptor::DEFAULT
};

/// Attaches a WebVTT transcript to a video review.
pub const ADD_VIDEO_TRANSCRIPT: OperationDescriptor = OperationDescriptor {
    id: "Reviews_AddVideoTranscript",
    method: HttpVerb::Put,
    path: "contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}/transcript",
    parameters: &[TEAM_NAME, REVIEW_ID],
    body: Some(BodySpec::raw("vTTfile", "text/plain")),
    responses: &[ResponseSpec::empty(204)],
    ..OperationDescriptor::DEFAULT
};

/// Creates video reviews, returns their ids.
pub const CREATE_VIDEO_REVIEWS: OperationDescriptor = OperationDescriptor {
    id: "Reviews_CreateVideoReviews",
    method: HttpVerb::Post,
    path: REVIEWS_PATH,
    parameters: &[TEAM_NAME, CONTENT_TYPE, SUB_TEAM],
    body: Some(BodySpec::json("createVideoReviewsBody")),
    responses: &[ResponseSpec::json(200, "[String]")],
    ..OperationDescriptor::DEFAULT
};

/// Adds frames referenced by URL to a video review.
pub const ADD_VIDEO_FRAME_URL: OperationDescriptor = OperationDescriptor {
    id: "Reviews_AddVideoFrameUrl",
    parameters: &[TEAM_NAME, REVIEW_ID, CONTENT_TYPE, TIMESCALE],
    body: Some(BodySpec::json("videoFrameBody")),
    ..ADD_VIDEO_FRAME
};

/// Uploads zipped frames and their metadata to a video review.
///
/// The `content-type` comes from the multipart body, boundary included.
pub const ADD_VIDEO_FRAME_STREAM: OperationDescriptor = OperationDescriptor {
    id: "Reviews_AddVideoFrameStream",
    parameters: &[TEAM_NAME, REVIEW_ID, TIMESCALE],
    body: Some(BodySpec::multipart("frameImageZip")),
    ..ADD_VIDEO_FRAME
};

/// Builds the form sent by [`Reviews::add_video_frame_stream`]: the zipped frame
/// images and the JSON metadata of each frame.
///
/// # Errors
///
/// Returns [`InvokeError::Serialization`] when the metadata cannot be serialized.
pub fn video_frame_form(
    frame_image_zip: impl Into<Bytes>,
    frame_metadata: &[VideoFrameBodyItem],
) -> Result<Multipart, InvokeError> {
    let metadata = serde_json::to_string(frame_metadata)?;

    let form = Multipart::new()
        .bytes("frameImageZip", "frames.zip", "application/zip", frame_image_zip)
        .text("frameMetadata", metadata);
    Ok(form)
}

typed_operations! {
    /// Review, job and video review operations.
    pub struct Reviews {
        /// Returns a review.
        fn get_review(team_name, review_id) -> Review = GET_REVIEW;
        /// Returns the details of a job.
        fn get_job_details(team_name, job_id) -> Job = GET_JOB_DETAILS;
        /// Creates image or text reviews.
        fn create_reviews(team_name, url_content_type)
            with json(create_review_body: &[CreateReviewBodyItem]) -> Vec<String> = CREATE_REVIEWS;
        /// Starts a moderation job on a content.
        fn create_job(team_name, content_type, content_id, workflow_name, job_content_type)
            with json(content: &Content) -> JobId = CREATE_JOB;
        /// Adds the frames of the last cached video to a review.
        fn add_video_frame(team_name, review_id) -> () = ADD_VIDEO_FRAME;
        /// Returns the frames of a video review; `startSeed`, `noOfRecords` and `filter`
        /// are optional arguments.
        fn get_video_frames(team_name, review_id) -> Frames = GET_VIDEO_FRAMES;
        /// Publishes a video review.
        fn publish_video_review(team_name, review_id) -> () = PUBLISH_VIDEO_REVIEW;
        /// Attaches transcript moderation results to a video review.
        fn add_video_transcript_moderation_result(team_name, review_id, content_type)
            with json(transcript_moderation_body: &[TranscriptModerationBodyItem])
            -> () = ADD_VIDEO_TRANSCRIPT_MODERATION_RESULT;
        /// Attaches a WebVTT transcript to a video review.
        fn add_video_transcript(team_name, review_id)
            with bytes(vtt_file: impl Into<Bytes>) -> () = ADD_VIDEO_TRANSCRIPT;
        /// Creates video reviews.
        fn create_video_reviews(team_name, content_type)
            with json(create_video_reviews_body: &[CreateVideoReviewsBodyItem])
            -> Vec<String> = CREATE_VIDEO_REVIEWS;
        /// Adds frames referenced by URL to a video review.
        fn add_video_frame_url(team_name, review_id, content_type)
            with json(video_frame_body: &[VideoFrameBodyItem]) -> () = ADD_VIDEO_FRAME_URL;
        /// Uploads zipped frames to a video review, see [`video_frame_form`].
        fn add_video_frame_stream(team_name, review_id)
            with multipart(form: Multipart) -> () = ADD_VIDEO_FRAME_STREAM;
    }
}
