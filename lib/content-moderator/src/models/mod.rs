//! Data transfer objects exchanged with the moderation service.
//!
//! Response fields are optional: the service omits fields freely, and a missing
//! field must not fail a whole response.

mod common;
pub use self::common::{BodyModel, KeyValuePair, Status};

mod image;
pub use self::image::{Candidate, Evaluate, Face, FoundFaces, Match, MatchResponse, Ocr};

mod text;
pub use self::text::{
    Address, Classification, ClassificationCategory, DetectedLanguage, DetectedTerms, Email, Ipa,
    Phone, Pii, Screen, Ssn,
};

mod lists;
pub use self::lists::{
    Image, ImageIds, ImageList, ListMetadata, RefreshIndex, TermList, Terms, TermsData,
    TermsInList, TermsPaging,
};

mod reviews;
pub use self::reviews::{
    Content, CreateReviewBodyItem, CreateVideoReviewsBodyItem, Frame, Frames, Job,
    JobExecutionReportDetails, JobId, Review, TranscriptModerationBodyItem, TranscriptTerm,
    VideoFrameBodyItem, VideoFramesItem,
};
