#![allow(missing_docs)]

use std::time::Duration;

use content_moderator::models::Job;
use contentmod_core::mock::MockTransport;
use contentmod_core::{BlockingRuntime, CancellationToken, InvokeError};
use rstest::rstest;
use tokio::time::Instant;

mod common;
pub use self::common::*;

const RUNNING: &str = r#"{"Id": "2018", "Status": "InProgress"}"#;
const COMPLETE: &str = r#"{
    "Id": "2018",
    "Status": "Complete",
    "ReviewId": "201712i46950138c61a4740b118a43cac33f434",
    "ResultMetaData": [{"Key": "hasText", "Value": "False"}]
}"#;

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_poll_job_until_finished(transport: MockTransport) -> anyhow::Result<()> {
    let transport = transport
        .respond(200, RUNNING)
        .respond(200, RUNNING)
        .respond(200, COMPLETE);
    let moderator = moderator(&transport);
    let start = Instant::now();

    let job = moderator
        .reviews()
        .get_job_details("team", "2018")
        .poll_until(Job::is_finished)
        .await?;

    assert_eq!(job.status.as_deref(), Some("Complete"));
    assert_eq!(job.result_meta_data.len(), 1);
    assert_eq!(transport.call_count(), 3);
    assert!(start.elapsed() >= Duration::from_secs(10));
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_poll_job_cancelled_between_polls(transport: MockTransport) {
    let transport = transport.respond(200, RUNNING).respond(200, RUNNING);
    let moderator = moderator(&transport);
    let cancel = CancellationToken::new();

    let poll = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            moderator
                .reviews()
                .get_job_details("team", "2018")
                .with_cancellation(cancel)
                .poll_until(Job::is_finished)
                .await
        }
    });

    tokio::time::sleep(Duration::from_secs(1)).await;
    cancel.cancel();
    let result = poll.await.expect("the poll task completes");

    assert!(matches!(result, Err(InvokeError::Cancelled)));
    assert_eq!(transport.call_count(), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_poll_job_stops_on_error(transport: MockTransport) {
    let transport = transport
        .respond(200, RUNNING)
        .respond(404, r#"{"Error": {"Code": "NotFound", "Message": "job not found"}}"#);
    let moderator = moderator(&transport);

    let error = moderator
        .reviews()
        .get_job_details("team", "2018")
        .poll_until(Job::is_finished)
        .await
        .expect_err("the second poll fails");

    assert_eq!(error.status(), Some(404));
    assert_eq!(transport.call_count(), 2);
}

#[rstest]
fn test_blocking_adapter(transport: MockTransport) -> anyhow::Result<()> {
    let transport = transport.respond(200, COMPLETE).respond(204, "");
    let moderator = moderator(&transport);
    let runtime = BlockingRuntime::new()?;

    let job = runtime.block_on(moderator.reviews().get_job_details("team", "2018"))?;
    runtime.block_on(moderator.reviews().publish_video_review("team", "review"))?;

    assert!(job.is_finished());
    assert_eq!(
        transport.requests()[1].url().path(),
        "/contentmoderator/review/v1.0/teams/team/reviews/review/publish"
    );
    Ok(())
}
