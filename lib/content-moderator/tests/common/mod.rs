use std::time::Duration;

use content_moderator::ContentModerator;
use contentmod_core::ClientConfig;
use contentmod_core::mock::MockTransport;
use rstest::fixture;
use tracing::info;

pub const BASE_URL: &str = "https://westus.api.cognitive.microsoft.com";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

pub fn config() -> ClientConfig {
    ClientConfig::builder()
        .with_base_url(BASE_URL)
        .with_long_running_operation_retry_timeout(Duration::from_secs(5))
        .build()
}

pub fn moderator(transport: &MockTransport) -> ContentModerator<MockTransport> {
    ContentModerator::with_transport(config(), transport.clone())
}

#[fixture]
pub fn transport() -> MockTransport {
    init_tracing();
    MockTransport::new()
}
