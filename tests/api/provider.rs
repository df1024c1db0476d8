//! tests/api/provider.rs
use crate::helpers::setup_tracing;
use claims::assert_matches;
use std::time::Duration;
use wordfreq::error::PipelineError;
use wordfreq::provider::{HttpTextProvider, TextProvider};

#[tokio::test]
async fn should_report_the_input_as_unavailable_when_the_host_is_unreachable() {
    setup_tracing();
    // Port 9 (discard) is not serving HTTP; the connection fails immediately.
    let provider = HttpTextProvider::new("http://127.0.0.1:9/", Duration::from_secs(2))
        .expect("Failed to build provider");

    let result = provider.fetch().await;

    assert_matches!(result, Err(PipelineError::InputUnavailable(_)));
}
