use oembed_client::{MetadataSource, OembedClient, OembedClientConfig};
use preview_core::Platform;
use wiremock::MockServer;

#[tokio::test]
async fn scratch_show_reason() {
    let dead_uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let config = OembedClientConfig::new()
        .with_timeout(std::time::Duration::from_secs(2))
        .with_endpoint_override(format!("{}/oembed", dead_uri));
    let client = OembedClient::new(config);

    let result = client
        .fetch_metadata("https://www.youtube.com/watch?v=abc", Platform::YouTube)
        .await;

    eprintln!("available={} reason={:?}", result.is_available(), result.failure_reason());
}
