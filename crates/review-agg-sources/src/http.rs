use reqwest::Client;
use std::time::Duration;

/// Build the shared HTTP client with an explicit timeout. A timed-out
/// request surfaces as an error in the api layer and degrades to an empty
/// snapshot in the client, same as any other upstream failure.
pub(crate) fn create_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
