mod strategies;
mod twitter;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Request;
use oauthsign_oauth1::{Service, StaticNonce, StaticTimestamp};

/// Initialize test environment
pub fn init_signing_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a service with pinned nonce and timestamp.
pub fn pinned_service(nonce: &str, timestamp: i64) -> Service {
    Service::new()
        .with_nonce(StaticNonce::new(nonce))
        .with_timestamp(StaticTimestamp::new(timestamp))
}

/// Build a form encoded POST request.
pub fn form_request(uri: &str, body: &'static str) -> Request<Bytes> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Bytes::from_static(body.as_bytes()))
        .expect("request must be valid")
}
