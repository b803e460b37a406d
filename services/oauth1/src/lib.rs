//! OAuth 1.0a request signing.
//!
//! This crate signs outgoing HTTP requests following
//! [RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849). It computes the
//! signature base string from the request method, URL, query and form body,
//! signs it with HMAC-SHA1 or PLAINTEXT and renders the protocol parameters
//! into an `Authorization` header or the query string.
//!
//! Token acquisition is not covered: callers bring their consumer key/secret
//! and, optionally, a token obtained elsewhere.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use oauthsign_core::{Context, OsEnv, Result, Signer};
//! use oauthsign_oauth1::{DefaultCredentialProvider, Service, StaticCredentialProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     let loader = DefaultCredentialProvider::new().push_front(
//!         StaticCredentialProvider::new("consumer_key", "consumer_secret")
//!             .with_token("token", "token_secret"),
//!     );
//!     let signer = Signer::new(ctx, loader, Service::new());
//!
//!     let req = http::Request::post("https://api.twitter.com/1/statuses/update.json")
//!         .header("content-type", "application/x-www-form-urlencoded")
//!         .body(Bytes::from_static(b"status=hello"))
//!         .unwrap();
//!
//!     let signed = signer.sign(&req).await?;
//!     println!("{:?}", signed.headers().get("authorization"));
//!     Ok(())
//! }
//! ```
//!
//! ## Signing without a Signer
//!
//! [`Service::authorize_request`] works on a [`SignableRequest`] directly,
//! which allows setting extra protocol parameters such as `oauth_callback`:
//!
//! ```no_run
//! use bytes::Bytes;
//! use oauthsign_oauth1::{Consumer, Service, SignableRequest};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let req = http::Request::post("https://api.twitter.com/oauth/request_token")
//!     .body(Bytes::new())
//!     .unwrap();
//! let mut req = SignableRequest::new(req)?;
//! req.oauth_set("oauth_callback", "oob");
//!
//! let signed = Service::new().authorize_request(&req, &Consumer::new("key", "secret"), None)?;
//! let authorized = signed.into_authorized_request();
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! export OAUTH1_CONSUMER_KEY=your-consumer-key
//! export OAUTH1_CONSUMER_SECRET=your-consumer-secret
//! export OAUTH1_TOKEN=your-token              # Optional
//! export OAUTH1_TOKEN_SECRET=your-token-secret  # Optional
//! ```

#![warn(missing_docs)]

mod constants;

mod encode;
pub use encode::percent_decode;
pub use encode::percent_encode;

mod config;
pub use config::Config;

mod credential;
pub use credential::Consumer;
pub use credential::Credential;
pub use credential::Token;

mod generator;
pub use generator::GenerateNonce;
pub use generator::GenerateTimestamp;
pub use generator::RandomNonce;
pub use generator::StaticNonce;
pub use generator::StaticTimestamp;
pub use generator::SystemTimestamp;

mod request;
pub use request::SignableRequest;

mod signature;
pub use signature::HmacSha1;
pub use signature::Plaintext;
pub use signature::Signature;
pub use signature::SignatureMethod;

mod authorization;
pub use authorization::AuthorizationStrategy;
pub use authorization::HeaderStrategy;
pub use authorization::QueryStrategy;

mod service;
pub use service::Service;

mod sign_request;

mod provide_credential;
pub use provide_credential::*;
