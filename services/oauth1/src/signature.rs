//! Signature methods for OAuth 1.0a.
//!
//! - [RFC 5849 Section 3.4](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4)

use std::fmt::Debug;

use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::Result;

use crate::constants::{HMAC_SHA1, PLAINTEXT};
use crate::encode::percent_encode;

/// SignatureMethod computes `oauth_signature` over a signature base string.
///
/// A method is shared configuration and is used concurrently, so it never
/// stores key material. [`SignatureMethod::with_key`] returns a short-lived
/// [`Signature`] that owns the key for exactly one computation.
pub trait SignatureMethod: Debug + Send + Sync + 'static {
    /// Protocol identifier sent as `oauth_signature_method`.
    fn method_name(&self) -> &'static str;

    /// Bind consumer secret and token secret for the next signature.
    ///
    /// Fails with a signing error if the algorithm is unavailable or the key
    /// material is rejected.
    fn with_key(&self, consumer_secret: &str, token_secret: &str) -> Result<Box<dyn Signature>>;
}

/// Signature is a signature method bound to one key.
pub trait Signature: Send {
    /// Compute the signature over `base_string`, consuming the bound key.
    fn signature_of(self: Box<Self>, base_string: &str) -> Result<String>;
}

/// `percentEncode(consumer_secret) & percentEncode(token_secret)`, shared by
/// HMAC-SHA1 and PLAINTEXT.
fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// HMAC-SHA1 signature method.
///
/// - [RFC 5849 Section 3.4.2](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.2)
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacSha1;

impl SignatureMethod for HmacSha1 {
    fn method_name(&self) -> &'static str {
        HMAC_SHA1
    }

    fn with_key(&self, consumer_secret: &str, token_secret: &str) -> Result<Box<dyn Signature>> {
        Ok(Box::new(HmacSha1Signature {
            key: signing_key(consumer_secret, token_secret),
        }))
    }
}

struct HmacSha1Signature {
    key: String,
}

impl Signature for HmacSha1Signature {
    fn signature_of(self: Box<Self>, base_string: &str) -> Result<String> {
        base64_hmac_sha1(self.key.as_bytes(), base_string.as_bytes())
    }
}

/// PLAINTEXT signature method.
///
/// The signature is the signing key itself, this method relies on a secure
/// transport instead of a one-way function.
///
/// - [RFC 5849 Section 3.4.4](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.4)
#[derive(Debug, Default, Clone, Copy)]
pub struct Plaintext;

impl SignatureMethod for Plaintext {
    fn method_name(&self) -> &'static str {
        PLAINTEXT
    }

    fn with_key(&self, consumer_secret: &str, token_secret: &str) -> Result<Box<dyn Signature>> {
        Ok(Box::new(PlaintextSignature {
            key: signing_key(consumer_secret, token_secret),
        }))
    }
}

struct PlaintextSignature {
    key: String,
}

impl Signature for PlaintextSignature {
    fn signature_of(self: Box<Self>, _: &str) -> Result<String> {
        Ok(self.key)
    }
}
