//! Nonce and timestamp generators.
//!
//! Both are injected into [`crate::Service`] so that tests and replay tooling
//! can pin their values.

use std::fmt::Debug;

use oauthsign_core::time::{now, unix_timestamp};
use rand::Rng;

/// GenerateNonce creates a fresh, unpredictable nonce for every request.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Create a new nonce.
    fn create(&self) -> String;
}

/// GenerateTimestamp returns the signing time as POSIX seconds.
pub trait GenerateTimestamp: Debug + Send + Sync + 'static {
    /// Create a new timestamp.
    fn create(&self) -> i64;
}

/// RandomNonce is the default nonce generator: 16 random bytes, hex encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl GenerateNonce for RandomNonce {
    fn create(&self) -> String {
        let bytes: [u8; 16] = rand::thread_rng().gen();
        hex::encode(bytes)
    }
}

/// SystemTimestamp is the default timestamp generator, backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimestamp;

impl GenerateTimestamp for SystemTimestamp {
    fn create(&self) -> i64 {
        unix_timestamp(now())
    }
}

/// StaticNonce always returns the same nonce.
///
/// # Note
///
/// A repeated nonce lets servers reject the request as a replay. Only use
/// this for testing or for reproducing a known signature.
#[derive(Debug, Clone)]
pub struct StaticNonce(String);

impl StaticNonce {
    /// Create a new StaticNonce.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl GenerateNonce for StaticNonce {
    fn create(&self) -> String {
        self.0.clone()
    }
}

/// StaticTimestamp always returns the same timestamp.
#[derive(Debug, Clone, Copy)]
pub struct StaticTimestamp(i64);

impl StaticTimestamp {
    /// Create a new StaticTimestamp.
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl GenerateTimestamp for StaticTimestamp {
    fn create(&self) -> i64 {
        self.0
    }
}
