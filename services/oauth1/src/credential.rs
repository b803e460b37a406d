use std::fmt::{Debug, Formatter};

use oauthsign_core::{utils::Redact, SigningCredential};

/// Consumer identifies the client application by a key/secret pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Consumer {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub key: String,
    /// Consumer secret, only used to build the signing key.
    pub secret: String,
}

impl Consumer {
    /// Create a new consumer.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Consumer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer")
            .field("key", &self.key)
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// Token is the value/secret pair obtained from the request or access token handshake.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// Token value, sent as `oauth_token`.
    pub value: String,
    /// Token secret, only used to build the signing key.
    pub secret: String,
}

impl Token {
    /// Create a new token.
    pub fn new(value: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &Redact::from(&self.value))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// Credential for oauth 1.0a.
///
/// Token is absent while requesting the initial request token.
#[derive(Clone, Debug)]
pub struct Credential {
    /// The consumer credential.
    pub consumer: Consumer,
    /// The token credential, if any.
    pub token: Option<Token>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(consumer: Consumer, token: Option<Token>) -> Self {
        Self { consumer, token }
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer.key.is_empty()
    }
}
