use std::fmt::{Debug, Formatter};

use oauthsign_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;
use crate::credential::{Consumer, Credential, Token};

/// Config carries all the configuration for OAuth 1.0a signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_TOKEN_SECRET`]
    pub token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }

        self
    }

    /// Build a credential out of this config.
    ///
    /// Consumer key and secret are required. A token is only attached when
    /// its value is set and non-empty; a missing token secret means empty.
    pub fn to_credential(&self) -> Result<Credential> {
        let (Some(key), Some(secret)) = (&self.consumer_key, &self.consumer_secret) else {
            return Err(Error::config_invalid(
                "consumer_key and consumer_secret are required",
            ));
        };

        let token = self
            .token
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| Token::new(v, self.token_secret.clone().unwrap_or_default()));

        Ok(Credential::new(Consumer::new(key, secret), token))
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}
