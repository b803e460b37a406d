use crate::{config::Config, Credential};
use async_trait::async_trait;
use oauthsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads OAuth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`: The consumer key
/// - `OAUTH1_CONSUMER_SECRET`: The consumer secret
/// - `OAUTH1_TOKEN`: The token value (optional)
/// - `OAUTH1_TOKEN_SECRET`: The token secret (optional)
///
/// Fields already set on the base [`Config`] take precedence over the
/// environment.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    config: Config,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` as the base that environment values fill in.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let cfg = self.config.clone().from_env(ctx);
        if cfg.consumer_key.is_none() || cfg.consumer_secret.is_none() {
            return Ok(None);
        }

        cfg.to_credential().map(Some)
    }
}
