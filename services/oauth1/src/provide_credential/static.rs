use crate::credential::{Consumer, Credential, Token};
use async_trait::async_trait;
use oauthsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed consumer and, optionally, a fixed token.
///
/// Use it when the token handshake has already happened elsewhere and the
/// values are known up front.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    consumer: Consumer,
    token: Option<Token>,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with consumer key and consumer secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer: Consumer::new(consumer_key, consumer_secret),
            token: None,
        }
    }

    /// Set the token value and token secret.
    pub fn with_token(mut self, value: &str, secret: &str) -> Self {
        self.token = Some(Token::new(value, secret));
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            self.consumer.clone(),
            self.token.clone(),
        )))
    }
}
