use crate::{Context, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// OAuth 1.0a requires a consumer key/secret pair and, after the token
/// handshake, a token value/secret pair.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request and return the authorized copy.
    ///
    /// ## Request
    ///
    /// The input request is never mutated. Implementations build a new request
    /// carrying the authorization data instead, so a failed signing attempt
    /// can't leave a half-signed request behind.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required by the signer to
    /// sign the request. Implementations should return an error if it's absent.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &http::Request<Bytes>,
        credential: Option<&Self::Credential>,
    ) -> Result<http::Request<Bytes>>;
}
