use async_trait::async_trait;
use bytes::Bytes;
use http::Request;
use oauthsign_core::{Context, Error, Result, SignRequest, SigningCredential};

use crate::credential::Credential;
use crate::request::{copy_request, SignableRequest};
use crate::service::Service;

#[async_trait]
impl SignRequest for Service {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &Request<Bytes>,
        credential: Option<&Self::Credential>,
    ) -> Result<Request<Bytes>> {
        let Some(cred) = credential.filter(|c| c.is_valid()) else {
            return Err(Error::credential_invalid(
                "a consumer key is required to sign the request",
            ));
        };

        let signable = SignableRequest::new(copy_request(req))?;
        let signed = self.authorize_request(&signable, &cred.consumer, cred.token.as_ref())?;

        signed
            .into_authorized_request()
            .ok_or_else(|| Error::unexpected("authorization strategy produced no request"))
    }
}
