use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use oauthsign_core::Result;

use crate::authorization::{AuthorizationStrategy, HeaderStrategy};
use crate::constants::*;
use crate::credential::{Consumer, Token};
use crate::encode::percent_encode;
use crate::generator::{GenerateNonce, GenerateTimestamp, RandomNonce, SystemTimestamp};
use crate::request::SignableRequest;
use crate::signature::{HmacSha1, SignatureMethod};

/// Service signs requests with OAuth 1.0a.
///
/// All collaborators are configuration: they are set once while building the
/// service and only read afterwards, so one service can sign many requests
/// concurrently.
///
/// - [RFC 5849 Section 3](https://datatracker.ietf.org/doc/html/rfc5849#section-3)
#[derive(Debug, Clone)]
pub struct Service {
    signature_method: Arc<dyn SignatureMethod>,
    nonce: Arc<dyn GenerateNonce>,
    timestamp: Arc<dyn GenerateTimestamp>,
    authorization: Arc<dyn AuthorizationStrategy>,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            signature_method: Arc::new(HmacSha1),
            nonce: Arc::new(RandomNonce),
            timestamp: Arc::new(SystemTimestamp),
            authorization: Arc::new(HeaderStrategy::new()),
        }
    }
}

impl Service {
    /// Create a new service with HMAC-SHA1, random nonces, the system clock
    /// and header authorization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signature method.
    pub fn with_signature_method(mut self, method: impl SignatureMethod) -> Self {
        self.signature_method = Arc::new(method);
        self
    }

    /// Set the nonce generator.
    pub fn with_nonce(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Set the timestamp generator.
    pub fn with_timestamp(mut self, timestamp: impl GenerateTimestamp) -> Self {
        self.timestamp = Arc::new(timestamp);
        self
    }

    /// Set the authorization strategy.
    pub fn with_authorization_strategy(mut self, strategy: impl AuthorizationStrategy) -> Self {
        self.authorization = Arc::new(strategy);
        self
    }

    /// Sign `request` and return a new signable request carrying the
    /// authorized request.
    ///
    /// The input request is left untouched. Protocol parameters already set on
    /// it, such as `oauth_callback`, are carried over and signed.
    pub fn authorize_request(
        &self,
        request: &SignableRequest,
        consumer: &Consumer,
        token: Option<&Token>,
    ) -> Result<SignableRequest> {
        let mut req = request.fork();
        req.oauth_remove(OAUTH_SIGNATURE);

        req.oauth_set(OAUTH_CONSUMER_KEY, &consumer.key);
        req.oauth_set(OAUTH_NONCE, self.nonce.create());
        req.oauth_set(OAUTH_SIGNATURE_METHOD, self.signature_method.method_name());
        req.oauth_set(OAUTH_TIMESTAMP, self.timestamp.create().to_string());
        if let Some(token) = token.filter(|t| !t.value.is_empty()) {
            req.oauth_set(OAUTH_TOKEN, &token.value);
        }
        req.oauth_set(OAUTH_VERSION, OAUTH_VERSION_1_0);

        let params = signing_parameters(&req)?;
        debug!(
            "signing request with {}, {} parameters",
            self.signature_method.method_name(),
            params.len()
        );

        let base_string = signature_base_string(req.verb(), &req.base_url(), &params);
        debug!("calculated signature base string: {base_string}");

        let signature = self
            .signature_method
            .with_key(
                &consumer.secret,
                token.map(|t| t.secret.as_str()).unwrap_or_default(),
            )?
            .signature_of(&base_string)?;
        req.oauth_set(OAUTH_SIGNATURE, signature);

        self.authorization.apply_to(&mut req)?;
        Ok(req)
    }
}

/// Collect query, body and protocol parameters with keys and values encoded.
///
/// Duplicate keys keep the last value: body parameters override query
/// parameters and protocol parameters override both, so the values sent as
/// protocol parameters are the ones signed. `oauth_signature` is never part of
/// the set, whatever its source.
///
/// - [RFC 5849 Section 3.4.1.3.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.1)
fn signing_parameters(req: &SignableRequest) -> Result<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    let oauth = req
        .oauth()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()));
    for (k, v) in req.query().into_iter().chain(req.body()?).chain(oauth) {
        if k == OAUTH_SIGNATURE {
            continue;
        }
        params.insert(percent_encode(&k), percent_encode(&v));
    }

    Ok(params)
}

/// `key=value` pairs joined by `&` in ascending key order.
///
/// - [RFC 5849 Section 3.4.1.3.2](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.2)
pub(crate) fn parameter_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `VERB&enc(base_url)&enc(parameter_string)`
///
/// - [RFC 5849 Section 3.4.1.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.1)
pub(crate) fn signature_base_string(
    verb: &str,
    base_url: &str,
    params: &BTreeMap<String, String>,
) -> String {
    format!(
        "{}&{}&{}",
        verb.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&parameter_string(params))
    )
}
