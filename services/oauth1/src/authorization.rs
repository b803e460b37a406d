//! Authorization strategies render signed protocol parameters onto the request.
//!
//! - [RFC 5849 Section 3.5](https://datatracker.ietf.org/doc/html/rfc5849#section-3.5)

use std::fmt::Debug;
use std::fmt::Write;
use std::str::FromStr;

use http::header::AUTHORIZATION;
use http::uri::PathAndQuery;
use http::HeaderValue;
use http::Uri;
use oauthsign_core::Result;

use crate::encode::{percent_decode, percent_encode};
use crate::request::SignableRequest;

/// AuthorizationStrategy builds the authorized request out of a fully signed
/// [`SignableRequest`] and stores it back via
/// [`SignableRequest::set_authorized_request`].
pub trait AuthorizationStrategy: Debug + Send + Sync + 'static {
    /// Apply the protocol parameters to a copy of the original request.
    fn apply_to(&self, req: &mut SignableRequest) -> Result<()>;
}

/// HeaderStrategy sends protocol parameters in the `Authorization` header.
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", ..., oauth_version="1.0"
/// ```
#[derive(Debug, Default, Clone)]
pub struct HeaderStrategy {
    realm: Option<String>,
}

impl HeaderStrategy {
    /// Create a new HeaderStrategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `realm="..."` in front of the protocol parameters.
    ///
    /// The realm is not covered by the signature.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Render the `Authorization` header value for the given request.
    pub fn header_value(&self, req: &SignableRequest) -> Result<String> {
        let mut s = String::from("OAuth ");

        let mut first = true;
        if let Some(realm) = &self.realm {
            write!(s, "realm=\"{}\"", percent_encode(realm))?;
            first = false;
        }
        for (k, v) in req.oauth() {
            if !first {
                s.push_str(", ");
            }
            first = false;

            write!(s, "{}=\"{}\"", percent_encode(k), percent_encode(v))?;
        }

        Ok(s)
    }
}

impl AuthorizationStrategy for HeaderStrategy {
    fn apply_to(&self, req: &mut SignableRequest) -> Result<()> {
        let mut value = HeaderValue::from_str(&self.header_value(req)?)?;
        value.set_sensitive(true);

        let mut authorized = req.copy_original();
        authorized.headers_mut().insert(AUTHORIZATION, value);
        req.set_authorized_request(authorized);

        Ok(())
    }
}

/// QueryStrategy appends protocol parameters to the request URI query.
///
/// Existing query parameters are kept in front, unchanged, except the ones
/// named like a protocol parameter being appended, which are replaced.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryStrategy;

impl QueryStrategy {
    /// Create a new QueryStrategy.
    pub fn new() -> Self {
        Self
    }
}

impl AuthorizationStrategy for QueryStrategy {
    fn apply_to(&self, req: &mut SignableRequest) -> Result<()> {
        let mut authorized = req.copy_original();

        let mut pairs: Vec<String> = authorized
            .uri()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
                !req.oauth().contains_key(&percent_decode(key))
            })
            .map(str::to_string)
            .collect();
        for (k, v) in req.oauth() {
            pairs.push(format!("{}={}", percent_encode(k), percent_encode(v)));
        }

        let mut paq = authorized.uri().path().to_string();
        write!(paq, "?{}", pairs.join("&"))?;

        let mut parts = authorized.uri().clone().into_parts();
        parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);
        *authorized.uri_mut() = Uri::from_parts(parts)?;

        req.set_authorized_request(authorized);
        Ok(())
    }
}
