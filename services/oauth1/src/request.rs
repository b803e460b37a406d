use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Request;
use log::warn;
use oauthsign_core::{Error, Result};

use crate::constants::FORM_CONTENT_TYPE;
use crate::encode::percent_decode;

/// SignableRequest is the normalized view over an HTTP request that gets signed.
///
/// The original request is immutable and shared. Protocol parameters
/// (`oauth_*`) live in a sorted map next to it and the authorized request is
/// stored once signing completes.
#[derive(Debug)]
pub struct SignableRequest {
    original: Arc<Request<Bytes>>,
    oauth: BTreeMap<String, String>,
    authorized: Option<Request<Bytes>>,
}

impl SignableRequest {
    /// Wrap an outgoing request.
    ///
    /// Returns an error if the request URI has no authority, since such a
    /// request has no base URL to sign.
    pub fn new(req: Request<Bytes>) -> Result<Self> {
        if req.uri().authority().is_none() {
            return Err(Error::request_invalid(
                "request without authority is invalid for signing",
            ));
        }

        Ok(Self {
            original: Arc::new(req),
            oauth: BTreeMap::new(),
            authorized: None,
        })
    }

    /// Create a fresh signable request over the same original request,
    /// carrying a copy of the protocol parameters but no authorized request.
    pub fn fork(&self) -> Self {
        Self {
            original: self.original.clone(),
            oauth: self.oauth.clone(),
            authorized: None,
        }
    }

    /// The HTTP method of the original request.
    pub fn verb(&self) -> &str {
        self.original.method().as_str()
    }

    /// The request URL without query string and fragment, exactly as received.
    ///
    /// `http::Uri` never keeps a fragment, so only the query needs dropping.
    pub fn base_url(&self) -> String {
        let uri = self.original.uri();
        let scheme = uri.scheme_str().unwrap_or("http");
        let authority = uri.authority().map(|v| v.as_str()).unwrap_or_default();

        format!("{scheme}://{authority}{}", uri.path())
    }

    /// Query parameters of the original URL, percent decoded.
    ///
    /// Duplicate names keep the last value.
    pub fn query(&self) -> BTreeMap<String, String> {
        self.original
            .uri()
            .query()
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Form parameters of the original body, percent decoded.
    ///
    /// Only bodies declared as `application/x-www-form-urlencoded` are read,
    /// any other body yields an empty map. A pair without `=` is a hard
    /// error. A body that isn't valid utf-8 is skipped with a warning.
    pub fn body(&self) -> Result<BTreeMap<String, String>> {
        if !self.is_form_encoded() {
            return Ok(BTreeMap::new());
        }

        let Ok(body) = std::str::from_utf8(self.original.body()) else {
            warn!("form body is not valid utf-8, body parameters are ignored for signing");
            return Ok(BTreeMap::new());
        };

        parse_form_body(body)
    }

    /// All protocol parameters in ascending key order.
    pub fn oauth(&self) -> &BTreeMap<String, String> {
        &self.oauth
    }

    /// Get one protocol parameter.
    pub fn oauth_get(&self, key: &str) -> Option<&str> {
        self.oauth.get(key).map(String::as_str)
    }

    /// Insert or replace a protocol parameter.
    pub fn oauth_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.oauth.insert(key.into(), value.into());
    }

    /// Remove a protocol parameter, returning its old value.
    pub(crate) fn oauth_remove(&mut self, key: &str) -> Option<String> {
        self.oauth.remove(key)
    }

    /// The wrapped original request.
    pub fn original_request(&self) -> &Request<Bytes> {
        &self.original
    }

    /// The authorized request, `None` until signing completes.
    pub fn authorized_request(&self) -> Option<&Request<Bytes>> {
        self.authorized.as_ref()
    }

    /// Store the authorized request.
    pub fn set_authorized_request(&mut self, req: Request<Bytes>) {
        self.authorized = Some(req);
    }

    /// Take the authorized request out.
    pub fn into_authorized_request(self) -> Option<Request<Bytes>> {
        self.authorized
    }

    /// Copy the original request so that an authorization strategy can decorate it.
    ///
    /// Extensions are not carried over.
    pub(crate) fn copy_original(&self) -> Request<Bytes> {
        copy_request(&self.original)
    }

    fn is_form_encoded(&self) -> bool {
        let Some(v) = self.original.headers().get(CONTENT_TYPE) else {
            return false;
        };
        let Ok(v) = v.to_str() else {
            return false;
        };

        v.split(';')
            .next()
            .map(|essence| essence.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
            .unwrap_or(false)
    }
}

/// Copy method, uri, version, headers and body of a request.
pub(crate) fn copy_request(src: &Request<Bytes>) -> Request<Bytes> {
    let mut req = Request::new(src.body().clone());
    *req.method_mut() = src.method().clone();
    *req.uri_mut() = src.uri().clone();
    *req.version_mut() = src.version();
    *req.headers_mut() = src.headers().clone();
    req
}

/// Parse `key=value&key=value` into a map, decoding every component.
///
/// Empty segments, as in `a=1&&b=2`, are skipped.
fn parse_form_body(body: &str) -> Result<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    for pair in body.split('&').filter(|v| !v.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(Error::request_invalid(format!("key with no value: {pair}")));
        };

        params.insert(percent_decode(key), percent_decode(value));
    }

    Ok(params)
}
