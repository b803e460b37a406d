//! Percent encoding used for every OAuth 1.0a value.
//!
//! Both functions are total: they never fail and never panic.

use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode input with the OAuth 1.0 unreserved set.
///
/// Space becomes `%20` and `*` becomes `%2A`, hex digits are uppercase.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Percent decode input, treating `+` as space the way form bodies and query
/// strings are written.
///
/// If the decoded bytes are not valid utf-8, input is returned unchanged.
pub fn percent_decode(input: &str) -> String {
    let plus_as_space = input.replace('+', " ");
    match percent_decode_str(&plus_as_space).decode_utf8() {
        Ok(v) => v.into_owned(),
        Err(_) => input.to_string(),
    }
}
