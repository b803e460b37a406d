//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides secrets such as consumer secrets and token secrets in `Debug` output.
///
/// - Empty values print as `EMPTY`.
/// - Values shorter than 12 characters are fully masked as `***`.
/// - Longer values keep their first and last three characters, so two redacted
///   keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        if s.is_empty() {
            return f.write_str("EMPTY");
        }
        if s.len() < 12 {
            return f.write_str("***");
        }

        // Secrets may carry non-ascii text, stay on char boundaries.
        let head: String = s.chars().take(3).collect();
        let tail: String = {
            let mut t: Vec<char> = s.chars().rev().take(3).collect();
            t.reverse();
            t.into_iter().collect()
        };
        write!(f, "{head}***{tail}")
    }
}
