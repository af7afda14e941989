use crate::core::errors::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

/*-------------------------------------------------------------------------------------------------
  Content-Type Allow-List
-------------------------------------------------------------------------------------------------*/

// Keeps binary or otherwise unprintable payloads from being decoded as an IP set.
lazy_static! {
    static ref ALLOWED_CONTENT_TYPES: Vec<Regex> =
        vec![Regex::new("^application/json$").expect("Invalid Regex")];
}

/// Returns `true` when the Content-Type value exactly matches an allowed pattern.
pub fn is_allowed(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES
        .iter()
        .any(|pattern| pattern.is_match(content_type))
}

/// Check a response Content-Type header value; an absent header is rejected.
pub fn check(content_type: Option<&str>) -> Result<()> {
    match content_type {
        Some(content_type) if !content_type.is_empty() && is_allowed(content_type) => Ok(()),
        other => Err(Error::UnsupportedContentType(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
