//! Shared validation patterns.
//!
//! Regexes used by the validator to recognise proof-link hosts, phone
//! numbers and calendar keys. The validator compiles its own copies from
//! [`ValidationConfig`](crate::config::ValidationConfig) when one is supplied;
//! these are the defaults.

use lazy_static::lazy_static;
use regex::Regex;

/// Google Drive / Docs host, the only host accepted for most proof links.
pub const DRIVE_URL: &str = r"(?i)https?://(drive|docs)\.google\.com/";

/// Genspark host, accepted alongside Drive for client report links.
pub const GENSPARK_URL: &str = r"(?i)https?://(www\.)?genspark\.ai";

lazy_static! {
    pub static ref DRIVE_PATTERN: Regex = Regex::new(DRIVE_URL).unwrap();

    pub static ref GENSPARK_PATTERN: Regex = Regex::new(GENSPARK_URL).unwrap();

    /// Ten ASCII digits, nothing else.
    pub static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9]{10}$").unwrap();

    /// `YYYY-MM-DD` shape only; calendar validity is checked with chrono.
    pub static ref DATE_PATTERN: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();

    /// `YYYY-MM` report month key.
    pub static ref MONTH_KEY_PATTERN: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})$").unwrap();

    /// Anything that looks like an http(s) URL.
    pub static ref HTTP_URL_PATTERN: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

/// Check if a link is hosted on Google Drive or Docs.
pub fn is_drive_url(url: &str) -> bool {
    DRIVE_PATTERN.is_match(url)
}

/// Check if a link is hosted on Genspark.
pub fn is_genspark_url(url: &str) -> bool {
    GENSPARK_PATTERN.is_match(url)
}

/// Check if a phone number is exactly ten digits.
pub fn is_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Check if a value is an http(s) URL.
pub fn is_http_url(url: &str) -> bool {
    HTTP_URL_PATTERN.is_match(url.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_detection() {
        assert!(is_drive_url("https://drive.google.com/file/d/abc/view"));
        assert!(is_drive_url("http://docs.google.com/document/d/xyz"));
        assert!(is_drive_url("HTTPS://DRIVE.GOOGLE.COM/x"));
        assert!(!is_drive_url("https://dropbox.com/s/abc"));
        assert!(!is_drive_url("drive.google.com/file"));
    }

    #[test]
    fn test_genspark_detection() {
        assert!(is_genspark_url("https://genspark.ai/report/1"));
        assert!(is_genspark_url("https://www.genspark.ai/x"));
        assert!(!is_genspark_url("https://genspark.io/x"));
    }

    #[test]
    fn test_phone_detection() {
        assert!(is_phone_number("9876543210"));
        assert!(!is_phone_number("98765 43210"));
        assert!(!is_phone_number("987654321"));
        assert!(!is_phone_number("+919876543210"));
        assert!(!is_phone_number(""));
        assert!(!is_phone_number("१२३४५६७८९०"));
        assert!(!is_phone_number("９８７６５４３２１０"));
    }

    #[test]
    fn test_http_url() {
        assert!(is_http_url("https://airtable.com/tbl123"));
        assert!(is_http_url("  http://example.com  "));
        assert!(!is_http_url("airtable.com/tbl123"));
        assert!(!is_http_url("https://"));
    }

    #[test]
    fn test_month_key_shape() {
        assert!(MONTH_KEY_PATTERN.is_match("2024-02"));
        assert!(!MONTH_KEY_PATTERN.is_match("2024-2"));
        assert!(!MONTH_KEY_PATTERN.is_match("Feb 2024"));
        assert!(!MONTH_KEY_PATTERN.is_match("२०२४-०२"));
        assert!(!DATE_PATTERN.is_match("२०२४-०२-१०"));
        assert!(DATE_PATTERN.is_match("2024-02-10"));
    }
}
