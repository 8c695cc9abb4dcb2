//! Apply-time validation
//!
//! Turns the raw entry list and interval into a [`Playlist`], or the first
//! reason it cannot be started.

use thiserror::Error;

use super::interval::Interval;
use crate::utils::i18n::T;


/// Scheme given to entries typed without one.
pub const DEFAULT_SCHEME: &str = "https://";


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid URLs.")]
    InvalidUrl { url: String },

    #[error("Please enter at least one valid URL.")]
    NoUrls,

    #[error("Please enter a valid time between URLs.")]
    InvalidInterval,
}

impl ValidationError {
    /// Translation key of the alert shown for this error.
    pub fn message_key(&self) -> T {
        match self {
            Self::InvalidUrl { .. } => T::InvalidUrls,
            Self::NoUrls => T::NoValidUrl,
            Self::InvalidInterval => T::InvalidTime,
        }
    }
}


/// A validated playlist, ready for the loop starter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub urls: Vec<String>,
    pub interval_ms: u64,
}


/// Prefix `https://` unless the entry already names http or https.
pub fn with_scheme(entry: &str) -> String {
    if entry.starts_with("http://") || entry.starts_with("https://") {
        entry.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, entry)
    }
}

/// Validate everything or nothing: the first problem aborts.
pub fn validate(entries: &[String], interval: Interval) -> Result<Playlist, ValidationError> {
    let mut urls = Vec::with_capacity(entries.len());
    for entry in entries.iter().filter(|e| !e.is_empty()) {
        let url = with_scheme(entry);
        if !url.contains('.') {
            tracing::warn!("Rejecting URL without a dot: {}", url);
            return Err(ValidationError::InvalidUrl { url });
        }
        urls.push(url);
    }

    if urls.is_empty() {
        return Err(ValidationError::NoUrls);
    }
    if !interval.is_set() || interval.as_millis() == 0 {
        return Err(ValidationError::InvalidInterval);
    }

    Ok(Playlist {
        urls,
        interval_ms: interval.as_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("example.com"), "https://example.com");
        assert_eq!(with_scheme("http://example.com"), "http://example.com");
        assert_eq!(with_scheme("https://example.com/a"), "https://example.com/a");
        assert_eq!(with_scheme("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_valid_playlist() {
        let playlist = validate(&entries(&["example.com", "http://a.org", ""]), Interval::from_seconds(5.0)).unwrap();
        assert_eq!(playlist.urls, vec!["https://example.com", "http://a.org"]);
        assert_eq!(playlist.interval_ms, 5000);
    }

    #[test]
    fn test_url_without_dot_aborts() {
        let err = validate(&entries(&["good.com", "notaurl", ""]), Interval::from_seconds(5.0)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidUrl { url: "https://notaurl".into() });
        assert_eq!(err.to_string(), "Please enter valid URLs.");
    }

    #[test]
    fn test_all_empty() {
        let err = validate(&entries(&["", ""]), Interval::from_seconds(5.0)).unwrap_err();
        assert_eq!(err, ValidationError::NoUrls);
        assert_eq!(err.to_string(), "Please enter at least one valid URL.");
    }

    #[test]
    fn test_unset_interval() {
        let err = validate(&entries(&["a.com", ""]), Interval::default()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidInterval);
        assert_eq!(err.to_string(), "Please enter a valid time between URLs.");
    }

    #[test]
    fn test_url_errors_reported_before_interval() {
        let err = validate(&entries(&["nodot"]), Interval::default()).unwrap_err();
        assert_eq!(err.message_key(), T::InvalidUrls);
    }

    #[test]
    fn test_fractional_interval_rounds_to_millis() {
        let playlist = validate(&entries(&["a.com"]), Interval::from_seconds(0.0016)).unwrap();
        assert_eq!(playlist.interval_ms, 2);
    }

    #[test]
    fn test_interval_below_one_millisecond_rejected() {
        let mut interval = Interval::default();
        assert_eq!(interval.edit("0.0004"), crate::playlist::IntervalEdit::Accepted);
        let err = validate(&entries(&["a.com"]), interval).unwrap_err();
        assert_eq!(err, ValidationError::InvalidInterval);
    }
}
