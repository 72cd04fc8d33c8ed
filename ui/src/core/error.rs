//! Error type shared by every fallible operation in the UI crate.
//!
//! Failures are reported, never swallowed: callers log them through
//! `tracing` and render the `Display` text in place of the missing content.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("element #{0} is missing from the page")]
    MissingElement(String),

    #[error("page operation failed: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl UiError {
    pub fn http(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Http {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn missing(id: &str) -> Self {
        Self::MissingElement(id.to_string())
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = UiError::Status {
            url: "/experiments/monitor/ajax/".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "/experiments/monitor/ajax/ answered with HTTP 503");
        assert_eq!(
            UiError::missing("rdaction").to_string(),
            "element #rdaction is missing from the page"
        );
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: UiError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert!(matches!(err, UiError::Decode(_)));
    }
}
