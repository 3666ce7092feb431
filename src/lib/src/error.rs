//! Errors for the munitime library
//!
//! Enumeration for all errors that can occur in the munitime library
//!

use derive_more::{Display, Error};
use std::io;

pub mod string_error;

pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum TimelineError {
    // User input: the repository URL did not match the expected shape.
    // Halts the pipeline immediately, nothing downstream runs.
    InvalidReference(Box<StringError>),

    // Absence of a resource. Sometimes expected and absorbed at the call
    // site (predecessor content), sometimes a hard failure (target content).
    ResourceNotFound(StringError),

    // Transport/auth/rate-limit/malformed-response failures from the
    // repository API or the diff service. Surfaced with the causing status,
    // never retried.
    Api(StringError),

    // Token service failures. Absorbed at the auth call site, the pipeline
    // degrades to anonymous access.
    AuthFailure(StringError),

    // External library errors
    IO(io::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),
    Encoding(std::str::Utf8Error),
    Base64(base64::DecodeError),

    // Fallback
    Basic(StringError),
}

impl TimelineError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        TimelineError::Basic(StringError::from(s.as_ref()))
    }

    pub fn invalid_reference(raw: impl AsRef<str>) -> Self {
        TimelineError::InvalidReference(Box::new(StringError::from(format!(
            "Invalid repository reference [{}], expected https://{}/<owner>/<repo>[/commit/<sha>]",
            raw.as_ref(),
            crate::constants::DEFAULT_REPO_HOST
        ))))
    }

    pub fn resource_not_found(value: impl AsRef<str>) -> Self {
        TimelineError::ResourceNotFound(StringError::from(format!(
            "Resource not found: {}",
            value.as_ref()
        )))
    }

    pub fn api_error(status: reqwest::StatusCode, url: impl AsRef<str>) -> Self {
        TimelineError::Api(StringError::from(format!(
            "Err status [{}] from url {}",
            status,
            url.as_ref()
        )))
    }

    pub fn api_msg(s: impl AsRef<str>) -> Self {
        TimelineError::Api(StringError::from(s.as_ref()))
    }

    pub fn auth_failure(s: impl AsRef<str>) -> Self {
        TimelineError::AuthFailure(StringError::from(s.as_ref()))
    }

    pub fn no_commits_found() -> Self {
        TimelineError::basic_str("\nNo commits found.\n")
    }

    /// Whether this error is the absence of a resource, so a call site with
    /// domain knowledge can absorb it instead of propagating.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TimelineError::ResourceNotFound(_))
    }
}

impl From<io::Error> for TimelineError {
    fn from(error: io::Error) -> Self {
        TimelineError::IO(error)
    }
}

impl From<url::ParseError> for TimelineError {
    fn from(error: url::ParseError) -> Self {
        TimelineError::URL(error)
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(error: serde_json::Error) -> Self {
        TimelineError::JSON(error)
    }
}

impl From<reqwest::Error> for TimelineError {
    fn from(error: reqwest::Error) -> Self {
        TimelineError::HTTP(error)
    }
}

impl From<std::str::Utf8Error> for TimelineError {
    fn from(error: std::str::Utf8Error) -> Self {
        TimelineError::Encoding(error)
    }
}

impl From<base64::DecodeError> for TimelineError {
    fn from(error: base64::DecodeError) -> Self {
        TimelineError::Base64(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = TimelineError::resource_not_found("m.ecore");
        assert!(err.is_not_found());

        let err = TimelineError::api_error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "http://localhost/repos/a/b/commits",
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = TimelineError::api_error(
            reqwest::StatusCode::FORBIDDEN,
            "http://localhost/repos/a/b/commits",
        );
        assert!(err.to_string().contains("403"));
    }
}
