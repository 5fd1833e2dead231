use reqwest::StatusCode;
use thiserror::Error;

/// Every way a form submission can fail.
///
/// The controller collapses all of these into "no result"; the variants
/// exist for logging and for library callers that want to branch on them.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid temperature input: {0:?}")]
    InvalidTemperature(String),

    #[error("Invalid date input: date is empty")]
    EmptyDate,

    #[error("Http error! status: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to send prediction request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse prediction response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SubmitError {
    /// True for failures detected before any request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SubmitError::InvalidTemperature(_) | SubmitError::EmptyDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(SubmitError::EmptyDate.is_input_error());
        assert!(SubmitError::InvalidTemperature("abc".into()).is_input_error());

        let status = SubmitError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(!status.is_input_error());
    }

    #[test]
    fn status_error_mentions_code() {
        let err = SubmitError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }
}
