//! Errors raised while talking to the simulation service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout or other transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a valid simulation response.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "service returned 500: boom");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
