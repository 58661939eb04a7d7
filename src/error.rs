use thiserror::Error;

/// Failure of a single panel fetch
///
/// Both variants collapse to the same Error view state; the distinction only
/// matters for the log line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Result type for data fetches
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<Vec<u32>>("<html>").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }

    #[test]
    fn test_display_includes_cause() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
