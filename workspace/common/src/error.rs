use thiserror::Error;

/// Failures of a recommendation request.
///
/// The `Display` output is what the results panel shows to the user, so
/// `RequestFailed` keeps a fixed message while the other variants surface the
/// underlying transport or parser text unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The service answered with a non-2xx status. The body is never read.
    #[error("Unable to fetch recommendations.")]
    RequestFailed { status: u16 },

    /// The request could not be encoded or the call never completed.
    #[error("{0}")]
    Transport(String),

    /// The response body was not a valid recommendation document.
    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_ignores_status() {
        let not_found = RecommendError::RequestFailed { status: 404 };
        let server_error = RecommendError::RequestFailed { status: 500 };

        assert_eq!(not_found.to_string(), "Unable to fetch recommendations.");
        assert_eq!(not_found.to_string(), server_error.to_string());
    }

    #[test]
    fn test_transport_and_parse_surface_message_verbatim() {
        let transport = RecommendError::Transport("TypeError: Failed to fetch".to_string());
        let parse = RecommendError::Parse("expected value at line 1 column 1".to_string());

        assert_eq!(transport.to_string(), "TypeError: Failed to fetch");
        assert_eq!(parse.to_string(), "expected value at line 1 column 1");
    }
}
