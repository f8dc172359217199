//! API Errors

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No access token stored; the request was never sent
    NoSession,
    /// Backend answered 403
    Forbidden,
    /// Any other non-success status
    Status { code: u16, body: String },
    /// Transport failure before a response arrived
    Network(String),
    /// Response body did not match the expected shape
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(code: u16, body: String) -> Self {
        if code == 403 {
            ApiError::Forbidden
        } else {
            ApiError::Status { code, body }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NoSession => write!(f, "No session token"),
            ApiError::Forbidden => write!(f, "Forbidden"),
            ApiError::Status { code, body } if body.is_empty() => write!(f, "HTTP {}", code),
            ApiError::Status { code, body } => write!(f, "HTTP {}: {}", code, body.trim()),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(403, "no".into()), ApiError::Forbidden);
        assert_eq!(
            ApiError::from_status(500, "boom\n".into()).to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(ApiError::from_status(404, String::new()).to_string(), "HTTP 404");
    }
}
