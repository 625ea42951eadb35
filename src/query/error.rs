//! Query error types
//!
//! Errors raised while interpreting a filter state against the launch table.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Selected site is not one of the table's launch sites
    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    /// Payload bounds are inverted or not finite
    #[error("Invalid payload range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::UnknownSite("Boca Chica".to_string());
        assert_eq!(err.to_string(), "Unknown launch site: Boca Chica");

        let err = QueryError::InvalidRange {
            min: 9000.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "Invalid payload range: [9000, 100]");
    }
}
