//! Food log error types

use thiserror::Error;

/// Errors that can occur in the food log
#[derive(Error, Debug)]
pub enum FoodLogError {
    /// Deletion index outside the current log bounds
    #[error("Index {index} out of range for log of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for food log operations
pub type FoodLogResult<T> = Result<T, FoodLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FoodLogError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Index 5 out of range for log of 3 entries");
    }
}
