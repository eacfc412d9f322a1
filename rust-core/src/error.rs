//! Error types for the transform engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Input of {len} samples exceeds the working length of {capacity}")]
    OversizeInput { len: usize, capacity: usize },

    #[error("Transform strategy returned {actual} coefficients, expected {expected}")]
    StrategyContract { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TransformError::OversizeInput { len: 9, capacity: 8 };
        assert_eq!(
            err.to_string(),
            "Input of 9 samples exceeds the working length of 8"
        );

        let err = TransformError::StrategyContract { expected: 8, actual: 5 };
        assert!(err.to_string().contains("returned 5 coefficients"));
    }
}
