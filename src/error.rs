use thiserror::Error;

/// Errors produced while building, running or training a [`Network`](crate::Network).
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid network construction: {0}")]
    Construction(String),

    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error(
        "example {index} has input length {input_len} and target length {target_len}, \
         network expects {expected_input} and {expected_output}"
    )]
    InvalidExample {
        index: usize,
        input_len: usize,
        target_len: usize,
        expected_input: usize,
        expected_output: usize,
    },

    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed IDX data: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_example_reports_both_shapes() {
        let err = NetworkError::InvalidExample {
            index: 3,
            input_len: 5,
            target_len: 2,
            expected_input: 4,
            expected_output: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("example 3"));
        assert!(msg.contains("input length 5"));
        assert!(msg.contains("expects 4 and 2"));
    }
}
