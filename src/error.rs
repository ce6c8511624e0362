//! Error types for motif search and oracle preparation
//!
//! Degenerate inputs (empty patterns, zero marked items, out-of-range match
//! positions) are not errors: they map to well-defined empty or fallback
//! values. Only broken arithmetic preconditions and resource failures end up
//! here.

use thiserror::Error;

/// Errors raised by the search core
#[derive(Error, Debug)]
pub enum GroverError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot encode {num_candidates} candidates in {n_qubits} qubits")]
    EncodingOverflow { num_candidates: usize, n_qubits: u32 },

    #[error("Invalid DNA base {base:?} at position {position}")]
    InvalidSequence { position: usize, base: char },

    #[error("Failed to spawn matcher worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Matcher worker panicked: {0}")]
    WorkerPanicked(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GroverError::InvalidArgument("total_shots must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: total_shots must be positive"
        );

        let err = GroverError::EncodingOverflow {
            num_candidates: 20,
            n_qubits: 4,
        };
        assert_eq!(err.to_string(), "Cannot encode 20 candidates in 4 qubits");

        let err = GroverError::InvalidSequence {
            position: 3,
            base: 'N',
        };
        assert_eq!(err.to_string(), "Invalid DNA base 'N' at position 3");

        let err = GroverError::WorkerPanicked("motif-matcher-2".to_string());
        assert_eq!(err.to_string(), "Matcher worker panicked: motif-matcher-2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GroverError = io.into();
        assert!(matches!(err, GroverError::Io(_)));
    }
}
