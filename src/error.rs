// In: src/error.rs

//! This module defines the single, unified error type for the eightbtenb library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Only recoverable stream conditions live here. Caller bugs (out-of-range
//! sub-symbol values, partial-symbol bit lengths handed to the core, undersized
//! output buffers) are assertions in the kernels and never become values of
//! this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineCodeError {
    // =========================================================================
    // === Stream Errors (raised by the core)
    // =========================================================================
    /// A received symbol has no valid reverse mapping. `symbol_index` counts
    /// symbols from the start of the failing decode call.
    #[error("Code violation at symbol {symbol_index}: {symbol:#05x} is not a valid 8b/10b symbol")]
    CodeViolation { symbol_index: usize, symbol: u16 },

    // =========================================================================
    // === Boundary Errors (raised by the binding layer before decoding)
    // =========================================================================
    #[error("Input truncated: {bit_length} bits need {needed} bytes, got {available}")]
    Truncated {
        bit_length: usize,
        needed: usize,
        available: usize,
    },

    #[error("{unused} unused trailing bytes after {bit_length} bits of input")]
    UnusedBytes { bit_length: usize, unused: usize },

    #[error("Bit length {0} is not a whole number of 10-bit symbols")]
    InvalidBitLength(usize),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the underlying I/O subsystem, e.g. opening a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library while reading a configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl LineCodeError {
    /// True for the errors that mean the received stream itself is corrupt,
    /// as opposed to a malformed request.
    pub fn is_stream_integrity(&self) -> bool {
        matches!(self, LineCodeError::CodeViolation { .. })
    }
}

// =============================================================================
// === Python Conversion ===
// =============================================================================

#[cfg(feature = "python")]
impl From<LineCodeError> for pyo3::PyErr {
    fn from(err: LineCodeError) -> pyo3::PyErr {
        use crate::ffi::python::{CodeViolation, Truncated, UnusedBytes};

        let msg = err.to_string();
        match err {
            LineCodeError::CodeViolation { .. } => CodeViolation::new_err(msg),
            LineCodeError::Truncated { .. } => Truncated::new_err(msg),
            LineCodeError::UnusedBytes { .. } => UnusedBytes::new_err(msg),
            LineCodeError::InvalidBitLength(_) | LineCodeError::SerdeJson(_) => {
                pyo3::exceptions::PyValueError::new_err(msg)
            }
            LineCodeError::Io(_) => pyo3::exceptions::PyIOError::new_err(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = LineCodeError::CodeViolation {
            symbol_index: 3,
            symbol: 0x0ff,
        };
        assert_eq!(
            err.to_string(),
            "Code violation at symbol 3: 0x0ff is not a valid 8b/10b symbol"
        );
        assert!(err.is_stream_integrity());

        let err = LineCodeError::Truncated {
            bit_length: 10,
            needed: 2,
            available: 1,
        };
        assert!(err.to_string().contains("need 2 bytes, got 1"));
        assert!(!err.is_stream_integrity());
    }
}
