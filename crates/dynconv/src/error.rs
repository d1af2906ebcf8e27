// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors for value conversion.

use std::fmt;

/// Errors reported by the conversion engine.
///
/// Skippable conditions (unmatched target field, hidden source field,
/// absent source value) are defined no-ops and never produce an error.
#[derive(Debug)]
pub enum ConvertError {
    /// Target type kind is incompatible with the strategy the source's
    /// runtime kind requires (e.g. map source, non-map target).
    ShapeMismatch { expected: String, got: String },
    /// Scalar pair with neither identical kinds nor a defined coercion.
    UnsupportedConversion { from: String, to: String },
    /// Top-level source/target do not resolve to struct kinds.
    InvalidArgument(String),
    /// Recursion exceeded the depth guard (self-referential descriptors).
    DepthExceeded { limit: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, got)
            }
            Self::UnsupportedConversion { from, to } => {
                write!(f, "Unsupported conversion: {} to {}", from, to)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::DepthExceeded { limit } => {
                write!(f, "Recursion depth exceeded limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConvertError::ShapeMismatch {
            expected: "sequence".to_string(),
            got: "map".to_string(),
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected sequence, got map");

        let err = ConvertError::UnsupportedConversion {
            from: "bool".to_string(),
            to: "f64".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported conversion: bool to f64");

        let err = ConvertError::DepthExceeded { limit: 128 };
        assert_eq!(err.to_string(), "Recursion depth exceeded limit of 128");
    }
}
