//! Shared error types for classification and conversion

use crate::convert::Target;
use crate::shape::NumericShape;
use thiserror::Error;

/// Error taxonomy for strict-mode conversions.
///
/// Every variant corresponds to one failure cause, so callers can branch
/// on *why* a conversion failed instead of matching on a message. In
/// permissive mode none of these surface; the policy's fallback is
/// substituted instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericError {
    /// The text does not parse as any numeric shape
    #[error("could not convert string to a number: {input:?}")]
    Malformed { input: String },

    /// The input's kind (string vs number) is excluded by the policy
    #[error("{kind} inputs are excluded by the conversion policy")]
    DisallowedKind { kind: &'static str },

    /// Parses as a number, but exceeds the representable or configured range
    #[error("{input:?} overflows the permitted numeric range")]
    Overflow { input: String },

    /// Parses as a number, but is smaller in magnitude than the configured
    /// exponent window permits
    #[error("{input:?} underflows the permitted numeric range")]
    Underflow { input: String },

    /// Numeric, but the shape cannot satisfy the strict target kind
    #[error("input has shape {shape} which cannot convert to {target}")]
    TypeMismatch {
        shape: NumericShape,
        target: Target,
    },
}

impl NumericError {
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }

    pub fn disallowed_kind(kind: &'static str) -> Self {
        Self::DisallowedKind { kind }
    }

    pub fn overflow(input: impl Into<String>) -> Self {
        Self::Overflow {
            input: input.into(),
        }
    }

    pub fn underflow(input: impl Into<String>) -> Self {
        Self::Underflow {
            input: input.into(),
        }
    }

    pub fn type_mismatch(shape: NumericShape, target: Target) -> Self {
        Self::TypeMismatch { shape, target }
    }

    /// True when the failure is a range problem rather than a parse problem.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Overflow { .. } | Self::Underflow { .. })
    }
}
