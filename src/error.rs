use std::fmt;

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// A required argument does not satisfy the contract of the operation.
    #[error("invalid argument `{argument}`: {reason}")]
    PreconditionViolation {
        argument: &'static str,
        reason: String,
    },
    /// An enumerated option was given a value outside of its range.
    #[error("unsupported value `{value}` for option `{option}`")]
    InvalidOption { option: &'static str, value: String },
}

impl SegmentError {
    pub(crate) fn precondition(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_option(option: &'static str, value: impl fmt::Display) -> Self {
        Self::InvalidOption {
            option,
            value: value.to_string(),
        }
    }
}
