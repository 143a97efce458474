//! Error taxonomy shared by every stage of the filter pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("degenerate series: {reason}")]
    NumericDegenerate { reason: String },

    #[error("channel `{name}` has {actual} samples, expected {expected}")]
    RaggedChannel {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("channel `{name}` appears more than once")]
    DuplicateChannel { name: String },

    #[error("FFT failed: {0}")]
    Transform(String),
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FilterError::InvalidParameter { name, value, reason }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        FilterError::NumericDegenerate {
            reason: reason.into(),
        }
    }
}
