//! Error type shared by dataset loading, the t-test, and the comparator.

use crate::constants::exit_codes;

/// Error type for paired comparisons.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    /// The two inputs do not pair up.
    #[error("input shape mismatch: {0}")]
    InputShapeMismatch(String),

    /// Fewer than two paired observations.
    #[error("at least 2 paired observations are required, found {0}")]
    InsufficientPairs(usize),

    /// Every paired difference is the same value.
    #[error("paired differences have no variance, test undefined")]
    DegenerateVariance,

    /// Significance level outside (0, 1).
    #[error("invalid significance level {0}: must lie strictly between 0 and 1")]
    InvalidAlpha(f64),

    /// Unrecognized test design name.
    #[error("unknown test design '{0}': expected 'means' or 'samples'")]
    InvalidDesign(String),

    /// The dataset could not be read, parsed, or validated.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// The t distribution could not be built.
    #[error("t distribution error: {0}")]
    Distribution(String),
}

impl CompareError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            _ if self.is_degenerate() => exit_codes::ERROR_DEGENERATE,
            Self::InputShapeMismatch(_) => exit_codes::ERROR_INPUT_SHAPE,
            Self::InvalidAlpha(_) | Self::InvalidDesign(_) | Self::Dataset(_) => {
                exit_codes::ERROR_CONFIG
            }
            _ => exit_codes::ERROR_GENERIC,
        }
    }

    /// Whether the error means the test itself is undefined for the input.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::InsufficientPairs(_) | Self::DegenerateVariance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(CompareError::InputShapeMismatch("x".into()).exit_code(), 3);
        assert_eq!(CompareError::InvalidAlpha(2.0).exit_code(), 4);
        assert_eq!(CompareError::Dataset("bad".into()).exit_code(), 4);
        assert_eq!(CompareError::InvalidDesign("anova".into()).exit_code(), 4);
        assert_eq!(CompareError::InsufficientPairs(1).exit_code(), 5);
        assert_eq!(CompareError::DegenerateVariance.exit_code(), 5);
        assert_eq!(CompareError::Distribution("df".into()).exit_code(), 1);
    }

    #[test]
    fn degenerate_classification() {
        assert!(CompareError::DegenerateVariance.is_degenerate());
        assert!(CompareError::InsufficientPairs(0).is_degenerate());
        assert!(!CompareError::InputShapeMismatch(String::new()).is_degenerate());
    }

    #[test]
    fn degenerate_errors_share_exit_code() {
        for err in [CompareError::InsufficientPairs(1), CompareError::DegenerateVariance] {
            assert!(err.is_degenerate());
            assert_eq!(err.exit_code(), exit_codes::ERROR_DEGENERATE);
        }
    }

    #[test]
    fn invalid_design_is_not_a_dataset_error() {
        let msg = CompareError::InvalidDesign("anova".into()).to_string();
        assert!(msg.starts_with("unknown test design 'anova'"));
        assert!(!msg.contains("dataset"));
    }

    #[test]
    fn degenerate_variance_message() {
        let msg = CompareError::DegenerateVariance.to_string();
        assert!(msg.contains("no variance"));
        assert!(msg.contains("test undefined"));
    }
}
