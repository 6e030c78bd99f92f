//! Constants for significance testing and process exit codes.

/// Default significance threshold (alpha).
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Relative tolerance under which the spread of paired differences counts
/// as zero. Scaled by the largest absolute difference.
pub const VARIANCE_TOLERANCE: f64 = 1e-12;

/// Minimum number of paired observations for a t-test.
pub const MIN_PAIRS: usize = 2;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The two groups do not line up (worker counts or sample counts differ).
    pub const ERROR_INPUT_SHAPE: i32 = 3;
    /// Invalid configuration or unreadable dataset.
    pub const ERROR_CONFIG: i32 = 4;
    /// Too few pairs or zero variance: the test is undefined.
    pub const ERROR_DEGENERATE: i32 = 5;
}
