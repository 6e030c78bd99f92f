//! # paircmp-core
//!
//! Core library for comparing two benchmark configurations with a paired
//! Student's t-test. Holds the measurement data model, the statistics
//! helpers, the t-test itself, and the comparator that ties them together.

pub mod builtin;
pub mod comparator;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod stats;
pub mod ttest;

// Re-exports
pub use builtin::{builtin_dataset, DEFAULT_BASELINE, DEFAULT_TREATMENT};
pub use comparator::{Comparison, PairedComparator, TestDesign, Verdict};
pub use constants::{exit_codes, DEFAULT_ALPHA, VARIANCE_TOLERANCE};
pub use dataset::{Dataset, MeasurementGroup, Series};
pub use error::CompareError;
pub use ttest::{paired_t_test, two_sided_p_value, TTestResult};

/// Compare two groups with the default significance level and the
/// group-means design.
///
/// This is a convenience function for simple use cases. Use
/// [`PairedComparator`] directly to pick another alpha or design.
///
/// # Example
/// ```
/// let data = paircmp_core::builtin_dataset();
/// let baseline = data.group("single").unwrap();
/// let treatment = data.group("distributed").unwrap();
/// let cmp = paircmp_core::compare(baseline, treatment).unwrap();
/// assert_eq!(cmp.verdict, paircmp_core::Verdict::Reject);
/// ```
pub fn compare(
    baseline: &MeasurementGroup,
    treatment: &MeasurementGroup,
) -> Result<Comparison, CompareError> {
    PairedComparator::default().compare(baseline, treatment)
}
