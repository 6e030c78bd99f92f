//! Two-sided paired Student's t-test.
//!
//! The test works on the differences `d_i = treatment[i] - baseline[i]`:
//! `t = mean(d) / (sd(d) / sqrt(n))` with `n - 1` degrees of freedom, and the
//! p-value is the two-sided tail mass of Student's t at `|t|`.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::constants::{MIN_PAIRS, VARIANCE_TOLERANCE};
use crate::error::CompareError;
use crate::stats::{differences, mean, sample_std_dev};

/// Outcome of a paired t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    /// The t statistic. Positive when treatment exceeds baseline on average.
    pub t_statistic: f64,
    /// Two-sided p-value in [0, 1].
    pub p_value: f64,
    /// Degrees of freedom (`pairs - 1`).
    pub degrees_of_freedom: f64,
    /// Number of paired observations.
    pub pairs: usize,
    /// Mean of the paired differences.
    pub mean_difference: f64,
    /// Sample standard deviation of the paired differences.
    pub std_dev_difference: f64,
}

/// Run a two-sided paired t-test of `treatment` against `baseline`.
///
/// # Errors
///
/// - [`CompareError::InputShapeMismatch`] if the slices differ in length.
/// - [`CompareError::InsufficientPairs`] for fewer than two pairs.
/// - [`CompareError::DegenerateVariance`] if the differences do not vary.
pub fn paired_t_test(treatment: &[f64], baseline: &[f64]) -> Result<TTestResult, CompareError> {
    if treatment.len() != baseline.len() {
        return Err(CompareError::InputShapeMismatch(format!(
            "treatment has {} values, baseline has {}",
            treatment.len(),
            baseline.len()
        )));
    }
    let n = treatment.len();
    if n < MIN_PAIRS {
        return Err(CompareError::InsufficientPairs(n));
    }

    let diffs = differences(treatment, baseline);
    let (Some(mean_difference), Some(std_dev_difference)) = (mean(&diffs), sample_std_dev(&diffs))
    else {
        return Err(CompareError::InsufficientPairs(n));
    };

    let scale = diffs.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    if std_dev_difference.is_nan() || std_dev_difference <= VARIANCE_TOLERANCE * scale {
        tracing::debug!(pairs = n, mean_difference, "zero spread in paired differences");
        return Err(CompareError::DegenerateVariance);
    }

    let degrees_of_freedom = (n - 1) as f64;
    let t_statistic = mean_difference / (std_dev_difference / (n as f64).sqrt());
    let p_value = two_sided_p_value(t_statistic, degrees_of_freedom)?;

    tracing::debug!(
        pairs = n,
        t_statistic,
        p_value,
        mean_difference,
        std_dev_difference,
        "paired t-test"
    );

    Ok(TTestResult {
        t_statistic,
        p_value,
        degrees_of_freedom,
        pairs: n,
        mean_difference,
        std_dev_difference,
    })
}

/// Two-sided tail probability of Student's t with `df` degrees of freedom
/// evaluated at `|t|`.
///
/// Uses the survival function rather than `1 - cdf` so that very small
/// p-values keep their precision. A NaN `t` has no tail probability and is
/// an error.
pub fn two_sided_p_value(t: f64, df: f64) -> Result<f64, CompareError> {
    if t.is_nan() {
        return Err(CompareError::Distribution("t statistic is NaN".to_string()));
    }
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| CompareError::Distribution(e.to_string()))?;
    let p = 2.0 * dist.sf(t.abs());
    Ok(p.clamp(0.0, 1.0))
}
