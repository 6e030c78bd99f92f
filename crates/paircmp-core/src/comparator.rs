//! The paired-sample comparator.
//!
//! Lines up a baseline and a treatment [`MeasurementGroup`], computes their
//! mean vectors and pointwise differences, runs a paired t-test and turns the
//! p-value into a [`Verdict`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::DEFAULT_ALPHA;
use crate::dataset::MeasurementGroup;
use crate::error::CompareError;
use crate::stats::differences;
use crate::ttest::{paired_t_test, TTestResult};

/// What counts as one paired observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestDesign {
    /// One pair per worker count: the per-count means of each group.
    ///
    /// This compares means of means rather than doing a repeated-measures
    /// test, which is statistically unconventional. It is the default to
    /// stay comparable with previously published results.
    #[default]
    GroupMeans,
    /// One pair per raw trial: sample `j` at worker count `k` in the
    /// treatment against sample `j` at worker count `k` in the baseline.
    RawSamples,
}

impl TestDesign {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GroupMeans => "group-means",
            Self::RawSamples => "raw-samples",
        }
    }
}

impl fmt::Display for TestDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestDesign {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "means" | "group-means" => Ok(Self::GroupMeans),
            "samples" | "raw-samples" => Ok(Self::RawSamples),
            other => Err(CompareError::InvalidDesign(other.to_string())),
        }
    }
}

/// Outcome of the significance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// p < alpha: the means differ significantly.
    Reject,
    /// p >= alpha: no significant difference detected.
    FailToReject,
}

impl Verdict {
    /// Decide from a p-value. The comparison is strict: `p == alpha` fails
    /// to reject.
    #[must_use]
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Self::Reject
        } else {
            Self::FailToReject
        }
    }

    #[must_use]
    pub fn is_significant(self) -> bool {
        self == Self::Reject
    }
}

/// Everything computed by one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline_label: String,
    pub treatment_label: String,
    /// Worker counts shared by both groups, in key order.
    pub workers: Vec<u64>,
    pub baseline_means: Vec<f64>,
    pub treatment_means: Vec<f64>,
    /// `treatment_means[i] - baseline_means[i]`.
    pub differences: Vec<f64>,
    pub test: TTestResult,
    pub alpha: f64,
    pub design: TestDesign,
    pub verdict: Verdict,
}

/// Compares a treatment group against a baseline group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedComparator {
    alpha: f64,
    design: TestDesign,
}

impl Default for PairedComparator {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            design: TestDesign::default(),
        }
    }
}

impl PairedComparator {
    /// Create a comparator. `alpha` must lie strictly between 0 and 1.
    pub fn new(alpha: f64, design: TestDesign) -> Result<Self, CompareError> {
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(CompareError::InvalidAlpha(alpha));
        }
        Ok(Self { alpha, design })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn design(&self) -> TestDesign {
        self.design
    }

    /// Run the comparison.
    ///
    /// # Errors
    ///
    /// - [`CompareError::InputShapeMismatch`] if the groups' worker counts
    ///   differ in size or order, or (raw-sample design) if sample counts
    ///   differ at some worker count.
    /// - [`CompareError::InsufficientPairs`] or
    ///   [`CompareError::DegenerateVariance`] if the test is undefined.
    pub fn compare(
        &self,
        baseline: &MeasurementGroup,
        treatment: &MeasurementGroup,
    ) -> Result<Comparison, CompareError> {
        let workers = check_aligned(baseline, treatment)?;

        let baseline_means = baseline.means();
        let treatment_means = treatment.means();
        let diffs = differences(&treatment_means, &baseline_means);

        let test = match self.design {
            TestDesign::GroupMeans => {
                warn_on_unbalanced(baseline, treatment);
                paired_t_test(&treatment_means, &baseline_means)?
            }
            TestDesign::RawSamples => {
                let (t, b) = flatten_pairs(baseline, treatment)?;
                paired_t_test(&t, &b)?
            }
        };
        let verdict = Verdict::from_p_value(test.p_value, self.alpha);

        tracing::debug!(
            baseline = baseline.name(),
            treatment = treatment.name(),
            design = %self.design,
            t_statistic = test.t_statistic,
            p_value = test.p_value,
            ?verdict,
            "comparison complete"
        );

        Ok(Comparison {
            baseline_label: baseline.label().to_string(),
            treatment_label: treatment.label().to_string(),
            workers,
            baseline_means,
            treatment_means,
            differences: diffs,
            test,
            alpha: self.alpha,
            design: self.design,
            verdict,
        })
    }
}

/// Both groups must list the same worker counts in the same order.
fn check_aligned(
    baseline: &MeasurementGroup,
    treatment: &MeasurementGroup,
) -> Result<Vec<u64>, CompareError> {
    let b = baseline.workers();
    let t = treatment.workers();
    if b.len() != t.len() {
        return Err(CompareError::InputShapeMismatch(format!(
            "'{}' has {} worker counts, '{}' has {}",
            baseline.name(),
            b.len(),
            treatment.name(),
            t.len()
        )));
    }
    if let Some((i, (bw, tw))) = b.iter().zip(&t).enumerate().find(|(_, (x, y))| x != y) {
        return Err(CompareError::InputShapeMismatch(format!(
            "worker counts diverge at position {i}: '{}' has {bw}, '{}' has {tw}",
            baseline.name(),
            treatment.name()
        )));
    }
    Ok(b)
}

fn warn_on_unbalanced(baseline: &MeasurementGroup, treatment: &MeasurementGroup) {
    for (b, t) in baseline.series().iter().zip(treatment.series()) {
        if b.samples.len() != t.samples.len() {
            tracing::warn!(
                workers = b.workers,
                baseline_samples = b.samples.len(),
                treatment_samples = t.samples.len(),
                "unequal sample counts; group means carry unequal weight"
            );
        }
    }
}

fn flatten_pairs(
    baseline: &MeasurementGroup,
    treatment: &MeasurementGroup,
) -> Result<(Vec<f64>, Vec<f64>), CompareError> {
    let mut t_all = Vec::with_capacity(treatment.sample_count());
    let mut b_all = Vec::with_capacity(baseline.sample_count());
    for (b, t) in baseline.series().iter().zip(treatment.series()) {
        if b.samples.len() != t.samples.len() {
            return Err(CompareError::InputShapeMismatch(format!(
                "workers={}: '{}' has {} samples, '{}' has {}",
                b.workers,
                baseline.name(),
                b.samples.len(),
                treatment.name(),
                t.samples.len()
            )));
        }
        b_all.extend_from_slice(&b.samples);
        t_all.extend_from_slice(&t.samples);
    }
    Ok((t_all, b_all))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_dataset;
    use crate::dataset::Series;

    fn group(name: &str, rows: &[(u64, &[f64])]) -> MeasurementGroup {
        let series = rows
            .iter()
            .map(|(w, s)| Series::new(*w, s.to_vec()))
            .collect();
        MeasurementGroup::new(name, name.to_uppercase(), series).unwrap()
    }

    #[test]
    fn builtin_comparison_rejects_null() {
        let ds = builtin_dataset();
        let cmp = PairedComparator::default()
            .compare(ds.group("single").unwrap(), ds.group("distributed").unwrap())
            .unwrap();
        assert_eq!(cmp.workers.len(), 12);
        assert_eq!(cmp.test.pairs, 12);
        assert!((cmp.test.t_statistic - 8.748_399_148_733_686).abs() < 1e-9);
        assert!(cmp.test.p_value < 1e-5);
        assert!((cmp.test.p_value - 2.763_934_609_651_76e-6).abs() < 1e-9);
        assert_eq!(cmp.verdict, Verdict::Reject);
        assert_eq!(cmp.baseline_label, "No Slave");
        assert_eq!(cmp.treatment_label, "Distributed");
    }

    #[test]
    fn builtin_slave_comparison_fails_to_reject() {
        let ds = builtin_dataset();
        let cmp = PairedComparator::default()
            .compare(
                ds.group("single").unwrap(),
                ds.group("distributed-slave").unwrap(),
            )
            .unwrap();
        assert!((cmp.test.t_statistic - 1.187_715_091_488_405).abs() < 1e-9);
        assert!((cmp.test.p_value - 0.259_959_165_188_641).abs() < 1e-6);
        assert_eq!(cmp.verdict, Verdict::FailToReject);
    }

    #[test]
    fn differences_match_means() {
        let ds = builtin_dataset();
        let cmp = crate::compare(ds.group("single").unwrap(), ds.group("distributed").unwrap())
            .unwrap();
        assert_eq!(cmp.differences.len(), cmp.workers.len());
        for i in 0..cmp.differences.len() {
            assert_eq!(
                cmp.differences[i],
                cmp.treatment_means[i] - cmp.baseline_means[i]
            );
        }
    }

    #[test]
    fn raw_sample_design_uses_every_trial() {
        let ds = builtin_dataset();
        let comparator = PairedComparator::new(0.05, TestDesign::RawSamples).unwrap();
        let cmp = comparator
            .compare(ds.group("single").unwrap(), ds.group("distributed").unwrap())
            .unwrap();
        assert_eq!(cmp.test.pairs, 60);
        assert_eq!(cmp.test.degrees_of_freedom, 59.0);
        assert_eq!(cmp.design, TestDesign::RawSamples);
        assert_eq!(cmp.verdict, Verdict::Reject);
        // The reported means and differences do not depend on the design.
        assert_eq!(cmp.baseline_means.len(), 12);
    }

    #[test]
    fn raw_sample_design_needs_equal_sample_counts() {
        let b = group("b", &[(1, &[1.0, 2.0]), (2, &[3.0, 4.0])]);
        let t = group("t", &[(1, &[1.5, 2.5, 3.5]), (2, &[3.0, 5.0])]);
        let comparator = PairedComparator::new(0.05, TestDesign::RawSamples).unwrap();
        let err = comparator.compare(&b, &t).unwrap_err();
        assert!(matches!(err, CompareError::InputShapeMismatch(_)));
        // Group means tolerate it.
        assert!(PairedComparator::default().compare(&b, &t).is_ok());
    }

    #[test]
    fn mismatched_worker_count_sizes() {
        let b = group("b", &[(1, &[1.0]), (2, &[2.0]), (4, &[3.0])]);
        let t = group("t", &[(1, &[1.0]), (2, &[2.0])]);
        let err = PairedComparator::default().compare(&b, &t).unwrap_err();
        assert!(matches!(err, CompareError::InputShapeMismatch(_)));
    }

    #[test]
    fn mismatched_worker_count_order() {
        let b = group("b", &[(1, &[1.0]), (2, &[2.0]), (4, &[3.0])]);
        let t = group("t", &[(1, &[1.0]), (4, &[3.0]), (2, &[2.5])]);
        let err = PairedComparator::default().compare(&b, &t).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn single_worker_count_is_degenerate() {
        let b = group("b", &[(1, &[1.0, 2.0])]);
        let t = group("t", &[(1, &[3.0, 4.0])]);
        assert_eq!(
            PairedComparator::default().compare(&b, &t).unwrap_err(),
            CompareError::InsufficientPairs(1)
        );
    }

    #[test]
    fn uniform_shift_is_degenerate() {
        let b = group("b", &[(1, &[10.0]), (2, &[20.0]), (4, &[30.0])]);
        let t = group("t", &[(1, &[15.0]), (2, &[25.0]), (4, &[35.0])]);
        assert_eq!(
            PairedComparator::default().compare(&b, &t).unwrap_err(),
            CompareError::DegenerateVariance
        );
    }

    #[test]
    fn alpha_must_be_open_unit_interval() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(PairedComparator::new(bad, TestDesign::GroupMeans).is_err());
        }
        let c = PairedComparator::new(0.01, TestDesign::GroupMeans).unwrap();
        assert_eq!(c.alpha(), 0.01);
        assert_eq!(c.design(), TestDesign::GroupMeans);
    }

    #[test]
    fn stricter_alpha_can_flip_verdict() {
        let ds = builtin_dataset();
        let comparator = PairedComparator::new(1e-7, TestDesign::GroupMeans).unwrap();
        let cmp = comparator
            .compare(ds.group("single").unwrap(), ds.group("distributed").unwrap())
            .unwrap();
        assert_eq!(cmp.verdict, Verdict::FailToReject);
    }

    #[test]
    fn verdict_threshold_is_strict() {
        assert_eq!(Verdict::from_p_value(0.049, 0.05), Verdict::Reject);
        assert_eq!(Verdict::from_p_value(0.05, 0.05), Verdict::FailToReject);
        assert_eq!(Verdict::from_p_value(0.2, 0.05), Verdict::FailToReject);
        assert!(Verdict::Reject.is_significant());
    }

    #[test]
    fn design_parsing() {
        assert_eq!("means".parse::<TestDesign>().unwrap(), TestDesign::GroupMeans);
        assert_eq!("Samples".parse::<TestDesign>().unwrap(), TestDesign::RawSamples);
        assert_eq!("raw-samples".parse::<TestDesign>().unwrap(), TestDesign::RawSamples);
        assert_eq!(
            "bogus".parse::<TestDesign>().unwrap_err(),
            CompareError::InvalidDesign("bogus".into())
        );
        assert_eq!(TestDesign::GroupMeans.to_string(), "group-means");
    }

    #[test]
    fn comparison_serializes() {
        let ds = builtin_dataset();
        let cmp = crate::compare(ds.group("single").unwrap(), ds.group("distributed").unwrap())
            .unwrap();
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["verdict"], "reject");
        assert_eq!(json["design"], "group-means");
        assert_eq!(json["workers"].as_array().unwrap().len(), 12);
        assert_eq!(json["test"]["pairs"], 12);
    }
}
