//! Descriptive statistics over timing samples.

/// Arithmetic mean of `values`, or `None` when empty.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased sample variance (N - 1 denominator), or `None` for fewer than
/// two values.
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let delta = v - m;
            delta * delta
        })
        .sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`sample_variance`].
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Elementwise `treatment[i] - baseline[i]`.
///
/// Extra trailing elements of the longer slice are ignored; callers check
/// lengths first.
#[must_use]
pub fn differences(treatment: &[f64], baseline: &[f64]) -> Vec<f64> {
    treatment
        .iter()
        .zip(baseline)
        .map(|(t, b)| t - b)
        .collect()
}
