//! Report presenters.

use std::io::{self, Write};

use paircmp_core::Comparison;

use crate::output::{format_float, format_vector, format_workers};
use crate::ui::styled_verdict;

/// Renders a [`Comparison`] to a writer.
pub trait ReportPresenter {
    /// Write the report for `comparison` to `out`.
    fn present(&self, comparison: &Comparison, out: &mut dyn Write) -> io::Result<()>;

    /// Render the report into a byte buffer.
    fn render(&self, comparison: &Comparison) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.present(comparison, &mut buf)?;
        Ok(buf)
    }
}

/// Plain-text report: means, differences, t-test block, verdict.
pub struct TextPresenter {
    verbose: bool,
    color: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool, color: bool) -> Self {
        Self { verbose, color }
    }
}

impl ReportPresenter for TextPresenter {
    fn present(&self, c: &Comparison, out: &mut dyn Write) -> io::Result<()> {
        if self.verbose {
            writeln!(out, "Worker Counts: {}", format_workers(&c.workers))?;
        }
        writeln!(
            out,
            "Mean Execution Times ({}): {}",
            c.baseline_label,
            format_vector(&c.baseline_means)
        )?;
        writeln!(
            out,
            "Mean Execution Times ({}): {}",
            c.treatment_label,
            format_vector(&c.treatment_means)
        )?;
        writeln!(
            out,
            "Differences in Mean Execution Times: {}",
            format_vector(&c.differences)
        )?;
        writeln!(out, "Paired t-test Results:")?;
        writeln!(out, "  t-statistic: {}", format_float(c.test.t_statistic))?;
        writeln!(out, "  p-value: {}", format_float(c.test.p_value))?;
        if self.verbose {
            writeln!(out, "  design: {}", c.design)?;
            writeln!(out, "  pairs: {}", c.test.pairs)?;
            writeln!(out, "  degrees of freedom: {}", c.test.degrees_of_freedom)?;
            writeln!(
                out,
                "  mean difference: {}",
                format_float(c.test.mean_difference)
            )?;
            writeln!(
                out,
                "  std dev of differences: {}",
                format_float(c.test.std_dev_difference)
            )?;
            writeln!(out, "  alpha: {}", c.alpha)?;
        }
        writeln!(out, "{}", styled_verdict(c.verdict, self.color))?;
        Ok(())
    }
}

/// JSON report: the serialized [`Comparison`].
pub struct JsonPresenter {
    pretty: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportPresenter for JsonPresenter {
    fn present(&self, c: &Comparison, out: &mut dyn Write) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, c)?;
        } else {
            serde_json::to_writer(&mut *out, c)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
