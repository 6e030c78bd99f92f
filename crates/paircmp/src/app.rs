//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};

use paircmp_cli::output::{format_workers, write_report_to_file};
use paircmp_cli::{JsonPresenter, ReportPresenter, TextPresenter};
use paircmp_core::{builtin_dataset, Comparison, Dataset, PairedComparator};

use crate::config::{AppConfig, OutputFormat};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = crate::version::version(), "starting paircmp");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        paircmp_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let dataset = load_dataset(config)?;

    if config.list {
        return list_groups(&dataset, &mut std::io::stdout().lock());
    }

    let comparison = run_comparison(config, &dataset)?;
    let report = render(config, &comparison)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&report)?;
    stdout.flush()?;

    // Write to file if requested
    if let Some(ref path) = config.output {
        let file_report = if config.format == OutputFormat::Text {
            // Files never carry terminal escape codes.
            TextPresenter::new(config.verbose, false).render(&comparison)?
        } else {
            report
        };
        write_report_to_file(path, &file_report)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(())
}

/// Load the dataset named by the configuration, or the built-in one.
pub fn load_dataset(config: &AppConfig) -> Result<Dataset> {
    match config.data {
        Some(ref path) => {
            Dataset::load(path).with_context(|| format!("loading dataset {}", path.display()))
        }
        None => Ok(builtin_dataset()),
    }
}

/// Compare the configured baseline and treatment groups.
pub fn run_comparison(config: &AppConfig, dataset: &Dataset) -> Result<Comparison> {
    let comparator = PairedComparator::new(config.alpha, config.design)?;
    let baseline = dataset.group(&config.baseline)?;
    let treatment = dataset.group(&config.treatment)?;

    tracing::info!(
        baseline = baseline.name(),
        treatment = treatment.name(),
        alpha = config.alpha,
        design = %config.design,
        "comparing groups"
    );

    let comparison = comparator
        .compare(baseline, treatment)
        .with_context(|| format!("comparing '{}' against '{}'", treatment.name(), baseline.name()))?;
    Ok(comparison)
}

fn render(config: &AppConfig, comparison: &Comparison) -> Result<Vec<u8>> {
    let presenter: Box<dyn ReportPresenter> = match config.format {
        OutputFormat::Text => Box::new(TextPresenter::new(config.verbose, true)),
        OutputFormat::Json => Box::new(JsonPresenter::new(true)),
    };
    Ok(presenter.render(comparison)?)
}

fn list_groups(dataset: &Dataset, out: &mut dyn Write) -> Result<()> {
    for group in dataset.groups() {
        writeln!(
            out,
            "{:<20} {:<24} workers={} samples={}",
            group.name(),
            group.label(),
            format_workers(&group.workers()),
            group.sample_count()
        )?;
    }
    Ok(())
}
