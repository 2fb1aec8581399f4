//! repute-cli: Decentralization metrics for reputation distributions.
//!
//! Loads a reputation list (one value per line) or inline values, prints the
//! Gini coefficient and Nakamoto score, and optionally writes the Lorenz
//! curve and coefficient chart as SVG.

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use repute_core::loader::load_reputations;
use repute_core::traits::DecentralizationMetrics;
use repute_core::types::{LorenzCurve, MetricsReport, ReputationDistribution};
use repute_metrics::MetricsEngine;
use repute_viz::write_analysis;
use serde::Serialize;
use tracing::info;

use crate::settings::Settings;

/// Repute command-line interface.
#[derive(Parser, Debug)]
#[command(name = "repute-cli")]
#[command(version, about = "Gini and Nakamoto coefficients of a reputation distribution")]
struct Cli {
    /// Settings file (TOML). Defaults to <config dir>/repute/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a reputation file with one value per line.
    Analyze(AnalyzeArgs),
    /// Analyze values given on the command line.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Reputation file (default: the `input` setting, reps.txt).
    file: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Comma-separated reputation values, e.g. 10,0,0,0.
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Decimal digits kept in the coefficients.
    #[arg(short, long)]
    precision: Option<u32>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Include the Lorenz curve points in the JSON output.
    #[arg(long, requires = "json")]
    curve: bool,

    /// Write the Lorenz curve and coefficient chart to this SVG file.
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Chart title (overrides the render.title setting).
    #[arg(long)]
    title: Option<String>,
}

impl OutputArgs {
    /// Fold command-line overrides into the loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(precision) = self.precision {
            settings.precision = precision;
        }
        if let Some(title) = &self.title {
            settings.render.title = title.clone();
        }
    }
}

/// JSON shape of `--json` output.
#[derive(Serialize)]
struct AnalysisOutput<'a> {
    #[serde(flatten)]
    report: &'a MetricsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    lorenz: Option<&'a LorenzCurve>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if let Some(format) = cli.log_format {
        settings.log_format = format;
    }

    let (values, output) = match cli.command {
        Commands::Analyze(args) => {
            let path = args.file.unwrap_or_else(|| settings.input.clone());
            args.output.apply(&mut settings);
            settings.validate()?;
            init_logging(&settings.log_level, &settings.log_format);
            let values = load_reputations(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (values, args.output)
        }
        Commands::Sample(args) => {
            args.output.apply(&mut settings);
            settings.validate()?;
            init_logging(&settings.log_level, &settings.log_format);
            (args.values, args.output)
        }
    };

    run(values, &output, &settings)
}

/// Compute the metrics, print them, and render the chart if requested.
fn run(values: Vec<f64>, output: &OutputArgs, settings: &Settings) -> Result<()> {
    let dist = ReputationDistribution::new(values).context("invalid reputation distribution")?;
    let engine = MetricsEngine::new();
    let report = engine.report(&dist, settings.precision);
    info!(
        participants = report.participants,
        gini = report.gini,
        nakamoto_score = report.nakamoto.score,
        "analysis complete"
    );

    let curve = (output.curve || output.plot.is_some()).then(|| engine.lorenz_curve(&dist));

    println!("{}", render_summary(&report, curve.as_ref(), output)?);

    if let Some(path) = &output.plot {
        // `curve` is always computed when a plot is requested.
        if let Some(curve) = &curve {
            write_analysis(path, &report, curve, &settings.render)
                .with_context(|| format!("failed to write chart {}", path.display()))?;
            println!("Chart written to {}", path.display());
        }
    }
    Ok(())
}

/// Text summary, or pretty JSON when `--json` is set.
fn render_summary(
    report: &MetricsReport,
    curve: Option<&LorenzCurve>,
    output: &OutputArgs,
) -> Result<String> {
    if !output.json {
        return Ok(report.to_string());
    }
    let out = AnalysisOutput {
        report,
        lorenz: curve.filter(|_| output.curve),
    };
    serde_json::to_string_pretty(&out).context("failed to encode report")
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so stdout carries only the report. `RUST_LOG` takes
/// precedence over `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
