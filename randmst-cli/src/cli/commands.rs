//! Argument parsing and command execution for the `randmst` binary.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randmst_core::{
    ExecutionStrategy, ExperimentBuilder, ExperimentError, ExperimentSummary, SeedPolicy,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::report::SummaryReport;

const DEFAULT_VERTICES: usize = 1_000;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randmst",
    about = "Estimate the expected MST weight of random complete graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Returns the output format requested by the command.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        match &self.command {
            Command::Run(run) => run.format,
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run an experiment and print its averages.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Keep every edge instead of pruning heavy ones.
    #[arg(long)]
    pub full: bool,

    /// Number of vertices per graph.
    #[arg(short = 'n', long = "vertices", default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Number of independent trials.
    #[arg(short = 't', long, default_value_t = 1)]
    pub trials: usize,

    /// Edge-weight model: 0 for uniform weights, 1 to 4 for Euclidean
    /// distance in that many dimensions.
    #[arg(short = 'd', long, default_value_t = 0)]
    pub dimension: u8,

    /// Base seed for reproducible runs; system entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How trials are scheduled onto threads.
    #[arg(long, value_enum, default_value_t = StrategyArg::ThreadPerTrial)]
    pub strategy: StrategyArg,

    /// Summary format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Command-line spelling of [`ExecutionStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One OS thread per trial.
    ThreadPerTrial,
    /// The Rayon global pool.
    Pool,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::ThreadPerTrial => Self::ThreadPerTrial,
            StrategyArg::Pool => Self::Pool,
        }
    }
}

/// Summary formats written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three whitespace-separated lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The experiment rejected its configuration or a trial failed.
    #[error(transparent)]
    Core(#[from] ExperimentError),
    /// Writing the summary failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),
    /// Serialising the JSON summary failed.
    #[error("failed to encode summary as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError::Core`] when the options are out of range or a trial
/// fails.
///
/// # Examples
/// ```
/// use randmst_cli::cli::{Cli, Command, OutputFormat, RunCommand, StrategyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         full: true,
///         vertices: 16,
///         trials: 2,
///         dimension: 2,
///         seed: Some(3),
///         strategy: StrategyArg::Pool,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.trials(), 2);
/// # Ok::<(), randmst_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli))]
pub fn run_cli(cli: Cli) -> Result<ExperimentSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<ExperimentSummary, CliError> {
    let summary = builder_for(&command).build()?.run()?;
    info!(
        vertices = summary.node_count(),
        trials = summary.trials(),
        dimension = %summary.dimension(),
        average_weight = summary.average_weight(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn builder_for(command: &RunCommand) -> ExperimentBuilder {
    let seed = command.seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed);
    ExperimentBuilder::new()
        .with_node_count(command.vertices)
        .with_trials(command.trials)
        .with_dimension(command.dimension)
        .with_full(command.full)
        .with_seed(seed)
        .with_execution_strategy(command.strategy.into())
}

/// Writes `summary` to `writer` in the requested `format`.
///
/// Text output is three lines: the average weight followed by the vertex
/// count, trial count and dimension, then the two average stage timings.
/// Floats carry six decimals.
///
/// # Errors
/// Returns [`CliError::Io`] if writing fails and [`CliError::Json`] if JSON
/// encoding fails.
///
/// # Examples
/// ```
/// use randmst_cli::cli::{OutputFormat, render_summary};
/// use randmst_core::ExperimentBuilder;
///
/// let summary = ExperimentBuilder::new().with_node_count(1).build()?.run()?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text.lines().next(), Some("0.000000 1 1 0"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(
    summary: &ExperimentSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> Result<(), CliError> {
    let report = SummaryReport::from(summary);
    match format {
        OutputFormat::Text => {
            writeln!(
                writer,
                "{:.6} {} {} {}",
                report.average_weight, report.node_count, report.trials, report.dimension
            )?;
            writeln!(
                writer,
                "{:.6} seconds for graph construction",
                report.generation_seconds
            )?;
            writeln!(
                writer,
                "{:.6} seconds for Prim's algorithm",
                report.solve_seconds
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
