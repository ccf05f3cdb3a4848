//! Unit tests for argument parsing, command execution and rendering.

use super::commands::{builder_for, run_command};
use super::{Cli, CliError, Command, OutputFormat, RunCommand, StrategyArg, render_summary, run_cli};

use clap::Parser;
use randmst_core::{
    ExecutionStrategy, ExperimentBuilder, ExperimentError, ExperimentErrorCode, ExperimentSummary,
    MstErrorCode,
};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use randmst_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn run_args(vertices: usize, trials: usize, dimension: u8) -> RunCommand {
    RunCommand {
        full: true,
        vertices,
        trials,
        dimension,
        seed: Some(7),
        strategy: StrategyArg::ThreadPerTrial,
        format: OutputFormat::Text,
    }
}

fn single_vertex_summary() -> ExperimentSummary {
    match ExperimentBuilder::new().with_node_count(1).build().map(|e| e.run()) {
        Ok(Ok(summary)) => summary,
        Ok(Err(err)) | Err(err) => panic!("single-vertex experiment must succeed: {err}"),
    }
}

#[test]
fn clap_applies_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["randmst", "run"])?;
    let Command::Run(run) = cli.command;
    assert!(!run.full);
    assert_eq!(run.vertices, 1_000);
    assert_eq!(run.trials, 1);
    assert_eq!(run.dimension, 0);
    assert_eq!(run.seed, None);
    assert_eq!(run.strategy, StrategyArg::ThreadPerTrial);
    assert_eq!(run.format, OutputFormat::Text);
    Ok(())
}

#[test]
fn clap_parses_every_option() -> TestResult {
    let cli = Cli::try_parse_from([
        "randmst", "run", "--full", "-n", "256", "-t", "8", "-d", "3", "--seed", "42",
        "--strategy", "pool", "--format", "json",
    ])?;
    assert_eq!(cli.output_format(), OutputFormat::Json);
    let Command::Run(run) = cli.command;
    assert!(run.full);
    assert_eq!(run.vertices, 256);
    assert_eq!(run.trials, 8);
    assert_eq!(run.dimension, 3);
    assert_eq!(run.seed, Some(42));
    assert_eq!(run.strategy, StrategyArg::Pool);
    Ok(())
}

#[rstest]
#[case::unknown_strategy(&["randmst", "run", "--strategy", "fibers"])]
#[case::unknown_format(&["randmst", "run", "--format", "xml"])]
#[case::negative_vertices(&["randmst", "run", "-n", "-4"])]
#[case::missing_command(&["randmst"])]
fn clap_rejects_malformed_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn builder_mirrors_the_command() {
    let mut command = run_args(64, 5, 2);
    command.strategy = StrategyArg::Pool;
    let builder = builder_for(&command);
    assert_eq!(builder.node_count(), 64);
    assert_eq!(builder.trials(), 5);
    assert_eq!(builder.dimension(), 2);
    assert!(builder.is_full());
    assert_eq!(builder.execution_strategy(), ExecutionStrategy::Pool);
}

#[rstest]
#[case::zero_vertices(run_args(0, 1, 0), ExperimentErrorCode::InvalidVertexCount)]
#[case::zero_trials(run_args(10, 0, 0), ExperimentErrorCode::InvalidTrialCount)]
#[case::dimension_too_large(run_args(10, 1, 5), ExperimentErrorCode::InvalidDimension)]
fn run_command_rejects_invalid_configuration(
    #[case] command: RunCommand,
    #[case] expected: ExperimentErrorCode,
) {
    match run_command(command) {
        Err(CliError::Core(err)) => {
            assert_eq!(err.code(), expected);
            assert!(err.is_configuration_error());
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn run_cli_reports_disconnected_trials() {
    let mut command = run_args(2, 64, 1);
    command.full = false;
    command.seed = Some(13);
    let cli = Cli {
        command: Command::Run(command),
    };
    match run_cli(cli) {
        Err(CliError::Core(err @ ExperimentError::TrialFailed { .. })) => {
            assert_eq!(err.mst_code(), Some(MstErrorCode::Disconnected));
        }
        other => panic!("expected a failed trial, got {other:?}"),
    }
}

#[rstest]
#[case(StrategyArg::ThreadPerTrial)]
#[case(StrategyArg::Pool)]
fn run_cli_echoes_configuration(#[case] strategy: StrategyArg) -> TestResult {
    let mut command = run_args(40, 3, 2);
    command.strategy = strategy;
    let summary = run_cli(Cli {
        command: Command::Run(command),
    })?;
    assert_eq!(summary.node_count(), 40);
    assert_eq!(summary.trials(), 3);
    assert_eq!(summary.dimension().get(), 2);
    assert!(summary.is_full());
    assert!(summary.average_weight() > 0.0);
    Ok(())
}

#[test]
fn render_text_prints_three_lines() -> TestResult {
    let summary = single_vertex_summary();
    let mut buffer = Vec::new();
    render_summary(&summary, OutputFormat::Text, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0.000000 1 1 0");
    assert!(lines[1].ends_with(" seconds for graph construction"));
    assert!(lines[2].ends_with(" seconds for Prim's algorithm"));
    let seconds = lines[1]
        .split_whitespace()
        .next()
        .ok_or("missing timing")?;
    assert_eq!(seconds.split('.').nth(1).map(str::len), Some(6));
    Ok(())
}

#[test]
fn render_json_emits_one_object() -> TestResult {
    let summary = single_vertex_summary();
    let mut buffer = Vec::new();
    render_summary(&summary, OutputFormat::Json, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(text.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value["average_weight"], 0.0);
    assert_eq!(value["node_count"], 1);
    assert_eq!(value["trials"], 1);
    assert_eq!(value["dimension"], 0);
    assert_eq!(value["full"], false);
    assert!(value["generation_seconds"].is_f64());
    assert!(value["solve_seconds"].is_f64());
    Ok(())
}

#[test]
fn run_command_logs_completion() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || run_command(run_args(20, 2, 0)))?;

    let completed = layer.events_with_message("command completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].level, Level::INFO);
    assert_eq!(completed[0].fields["vertices"], "20");
    assert_eq!(completed[0].fields["trials"], "2");
    Ok(())
}
