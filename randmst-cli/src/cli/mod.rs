//! Command-line interface for running random MST experiments.
//!
//! The single `run` command maps its options onto an
//! [`randmst_core::ExperimentBuilder`], runs the experiment and renders the
//! summary as text or JSON.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Command, OutputFormat, RunCommand, StrategyArg, render_summary, run_cli,
};
pub use report::SummaryReport;

#[cfg(test)]
mod tests;
