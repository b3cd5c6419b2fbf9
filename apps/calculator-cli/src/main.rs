//! Calculator command-line front end.
//!
//! ```bash
//! calculator-cli add 2 3          # 5
//! calculator-cli add 2 3.0        # 5.0
//! calculator-cli --json sub 5 3   # {"operation":"subtract","a":5,"b":3,"result":2}
//! calculator-cli add '"2"' 3      # error: 'a' must be an int or float, got 'string'
//! ```
//!
//! Operands are parsed as JSON literals. Exit status is 0 on success, 1 when
//! the calculation or configuration fails, and 2 on usage errors.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;
mod operand;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use calculator::{Calculator, Operation};

use crate::config::AppConfig;
use crate::operand::parse_operand;

/// Validated addition and subtraction of two numbers
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print A + B
    Add(OperandArgs),
    /// Print A - B
    #[command(visible_alias = "sub")]
    Subtract(OperandArgs),
    /// Print effective configuration (JSON) and exit
    PrintConfig,
}

#[derive(Args)]
struct OperandArgs {
    /// First operand (JSON literal)
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    a: Value,

    /// Second operand (JSON literal)
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    b: Value,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // defaults -> YAML (if provided) -> env (CALCULATOR__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.json);

    logging::init_logging(&config.logging, cli.verbose)?;
    // the subscriber only exists from here on
    tracing::debug!(from_file = cli.config.is_some(), "configuration loaded");

    let (operation, args) = match cli.command {
        Commands::Add(args) => (Operation::Add, args),
        Commands::Subtract(args) => (Operation::Subtract, args),
        Commands::PrintConfig => {
            println!("{}", config.to_json()?);
            return Ok(ExitCode::SUCCESS);
        }
    };

    tracing::info!(%operation, "running calculation");

    match Calculator::apply(operation, &args.a, &args.b) {
        Ok(result) => {
            let rendered =
                output::render_result(config.output.json, operation, &args.a, &args.b, result)?;
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if config.output.json {
                println!("{}", output::render_error_json(&err)?);
            } else {
                eprintln!("error: {err}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
