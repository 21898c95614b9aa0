//! pgparams CLI - Rewrite `?` placeholders in db.query() calls to `$n`

use clap::Parser;
use pgparams::cli::{Cli, Commands, InputArgs, Inputs};
use pgparams::rewriter::{check_file, convert_file};
use pgparams::QueryMatcher;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => run_convert(&args),
        Commands::Check(args) => run_check(&args),
    }
}

fn prepare(args: &InputArgs) -> pgparams::Result<(Inputs, QueryMatcher)> {
    let inputs = args.resolve()?;
    let matcher = QueryMatcher::new(&inputs.call)?;
    Ok((inputs, matcher))
}

/// Run the convert command
fn run_convert(args: &InputArgs) -> ExitCode {
    let (inputs, matcher) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    tracing::debug!(call = matcher.call(), files = inputs.files.len(), "starting conversion");

    // Files are independent, but a failure stops the run where it happened.
    for path in &inputs.files {
        match convert_file(&matcher, path) {
            Ok(report) => {
                tracing::info!(
                    path = %report.path.display(),
                    calls = report.calls,
                    rewritten = report.rewritten,
                    placeholders = report.placeholders,
                    "converted"
                );
                println!("Converted {}", path.display());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    println!("Conversion complete!");
    ExitCode::SUCCESS
}

/// Run the check command
fn run_check(args: &InputArgs) -> ExitCode {
    let (inputs, matcher) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut needs_conversion = false;
    let mut had_errors = false;

    for path in &inputs.files {
        match check_file(&matcher, path) {
            Ok(report) => {
                if report.changed() {
                    eprintln!(
                        "{}: needs conversion ({} placeholders)",
                        path.display(),
                        report.placeholders
                    );
                    needs_conversion = true;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                had_errors = true;
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else if needs_conversion {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
