//! parkinglot CLI - run a parking lot session over stdin

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use parkinglot::cli::{Args, SubCommand};
use parkinglot::{format_fatal, ExecutionContext, ParkingError, SessionRunner, FATAL_EXIT_CODE};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let ctx = args.execution_context();
    match run(&args, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ParkingError>() {
            Some(fatal) if fatal.is_session_fatal() => {
                warn!(error = %fatal, "stopping session");
                println!("{}", format_fatal(fatal, &ctx.output_format));
                ExitCode::from(FATAL_EXIT_CODE)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &Args, ctx: &ExecutionContext) -> anyhow::Result<()> {
    let summary = match args.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            SessionRunner::new(ctx.clone()).run_reader(stdin.lock(), &mut stdout.lock())?
        }
        Some(SubCommand::Repl) => parkinglot::repl::run_repl(ctx.clone())?,
    };

    debug!(
        commands = summary.commands_executed,
        exited = summary.exited,
        "done"
    );
    Ok(())
}

/// Logs go to stderr so stdout only carries command output
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).context("invalid log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
