//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::engine::ExecutionContext;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "parkinglot")]
#[command(author, version, about = "Simulate a parking lot from line-oriented commands", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output format as JSON, one object per command
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Start interactive REPL mode with line editing and history
    Repl,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext {
            output_format: self.output_format(),
        }
    }
}
