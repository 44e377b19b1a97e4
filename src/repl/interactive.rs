//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::engine::{ExecutionContext, ResultData};
use crate::error::{ParkingError, Result};
use crate::output::format_output;
use crate::session::{SessionRunner, SessionSummary};

const PROMPT: &str = "parking> ";

/// Run an interactive session until `exit`, Ctrl-D, or a fatal error
pub fn run_repl(ctx: ExecutionContext) -> Result<SessionSummary> {
    let mut rl = DefaultEditor::new().map_err(|e| ParkingError::ReadlineError(e.to_string()))?;

    println!("parkinglot v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    let mut runner = SessionRunner::new(ctx);
    let mut summary = SessionSummary::default();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let Some(result) = runner.execute_line(line)? else {
                    continue;
                };
                summary.commands_executed += 1;

                if result.data == ResultData::Exit {
                    summary.exited = true;
                    break;
                }
                println!("{}", format_output(&result, &runner.context().output_format));
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C only drops the current input
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(ParkingError::ReadlineError(err.to_string())),
        }
    }

    debug!(commands = summary.commands_executed, "repl finished");
    Ok(summary)
}
