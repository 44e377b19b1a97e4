//! Runs interpreter sessions over line-oriented input

use std::io::{BufRead, Write};

use tracing::debug;

use crate::engine::{execute_command, ExecutionContext, ExecutionResult, ResultData};
use crate::error::Result;
use crate::output::format_output;
use crate::parser::parse_command;
use crate::session::Session;

/// Summary of a finished session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines executed, including `exit`
    pub commands_executed: usize,
    /// Whether the session ended through `exit` rather than end of input
    pub exited: bool,
}

/// Drives a [`Session`] one command at a time
pub struct SessionRunner {
    exec_ctx: ExecutionContext,
    session: Session,
}

impl SessionRunner {
    pub fn new(exec_ctx: ExecutionContext) -> Self {
        Self {
            exec_ctx,
            session: Session::new(),
        }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.exec_ctx
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and execute a single line. Blank lines yield `None`.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<ExecutionResult>> {
        match parse_command(line)? {
            Some(cmd) => execute_command(&cmd, &self.exec_ctx, &mut self.session).map(Some),
            None => Ok(None),
        }
    }

    /// Run commands from `reader`, writing each result to `writer`.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 end up in the
    /// plate or colour instead of ending the session. Output is flushed after
    /// every command. The first fatal error stops the session and is returned;
    /// nothing after it is read.
    pub fn run_reader<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            let Some(result) = self.execute_line(&line)? else {
                continue;
            };
            summary.commands_executed += 1;

            if result.data == ResultData::Exit {
                summary.exited = true;
                break;
            }

            writeln!(writer, "{}", format_output(&result, &self.exec_ctx.output_format))?;
            writer.flush()?;
        }

        debug!(
            commands = summary.commands_executed,
            exited = summary.exited,
            "session finished"
        );
        Ok(summary)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
