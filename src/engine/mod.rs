//! Execution engine for interpreter commands

pub mod executor;

pub use executor::{execute_command, ExecutionContext, ExecutionResult, ResultData, SlotEntry};
