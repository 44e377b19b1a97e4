//! parkinglot - a line-oriented parking lot simulator
//!
//! A session owns one parking lot of fixed capacity. Commands read one per
//! line allocate slots first-fit, free them, and look cars up by colour or
//! plate.
//!
//! # Example
//!
//! ```
//! use parkinglot::{ExecutionContext, SessionRunner};
//!
//! let mut runner = SessionRunner::new(ExecutionContext::default());
//! let mut out = Vec::new();
//! runner
//!     .run_reader("create_parking_lot 1\npark KA-01 White\n".as_bytes(), &mut out)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("Allocated slot number: 1\n"));
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod lot;
pub mod output;
pub mod parser;
pub mod repl;
pub mod session;

pub use engine::{execute_command, ExecutionContext, ExecutionResult, ResultData};
pub use error::{ParkingError, Result, FATAL_EXIT_CODE};
pub use lot::{Car, ParkingLot, Slot};
pub use output::{format_fatal, format_output, OutputFormat};
pub use parser::{parse_command, Command};
pub use session::{Session, SessionRunner, SessionSummary};
