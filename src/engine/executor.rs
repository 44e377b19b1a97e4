//! Command executor

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ParkingError, Result};
use crate::lot::{parse_slot_number, Parking, ParkingLot, Removal};
use crate::output::OutputFormat;
use crate::parser::{Command, COMMAND_NAMES};
use crate::session::Session;

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
        }
    }
}

/// Result of a command that did not abort the session.
///
/// Fatal outcomes are the `Err` side of [`execute_command`]; everything in
/// here, including "full" and "not found", is expected user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub data: ResultData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultData {
    Created { capacity: usize },
    Allocated { slot: usize },
    LotFull,
    /// `park` without both a plate and a colour
    MissingCarDetails,
    Freed { slot: usize },
    SlotMissing { slot: i64 },
    NotFound,
    Status(Vec<SlotEntry>),
    Uninitialized,
    Plates(Vec<String>),
    Slots(Vec<usize>),
    Slot(usize),
    Help(Vec<&'static str>),
    Unrecognized(String),
    /// The session should end
    Exit,
}

/// One row of the status table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotEntry {
    pub slot: usize,
    pub plate: String,
    #[serde(rename = "colour")]
    pub color: String,
}

impl ExecutionResult {
    fn new(data: ResultData) -> Self {
        Self { data }
    }

    /// Whether this is a "no result" outcome rather than an answer
    pub fn is_soft(&self) -> bool {
        matches!(
            self.data,
            ResultData::LotFull
                | ResultData::MissingCarDetails
                | ResultData::SlotMissing { .. }
                | ResultData::NotFound
                | ResultData::Uninitialized
                | ResultData::Unrecognized(_)
        )
    }
}

/// Execute a parsed command against the session state
pub fn execute_command(
    cmd: &Command,
    ctx: &ExecutionContext,
    session: &mut Session,
) -> Result<ExecutionResult> {
    debug!(command = %cmd, format = ?ctx.output_format, "executing");

    let data = match cmd {
        Command::CreateParkingLot { capacity } => {
            let lot = ParkingLot::create(capacity)?;
            let capacity = lot.capacity();
            session.replace_lot(lot);
            info!(capacity, "parking lot created");
            ResultData::Created { capacity }
        }
        Command::Park { plate, color } => {
            let lot = session.lot_mut().ok_or(ParkingError::NotInitialized)?;
            match lot.park(plate, color) {
                Parking::Allocated(slot) => ResultData::Allocated { slot },
                Parking::Full => ResultData::LotFull,
                Parking::MissingDetails => ResultData::MissingCarDetails,
            }
        }
        Command::Leave { slot } => {
            let removal = match session.lot_mut() {
                Some(lot) => lot.remove_car(slot)?,
                // No lot behaves like a lot without slots
                None => ParkingLot::default().remove(parse_slot_number(slot)?),
            };
            match removal {
                Removal::Freed(slot) => ResultData::Freed { slot },
                Removal::DoesNotExist(slot) => ResultData::SlotMissing { slot },
                Removal::NotFound => ResultData::NotFound,
            }
        }
        Command::Status => match session.lot() {
            Some(lot) => ResultData::Status(
                lot.occupied()
                    .map(|(slot, car)| SlotEntry {
                        slot,
                        plate: car.plate.clone(),
                        color: car.color.clone(),
                    })
                    .collect(),
            ),
            None => ResultData::Uninitialized,
        },
        Command::PlateNumbersForColour { color } => {
            let plates = session
                .lot()
                .map(|lot| lot.plates_by_color(color))
                .unwrap_or_default();
            if plates.is_empty() {
                ResultData::NotFound
            } else {
                ResultData::Plates(plates)
            }
        }
        Command::SlotNumbersForColour { color } => {
            let slots = session
                .lot()
                .map(|lot| lot.slots_by_color(color))
                .unwrap_or_default();
            if slots.is_empty() {
                ResultData::NotFound
            } else {
                ResultData::Slots(slots)
            }
        }
        Command::SlotNumberForRegistration { plate } => {
            match session.lot().and_then(|lot| lot.slot_by_plate(plate)) {
                Some(slot) => ResultData::Slot(slot),
                None => ResultData::NotFound,
            }
        }
        Command::Help => ResultData::Help(COMMAND_NAMES.to_vec()),
        Command::Exit => ResultData::Exit,
        Command::Unknown(name) => ResultData::Unrecognized(name.clone()),
    };

    let result = ExecutionResult::new(data);
    if result.is_soft() {
        debug!(command = cmd.name(), outcome = ?result.data, "soft outcome");
    }
    Ok(result)
}
