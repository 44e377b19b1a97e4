//! Command definitions for the parking lot interpreter

use serde::Serialize;

pub const CREATE_PARKING_LOT: &str = "create_parking_lot";
pub const PARK: &str = "park";
pub const LEAVE: &str = "leave";
pub const STATUS: &str = "status";
pub const PLATE_NUMBERS_FOR_COLOUR: &str = "plate_numbers_for_cars_with_colour";
pub const SLOT_NUMBERS_FOR_COLOUR: &str = "slot_numbers_for_cars_with_colour";
pub const SLOT_NUMBER_FOR_REGISTRATION: &str = "slot_number_for_registration_number";
pub const HELP: &str = "help";
pub const EXIT: &str = "exit";

/// Command names in the order `help` lists them
pub const COMMAND_NAMES: &[&str] = &[
    CREATE_PARKING_LOT,
    PARK,
    LEAVE,
    STATUS,
    PLATE_NUMBERS_FOR_COLOUR,
    SLOT_NUMBERS_FOR_COLOUR,
    SLOT_NUMBER_FOR_REGISTRATION,
    HELP,
    EXIT,
];

/// A single interpreter command.
///
/// Numeric arguments are kept as raw text; the lot operations parse them so a
/// malformed number surfaces as an `InvalidArgument` from the operation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    CreateParkingLot { capacity: String },
    Park { plate: String, color: String },
    Leave { slot: String },
    Status,
    PlateNumbersForColour { color: String },
    SlotNumbersForColour { color: String },
    SlotNumberForRegistration { plate: String },
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Build a command from its name and up to two arguments.
    /// Missing arguments are passed as empty strings.
    pub fn from_parts(name: &str, arg1: String, arg2: String) -> Self {
        match name {
            CREATE_PARKING_LOT => Command::CreateParkingLot { capacity: arg1 },
            PARK => Command::Park {
                plate: arg1,
                color: arg2,
            },
            LEAVE => Command::Leave { slot: arg1 },
            STATUS => Command::Status,
            PLATE_NUMBERS_FOR_COLOUR => Command::PlateNumbersForColour { color: arg1 },
            SLOT_NUMBERS_FOR_COLOUR => Command::SlotNumbersForColour { color: arg1 },
            SLOT_NUMBER_FOR_REGISTRATION => Command::SlotNumberForRegistration { plate: arg1 },
            HELP => Command::Help,
            EXIT => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// The name this command was invoked with
    pub fn name(&self) -> &str {
        match self {
            Command::CreateParkingLot { .. } => CREATE_PARKING_LOT,
            Command::Park { .. } => PARK,
            Command::Leave { .. } => LEAVE,
            Command::Status => STATUS,
            Command::PlateNumbersForColour { .. } => PLATE_NUMBERS_FOR_COLOUR,
            Command::SlotNumbersForColour { .. } => SLOT_NUMBERS_FOR_COLOUR,
            Command::SlotNumberForRegistration { .. } => SLOT_NUMBER_FOR_REGISTRATION,
            Command::Help => HELP,
            Command::Exit => EXIT,
            Command::Unknown(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::CreateParkingLot { capacity } => write!(f, "{} {}", self.name(), capacity),
            Command::Park { plate, color } => write!(f, "{} {} {}", self.name(), plate, color),
            Command::Leave { slot } => write!(f, "{} {}", self.name(), slot),
            Command::PlateNumbersForColour { color } | Command::SlotNumbersForColour { color } => {
                write!(f, "{} {}", self.name(), color)
            }
            Command::SlotNumberForRegistration { plate } => write!(f, "{} {}", self.name(), plate),
            _ => write!(f, "{}", self.name()),
        }
    }
}
