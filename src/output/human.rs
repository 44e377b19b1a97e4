//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData, SlotEntry};
use crate::error::ParkingError;

const MIN_COLUMN_WIDTH: usize = 10;
const COLUMN_PADDING: usize = 1;

pub const NOT_FOUND: &str = "Not found";
pub const LOT_FULL: &str = "Sorry, parking lot is full";
pub const MISSING_CAR_DETAILS: &str = "Please provide both a plate number and a colour";
pub const UNINITIALIZED: &str =
    "Parking lot does not exist yet, please create a parking lot first";
pub const UNRECOGNIZED: &str = "Command not recognized, type help for list of commands";
pub const FATAL_SUFFIX: &str = "fatal error detected, stopping program";

pub fn format_human(result: &ExecutionResult) -> String {
    match &result.data {
        ResultData::Created { capacity } => {
            format!("Created a parking lot with {} slots", capacity)
        }
        ResultData::Allocated { slot } => format!("Allocated slot number: {}", slot),
        ResultData::LotFull => LOT_FULL.to_string(),
        ResultData::MissingCarDetails => MISSING_CAR_DETAILS.to_string(),
        ResultData::Freed { slot } => format!("Slot number {} is free", slot),
        ResultData::SlotMissing { slot } => format!("Parking slot {} does not exist", slot),
        ResultData::NotFound => NOT_FOUND.to_string(),
        ResultData::Status(rows) => format_status(rows),
        ResultData::Uninitialized => UNINITIALIZED.to_string(),
        ResultData::Plates(plates) => plates.join(", "),
        ResultData::Slots(slots) => slots
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        ResultData::Slot(slot) => slot.to_string(),
        ResultData::Help(names) => format!("Commands are {}", names.join(", ")),
        ResultData::Unrecognized(_) => UNRECOGNIZED.to_string(),
        ResultData::Exit => String::new(),
    }
}

pub fn format_human_fatal(error: &ParkingError) -> String {
    format!("{}\n{}", error, FATAL_SUFFIX)
}

/// Status table. Every column but the last is padded to its widest cell plus
/// one space, with a floor of [`MIN_COLUMN_WIDTH`].
fn format_status(rows: &[SlotEntry]) -> String {
    let mut table = vec![[
        "Slot No.".to_string(),
        "|Plate Number".to_string(),
        "|Colour".to_string(),
    ]];
    table.extend(rows.iter().map(|row| {
        [
            row.slot.to_string(),
            format!("|{}", row.plate),
            format!("|{}", row.color),
        ]
    }));

    let width = |column: usize| {
        table
            .iter()
            .map(|cells| cells[column].chars().count() + COLUMN_PADDING)
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH)
    };
    let (first, second) = (width(0), width(1));

    table
        .iter()
        .map(|[slot, plate, color]| format!("{:<first$}{:<second$}{}", slot, plate, color))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: ResultData) -> String {
        format_human(&ExecutionResult { data })
    }

    fn entry(slot: usize, plate: &str, color: &str) -> SlotEntry {
        SlotEntry {
            slot,
            plate: plate.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_status_table() {
        let out = render(ResultData::Status(vec![
            entry(1, "KA-01-HH-1234", "White"),
            entry(3, "KA-01-BB-0001", "Black"),
        ]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Slot No.  |Plate Number  |Colour");
        assert_eq!(lines[1], "1         |KA-01-HH-1234 |White");
        assert_eq!(lines[2], "3         |KA-01-BB-0001 |Black");
    }

    #[test]
    fn test_status_empty_lot_prints_header() {
        let out = render(ResultData::Status(Vec::new()));
        assert_eq!(out, "Slot No.  |Plate Number |Colour");
    }

    #[test]
    fn test_lists_are_comma_joined() {
        assert_eq!(render(ResultData::Slots(vec![1, 3])), "1, 3");
        assert_eq!(
            render(ResultData::Plates(vec!["A".to_string(), "C".to_string()])),
            "A, C"
        );
    }

    #[test]
    fn test_soft_messages() {
        assert_eq!(render(ResultData::NotFound), "Not found");
        assert_eq!(render(ResultData::LotFull), LOT_FULL);
        assert_eq!(render(ResultData::MissingCarDetails), MISSING_CAR_DETAILS);
        assert_eq!(
            render(ResultData::SlotMissing { slot: 7 }),
            "Parking slot 7 does not exist"
        );
        assert!(render(ResultData::Uninitialized).contains("please create a parking lot first"));
    }

    #[test]
    fn test_fatal_message() {
        let err = ParkingError::invalid_argument("parking slot number", "x");
        assert_eq!(
            format_human_fatal(&err),
            "invalid parking slot number \"x\", please type in a valid number\n\
             fatal error detected, stopping program"
        );
    }
}
