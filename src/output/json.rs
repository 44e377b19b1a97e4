//! JSON output formatting
//!
//! One compact object per command so piped sessions stay line-oriented.
//! Every soft outcome carries a `status` key.

use serde_json::{json, Value};

use crate::engine::executor::{ExecutionResult, ResultData};
use crate::error::ParkingError;

pub fn format_json(result: &ExecutionResult) -> String {
    let data: Value = match &result.data {
        ResultData::Created { capacity } => json!({ "created": capacity }),
        ResultData::Allocated { slot } => json!({ "allocated": slot }),
        ResultData::LotFull => json!({ "status": "full" }),
        ResultData::MissingCarDetails => json!({ "status": "missing_car_details" }),
        ResultData::Freed { slot } => json!({ "freed": slot }),
        ResultData::SlotMissing { slot } => json!({ "status": "does_not_exist", "slot": slot }),
        ResultData::NotFound => json!({ "status": "not_found" }),
        ResultData::Status(rows) => {
            serde_json::to_value(rows).map_or(json!(null), |rows| json!({ "occupied": rows }))
        }
        ResultData::Uninitialized => json!({ "status": "uninitialized" }),
        ResultData::Plates(plates) => json!({ "plates": plates }),
        ResultData::Slots(slots) => json!({ "slots": slots }),
        ResultData::Slot(slot) => json!({ "slot": slot }),
        ResultData::Help(names) => json!({ "commands": names }),
        ResultData::Unrecognized(name) => json!({ "status": "unrecognized", "command": name }),
        ResultData::Exit => json!({ "exit": true }),
    };

    serde_json::to_string(&data).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_json_fatal(error: &ParkingError) -> String {
    json!({ "error": error.to_string(), "fatal": true }).to_string()
}
