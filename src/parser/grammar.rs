//! Pest grammar parser for interpreter command lines

use pest::Parser;
use pest_derive::Parser;

use crate::error::{ParkingError, Result};
use crate::parser::ast::Command;

#[derive(Parser)]
#[grammar = "../grammar/parking.pest"]
pub struct LineParser;

/// Parse one input line into a command.
///
/// Returns `Ok(None)` for a blank line. Words past the second argument are ignored.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let pairs = LineParser::parse(Rule::line, input)
        .map_err(|e| ParkingError::ParseError(e.to_string()))?;

    let line = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ParkingError::ParseError("Empty input".to_string()))?;

    let mut words = line
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::word)
        .map(|pair| pair.as_str());

    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arg1 = words.next().unwrap_or_default().to_string();
    let arg2 = words.next().unwrap_or_default().to_string();

    Ok(Some(Command::from_parts(name, arg1, arg2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cmd = parse_command("create_parking_lot 6").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::CreateParkingLot {
                capacity: "6".to_string()
            }
        );
    }

    #[test]
    fn test_parse_park_with_two_args() {
        let cmd = parse_command("park KA-01-HH-1234 White").unwrap().unwrap();
        match cmd {
            Command::Park { plate, color } => {
                assert_eq!(plate, "KA-01-HH-1234");
                assert_eq!(color, "White");
            }
            _ => panic!("Expected Park command"),
        }
    }

    #[test]
    fn test_extra_args_are_ignored() {
        let cmd = parse_command("park A red extra words").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Park {
                plate: "A".to_string(),
                color: "red".to_string()
            }
        );
    }

    #[test]
    fn test_missing_args_become_empty() {
        let cmd = parse_command("park").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Park {
                plate: String::new(),
                color: String::new()
            }
        );
        let cmd = parse_command("leave").unwrap().unwrap();
        assert_eq!(cmd, Command::Leave { slot: String::new() });
    }

    #[test]
    fn test_surrounding_whitespace() {
        let cmd = parse_command("  \tleave   4 \r").unwrap().unwrap();
        assert_eq!(cmd, Command::Leave { slot: "4".to_string() });
    }

    #[test]
    fn test_vertical_tab_and_form_feed_stay_in_words() {
        let cmd = parse_command("park A\x0b red\x0c").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Park {
                plate: "A\x0b".to_string(),
                color: "red\x0c".to_string()
            }
        );
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   \t").unwrap().is_none());
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        let cmd = parse_command("Status").unwrap().unwrap();
        assert_eq!(cmd, Command::Unknown("Status".to_string()));
        assert_eq!(parse_command("status").unwrap().unwrap(), Command::Status);
    }

    #[test]
    fn test_display_round_trips_name() {
        let cmd = parse_command("slot_number_for_registration_number KA-01")
            .unwrap()
            .unwrap();
        assert_eq!(cmd.to_string(), "slot_number_for_registration_number KA-01");
    }
}
