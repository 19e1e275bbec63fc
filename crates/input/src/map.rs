//! Menu selection mapping from typed lines to supply commands.

use crate::types::{SupplyCommand, QUIT_MENU_NUMBER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    Command(SupplyCommand),
    Quit,
    /// Anything else; carries the trimmed input for the error message.
    Invalid(String),
}

/// Map one input line to a menu selection.
///
/// Accepts menu numbers (`1`-`5`, `0` to quit), command names
/// (`play`, `reserve`, `use`, `swap`, `triple`) and `q`/`quit`/`exit`.
pub fn parse_selection(line: &str) -> MenuSelection {
    let trimmed = line.trim();

    if let Ok(n) = trimmed.parse::<u8>() {
        if n == QUIT_MENU_NUMBER {
            return MenuSelection::Quit;
        }
        return match SupplyCommand::from_menu_number(n) {
            Some(command) => MenuSelection::Command(command),
            None => MenuSelection::Invalid(trimmed.to_string()),
        };
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => MenuSelection::Quit,
        other => match SupplyCommand::from_str(other) {
            Some(command) => MenuSelection::Command(command),
            None => MenuSelection::Invalid(trimmed.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(parse_selection("1"), MenuSelection::Command(SupplyCommand::Play));
        assert_eq!(parse_selection("2\n"), MenuSelection::Command(SupplyCommand::Reserve));
        assert_eq!(
            parse_selection(" 3 "),
            MenuSelection::Command(SupplyCommand::UseReserved)
        );
        assert_eq!(parse_selection("4"), MenuSelection::Command(SupplyCommand::SwapFront));
        assert_eq!(parse_selection("5"), MenuSelection::Command(SupplyCommand::SwapTriple));
    }

    #[test]
    fn test_quit_selections() {
        assert_eq!(parse_selection("0"), MenuSelection::Quit);
        assert_eq!(parse_selection("q"), MenuSelection::Quit);
        assert_eq!(parse_selection("EXIT"), MenuSelection::Quit);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(parse_selection("Play"), MenuSelection::Command(SupplyCommand::Play));
        assert_eq!(
            parse_selection("triple"),
            MenuSelection::Command(SupplyCommand::SwapTriple)
        );
    }

    #[test]
    fn test_invalid_selections() {
        assert_eq!(parse_selection("9"), MenuSelection::Invalid("9".to_string()));
        assert_eq!(parse_selection(""), MenuSelection::Invalid(String::new()));
        assert_eq!(parse_selection("hold"), MenuSelection::Invalid("hold".to_string()));
        assert_eq!(parse_selection("-1"), MenuSelection::Invalid("-1".to_string()));
    }
}
