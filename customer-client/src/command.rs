//! User actions on the customer page

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// DOM identifiers of the action buttons
pub mod button_ids {
    pub const CREATE: &str = "create-btn";
    pub const UPDATE: &str = "update-btn";
    pub const RETRIEVE: &str = "retrieve-btn";
    pub const DELETE: &str = "delete-btn";
    pub const CLEAR: &str = "clear-btn";
    pub const ACTIVATE: &str = "activate-btn";
    pub const DEACTIVATE: &str = "deactivate-btn";
    pub const SEARCH: &str = "search-btn";
}

/// A user action handled by the form controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Update,
    Retrieve,
    Delete,
    Activate,
    Deactivate,
    Search,
    Clear,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Create,
        Command::Update,
        Command::Retrieve,
        Command::Delete,
        Command::Activate,
        Command::Deactivate,
        Command::Search,
        Command::Clear,
    ];

    pub fn button_id(&self) -> &'static str {
        match self {
            Command::Create => button_ids::CREATE,
            Command::Update => button_ids::UPDATE,
            Command::Retrieve => button_ids::RETRIEVE,
            Command::Delete => button_ids::DELETE,
            Command::Activate => button_ids::ACTIVATE,
            Command::Deactivate => button_ids::DEACTIVATE,
            Command::Search => button_ids::SEARCH,
            Command::Clear => button_ids::CLEAR,
        }
    }

    pub fn from_button_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.button_id() == id)
    }

    /// Only offered when the backend supports activation
    pub fn requires_activation(&self) -> bool {
        matches!(
            self,
            Command::Activate | Command::Deactivate | Command::Search
        )
    }

    /// Buttons present on the page for the given capability
    pub fn available(supports_activation: bool) -> Vec<Command> {
        Self::ALL
            .into_iter()
            .filter(|c| supports_activation || !c.requires_activation())
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Create => "create",
            Command::Update => "update",
            Command::Retrieve => "retrieve",
            Command::Delete => "delete",
            Command::Activate => "activate",
            Command::Deactivate => "deactivate",
            Command::Search => "search",
            Command::Clear => "clear",
        };
        f.write_str(name)
    }
}

impl FromStr for Command {
    type Err = ClientError;

    /// Accepts a button id (`create-btn`) or a command name (`create`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_button_id(s)
            .or_else(|| Self::ALL.into_iter().find(|c| c.to_string() == s))
            .ok_or_else(|| ClientError::Config(format!("Unknown command: {s}")))
    }
}

/// Result of handling one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Backend call succeeded and the view shows the result
    Succeeded,
    /// Backend call failed; the flash message shows why
    Failed,
    /// Command not offered by this controller; nothing changed
    Unsupported,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ids_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_button_id(command.button_id()), Some(command));
        }
        assert_eq!(Command::from_button_id("list-btn"), None);
    }

    #[test]
    fn test_available_buttons() {
        let plain = Command::available(false);
        assert_eq!(
            plain,
            vec![
                Command::Create,
                Command::Update,
                Command::Retrieve,
                Command::Delete,
                Command::Clear
            ]
        );
        assert_eq!(Command::available(true).len(), 8);
    }

    #[test]
    fn test_parse() {
        assert_eq!("search-btn".parse::<Command>().unwrap(), Command::Search);
        assert_eq!("deactivate".parse::<Command>().unwrap(), Command::Deactivate);
        assert!("explode".parse::<Command>().is_err());
    }
}
