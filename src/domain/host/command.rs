//! Host command identifiers

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidCommandError;

/// Command set both menu entries belong to
pub const COMMAND_SET_GUID: &str = "a8b5c3d1-2f4e-4a7b-8c9d-1e3f5a7b9c2d";

/// Identity of the add-in package
pub const PACKAGE_GUID: &str = "b9c8d5e2-3a4f-4b8c-9d1e-2f5a8b7c9e3f";

/// Every command slot the add-in registers
pub const ALL_COMMANDS: &[CommandId] = &[CommandId::ItemNode, CommandId::CodeWindow];

/// Menu slots the copy action is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CommandId {
    /// Project explorer item context menu
    #[default]
    ItemNode,
    /// Editor window context menu
    CodeWindow,
}

impl CommandId {
    /// Numeric id inside the command set
    pub const fn id(&self) -> u32 {
        match self {
            Self::ItemNode => 0x0100,
            Self::CodeWindow => 0x0101,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ItemNode => "item-node",
            Self::CodeWindow => "code-window",
        }
    }

    /// Look a command up by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        ALL_COMMANDS.iter().copied().find(|c| c.id() == id)
    }
}

impl FromStr for CommandId {
    type Err = InvalidCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "item-node" | "item" => Ok(Self::ItemNode),
            "code-window" | "code" | "editor" => Ok(Self::CodeWindow),
            _ => input
                .strip_prefix("0x")
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .and_then(Self::from_id)
                .ok_or_else(|| InvalidCommandError {
                    input: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu state reported back to the host before it shows the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub enabled: bool,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids() {
        assert_eq!(CommandId::ItemNode.id(), 0x0100);
        assert_eq!(CommandId::CodeWindow.id(), 0x0101);
        assert_eq!(CommandId::from_id(0x0101), Some(CommandId::CodeWindow));
        assert_eq!(CommandId::from_id(0x0200), None);
    }

    #[test]
    fn parse_names_and_hex() {
        let parse = |s: &str| s.parse::<CommandId>().unwrap();
        assert_eq!(parse("item-node"), CommandId::ItemNode);
        assert_eq!(parse("Editor"), CommandId::CodeWindow);
        assert_eq!(parse("0x0100"), CommandId::ItemNode);
        assert_eq!(parse("0X101"), CommandId::CodeWindow);
    }

    #[test]
    fn parse_invalid() {
        assert!("0x0999".parse::<CommandId>().is_err());
        assert!("toolbar".parse::<CommandId>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for cmd in ALL_COMMANDS {
            assert_eq!(cmd.to_string().parse::<CommandId>().unwrap(), *cmd);
        }
    }
}
