//! Host editor domain types

mod command;
mod selection;

pub use command::{CommandId, CommandStatus, ALL_COMMANDS, COMMAND_SET_GUID, PACKAGE_GUID};
pub use selection::{HostContextData, SelectedItem};
