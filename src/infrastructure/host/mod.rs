//! Host context adapters
//!
//! The editor hands its selection state to the binary either directly on
//! the command line or as a JSON context file.

mod json_context;
mod static_host;

pub use json_context::JsonContextFile;
pub use static_host::StaticHost;
