//! CopyAsFile - copy a file onto the clipboard as a file drop
//!
//! The editor hands over its selection; the selected file (or the active
//! document) is copied to a fresh temp file with a `.txt` extension and
//! that file is placed on the clipboard as a file-drop list, so it can be
//! pasted into a file manager, mail client or chat window.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (command ids, selection, artifact layout, retry policy, messages)
//! - **Application**: Use cases (resolve, publish, command registry) and port traits
//! - **Infrastructure**: Adapters (clipboard-win, wl-copy, xclip, osascript, notify-rust, config file)
//! - **CLI**: Command-line interface the editor invokes

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
