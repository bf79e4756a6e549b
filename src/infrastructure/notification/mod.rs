//! Notification infrastructure module
//!
//! Desktop notifications via notify-rust, plus a fan-out notifier that
//! combines them with the CLI presenter.

mod fan_out;
mod notify_rust;

pub use fan_out::FanOutNotifier;
pub use notify_rust::NotifyRustNotifier;
