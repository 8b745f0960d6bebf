//! Desktop notification channel
//!
//! Thin wrapper around the `notify-send` command (libnotify). The popup is
//! the "glance at the corner of the screen" half of the alert; the chat
//! message is the durable half.
//!
//! # Prerequisites
//!
//! `notify-send` must be installed and a notification daemon running.
//! On Debian/Ubuntu: `sudo apt install libnotify-bin`.

mod config;
mod error;
mod notifier;

pub use config::DesktopConfig;
pub use error::NotifyError;
pub use notifier::DesktopNotifier;
