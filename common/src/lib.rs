//! Shared model for `waithost`: configuration, targets, errors and notifiers.

pub mod config;
pub mod error;
pub mod network;
pub mod notify;

pub use error::{ErrorKind, Result, WaitError};
