//! End-to-end checks of the wait engine against real loopback listeners.

#[cfg(test)]
mod utils;
#[cfg(test)]
mod wait;
