//! Dockmate library.
//!
//! Exposes the daemon client and the interactive menu loop so the
//! integration tests can drive them in-process.

pub mod client;
pub mod commands;
pub mod menu;
