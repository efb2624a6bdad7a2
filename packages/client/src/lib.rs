//! Terminal chat client for the broadcast relay.
//!
//! Reads lines from the terminal, sends each one as a text frame and prints
//! every frame the relay broadcasts back.

pub mod domain;
pub mod error;
pub mod formatter;
mod runner;
pub mod session;
mod ui;

pub use runner::{ReconnectPolicy, run_client, run_client_with};
