//! WebSocket broadcast relay.
//!
//! Accepts many concurrent WebSocket clients, stamps every inbound JSON frame
//! with the server time and fans it out to every connected client, the sender
//! included.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// wiring
pub mod app;
pub mod config;
