//! Shared utilities for the broadcast relay server and client.

pub mod logger;
pub mod time;
