//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! WebSocket frames are the domain's own wire messages
//! (`crate::domain::message`) and need no separate DTO.

pub mod http;
