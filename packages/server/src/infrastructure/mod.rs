//! Infrastructure layer: concrete registry implementation and HTTP DTOs.

pub mod dto;
pub mod registry;
