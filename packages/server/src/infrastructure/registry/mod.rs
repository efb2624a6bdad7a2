//! ConnectionRegistry の実装
//!
//! - `inmemory`: single-process registry backed by a `HashMap`

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
