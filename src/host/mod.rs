//! Host-side registries

pub mod memory;

pub use memory::InMemoryHost;
