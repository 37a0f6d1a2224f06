//! Entity Store: the canonical, process-lifetime collection of people.
//!
//! Records are kept in insertion order. Removal shifts later records up by one;
//! nothing else reorders them.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryPersonStore;
pub use r#trait::PersonStore;
