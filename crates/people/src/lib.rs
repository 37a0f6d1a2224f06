//! People domain module.
//!
//! This crate contains the person record and its derived views, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod person;

pub use filter::PhoneFilter;
pub use person::{Address, NewPerson, Person, LEGAL_DRINKING_AGE};
