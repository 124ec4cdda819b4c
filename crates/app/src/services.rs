//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod seed_service;
pub mod slot_service;

#[cfg(test)]
pub(crate) mod testing;
