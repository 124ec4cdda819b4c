//! # parkhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SlotRepository` — count, bulk replace, and query parking slots
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SeedService` — populate the store with the sample slot table
//!   - `SlotService` — list and look up slots
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `parkhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
