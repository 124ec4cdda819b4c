//! # parkhub-domain
//!
//! Pure domain model for the parkhub parking-slot system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Slots** (a single parking space with location and availability)
//! - Define the **sample location table** used to seed demo data
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod sample;
pub mod slot;
