//! Gantry Capabilities - Controller feature-capability registry.
//!
//! This crate provides:
//! - The [`Capability`] identifier type with the well-known identifiers
//!   published as associated constants
//! - The [`CapabilityRegistry`], the per-controller set of detected
//!   capabilities with generic and named membership queries
//!
//! A controller implementation populates the registry while detecting
//! hardware/firmware features during its connection handshake; UI and
//! command-routing code query it to decide which affordances to enable and
//! which protocol variants to use. The identifier space is open, so a
//! controller can register firmware-specific capabilities that were never
//! declared here.
//!
//! # Example
//!
//! ```
//! use gantry_capabilities::{Capability, CapabilityRegistry};
//!
//! let registry = CapabilityRegistry::new();
//!
//! // Populated by the controller during capability detection.
//! registry.add_capability(Capability::JOGGING);
//! registry.add_capability("GRBL_REALTIME_COMMANDS");
//!
//! // Queried by UI and command routing.
//! assert!(registry.has_jogging());
//! assert!(registry.has_capability("GRBL_REALTIME_COMMANDS"));
//! assert!(!registry.has_overrides());
//! ```
//!
//! # Threading
//!
//! The registry is written from the detection path and read from anywhere;
//! all operations take `&self`, synchronize internally, and are individually
//! atomic. See [`CapabilityRegistry`] for the ordering contract.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod capability;
mod registry;

pub use capability::Capability;
pub use registry::CapabilityRegistry;
