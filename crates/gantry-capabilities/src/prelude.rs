//! Prelude module - commonly used types for convenient import.
//!
//! Use `use gantry_capabilities::prelude::*;` to import all essential types.

pub use crate::{Capability, CapabilityRegistry};
