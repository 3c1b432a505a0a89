//! Capability identifiers and the well-known identifier constants.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// A stable textual identifier for an optional controller feature.
///
/// The identifier space is open: any string can be registered, so a
/// controller implementation can publish firmware-specific capabilities
/// without touching this crate. The identifiers the rest of the application
/// is known to check are published as associated constants, giving both
/// producers and consumers a name to reference instead of a raw string.
///
/// Identifiers are compared exactly as given. No well-formedness checks are
/// performed; empty strings and case variants are stored as-is, and
/// identifier correctness is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// The controller can jog the machine. Jogging may be emulated by the
    /// controller using gcode commands.
    pub const JOGGING: Self = Self::from_static("JOGGING");

    /// The controller accepts feed/spindle/rapid override commands.
    pub const OVERRIDES: Self = Self::from_static("OVERRIDES");

    /// The controller supports continuous jogging, where motion keeps going
    /// until an explicit stop command rather than for a fixed step.
    pub const CONTINUOUS_JOGGING: Self = Self::from_static("CONTINUOUS_JOGGING");

    /// The controller supports a homing cycle.
    pub const HOMING: Self = Self::from_static("HOMING");

    /// The controller can return the machine to its zero position.
    pub const RETURN_TO_ZERO: Self = Self::from_static("RETURN_TO_ZERO");

    /// The controller supports a check mode that parses gcode without
    /// moving the machine.
    pub const CHECK_MODE: Self = Self::from_static("CHECK_MODE");

    /// Firmware settings can be read and written through the controller.
    pub const FIRMWARE_SETTINGS: Self = Self::from_static("FIRMWARE_SETTINGS");

    /// The controller can be configured through the setup wizard.
    pub const SETUP_WIZARD: Self = Self::from_static("SETUP_WIZARD");

    /// The controller exposes an on-board file system for program storage.
    pub const FILE_SYSTEM: Self = Self::from_static("FILE_SYSTEM");

    /// The controller has hard limit switches.
    pub const HARD_LIMITS: Self = Self::from_static("HARD_LIMITS");

    /// The controller enforces soft limits.
    pub const SOFT_LIMITS: Self = Self::from_static("SOFT_LIMITS");

    /// The controller reports an open-door safety state.
    pub const OPEN_DOOR: Self = Self::from_static("OPEN_DOOR");

    /// Create a capability from a caller-defined identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Create a capability from a static identifier without allocating.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// The identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Capability {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Capability {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl From<&str> for Capability {
    fn from(id: &str) -> Self {
        Self(Cow::Owned(id.to_owned()))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
