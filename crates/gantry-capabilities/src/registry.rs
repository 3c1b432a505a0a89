//! The per-controller capability set and its membership queries.

use std::collections::HashSet;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capability::Capability;

/// The set of capabilities detected for one controller instance.
///
/// A controller creates its registry empty, populates it while detecting
/// hardware/firmware features during the connection handshake, and treats it
/// as read-only for the rest of the session. Detection typically runs on the
/// communication thread while consumers query from the UI thread, so every
/// operation takes `&self` and synchronizes on an internal lock.
///
/// Each call is individually atomic; no ordering is guaranteed between a
/// mutation and a concurrently issued query. Callers that need "capabilities
/// are fully detected before being queried" must enforce that ordering
/// themselves, e.g. by completing detection before publishing the controller.
///
/// No operation can fail: querying an identifier that was never added yields
/// `false`, and removing an absent identifier is a no-op.
pub struct CapabilityRegistry {
    capabilities: RwLock<HashSet<Capability>>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: RwLock::new(HashSet::new()),
        }
    }

    /// Add a capability, either one of the well-known [`Capability`]
    /// constants or a controller-specific identifier.
    ///
    /// Re-adding an already present capability is a no-op.
    pub fn add_capability(&self, capability: impl Into<Capability>) {
        let capability = capability.into();
        tracing::trace!(capability = %capability, "registering capability");
        self.write().insert(capability);
    }

    /// Remove a capability.
    ///
    /// Removing a capability that is not present is a no-op.
    pub fn remove_capability(&self, capability: impl AsRef<str>) {
        let capability = capability.as_ref();
        tracing::trace!(capability, "removing capability");
        self.write().remove(capability);
    }

    /// Check whether the controller has the given capability.
    #[must_use]
    pub fn has_capability(&self, capability: impl AsRef<str>) -> bool {
        self.read().contains(capability.as_ref())
    }

    /// Whether the controller supports jogging. Jogging may be emulated by
    /// the controller using gcode commands.
    #[must_use]
    pub fn has_jogging(&self) -> bool {
        self.has_capability(Capability::JOGGING)
    }

    /// Whether the controller accepts override commands.
    #[must_use]
    pub fn has_overrides(&self) -> bool {
        self.has_capability(Capability::OVERRIDES)
    }

    /// Whether the controller supports continuous jogging.
    #[must_use]
    pub fn has_continuous_jogging(&self) -> bool {
        self.has_capability(Capability::CONTINUOUS_JOGGING)
    }

    /// Whether the controller supports a homing cycle.
    #[must_use]
    pub fn has_homing(&self) -> bool {
        self.has_capability(Capability::HOMING)
    }

    /// Whether the controller can return the machine to its zero position.
    #[must_use]
    pub fn has_return_to_zero(&self) -> bool {
        self.has_capability(Capability::RETURN_TO_ZERO)
    }

    /// Whether the controller supports check mode.
    #[must_use]
    pub fn has_check_mode(&self) -> bool {
        self.has_capability(Capability::CHECK_MODE)
    }

    /// Whether firmware settings can be accessed through the controller.
    #[must_use]
    pub fn has_firmware_settings(&self) -> bool {
        self.has_capability(Capability::FIRMWARE_SETTINGS)
    }

    /// Whether the controller can be configured through the setup wizard.
    #[must_use]
    pub fn has_setup_wizard(&self) -> bool {
        self.has_capability(Capability::SETUP_WIZARD)
    }

    /// Whether the controller exposes an on-board file system.
    #[must_use]
    pub fn has_file_system(&self) -> bool {
        self.has_capability(Capability::FILE_SYSTEM)
    }

    /// Snapshot of the currently registered capabilities.
    ///
    /// The returned list is a copy; later mutations are not reflected in it.
    /// Order is unspecified.
    #[must_use]
    pub fn capabilities(&self) -> Vec<Capability> {
        self.read().iter().cloned().collect()
    }

    /// Whether no capabilities have been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove all capabilities, e.g. when the controller disconnects.
    pub fn clear(&self) {
        tracing::trace!("clearing capability registry");
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<Capability>> {
        self.capabilities.read().unwrap_or_else(|e| {
            tracing::warn!("capability registry read lock poisoned, recovering");
            e.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<Capability>> {
        self.capabilities.write().unwrap_or_else(|e| {
            tracing::warn!("capability registry write lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.read().len();
        f.debug_struct("CapabilityRegistry")
            .field("capabilities", &count)
            .finish()
    }
}
