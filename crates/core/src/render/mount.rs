//! String-keyed mount points for the dashboard's panels and charts.
//!
//! The frontend shell registers one slot per page region, then reads the
//! markup back after each render pass. Mounting replaces the slot's
//! whole content — no partial overwrite is ever visible.

use std::collections::HashMap;

use super::Rendering;

/// Registry of mount points. Mounting into an unregistered key is a
/// silent no-op, matching the page simply not having that region.
#[derive(Debug, Default)]
pub struct MountRegistry {
    slots: HashMap<String, String>,
}

impl MountRegistry {
    /// Create an empty registry with no mount points.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Create a registry with the given mount points pre-registered.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for key in keys {
            registry.register(key);
        }
        registry
    }

    /// Register a mount point. Re-registering clears its content.
    pub fn register(&mut self, key: impl Into<String>) {
        self.slots.insert(key.into(), String::new());
    }

    /// Replace a mount point's content with the given rendering.
    ///
    /// Returns `false` (and logs at debug) when the key is not
    /// registered — the documented silent no-op.
    pub fn mount(&mut self, key: &str, rendering: &Rendering) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = rendering.to_markup();
                true
            }
            None => {
                log::debug!("mount point '{key}' not registered; skipping");
                false
            }
        }
    }

    /// True when the key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Current markup of a mount point. Empty string until first mount.
    #[must_use]
    pub fn content(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// All registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Clear every slot's content, keeping registrations.
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            slot.clear();
        }
    }
}
