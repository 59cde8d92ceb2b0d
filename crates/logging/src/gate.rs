//! crates/logging/src/gate.rs
//! The emit decision: global kill-switch plus the per-category switch.

use settings::{SettingDefinition, SettingHandle, SettingsError, SettingsStore};

use crate::config::{
    DEVELOPER_MODE_DESCRIPTION, DEVELOPER_MODE_LABEL, FORCE_OFF_DESCRIPTION, FORCE_OFF_LABEL,
};
use crate::identity::ComponentId;
use crate::registry::{SwitchKey, SwitchRegistry};

/// Store, registry and the two facility-wide flags.
///
/// Every switch lookup runs through here so "check, create, persist" happens
/// under whatever lock guards the gate.
#[derive(Debug)]
pub(crate) struct Gate<S> {
    store: S,
    registry: SwitchRegistry,
    force_off: SettingHandle,
    developer_mode: SettingHandle,
}

impl<S: SettingsStore> Gate<S> {
    /// Binds the facility flags in `section` and preloads known switches.
    pub(crate) fn new(mut store: S, section: &str) -> Self {
        let force_off = store.bind(
            SettingDefinition::new(section, FORCE_OFF_LABEL),
            true,
            FORCE_OFF_DESCRIPTION,
        );
        let developer_mode = store.bind(
            SettingDefinition::new(section, DEVELOPER_MODE_LABEL),
            false,
            DEVELOPER_MODE_DESCRIPTION,
        );

        let mut registry = SwitchRegistry::new();
        let default = store.get(developer_mode);
        let preloaded = registry.preload(&mut store, default);
        tracing::debug!(target: "switchlog", preloaded, "switch registry preloaded");

        let mut gate = Self {
            store,
            registry,
            force_off,
            developer_mode,
        };
        gate.persist();
        gate
    }

    /// Resolves the switch first, then applies the kill-switch.
    pub(crate) fn should_emit(&mut self, component: &ComponentId, category: &str) -> bool {
        let developer_mode = self.store.get(self.developer_mode);
        let resolution =
            self.registry
                .resolve(&mut self.store, component, category, developer_mode);
        if resolution.created {
            tracing::info!(
                target: "switchlog",
                component = %component,
                category,
                enabled = self.store.get(resolution.handle),
                "debug switch created"
            );
            self.persist();
        }

        if self.store.get(self.force_off) {
            return false;
        }
        self.store.get(resolution.handle)
    }

    pub(crate) fn register_component(&mut self, component: &ComponentId) {
        self.registry.register_component(component);
    }

    pub(crate) fn force_off(&self) -> bool {
        self.store.get(self.force_off)
    }

    pub(crate) fn set_force_off(&mut self, value: bool) -> Result<(), SettingsError> {
        self.store.set(self.force_off, value)?;
        self.store.save()
    }

    pub(crate) fn developer_mode(&self) -> bool {
        self.store.get(self.developer_mode)
    }

    pub(crate) fn set_developer_mode(&mut self, value: bool) -> Result<(), SettingsError> {
        self.store.set(self.developer_mode, value)?;
        self.store.save()
    }

    /// Current value of an existing switch.
    pub(crate) fn switch(&self, key: &SwitchKey) -> Option<bool> {
        self.registry
            .handle(key)
            .map(|handle| self.store.get(handle))
    }

    /// Sets a switch, creating it when unknown, and persists the store.
    pub(crate) fn set_switch(&mut self, key: &SwitchKey, value: bool) -> Result<(), SettingsError> {
        let developer_mode = self.store.get(self.developer_mode);
        let resolution = self.registry.resolve(
            &mut self.store,
            key.component(),
            key.category(),
            developer_mode,
        );
        self.store.set(resolution.handle, value)?;
        self.store.save()
    }

    /// Adopts external edits to the store and any switches they add.
    pub(crate) fn reload(&mut self) -> Result<(), SettingsError> {
        self.store.reload()?;
        let developer_mode = self.store.get(self.developer_mode);
        let added = self.registry.preload(&mut self.store, developer_mode);
        tracing::debug!(target: "switchlog", added, "settings reloaded");
        Ok(())
    }

    pub(crate) fn registry(&self) -> &SwitchRegistry {
        &self.registry
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) {
        if let Err(error) = self.store.save() {
            tracing::warn!(target: "switchlog", %error, "failed to persist debug switches");
        }
    }
}
