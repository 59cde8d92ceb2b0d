//! crates/logging/src/registry.rs
//! Lazily created (component, category) switches backed by a settings store.

use std::collections::HashMap;
use std::fmt;

use settings::{SettingDefinition, SettingHandle, SettingsStore};

use crate::config::{
    category_description, category_label, component_section, parse_category_label,
    parse_component_section,
};
use crate::identity::ComponentId;

/// Key of one switch, rendered as `component.category`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SwitchKey {
    component: ComponentId,
    category: String,
}

impl SwitchKey {
    /// Builds the key for `category` of `component`.
    pub fn new(component: &ComponentId, category: &str) -> Self {
        Self {
            component: component.clone(),
            category: category.to_owned(),
        }
    }

    /// Returns the owning component.
    #[must_use]
    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Persisted definition backing this switch.
    #[must_use]
    pub fn definition(&self) -> SettingDefinition {
        SettingDefinition::new(
            component_section(&self.component),
            category_label(&self.category),
        )
    }
}

impl fmt::Display for SwitchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.category)
    }
}

#[derive(Clone, Debug)]
struct ComponentSwitches {
    section: String,
    categories: HashMap<String, SettingHandle>,
}

impl ComponentSwitches {
    fn new(component: &ComponentId) -> Self {
        Self {
            section: component_section(component),
            categories: HashMap::new(),
        }
    }
}

/// Outcome of [`SwitchRegistry::resolve`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// Store handle backing the switch.
    pub handle: SettingHandle,
    /// Whether this call created the switch.
    pub created: bool,
}

/// Maps switch keys to their persisted entries.
///
/// Switches are never removed; once a key resolves to a handle every later
/// lookup returns the same handle.
#[derive(Clone, Debug, Default)]
pub struct SwitchRegistry {
    components: HashMap<ComponentId, ComponentSwitches>,
}

impl SwitchRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `component` has a record, without creating any switch.
    pub fn register_component(&mut self, component: &ComponentId) {
        self.components
            .entry(component.clone())
            .or_insert_with(|| ComponentSwitches::new(component));
    }

    /// Adopts every switch already present in `store`.
    ///
    /// Entries are re-bound so they carry their description; their persisted
    /// value is kept. Returns the number of switches added.
    pub fn preload<S>(&mut self, store: &mut S, developer_mode: bool) -> usize
    where
        S: SettingsStore + ?Sized,
    {
        let found: Vec<SwitchKey> = store
            .entries()
            .filter_map(|entry| {
                let component = parse_component_section(entry.definition.section())?;
                let category = parse_category_label(entry.definition.key())?;
                Some(SwitchKey::new(&ComponentId::from(component), category))
            })
            .collect();

        let mut added = 0;
        for key in found {
            if self.handle(&key).is_some() {
                continue;
            }
            self.insert_bound(store, &key, developer_mode);
            added += 1;
        }
        added
    }

    /// Returns the handle of `component`'s `category` switch, binding a new
    /// persisted entry defaulting to `developer_mode` when it is unknown.
    pub fn resolve<S>(
        &mut self,
        store: &mut S,
        component: &ComponentId,
        category: &str,
        developer_mode: bool,
    ) -> Resolution
    where
        S: SettingsStore + ?Sized,
    {
        if let Some(handle) = self
            .components
            .get(component)
            .and_then(|switches| switches.categories.get(category))
        {
            return Resolution {
                handle: *handle,
                created: false,
            };
        }

        let key = SwitchKey::new(component, category);
        let handle = self.insert_bound(store, &key, developer_mode);
        Resolution {
            handle,
            created: true,
        }
    }

    fn insert_bound<S>(&mut self, store: &mut S, key: &SwitchKey, default: bool) -> SettingHandle
    where
        S: SettingsStore + ?Sized,
    {
        let switches = self
            .components
            .entry(key.component.clone())
            .or_insert_with(|| ComponentSwitches::new(&key.component));
        let definition = SettingDefinition::new(switches.section.clone(), category_label(&key.category));
        let handle = store.bind(
            definition,
            default,
            &category_description(&key.component, &key.category),
        );
        switches.categories.insert(key.category.clone(), handle);
        handle
    }

    /// Returns the handle bound to `key`, if the switch exists.
    #[must_use]
    pub fn handle(&self, key: &SwitchKey) -> Option<SettingHandle> {
        self.components
            .get(&key.component)
            .and_then(|switches| switches.categories.get(&key.category))
            .copied()
    }

    /// Lists every known switch, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<SwitchKey> {
        let mut keys: Vec<SwitchKey> = self
            .components
            .iter()
            .flat_map(|(component, switches)| {
                switches
                    .categories
                    .keys()
                    .map(move |category| SwitchKey::new(component, category))
            })
            .collect();
        keys.sort();
        keys
    }

    /// Lists registered components, sorted.
    #[must_use]
    pub fn components(&self) -> Vec<ComponentId> {
        let mut components: Vec<ComponentId> = self.components.keys().cloned().collect();
        components.sort();
        components
    }

    /// Number of switches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components
            .values()
            .map(|switches| switches.categories.len())
            .sum()
    }

    /// Returns `true` when no switch exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
