// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry.
//!
//! The `PluginRegistry` associates plugin ids with their descriptors and
//! optional implementation factories. Reads load an immutable
//! [`RegistrySnapshot`] without locking; registrations are serialised by a
//! writer lock, copy the current snapshot, and swap the new one in. A snapshot
//! obtained before a registration never observes it.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use silk_core::SilkError;
use tracing::{debug, info, warn};

use crate::descriptor::PluginDescriptor;

/// Parameter values keyed by parameter name.
pub type ParameterValues = BTreeMap<String, String>;

/// An instantiated plugin, as produced by a [`PluginFactory`].
pub type PluginInstance = Box<dyn Any + Send + Sync>;

/// Creates plugin instances from resolved parameter values.
///
/// Factories are optional -- the registry can hold descriptors without an
/// implementation for catalog display and validation purposes.
pub trait PluginFactory: Send + Sync {
    /// Create an instance. `parameters` contains a validated value for every
    /// declared parameter.
    fn create(&self, parameters: &ParameterValues) -> Result<PluginInstance, SilkError>;
}

impl<F> PluginFactory for F
where
    F: Fn(&ParameterValues) -> Result<PluginInstance, SilkError> + Send + Sync,
{
    fn create(&self, parameters: &ParameterValues) -> Result<PluginInstance, SilkError> {
        self(parameters)
    }
}

/// A single entry in the plugin registry.
#[derive(Clone)]
pub struct PluginEntry {
    pub descriptor: Arc<PluginDescriptor>,
    pub factory: Option<Arc<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("descriptor", &self.descriptor.id())
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

/// Immutable view of the registry at one point in time.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    entries: Vec<PluginEntry>,
    index: HashMap<String, usize>,
}

impl RegistrySnapshot {
    pub fn get(&self, id: &str) -> Option<&PluginEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[PluginEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of plugin descriptors.
pub struct PluginRegistry {
    snapshot: ArcSwap<RegistrySnapshot>,
    writer: Mutex<()>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(RegistrySnapshot::default()),
            writer: Mutex::new(()),
        }
    }

    /// Register a descriptor with an optional implementation factory.
    ///
    /// Registering the same id again with an equal descriptor is a no-op that
    /// returns the stored descriptor. A different descriptor under an existing
    /// id fails with [`SilkError::ConflictingRegistration`]; the first
    /// registration is kept.
    pub fn register(
        &self,
        factory: Option<Arc<dyn PluginFactory>>,
        descriptor: PluginDescriptor,
    ) -> Result<Arc<PluginDescriptor>, SilkError> {
        descriptor.validate()?;

        let _guard = self
            .writer
            .lock()
            .map_err(|_| SilkError::Internal("plugin registry writer lock poisoned".to_string()))?;

        let current = self.snapshot.load_full();
        if let Some(existing) = current.get(descriptor.id()) {
            if *existing.descriptor == descriptor {
                debug!(plugin = %descriptor.id(), "plugin already registered with identical descriptor");
                return Ok(Arc::clone(&existing.descriptor));
            }
            warn!(plugin = %descriptor.id(), "rejected conflicting plugin registration");
            return Err(SilkError::ConflictingRegistration {
                id: descriptor.id().to_string(),
            });
        }

        let descriptor = Arc::new(descriptor);
        let mut next = RegistrySnapshot::clone(&current);
        next.index
            .insert(descriptor.id().to_string(), next.entries.len());
        next.entries.push(PluginEntry {
            descriptor: Arc::clone(&descriptor),
            factory,
        });
        self.snapshot.store(Arc::new(next));

        info!(
            plugin = %descriptor.id(),
            plugin_type = %descriptor.plugin_type(),
            parameters = descriptor.parameters().len(),
            "registered plugin"
        );
        Ok(descriptor)
    }

    /// Register a descriptor that has no implementation attached.
    pub fn register_descriptor(
        &self,
        descriptor: PluginDescriptor,
    ) -> Result<Arc<PluginDescriptor>, SilkError> {
        self.register(None, descriptor)
    }

    /// Register several descriptors, stopping at the first error.
    pub fn register_all<I>(&self, descriptors: I) -> Result<usize, SilkError>
    where
        I: IntoIterator<Item = PluginDescriptor>,
    {
        let mut count = 0;
        for descriptor in descriptors {
            self.register_descriptor(descriptor)?;
            count += 1;
        }
        Ok(count)
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
        self.snapshot.load_full()
    }

    /// Look up a descriptor by plugin id.
    pub fn lookup(&self, id: &str) -> Result<Arc<PluginDescriptor>, SilkError> {
        self.snapshot
            .load()
            .get(id)
            .map(|e| Arc::clone(&e.descriptor))
            .ok_or_else(|| SilkError::PluginNotFound(id.to_string()))
    }

    /// Descriptors whose categories contain `category`, in registration order.
    pub fn list_by_category(&self, category: &str) -> Vec<Arc<PluginDescriptor>> {
        self.snapshot
            .load()
            .entries
            .iter()
            .filter(|e| e.descriptor.has_category(category))
            .map(|e| Arc::clone(&e.descriptor))
            .collect()
    }

    /// All descriptors in registration order.
    pub fn list_all(&self) -> Vec<Arc<PluginDescriptor>> {
        self.snapshot
            .load()
            .entries
            .iter()
            .map(|e| Arc::clone(&e.descriptor))
            .collect()
    }

    /// Distinct categories in the order they were first seen.
    pub fn categories(&self) -> Vec<String> {
        let snapshot = self.snapshot.load();
        let mut categories: Vec<String> = Vec::new();
        for entry in &snapshot.entries {
            for category in entry.descriptor.categories() {
                if !categories.contains(category) {
                    categories.push(category.clone());
                }
            }
        }
        categories
    }

    /// Resolve supplied values against the plugin's parameters.
    ///
    /// Unknown names are rejected, defaults fill in missing values (an empty
    /// supplied value counts as missing when a default exists), required
    /// parameters must be present, and every value is validated against its
    /// declared type.
    pub fn resolve_parameters(
        &self,
        id: &str,
        supplied: &ParameterValues,
    ) -> Result<ParameterValues, SilkError> {
        let descriptor = self.lookup(id)?;

        if let Some(unknown) = supplied.keys().find(|name| descriptor.parameter(name).is_none()) {
            return Err(SilkError::UnknownParameter {
                plugin: id.to_string(),
                parameter: unknown.clone(),
            });
        }

        let mut resolved = ParameterValues::new();
        for param in descriptor.parameters() {
            let value = match (supplied.get(&param.name), &param.default_value) {
                (Some(value), Some(default)) if value.is_empty() => default.clone(),
                (Some(value), _) => value.clone(),
                (None, Some(default)) => default.clone(),
                (None, None) => {
                    return Err(SilkError::MissingParameter {
                        plugin: id.to_string(),
                        parameter: param.name.clone(),
                    })
                }
            };
            param.validate_value(&value)?;
            resolved.insert(param.name.clone(), value);
        }
        Ok(resolved)
    }

    /// Resolve parameters and create an instance with the registered factory.
    pub fn create(&self, id: &str, supplied: &ParameterValues) -> Result<PluginInstance, SilkError> {
        let parameters = self.resolve_parameters(id, supplied)?;
        let factory = self
            .snapshot
            .load()
            .get(id)
            .and_then(|e| e.factory.clone())
            .ok_or_else(|| SilkError::Internal(format!("plugin `{id}` has no implementation")))?;
        factory.create(&parameters)
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.len())
            .finish()
    }
}
