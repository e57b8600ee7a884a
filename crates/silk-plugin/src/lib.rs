// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin self-description for Silk.
//!
//! Plugins describe themselves through a [`PluginDescriptor`]: id, label,
//! categories and an ordered list of [`ParameterDescriptor`]s. Descriptors are
//! registered in a [`PluginRegistry`], looked up by id or category, and their
//! parameters are resolved for configuration UIs by the [`ParameterResolver`].
//! Descriptors come from code, from the built-in catalog, or from TOML manifests.

pub mod autocomplete;
pub mod catalog;
pub mod descriptor;
pub mod docs;
pub mod example;
pub mod manifest;
pub mod parameter;
pub mod registry;
pub mod resolver;

pub use autocomplete::{
    dependent_value_is_set, AutoCompletion, AutoCompletionProvider, AutoCompletionProviders,
    AutoCompletionRequest, StaticCompletions, DEFAULT_AUTO_COMPLETION_LIMIT,
};
pub use catalog::{builtin_catalog, search_catalog};
pub use descriptor::{PluginDescriptor, PluginDescriptorBuilder, PluginType, UNCATEGORIZED};
pub use docs::{render_markdown, AutoCompletionDetails, PluginDetails, PropertyDetails};
pub use example::{
    ExampleCase, ExampleInput, ExampleKind, ExampleMismatch, ExampleOutput, ExpectedOutcome,
};
pub use manifest::{discover_manifests, parse_plugin_manifest, INLINE_MANIFEST_PATH};
pub use parameter::{generate_label, AutoCompletionBinding, ParameterDescriptor, ParameterType};
pub use registry::{
    ParameterValues, PluginEntry, PluginFactory, PluginInstance, PluginRegistry, RegistrySnapshot,
};
pub use resolver::ParameterResolver;
