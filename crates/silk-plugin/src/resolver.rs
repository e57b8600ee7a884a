// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter metadata resolution and auto-completion.
//!
//! The [`ParameterResolver`] answers the questions a configuration UI asks
//! about a plugin parameter: its effective metadata, suggestions for its value
//! and labels for stored values.

use std::sync::Arc;

use silk_core::SilkError;
use tracing::debug;

use crate::autocomplete::{
    dependent_value_is_set, AutoCompletion, AutoCompletionProvider, AutoCompletionProviders,
    AutoCompletionRequest, DEFAULT_AUTO_COMPLETION_LIMIT,
};
use crate::descriptor::PluginDescriptor;
use crate::parameter::{AutoCompletionBinding, ParameterDescriptor};
use crate::registry::{ParameterValues, PluginRegistry};

/// Resolves parameter metadata against a registry and a provider map.
#[derive(Debug)]
pub struct ParameterResolver<'a> {
    registry: &'a PluginRegistry,
    providers: &'a AutoCompletionProviders,
    limit: usize,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(registry: &'a PluginRegistry, providers: &'a AutoCompletionProviders) -> Self {
        Self {
            registry,
            providers,
            limit: DEFAULT_AUTO_COMPLETION_LIMIT,
        }
    }

    /// Maximum number of suggestions returned by [`Self::auto_complete`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Metadata of a declared parameter with its effective label filled in.
    pub fn describe(&self, plugin_id: &str, parameter: &str) -> Result<ParameterDescriptor, SilkError> {
        let descriptor = self.registry.lookup(plugin_id)?;
        let param = find_parameter(&descriptor, parameter)?;
        Ok(with_effective_label(param))
    }

    /// Metadata of all parameters of a plugin, in declaration order.
    pub fn describe_all(&self, plugin_id: &str) -> Result<Vec<ParameterDescriptor>, SilkError> {
        let descriptor = self.registry.lookup(plugin_id)?;
        Ok(descriptor.parameters().iter().map(with_effective_label).collect())
    }

    /// Suggest values for a parameter given the current values of the form.
    ///
    /// Returns an empty list if the parameter has no auto-completion binding
    /// or if any parameter it depends on is not set yet.
    pub fn auto_complete(
        &self,
        plugin_id: &str,
        parameter: &str,
        current: &ParameterValues,
        query: &str,
    ) -> Result<Vec<AutoCompletion>, SilkError> {
        let descriptor = self.registry.lookup(plugin_id)?;
        let param = find_parameter(&descriptor, parameter)?;
        let Some(binding) = &param.auto_completion else {
            return Ok(Vec::new());
        };
        let depends_on = match dependency_values(&descriptor, binding, current) {
            Ok(values) => values,
            Err(unset) => {
                debug!(
                    plugin = plugin_id,
                    parameter,
                    dependency = unset,
                    "skipping auto-completion, dependency value is not set"
                );
                return Ok(Vec::new());
            }
        };

        let provider = self.provider(parameter, binding)?;
        let request = AutoCompletionRequest {
            parameter,
            query,
            limit: self.limit,
            depends_on: &depends_on,
        };
        let mut results = provider.complete(&request)?;
        results.truncate(self.limit);
        debug!(
            plugin = plugin_id,
            parameter,
            results = results.len(),
            "auto-completed parameter"
        );
        Ok(results)
    }

    /// The label of a stored value, for bindings that complete values with labels.
    ///
    /// Returns `None` when labels are not enabled, dependencies are unset, or
    /// the provider does not know the value.
    pub fn label_for_value(
        &self,
        plugin_id: &str,
        parameter: &str,
        value: &str,
        current: &ParameterValues,
    ) -> Result<Option<String>, SilkError> {
        let descriptor = self.registry.lookup(plugin_id)?;
        let param = find_parameter(&descriptor, parameter)?;
        let Some(binding) = param
            .auto_completion
            .as_ref()
            .filter(|b| b.auto_complete_value_with_labels)
        else {
            return Ok(None);
        };
        let Ok(depends_on) = dependency_values(&descriptor, binding, current) else {
            return Ok(None);
        };
        self.provider(parameter, binding)?
            .value_to_label(parameter, value, &depends_on)
    }

    /// Reject values the provider does not know, for bindings that only
    /// allow auto-completed values. Other parameters accept any value.
    ///
    /// Fails with [`SilkError::AutoCompletion`] if a dependency of the binding
    /// is not set; the provider is not consulted in that case.
    pub fn validate_auto_completed(
        &self,
        plugin_id: &str,
        parameter: &str,
        value: &str,
        current: &ParameterValues,
    ) -> Result<(), SilkError> {
        let descriptor = self.registry.lookup(plugin_id)?;
        let param = find_parameter(&descriptor, parameter)?;
        let Some(binding) = param
            .auto_completion
            .as_ref()
            .filter(|b| b.allow_only_auto_completed_values)
        else {
            return Ok(());
        };

        let depends_on =
            dependency_values(&descriptor, binding, current).map_err(|unset| SilkError::AutoCompletion {
                parameter: parameter.to_string(),
                message: format!("cannot check value, parameter `{unset}` is not set"),
            })?;
        let provider = self.provider(parameter, binding)?;
        if provider.find_value(parameter, value, &depends_on)?.is_some() {
            return Ok(());
        }

        let request = AutoCompletionRequest {
            parameter,
            query: "",
            limit: self.limit,
            depends_on: &depends_on,
        };
        Err(SilkError::InvalidValue {
            type_name: format!("{plugin_id}.{parameter}"),
            value: value.to_string(),
            valid: provider.complete(&request)?.into_iter().map(|s| s.value).collect(),
        })
    }

    /// Resolve supplied values like [`PluginRegistry::resolve_parameters`],
    /// then check every non-empty value of a parameter that only allows
    /// auto-completed values against its provider.
    pub fn resolve_parameters(
        &self,
        plugin_id: &str,
        supplied: &ParameterValues,
    ) -> Result<ParameterValues, SilkError> {
        let resolved = self.registry.resolve_parameters(plugin_id, supplied)?;
        for (name, value) in &resolved {
            if !value.is_empty() {
                self.validate_auto_completed(plugin_id, name, value, &resolved)?;
            }
        }
        Ok(resolved)
    }

    fn provider(
        &self,
        parameter: &str,
        binding: &AutoCompletionBinding,
    ) -> Result<Arc<dyn AutoCompletionProvider>, SilkError> {
        self.providers
            .get(&binding.provider)
            .ok_or_else(|| SilkError::AutoCompletion {
                parameter: parameter.to_string(),
                message: format!("no auto-completion provider `{}`", binding.provider),
            })
    }
}

fn find_parameter<'d>(
    descriptor: &'d PluginDescriptor,
    parameter: &str,
) -> Result<&'d ParameterDescriptor, SilkError> {
    descriptor
        .parameter(parameter)
        .ok_or_else(|| SilkError::ParameterNotFound {
            plugin: descriptor.id().to_string(),
            parameter: parameter.to_string(),
        })
}

fn with_effective_label(param: &ParameterDescriptor) -> ParameterDescriptor {
    let mut resolved = param.clone();
    resolved.label = Some(param.label().into_owned());
    resolved
}

/// Current values of the binding's dependencies, in binding order.
///
/// Fails with the name of the first dependency that is not set. An empty value
/// of a dependency with a default is replaced by the default.
fn dependency_values<'b>(
    descriptor: &PluginDescriptor,
    binding: &'b AutoCompletionBinding,
    current: &ParameterValues,
) -> Result<Vec<String>, &'b str> {
    binding
        .depends_on
        .iter()
        .map(|name| {
            let default = descriptor.parameter(name).and_then(|p| p.default_value.as_ref());
            let value = current.get(name).map(String::as_str);
            match (value, default) {
                _ if !dependent_value_is_set(value, default.is_some()) => Err(name.as_str()),
                (Some(""), Some(default)) => Ok(default.clone()),
                (v, _) => Ok(v.unwrap_or_default().to_string()),
            }
        })
        .collect()
}
