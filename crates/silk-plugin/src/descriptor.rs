// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors.
//!
//! A `PluginDescriptor` is the identity card of a plugin implementation: id,
//! label, categories, documentation references and the ordered list of
//! parameters. Descriptors are built once through [`PluginDescriptorBuilder`],
//! whose `build()` rejects malformed definitions, and are immutable afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use silk_core::SilkError;
use strum::{Display, EnumIter, EnumString};

use crate::example::{ExampleCase, ExampleKind, ExpectedOutcome};
use crate::parameter::ParameterDescriptor;

/// Category assigned to plugins that declare none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The kind of plugin a descriptor describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum PluginType {
    TransformOperator,
    DistanceMeasure,
    AggregationOperator,
    Dataset,
    Task,
    Other,
}

impl PluginType {
    /// The example kind this plugin type can document, if any.
    pub fn example_kind(self) -> Option<ExampleKind> {
        match self {
            PluginType::TransformOperator => Some(ExampleKind::Transform),
            PluginType::DistanceMeasure => Some(ExampleKind::DistanceMeasure),
            PluginType::AggregationOperator => Some(ExampleKind::Aggregator),
            _ => None,
        }
    }
}

/// Immutable description of a plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    id: String,
    label: String,
    plugin_type: PluginType,
    categories: Vec<String>,
    description: String,
    documentation_file: Option<String>,
    icon: Option<String>,
    deprecation: Option<String>,
    parameters: Vec<ParameterDescriptor>,
    examples: Vec<ExampleCase>,
}

impl PluginDescriptor {
    /// Start building a descriptor with the given id and display label.
    pub fn builder(id: impl Into<String>, label: impl Into<String>) -> PluginDescriptorBuilder {
        PluginDescriptorBuilder {
            descriptor: PluginDescriptor {
                id: id.into(),
                label: label.into(),
                plugin_type: PluginType::Other,
                categories: Vec::new(),
                description: String::new(),
                documentation_file: None,
                icon: None,
                deprecation: None,
                parameters: Vec::new(),
                examples: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn plugin_type(&self) -> PluginType {
        self.plugin_type
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reference to an external markdown file with extended documentation.
    pub fn documentation_file(&self) -> Option<&str> {
        self.documentation_file.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Deprecation message; `Some` means the plugin should no longer be used.
    pub fn deprecation(&self) -> Option<&str> {
        self.deprecation.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn examples(&self) -> &[ExampleCase] {
        &self.examples
    }

    /// Check all definition-time invariants.
    pub fn validate(&self) -> Result<(), SilkError> {
        let fail = |message: String| Err(SilkError::definition(&self.id, message));

        if self.id.trim().is_empty() {
            return fail("plugin id must not be empty".to_string());
        }
        if self.id.chars().any(char::is_whitespace) {
            return fail("plugin id must not contain whitespace".to_string());
        }
        if self.label.trim().is_empty() {
            return fail("plugin label must not be empty".to_string());
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return fail("categories must not be empty strings".to_string());
        }

        let mut names = HashSet::new();
        for param in &self.parameters {
            if param.name.trim().is_empty() {
                return fail("parameter names must not be empty".to_string());
            }
            if !names.insert(param.name.as_str()) {
                return fail(format!("duplicate parameter `{}`", param.name));
            }
            if param.description.trim().is_empty() {
                return fail(format!("parameter `{}` has no description", param.name));
            }
            if let Some(default) = &param.default_value {
                if let Err(e) = param.validate_value(default) {
                    return fail(format!("default of parameter `{}` is invalid: {e}", param.name));
                }
            }
        }

        for param in &self.parameters {
            let Some(binding) = &param.auto_completion else {
                continue;
            };
            if binding.provider.trim().is_empty() {
                return fail(format!(
                    "parameter `{}` has an auto-completion binding without provider",
                    param.name
                ));
            }
            for dependency in &binding.depends_on {
                if dependency == &param.name {
                    return fail(format!("parameter `{}` cannot depend on itself", param.name));
                }
                if !names.contains(dependency.as_str()) {
                    return fail(format!(
                        "auto-completion of `{}` depends on undeclared parameter `{dependency}`",
                        param.name
                    ));
                }
            }
        }

        for (i, example) in self.examples.iter().enumerate() {
            self.validate_example(i + 1, example)?;
        }

        Ok(())
    }

    fn validate_example(&self, number: usize, example: &ExampleCase) -> Result<(), SilkError> {
        let fail = |message: String| Err(SilkError::definition(&self.id, format!("example {number}: {message}")));

        match self.plugin_type.example_kind() {
            Some(kind) if kind == example.kind => {}
            _ => {
                return fail(format!(
                    "{} examples are not supported by {} plugins",
                    example.kind, self.plugin_type
                ))
            }
        }
        if example.inputs.is_empty() {
            return fail("at least one input is required".to_string());
        }
        if example.kind == ExampleKind::DistanceMeasure && example.inputs.len() != 2 {
            return fail("distance measure examples need exactly two inputs".to_string());
        }
        match &example.expected {
            ExpectedOutcome::Score(score) if !score.is_finite() => {
                return fail("expected score must be finite".to_string());
            }
            ExpectedOutcome::Values(_) if example.kind != ExampleKind::Transform => {
                return fail("only transform examples can expect output values".to_string());
            }
            ExpectedOutcome::Score(_) if example.kind == ExampleKind::Transform => {
                return fail("transform examples cannot expect a score".to_string());
            }
            _ => {}
        }
        for (name, value) in &example.parameters {
            let Some(param) = self.parameter(name) else {
                return fail(format!("undeclared parameter `{name}`"));
            };
            if let Err(e) = param.validate_value(value) {
                return fail(e.to_string());
            }
        }
        Ok(())
    }
}

/// Builder for [`PluginDescriptor`].
#[derive(Debug, Clone)]
pub struct PluginDescriptorBuilder {
    descriptor: PluginDescriptor,
}

impl PluginDescriptorBuilder {
    pub fn plugin_type(mut self, plugin_type: PluginType) -> Self {
        self.descriptor.plugin_type = plugin_type;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.descriptor.categories.push(category.into());
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = description.into();
        self
    }

    pub fn documentation_file(mut self, path: impl Into<String>) -> Self {
        self.descriptor.documentation_file = Some(path.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.icon = Some(icon.into());
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.descriptor.deprecation = Some(message.into());
        self
    }

    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.descriptor.parameters.push(parameter);
        self
    }

    pub fn example(mut self, example: ExampleCase) -> Self {
        self.descriptor.examples.push(example);
        self
    }

    /// Finish the descriptor, applying the default category and validating it.
    pub fn build(mut self) -> Result<PluginDescriptor, SilkError> {
        if self.descriptor.categories.is_empty() {
            self.descriptor.categories.push(UNCATEGORIZED.to_string());
        }
        self.descriptor.validate()?;
        Ok(self.descriptor)
    }
}
