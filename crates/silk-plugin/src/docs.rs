// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin documentation: Markdown pages and the JSON details shape consumed by
//! configuration UIs.

use std::collections::BTreeMap;

use serde::Serialize;
use silk_core::EnumerationOption;

use crate::descriptor::{PluginDescriptor, PluginType};
use crate::example::{ExampleCase, ExpectedOutcome};
use crate::parameter::{ParameterDescriptor, ParameterType};

/// Plugin description as served to configuration UIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDetails {
    pub plugin_id: String,
    pub title: String,
    pub description: String,
    pub plugin_type: PluginType,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Parameters by name; `order_idx` keeps the declaration order.
    pub properties: BTreeMap<String, PropertyDetails>,
    /// Names of parameters without a default, in declaration order.
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub title: String,
    pub description: String,
    pub parameter_type: String,
    /// The default value.
    pub value: Option<String>,
    pub advanced: bool,
    pub visible_in_dialog: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<EnumerationOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_completion: Option<AutoCompletionDetails>,
    pub order_idx: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCompletionDetails {
    pub provider: String,
    pub allow_only_auto_completed_values: bool,
    pub auto_complete_value_with_labels: bool,
    pub auto_completion_depends_on_parameters: Vec<String>,
}

impl From<&PluginDescriptor> for PluginDetails {
    fn from(descriptor: &PluginDescriptor) -> Self {
        let properties = descriptor
            .parameters()
            .iter()
            .enumerate()
            .map(|(idx, param)| (param.name.clone(), PropertyDetails::new(param, idx)))
            .collect();
        let required = descriptor
            .parameters()
            .iter()
            .filter(|p| p.is_required())
            .map(|p| p.name.clone())
            .collect();

        PluginDetails {
            plugin_id: descriptor.id().to_string(),
            title: descriptor.label().to_string(),
            description: descriptor.description().to_string(),
            plugin_type: descriptor.plugin_type(),
            categories: descriptor.categories().to_vec(),
            deprecation: descriptor.deprecation().map(str::to_string),
            documentation_file: descriptor.documentation_file().map(str::to_string),
            icon: descriptor.icon().map(str::to_string),
            properties,
            required,
        }
    }
}

impl PropertyDetails {
    fn new(param: &ParameterDescriptor, order_idx: usize) -> Self {
        let options = match &param.parameter_type {
            ParameterType::Enumeration(schema) => Some(schema.values().to_vec()),
            _ => None,
        };
        PropertyDetails {
            title: param.label().into_owned(),
            description: param.description.clone(),
            parameter_type: param.parameter_type.name().to_string(),
            value: param.default_value.clone(),
            advanced: param.advanced,
            visible_in_dialog: param.visible_in_dialog,
            example: param.example.clone(),
            options,
            auto_completion: param.auto_completion.as_ref().map(|b| AutoCompletionDetails {
                provider: b.provider.clone(),
                allow_only_auto_completed_values: b.allow_only_auto_completed_values,
                auto_complete_value_with_labels: b.auto_complete_value_with_labels,
                auto_completion_depends_on_parameters: b.depends_on.clone(),
            }),
            order_idx,
        }
    }
}

/// Render a Markdown documentation page for a plugin.
pub fn render_markdown(descriptor: &PluginDescriptor) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", descriptor.label()));
    if let Some(message) = descriptor.deprecation() {
        output.push_str(&format!("> **Deprecated:** {message}\n\n"));
    }
    if !descriptor.description().is_empty() {
        output.push_str(descriptor.description());
        output.push_str("\n\n");
    }

    output.push_str(&format!("- **Id:** `{}`\n", descriptor.id()));
    output.push_str(&format!("- **Type:** {}\n", descriptor.plugin_type()));
    output.push_str(&format!("- **Categories:** {}\n", descriptor.categories().join(", ")));
    if let Some(file) = descriptor.documentation_file() {
        output.push_str(&format!("- **Documentation:** {file}\n"));
    }
    output.push('\n');

    if !descriptor.parameters().is_empty() {
        output.push_str("## Parameters\n\n");
        output.push_str("| Name | Label | Type | Default | Description |\n");
        output.push_str("|------|-------|------|---------|-------------|\n");
        for param in descriptor.parameters() {
            let mut label = param.label().into_owned();
            if param.advanced {
                label.push_str(" (advanced)");
            }
            let default = match &param.default_value {
                None => "*required*".to_string(),
                Some(v) if v.is_empty() => "*empty*".to_string(),
                Some(v) => format!("`{v}`"),
            };
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                param.name,
                escape_cell(&label),
                escape_cell(&type_cell(&param.parameter_type)),
                escape_cell(&default),
                escape_cell(&param.description)
            ));
        }
        output.push('\n');
    }

    if !descriptor.examples().is_empty() {
        output.push_str("## Examples\n\n");
        for (i, example) in descriptor.examples().iter().enumerate() {
            render_example(&mut output, i + 1, example);
        }
    }

    output
}

fn render_example(output: &mut String, number: usize, example: &ExampleCase) {
    output.push_str(&format!("### Example {number}\n\n"));
    if let Some(description) = &example.description {
        output.push_str(&format!("{description}\n\n"));
    }
    if !example.parameters.is_empty() {
        output.push_str("Parameters:\n");
        for (name, value) in &example.parameters {
            output.push_str(&format!("- {name}: `{value}`\n"));
        }
        output.push('\n');
    }
    output.push_str("Inputs:\n");
    for input in &example.inputs {
        output.push_str(&format!("- {}: {}\n", input.label, code_list(&input.values)));
    }
    output.push('\n');

    let expected = match &example.expected {
        ExpectedOutcome::Values(values) => format!("Returns: {}", code_list(values)),
        ExpectedOutcome::Score(score) => format!("Returns: `{score}`"),
        ExpectedOutcome::Failure { message: Some(m) } => format!("Fails with: {m}"),
        ExpectedOutcome::Failure { message: None } => "Fails".to_string(),
    };
    output.push_str(&format!("{expected}\n\n"));
}

fn type_cell(parameter_type: &ParameterType) -> String {
    match parameter_type {
        ParameterType::Enumeration(schema) => {
            let ids: Vec<String> = schema.ids().map(|id| format!("`{id}`")).collect();
            format!("{} ({})", schema.type_name(), ids.join(", "))
        }
        other => other.name().to_string(),
    }
}

fn code_list(values: &[String]) -> String {
    if values.is_empty() {
        return "*none*".to_string();
    }
    values
        .iter()
        .map(|v| format!("`{v}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
