// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `silk plugins`, `silk show` and `silk validate` output.

use std::io::IsTerminal;

use serde::Serialize;
use silk_core::SilkError;
use silk_plugin::{ParameterValues, PluginDescriptor, PluginDetails, PluginRegistry, PluginType};

/// Whether to colorize output: not disabled and stdout is a terminal.
pub fn use_color(plain: bool) -> bool {
    !plain && std::io::stdout().is_terminal()
}

/// One row of `silk plugins --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSummary {
    pub id: String,
    pub label: String,
    pub plugin_type: PluginType,
    pub categories: Vec<String>,
    pub deprecated: bool,
}

impl From<&PluginDescriptor> for PluginSummary {
    fn from(d: &PluginDescriptor) -> Self {
        Self {
            id: d.id().to_string(),
            label: d.label().to_string(),
            plugin_type: d.plugin_type(),
            categories: d.categories().to_vec(),
            deprecated: d.is_deprecated(),
        }
    }
}

/// Render the plugin list, optionally restricted to one category.
pub fn render_plugin_list(
    registry: &PluginRegistry,
    category: Option<&str>,
    json: bool,
    use_color: bool,
) -> Result<String, SilkError> {
    let descriptors = match category {
        Some(category) => registry.list_by_category(category),
        None => registry.list_all(),
    };

    if json {
        let summaries: Vec<PluginSummary> = descriptors.iter().map(|d| PluginSummary::from(d.as_ref())).collect();
        return to_json(&summaries);
    }

    if descriptors.is_empty() {
        return Ok(match category {
            Some(c) => format!("No plugins in category `{c}`.\n"),
            None => "No plugins registered.\n".to_string(),
        });
    }

    let mut out = String::new();
    for d in &descriptors {
        let mut label = d.label().to_string();
        if d.is_deprecated() {
            label = if use_color {
                use colored::Colorize;
                format!("{} {}", label, "(deprecated)".yellow())
            } else {
                format!("{label} (deprecated)")
            };
        }
        let id = if use_color {
            use colored::Colorize;
            d.id().bold().to_string()
        } else {
            d.id().to_string()
        };
        // Pad on the raw id so escape codes do not skew the columns.
        let padding = " ".repeat(24usize.saturating_sub(d.id().len()));
        out.push_str(&format!(
            "  {id}{padding}{:<20} {:<40} [{}]\n",
            d.plugin_type().to_string(),
            label,
            d.categories().join(", ")
        ));
    }
    Ok(out)
}

/// Render a single plugin with its parameters.
pub fn render_plugin(registry: &PluginRegistry, id: &str, json: bool) -> Result<String, SilkError> {
    let descriptor = registry.lookup(id)?;
    if json {
        return to_json(&PluginDetails::from(descriptor.as_ref()));
    }

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", descriptor.label(), descriptor.id()));
    out.push_str(&format!("  Type:       {}\n", descriptor.plugin_type()));
    out.push_str(&format!("  Categories: {}\n", descriptor.categories().join(", ")));
    if let Some(message) = descriptor.deprecation() {
        out.push_str(&format!("  Deprecated: {message}\n"));
    }
    if !descriptor.description().is_empty() {
        out.push_str(&format!("  {}\n", descriptor.description()));
    }

    if !descriptor.parameters().is_empty() {
        out.push_str("\n  Parameters:\n");
        for param in descriptor.parameters() {
            let default = match &param.default_value {
                Some(v) => format!("default `{v}`"),
                None => "required".to_string(),
            };
            let mut flags = vec![param.parameter_type.name().to_string(), default];
            if param.advanced {
                flags.push("advanced".to_string());
            }
            if !param.visible_in_dialog {
                flags.push("hidden".to_string());
            }
            out.push_str(&format!(
                "    {:<20} {} ({})\n",
                param.name,
                param.label(),
                flags.join(", ")
            ));
            out.push_str(&format!("    {:<20} {}\n", "", param.description));
        }
    }
    Ok(out)
}

/// Parse `name=value` arguments. The value may be empty; the name may not.
pub fn parse_assignments(args: &[String]) -> Result<ParameterValues, SilkError> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.to_string()))
            }
            _ => Err(SilkError::InvalidValue {
                type_name: "parameter assignment".to_string(),
                value: arg.clone(),
                valid: vec!["name=value".to_string()],
            }),
        })
        .collect()
}

/// Render resolved values as `name = value` lines.
pub fn render_resolved(values: &ParameterValues) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{name} = {value}\n"))
        .collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SilkError> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| SilkError::Internal(format!("failed to serialize output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use silk_plugin::builtin_catalog;

    fn registry() -> PluginRegistry {
        let registry = PluginRegistry::new();
        registry.register_all(builtin_catalog().unwrap()).unwrap();
        registry
    }

    #[test]
    fn list_marks_deprecated_plugins() {
        let out = render_plugin_list(&registry(), Some("Normalize"), false, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("lowerCase"));
        assert!(lines[1].contains("Remove blanks (deprecated)"));
    }

    #[test]
    fn list_unknown_category() {
        let out = render_plugin_list(&registry(), Some("Audio"), false, false).unwrap();
        assert_eq!(out, "No plugins in category `Audio`.\n");
    }

    #[test]
    fn list_json() {
        let out = render_plugin_list(&registry(), Some("RDF"), true, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["id"], "sparqlEndpoint");
        assert_eq!(json[0]["pluginType"], "Dataset");
        assert_eq!(json[0]["deprecated"], false);
    }

    #[test]
    fn show_plugin_lists_parameters() {
        let out = render_plugin(&registry(), "transform", false).unwrap();
        assert!(out.starts_with("Transform (transform)\n"));
        assert!(out.contains("Target vocabularies (enumeration, default `allInstalled`)"));
        assert!(out.contains("hidden"));
    }

    #[test]
    fn show_json_is_plugin_details() {
        let out = render_plugin(&registry(), "numberToDuration", true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["pluginId"], "numberToDuration");
        assert_eq!(json["properties"]["unit"]["value"], "days");
    }

    #[test]
    fn show_unknown_plugin_fails() {
        assert!(matches!(
            render_plugin(&registry(), "nope", false),
            Err(SilkError::PluginNotFound(_))
        ));
    }

    #[test]
    fn assignments() {
        let args = vec!["pageSize=10".to_string(), "graph=".to_string()];
        let values = parse_assignments(&args).unwrap();
        assert_eq!(values["pageSize"], "10");
        assert_eq!(values["graph"], "");
        assert!(parse_assignments(&["=x".to_string()]).is_err());
        assert!(parse_assignments(&["novalue".to_string()]).is_err());
    }

    #[test]
    fn resolved_values_are_sorted_by_name() {
        let args = vec!["endpointURI=http://dbpedia.org/sparql".to_string()];
        let resolved = registry()
            .resolve_parameters("sparqlEndpoint", &parse_assignments(&args).unwrap())
            .unwrap();
        assert_eq!(
            render_resolved(&resolved),
            "endpointURI = http://dbpedia.org/sparql\ngraph = \npageSize = 1000\nstrategy = parallel\n"
        );
    }
}
