// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from TOML files.
//!
//! A manifest declares a plugin descriptor without code:
//!
//! ```toml
//! [plugin]
//! id = "csvFile"
//! label = "CSV file"
//! type = "Dataset"
//! categories = ["File"]
//!
//! [[parameters]]
//! name = "file"
//! description = "The CSV file."
//! type = "resource"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use silk_core::{builtin_enumeration, EnumerationOption, EnumerationSchema, SilkError};
use tracing::debug;

use crate::descriptor::{PluginDescriptor, PluginType};
use crate::example::{ExampleCase, ExampleKind};
use crate::parameter::{AutoCompletionBinding, ParameterDescriptor, ParameterType};

/// Intermediate TOML deserialization struct for a manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    plugin: PluginSection,
    #[serde(default)]
    parameters: Vec<ParameterSection>,
    #[serde(default)]
    examples: Vec<ExampleSection>,
}

/// The `[plugin]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    id: String,
    label: String,
    #[serde(rename = "type")]
    plugin_type: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    description: Option<String>,
    documentation_file: Option<String>,
    icon: Option<String>,
    deprecation: Option<String>,
}

/// One `[[parameters]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterSection {
    name: String,
    label: Option<String>,
    description: String,
    example: Option<String>,
    #[serde(rename = "type")]
    parameter_type: Option<String>,
    default: Option<String>,
    #[serde(default)]
    advanced: bool,
    #[serde(default = "default_true")]
    visible_in_dialog: bool,
    /// Name of a built-in enumeration, or the type name of inline `options`.
    enumeration: Option<String>,
    options: Option<Vec<OptionSection>>,
    auto_completion: Option<AutoCompletionSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionSection {
    id: String,
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AutoCompletionSection {
    provider: String,
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    allow_only_auto_completed_values: bool,
    #[serde(default)]
    auto_complete_value_with_labels: bool,
}

/// One `[[examples]]` entry. Exactly one of `output`, `score` or `fails` is set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExampleSection {
    kind: Option<String>,
    description: Option<String>,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
    inputs: Vec<Vec<String>>,
    output: Option<Vec<String>>,
    score: Option<f64>,
    #[serde(default)]
    fails: bool,
    failure_message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Path reported for manifests parsed from a string.
pub const INLINE_MANIFEST_PATH: &str = "<inline>";

/// Parse a plugin manifest from TOML content.
///
/// Malformed TOML and unknown keys fail with [`SilkError::Manifest`] at
/// [`INLINE_MANIFEST_PATH`]; semantic problems fail with
/// [`SilkError::Definition`]. The resulting descriptor has passed all
/// definition checks.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginDescriptor, SilkError> {
    let file: ManifestFile = toml::from_str(toml_content).map_err(|e| SilkError::Manifest {
        path: INLINE_MANIFEST_PATH.to_string(),
        message: format!("invalid plugin manifest: {e}"),
    })?;

    let section = file.plugin;
    let id = section.id;
    let fail = |message: String| SilkError::definition(&id, message);

    let plugin_type = match &section.plugin_type {
        Some(name) => PluginType::from_str(name).map_err(|_| {
            fail(format!(
                "invalid type '{name}'. Expected one of: TransformOperator, DistanceMeasure, AggregationOperator, Dataset, Task, Other"
            ))
        })?,
        None => PluginType::Other,
    };

    let mut builder = PluginDescriptor::builder(&id, section.label)
        .plugin_type(plugin_type)
        .categories(section.categories);
    if let Some(description) = section.description {
        builder = builder.description(description);
    }
    if let Some(path) = section.documentation_file {
        builder = builder.documentation_file(path);
    }
    if let Some(icon) = section.icon {
        builder = builder.icon(icon);
    }
    if let Some(message) = section.deprecation {
        builder = builder.deprecated(message);
    }

    for param in file.parameters {
        builder = builder.parameter(parameter_from_section(param).map_err(fail)?);
    }

    for (i, example) in file.examples.into_iter().enumerate() {
        let example = example_from_section(example, plugin_type)
            .map_err(|message| fail(format!("example {}: {message}", i + 1)))?;
        builder = builder.example(example);
    }

    builder.build()
}

fn parameter_from_section(section: ParameterSection) -> Result<ParameterDescriptor, String> {
    let parameter_type = parameter_type(&section)?;

    let mut param = ParameterDescriptor::new(section.name, section.description).with_type(parameter_type);
    param.label = section.label;
    param.example = section.example;
    param.default_value = section.default;
    param.advanced = section.advanced;
    param.visible_in_dialog = section.visible_in_dialog;
    param.auto_completion = section.auto_completion.map(|ac| AutoCompletionBinding {
        provider: ac.provider,
        depends_on: ac.depends_on,
        allow_only_auto_completed_values: ac.allow_only_auto_completed_values,
        auto_complete_value_with_labels: ac.auto_complete_value_with_labels,
    });
    Ok(param)
}

fn parameter_type(section: &ParameterSection) -> Result<ParameterType, String> {
    let declared = section.parameter_type.as_deref();
    let is_enumeration = section.enumeration.is_some() || section.options.is_some();

    if !is_enumeration {
        return match declared {
            None => Ok(ParameterType::String),
            Some("enumeration") => Err(format!(
                "parameter `{}` is an enumeration but names neither `enumeration` nor `options`",
                section.name
            )),
            Some(name) => ParameterType::from_name(name)
                .ok_or_else(|| format!("parameter `{}` has unknown type '{name}'", section.name)),
        };
    }

    if declared.is_some_and(|t| t != "enumeration") {
        return Err(format!(
            "parameter `{}` declares enumeration values but has type '{}'",
            section.name,
            declared.unwrap_or_default()
        ));
    }

    let schema = if let Some(options) = &section.options {
        let type_name = section.enumeration.clone().unwrap_or_else(|| section.name.clone());
        let options = options
            .iter()
            .map(|o| EnumerationOption::new(&o.id, o.label.as_deref().unwrap_or(&o.id)))
            .collect();
        EnumerationSchema::new(type_name, options).map_err(|e| e.to_string())?
    } else {
        let name = section.enumeration.as_deref().unwrap_or_default();
        builtin_enumeration(name).ok_or_else(|| format!("unknown enumeration '{name}'"))?
    };
    Ok(ParameterType::Enumeration(schema))
}

fn example_from_section(section: ExampleSection, plugin_type: PluginType) -> Result<ExampleCase, String> {
    let kind = match &section.kind {
        Some(name) => ExampleKind::from_str(name).map_err(|_| format!("unknown example kind '{name}'"))?,
        None => plugin_type
            .example_kind()
            .ok_or_else(|| format!("{plugin_type} plugins cannot declare examples"))?,
    };

    let mut example = ExampleCase::new(kind);
    example.description = section.description;
    example.parameters = section.parameters;
    for values in section.inputs {
        example = example.with_input(values);
    }

    example = match (section.output, section.score, section.fails) {
        (Some(values), None, false) => example.expecting(values),
        (None, Some(score), false) => example.expecting_score(score),
        (None, None, true) => example.expecting_failure(section.failure_message.as_deref()),
        _ => return Err("exactly one of `output`, `score` or `fails` must be set".to_string()),
    };
    Ok(example)
}

/// Parse every `*.toml` manifest in `dir`, in file name order.
///
/// Fails on the first unreadable or invalid file, naming its path.
pub fn discover_manifests(dir: &Path) -> Result<Vec<PluginDescriptor>, SilkError> {
    let manifest_error = |path: &Path, message: String| SilkError::Manifest {
        path: path.display().to_string(),
        message,
    };

    let entries = std::fs::read_dir(dir).map_err(|e| manifest_error(dir, e.to_string()))?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| manifest_error(dir, e.to_string()))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut descriptors = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path).map_err(|e| manifest_error(&path, e.to_string()))?;
        let descriptor = parse_plugin_manifest(&content).map_err(|e| match e {
            SilkError::Manifest { message, .. } => manifest_error(&path, message),
            other => manifest_error(&path, other.to_string()),
        })?;
        debug!(path = %path.display(), plugin = descriptor.id(), "parsed plugin manifest");
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[plugin]
id = "sparqlEndpoint"
label = "SPARQL endpoint"
type = "Dataset"
categories = ["RDF", "Remote"]
description = "Reads entities from a SPARQL endpoint."
documentation_file = "sparqlEndpoint.md"

[[parameters]]
name = "endpointURI"
description = "The URI of the endpoint."
type = "uri"
example = "http://dbpedia.org/sparql"

[[parameters]]
name = "strategy"
description = "How entities are retrieved."
enumeration = "EntityRetrieverStrategy"
default = "parallel"
advanced = true

[[parameters]]
name = "graph"
description = "Graph to read from."
default = ""

[parameters.auto_completion]
provider = "graphs"
depends_on = ["endpointURI"]
auto_complete_value_with_labels = true
"#;
        let d = parse_plugin_manifest(toml).unwrap();
        assert_eq!(d.id(), "sparqlEndpoint");
        assert_eq!(d.plugin_type(), PluginType::Dataset);
        assert_eq!(d.categories(), &["RDF".to_string(), "Remote".to_string()]);
        assert_eq!(d.documentation_file(), Some("sparqlEndpoint.md"));

        let endpoint = d.parameter("endpointURI").unwrap();
        assert_eq!(endpoint.parameter_type, ParameterType::Uri);
        assert!(endpoint.is_required());
        assert_eq!(endpoint.label(), "Endpoint URI");

        let strategy = d.parameter("strategy").unwrap();
        assert!(strategy.advanced);
        assert!(strategy.validate_value("subQuery").is_ok());

        let graph = d.parameter("graph").unwrap();
        let binding = graph.auto_completion.as_ref().unwrap();
        assert_eq!(binding.depends_on, vec!["endpointURI"]);
        assert!(binding.auto_complete_value_with_labels);
        assert!(!binding.allow_only_auto_completed_values);
    }

    #[test]
    fn parse_minimal_manifest() {
        let toml = r#"
[plugin]
id = "noop"
label = "No-op"
"#;
        let d = parse_plugin_manifest(toml).unwrap();
        assert_eq!(d.plugin_type(), PluginType::Other);
        assert_eq!(d.categories(), &["Uncategorized".to_string()]);
        assert!(d.parameters().is_empty());
        assert_eq!(d.description(), "");
    }

    #[test]
    fn inline_options() {
        let toml = r#"
[plugin]
id = "csvFile"
label = "CSV file"
type = "Dataset"

[[parameters]]
name = "separator"
description = "Column separator."
default = ","
options = [{ id = ",", label = "Comma" }, { id = ";" }]
"#;
        let d = parse_plugin_manifest(toml).unwrap();
        let ParameterType::Enumeration(schema) = &d.parameter("separator").unwrap().parameter_type else {
            panic!("expected enumeration");
        };
        assert_eq!(schema.type_name(), "separator");
        assert_eq!(schema.values()[0].display_name, "Comma");
        assert_eq!(schema.values()[1].display_name, ";");
    }

    #[test]
    fn parse_examples() {
        let toml = r#"
[plugin]
id = "lowerCase"
label = "Lower case"
type = "TransformOperator"

[[examples]]
inputs = [["Hello", "World"]]
output = ["hello", "world"]

[[examples]]
description = "Empty input"
inputs = [[]]
fails = true
failure_message = "no values"
"#;
        let d = parse_plugin_manifest(toml).unwrap();
        assert_eq!(d.examples().len(), 2);
        assert_eq!(d.examples()[0].kind, ExampleKind::Transform);
        assert_eq!(d.examples()[1].description.as_deref(), Some("Empty input"));
    }

    #[test]
    fn example_with_two_outcomes_fails() {
        let toml = r#"
[plugin]
id = "avg"
label = "Average"
type = "AggregationOperator"

[[examples]]
inputs = [["0.5"]]
score = 0.5
fails = true
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("example 1: exactly one of"));
    }

    #[test]
    fn parse_invalid_type() {
        let toml = r#"
[plugin]
id = "bad"
label = "Bad"
type = "Transformer"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("invalid type 'Transformer'"));
    }

    #[test]
    fn unknown_enumeration_fails() {
        let toml = r#"
[plugin]
id = "bad"
label = "Bad"

[[parameters]]
name = "unit"
description = "Unit."
enumeration = "TimeUnit"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("unknown enumeration 'TimeUnit'"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
[plugin]
id = "bad"
label = "Bad"
colour = "red"
"#;
        match parse_plugin_manifest(toml) {
            Err(SilkError::Manifest { path, message }) => {
                assert_eq!(path, INLINE_MANIFEST_PATH);
                assert!(message.starts_with("invalid plugin manifest: "));
                assert!(message.contains("colour"));
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_manifest_error() {
        assert!(matches!(
            parse_plugin_manifest("[plugin\nid = \"x\""),
            Err(SilkError::Manifest { .. })
        ));
    }

    #[test]
    fn discovered_files_report_their_own_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.toml"), "[plugin]\nid = \"bad\"\nlabel = \"Bad\"\ncolour = 1\n").unwrap();
        match discover_manifests(dir.path()) {
            Err(SilkError::Manifest { path, message }) => {
                assert!(path.ends_with("bad.toml"));
                assert!(message.starts_with("invalid plugin manifest: "));
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_description_fails() {
        let toml = r#"
[plugin]
id = "bad"
label = "Bad"

[[parameters]]
name = "file"
description = ""
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("parameter `file` has no description"));
    }
}
