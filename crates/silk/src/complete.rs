// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `silk complete` and `silk validate`: parameter values checked against the
//! auto-completion providers of the command line tool.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use silk_config::model::AutoCompletionConfig;
use silk_core::SilkError;
use silk_plugin::catalog::{PROJECT_RESOURCES_PROVIDER, SPARQL_GRAPHS_PROVIDER};
use silk_plugin::{
    AutoCompletion, AutoCompletionProvider, AutoCompletionProviders, AutoCompletionRequest,
    ParameterResolver, ParameterValues, PluginRegistry,
};

/// Suggests the names of the files in a resource directory.
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    root: PathBuf,
}

impl ResourceDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AutoCompletionProvider for ResourceDirectory {
    fn complete(&self, request: &AutoCompletionRequest<'_>) -> Result<Vec<AutoCompletion>, SilkError> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| SilkError::AutoCompletion {
            parameter: request.parameter.to_string(),
            message: format!("cannot list {}: {e}", self.root.display()),
        })?;

        let query = request.query.to_lowercase();
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.to_lowercase().contains(&query))
            .collect();
        names.sort();
        names.truncate(request.limit);
        Ok(names.into_iter().map(AutoCompletion::new).collect())
    }
}

/// Suggests the named graphs configured for the endpoint in `depends_on[0]`.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredGraphs {
    graphs: BTreeMap<String, Vec<String>>,
}

impl ConfiguredGraphs {
    pub fn new(graphs: BTreeMap<String, Vec<String>>) -> Self {
        Self { graphs }
    }
}

impl AutoCompletionProvider for ConfiguredGraphs {
    fn complete(&self, request: &AutoCompletionRequest<'_>) -> Result<Vec<AutoCompletion>, SilkError> {
        let Some(endpoint) = request.depends_on.first() else {
            return Err(SilkError::AutoCompletion {
                parameter: request.parameter.to_string(),
                message: "no endpoint URI given".to_string(),
            });
        };
        let query = request.query.to_lowercase();
        Ok(self
            .graphs
            .get(endpoint)
            .into_iter()
            .flatten()
            .map(|graph| match graph_label(graph) {
                Some(label) => AutoCompletion::new(graph).with_label(label),
                None => AutoCompletion::new(graph),
            })
            .filter(|c| {
                c.value.to_lowercase().contains(&query)
                    || c.label.as_ref().is_some_and(|l| l.to_lowercase().contains(&query))
            })
            .take(request.limit)
            .collect())
    }
}

/// Last path segment or fragment of a graph URI.
fn graph_label(uri: &str) -> Option<&str> {
    uri.trim_end_matches(['/', '#'])
        .rsplit(['/', '#'])
        .next()
        .filter(|segment| !segment.is_empty() && !segment.ends_with(':'))
}

/// Providers available to the command line tool.
pub fn cli_providers(resource_dir: PathBuf, config: &AutoCompletionConfig) -> AutoCompletionProviders {
    AutoCompletionProviders::new()
        .with(
            PROJECT_RESOURCES_PROVIDER,
            Arc::new(ResourceDirectory::new(resource_dir)),
        )
        .with(
            SPARQL_GRAPHS_PROVIDER,
            Arc::new(ConfiguredGraphs::new(config.sparql_graphs.clone())),
        )
}

/// Render suggestions one per line, with the label when it adds information.
pub fn render_completions(
    registry: &PluginRegistry,
    providers: &AutoCompletionProviders,
    limit: usize,
    plugin_id: &str,
    parameter: &str,
    current: &ParameterValues,
    query: &str,
) -> Result<String, SilkError> {
    let resolver = ParameterResolver::new(registry, providers).with_limit(limit);
    let suggestions = resolver.auto_complete(plugin_id, parameter, current, query)?;
    Ok(suggestions
        .iter()
        .map(|s| {
            let label = s.display_label();
            if label == s.value {
                format!("{}\n", s.value)
            } else {
                format!("{}\t{label}\n", s.value)
            }
        })
        .collect())
}

/// Resolve supplied values and render them, rejecting values that a provider
/// does not know for parameters that only allow auto-completed values.
pub fn render_validated(
    registry: &PluginRegistry,
    providers: &AutoCompletionProviders,
    limit: usize,
    plugin_id: &str,
    supplied: &ParameterValues,
) -> Result<String, SilkError> {
    let resolver = ParameterResolver::new(registry, providers).with_limit(limit);
    let resolved = resolver.resolve_parameters(plugin_id, supplied)?;
    Ok(crate::plugins::render_resolved(&resolved))
}
