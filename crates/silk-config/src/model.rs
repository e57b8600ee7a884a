// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Silk tooling.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so that misspelled keys are
//! reported instead of silently ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level Silk configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SilkConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where plugin descriptors are loaded from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub autocompletion: AutoCompletionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Register the built-in plugins.
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Directories scanned for `*.toml` plugin manifests, in order.
    #[serde(default)]
    pub manifest_dirs: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            manifest_dirs: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AutoCompletionConfig {
    /// Maximum number of suggestions per request.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Named graphs offered for each SPARQL endpoint URI.
    #[serde(default)]
    pub sparql_graphs: BTreeMap<String, Vec<String>>,
}

impl Default for AutoCompletionConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            sparql_graphs: BTreeMap::new(),
        }
    }
}

fn default_limit() -> usize {
    100
}
