// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::SilkConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every error.
pub fn validate_config(config: &SilkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.autocompletion.limit == 0 {
        errors.push(ConfigError::Validation {
            message: "autocompletion.limit must be at least 1".to_string(),
        });
    }

    if config.catalog.manifest_dirs.iter().any(|d| d.trim().is_empty()) {
        errors.push(ConfigError::Validation {
            message: "catalog.manifest_dirs must not contain empty paths".to_string(),
        });
    }

    for (endpoint, graphs) in &config.autocompletion.sparql_graphs {
        if endpoint.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "autocompletion.sparql_graphs has an empty endpoint URI".to_string(),
            });
        }
        if graphs.iter().any(|g| g.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("autocompletion.sparql_graphs.\"{endpoint}\" contains an empty graph URI"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
