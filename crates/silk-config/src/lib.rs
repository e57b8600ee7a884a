// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Silk tooling.
//!
//! TOML configuration with strict key checking, XDG file hierarchy lookup,
//! `SILK_*` environment overrides and miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use silk_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("log level: {}", config.logging.level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::SilkConfig;

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<SilkConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &collect_toml_sources())),
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<SilkConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources: Vec<(String, String)> = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<SilkConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Contents of the config files that exist, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut paths = vec![std::path::PathBuf::from(loader::SYSTEM_CONFIG_PATH)];
    paths.extend(loader::user_config_path());
    if let Ok(dir) = std::env::current_dir() {
        paths.push(dir.join(loader::LOCAL_CONFIG_PATH));
    }

    paths
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            tracing::debug!(path = %path.display(), "read config source");
            Some((path.display().to_string(), content))
        })
        .collect()
}
