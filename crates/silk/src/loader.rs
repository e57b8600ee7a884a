// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Populates the plugin registry from the configured sources.

use std::path::Path;

use silk_config::SilkConfig;
use silk_core::SilkError;
use silk_plugin::{builtin_catalog, discover_manifests, PluginRegistry};
use tracing::info;

/// Build a registry from the built-in catalog (if enabled) and every manifest directory.
pub fn load_registry(config: &SilkConfig) -> Result<PluginRegistry, SilkError> {
    let registry = PluginRegistry::new();

    if config.catalog.builtin {
        let count = registry.register_all(builtin_catalog()?)?;
        info!(count, "registered built-in plugins");
    }

    for dir in &config.catalog.manifest_dirs {
        let count = registry.register_all(discover_manifests(Path::new(dir))?)?;
        info!(dir = %dir, count, "registered manifest plugins");
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn builtin_catalog_by_default() {
        let registry = load_registry(&SilkConfig::default()).unwrap();
        assert_eq!(registry.len(), 9);
        assert!(logs_contain("registered built-in plugins"));
    }

    #[test]
    fn manifest_dirs_extend_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("noop.toml"),
            "[plugin]\nid = \"noop\"\nlabel = \"No-op\"\n",
        )
        .unwrap();

        let mut config = SilkConfig::default();
        config.catalog.builtin = false;
        config.catalog.manifest_dirs = vec![dir.path().display().to_string()];

        let registry = load_registry(&config).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("noop").is_ok());
    }

    #[test]
    fn conflicting_manifest_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("lower.toml"),
            "[plugin]\nid = \"lowerCase\"\nlabel = \"Something else\"\n",
        )
        .unwrap();

        let mut config = SilkConfig::default();
        config.catalog.manifest_dirs = vec![dir.path().display().to_string()];

        assert!(matches!(
            load_registry(&config),
            Err(SilkError::ConflictingRegistration { .. })
        ));
    }
}
