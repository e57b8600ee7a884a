// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy `./silk.toml` > `~/.config/silk/silk.toml` >
//! `/etc/silk/silk.toml` with environment variable overrides via the `SILK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SilkConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/silk/silk.toml";
/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "silk.toml";

/// Path of the user configuration file, if a config directory is known.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("silk/silk.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/silk/silk.toml`
/// 3. `~/.config/silk/silk.toml`
/// 4. `./silk.toml`
/// 5. `SILK_*` environment variables
pub fn load_config() -> Result<SilkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env vars).
pub fn load_config_from_str(toml_content: &str) -> Result<SilkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SilkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SilkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SilkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SilkConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `SILK_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `manifest_dirs` contain underscores.
fn env_provider() -> Env {
    Env::prefixed("SILK_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config key.
pub fn map_env_key(key: &str) -> String {
    ["logging", "catalog", "autocompletion"]
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{section}.{rest}"))
        })
        .unwrap_or_else(|| key.to_string())
}
