// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Silk plugin layer.
//!
//! Every error here describes a misconfigured plugin definition or an invalid
//! supplied value. None of them are transient, so callers should surface them
//! to whoever registered the plugin instead of retrying.

use thiserror::Error;

/// The primary error type used across descriptor, registry and resolver operations.
#[derive(Debug, Error)]
pub enum SilkError {
    /// A supplied value is not valid for its declared type.
    ///
    /// For enumerations `valid` holds the declared ids in order; for scalar
    /// types it holds a short description of what was expected.
    #[error("invalid value `{value}` for {type_name}; expected one of: {}", valid.join(", "))]
    InvalidValue {
        type_name: String,
        value: String,
        valid: Vec<String>,
    },

    /// A plugin id was registered a second time with a different descriptor.
    #[error("plugin `{id}` is already registered with a different descriptor")]
    ConflictingRegistration { id: String },

    /// No plugin with the given id is registered.
    #[error("plugin not found: {0}")]
    PluginNotFound(String),

    /// The plugin exists but does not declare the parameter.
    #[error("parameter `{parameter}` is not declared by plugin `{plugin}`")]
    ParameterNotFound { plugin: String, parameter: String },

    /// A plugin definition is malformed (missing description, duplicate ids, ...).
    #[error("invalid definition of plugin `{plugin}`: {message}")]
    Definition { plugin: String, message: String },

    /// A required parameter has neither a supplied value nor a default.
    #[error("missing value for required parameter `{parameter}` of plugin `{plugin}`")]
    MissingParameter { plugin: String, parameter: String },

    /// A value was supplied for a parameter the plugin does not declare.
    #[error("plugin `{plugin}` has no parameter `{parameter}`")]
    UnknownParameter { plugin: String, parameter: String },

    /// Auto-completion could not be performed (e.g. unknown provider).
    #[error("auto-completion failed for `{parameter}`: {message}")]
    AutoCompletion { parameter: String, message: String },

    /// A plugin manifest file could not be read or parsed.
    #[error("plugin manifest {path}: {message}")]
    Manifest { path: String, message: String },

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SilkError {
    /// Shorthand for a [`SilkError::Definition`] error.
    pub fn definition(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        SilkError::Definition {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}
