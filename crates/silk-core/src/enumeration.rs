// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed enumerations used as plugin parameter values.
//!
//! An enumeration is an ordered set of `(id, display_name)` options. The id is
//! the only form that is stored or compared; the display name is for
//! presentation. Rust enums opt in through [`EnumerationParameter`], which
//! derives everything from strum's `EnumIter`, `EnumMessage` and
//! `IntoStaticStr` derives. Enumerations that only exist at runtime (e.g.
//! declared inline in a plugin manifest) are represented by
//! [`EnumerationSchema`].

use std::collections::HashSet;

use serde::Serialize;
use strum::{EnumMessage, IntoEnumIterator};

use crate::error::SilkError;

/// A single option of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationOption {
    /// Stable identifier, used for storage and comparison.
    pub id: String,
    /// Human-readable name shown in user interfaces.
    pub display_name: String,
}

impl EnumerationOption {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Capability shared by all enumerated parameter types.
///
/// Implementors declare each variant with
/// `#[strum(serialize = "<id>", message = "<display name>")]`. A variant
/// without a message falls back to its id as display name.
pub trait EnumerationParameter:
    Copy + IntoEnumIterator + EnumMessage + Into<&'static str> + 'static
{
    /// Name of the enumeration type, as referenced from manifests and error messages.
    const TYPE_NAME: &'static str;

    /// The stable id of this option.
    fn id(&self) -> &'static str {
        (*self).into()
    }

    /// The presentation name of this option.
    fn display_name(&self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.id())
    }

    /// All options in declaration order.
    fn values() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Exact, case-sensitive lookup by id.
    fn from_id(id: &str) -> Result<Self, SilkError> {
        Self::iter().find(|v| v.id() == id).ok_or_else(|| {
            SilkError::InvalidValue {
                type_name: Self::TYPE_NAME.to_string(),
                value: id.to_string(),
                valid: Self::iter().map(|v| v.id().to_string()).collect(),
            }
        })
    }

    /// Runtime schema of this enumeration.
    fn schema() -> EnumerationSchema {
        EnumerationSchema {
            type_name: Self::TYPE_NAME.to_string(),
            options: Self::iter()
                .map(|v| EnumerationOption::new(v.id(), v.display_name()))
                .collect(),
        }
    }
}

/// Runtime description of an enumeration: a type name plus ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationSchema {
    type_name: String,
    options: Vec<EnumerationOption>,
}

impl EnumerationSchema {
    /// Create a schema, rejecting empty option lists and duplicate or blank ids.
    pub fn new(
        type_name: impl Into<String>,
        options: Vec<EnumerationOption>,
    ) -> Result<Self, SilkError> {
        let type_name = type_name.into();
        if options.is_empty() {
            return Err(SilkError::definition(
                &type_name,
                "enumeration must declare at least one option",
            ));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if option.id.trim().is_empty() {
                return Err(SilkError::definition(
                    &type_name,
                    "enumeration option ids must not be empty",
                ));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(SilkError::definition(
                    &type_name,
                    format!("duplicate enumeration id `{}`", option.id),
                ));
            }
        }

        Ok(Self { type_name, options })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// All options in declaration order.
    pub fn values(&self) -> &[EnumerationOption] {
        &self.options
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.id.as_str())
    }

    /// Exact, case-sensitive lookup by id.
    pub fn from_id(&self, id: &str) -> Result<&EnumerationOption, SilkError> {
        self.options
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| SilkError::InvalidValue {
                type_name: self.type_name.clone(),
                value: id.to_string(),
                valid: self.ids().map(str::to_string).collect(),
            })
    }
}
