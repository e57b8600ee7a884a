// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `silk enums` and `silk check-enum`.

use silk_core::{builtin_enumeration, builtin_enumerations, SilkError};

/// List every built-in enumeration with its options.
pub fn render_enumerations(json: bool) -> Result<String, SilkError> {
    let schemas = builtin_enumerations();
    if json {
        return serde_json::to_string_pretty(&schemas)
            .map(|s| s + "\n")
            .map_err(|e| SilkError::Internal(format!("failed to serialize output: {e}")));
    }

    let mut out = String::new();
    for schema in &schemas {
        out.push_str(&format!("{}\n", schema.type_name()));
        for option in schema.values() {
            out.push_str(&format!("  {:<16} {}\n", option.id, option.display_name));
        }
    }
    Ok(out)
}

/// Check `id` against the enumeration named `type_name`.
pub fn check_enumeration(type_name: &str, id: &str) -> Result<String, SilkError> {
    let schema = builtin_enumeration(type_name).ok_or_else(|| SilkError::InvalidValue {
        type_name: "enumeration type".to_string(),
        value: type_name.to_string(),
        valid: builtin_enumerations()
            .iter()
            .map(|s| s.type_name().to_string())
            .collect(),
    })?;
    let option = schema.from_id(id)?;
    Ok(format!("{}: {}", option.id, option.display_name))
}
