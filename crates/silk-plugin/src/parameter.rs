// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter descriptors: the per-parameter metadata a plugin declares.

use std::borrow::Cow;

use silk_core::{EnumerationParameter, EnumerationSchema, SilkError};

/// The value type of a plugin parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterType {
    String,
    MultilineString,
    Int,
    Double,
    Boolean,
    Password,
    /// Reference to a project resource (file name).
    Resource,
    Uri,
    /// One id out of a closed enumeration.
    Enumeration(EnumerationSchema),
}

impl ParameterType {
    /// Enumeration type backed by a built-in Rust enum.
    pub fn enumeration<E: EnumerationParameter>() -> Self {
        ParameterType::Enumeration(E::schema())
    }

    /// Wire name of the type, as used in manifests and plugin details.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::MultilineString => "multilineString",
            ParameterType::Int => "int",
            ParameterType::Double => "double",
            ParameterType::Boolean => "boolean",
            ParameterType::Password => "password",
            ParameterType::Resource => "resource",
            ParameterType::Uri => "uri",
            ParameterType::Enumeration(_) => "enumeration",
        }
    }

    /// Parse a scalar type name. Enumerations need a schema and are not covered.
    pub fn from_name(name: &str) -> Option<Self> {
        let t = match name {
            "string" => ParameterType::String,
            "multilineString" => ParameterType::MultilineString,
            "int" => ParameterType::Int,
            "double" => ParameterType::Double,
            "boolean" => ParameterType::Boolean,
            "password" => ParameterType::Password,
            "resource" => ParameterType::Resource,
            "uri" => ParameterType::Uri,
            _ => return None,
        };
        Some(t)
    }

    /// Check that `value` is a valid value of this type.
    pub fn validate(&self, value: &str) -> Result<(), SilkError> {
        let invalid = |expected: &str| SilkError::InvalidValue {
            type_name: self.name().to_string(),
            value: value.to_string(),
            valid: vec![expected.to_string()],
        };

        match self {
            ParameterType::String
            | ParameterType::MultilineString
            | ParameterType::Password
            | ParameterType::Resource => Ok(()),
            ParameterType::Int => value
                .trim()
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| invalid("an integer")),
            ParameterType::Double => match value.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(()),
                _ => Err(invalid("a finite number")),
            },
            ParameterType::Boolean => {
                if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
                    Ok(())
                } else {
                    Err(SilkError::InvalidValue {
                        type_name: "boolean".to_string(),
                        value: value.to_string(),
                        valid: vec!["true".to_string(), "false".to_string()],
                    })
                }
            }
            ParameterType::Uri => {
                if is_uri(value) {
                    Ok(())
                } else {
                    Err(invalid("an absolute URI"))
                }
            }
            ParameterType::Enumeration(schema) => schema.from_id(value).map(|_| ()),
        }
    }
}

/// `scheme:rest` with an RFC 3986 scheme and no whitespace.
fn is_uri(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
        && !value.chars().any(char::is_whitespace)
}

/// Binding of a parameter to an auto-completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCompletionBinding {
    /// Id of the provider in the [`crate::AutoCompletionProviders`] map.
    pub provider: String,
    /// Sibling parameters whose current values the provider needs.
    pub depends_on: Vec<String>,
    /// Only values suggested by the provider are accepted.
    pub allow_only_auto_completed_values: bool,
    /// Stored values have labels that should be shown instead of the raw value.
    pub auto_complete_value_with_labels: bool,
}

impl AutoCompletionBinding {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            depends_on: Vec::new(),
            allow_only_auto_completed_values: false,
            auto_complete_value_with_labels: false,
        }
    }

    pub fn depends_on<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn only_auto_completed_values(mut self) -> Self {
        self.allow_only_auto_completed_values = true;
        self
    }

    pub fn with_labels(mut self) -> Self {
        self.auto_complete_value_with_labels = true;
        self
    }
}

/// Metadata of a single plugin parameter.
///
/// A parameter without a default value is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Explicit label. Use [`ParameterDescriptor::label`] to get the effective one.
    pub label: Option<String>,
    pub description: String,
    pub example: Option<String>,
    pub parameter_type: ParameterType,
    pub default_value: Option<String>,
    /// Hidden unless the user asks for advanced options.
    pub advanced: bool,
    /// Editable in the configuration dialog.
    pub visible_in_dialog: bool,
    pub auto_completion: Option<AutoCompletionBinding>,
}

impl ParameterDescriptor {
    /// A required string parameter with default flags.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: description.into(),
            example: None,
            parameter_type: ParameterType::String,
            default_value: None,
            advanced: false,
            visible_in_dialog: true,
            auto_completion: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_type(mut self, parameter_type: ParameterType) -> Self {
        self.parameter_type = parameter_type;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn hidden_in_dialog(mut self) -> Self {
        self.visible_in_dialog = false;
        self
    }

    pub fn with_auto_completion(mut self, binding: AutoCompletionBinding) -> Self {
        self.auto_completion = Some(binding);
        self
    }

    /// The explicit label, or one generated from the parameter name.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.label {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(generate_label(&self.name)),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }

    /// Validate a supplied value against the declared type.
    pub fn validate_value(&self, value: &str) -> Result<(), SilkError> {
        self.parameter_type.validate(value)
    }
}

/// Generate a human-readable label from a parameter name.
///
/// Splits at camelCase humps and at `_`, `-` and whitespace. A run of capitals
/// is kept together as an acronym: `maxDistance` becomes `Max distance` and
/// `inputURI` becomes `Input URI`.
pub fn generate_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, word) in split_words(name).iter().enumerate() {
        if i > 0 {
            label.push(' ');
        }
        if is_acronym(word) {
            label.push_str(word);
        } else if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                label.extend(first.to_uppercase());
                label.push_str(&chars.as_str().to_lowercase());
            }
        } else {
            label.push_str(&word.to_lowercase());
        }
    }
    label
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(char::is_uppercase)
        && word.chars().all(|c| c.is_uppercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use silk_core::DateUnit;

    #[test]
    fn generated_labels() {
        assert_eq!(generate_label("maxDistance"), "Max distance");
        assert_eq!(generate_label("inputURI"), "Input URI");
        assert_eq!(generate_label("URIPrefix"), "URI prefix");
        assert_eq!(generate_label("max_distance"), "Max distance");
        assert_eq!(generate_label("file"), "File");
        assert_eq!(generate_label("pageSize"), "Page size");
        assert_eq!(generate_label(""), "");
    }

    #[test]
    fn advanced_parameter_without_label_gets_generated_label() {
        let param = ParameterDescriptor::new("overwriteStrategy", "What to do with existing files.")
            .advanced();
        assert!(param.advanced);
        assert!(param.visible_in_dialog);
        assert_eq!(param.label(), "Overwrite strategy");
    }

    #[test]
    fn explicit_label_wins() {
        let param = ParameterDescriptor::new("q", "The query.").with_label("SPARQL query");
        assert_eq!(param.label(), "SPARQL query");
    }

    #[test]
    fn required_iff_no_default() {
        let required = ParameterDescriptor::new("file", "Input file.");
        let optional = ParameterDescriptor::new("pageSize", "Page size.").with_default("1000");
        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn scalar_validation() {
        assert!(ParameterType::Int.validate(" 42 ").is_ok());
        assert!(ParameterType::Int.validate("4.2").is_err());
        assert!(ParameterType::Double.validate("4.2").is_ok());
        assert!(ParameterType::Double.validate("NaN").is_err());
        assert!(ParameterType::Boolean.validate("TRUE").is_ok());
        assert!(ParameterType::Boolean.validate("yes").is_err());
        assert!(ParameterType::Uri.validate("http://example.org/sparql").is_ok());
        assert!(ParameterType::Uri.validate("urn:isbn:123").is_ok());
        assert!(ParameterType::Uri.validate("not a uri").is_err());
        assert!(ParameterType::Uri.validate("1http://x").is_err());
        assert!(ParameterType::String.validate("").is_ok());
    }

    #[test]
    fn enumeration_validation_uses_ids() {
        let t = ParameterType::enumeration::<DateUnit>();
        assert!(t.validate("days").is_ok());
        assert!(t.validate("Days").is_err());
        assert_eq!(t.name(), "enumeration");
    }

    #[test]
    fn type_names_round_trip_for_scalars() {
        for name in ["string", "multilineString", "int", "double", "boolean", "password", "resource", "uri"] {
            let t = ParameterType::from_name(name).unwrap();
            assert_eq!(t.name(), name);
        }
        assert!(ParameterType::from_name("enumeration").is_none());
    }

    proptest! {
        #[test]
        fn every_integer_is_a_valid_int(n in any::<i64>()) {
            prop_assert!(ParameterType::Int.validate(&n.to_string()).is_ok());
        }

        #[test]
        fn generated_labels_start_uppercase(name in "[a-z][a-zA-Z0-9_]{0,20}") {
            let label = generate_label(&name);
            let first = label.chars().next().unwrap();
            prop_assert!(first.is_uppercase() || first.is_ascii_digit());
            prop_assert!(!label.contains('_'));
        }
    }
}
