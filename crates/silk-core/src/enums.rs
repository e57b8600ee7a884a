// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in enumerated parameter types.

use strum::{Display, EnumIter, EnumMessage, IntoStaticStr};

use crate::enumeration::{EnumerationParameter, EnumerationSchema};

/// What to do when an output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum OverwriteStrategy {
    #[strum(serialize = "overwrite", message = "Overwrite existing files")]
    Overwrite,
    #[strum(serialize = "fail", message = "Fail if a file already exists with the same name.")]
    Fail,
}

impl EnumerationParameter for OverwriteStrategy {
    const TYPE_NAME: &'static str = "OverwriteStrategy";
}

/// How entities are retrieved from a SPARQL endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum EntityRetrieverStrategy {
    #[strum(serialize = "simple", message = "Simple")]
    Simple,
    #[strum(serialize = "subQuery", message = "Sub query")]
    SubQuery,
    #[strum(serialize = "parallel", message = "Parallel")]
    Parallel,
}

impl EnumerationParameter for EntityRetrieverStrategy {
    const TYPE_NAME: &'static str = "EntityRetrieverStrategy";
}

/// Comparison operators for numeric and date comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum CompareOperator {
    #[strum(serialize = "<", message = "Less than")]
    Less,
    #[strum(serialize = "<=", message = "Less than or equal")]
    LessOrEqual,
    #[strum(serialize = "=", message = "Equal")]
    Equal,
    #[strum(serialize = ">=", message = "Greater than or equal")]
    GreaterOrEqual,
    #[strum(serialize = ">", message = "Greater than")]
    Greater,
    #[strum(serialize = "!=", message = "Not equal")]
    NotEqual,
}

impl EnumerationParameter for CompareOperator {
    const TYPE_NAME: &'static str = "CompareOperator";
}

/// Units for date and duration arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum DateUnit {
    #[strum(serialize = "milliseconds", message = "Milliseconds")]
    Milliseconds,
    #[strum(serialize = "seconds", message = "Seconds")]
    Seconds,
    #[strum(serialize = "minutes", message = "Minutes")]
    Minutes,
    #[strum(serialize = "hours", message = "Hours")]
    Hours,
    #[strum(serialize = "days", message = "Days")]
    Days,
    #[strum(serialize = "months", message = "Months")]
    Months,
    #[strum(serialize = "years", message = "Years")]
    Years,
}

impl EnumerationParameter for DateUnit {
    const TYPE_NAME: &'static str = "DateUnit";
}

/// Which vocabularies a transformation offers as mapping targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum VocabularyCategory {
    #[strum(serialize = "allInstalled", message = "All installed vocabularies")]
    AllInstalled,
    #[strum(serialize = "noVocabularies", message = "No vocabularies")]
    NoVocabularies,
}

impl EnumerationParameter for VocabularyCategory {
    const TYPE_NAME: &'static str = "VocabularyCategory";
}

/// Schemas of all built-in enumerations.
pub fn builtin_enumerations() -> Vec<EnumerationSchema> {
    vec![
        OverwriteStrategy::schema(),
        EntityRetrieverStrategy::schema(),
        CompareOperator::schema(),
        DateUnit::schema(),
        VocabularyCategory::schema(),
    ]
}

/// Look up a built-in enumeration by its type name.
pub fn builtin_enumeration(type_name: &str) -> Option<EnumerationSchema> {
    builtin_enumerations()
        .into_iter()
        .find(|schema| schema.type_name() == type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SilkError;
    use proptest::prelude::*;

    fn assert_round_trip<E: EnumerationParameter + std::fmt::Debug + PartialEq>() {
        for value in E::values() {
            let parsed = E::from_id(value.id()).expect("declared id should parse");
            assert_eq!(parsed, value);
            assert_eq!(parsed.id(), value.id());
        }
    }

    #[test]
    fn every_declared_id_round_trips() {
        assert_round_trip::<OverwriteStrategy>();
        assert_round_trip::<EntityRetrieverStrategy>();
        assert_round_trip::<CompareOperator>();
        assert_round_trip::<DateUnit>();
        assert_round_trip::<VocabularyCategory>();
    }

    #[test]
    fn overwrite_strategy_display_names() {
        let overwrite = OverwriteStrategy::from_id("overwrite").unwrap();
        assert_eq!(overwrite.display_name(), "Overwrite existing files");
        assert_eq!(
            OverwriteStrategy::Fail.display_name(),
            "Fail if a file already exists with the same name."
        );
    }

    #[test]
    fn unknown_id_carries_value_and_valid_set() {
        let err = OverwriteStrategy::from_id("skip").unwrap_err();
        match err {
            SilkError::InvalidValue {
                type_name,
                value,
                valid,
            } => {
                assert_eq!(type_name, "OverwriteStrategy");
                assert_eq!(value, "skip");
                assert_eq!(valid, vec!["overwrite", "fail"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_prints_the_id() {
        assert_eq!(CompareOperator::LessOrEqual.to_string(), "<=");
        assert_eq!(EntityRetrieverStrategy::SubQuery.to_string(), "subQuery");
    }

    #[test]
    fn values_are_ordered_and_restartable() {
        let first: Vec<_> = DateUnit::values().iter().map(|u| u.id()).collect();
        let second: Vec<_> = DateUnit::values().iter().map(|u| u.id()).collect();
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&"milliseconds"));
        assert_eq!(first.last(), Some(&"years"));
    }

    #[test]
    fn builtin_schemas_match_trait_values() {
        let schema = builtin_enumeration("CompareOperator").unwrap();
        let ids: Vec<&str> = schema.ids().collect();
        assert_eq!(ids, vec!["<", "<=", "=", ">=", ">", "!="]);
        assert!(builtin_enumeration("NoSuchEnum").is_none());
    }

    #[test]
    fn builtin_type_names_are_unique() {
        let names: std::collections::HashSet<String> = builtin_enumerations()
            .iter()
            .map(|s| s.type_name().to_string())
            .collect();
        assert_eq!(names.len(), builtin_enumerations().len());
    }

    proptest! {
        #[test]
        fn undeclared_ids_are_rejected(id in "\\PC{0,12}") {
            let declared = DateUnit::values().iter().any(|u| u.id() == id);
            prop_assume!(!declared);
            let rejected = matches!(DateUnit::from_id(&id), Err(SilkError::InvalidValue { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn schema_lookup_agrees_with_trait(index in 0usize..6) {
            let op = CompareOperator::values()[index];
            let schema = CompareOperator::schema();
            let option = schema.from_id(op.id()).unwrap();
            prop_assert_eq!(option.display_name.as_str(), op.display_name());
        }
    }
}
