// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Documented example cases for transformers, aggregators and distance measures.
//!
//! An example binds parameter values and labelled inputs to an expected
//! outcome. Examples are rendered into plugin documentation and can be checked
//! against an outcome computed elsewhere; nothing here executes a plugin.

use std::collections::BTreeMap;

use strum::{Display, EnumString};
use thiserror::Error;

/// Which kind of operator an example documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ExampleKind {
    Transform,
    Aggregator,
    DistanceMeasure,
}

/// One labelled input of an example.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleInput {
    pub label: String,
    pub values: Vec<String>,
}

/// What the example expects the operator to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedOutcome {
    /// Output values of a transformer.
    Values(Vec<String>),
    /// Score of an aggregator or distance of a distance measure.
    Score(f64),
    /// The operator is expected to fail. If a message is given, the actual
    /// failure message must contain it.
    Failure { message: Option<String> },
}

/// Outcome actually produced for an example, supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleOutput {
    Values(Vec<String>),
    Score(f64),
}

/// Difference between the expected and the actual outcome of an example.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct ExampleMismatch {
    pub expected: String,
    pub actual: String,
}

/// Tolerance when comparing scores.
pub const SCORE_TOLERANCE: f64 = 1e-6;

/// A documented example of an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleCase {
    pub kind: ExampleKind,
    pub description: Option<String>,
    pub parameters: BTreeMap<String, String>,
    pub inputs: Vec<ExampleInput>,
    pub expected: ExpectedOutcome,
}

impl ExampleCase {
    pub fn new(kind: ExampleKind) -> Self {
        Self {
            kind,
            description: None,
            parameters: BTreeMap::new(),
            inputs: Vec::new(),
            expected: ExpectedOutcome::Values(Vec::new()),
        }
    }

    pub fn transform() -> Self {
        Self::new(ExampleKind::Transform)
    }

    pub fn aggregator() -> Self {
        Self::new(ExampleKind::Aggregator)
    }

    pub fn distance_measure() -> Self {
        Self::new(ExampleKind::DistanceMeasure)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Append an input labelled `input1`, `input2`, ... by position.
    pub fn with_input<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = format!("input{}", self.inputs.len() + 1);
        self.with_labeled_input(label, values)
    }

    pub fn with_labeled_input<I, S>(mut self, label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.push(ExampleInput {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn expecting<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = ExpectedOutcome::Values(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn expecting_score(mut self, score: f64) -> Self {
        self.expected = ExpectedOutcome::Score(score);
        self
    }

    pub fn expecting_failure(mut self, message: Option<&str>) -> Self {
        self.expected = ExpectedOutcome::Failure {
            message: message.map(str::to_string),
        };
        self
    }

    /// Compare an actual outcome (`Err` holding a failure message) with the expectation.
    pub fn check(&self, actual: &Result<ExampleOutput, String>) -> Result<(), ExampleMismatch> {
        let matches = match (&self.expected, actual) {
            (ExpectedOutcome::Values(expected), Ok(ExampleOutput::Values(values))) => expected == values,
            (ExpectedOutcome::Score(expected), Ok(ExampleOutput::Score(score))) => {
                (expected - score).abs() <= SCORE_TOLERANCE
            }
            (ExpectedOutcome::Failure { message }, Err(actual_message)) => message
                .as_deref()
                .is_none_or(|fragment| actual_message.contains(fragment)),
            _ => false,
        };

        if matches {
            Ok(())
        } else {
            Err(ExampleMismatch {
                expected: describe_expected(&self.expected),
                actual: describe_actual(actual),
            })
        }
    }
}

fn describe_expected(expected: &ExpectedOutcome) -> String {
    match expected {
        ExpectedOutcome::Values(values) => format!("values {values:?}"),
        ExpectedOutcome::Score(score) => format!("score {score}"),
        ExpectedOutcome::Failure { message: Some(m) } => format!("failure containing {m:?}"),
        ExpectedOutcome::Failure { message: None } => "a failure".to_string(),
    }
}

fn describe_actual(actual: &Result<ExampleOutput, String>) -> String {
    match actual {
        Ok(ExampleOutput::Values(values)) => format!("values {values:?}"),
        Ok(ExampleOutput::Score(score)) => format!("score {score}"),
        Err(message) => format!("failure {message:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn inputs_are_labelled_by_position() {
        let example = ExampleCase::transform()
            .with_input(["a"])
            .with_input(["b", "c"]);
        assert_eq!(example.inputs[0].label, "input1");
        assert_eq!(example.inputs[1].label, "input2");
        assert_eq!(example.inputs[1].values, vec!["b", "c"]);
    }

    #[test]
    fn check_values() {
        let example = ExampleCase::transform()
            .with_input(["Hello"])
            .expecting(["hello"]);
        assert!(example.check(&Ok(ExampleOutput::Values(vec!["hello".into()]))).is_ok());

        let mismatch = example
            .check(&Ok(ExampleOutput::Values(vec!["HELLO".into()])))
            .unwrap_err();
        assert_eq!(mismatch.to_string(), r#"expected values ["hello"], got values ["HELLO"]"#);
    }

    #[test]
    fn check_score_within_tolerance() {
        let example = ExampleCase::aggregator()
            .with_input(["0.4"])
            .with_input(["0.6"])
            .expecting_score(0.5);
        assert!(example.check(&Ok(ExampleOutput::Score(0.500_000_1))).is_ok());
        assert!(example.check(&Ok(ExampleOutput::Score(0.51))).is_err());
    }

    #[test]
    fn check_failure_fragment() {
        let example = ExampleCase::transform()
            .with_input(["abc"])
            .expecting_failure(Some("not a number"));
        assert!(example.check(&Err("value 'abc' is not a number".into())).is_ok());
        assert!(example.check(&Err("boom".into())).is_err());
        assert!(example.check(&Ok(ExampleOutput::Values(vec![]))).is_err());

        let any_failure = ExampleCase::transform().expecting_failure(None);
        assert!(any_failure.check(&Err("anything".into())).is_ok());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ExampleKind::DistanceMeasure.to_string(), "distanceMeasure");
        assert_eq!(ExampleKind::from_str("aggregator").unwrap(), ExampleKind::Aggregator);
        assert!(ExampleKind::from_str("Transform").is_err());
    }
}
