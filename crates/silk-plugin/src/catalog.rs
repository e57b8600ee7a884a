// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Descriptors for the operators and datasets that ship with Silk. Between
//! them they use every built-in enumeration and every example kind.

use silk_core::{
    CompareOperator, DateUnit, EntityRetrieverStrategy, OverwriteStrategy, SilkError,
    VocabularyCategory,
};

use crate::descriptor::{PluginDescriptor, PluginType};
use crate::example::ExampleCase;
use crate::parameter::{AutoCompletionBinding, ParameterDescriptor, ParameterType};

/// Provider id for project resource names.
pub const PROJECT_RESOURCES_PROVIDER: &str = "projectResources";
/// Provider id for the named graphs of a SPARQL endpoint.
pub const SPARQL_GRAPHS_PROVIDER: &str = "sparqlGraphs";

/// Returns descriptors for all built-in plugins.
///
/// The catalog contains 9 plugins:
/// - lowerCase, compareNumbers, numberToDuration, removeBlanks (transform operators)
/// - levenshteinDistance (distance measure)
/// - average (aggregation operator)
/// - file, sparqlEndpoint (datasets)
/// - transform (task)
pub fn builtin_catalog() -> Result<Vec<PluginDescriptor>, SilkError> {
    Ok(vec![
        PluginDescriptor::builder("lowerCase", "Lower case")
            .plugin_type(PluginType::TransformOperator)
            .category("Normalize")
            .description("Converts a string to lower case.")
            .example(
                ExampleCase::transform()
                    .with_input(["Hello", "World"])
                    .expecting(["hello", "world"]),
            )
            .build()?,
        PluginDescriptor::builder("compareNumbers", "Compare numbers")
            .plugin_type(PluginType::TransformOperator)
            .categories(["Numeric", "Comparison"])
            .description("Compares the numbers of two inputs. Returns 1 if the comparison holds and 0 otherwise.")
            .parameter(
                ParameterDescriptor::new("comparator", "The comparison operator.")
                    .with_type(ParameterType::enumeration::<CompareOperator>())
                    .with_default("<"),
            )
            .example(
                ExampleCase::transform()
                    .with_parameter("comparator", "<")
                    .with_input(["1"])
                    .with_input(["2"])
                    .expecting(["1"]),
            )
            .example(
                ExampleCase::transform()
                    .with_description("Values that are not numbers fail")
                    .with_input(["one"])
                    .with_input(["2"])
                    .expecting_failure(Some("not a number")),
            )
            .build()?,
        PluginDescriptor::builder("numberToDuration", "Number to duration")
            .plugin_type(PluginType::TransformOperator)
            .category("Date")
            .description("Converts a number to an xsd:duration in the given unit.")
            .parameter(
                ParameterDescriptor::new("unit", "The time unit of the input number.")
                    .with_type(ParameterType::enumeration::<DateUnit>())
                    .with_default("days"),
            )
            .example(
                ExampleCase::transform()
                    .with_parameter("unit", "days")
                    .with_input(["7"])
                    .expecting(["P7D"]),
            )
            .build()?,
        PluginDescriptor::builder("removeBlanks", "Remove blanks")
            .plugin_type(PluginType::TransformOperator)
            .category("Normalize")
            .description("Removes whitespace from a string.")
            .deprecated("Use `normalizeWhitespace` instead.")
            .build()?,
        PluginDescriptor::builder("levenshteinDistance", "Levenshtein distance")
            .plugin_type(PluginType::DistanceMeasure)
            .category("Characterbased")
            .description("Levenshtein distance. Returns the number of edits needed to turn one string into the other.")
            .parameter(
                ParameterDescriptor::new("ignoreCase", "Compare the strings ignoring case.")
                    .with_type(ParameterType::Boolean)
                    .with_default("false"),
            )
            .example(
                ExampleCase::distance_measure()
                    .with_input(["kitten"])
                    .with_input(["sitting"])
                    .expecting_score(3.0),
            )
            .build()?,
        PluginDescriptor::builder("average", "Average")
            .plugin_type(PluginType::AggregationOperator)
            .description("Computes the weighted average of the input scores.")
            .example(
                ExampleCase::aggregator()
                    .with_input(["0.4"])
                    .with_input(["0.6"])
                    .expecting_score(0.5),
            )
            .build()?,
        PluginDescriptor::builder("file", "File")
            .plugin_type(PluginType::Dataset)
            .category("File")
            .description("Reads and writes entities from and to a file in the project resources.")
            .icon("file.svg")
            .parameter(
                ParameterDescriptor::new("file", "The file name within the project resources.")
                    .with_type(ParameterType::Resource)
                    .with_auto_completion(
                        AutoCompletionBinding::new(PROJECT_RESOURCES_PROVIDER).only_auto_completed_values(),
                    ),
            )
            .parameter(
                ParameterDescriptor::new("overwriteStrategy", "What to do if the output file already exists.")
                    .with_type(ParameterType::enumeration::<OverwriteStrategy>())
                    .with_default("overwrite")
                    .advanced(),
            )
            .build()?,
        PluginDescriptor::builder("sparqlEndpoint", "SPARQL endpoint")
            .plugin_type(PluginType::Dataset)
            .categories(["RDF", "Remote"])
            .description("Reads entities from a remote SPARQL endpoint.")
            .documentation_file("sparqlEndpoint.md")
            .parameter(
                ParameterDescriptor::new("endpointURI", "The URI of the SPARQL endpoint.")
                    .with_type(ParameterType::Uri)
                    .with_example("http://dbpedia.org/sparql"),
            )
            .parameter(
                ParameterDescriptor::new("graph", "Only retrieve entities from this graph.")
                    .with_default("")
                    .with_auto_completion(
                        AutoCompletionBinding::new(SPARQL_GRAPHS_PROVIDER)
                            .depends_on(["endpointURI"])
                            .with_labels(),
                    ),
            )
            .parameter(
                ParameterDescriptor::new("strategy", "The strategy used to retrieve entities.")
                    .with_type(ParameterType::enumeration::<EntityRetrieverStrategy>())
                    .with_default("parallel")
                    .advanced(),
            )
            .parameter(
                ParameterDescriptor::new("pageSize", "Number of results requested per query.")
                    .with_type(ParameterType::Int)
                    .with_default("1000")
                    .advanced(),
            )
            .build()?,
        PluginDescriptor::builder("transform", "Transform")
            .plugin_type(PluginType::Task)
            .description("Transforms entities of an input dataset and writes them to an output dataset.")
            .parameter(
                ParameterDescriptor::new("output", "Dataset the transformed entities are written to.")
                    .with_default("")
                    .hidden_in_dialog(),
            )
            .parameter(
                ParameterDescriptor::new("vocabularies", "Vocabularies offered as mapping targets.")
                    .with_label("Target vocabularies")
                    .with_type(ParameterType::enumeration::<VocabularyCategory>())
                    .with_default("allInstalled"),
            )
            .build()?,
    ])
}

/// Search the built-in catalog by id, label, description or category (case-insensitive).
///
/// An empty query returns every plugin.
pub fn search_catalog(query: &str) -> Result<Vec<PluginDescriptor>, SilkError> {
    let query = query.to_lowercase();
    Ok(builtin_catalog()?
        .into_iter()
        .filter(|d| {
            d.id().to_lowercase().contains(&query)
                || d.label().to_lowercase().contains(&query)
                || d.description().to_lowercase().contains(&query)
                || d.categories().iter().any(|c| c.to_lowercase().contains(&query))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNCATEGORIZED;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 9);
        let ids: HashSet<&str> = catalog.iter().map(|d| d.id()).collect();
        assert_eq!(ids.len(), catalog.len(), "ids must be unique");
    }

    #[test]
    fn builtin_catalog_uses_every_enumeration() {
        let catalog = builtin_catalog().unwrap();
        let used: HashSet<String> = catalog
            .iter()
            .flat_map(|d| d.parameters())
            .filter_map(|p| match &p.parameter_type {
                ParameterType::Enumeration(schema) => Some(schema.type_name().to_string()),
                _ => None,
            })
            .collect();
        for schema in silk_core::builtin_enumerations() {
            assert!(used.contains(schema.type_name()), "{} unused", schema.type_name());
        }
    }

    #[test]
    fn plugins_without_category_are_uncategorized() {
        let catalog = builtin_catalog().unwrap();
        let average = catalog.iter().find(|d| d.id() == "average").unwrap();
        assert_eq!(average.categories(), &[UNCATEGORIZED.to_string()]);
    }

    #[test]
    fn search_catalog_by_id() {
        let results = search_catalog("levenshtein").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "levenshteinDistance");
    }

    #[test]
    fn search_catalog_case_insensitive() {
        let results = search_catalog("SPARQL").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "sparqlEndpoint");
    }

    #[test]
    fn search_catalog_by_category() {
        let ids: Vec<String> = search_catalog("normalize")
            .unwrap()
            .into_iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(ids, vec!["lowerCase", "removeBlanks"]);
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        assert_eq!(search_catalog("").unwrap().len(), 9);
    }

    #[test]
    fn search_catalog_no_match() {
        assert!(search_catalog("xyz_nonexistent").unwrap().is_empty());
    }
}
