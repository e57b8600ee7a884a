// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auto-completion providers for plugin parameters.
//!
//! A parameter references a provider by id through its
//! [`AutoCompletionBinding`](crate::AutoCompletionBinding). Providers live in an
//! [`AutoCompletionProviders`] map that the host fills at startup.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use silk_core::{EnumerationSchema, SilkError};

/// Default number of suggestions returned per request.
pub const DEFAULT_AUTO_COMPLETION_LIMIT: usize = 100;

/// A suggested parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCompletion {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AutoCompletion {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The text to show for this suggestion.
    ///
    /// The label is only shown if it differs from the value ignoring case.
    pub fn display_label(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() && label.to_lowercase() != self.value.to_lowercase() => {
                label
            }
            _ => &self.value,
        }
    }
}

/// A request passed to an [`AutoCompletionProvider`].
#[derive(Debug, Clone, Copy)]
pub struct AutoCompletionRequest<'a> {
    /// Name of the parameter being completed.
    pub parameter: &'a str,
    /// Text typed so far.
    pub query: &'a str,
    pub limit: usize,
    /// Current values of the parameters listed in the binding's `depends_on`, in the same order.
    pub depends_on: &'a [String],
}

/// Suggests values for a parameter.
pub trait AutoCompletionProvider: Send + Sync {
    /// Return at most `request.limit` suggestions matching `request.query`.
    fn complete(&self, request: &AutoCompletionRequest<'_>) -> Result<Vec<AutoCompletion>, SilkError>;

    /// Look up a stored value exactly.
    ///
    /// The default searches with the value as query and no limit, so a value
    /// is found even when many other suggestions contain it. Providers that
    /// can answer directly should override this.
    fn find_value(
        &self,
        parameter: &str,
        value: &str,
        depends_on: &[String],
    ) -> Result<Option<AutoCompletion>, SilkError> {
        let request = AutoCompletionRequest {
            parameter,
            query: value,
            limit: usize::MAX,
            depends_on,
        };
        Ok(self.complete(&request)?.into_iter().find(|c| c.value == value))
    }

    /// Return the label of a stored value, if the provider knows one.
    fn value_to_label(
        &self,
        parameter: &str,
        value: &str,
        depends_on: &[String],
    ) -> Result<Option<String>, SilkError> {
        Ok(self
            .find_value(parameter, value, depends_on)?
            .and_then(|c| c.label))
    }
}

/// Provider ids mapped to providers.
#[derive(Default, Clone)]
pub struct AutoCompletionProviders {
    providers: HashMap<String, Arc<dyn AutoCompletionProvider>>,
}

impl AutoCompletionProviders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, provider: Arc<dyn AutoCompletionProvider>) {
        self.providers.insert(id.into(), provider);
    }

    pub fn with(mut self, id: impl Into<String>, provider: Arc<dyn AutoCompletionProvider>) -> Self {
        self.register(id, provider);
        self
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn AutoCompletionProvider>> {
        self.providers.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for AutoCompletionProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.providers.keys().collect();
        ids.sort();
        f.debug_struct("AutoCompletionProviders")
            .field("providers", &ids)
            .finish()
    }
}

/// Provider over a fixed list of suggestions.
///
/// Matches the query case-insensitively against value and label. Dependency
/// values are ignored.
#[derive(Debug, Clone)]
pub struct StaticCompletions {
    items: Vec<AutoCompletion>,
}

impl StaticCompletions {
    pub fn new(items: Vec<AutoCompletion>) -> Self {
        Self { items }
    }

    /// Suggest the options of an enumeration, labelled with their display names.
    pub fn from_schema(schema: &EnumerationSchema) -> Self {
        Self::new(
            schema
                .values()
                .iter()
                .map(|o| AutoCompletion::new(&o.id).with_label(&o.display_name))
                .collect(),
        )
    }
}

impl AutoCompletionProvider for StaticCompletions {
    fn complete(&self, request: &AutoCompletionRequest<'_>) -> Result<Vec<AutoCompletion>, SilkError> {
        let query = request.query.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| {
                query.is_empty()
                    || item.value.to_lowercase().contains(&query)
                    || item
                        .label
                        .as_ref()
                        .is_some_and(|l| l.to_lowercase().contains(&query))
            })
            .take(request.limit)
            .cloned()
            .collect())
    }

    fn find_value(
        &self,
        _parameter: &str,
        value: &str,
        _depends_on: &[String],
    ) -> Result<Option<AutoCompletion>, SilkError> {
        Ok(self.items.iter().find(|item| item.value == value).cloned())
    }
}

/// Whether a dependency value counts as set.
///
/// A missing value is never set. An empty value only counts as set when the
/// dependency parameter declares a default.
pub fn dependent_value_is_set(value: Option<&str>, has_default: bool) -> bool {
    match value {
        None => false,
        Some("") => has_default,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silk_core::{EnumerationParameter, OverwriteStrategy};

    fn request<'a>(query: &'a str, limit: usize) -> AutoCompletionRequest<'a> {
        AutoCompletionRequest {
            parameter: "p",
            query,
            limit,
            depends_on: &[],
        }
    }

    #[test]
    fn display_label_hides_case_insensitive_duplicates() {
        let same = AutoCompletion::new("Berlin").with_label("berlin");
        assert_eq!(same.display_label(), "Berlin");

        let labelled = AutoCompletion::new("urn:city:1").with_label("Berlin");
        assert_eq!(labelled.display_label(), "Berlin");

        let bare = AutoCompletion::new("urn:city:2");
        assert_eq!(bare.display_label(), "urn:city:2");
    }

    #[test]
    fn dependent_values() {
        assert!(!dependent_value_is_set(None, true));
        assert!(!dependent_value_is_set(Some(""), false));
        assert!(dependent_value_is_set(Some(""), true));
        assert!(dependent_value_is_set(Some("x"), false));
    }

    #[test]
    fn static_completions_filter_and_limit() {
        let provider = StaticCompletions::new(vec![
            AutoCompletion::new("alpha"),
            AutoCompletion::new("beta").with_label("Second letter"),
            AutoCompletion::new("alphabet"),
        ]);
        let all = provider.complete(&request("", 10)).unwrap();
        assert_eq!(all.len(), 3);

        let alphas = provider.complete(&request("ALP", 10)).unwrap();
        assert_eq!(alphas.len(), 2);

        let by_label = provider.complete(&request("letter", 10)).unwrap();
        assert_eq!(by_label[0].value, "beta");

        let limited = provider.complete(&request("", 1)).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn value_to_label_from_enumeration() {
        let provider = StaticCompletions::from_schema(&OverwriteStrategy::schema());
        let label = provider.value_to_label("p", "fail", &[]).unwrap();
        assert_eq!(label.as_deref(), Some("Fail if a file already exists with the same name."));
        assert_eq!(provider.value_to_label("p", "skip", &[]).unwrap(), None);
    }

    #[test]
    fn find_value_ignores_the_limit() {
        let mut items: Vec<AutoCompletion> =
            (0..150).map(|i| AutoCompletion::new(format!("ab{i}"))).collect();
        items.push(AutoCompletion::new("ab").with_label("The AB"));
        let provider = StaticCompletions::new(items);

        assert_eq!(provider.complete(&request("ab", 100)).unwrap().len(), 100);
        let found = provider.find_value("p", "ab", &[]).unwrap().unwrap();
        assert_eq!(found.label.as_deref(), Some("The AB"));
        assert_eq!(provider.value_to_label("p", "ab", &[]).unwrap().as_deref(), Some("The AB"));
        assert!(provider.find_value("p", "a", &[]).unwrap().is_none());
    }

    /// Only implements `complete`, honouring the limit.
    struct Numbered;

    impl AutoCompletionProvider for Numbered {
        fn complete(&self, request: &AutoCompletionRequest<'_>) -> Result<Vec<AutoCompletion>, SilkError> {
            Ok((0..500)
                .rev()
                .map(|i| AutoCompletion::new(format!("n{i}")).with_label(format!("Number {i}")))
                .filter(|c| c.value.contains(request.query))
                .take(request.limit)
                .collect())
        }
    }

    #[test]
    fn default_find_value_searches_past_the_limit() {
        // "n1" is the last of many values containing "n1".
        let label = Numbered.value_to_label("p", "n1", &[]).unwrap();
        assert_eq!(label.as_deref(), Some("Number 1"));
        assert!(Numbered.find_value("p", "n500", &[]).unwrap().is_none());
    }

    #[test]
    fn provider_map_lookup() {
        let providers = AutoCompletionProviders::new()
            .with("letters", Arc::new(StaticCompletions::new(vec![AutoCompletion::new("a")])));
        assert!(providers.get("letters").is_some());
        assert!(providers.get("digits").is_none());
        assert_eq!(providers.len(), 1);
    }
}
