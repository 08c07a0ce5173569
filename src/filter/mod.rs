use crate::data::{Dataset, Restaurant};
use crate::selection::Selection;
use serde_json::{Map, Value as JsonValue, json};

mod aggregate;
mod predicate;

pub use aggregate::{AwardDistribution, ChartSlice};
use predicate::{compile_predicates, matches_all};

/// Placeholder replaced with the match count in summary templates.
pub const COUNT_PLACEHOLDER: &str = "{count}";

const DEFAULT_SUMMARY_TEMPLATE: &str =
    "There are {count} Michelin Restaurants that match your search.";

/// The rows and aggregates derived from one (dataset, selection) pair.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    dataset: &'a Dataset,
    matches: Vec<usize>,
    distribution: AwardDistribution,
    summary: String,
}

impl<'a> FilterOutcome<'a> {
    /// Matching rows, in dataset order.
    pub fn rows(&self) -> impl Iterator<Item = &'a Restaurant> + '_ {
        let dataset = self.dataset;
        self.matches.iter().map(move |&idx| &dataset.rows()[idx])
    }

    /// Dataset positions of the matching rows, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.matches
    }

    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn distribution(&self) -> &AwardDistribution {
        &self.distribution
    }

    /// Human readable line such as "There are 2 Michelin Restaurants that match your search."
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Matching rows as `header -> value` objects, ready for a table widget.
    pub fn records(&self) -> Vec<Map<String, JsonValue>> {
        self.rows().map(|row| self.dataset.record(row)).collect()
    }

    /// The whole outcome as one JSON document.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "total": self.total(),
            "summary": self.summary,
            "distribution": self.distribution.slices(),
            "records": self.records(),
        })
    }

    /// Drops the dataset borrow, keeping the row positions and aggregates.
    pub fn into_parts(self) -> (Vec<usize>, AwardDistribution, String) {
        (self.matches, self.distribution, self.summary)
    }
}

/// Applies a [`Selection`] to a [`Dataset`].
///
/// The engine is stateless apart from its formatting options: the same
/// dataset and selection always produce the same outcome.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    summary_template: String,
}

pub struct FilterEngineBuilder {
    summary_template: String,
}

impl FilterEngineBuilder {
    pub fn new() -> Self {
        Self {
            summary_template: DEFAULT_SUMMARY_TEMPLATE.to_string(),
        }
    }

    /// Template for the summary line. `{count}` is replaced with the number of matches.
    pub fn with_summary_template(mut self, template: impl Into<String>) -> Self {
        self.summary_template = template.into();
        self
    }

    pub fn build(self) -> FilterEngine {
        FilterEngine {
            summary_template: self.summary_template,
        }
    }
}

impl Default for FilterEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        FilterEngineBuilder::new().build()
    }
}

impl FilterEngine {
    pub fn builder() -> FilterEngineBuilder {
        FilterEngineBuilder::new()
    }

    /// Filters `dataset` by `selection` and aggregates the result.
    ///
    /// A row is kept when its award is selected, its currency is selected (or no
    /// currency is), and its raw cuisine text contains the cuisine token (or none
    /// is set). Row order is preserved. Never fails: values that occur nowhere in
    /// the data just produce an empty outcome.
    pub fn apply<'a>(&self, dataset: &'a Dataset, selection: &Selection) -> FilterOutcome<'a> {
        let matches = self.matching_indices(dataset, selection);
        let distribution =
            AwardDistribution::from_rows(matches.iter().map(|&i| &dataset.rows()[i]));
        let summary = self.summarize(matches.len());

        log::debug!(
            "Selection matched {} of {} restaurants across {} awards",
            matches.len(),
            dataset.len(),
            distribution.counts().len()
        );

        FilterOutcome {
            dataset,
            matches,
            distribution,
            summary,
        }
    }

    /// Positions of the rows that satisfy `selection`, ascending.
    pub fn matching_indices(&self, dataset: &Dataset, selection: &Selection) -> Vec<usize> {
        if selection.awards().is_empty() {
            return Vec::new();
        }
        let predicates = compile_predicates(selection);
        dataset
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| matches_all(&predicates, row))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn summarize(&self, count: usize) -> String {
        self.summary_template.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}
