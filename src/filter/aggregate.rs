use crate::data::Restaurant;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row counts per award label over a set of restaurants.
///
/// The per-label counts always add up to [`AwardDistribution::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardDistribution {
    counts: BTreeMap<String, usize>,
    total: usize,
}

/// One wedge of the award chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub count: usize,
    /// Fraction of the total, in `0.0..=1.0`.
    pub share: f64,
}

impl AwardDistribution {
    /// Counts `rows` by award.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Restaurant>) -> Self {
        let counts: BTreeMap<String, usize> = rows
            .into_iter()
            .map(Restaurant::award)
            .counts()
            .into_iter()
            .map(|(award, count)| (award.to_string(), count))
            .collect();
        let total = counts.values().sum();
        Self { counts, total }
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Count for one award label, zero if it does not occur.
    pub fn get(&self, award: &str) -> usize {
        self.counts.get(award).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn slices(&self) -> Vec<ChartSlice> {
        self.counts
            .iter()
            .map(|(label, &count)| ChartSlice {
                label: label.clone(),
                count,
                share: if self.total == 0 {
                    0.0
                } else {
                    count as f64 / self.total as f64
                },
            })
            .collect()
    }
}
