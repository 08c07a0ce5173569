use crate::data::Dataset;
use crate::error::SelectionError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// The award tiers offered by the award checklist, in display order.
pub const KNOWN_AWARDS: [&str; 4] = [
    "1 MICHELIN Star",
    "2 MICHELIN Stars",
    "3 MICHELIN Stars",
    "Bib Gourmand",
];

/// The filter constraints currently chosen by a user.
///
/// A `Selection` is a value: UI events produce a new one through
/// [`Selection::apply`], and the filter engine only ever reads it.
///
/// * `awards` - rows must carry one of these awards. An empty set matches nothing.
/// * `currencies` - rows must use one of these currencies. An empty set means no constraint.
/// * `cuisine` - rows' raw cuisine text must contain this token. `None` means no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    awards: AHashSet<String>,
    currencies: AHashSet<String>,
    cuisine: Option<String>,
}

/// A single user interaction with one of the selection controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    SetAwards(Vec<String>),
    ToggleAward(String),
    SetCurrencies(Vec<String>),
    ClearCurrencies,
    SetCuisine(Option<String>),
}

impl Default for Selection {
    /// Every known award checked, no currency or cuisine constraint.
    fn default() -> Self {
        Self::with_awards(KNOWN_AWARDS)
    }
}

impl Selection {
    /// A selection with nothing checked. Matches no rows.
    pub fn empty() -> Self {
        Self {
            awards: AHashSet::new(),
            currencies: AHashSet::new(),
            cuisine: None,
        }
    }

    pub fn with_awards<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            awards: labels.into_iter().map(Into::into).collect(),
            ..Self::empty()
        }
    }

    pub fn award(mut self, label: impl Into<String>) -> Self {
        self.awards.insert(label.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currencies.insert(code.into());
        self
    }

    /// Sets the cuisine token. An empty token clears the constraint.
    pub fn cuisine(mut self, token: impl Into<String>) -> Self {
        self.cuisine = normalize_cuisine(Some(token.into()));
        self
    }

    pub fn awards(&self) -> &AHashSet<String> {
        &self.awards
    }

    pub fn currencies(&self) -> &AHashSet<String> {
        &self.currencies
    }

    pub fn cuisine_token(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    /// Returns the selection that results from applying `change` to this one.
    pub fn apply(&self, change: SelectionChange) -> Self {
        let mut next = self.clone();
        match change {
            SelectionChange::SetAwards(labels) => {
                next.awards = labels.into_iter().collect();
            }
            SelectionChange::ToggleAward(label) => {
                if !next.awards.remove(&label) {
                    next.awards.insert(label);
                }
            }
            SelectionChange::SetCurrencies(codes) => {
                next.currencies = codes.into_iter().collect();
            }
            SelectionChange::ClearCurrencies => next.currencies.clear(),
            SelectionChange::SetCuisine(token) => next.cuisine = normalize_cuisine(token),
        }
        next
    }

    /// Checks that every selected value occurs somewhere in `dataset`.
    ///
    /// Filtering does not require this; it is for hosts that want to reject
    /// hand-written selections early.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), SelectionError> {
        let mut awards: Vec<_> = self.awards.iter().collect();
        awards.sort();
        for award in awards {
            if !dataset.rows().iter().any(|r| r.award() == award) {
                return Err(SelectionError::UnknownAward(award.clone()));
            }
        }

        let mut currencies: Vec<_> = self.currencies.iter().collect();
        currencies.sort();
        for currency in currencies {
            if !dataset.rows().iter().any(|r| r.currency() == currency) {
                return Err(SelectionError::UnknownCurrency(currency.clone()));
            }
        }

        if let Some(token) = &self.cuisine {
            if !dataset.has_cuisine_substring(token) {
                return Err(SelectionError::UnknownCuisine(token.clone()));
            }
        }
        Ok(())
    }
}

fn normalize_cuisine(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}
