use super::record::{ColumnLayout, Restaurant};
use crate::error::DataLoadError;
use crate::filter::AwardDistribution;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lookup indices derived from the dataset once, at load time.
///
/// Both sets are ordered so option lists come out the same way on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CatalogIndex {
    currencies: BTreeSet<String>,
    cuisines: BTreeSet<String>,
}

impl CatalogIndex {
    fn build(rows: &[Restaurant]) -> Self {
        let currencies = rows
            .iter()
            .map(Restaurant::currency)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        let cuisines = rows
            .iter()
            .flat_map(|r| r.cuisine_tags())
            .map(str::to_string)
            .collect();

        Self {
            currencies,
            cuisines,
        }
    }
}

/// The immutable restaurant table plus its derived indices.
///
/// Built once at startup and shared read-only (typically behind an `Arc`) by
/// every session that filters it.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Restaurant>,
    catalog: CatalogIndex,
}

impl Dataset {
    /// Loads a dataset from a CSV file with a header row.
    ///
    /// Fails if the file cannot be opened, a record is malformed, or one of the
    /// `Award`, `Currency` or `Cuisine` columns is missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        log::info!(
            "Loaded {} restaurants ({} currencies, {} cuisines) from '{}'",
            dataset.len(),
            dataset.catalog.currencies.len(),
            dataset.catalog.cuisines.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parses CSV text from any reader. The first record is taken as the header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DataLoadError::Csv {
                record: 0,
                message: e.to_string(),
            })?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(DataLoadError::MissingHeader);
        }

        let rows = reader
            .records()
            .enumerate()
            .map(|(idx, record)| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| DataLoadError::Csv {
                        record: idx as u64 + 1,
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        Self::from_rows(headers, rows)
    }

    /// Builds a dataset from already split rows. Every row must have one cell per header.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DataLoadError> {
        let layout = ColumnLayout::resolve(&headers)
            .map_err(|column| DataLoadError::MissingColumn(column.to_string()))?;

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| {
                if cells.len() != headers.len() {
                    return Err(DataLoadError::Csv {
                        record: idx as u64 + 1,
                        message: format!(
                            "expected {} fields, found {}",
                            headers.len(),
                            cells.len()
                        ),
                    });
                }
                Ok(Restaurant::from_cells(&layout, cells))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = CatalogIndex::build(&rows);
        Ok(Self {
            headers,
            rows,
            catalog,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Restaurant] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Restaurant> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct non-empty currency codes present in the data.
    pub fn distinct_currencies(&self) -> &BTreeSet<String> {
        &self.catalog.currencies
    }

    /// Every value of the `Currency` column, the empty code included when some
    /// rows have no currency.
    ///
    /// Selecting all of these matches the same rows as selecting no currency at all,
    /// which selecting all of [`Dataset::distinct_currencies`] does not when blanks exist.
    pub fn present_currencies(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .map(|r| r.currency().to_string())
            .collect()
    }

    /// Distinct cuisine tags, obtained by splitting every `Cuisine` cell on commas.
    pub fn distinct_cuisines(&self) -> &BTreeSet<String> {
        &self.catalog.cuisines
    }

    /// Award counts over the whole, unfiltered table.
    pub fn award_distribution(&self) -> AwardDistribution {
        AwardDistribution::from_rows(&self.rows)
    }

    /// Looks up a cell of `row` by column header.
    pub fn field<'a>(&self, row: &'a Restaurant, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| row.cells().get(idx))
            .map(String::as_str)
    }

    /// One row as a `header -> value` JSON object.
    pub fn record(&self, row: &Restaurant) -> Map<String, JsonValue> {
        self.headers
            .iter()
            .zip(row.cells())
            .map(|(h, v)| (h.clone(), JsonValue::String(v.clone())))
            .collect()
    }

    /// Every row as a JSON object, in source order.
    pub fn records(&self) -> Vec<Map<String, JsonValue>> {
        self.rows.iter().map(|row| self.record(row)).collect()
    }

    pub(crate) fn raw_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells().to_vec()).collect()
    }

    pub(crate) fn has_cuisine_substring(&self, token: &str) -> bool {
        self.rows.iter().any(|r| r.cuisine().contains(token))
    }
}
