use serde::{Deserialize, Serialize};

/// Column headers the dataset must carry for filtering to work.
pub const AWARD_COLUMN: &str = "Award";
pub const CURRENCY_COLUMN: &str = "Currency";
pub const CUISINE_COLUMN: &str = "Cuisine";

const NAME_COLUMN: &str = "Name";
const LONGITUDE_COLUMN: &str = "Longitude";
const LATITUDE_COLUMN: &str = "Latitude";

/// Positions of the columns the engine cares about, resolved once from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnLayout {
    pub award: usize,
    pub currency: usize,
    pub cuisine: usize,
    pub name: Option<usize>,
    pub longitude: Option<usize>,
    pub latitude: Option<usize>,
}

impl ColumnLayout {
    /// Resolves column positions, returning the name of the first missing required column.
    pub(crate) fn resolve(headers: &[String]) -> Result<Self, &'static str> {
        let find = |column: &str| headers.iter().position(|h| h == column);
        let required = |column: &'static str| find(column).ok_or(column);

        Ok(Self {
            award: required(AWARD_COLUMN)?,
            currency: required(CURRENCY_COLUMN)?,
            cuisine: required(CUISINE_COLUMN)?,
            name: find(NAME_COLUMN),
            longitude: find(LONGITUDE_COLUMN),
            latitude: find(LATITUDE_COLUMN),
        })
    }
}

/// One restaurant row of the dataset.
///
/// The three filterable fields are pulled out at load time. Every source cell is
/// kept as well, in column order, so display columns pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    award: String,
    currency: String,
    cuisine: String,
    name: String,
    coordinates: Option<(f64, f64)>,
    cells: Vec<String>,
}

impl Restaurant {
    pub(crate) fn from_cells(layout: &ColumnLayout, cells: Vec<String>) -> Self {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        let parse = |idx: Option<usize>| {
            idx.and_then(|i| cells.get(i))
                .and_then(|v| v.trim().parse::<f64>().ok())
        };

        let coordinates = match (parse(layout.longitude), parse(layout.latitude)) {
            (Some(lon), Some(lat)) => Some((lon, lat)),
            _ => None,
        };

        Self {
            award: cell(layout.award),
            currency: cell(layout.currency),
            cuisine: cell(layout.cuisine),
            name: layout.name.map(cell).unwrap_or_default(),
            coordinates,
            cells,
        }
    }

    /// The award tier label, e.g. `"Bib Gourmand"`. Empty when the restaurant has none.
    pub fn award(&self) -> &str {
        &self.award
    }

    /// The price currency code. May be empty.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The raw, comma separated cuisine field exactly as it appears in the source.
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Cuisine tags: the raw field split on commas, trimmed, with empty tags dropped.
    pub fn cuisine_tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.cuisine)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(longitude, latitude)` when both columns exist and parse as numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }

    /// All source cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

pub(crate) fn split_tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_reports_first_missing_column() {
        let err = ColumnLayout::resolve(&headers(&["Name", "Award", "Cuisine"])).unwrap_err();
        assert_eq!(err, CURRENCY_COLUMN);
    }

    #[test]
    fn from_cells_extracts_typed_fields() {
        let layout = ColumnLayout::resolve(&headers(&[
            "Name",
            "Currency",
            "Cuisine",
            "Longitude",
            "Latitude",
            "Award",
        ]))
        .unwrap();
        let row = Restaurant::from_cells(
            &layout,
            headers(&[
                "Le Bernardin",
                "USD",
                "French, Seafood",
                "-73.98",
                "40.76",
                "3 MICHELIN Stars",
            ]),
        );

        assert_eq!(row.name(), "Le Bernardin");
        assert_eq!(row.award(), "3 MICHELIN Stars");
        assert_eq!(row.coordinates(), Some((-73.98, 40.76)));
        assert_eq!(row.cuisine_tags().collect::<Vec<_>>(), vec!["French", "Seafood"]);
    }

    #[test]
    fn split_tags_drops_blank_entries() {
        assert_eq!(
            split_tags(" Asian ,, Fusion,").collect::<Vec<_>>(),
            vec!["Asian", "Fusion"]
        );
    }
}
