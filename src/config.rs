use crate::data::Dataset;
use crate::error::ConfigError;
use crate::filter::FilterEngine;
use crate::selection::{KNOWN_AWARDS, Selection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Startup configuration for an explorer process, read from a JSON file.
///
/// ```json
/// {
///   "source": "data/michelin_my_maps.csv",
///   "snapshot": "tmp/michelin.bin",
///   "award_labels": ["1 MICHELIN Star", "Bib Gourmand"],
///   "summary_template": "{count} restaurants match your search."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// CSV file holding the restaurant table.
    pub source: PathBuf,
    /// Optional bincode cache of the parsed table.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Award labels checked when a session starts.
    #[serde(default = "default_award_labels")]
    pub award_labels: Vec<String>,
    #[serde(default)]
    pub summary_template: Option<String>,
}

fn default_award_labels() -> Vec<String> {
    KNOWN_AWARDS.iter().map(|s| s.to_string()).collect()
}

impl ExplorerConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            snapshot: None,
            award_labels: default_award_labels(),
            summary_template: None,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the dataset, preferring the snapshot when one is configured and was
    /// built from the CSV as it exists now.
    ///
    /// When the snapshot is missing, unreadable, or older than the CSV, the CSV is
    /// parsed and a fresh snapshot is written for the next start.
    pub fn open_dataset(&self) -> Result<Dataset, ConfigError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(Dataset::load(&self.source)?);
        };

        if snapshot.exists() {
            match Dataset::from_fresh_snapshot(snapshot, &self.source) {
                Ok(dataset) => return Ok(dataset),
                Err(e) => log::warn!("Ignoring snapshot '{}': {}", snapshot.display(), e),
            }
        }

        let dataset = Dataset::load(&self.source)?;
        if let Err(e) = dataset.save_snapshot_for_source(snapshot, &self.source) {
            log::warn!("Could not refresh snapshot '{}': {}", snapshot.display(), e);
        }
        Ok(dataset)
    }

    pub fn default_selection(&self) -> Selection {
        Selection::with_awards(self.award_labels.iter().cloned())
    }

    pub fn engine(&self) -> FilterEngine {
        match &self.summary_template {
            Some(template) => FilterEngine::builder()
                .with_summary_template(template.clone())
                .build(),
            None => FilterEngine::default(),
        }
    }
}
