use super::Dataset;
use crate::error::DataLoadError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

const SNAPSHOT_VERSION: u32 = 2;

/// Length and modification time of the CSV a snapshot was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SourceStamp {
    len: u64,
    /// `(seconds, nanoseconds)` since the Unix epoch, when the platform reports it.
    modified: Option<(u64, u32)>,
}

impl SourceStamp {
    fn of(source: &Path) -> Result<Self, DataLoadError> {
        let metadata = fs::metadata(source).map_err(|e| DataLoadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| (d.as_secs(), d.subsec_nanos()));
        Ok(Self {
            len: metadata.len(),
            modified,
        })
    }
}

/// On-disk form of a parsed dataset. Indices are not stored; they are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct DatasetSnapshot {
    version: u32,
    source: Option<SourceStamp>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Saves the parsed table to a file using the bincode format.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), DataLoadError> {
        self.write_snapshot(path.as_ref(), None)
    }

    /// Saves the parsed table together with the current length and modification
    /// time of `source`, so [`Dataset::from_fresh_snapshot`] can detect a changed CSV.
    pub fn save_snapshot_for_source(
        &self,
        path: impl AsRef<Path>,
        source: impl AsRef<Path>,
    ) -> Result<(), DataLoadError> {
        let stamp = SourceStamp::of(source.as_ref())?;
        self.write_snapshot(path.as_ref(), Some(stamp))
    }

    fn write_snapshot(
        &self,
        path: &Path,
        source: Option<SourceStamp>,
    ) -> Result<(), DataLoadError> {
        let snapshot = DatasetSnapshot {
            version: SNAPSHOT_VERSION,
            source,
            headers: self.headers().to_vec(),
            rows: self.raw_rows(),
        };
        let bytes = encode_to_vec(&snapshot, standard())
            .map_err(|e| DataLoadError::Snapshot(format!("Serialization failed: {}", e)))?;
        fs::write(path, bytes).map_err(|e| {
            DataLoadError::Snapshot(format!(
                "Could not write to file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Loads a dataset previously written by [`Dataset::save_snapshot`].
    pub fn from_snapshot(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let snapshot = read_snapshot(path)?;
        let dataset = Self::from_rows(snapshot.headers, snapshot.rows)?;
        log::info!(
            "Loaded {} restaurants from snapshot '{}'",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads a snapshot only if it was built from `source` as it exists now.
    ///
    /// Fails with [`DataLoadError::StaleSnapshot`] when the snapshot carries no source
    /// stamp, or when the CSV's length or modification time no longer matches it.
    pub fn from_fresh_snapshot(
        path: impl AsRef<Path>,
        source: impl AsRef<Path>,
    ) -> Result<Self, DataLoadError> {
        let (path, source) = (path.as_ref(), source.as_ref());
        let snapshot = read_snapshot(path)?;
        let current = SourceStamp::of(source)?;
        if snapshot.source != Some(current) {
            return Err(DataLoadError::StaleSnapshot {
                snapshot: path.to_path_buf(),
                csv: source.to_path_buf(),
            });
        }
        let dataset = Self::from_rows(snapshot.headers, snapshot.rows)?;
        log::info!(
            "Loaded {} restaurants from snapshot '{}' (source '{}' unchanged)",
            dataset.len(),
            path.display(),
            source.display()
        );
        Ok(dataset)
    }

    /// Deserializes a dataset snapshot from a byte slice.
    pub fn from_snapshot_bytes(bytes: &[u8]) -> Result<Self, DataLoadError> {
        let snapshot = decode_snapshot(bytes)?;
        Self::from_rows(snapshot.headers, snapshot.rows)
    }
}

fn read_snapshot(path: &Path) -> Result<DatasetSnapshot, DataLoadError> {
    let bytes = fs::read(path).map_err(|e| {
        DataLoadError::Snapshot(format!("Could not open file '{}': {}", path.display(), e))
    })?;
    decode_snapshot(&bytes)
}

fn decode_snapshot(bytes: &[u8]) -> Result<DatasetSnapshot, DataLoadError> {
    let (snapshot, _): (DatasetSnapshot, usize) = decode_from_slice(bytes, standard())
        .map_err(|e| DataLoadError::Snapshot(format!("Deserialization failed: {}", e)))?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(DataLoadError::Snapshot(format!(
            "Unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }
    Ok(snapshot)
}
