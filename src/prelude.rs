//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use michelin_explorer::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dataset = Dataset::load("data/michelin_my_maps.csv")?;
//! let selection = Selection::default().currency("EUR").cuisine("Sea");
//!
//! let outcome = FilterEngine::default().apply(&dataset, &selection);
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

// Dataset store
pub use crate::data::{Dataset, Restaurant};

// Selection and filtering
pub use crate::filter::{AwardDistribution, ChartSlice, FilterEngine, FilterOutcome};
pub use crate::selection::{KNOWN_AWARDS, Selection, SelectionChange};

// Sessions and configuration
pub use crate::config::ExplorerConfig;
pub use crate::session::{PendingRecompute, Session, Snapshot};

// Error types
pub use crate::error::{ConfigError, DataLoadError, SelectionError};

pub use std::sync::Arc;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
