//! # MICHELIN Explorer - Reactive Filtering and Aggregation Engine
//!
//! **michelin-explorer** is the engine behind a restaurant exploration dashboard. It loads
//! a static table of MICHELIN Guide restaurants once, then answers every change of the
//! user's award, currency and cuisine selection with the matching rows and a fresh
//! award distribution for the chart.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Dataset**: `Dataset::load` reads the CSV once and builds the option
//!     lists (distinct currencies, distinct cuisine tags) for the selection controls.
//! 2.  **Describe the Selection**: A `Selection` holds the checked awards, the chosen
//!     currencies and an optional cuisine token.
//! 3.  **Filter**: `FilterEngine::apply` returns a `FilterOutcome` with the matching rows
//!     in source order, per-award counts and a summary line.
//! 4.  **React**: A `Session` keeps one user's selection, recomputes on every
//!     `SelectionChange` and pushes `Snapshot`s to subscribers.
//!
//! ## Matching Rules
//!
//! * A row's award must be checked. With nothing checked, nothing matches.
//! * With currencies chosen, a row's currency must be one of them.
//! * With a cuisine token set, the row's raw `Cuisine` text must contain it as a
//!   substring, so `"Sea"` matches `"French, Seafood"`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use michelin_explorer::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = Arc::new(Dataset::load("data/michelin_my_maps.csv")?);
//!     println!("Currencies: {:?}", dataset.distinct_currencies());
//!
//!     let mut session = Session::new(Arc::clone(&dataset), FilterEngine::default());
//!     session.subscribe(|snapshot| {
//!         println!("{}", snapshot.summary);
//!         for slice in snapshot.distribution.slices() {
//!             println!("  {}: {}", slice.label, slice.count);
//!         }
//!     });
//!
//!     session.update(SelectionChange::SetCurrencies(vec!["EUR".to_string()]));
//!     session.update(SelectionChange::SetCuisine(Some("Seafood".to_string())));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod prelude;
pub mod selection;
pub mod session;
