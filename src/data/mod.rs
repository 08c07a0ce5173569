mod record;
mod snapshot;
mod store;

pub use record::{AWARD_COLUMN, CUISINE_COLUMN, CURRENCY_COLUMN, Restaurant};
pub use store::Dataset;
