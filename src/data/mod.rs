//! Launch record dataset
//!
//! Loads the launch CSV into an immutable in-memory table at startup.
//! The table is never mutated after load; every chart view is derived
//! fresh from it.
//!
//! - [`LaunchRecord`]: one row of the source CSV
//! - [`LaunchTable`]: the loaded table with derived accessors
//! - [`load_csv`] / [`load_csv_str`]: CSV loading (fatal on malformed input)

pub mod error;
pub mod loader;
pub mod record;
pub mod table;

pub use error::{DataError, DataResult};
pub use loader::{load_csv, load_csv_str};
pub use record::{
    LaunchRecord, ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
pub use table::LaunchTable;
