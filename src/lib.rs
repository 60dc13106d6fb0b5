//! Interactive exploration of US bikeshare trip data.
//!
//! ```text
//!  collector ──► loader ──► pager
//!                  │
//!                  └──────► reports (time, station, duration, user)
//! ```
//!
//! Each city's CSV is read into an Arrow-backed [`Dataset`], given derived
//! `month` / `day_of_week` columns and narrowed by the chosen filters.

pub mod collector;
pub mod config;
pub mod console;
pub mod dataset;
pub mod date_utils;
pub mod error;
pub mod filters;
pub mod lazy;
pub mod loader;
pub mod pager;
pub mod reports;
pub mod session;
pub mod stats;
pub mod transformations;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ExplorerConfig;
pub use console::Console;
pub use dataset::Dataset;
pub use error::{ExplorerError, Result};
pub use filters::{City, DayFilter, FilterSelection, MonthFilter};
pub use session::Session;
