//! Descriptive statistics over a filtered trip table.
//!
//! Each reporter is a pure function from `&Dataset` to a stats struct whose
//! `Display` impl is the text shown to the user. [`run_all`] prints them in
//! order, each framed by a heading, its timing and a separator.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::console::Console;
use crate::dataset::Dataset;
use crate::error::Result;
use log::debug;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Instant;

pub use duration::{trip_duration_stats, DurationStats};
pub use station::{station_stats, StationStats, Trip};
pub use time::{time_stats, Popularity, TimeStats};
pub use user::{user_stats, Availability, BirthYears, UserStats};

pub(crate) const NO_TRIPS: &str = "no trips match the selected filters";

/// Compute one report, then print it with its heading and elapsed time.
pub fn print_section<R, W, T, F>(console: &mut Console<R, W>, heading: &str, compute: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: Display,
    F: FnOnce() -> Result<T>,
{
    console.say(format!("\n{}\n", heading))?;

    let started = Instant::now();
    let stats = compute()?;
    let elapsed = started.elapsed();
    debug!("{} took {:?}", heading, elapsed);

    console.say(&stats)?;
    console.say(format!("\nThis took {} seconds.", elapsed.as_secs_f64()))?;
    console.separator()?;
    Ok(stats)
}

/// Time, station, duration, then user stats. The first failure stops the run.
pub fn run_all<R: BufRead, W: Write>(console: &mut Console<R, W>, dataset: &Dataset) -> Result<()> {
    print_section(
        console,
        "Calculating The Most Frequent Times of Travel...",
        || time_stats(dataset),
    )?;
    print_section(
        console,
        "Calculating The Most Popular Stations and Trip...",
        || station_stats(dataset),
    )?;
    print_section(console, "Calculating Trip Duration...", || {
        trip_duration_stats(dataset)
    })?;
    print_section(console, "Calculating User Stats...", || user_stats(dataset))?;
    Ok(())
}
