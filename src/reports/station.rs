use super::NO_TRIPS;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::{END_STATION, START_STATION};
use crate::stats::{mode, mode_with_count, non_empty};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub start: String,
    pub end: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Option<String>,
    pub end: Option<String>,
    pub trip: Option<Trip>,
}

pub fn station_stats(dataset: &Dataset) -> Result<StationStats> {
    let starts = dataset.strings(START_STATION)?;
    let ends = dataset.strings(END_STATION)?;

    let start = mode(starts.iter().map(non_empty)).map(str::to_string);
    let end = mode(ends.iter().map(non_empty)).map(str::to_string);

    // group by (start, end); rows missing either side are not a trip
    let pairs = starts
        .iter()
        .zip(ends.iter())
        .map(|(s, e)| non_empty(s).zip(non_empty(e)));
    let trip = mode_with_count(pairs).map(|((start, end), count)| Trip {
        start: start.to_string(),
        end: end.to_string(),
        count,
    });

    Ok(StationStats { start, end, trip })
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            Some(station) => writeln!(
                f,
                "The most common start station for the travel is {}.",
                station
            )?,
            None => writeln!(f, "Most common start station: {}.", NO_TRIPS)?,
        }

        match &self.end {
            Some(station) => writeln!(
                f,
                "The most common end station for the travel is {}.",
                station
            )?,
            None => writeln!(f, "Most common end station: {}.", NO_TRIPS)?,
        }

        match &self.trip {
            Some(trip) => write!(
                f,
                "The most common trip (i.e. combination of start and end station) for the \
                 travel is {} -> {} ({} trips).",
                trip.start, trip.end, trip.count
            ),
            None => write!(f, "Most common trip: {}.", NO_TRIPS),
        }
    }
}
