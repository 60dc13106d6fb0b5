use super::NO_TRIPS;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::TRIP_DURATION;
use arrow::array::Array;
use arrow::compute;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_hours: f64,
    /// `None` when no trip has a duration.
    pub mean_minutes: Option<f64>,
}

pub fn trip_duration_stats(dataset: &Dataset) -> Result<DurationStats> {
    let durations = dataset.float64s(TRIP_DURATION)?;

    let total_seconds = compute::sum(&durations).unwrap_or(0.0);
    let count = durations.len() - durations.null_count();
    let mean_minutes = (count > 0).then(|| total_seconds / count as f64 / 60.0);

    Ok(DurationStats {
        total_hours: total_seconds / 60.0 / 60.0,
        mean_minutes,
    })
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The total travel time in the timeframe is {} hours.",
            self.total_hours
        )?;
        match self.mean_minutes {
            Some(mean) => write!(
                f,
                "The average travel time in the timeframe is {} minutes.",
                mean
            ),
            None => write!(f, "Average travel time: {}.", NO_TRIPS),
        }
    }
}
