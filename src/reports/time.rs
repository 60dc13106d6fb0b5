use super::NO_TRIPS;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::{DAY_OF_WEEK, MONTH, START_TIME};
use crate::stats::{distinct_count, mode, non_empty};
use crate::transformations::CalendarField;
use std::fmt;
use std::hash::Hash;

pub const HOUR: &str = "hour";

/// How the most common month/day is reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Popularity<T> {
    Mode(T),
    /// At most one value left after filtering. Carries the number of
    /// distinct values (1, or 0 for an empty table), which is what gets
    /// printed.
    SingleSelection(usize),
}

fn popularity<K: Eq + Hash + Clone>(values: Vec<Option<K>>) -> Popularity<K> {
    let distinct = distinct_count(values.iter().cloned());
    match mode(values) {
        Some(value) if distinct > 1 => Popularity::Mode(value),
        _ => Popularity::SingleSelection(distinct),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Popularity<i64>,
    pub day: Popularity<String>,
    pub hour: Option<i64>,
}

pub fn time_stats(dataset: &Dataset) -> Result<TimeStats> {
    let months = dataset.int64s(MONTH)?;
    let month = popularity(months.iter().collect());

    let days = dataset.strings(DAY_OF_WEEK)?;
    let day = popularity(
        days.iter()
            .map(|d| non_empty(d).map(str::to_string))
            .collect(),
    );

    let mut with_hour = dataset.clone();
    with_hour.derive_column(START_TIME, HOUR, &CalendarField::Hour)?;
    let hour = mode(with_hour.int64s(HOUR)?.iter());

    Ok(TimeStats { month, day, hour })
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.month {
            Popularity::Mode(month) => {
                writeln!(f, "The most common month of travel is {}.", month)?
            }
            Popularity::SingleSelection(distinct) => writeln!(
                f,
                "There is only one month that you selected. Hence that month is the most common \
                 month of travel. This month and the most common month of travel is {}.",
                distinct
            )?,
        }

        match &self.day {
            Popularity::Mode(day) => writeln!(f, "The most common day of travel is {}.", day)?,
            Popularity::SingleSelection(distinct) => writeln!(
                f,
                "There is only one weekday that you selected. Hence, that is the most common day \
                 of travel. The day you chose and most common day of travel is {}.",
                distinct
            )?,
        }

        match self.hour {
            Some(hour) => write!(
                f,
                "The most common hour of the day to start the travel is {}.",
                hour
            ),
            None => write!(f, "Most common start hour: {}.", NO_TRIPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{City, DayFilter, MonthFilter};
    use crate::loader::{apply_filters, load_city};
    use crate::test_support::fixture_dir;
    use chrono::Weekday;

    fn stats(month: MonthFilter, day: DayFilter) -> TimeStats {
        let (_dir, config) = fixture_dir();
        let dataset = load_city(&config, City::Chicago).unwrap();
        time_stats(&apply_filters(dataset, month, day).unwrap()).unwrap()
    }

    #[test]
    fn test_unfiltered_modes() {
        let stats = stats(MonthFilter::All, DayFilter::All);
        assert_eq!(stats.month, Popularity::Mode(3));
        assert_eq!(stats.day, Popularity::Mode("Tuesday".to_string()));
        assert_eq!(stats.hour, Some(8));

        let text = stats.to_string();
        assert!(text.contains("most common month of travel is 3."));
        assert!(text.contains("most common day of travel is Tuesday."));
        assert!(text.contains("start the travel is 8."));
    }

    #[test]
    fn test_single_selection_reports_distinct_count() {
        let stats = stats(MonthFilter::Month(3), DayFilter::Day(Weekday::Tue));
        assert_eq!(stats.month, Popularity::SingleSelection(1));
        assert_eq!(stats.day, Popularity::SingleSelection(1));
        assert_eq!(stats.hour, Some(8));
        assert!(stats
            .to_string()
            .contains("This month and the most common month of travel is 1."));
    }

    #[test]
    fn test_day_filter_keeps_month_mode() {
        // Tuesdays fall in March only; Mondays only in January
        let tuesdays = stats(MonthFilter::All, DayFilter::Day(Weekday::Tue));
        assert_eq!(tuesdays.month, Popularity::SingleSelection(1));

        let january = stats(MonthFilter::Month(1), DayFilter::All);
        assert_eq!(january.day, Popularity::SingleSelection(1));
        assert_eq!(january.hour, Some(8));
    }

    #[test]
    fn test_no_trips_reports_zero_distinct() {
        let stats = stats(MonthFilter::Month(4), DayFilter::All);
        assert_eq!(stats.month, Popularity::SingleSelection(0));
        assert_eq!(stats.day, Popularity::SingleSelection(0));
        assert_eq!(stats.hour, None);

        let text = stats.to_string();
        assert!(text.contains("This month and the most common month of travel is 0."));
        assert!(text.contains("most common day of travel is 0."));
        assert!(text.contains(NO_TRIPS));
    }
}
