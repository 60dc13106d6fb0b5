use super::NO_TRIPS;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::{BIRTH_YEAR, GENDER, USER_TYPE};
use crate::stats::{mode, non_empty, value_counts, ValueCounts};
use arrow::compute;
use std::fmt;

/// An optional source column: absent from the file, present without
/// values, or present with a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    Unavailable,
    Empty,
    Available(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: ValueCounts,
    pub gender: Availability<ValueCounts>,
    pub birth_years: Availability<BirthYears>,
}

fn text_counts(dataset: &Dataset, column: &str) -> Result<ValueCounts> {
    let values = dataset.strings(column)?;
    let counts = value_counts(values.iter().map(non_empty))
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    Ok(ValueCounts::new(column, counts))
}

fn birth_years(dataset: &Dataset) -> Result<Availability<BirthYears>> {
    let years = dataset.float64s(BIRTH_YEAR)?;

    let earliest = compute::min(&years);
    let most_recent = compute::max(&years);
    let most_common = mode(years.iter().map(|y| y.map(|v| v as i64)));

    Ok(match (earliest, most_recent, most_common) {
        (Some(earliest), Some(most_recent), Some(most_common)) => {
            Availability::Available(BirthYears {
                earliest: earliest as i64,
                most_recent: most_recent as i64,
                most_common,
            })
        }
        _ => Availability::Empty,
    })
}

pub fn user_stats(dataset: &Dataset) -> Result<UserStats> {
    let user_types = text_counts(dataset, USER_TYPE)?;

    let gender = if dataset.has_column(GENDER) {
        let counts = text_counts(dataset, GENDER)?;
        if counts.counts.is_empty() {
            Availability::Empty
        } else {
            Availability::Available(counts)
        }
    } else {
        Availability::Unavailable
    };

    let birth_years = if dataset.has_column(BIRTH_YEAR) {
        birth_years(dataset)?
    } else {
        Availability::Unavailable
    };

    Ok(UserStats {
        user_types,
        gender,
        birth_years,
    })
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user_types.counts.is_empty() {
            writeln!(f, "User types: {}.", NO_TRIPS)?;
        } else {
            writeln!(f, "The counts of the different user types are:")?;
            writeln!(f, "{}", self.user_types)?;
        }

        match &self.gender {
            Availability::Available(counts) => {
                writeln!(f, "\nThe users had the following genders:")?;
                writeln!(f, "{}", counts)?;
            }
            Availability::Empty => writeln!(f, "\nNo gender values in the selected trips.")?,
            Availability::Unavailable => writeln!(f, "\nNo gender data available for this city.")?,
        }

        match &self.birth_years {
            Availability::Available(years) => write!(
                f,
                "\nThe oldest user(s) were born in {}, the youngest in {} and the most common \
                 year of birth is {}.",
                years.earliest, years.most_recent, years.most_common
            ),
            Availability::Empty => write!(f, "\nNo birth year values in the selected trips."),
            Availability::Unavailable => {
                write!(f, "\nNo birth year data available for this city.")
            }
        }
    }
}
