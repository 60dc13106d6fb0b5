use chrono::{NaiveDateTime, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub enum TimestampFormat {
    /// `2017-01-01 09:07:57`, with optional fractional seconds or a `T` separator.
    Iso,
    /// Any chrono format string, e.g. `%m/%d/%Y %H:%M`.
    Custom(String),
}

impl TimestampFormat {
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        match self {
            TimestampFormat::Iso => NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
                .ok(),
            TimestampFormat::Custom(fmt) => NaiveDateTime::parse_from_str(value, fmt).ok(),
        }
    }
}

/// What to do with a cell that does not parse as a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorStrategy {
    Strict,
    SetNull,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimestampOptions {
    pub format: TimestampFormat,
    pub error_strategy: ErrorStrategy,
}

impl Default for TimestampOptions {
    fn default() -> Self {
        Self {
            format: TimestampFormat::Iso,
            error_strategy: ErrorStrategy::Strict,
        }
    }
}

/// Full English weekday name, capitalized ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
