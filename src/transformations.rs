use crate::date_utils::{weekday_name, ErrorStrategy, TimestampOptions};
use arrow::array::{Array, Int64Array, StringArray, TimestampSecondArray};
use arrow::datatypes::{DataType, TimeUnit};
use arrow::error::{ArrowError, Result as ArrowResult};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

/// Trait for column transformations
pub trait ColumnTransform {
    fn transform(&self, array: &dyn Array) -> ArrowResult<Box<dyn Array>>;
}

/// Parses a text column into second-resolution timestamps.
pub struct TimestampConverter {
    options: TimestampOptions,
}

impl TimestampConverter {
    pub fn new(options: TimestampOptions) -> Self {
        Self { options }
    }
}

impl ColumnTransform for TimestampConverter {
    fn transform(&self, array: &dyn Array) -> ArrowResult<Box<dyn Array>> {
        match array.data_type() {
            DataType::Timestamp(TimeUnit::Second, None) => {
                let timestamps = downcast::<TimestampSecondArray>(array)?;
                Ok(Box::new(timestamps.clone()))
            }
            DataType::Utf8 => {
                let strings = downcast::<StringArray>(array)?;

                let timestamps = strings
                    .iter()
                    .map(|opt_str| match opt_str {
                        None => Ok(None),
                        Some(s) => match self.options.format.parse(s) {
                            Some(ts) => Ok(Some(ts.and_utc().timestamp())),
                            None => match self.options.error_strategy {
                                ErrorStrategy::Strict => Err(ArrowError::ParseError(format!(
                                    "could not parse '{}' as a timestamp",
                                    s
                                ))),
                                ErrorStrategy::SetNull => Ok(None),
                            },
                        },
                    })
                    .collect::<ArrowResult<Vec<Option<i64>>>>()?;

                Ok(Box::new(TimestampSecondArray::from(timestamps)))
            }
            other => Err(ArrowError::InvalidArgumentError(format!(
                "Unsupported data type for timestamp conversion: {:?}",
                other
            ))),
        }
    }
}

/// Calendar fields that can be derived from a timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    /// 1-12
    Month,
    /// 0-23
    Hour,
    /// "Monday".."Sunday"
    WeekdayName,
}

impl ColumnTransform for CalendarField {
    fn transform(&self, array: &dyn Array) -> ArrowResult<Box<dyn Array>> {
        let timestamps = match array.data_type() {
            DataType::Timestamp(TimeUnit::Second, None) => {
                downcast::<TimestampSecondArray>(array)?
            }
            other => {
                return Err(ArrowError::InvalidArgumentError(format!(
                    "Calendar fields need a second-resolution timestamp column, got {:?}",
                    other
                )))
            }
        };

        let datetimes = timestamps
            .iter()
            .map(|opt| opt.and_then(|secs| DateTime::from_timestamp(secs, 0)))
            .map(|opt| opt.map(|dt| dt.naive_utc()));

        match self {
            CalendarField::Month => Ok(Box::new(
                datetimes
                    .map(|opt| opt.map(|dt: NaiveDateTime| dt.month() as i64))
                    .collect::<Int64Array>(),
            )),
            CalendarField::Hour => Ok(Box::new(
                datetimes
                    .map(|opt| opt.map(|dt: NaiveDateTime| dt.hour() as i64))
                    .collect::<Int64Array>(),
            )),
            CalendarField::WeekdayName => Ok(Box::new(
                datetimes
                    .map(|opt| opt.map(|dt: NaiveDateTime| weekday_name(dt.weekday())))
                    .collect::<StringArray>(),
            )),
        }
    }
}

fn downcast<T: Array + 'static>(array: &dyn Array) -> ArrowResult<&T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        ArrowError::InvalidArgumentError(format!(
            "Failed to downcast {:?} array",
            array.data_type()
        ))
    })
}
