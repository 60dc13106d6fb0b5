use crate::config::ExplorerConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter};
use crate::lazy::LazyDataset;
use crate::transformations::{CalendarField, TimestampConverter};
use arrow::array::{Int64Array, StringArray};
use arrow::compute::kernels::cmp;
use log::debug;

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived from `Start Time` at load.
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";

const NUMERIC_COLUMNS: [&str; 2] = [TRIP_DURATION, BIRTH_YEAR];

/// Read a city's file with `Start Time` parsed and the calendar columns added.
pub fn load_city(config: &ExplorerConfig, city: City) -> Result<Dataset> {
    let path = config.resolve(city.file_name());
    debug!("loading {} from {}", city, path.display());

    let mut dataset = Dataset::builder()
        .with_numeric_columns(NUMERIC_COLUMNS)
        .from_csv(&path)?;

    dataset.transform_column(
        START_TIME,
        &TimestampConverter::new(config.timestamp.clone()),
    )?;
    dataset.derive_column(START_TIME, MONTH, &CalendarField::Month)?;
    dataset.derive_column(START_TIME, DAY_OF_WEEK, &CalendarField::WeekdayName)?;

    debug!("loaded {} rows for {}", dataset.num_rows(), city);
    Ok(dataset)
}

/// Keep only rows in the selected month and weekday.
pub fn apply_filters(dataset: Dataset, month: MonthFilter, day: DayFilter) -> Result<Dataset> {
    let mut lazy = LazyDataset::new(dataset);

    if let Some(number) = month.number() {
        lazy = lazy.filter(move |batch| {
            let idx = batch.schema().index_of(MONTH)?;
            cmp::eq(batch.column(idx), &Int64Array::new_scalar(number as i64))
        });
    }

    if let Some(title) = day.title() {
        lazy = lazy.filter(move |batch| {
            let idx = batch.schema().index_of(DAY_OF_WEEK)?;
            cmp::eq(batch.column(idx), &StringArray::new_scalar(title))
        });
    }

    debug!("applying {} filter(s)", lazy.pending_filters());
    Ok(lazy.collect()?)
}

/// Load the selected city and narrow it to the selected month and day.
pub fn load_data(config: &ExplorerConfig, selection: &FilterSelection) -> Result<Dataset> {
    let dataset = load_city(config, selection.city)?;
    let filtered = apply_filters(dataset, selection.month, selection.day)?;
    debug!("{} rows match {}", filtered.num_rows(), selection);
    Ok(filtered)
}
