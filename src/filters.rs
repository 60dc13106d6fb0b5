use crate::date_utils::weekday_name;
use chrono::Weekday;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City name as typed by the user, and the CSV file backing it.
const CITY_DATA: [(City, &str, &str); 3] = [
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    fn entry(self) -> (City, &'static str, &'static str) {
        CITY_DATA[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn file_name(self) -> &'static str {
        self.entry().2
    }

    /// Case-insensitive lookup by full name.
    pub fn parse(input: &str) -> Option<City> {
        let input = input.trim().to_lowercase();
        CITY_DATA
            .iter()
            .find(|(_, name, _)| *name == input)
            .map(|(city, _, _)| *city)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Months covered by the dataset, in calendar order.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number, 1-6.
    Month(u32),
}

impl MonthFilter {
    pub fn parse(input: &str) -> Option<MonthFilter> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == input)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
    }

    pub fn number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(n) => Some(n),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Month(n) => write!(f, "{}", MONTHS[*n as usize - 1]),
        }
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Only full day names are accepted, in any case ("mon" is not a day).
    pub fn parse(input: &str) -> Option<DayFilter> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .iter()
            .find(|day| weekday_name(**day).to_lowercase() == input)
            .map(|day| DayFilter::Day(*day))
    }

    /// Capitalized weekday name as stored in the `day_of_week` column.
    pub fn title(self) -> Option<&'static str> {
        match self {
            DayFilter::All => None,
            DayFilter::Day(day) => Some(weekday_name(day)),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            None => write!(f, "all"),
            Some(name) => write!(f, "{}", name.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_table() {
        for city in City::ALL {
            assert_eq!(City::parse(city.name()), Some(city));
        }
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::parse("New York City"), Some(City::NewYorkCity));
        assert_eq!(City::parse("new york"), None);
        assert_eq!(City::parse("boston"), None);
    }

    #[test]
    fn test_month_filter() {
        assert_eq!(MonthFilter::parse("ALL"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("January"), Some(MonthFilter::Month(1)));
        assert_eq!(MonthFilter::parse("june"), Some(MonthFilter::Month(6)));
        assert_eq!(MonthFilter::parse("july"), None);
        assert_eq!(MonthFilter::parse("jan"), None);
        assert_eq!(MonthFilter::Month(3).to_string(), "march");
        assert_eq!(MonthFilter::All.number(), None);
    }

    #[test]
    fn test_day_filter() {
        assert_eq!(DayFilter::parse("all"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("Monday"), Some(DayFilter::Day(Weekday::Mon)));
        assert_eq!(DayFilter::parse("SUNDAY"), Some(DayFilter::Day(Weekday::Sun)));
        assert_eq!(DayFilter::parse("mon"), None);
        assert_eq!(DayFilter::parse("funday"), None);
        assert_eq!(DayFilter::Day(Weekday::Tue).title(), Some("Tuesday"));
        assert_eq!(DayFilter::Day(Weekday::Tue).to_string(), "tuesday");
    }
}
