use crate::console::Console;
use crate::error::Result;
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter};
use std::io::{BufRead, Write};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_QUESTION: &str =
    "Which city do you wanna explore? Choose one of the cities: Chicago, New York City or Washington";
const CITY_RETRY: &str = "Please enter a valid city out of the cities mentioned.";

const MONTH_QUESTION: &str = "Which month do you want to take a look at? Choose a month or all.";
const MONTH_RETRY: &str = "Please enter a valid month between january and june or select all.";

const DAY_QUESTION: &str =
    "Which day of the week do you want to take a look at? Choose a day (e.g. monday) or all.";
const DAY_RETRY: &str = "Please enter a valid weekday or select all.";

/// Ask for city, month and weekday until each one is valid.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FilterSelection> {
    console.say(GREETING)?;

    let city = console.ask_until(CITY_QUESTION, CITY_RETRY, City::parse)?;
    let month = console.ask_until(MONTH_QUESTION, MONTH_RETRY, MonthFilter::parse)?;
    let day = console.ask_until(DAY_QUESTION, DAY_RETRY, DayFilter::parse)?;

    console.separator()?;
    Ok(FilterSelection { city, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Cursor;

    fn collect(input: &str) -> (Result<FilterSelection>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = get_filters(&mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_valid_answers_first_time() {
        let (result, out) = collect("Chicago\nMARCH\ntuesday\n");
        assert_eq!(
            result.unwrap(),
            FilterSelection {
                city: City::Chicago,
                month: MonthFilter::Month(3),
                day: DayFilter::Day(Weekday::Tue),
            }
        );
        assert!(out.starts_with(GREETING));
        assert!(!out.contains("Please enter"));
        assert!(out.trim_end().ends_with(&"-".repeat(40)));
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (result, out) = collect("boston\nnew york city\njuly\nall\nmon\nfunday\nall\n");
        assert_eq!(
            result.unwrap(),
            FilterSelection {
                city: City::NewYorkCity,
                month: MonthFilter::All,
                day: DayFilter::All,
            }
        );
        assert_eq!(out.matches(CITY_RETRY).count(), 1);
        assert_eq!(out.matches(MONTH_RETRY).count(), 1);
        assert_eq!(out.matches(DAY_RETRY).count(), 2);
        assert_eq!(out.matches(DAY_QUESTION).count(), 3);
    }

    #[test]
    fn test_non_utf8_answer_reprompts() {
        let input = b"chic\xffago\nchicago\nall\nall\n".to_vec();
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let result = get_filters(&mut console).unwrap();
        assert_eq!(
            result,
            FilterSelection {
                city: City::Chicago,
                month: MonthFilter::All,
                day: DayFilter::All,
            }
        );
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches(CITY_RETRY).count(), 1);
    }

    #[test]
    fn test_input_closed_midway() {
        let (result, _) = collect("washington\n");
        assert!(result.is_err());
    }
}
