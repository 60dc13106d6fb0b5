use bikeshare_explorer::session::FAREWELL;
use bikeshare_explorer::{Console, ExplorerConfig, ExplorerError, Session};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Ten March trips, so month filters either keep everything or nothing.
const CHICAGO: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-01 07:10:00,2017-03-01 07:20:00,600,Canal St,Clark St,Subscriber,Male,1980.0
2017-03-01 07:40:00,2017-03-01 07:50:00,600,Canal St,Clark St,Subscriber,Male,1980.0
2017-03-02 07:15:00,2017-03-02 07:25:00,600,Canal St,Clark St,Subscriber,Female,1980.0
2017-03-02 17:00:00,2017-03-02 17:30:00,1800,Clark St,Canal St,Customer,,
2017-03-03 07:05:00,2017-03-03 07:15:00,600,Canal St,State St,Subscriber,Male,1975.0
2017-03-08 07:30:00,2017-03-08 07:40:00,600,State St,Clark St,Subscriber,Female,1991.0
2017-03-08 12:00:00,2017-03-08 12:20:00,1200,Canal St,Clark St,Subscriber,Male,1980.0
2017-03-09 07:20:00,2017-03-09 07:30:00,600,Canal St,Clark St,Customer,Female,1999.0
2017-03-15 07:45:00,2017-03-15 07:55:00,600,State St,Canal St,Subscriber,Male,1980.0
2017-03-22 18:00:00,2017-03-22 18:30:00,1800,Clark St,State St,Subscriber,Male,1965.0
";

fn run(input: &str) -> (Result<usize, ExplorerError>, String) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
    let config = ExplorerConfig::default().with_data_dir(dir.path());

    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(config, console);
    let result = session.run().map(|_| session.iterations());
    let out = String::from_utf8(session.into_console().into_output()).unwrap();
    (result, out)
}

#[test]
fn full_session_with_paging_and_reports() {
    let (result, out) = run("Chicago\nall\nall\nyes\nyes\nno\n");
    assert_eq!(result.unwrap(), 1);

    // two pages of five, then the pager reports the end on its own
    assert_eq!(
        out.matches("Would you like to see some (more) lines of raw data?")
            .count(),
        2
    );
    assert!(out.contains("No more data to display."));
    assert!(out.contains("2017-03-22 18:00:00"));

    assert!(out.contains("This month and the most common month of travel is 1."));
    assert!(out.contains("The most common day of travel is Wednesday."));
    assert!(out.contains("The most common hour of the day to start the travel is 7."));
    assert!(out.contains("The most common start station for the travel is Canal St."));
    assert!(out.contains("The most common end station for the travel is Clark St."));
    assert!(out.contains("Canal St -> Clark St (5 trips)"));
    assert!(out.contains("The total travel time in the timeframe is 2.5 hours."));
    assert!(out.contains("The average travel time in the timeframe is 15 minutes."));
    assert!(out.contains("born in 1965, the youngest in 1999"));
    assert!(out.contains("most common year of birth is 1980."));
    assert!(out.trim_end().ends_with(FAREWELL));
}

#[test]
fn invalid_answers_are_reprompted() {
    let (result, out) = run("paris\nchicago\nmarch\nwednesday\nsure\nno\nno\n");
    assert_eq!(result.unwrap(), 1);

    assert!(out.contains("Please enter a valid city out of the cities mentioned."));
    assert!(out.contains("Invalid input. Please answer with 'yes' or 'no'."));
    assert!(out.contains("Okay, stopping data display."));
    assert!(out.contains("There is only one weekday that you selected."));
}

#[test]
fn empty_selection_reports_instead_of_failing() {
    let (result, out) = run("chicago\napril\nall\nno\n");
    assert_eq!(result.unwrap(), 1);

    assert!(!out.contains("Would you like to see some (more) lines of raw data?"));
    assert!(out.contains("No more data to display."));
    assert!(out.contains("no trips match the selected filters"));
    assert!(out.contains("This month and the most common month of travel is 0."));
    assert!(out.contains("The total travel time in the timeframe is 0 hours."));
}

#[test]
fn closed_input_ends_the_session() {
    let (result, _) = run("chicago\nall\n");
    assert!(matches!(result, Err(ExplorerError::InputClosed)));
}
