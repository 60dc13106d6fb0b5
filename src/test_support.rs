use crate::config::ExplorerConfig;
use crate::filters::City;
use std::fs;
use tempfile::TempDir;

/// Seven Chicago trips over January, March and June 2017.
///
/// Modes: month 3, Tuesday, hour 8, start A, end B, trip A->B (3),
/// Subscriber 5 / Customer 2, Male 4 / Female 2, birth years 1972..1995 with
/// 1990 most common. Durations add up to exactly one hour.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,A,B,Subscriber,Male,1985.0
1,2017-01-02 08:40:00,2017-01-02 09:00:00,1200,A,B,Subscriber,Female,1990.0
2,2017-03-07 17:10:00,2017-03-07 17:15:00,300,A,C,Customer,,
3,2017-03-07 08:20:00,2017-03-07 08:35:00,900,B,C,Subscriber,Male,1990.0
4,2017-06-10 08:55:00,2017-06-10 08:56:00,60,C,A,Subscriber,Male,1972.0
5,2017-06-11 12:00:00,2017-06-11 12:02:00,120,A,B,Customer,Female,1990.0
6,2017-03-14 08:30:00,2017-03-14 08:37:00,420,B,A,Subscriber,Male,1995.0
";

/// Washington has no gender or birth year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-04-03 09:00:00,2017-04-03 09:01:00,60.0,X,Y,Subscriber
1,2017-04-04 09:30:00,2017-04-04 09:32:00,120.0,X,Z,Customer
2,2017-04-04 18:00:00,2017-04-04 18:03:00,180.0,X,Y,Subscriber
";

pub fn write_city(dir: &TempDir, city: City, body: &str) {
    fs::write(dir.path().join(city.file_name()), body).unwrap();
}

/// A temp data directory with Chicago and Washington files, and a config
/// pointing at it. Keep the `TempDir` alive for the duration of the test.
pub fn fixture_dir() -> (TempDir, ExplorerConfig) {
    let dir = TempDir::new().unwrap();
    write_city(&dir, City::Chicago, CHICAGO_CSV);
    write_city(&dir, City::Washington, WASHINGTON_CSV);
    let config = ExplorerConfig::default().with_data_dir(dir.path());
    (dir, config)
}
