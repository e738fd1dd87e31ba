use chrono::Datelike;
use std::fmt;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Name of a zero-based month. `month` has to be in `0..12`.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize]
}

/// Number of days since 1970-01-01 in the proleptic Gregorian calendar.
///
/// `month` is one-based here. Works on `i64` so that every `i32` year is
/// representable.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = (month as i64 + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146097 + day_of_era - 719468
}

/// Weekday of the given date, 0 = Sunday .. 6 = Saturday.
///
/// `month` is zero-based and has to be normalized by the caller.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    debug_assert!(month < 12, "month {} is not normalized", month);

    // 1970-01-01 was a Thursday
    (days_from_civil(year as i64, month + 1, day) + 4).rem_euclid(7) as u32
}

/// Number of days in the given zero-based month.
///
/// This is the distance between the first of this month and the first of
/// the following one, i.e. "day 0 of next month".
pub fn days_of_month(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month {} is not normalized", month);

    let year = year as i64;
    let (next_year, next_month) = if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    };

    (days_from_civil(next_year, next_month + 1, 1) - days_from_civil(year, month + 1, 1)) as u32
}

/// A validated calendar date with a zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if month > 11 || day == 0 || day > days_of_month(year, month) {
            return None;
        }

        Some(CalDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_in(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

impl<T: Datelike> From<T> for CalDate {
    fn from(d: T) -> Self {
        CalDate {
            year: d.year(),
            month: d.month0(),
            day: d.day(),
        }
    }
}

impl fmt::Display for CalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            month_name(self.month),
            self.year
        )
    }
}
