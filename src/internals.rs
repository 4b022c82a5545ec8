// This is a part of mysql-time.
// See README.md and LICENSE.txt for details.

//! Closed-form day-number arithmetic for the MySQL calendar.
//!
//! MySQL counts days from the virtual zero date and, unlike the proleptic
//! Gregorian calendar, treats year 0 as a common year. The routines here
//! reproduce the reference integer arithmetic exactly; in particular,
//! every division truncates toward zero, so none of them may be rewritten
//! with flooring division.

/// Computes the day number of a calendar date: the count of days since the
/// zero date, with `(0, 1, 1)` mapping to day 1.
///
/// `year == 0 && month == 0` is the zero-date sentinel and maps to day
/// number 0 without touching the general formula.
pub(crate) fn day_number(year: i32, month: i32, day: i32) -> i32 {
    if year == 0 && month == 0 {
        return 0;
    }
    // 31 days per elapsed month, corrected below for the short months.
    let mut days = 365 * year + 31 * (month - 1) + day;
    let mut leap_years = year;
    if month <= 2 {
        // January and February sit before the leap day.
        leap_years -= 1;
    } else {
        days -= (month * 4 + 23) / 10;
    }
    days + leap_years / 4 - (leap_years / 100 + 1) * 3 / 4
}

/// The number of calendar days in `year`: 365, or 366 for leap years.
///
/// Year 0 is a common year in the MySQL calendar.
pub(crate) fn days_in_year(year: i32) -> i32 {
    if year & 3 == 0 && (year % 100 != 0 || (year % 400 == 0 && year != 0)) {
        366
    } else {
        365
    }
}

/// Computes the weekday index of a day number: 0 for Monday through 6 for
/// Sunday, or 0 for Sunday through 6 for Saturday with `sunday_first`.
pub(crate) fn weekday_from_daynr(daynr: i32, sunday_first: bool) -> i32 {
    // Day number 366 (0001-01-01) is a Monday; +5 makes its index 0.
    (daynr + 5 + if sunday_first { 1 } else { 0 }) % 7
}
