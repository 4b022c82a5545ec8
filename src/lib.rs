// This is a part of mysql-time.
// See README.md and LICENSE.txt for details.

//! MySQL-compatible wall-clock date and time arithmetic.
//!
//! MySQL's calendar is deliberately more permissive than the proleptic
//! Gregorian one: a [`MysqlTime`] may carry a zero month or day (the "zero
//! date" used by TIME-only values), year 0 is an ordinary common year, and
//! the `WEEK()` family supports eight different numbering conventions.
//! None of this maps onto a standard calendar type directly, so the
//! arithmetic here works from first principles on day numbers and only
//! bridges to [`chrono`] once a value is known to name a real calendar
//! instant.
//!
//! # Example
//!
//! ```
//! use mysql_time::{MysqlTime, TimeFields};
//!
//! let t = MysqlTime::new(2000, 1, 1, 0, 0, 0, 0);
//! assert_eq!(t.year(), 2000);
//! // The first of January 2000 sits in a partial week: week 0 of 2000
//! // under the default mode, but the last week of 1999 to `YEARWEEK()`.
//! assert_eq!(t.week(0), 0);
//! assert_eq!(t.year_week(0), (1999, 52));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(unreachable_pub)]

use chrono::{Datelike, NaiveDateTime, Timelike};

pub use chrono::Weekday;

pub use crate::convert::{date_to_u64, datetime_to_u64, time_difference, time_to_u64};
pub use crate::error::InvalidTimeError;
pub use crate::time::MysqlTime;
pub use crate::week::{week_number, WeekFlags};

mod convert;
mod error;
mod internals;
mod time;
mod week;

/// The common set of read-only accessors for the fields of a wall-clock
/// date and time value.
///
/// The calendar arithmetic in this crate — [`week_number`],
/// [`time_difference`], the integer encodings — is written against this
/// trait rather than against [`MysqlTime`], so that any other
/// representation exposing these seven fields can feed it. The fields are
/// reported verbatim: implementors do not promise that they form a real
/// calendar date.
pub trait TimeFields {
    /// Returns the year number; 0 to 9999 for values stored by MySQL.
    fn year(&self) -> i32;

    /// Returns the month number, 1 to 12, or 0 when the date part is
    /// absent.
    fn month(&self) -> u32;

    /// Returns the day of month, 1 to 31, or 0 when the date part is
    /// absent.
    fn day(&self) -> u32;

    /// Returns the hour number; 0 to 23 for datetime values.
    fn hour(&self) -> u32;

    /// Returns the minute number, 0 to 59.
    fn minute(&self) -> u32;

    /// Returns the second number, 0 to 59.
    fn second(&self) -> u32;

    /// Returns the microsecond within the second, 0 to 999999.
    fn microsecond(&self) -> u32;
}

/// Normalized instants can feed the arithmetic functions directly.
impl TimeFields for NaiveDateTime {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    #[inline]
    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    #[inline]
    fn hour(&self) -> u32 {
        Timelike::hour(self)
    }

    #[inline]
    fn minute(&self) -> u32 {
        Timelike::minute(self)
    }

    #[inline]
    fn second(&self) -> u32 {
        Timelike::second(self)
    }

    #[inline]
    fn microsecond(&self) -> u32 {
        self.nanosecond() / 1_000
    }
}
