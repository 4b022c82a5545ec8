// This is a part of mysql-time.
// See README.md and LICENSE.txt for details.

//! The MySQL wall-clock date and time value.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use num_integer::div_mod_floor;

use crate::error::InvalidTimeError;
use crate::week::{week_number, WeekFlags};

/// A wall-clock date and time in the permissive MySQL calendar.
///
/// Unlike a normalized calendar type, a `MysqlTime` may carry a zero month
/// or day — MySQL's sentinel for "the date part is not applicable", used
/// by TIME-only values — and its fields are stored exactly as given,
/// whether or not they name a real date. Validity is checked only when
/// bridging to the host calendar with [`MysqlTime::to_naive_datetime`];
/// the derived queries degrade to a zero sentinel instead of failing.
///
/// Field accessors come from the [`TimeFields`](crate::TimeFields) trait.
/// The ordering derives from the fields in most-significant-first order,
/// which coincides with chronological order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub struct MysqlTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl MysqlTime {
    /// Makes a new `MysqlTime` from its seven components.
    ///
    /// This mirrors MySQL's storage format: each argument is narrowed to
    /// its field width with no validation, so out-of-range input is kept
    /// or silently truncated rather than rejected. In particular, hours
    /// above 255 do not fit the field. Use
    /// [`MysqlTime::to_naive_datetime`] to find out whether the value
    /// names a real instant.
    ///
    /// # Example
    ///
    /// ```
    /// use mysql_time::{MysqlTime, TimeFields};
    ///
    /// // February 30 is stored verbatim...
    /// let t = MysqlTime::new(2016, 2, 30, 0, 0, 0, 0);
    /// assert_eq!((t.month(), t.day()), (2, 30));
    /// // ...but does not name a real instant.
    /// assert!(t.to_naive_datetime().is_err());
    /// ```
    #[must_use]
    pub const fn new(
        year: u32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> MysqlTime {
        MysqlTime {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            microsecond,
        }
    }

    /// Makes a time-of-day value from a count of seconds since midnight
    /// plus a microsecond remainder.
    ///
    /// The date part is left at the zero date, as TIME values have no
    /// calendar position. Hour counts above 255 are truncated to the
    /// field width, like every other component.
    #[must_use]
    pub const fn from_seconds(seconds: u32, microseconds: u32) -> MysqlTime {
        MysqlTime {
            year: 0,
            month: 0,
            day: 0,
            hour: (seconds / 3600) as u8,
            minute: (seconds % 3600 / 60) as u8,
            second: (seconds % 60) as u8,
            microsecond: microseconds,
        }
    }

    /// Returns `true` when the date part is absent (zero month or day).
    #[inline]
    #[must_use]
    pub const fn is_zero_date(&self) -> bool {
        self.month == 0 || self.day == 0
    }

    /// Converts to the host calendar's normalized date and time.
    ///
    /// A normalized type cannot carry month 0 or day 0, so the conversion
    /// first builds the *nearest* real instant — month 0 rolls back into
    /// December of the previous year, day 0 into the last day of the
    /// previous month, and oversized time fields carry upward — and then
    /// validates by round-trip: the normalized instant is decomposed again
    /// and compared field by field with the original. Any mismatch means
    /// the value cannot be represented faithfully.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeError`] when the fields do not name a real
    /// calendar instant, e.g. a nonexistent day of month or a zero date.
    /// The error carries the (inexact) normalized instant for
    /// diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use mysql_time::MysqlTime;
    ///
    /// let t = MysqlTime::new(2021, 7, 4, 12, 30, 0, 250_000);
    /// let expected = NaiveDate::from_ymd_opt(2021, 7, 4)
    ///     .unwrap()
    ///     .and_hms_micro_opt(12, 30, 0, 250_000)
    ///     .unwrap();
    /// assert_eq!(t.to_naive_datetime(), Ok(expected));
    ///
    /// // February 30 fails, reporting the nearest real instant.
    /// let bad = MysqlTime::new(2016, 2, 30, 0, 0, 0, 0);
    /// let err = bad.to_naive_datetime().unwrap_err();
    /// let nearest = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert_eq!(err.nearest(), nearest);
    /// ```
    pub fn to_naive_datetime(&self) -> Result<NaiveDateTime, InvalidTimeError> {
        let nearest = self.nearest_datetime();
        if MysqlTime::from(nearest) == *self {
            Ok(nearest)
        } else {
            Err(InvalidTimeError::new(nearest))
        }
    }

    /// Builds the nearest normalized instant, applying the host calendar's
    /// underflow and overflow rules to out-of-range fields.
    fn nearest_datetime(&self) -> NaiveDateTime {
        let (carry, month0) = div_mod_floor(i32::from(self.month) - 1, 12);
        let first = NaiveDate::from_ymd_opt(i32::from(self.year) + carry, month0 as u32 + 1, 1)
            .expect("a normalized month and the u16 year range always fit the host calendar");
        let date = first + Duration::days(i64::from(self.day) - 1);
        let seconds = i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        date.and_time(NaiveTime::MIN)
            + Duration::seconds(seconds)
            + Duration::microseconds(i64::from(self.microsecond))
    }

    /// The day of week, derived through the host calendar.
    ///
    /// Values that do not name a real date (zero dates included) answer
    /// the host calendar's zero weekday, [`Weekday::Sun`]. Callers that
    /// need to tell that sentinel apart from an actual Sunday must use
    /// [`MysqlTime::to_naive_datetime`] directly.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        match self.to_naive_datetime() {
            Ok(dt) => dt.weekday(),
            Err(_) => Weekday::Sun,
        }
    }

    /// The ordinal day of the year, 1 to 366, or 0 for values that do not
    /// name a real date.
    #[must_use]
    pub fn year_day(&self) -> u32 {
        match self.to_naive_datetime() {
            Ok(dt) => dt.ordinal(),
            Err(_) => 0,
        }
    }

    /// The ISO 8601 week this value falls in, as a `(year, week)` pair,
    /// or `(0, 0)` for values that do not name a real date.
    #[must_use]
    pub fn iso_week(&self) -> (i32, u32) {
        match self.to_naive_datetime() {
            Ok(dt) => {
                let week = dt.iso_week();
                (week.year(), week.week())
            }
            Err(_) => (0, 0),
        }
    }

    /// The `WEEK()` number of this value under the given mode, 0 to 53.
    ///
    /// Zero dates answer 0.
    ///
    /// # Example
    ///
    /// ```
    /// use mysql_time::MysqlTime;
    ///
    /// let t = MysqlTime::new(2008, 2, 20, 0, 0, 0, 0);
    /// assert_eq!(t.week(0), 7);
    /// assert_eq!(t.week(1), 8);
    /// ```
    #[must_use]
    pub fn week(&self, mode: u32) -> u32 {
        let (_, week) = week_number(self, WeekFlags::from_mode(mode));
        week
    }

    /// The `YEARWEEK()` pair of this value: the week number together with
    /// the year that week belongs to, which near January 1 may differ
    /// from the calendar year.
    ///
    /// Year-relative numbering is always in force here, so the week is
    /// never 0 for a real date. Zero dates answer `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// use mysql_time::MysqlTime;
    ///
    /// let t = MysqlTime::new(1987, 1, 1, 0, 0, 0, 0);
    /// assert_eq!(t.year_week(0), (1986, 52));
    /// ```
    #[must_use]
    pub fn year_week(&self, mode: u32) -> (i32, u32) {
        week_number(self, WeekFlags::from_mode(mode).with_year_relative())
    }
}

impl crate::TimeFields for MysqlTime {
    #[inline]
    fn year(&self) -> i32 {
        i32::from(self.year)
    }

    #[inline]
    fn month(&self) -> u32 {
        u32::from(self.month)
    }

    #[inline]
    fn day(&self) -> u32 {
        u32::from(self.day)
    }

    #[inline]
    fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    #[inline]
    fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    #[inline]
    fn second(&self) -> u32 {
        u32::from(self.second)
    }

    #[inline]
    fn microsecond(&self) -> u32 {
        self.microsecond
    }
}

/// Decomposes a normalized instant into MySQL fields. Sub-microsecond
/// precision is dropped, and years outside 0 to 9999 narrow under the
/// permissive construction policy.
impl From<NaiveDateTime> for MysqlTime {
    fn from(dt: NaiveDateTime) -> MysqlTime {
        MysqlTime::new(
            dt.year() as u32,
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.nanosecond() / 1_000,
        )
    }
}

/// The checked direction of the bridge; equivalent to
/// [`MysqlTime::to_naive_datetime`].
impl TryFrom<MysqlTime> for NaiveDateTime {
    type Error = InvalidTimeError;

    fn try_from(t: MysqlTime) -> Result<NaiveDateTime, InvalidTimeError> {
        t.to_naive_datetime()
    }
}

#[cfg(feature = "serde")]
mod mysql_time_serde {
    use core::fmt;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::MysqlTime;

    /// Serializes as the `(year, month, day, hour, minute, second,
    /// microsecond)` tuple, preserving permissive field values verbatim.
    impl Serialize for MysqlTime {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut tuple = serializer.serialize_tuple(7)?;
            tuple.serialize_element(&self.year)?;
            tuple.serialize_element(&self.month)?;
            tuple.serialize_element(&self.day)?;
            tuple.serialize_element(&self.hour)?;
            tuple.serialize_element(&self.minute)?;
            tuple.serialize_element(&self.second)?;
            tuple.serialize_element(&self.microsecond)?;
            tuple.end()
        }
    }

    struct MysqlTimeVisitor;

    impl<'de> Visitor<'de> for MysqlTimeVisitor {
        type Value = MysqlTime;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a (year, month, day, hour, minute, second, microsecond) tuple")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<MysqlTime, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let year = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
            let month = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
            let day = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(2, &self))?;
            let hour = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(3, &self))?;
            let minute = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(4, &self))?;
            let second = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(5, &self))?;
            let microsecond =
                seq.next_element()?.ok_or_else(|| de::Error::invalid_length(6, &self))?;
            Ok(MysqlTime { year, month, day, hour, minute, second, microsecond })
        }
    }

    impl<'de> Deserialize<'de> for MysqlTime {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_tuple(7, MysqlTimeVisitor)
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let t = MysqlTime::new(2016, 6, 13, 23, 59, 59, 123_456);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[2016,6,13,23,59,59,123456]");
        assert_eq!(serde_json::from_str::<MysqlTime>(&json).unwrap(), t);

        // Zero dates are data, not errors, and must survive verbatim.
        let t = MysqlTime::from_seconds(30_000, 7);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<MysqlTime>(&json).unwrap(), t);
    }
}
