// This is a part of mysql-time.
// See README.md and LICENSE.txt for details.

//! Arithmetic free functions over the [`TimeFields`] contract.

use num_integer::div_rem;

use crate::internals::day_number;
use crate::TimeFields;

/// Seconds in a calendar day.
const SECONDS_PER_DAY: i64 = 86_400;

/// Computes `a - sign * b` as a signed duration with microsecond
/// resolution.
///
/// `sign` must be `1` or `-1`; with `-1` the routine effectively computes
/// `a + b`, which is how TIME arithmetic reuses it. The date parts are
/// compared through their day numbers, so the zero-date sentinel
/// contributes day 0 and two TIME-only values subtract cleanly. The
/// magnitude comes back as whole seconds plus leftover microseconds, with
/// the sign split into the final flag.
///
/// # Example
///
/// ```
/// use mysql_time::{time_difference, MysqlTime};
///
/// let a = MysqlTime::new(2017, 1, 1, 1, 1, 1, 2);
/// let b = MysqlTime::new(2017, 1, 1, 0, 0, 0, 1);
/// assert_eq!(time_difference(&a, &b, 1), (3_661, 1, false));
/// assert_eq!(time_difference(&b, &a, 1), (3_661, 1, true));
/// ```
pub fn time_difference(a: &impl TimeFields, b: &impl TimeFields, sign: i64) -> (i64, i64, bool) {
    let days = i64::from(day_number(a.year(), a.month() as i32, a.day() as i32))
        - sign * i64::from(day_number(b.year(), b.month() as i32, b.day() as i32));
    let seconds_a =
        i64::from(a.hour()) * 3600 + i64::from(a.minute()) * 60 + i64::from(a.second());
    let seconds_b =
        i64::from(b.hour()) * 3600 + i64::from(b.minute()) * 60 + i64::from(b.second());
    let mut micros = (days * SECONDS_PER_DAY + seconds_a - sign * seconds_b) * 1_000_000
        + i64::from(a.microsecond())
        - sign * i64::from(b.microsecond());
    let negative = micros < 0;
    if negative {
        micros = -micros;
    }
    let (seconds, microseconds) = div_rem(micros, 1_000_000);
    (seconds, microseconds, negative)
}

/// Packs the date and time fields into a decimal `YYYYMMDDHHMMSS`
/// integer.
///
/// The encoding is a pure projection: fields are not validated, so a
/// value that does not name a real date still packs its stored digits.
/// The date part alone reaches eight decimal digits, hence the wide
/// result type.
///
/// # Example
///
/// ```
/// use mysql_time::{datetime_to_u64, MysqlTime};
///
/// let t = MysqlTime::new(2016, 6, 13, 11, 18, 45, 76_543);
/// assert_eq!(datetime_to_u64(&t), 20_160_613_111_845);
/// ```
pub fn datetime_to_u64(t: &impl TimeFields) -> u64 {
    date_to_u64(t) * 1_000_000 + time_to_u64(t)
}

/// Packs the date fields into a decimal `YYYYMMDD` integer, without
/// validation.
pub fn date_to_u64(t: &impl TimeFields) -> u64 {
    t.year() as u64 * 10_000 + u64::from(t.month()) * 100 + u64::from(t.day())
}

/// Packs the time fields into a decimal `HHMMSS` integer, without
/// validation.
pub fn time_to_u64(t: &impl TimeFields) -> u64 {
    u64::from(t.hour()) * 10_000 + u64::from(t.minute()) * 100 + u64::from(t.second())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{date_to_u64, datetime_to_u64, time_difference, time_to_u64};
    use crate::MysqlTime;

    #[test]
    fn test_time_difference_within_a_day() {
        let a = MysqlTime::new(2017, 1, 1, 1, 1, 1, 2);
        let b = MysqlTime::new(2017, 1, 1, 0, 0, 0, 1);
        assert_eq!(time_difference(&a, &b, 1), (3_661, 1, false));
        assert_eq!(time_difference(&b, &a, 1), (3_661, 1, true));
        assert_eq!(time_difference(&a, &a, 1), (0, 0, false));
    }

    #[test]
    fn test_time_difference_across_dates() {
        let a = MysqlTime::new(2016, 12, 31, 23, 59, 59, 0);
        let b = MysqlTime::new(2017, 1, 1, 0, 0, 0, 0);
        assert_eq!(time_difference(&a, &b, 1), (1, 0, true));
        // A leap day apart.
        let a = MysqlTime::new(2016, 3, 1, 0, 0, 0, 0);
        let b = MysqlTime::new(2016, 2, 28, 0, 0, 0, 0);
        assert_eq!(time_difference(&a, &b, 1), (2 * 86_400, 0, false));
    }

    #[test]
    fn test_time_difference_negative_sign_adds() {
        let a = MysqlTime::from_seconds(3_600, 0);
        let b = MysqlTime::from_seconds(1_800, 500_000);
        assert_eq!(time_difference(&a, &b, -1), (5_400, 500_000, false));
    }

    #[test]
    fn test_time_difference_microsecond_borrow() {
        let a = MysqlTime::new(2017, 1, 1, 0, 0, 1, 0);
        let b = MysqlTime::new(2017, 1, 1, 0, 0, 0, 1);
        assert_eq!(time_difference(&a, &b, 1), (0, 999_999, false));
    }

    #[test]
    fn test_time_difference_accepts_host_values() {
        let a = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(1, 1, 1)
            .unwrap();
        let b = MysqlTime::new(2017, 1, 1, 0, 0, 0, 0);
        assert_eq!(time_difference(&a, &b, 1), (3_661, 0, false));
    }

    #[test]
    fn test_packed_encodings() {
        let t = MysqlTime::new(2016, 6, 13, 11, 18, 45, 76_543);
        assert_eq!(datetime_to_u64(&t), 20_160_613_111_845);
        assert_eq!(date_to_u64(&t), 20_160_613);
        assert_eq!(time_to_u64(&t), 111_845);
    }

    #[test]
    fn test_packed_encodings_do_not_validate() {
        // February 30 is not a date, but its digits still pack.
        let t = MysqlTime::new(2016, 2, 30, 0, 0, 0, 0);
        assert!(t.to_naive_datetime().is_err());
        assert_eq!(date_to_u64(&t), 20_160_230);
        // Zero dates pack to the time part alone.
        let t = MysqlTime::from_seconds(11 * 3600 + 22 * 60 + 33, 0);
        assert_eq!(datetime_to_u64(&t), 112_233);
        assert_eq!(date_to_u64(&t), 0);
    }
}
