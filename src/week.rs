// This is a part of mysql-time.
// See README.md and LICENSE.txt for details.

//! MySQL week numbering.
//!
//! `WEEK()` and `YEARWEEK()` accept a mode from 0 to 7 selecting one of
//! MySQL's week-numbering conventions. A mode decodes into three
//! independent policy flags, and the week number itself follows from the
//! distance between a date's day number and the start of its year's first
//! counted week, with two boundary adjustments for the partial weeks
//! around January 1.

use crate::internals::{day_number, days_in_year, weekday_from_daynr};
use crate::TimeFields;

/// Weeks start on Monday instead of Sunday.
const MONDAY_FIRST: u8 = 0b001;
/// Week numbers are relative to the week's own year (range 1 to 53)
/// instead of the date's calendar year (range 0 to 53).
const YEAR_RELATIVE: u8 = 0b010;
/// Week 1 is the first week containing a week-start day, instead of the
/// ISO 8601 rule (the first week with four or more days in the year).
const FIRST_WEEKDAY: u8 = 0b100;

/// Week numbering policy, decoded from a MySQL week mode.
///
/// The three flags are kept behind named predicates so that the boundary
/// logic in [`week_number`] reads as the rules it implements rather than
/// as bit tests.
///
/// `mode` | first day | range  | week 1 is the first week…
/// ------ | --------- | ------ | ----------------------------------
/// 0      | Sunday    | 0–53   | with a Sunday in this year
/// 1      | Monday    | 0–53   | with 4 or more days this year
/// 2      | Sunday    | 1–53   | with a Sunday in this year
/// 3      | Monday    | 1–53   | with 4 or more days this year
/// 4      | Sunday    | 0–53   | with 4 or more days this year
/// 5      | Monday    | 0–53   | with a Monday in this year
/// 6      | Sunday    | 1–53   | with 4 or more days this year
/// 7      | Monday    | 1–53   | with a Monday in this year
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct WeekFlags(u8);

impl WeekFlags {
    /// Decodes a MySQL week mode. Only the low three bits are used.
    ///
    /// Modes without the Monday-first convention implicitly number weeks
    /// from the first Sunday, so the decoder toggles the first-weekday
    /// rule for them.
    #[must_use]
    pub const fn from_mode(mode: u32) -> WeekFlags {
        let mut flags = (mode & 7) as u8;
        if flags & MONDAY_FIRST == 0 {
            flags ^= FIRST_WEEKDAY;
        }
        WeekFlags(flags)
    }

    /// Returns the same policy with year-relative numbering switched on,
    /// as `YEARWEEK()` does before delegating to the week computation.
    #[must_use]
    pub const fn with_year_relative(self) -> WeekFlags {
        WeekFlags(self.0 | YEAR_RELATIVE)
    }

    /// Weeks start on Monday rather than Sunday.
    #[inline]
    #[must_use]
    pub const fn monday_first(&self) -> bool {
        self.0 & MONDAY_FIRST != 0
    }

    /// Week numbers follow the week's own year: a date in a week that
    /// straddles January 1 numbers in the adjacent year instead of using
    /// week 0 or week 53 of its calendar year.
    #[inline]
    #[must_use]
    pub const fn year_relative(&self) -> bool {
        self.0 & YEAR_RELATIVE != 0
    }

    /// Week 1 is the first week containing the week's first day, rather
    /// than the first week with four or more days in the year.
    #[inline]
    #[must_use]
    pub const fn first_weekday(&self) -> bool {
        self.0 & FIRST_WEEKDAY != 0
    }
}

/// Computes the week number of `t` together with the year that week
/// belongs to, which near January 1 may differ from the calendar year.
///
/// Values with a zero month or day have no calendar position; for them
/// the answer is the `(0, 0)` sentinel.
///
/// # Example
///
/// ```
/// use mysql_time::{week_number, MysqlTime, WeekFlags};
///
/// // 2000-01-01 is a Saturday: week 0 of 2000 under mode 0, but the last
/// // week of 1999 once the numbering is year-relative.
/// let t = MysqlTime::new(2000, 1, 1, 0, 0, 0, 0);
/// assert_eq!(week_number(&t, WeekFlags::from_mode(0)), (2000, 0));
/// assert_eq!(week_number(&t, WeekFlags::from_mode(3)), (1999, 52));
/// ```
pub fn week_number(t: &impl TimeFields, flags: WeekFlags) -> (i32, u32) {
    if t.month() == 0 || t.day() == 0 {
        return (0, 0);
    }
    let mut year = t.year();
    let daynr = day_number(year, t.month() as i32, t.day() as i32);
    let mut first_daynr = day_number(year, 1, 1);
    let mut year_relative = flags.year_relative();
    let mut weekday = weekday_from_daynr(first_daynr, !flags.monday_first());

    // A date in the first partial week of January either numbers as week 0
    // of its calendar year or belongs to the last week of the previous
    // year. Deciding here keeps the December adjustment below from firing
    // for the same date.
    if t.month() == 1 && t.day() as i32 <= 7 - weekday {
        if !year_relative
            && ((flags.first_weekday() && weekday != 0)
                || (!flags.first_weekday() && weekday >= 4))
        {
            return (year, 0);
        }
        year_relative = true;
        year -= 1;
        let days = days_in_year(year);
        first_daynr -= days;
        weekday = (weekday + 53 * 7 - days) % 7;
    }

    // Offset from the start of the first counted week; the partial week
    // before it only counts as week 1 when the policy says it qualifies.
    let days = if (flags.first_weekday() && weekday != 0)
        || (!flags.first_weekday() && weekday >= 4)
    {
        daynr - (first_daynr + 7 - weekday)
    } else {
        daynr - (first_daynr - weekday)
    };

    // A date in the trailing partial week of December may already belong
    // to week 1 of the next year.
    if year_relative && days >= 52 * 7 {
        weekday = (weekday + days_in_year(year)) % 7;
        if (!flags.first_weekday() && weekday < 4)
            || (flags.first_weekday() && weekday == 0)
        {
            return (year + 1, 1);
        }
    }

    (year, (days / 7 + 1) as u32)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use super::{week_number, WeekFlags};
    use crate::MysqlTime;

    fn date(year: u32, month: u32, day: u32) -> MysqlTime {
        MysqlTime::new(year, month, day, 0, 0, 0, 0)
    }

    #[test]
    fn test_from_mode() {
        // Sunday-first modes pick up the first-weekday rule implicitly.
        assert!(WeekFlags::from_mode(0).first_weekday());
        assert!(!WeekFlags::from_mode(0).monday_first());
        assert!(!WeekFlags::from_mode(0).year_relative());
        assert!(WeekFlags::from_mode(1).monday_first());
        assert!(!WeekFlags::from_mode(1).first_weekday());
        assert!(WeekFlags::from_mode(3).monday_first());
        assert!(WeekFlags::from_mode(3).year_relative());
        assert!(!WeekFlags::from_mode(4).first_weekday());
        assert!(WeekFlags::from_mode(5).first_weekday());
        // Only the low three bits matter.
        assert_eq!(WeekFlags::from_mode(8), WeekFlags::from_mode(0));
        // YEARWEEK() forces year-relative numbering on top of the decode.
        assert_eq!(WeekFlags::from_mode(0).with_year_relative(), WeekFlags::from_mode(2));
        assert_eq!(WeekFlags::from_mode(3).with_year_relative(), WeekFlags::from_mode(3));
    }

    #[test]
    fn test_week_number_reference_values() {
        // WEEK() results from the MySQL reference manual.
        let cases = [
            ((2008, 2, 20), 0, (2008, 7)),
            ((2008, 2, 20), 1, (2008, 8)),
            ((2008, 12, 31), 1, (2008, 53)),
            ((2000, 1, 1), 0, (2000, 0)),
            ((2000, 1, 1), 1, (2000, 0)),
            ((2000, 1, 1), 2, (1999, 52)),
            ((2000, 1, 1), 6, (1999, 52)),
            ((2008, 12, 31), 3, (2009, 1)),
            ((1987, 1, 1), 6, (1986, 53)),
        ];
        for ((y, m, d), mode, expected) in cases {
            assert_eq!(
                week_number(&date(y, m, d), WeekFlags::from_mode(mode)),
                expected,
                "{:04}-{:02}-{:02} mode {}",
                y,
                m,
                d,
                mode
            );
        }
    }

    #[test]
    fn test_week_number_zero_date() {
        assert_eq!(week_number(&date(2015, 0, 21), WeekFlags::from_mode(0)), (0, 0));
        assert_eq!(week_number(&date(2015, 6, 0), WeekFlags::from_mode(3)), (0, 0));
        assert_eq!(week_number(&date(0, 0, 0), WeekFlags::from_mode(7)), (0, 0));
    }

    #[test]
    fn test_mode_3_matches_iso_8601() {
        // Mode 3 is documented as ISO 8601 numbering; the host calendar
        // implements the same standard. Walk over several year boundaries,
        // including 1996 (leap) and 1998 (a 53-week ISO year).
        let flags = WeekFlags::from_mode(3);
        let mut d = NaiveDate::from_ymd_opt(1995, 12, 1).unwrap();
        for _ in 0..1200 {
            let t = date(d.year() as u32, d.month(), d.day());
            let iso = d.iso_week();
            assert_eq!(week_number(&t, flags), (iso.year(), iso.week()), "at {}", d);
            d = d.succ_opt().unwrap();
        }
    }
}
