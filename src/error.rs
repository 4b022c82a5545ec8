use core::fmt;

use chrono::NaiveDateTime;

/// The error raised when a [`MysqlTime`](crate::MysqlTime) does not name a
/// real calendar instant.
///
/// Normalization still produces the *nearest* real instant in that case,
/// and the error keeps it for diagnostics. Its fields differ from the
/// value the caller started from, so it must not be used to answer
/// calendar-derived queries on the original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTimeError {
    nearest: NaiveDateTime,
}

impl InvalidTimeError {
    #[inline]
    pub(crate) fn new(nearest: NaiveDateTime) -> InvalidTimeError {
        InvalidTimeError { nearest }
    }

    /// The nearest real instant produced by normalization.
    #[inline]
    #[must_use]
    pub fn nearest(&self) -> NaiveDateTime {
        self.nearest
    }
}

impl fmt::Display for InvalidTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time format: nearest valid instant is {}", self.nearest)
    }
}

impl std::error::Error for InvalidTimeError {}
