//! # Temporal — Injectable Time Source
//!
//! Defines the [`TimeProvider`] capability the builder draws its validity
//! window from, plus two implementations:
//!
//! - [`SystemClock`] — the local wall clock.
//! - [`FixedClock`] — a frozen instant, for deterministic generation and tests.
//!
//! ## Format
//!
//! All timestamps are rendered as `YYYY-MM-DD HH:MM:SS`: 24-hour, zero-padded,
//! local time, no offset suffix, no sub-seconds.
//!
//! ## Year Arithmetic
//!
//! "N years" means exactly `N * 365` days. Leap days are not compensated,
//! so ten years from `2024-01-01 00:00:00` is `2033-12-29 00:00:00`.

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::error::ClockError;

/// `strftime` pattern shared by every provider.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Days counted per year by [`advance_years`].
pub const DAYS_PER_YEAR: i64 = 365;

/// Supplies "now" and "now + N years" as formatted strings.
pub trait TimeProvider {
    /// The present moment, formatted with [`TIMESTAMP_FORMAT`].
    fn current_time(&self) -> String;

    /// The present moment advanced by `years * 365` days.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Overflow`] if the result falls outside the
    /// calendar range `chrono` can represent.
    fn future_time(&self, years: u32) -> Result<String, ClockError>;
}

impl<T: TimeProvider + ?Sized> TimeProvider for &T {
    fn current_time(&self) -> String {
        (**self).current_time()
    }

    fn future_time(&self, years: u32) -> Result<String, ClockError> {
        (**self).future_time(years)
    }
}

/// Render an instant in the license timestamp format.
pub fn format_timestamp(instant: &NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ClockError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|e| {
        ClockError::InvalidTimestamp {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Advance `instant` by `years * 365` days.
pub fn advance_years(instant: NaiveDateTime, years: u32) -> Result<NaiveDateTime, ClockError> {
    let overflow = || ClockError::Overflow {
        from: format_timestamp(&instant),
        years,
    };
    let delta = TimeDelta::try_days(i64::from(years) * DAYS_PER_YEAR).ok_or_else(overflow)?;
    instant.checked_add_signed(delta).ok_or_else(overflow)
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    fn now() -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

impl TimeProvider for SystemClock {
    fn current_time(&self) -> String {
        format_timestamp(&Self::now())
    }

    fn future_time(&self, years: u32) -> Result<String, ClockError> {
        advance_years(Self::now(), years).map(|t| format_timestamp(&t))
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Freeze the clock at `instant`, truncated to whole seconds.
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: instant.with_nanosecond(0).unwrap_or(instant),
        }
    }

    /// Freeze the clock at a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn parse(s: &str) -> Result<Self, ClockError> {
        parse_timestamp(s).map(Self::new)
    }

    /// The frozen instant.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }
}

impl TimeProvider for FixedClock {
    fn current_time(&self) -> String {
        format_timestamp(&self.instant)
    }

    fn future_time(&self, years: u32) -> Result<String, ClockError> {
        advance_years(self.instant, years).map(|t| format_timestamp(&t))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// `future_time(n)` is exactly `n * 365` days after `current_time()`.
        #[test]
        fn future_time_advances_fixed_day_count(
            epoch_secs in 0i64..4_102_444_800,
            years in 0u32..200,
        ) {
            let start = chrono::DateTime::from_timestamp(epoch_secs, 0).unwrap().naive_utc();
            let clock = FixedClock::new(start);
            let now = parse_timestamp(&clock.current_time()).unwrap();
            let future = parse_timestamp(&clock.future_time(years).unwrap()).unwrap();
            prop_assert_eq!((future - now).num_seconds(), i64::from(years) * 365 * 86_400);
        }
    }
}
