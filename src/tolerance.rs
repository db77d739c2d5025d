//! Tolerance windows expressed as named time-unit offsets.

use chrono::{DateTime, Duration, Months, Utc};

/// A set of named time-unit offsets defining how far from a reference
/// timestamp a value may lie and still compare equal.
///
/// Each unit is set at most once; setting a unit again overwrites the previous
/// value. Offsets may be negative. Every unit contributes when a bound is
/// computed, so `minutes(1).seconds(30)` is a 90-second offset.
///
/// Months and years are calendar-aware: they shift by whole months (clamping
/// the day-of-month where needed) rather than by a fixed number of seconds.
/// All other units have fixed lengths.
///
/// # Example
///
/// ```
/// use roughly::Tolerance;
///
/// let tol = Tolerance::new().minutes(1).seconds(30);
/// assert_eq!(tol, Tolerance::new().seconds(30).minutes(1));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tolerance {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    microseconds: i64,
}

impl Tolerance {
    /// Constructs an empty tolerance. Every unit offset is zero.
    pub const fn new() -> Self {
        Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
            microseconds: 0,
        }
    }

    /// Sets the offset in calendar years.
    pub const fn years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }
    /// Sets the offset in calendar months.
    pub const fn months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }
    /// Sets the offset in weeks.
    pub const fn weeks(mut self, weeks: i64) -> Self {
        self.weeks = weeks;
        self
    }
    /// Sets the offset in days.
    pub const fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }
    /// Sets the offset in hours.
    pub const fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }
    /// Sets the offset in minutes.
    pub const fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }
    /// Sets the offset in seconds.
    pub const fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }
    /// Sets the offset in milliseconds.
    pub const fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = milliseconds;
        self
    }
    /// Sets the offset in microseconds.
    pub const fn microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Shifts a copy of `instant` by the whole tolerance in the given
    /// direction: `1` for the upper bound, `-1` for the lower bound.
    ///
    /// Returns `None` when the shifted instant leaves the representable
    /// range.
    pub(crate) fn apply(&self, instant: DateTime<Utc>, sign: i64) -> Option<DateTime<Utc>> {
        let months = self
            .years
            .checked_mul(12)?
            .checked_add(self.months)?
            .checked_mul(sign)?;
        let shifted = shift_months(instant, months)?;
        let delta = self.fixed_delta()?;
        match sign >= 0 {
            true => shifted.checked_add_signed(delta),
            false => shifted.checked_sub_signed(delta),
        }
    }

    /// Sums the fixed-length units into a single [`Duration`].
    fn fixed_delta(&self) -> Option<Duration> {
        let mut total = Duration::try_weeks(self.weeks)?;
        total = total.checked_add(&Duration::try_days(self.days)?)?;
        total = total.checked_add(&Duration::try_hours(self.hours)?)?;
        total = total.checked_add(&Duration::try_minutes(self.minutes)?)?;
        total = total.checked_add(&Duration::try_seconds(self.seconds)?)?;
        total = total.checked_add(&Duration::try_milliseconds(self.milliseconds)?)?;
        total.checked_add(&Duration::microseconds(self.microseconds))
    }
}

/// Calendar-aware month shift. Months have no fixed length, so this goes
/// through [`Months`] instead of [`Duration`].
fn shift_months(instant: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    if months == 0 {
        return Some(instant);
    }
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    match months > 0 {
        true => instant.checked_add_months(Months::new(magnitude)),
        false => instant.checked_sub_months(Months::new(magnitude)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).expect("timestamp in range")
    }

    #[test]
    fn test_units_compose() {
        let t = ts(1_700_000_000);
        let tol = Tolerance::new().minutes(1).seconds(30);
        assert_eq!(tol.apply(t, 1), Some(t + Duration::seconds(90)));
        assert_eq!(tol.apply(t, -1), Some(t - Duration::seconds(90)));
    }

    #[test]
    fn test_setting_a_unit_again_overwrites() {
        let t = ts(1_700_000_000);
        let tol = Tolerance::new().seconds(10).seconds(2);
        assert_eq!(tol.apply(t, 1), Some(t + Duration::seconds(2)));
    }

    #[test]
    fn test_negative_offsets() {
        let t = ts(1_700_000_000);
        let tol = Tolerance::new().seconds(-5);
        assert_eq!(tol.apply(t, 1), Some(t - Duration::seconds(5)));
        assert_eq!(tol.apply(t, -1), Some(t + Duration::seconds(5)));
    }

    #[test]
    fn test_month_shift_clamps_day_of_month() {
        let t = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).single().expect("valid date");
        let end_of_february = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).single().expect("valid date");
        assert_eq!(Tolerance::new().months(1).apply(t, 1), Some(end_of_february));
    }

    #[test]
    fn test_years_are_twelve_months() {
        let t = Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).single().expect("valid date");
        let next_year = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).single().expect("valid date");
        assert_eq!(Tolerance::new().years(1).apply(t, 1), Some(next_year));
    }

    #[test]
    fn test_out_of_range_offset_is_none() {
        let t = ts(1_700_000_000);
        assert_eq!(Tolerance::new().weeks(i64::MAX).apply(t, 1), None);
        assert_eq!(Tolerance::new().days(i64::MAX / 2).apply(t, -1), None);
    }

    #[test]
    fn test_empty_tolerance_is_identity() {
        let t = ts(1_700_000_000);
        assert_eq!(Tolerance::new().apply(t, 1), Some(t));
        assert_eq!(Tolerance::new().apply(t, -1), Some(t));
    }
}
