//! Approximate timestamps and the range-containment comparator.

use chrono::{DateTime, TimeZone, Utc};

use crate::{Mode, Tolerance, Value};

/// A timestamp wrapped with a comparison [`Mode`] and a [`Tolerance`],
/// altering its equality semantics.
///
/// Instead of matching exactly, equality checks whether the other instant
/// falls in the window derived from the tolerance around the reference
/// instant. The window is an open interval: an instant exactly on a bound is
/// not equal.
///
/// All fields are set at construction and never mutated, so sharing a value
/// across threads is safe; equality is a pure predicate.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use roughly::datetime::near;
/// use roughly::Tolerance;
///
/// let now = Utc::now();
/// let nearby = now + Duration::minutes(1);
/// assert_eq!(near(now, Tolerance::new().minutes(2)), nearby);
/// assert_ne!(near(now, Tolerance::new().seconds(30)), nearby);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct ApproxDateTime {
    instant: DateTime<Utc>,
    mode: Mode,
    tolerance: Tolerance,
}

impl ApproxDateTime {
    /// Wraps an exact timestamp in its identity approximate form:
    /// [`Mode::Exact`] with an empty tolerance.
    ///
    /// The wrapped value is equal to exactly the same instants as the
    /// original, which lets comparison code treat exact and approximate
    /// values uniformly.
    pub fn wrap<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
            mode: Mode::default(),
            tolerance: Tolerance::new(),
        }
    }

    /// Returns a copy with the given mode and tolerance around the same
    /// reference instant.
    #[must_use]
    pub fn configure(self, mode: Mode, tolerance: Tolerance) -> Self {
        Self {
            mode,
            tolerance,
            ..self
        }
    }

    /// The exact reference timestamp.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The comparison mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The tolerance around the reference timestamp.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Computes the `(lower, upper)` bounds of the comparison window.
    ///
    /// Bounds are derived fresh on every call, never cached. A tolerance
    /// large enough to push a bound outside the representable range clamps
    /// that bound to `DateTime::<Utc>::MIN_UTC` or `DateTime::<Utc>::MAX_UTC`.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.lower(), self.upper())
    }

    fn lower(&self) -> DateTime<Utc> {
        self.tolerance
            .apply(self.instant, -1)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn upper(&self) -> DateTime<Utc> {
        self.tolerance
            .apply(self.instant, 1)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns whether `instant` satisfies this value's mode.
    ///
    /// [`Mode::Within`] checks the open interval between both bounds,
    /// [`Mode::Before`] only the upper bound, [`Mode::After`] only the lower
    /// bound. [`Mode::Exact`] is ordinary equality and ignores the tolerance.
    pub fn matches(&self, instant: DateTime<Utc>) -> bool {
        match self.mode {
            Mode::Exact => self.instant == instant,
            Mode::Before => instant < self.upper(),
            Mode::After => instant > self.lower(),
            Mode::Within => self.lower() < instant && instant < self.upper(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ApproxDateTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::wrap(instant)
    }
}

/// Returns whether two approximate timestamps compare equal.
///
/// `b` is asked first whether its own window contains `a`'s reference
/// instant; if so the values are equal and `a`'s window is not consulted.
/// Otherwise `a`'s window is checked against `b`'s reference instant. The
/// result is the OR of the two one-sided checks, so two values with
/// different tolerances are equal in both orders whenever either window
/// reaches the other's reference.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use roughly::datetime::near;
/// use roughly::Tolerance;
///
/// let now = Utc::now();
/// let later = now + Duration::seconds(20);
/// let first = near(now, Tolerance::new().seconds(10));
/// let second = near(later, Tolerance::new().seconds(30));
/// // first's own window does not reach later, but second's reaches now.
/// assert_eq!(first, second);
/// assert_eq!(second, first);
/// ```
pub fn approximately_equal(a: &ApproxDateTime, b: &ApproxDateTime) -> bool {
    b.matches(a.instant) || a.matches(b.instant)
}

impl PartialEq for ApproxDateTime {
    fn eq(&self, other: &Self) -> bool {
        approximately_equal(self, other)
    }
}

impl<Tz: TimeZone> PartialEq<DateTime<Tz>> for ApproxDateTime {
    fn eq(&self, other: &DateTime<Tz>) -> bool {
        self.matches(other.with_timezone(&Utc))
    }
}

impl PartialEq<ApproxDateTime> for DateTime<Utc> {
    fn eq(&self, other: &ApproxDateTime) -> bool {
        other.matches(*self)
    }
}

// Comparing against a non-timestamp value is never an error; it is unequal.
impl PartialEq<Value> for ApproxDateTime {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::DateTime(instant) => self.matches(*instant),
            Value::Other { .. } => false,
        }
    }
}

impl PartialEq<ApproxDateTime> for Value {
    fn eq(&self, other: &ApproxDateTime) -> bool {
        other == self
    }
}

/// Builds an approximate timestamp equal to anything strictly within
/// `tolerance` of `instant`.
pub fn near<Tz: TimeZone>(instant: DateTime<Tz>, tolerance: Tolerance) -> ApproxDateTime {
    approximate(instant, Mode::Within, tolerance)
}

/// Builds an approximate timestamp equal to anything strictly before
/// `instant` shifted forward by `tolerance`.
pub fn before<Tz: TimeZone>(instant: DateTime<Tz>, tolerance: Tolerance) -> ApproxDateTime {
    approximate(instant, Mode::Before, tolerance)
}

/// Builds an approximate timestamp equal to anything strictly after
/// `instant` shifted backward by `tolerance`.
pub fn after<Tz: TimeZone>(instant: DateTime<Tz>, tolerance: Tolerance) -> ApproxDateTime {
    approximate(instant, Mode::After, tolerance)
}

fn approximate<Tz: TimeZone>(
    instant: DateTime<Tz>,
    mode: Mode,
    tolerance: Tolerance,
) -> ApproxDateTime {
    ApproxDateTime::wrap(instant).configure(mode, tolerance)
}
