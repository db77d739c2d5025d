//! Dispatch over the closed set of values that have an approximate form.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::{ApproxDateTime, Tolerance, datetime};

/// Where to ask for approximate forms of new types.
pub const FEATURE_REQUEST_URL: &str = "https://github.com/roughly-rs/roughly/issues/new";

/// A value submitted for approximation.
///
/// Only timestamps currently have an approximate form. Anything else is
/// captured as [`Value::Other`] with its type name; [`near()`] rejects it
/// with an error, and it never compares equal to an [`ApproxDateTime`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Value {
    /// An exact timestamp.
    DateTime(DateTime<Utc>),
    /// A value of a type with no approximate form.
    Other {
        /// Type name of the value, for error messages.
        type_name: &'static str,
    },
}

impl Value {
    /// Captures a value of a type with no approximate form.
    pub fn other<T: ?Sized>(_value: &T) -> Self {
        Value::Other {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(instant: DateTime<Tz>) -> Self {
        Value::DateTime(instant.with_timezone(&Utc))
    }
}

/// Errors returned by [`near()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum NearError {
    /// The value's type has no approximate form.
    #[error("no approximate form for `{type_name}` - make a request! {}", FEATURE_REQUEST_URL)]
    Unsupported {
        /// Type name of the rejected value.
        type_name: &'static str,
    },
    /// The argument list was not exactly one value.
    #[error("near() takes exactly one value, got {given}")]
    WrongArgumentCount {
        /// How many values were supplied.
        given: usize,
    },
}

/// Builds the approximate form of the single value in `args`.
///
/// A timestamp forwards to [`datetime::near()`]; only the tolerance may
/// accompany it, so any extra value is rejected. A value of any other type
/// is rejected with [`NearError::Unsupported`] rather than silently compared
/// exactly; unsupported types are explicit extension points.
///
/// # Errors
///
/// [`NearError::WrongArgumentCount`] unless `args` holds exactly one value;
/// [`NearError::Unsupported`] when that value is not a timestamp.
///
/// # Example
///
/// ```
/// # use chrono::Utc;
/// use roughly::{Tolerance, near};
///
/// let approx = near(&[Utc::now().into()], Tolerance::new().seconds(5))?;
/// assert_eq!(approx, Utc::now());
/// # Ok::<(), roughly::NearError>(())
/// ```
pub fn near(args: &[Value], tolerance: Tolerance) -> Result<ApproxDateTime, NearError> {
    match args {
        [Value::DateTime(instant)] => Ok(datetime::near(*instant, tolerance)),
        [Value::DateTime(_), _, ..] => Err(NearError::WrongArgumentCount { given: args.len() }),
        [Value::Other { type_name }, ..] => Err(NearError::Unsupported {
            type_name: *type_name,
        }),
        [] => Err(NearError::WrongArgumentCount { given: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).expect("timestamp in range")
    }

    #[test]
    fn test_near_datetime() {
        let now = ts(1_700_000_000);
        let not_now = now + Duration::seconds(1);
        let roughly_now =
            near(&[not_now.into()], Tolerance::new().seconds(5)).expect("timestamps are supported");
        assert_eq!(roughly_now, now);
    }

    #[test]
    fn test_near_rejects_extra_values() {
        let now = ts(1_700_000_000);
        let result = near(&[now.into(), Value::other(&"extra posarg")], Tolerance::new());
        assert_eq!(result, Err(NearError::WrongArgumentCount { given: 2 }));
    }

    #[test]
    fn test_near_requires_a_value() {
        let result = near(&[], Tolerance::new());
        assert_eq!(result, Err(NearError::WrongArgumentCount { given: 0 }));
    }

    #[test]
    fn test_not_implemented() {
        let obj = 5_u32;
        let err = near(&[Value::other(&obj)], Tolerance::new())
            .expect_err("u32 has no approximate form");
        assert!(matches!(err, NearError::Unsupported { .. }));
        assert!(err.to_string().contains(FEATURE_REQUEST_URL));
        assert!(err.to_string().contains("u32"));
    }
}
