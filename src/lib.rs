//! Approximate equality for timestamps, for use in test assertions.
//!
//! [`Tolerance`] names how far apart two timestamps may be while still
//! comparing equal.
//!
//! [`ApproxDateTime`] wraps an exact timestamp with a [`Mode`] and a
//! tolerance, and overrides equality to check the resulting window instead
//! of the exact instant.
//!
//! [`near()`] is the dispatch entry point over arbitrary [`Value`]s.
//! [`datetime::near()`], [`datetime::before()`], and [`datetime::after()`]
//! build approximate timestamps directly.
//!
//! [`has_type()`] is an ancillary placeholder that compares equal by runtime
//! type rather than by value.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use roughly::Tolerance;
//! use roughly::datetime::near;
//!
//! let now = Utc::now();
//! let nearby = now + Duration::minutes(1);
//! assert_ne!(now, nearby);
//! assert_eq!(near(now, Tolerance::new().minutes(2)), nearby);
//! ```
//!
//! # Comparison semantics
//!
//! Windows are open intervals: an instant exactly on a bound is not equal.
//! When both sides of a comparison are approximate, either side's window
//! containing the other's reference instant makes them equal; see
//! [`datetime::approximately_equal()`].

pub mod datetime;
pub mod dispatch;
pub mod matcher;
pub mod mode;
pub mod tolerance;

pub use datetime::ApproxDateTime;
pub use dispatch::{FEATURE_REQUEST_URL, NearError, Value, near};
pub use matcher::{TypeMatcher, has_type};
pub use mode::Mode;
pub use tolerance::Tolerance;
