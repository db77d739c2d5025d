//! Comparison modes for approximate timestamps.

use std::fmt;

/// Strategy used when an approximate timestamp is compared for equality.
///
/// The mode decides which bound(s) of the comparison window are checked; see
/// [`ApproxDateTime`](crate::ApproxDateTime) for the window itself.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Ordinary exact equality. The tolerance is ignored.
    #[default]
    Exact,
    /// Equal to any instant strictly before the upper bound.
    Before,
    /// Equal to any instant strictly after the lower bound.
    After,
    /// Equal to any instant strictly between the lower and upper bounds.
    Within,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Exact => "exact",
            Mode::Before => "before",
            Mode::After => "after",
            Mode::Within => "within",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(Mode::default(), Mode::Exact);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Within.to_string(), "within");
        assert_eq!(Mode::Exact.to_string(), "exact");
    }
}
