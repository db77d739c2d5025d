//! Placeholder values that compare equal by runtime type.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// Builds a placeholder that is equal to any value of type `T`.
pub fn has_type<T: Any>() -> TypeMatcher {
    TypeMatcher {
        expected: TypeId::of::<T>(),
        name: type_name::<T>(),
    }
}

/// A placeholder equal to any value of the expected type and unequal to
/// everything else.
///
/// Useful in assertions over larger structures where one field only needs
/// the right type, not a particular value. Coherence only allows the
/// placeholder on the left-hand side of `==`; use [`TypeMatcher::matches()`]
/// when the operands are the other way around.
///
/// # Example
///
/// ```
/// use roughly::has_type;
///
/// assert_eq!(has_type::<String>(), String::from("anything"));
/// assert_ne!(has_type::<String>(), 42_u32);
/// ```
#[derive(Copy, Clone)]
pub struct TypeMatcher {
    expected: TypeId,
    name: &'static str,
}

impl TypeMatcher {
    /// Returns whether `value`'s type is the expected type.
    pub fn matches<U: Any>(&self, _value: &U) -> bool {
        TypeId::of::<U>() == self.expected
    }
}

impl<U: Any> PartialEq<U> for TypeMatcher {
    fn eq(&self, other: &U) -> bool {
        self.matches(other)
    }
}

impl fmt::Debug for TypeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "has_type::<{}>()", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to_the_expected_type() {
        assert_eq!(has_type::<String>(), String::from("a string"));
        assert_eq!(has_type::<u32>(), 17_u32);
        assert!(has_type::<String>().matches(&String::new()));
    }

    #[test]
    fn test_unequal_to_other_types() {
        assert_ne!(has_type::<String>(), 17_u32);
        assert_ne!(has_type::<u32>(), String::from("not a u32"));
        assert!(!has_type::<u32>().matches(&"borrowed str"));
    }

    #[test]
    fn test_debug_names_the_expected_type() {
        let shown = format!("{:?}", has_type::<u32>());
        assert!(shown.contains("u32"));
    }
}
