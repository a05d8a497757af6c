//! Assessments whose names start with "has"
//!
//! Structural checks for sequences: slices, vectors and arrays. All failures
//! are reported as [`GuardError::InvalidArgument`].

use std::fmt;

use crate::foundation::{
    Argument, Assessment, GuardError, GuardResult, Nullable, Sequence, compose, pluralize,
};

// ============================================================================
// NO NULLS
// ============================================================================

/// Validates that a sequence contains no missing elements.
///
/// Reports the index of the first `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoNulls;

impl<S> Assessment<S> for NoNulls
where
    S: Sequence + ?Sized,
    S::Item: Nullable,
{
    fn assess(&self, argument: &Argument<'_, S>, message: Option<&str>) -> GuardResult {
        let position = argument
            .value()
            .as_slice()
            .iter()
            .position(|item| item.present().is_none());

        match position {
            None => Ok(()),
            Some(index) => {
                let base = format!(
                    "Provided enumerable parameter should not have null(s), but had null at index {index}"
                );
                Err(GuardError::invalid_argument(
                    argument.owned_name(),
                    compose(&base, message),
                ))
            }
        }
    }
}

/// Creates a [`NoNulls`] assessment.
///
/// # Examples
///
/// ```
/// use nebula_guard::{guard, has};
///
/// let names = [Some("a"), None, Some("b")];
/// let error = guard!(names, has::no_nulls()).unwrap_err();
/// assert!(error.message().ends_with("but had null at index 1."));
/// ```
#[must_use]
pub const fn no_nulls() -> NoNulls {
    NoNulls
}

// ============================================================================
// NO DUPLICATES
// ============================================================================

/// Validates that a sequence contains no two equal elements.
///
/// Every element is compared with all elements before it, so the reported
/// pair is the first one found scanning the later index upwards. Quadratic,
/// meant for argument-sized sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoDuplicates;

impl<S> Assessment<S> for NoDuplicates
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    fn assess(&self, argument: &Argument<'_, S>, message: Option<&str>) -> GuardResult {
        let items = argument.value().as_slice();

        for (outer, later) in items.iter().enumerate().skip(1) {
            if let Some(inner) = items[..outer].iter().position(|earlier| earlier == later) {
                let base = format!(
                    "Provided enumerable parameter should not have duplicate elements, but has same elements at index {inner} and index {outer}"
                );
                return Err(GuardError::invalid_argument(
                    argument.owned_name(),
                    compose(&base, message),
                ));
            }
        }

        Ok(())
    }
}

/// Creates a [`NoDuplicates`] assessment.
///
/// # Examples
///
/// ```
/// use nebula_guard::{guard, has};
///
/// let ids = vec![1, 2, 3, 1, 4, 5];
/// let error = guard!(ids, has::no_duplicates()).unwrap_err();
/// assert!(error.message().ends_with("at index 0 and index 3."));
/// ```
#[must_use]
pub const fn no_duplicates() -> NoDuplicates {
    NoDuplicates
}

// ============================================================================
// LENGTH
// ============================================================================

/// How the actual length must relate to the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRule {
    /// `actual == expected`
    EqualTo,
    /// `actual < expected`
    LessThan,
    /// `actual > expected`
    GreaterThan,
    /// `actual <= expected`
    LessThanOrEqualTo,
    /// `actual >= expected`
    GreaterThanOrEqualTo,
}

impl LengthRule {
    /// Returns true if `actual` satisfies the rule.
    #[must_use]
    pub fn holds(self, actual: usize, expected: usize) -> bool {
        match self {
            Self::EqualTo => actual == expected,
            Self::LessThan => actual < expected,
            Self::GreaterThan => actual > expected,
            Self::LessThanOrEqualTo => actual <= expected,
            Self::GreaterThanOrEqualTo => actual >= expected,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::EqualTo => "",
            Self::LessThan => "less than ",
            Self::GreaterThan => "greater than ",
            Self::LessThanOrEqualTo => "less than or equal to ",
            Self::GreaterThanOrEqualTo => "greater than or equal to ",
        }
    }
}

/// Validates the number of elements of a sequence against a bound.
///
/// The bound is a supplier evaluated each time the assessment runs, so it
/// can depend on state that changes after the assessment is built.
#[derive(Clone, Copy)]
pub struct Length<F> {
    rule: LengthRule,
    expected: F,
}

impl<F> Length<F>
where
    F: Fn() -> usize,
{
    /// Creates a length assessment.
    pub fn new(rule: LengthRule, expected: F) -> Self {
        Self { rule, expected }
    }

    /// The rule this assessment enforces.
    pub fn rule(&self) -> LengthRule {
        self.rule
    }

    /// Evaluates the bound.
    pub fn expected(&self) -> usize {
        (self.expected)()
    }
}

impl<F> fmt::Debug for Length<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length").field("rule", &self.rule).finish()
    }
}

impl<S, F> Assessment<S> for Length<F>
where
    S: Sequence + ?Sized,
    F: Fn() -> usize,
{
    fn assess(&self, argument: &Argument<'_, S>, message: Option<&str>) -> GuardResult {
        let actual = argument.value().as_slice().len();
        let expected = self.expected();

        if self.rule.holds(actual, expected) {
            return Ok(());
        }

        let base = format!(
            "Provided array parameter should have {}{expected} {}, but has {actual} {}",
            self.rule.phrase(),
            pluralize(expected, "element", "elements"),
            pluralize(actual, "element", "elements"),
        );
        Err(GuardError::invalid_argument(
            argument.owned_name(),
            compose(&base, message),
        ))
    }
}

/// Creates an assessment requiring exactly `expected()` elements.
///
/// # Examples
///
/// ```
/// use nebula_guard::{guard, has};
///
/// let pair = [1, 2];
/// assert!(guard!(pair, has::length_equal_to(|| 2)).is_ok());
/// assert!(guard!(pair, has::length_equal_to(|| 3)).is_err());
/// ```
pub fn length_equal_to<F: Fn() -> usize>(expected: F) -> Length<F> {
    Length::new(LengthRule::EqualTo, expected)
}

/// Creates an assessment requiring fewer than `expected()` elements.
pub fn length_less_than<F: Fn() -> usize>(expected: F) -> Length<F> {
    Length::new(LengthRule::LessThan, expected)
}

/// Creates an assessment requiring more than `expected()` elements.
pub fn length_greater_than<F: Fn() -> usize>(expected: F) -> Length<F> {
    Length::new(LengthRule::GreaterThan, expected)
}

/// Creates an assessment requiring at most `expected()` elements.
pub fn length_less_than_or_equal_to<F: Fn() -> usize>(expected: F) -> Length<F> {
    Length::new(LengthRule::LessThanOrEqualTo, expected)
}

/// Creates an assessment requiring at least `expected()` elements.
pub fn length_greater_than_or_equal_to<F: Fn() -> usize>(expected: F) -> Length<F> {
    Length::new(LengthRule::GreaterThanOrEqualTo, expected)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::GuardErrorKind;
    use crate::test_support::check;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::Cell;

    #[test]
    fn test_no_nulls_reports_first_null() {
        let values = [Some("a"), None, Some("b"), None];
        let error = check(&values, &no_nulls(), None).unwrap_err();
        assert_eq!(error.kind(), GuardErrorKind::InvalidArgument);
        assert_eq!(
            error.message(),
            "Provided enumerable parameter should not have null(s), but had null at index 1."
        );
    }

    #[test]
    fn test_no_nulls_accepts() {
        assert!(check(&Vec::<Option<i32>>::new(), &no_nulls(), None).is_ok());
        assert!(check(&[Some(1)], &no_nulls(), None).is_ok());
        assert!(check(&[Some(1), Some(2)][..], &no_nulls(), None).is_ok());
    }

    #[test]
    fn test_no_duplicates_reports_pair() {
        let values = vec![1, 2, 3, 1, 4, 5];
        let error = check(&values, &no_duplicates(), Some("Unique ids")).unwrap_err();
        assert_eq!(
            error.message(),
            "Unique ids.\nProvided enumerable parameter should not have duplicate elements, \
             but has same elements at index 0 and index 3."
        );
    }

    #[test]
    fn test_no_duplicates_scans_later_index_first() {
        // (1, 2) is found before (0, 3) because index 2 is scanned before 3.
        let values = ["a", "b", "b", "a"];
        let error = check(&values, &no_duplicates(), None).unwrap_err();
        assert!(error.message().ends_with("at index 1 and index 2."));
    }

    #[test]
    fn test_no_duplicates_accepts() {
        assert!(check(&[1, 2, 3], &no_duplicates(), None).is_ok());
        assert!(check(&Vec::<i32>::new(), &no_duplicates(), None).is_ok());
        assert!(check(&[None, Some(1)], &no_duplicates(), None).is_ok());
    }

    #[test]
    fn test_no_duplicates_compares_missing_elements() {
        let error = check(&[None, Some(1), None], &no_duplicates(), None).unwrap_err();
        assert!(error.message().ends_with("at index 0 and index 2."));
    }

    #[test]
    fn test_length_equal_to_message() {
        let values = [1, 2, 3, 4, 5, 6];
        let error = check(&values, &length_equal_to(|| 1), None).unwrap_err();
        assert_eq!(
            error.message(),
            "Provided array parameter should have 1 element, but has 6 elements."
        );
    }

    #[rstest]
    #[case(LengthRule::EqualTo, 2, 2, true)]
    #[case(LengthRule::EqualTo, 2, 3, false)]
    #[case(LengthRule::LessThan, 2, 3, true)]
    #[case(LengthRule::LessThan, 3, 3, false)]
    #[case(LengthRule::GreaterThan, 1, 0, true)]
    #[case(LengthRule::GreaterThan, 0, 0, false)]
    #[case(LengthRule::LessThanOrEqualTo, 3, 3, true)]
    #[case(LengthRule::LessThanOrEqualTo, 4, 3, false)]
    #[case(LengthRule::GreaterThanOrEqualTo, 3, 3, true)]
    #[case(LengthRule::GreaterThanOrEqualTo, 2, 3, false)]
    fn test_length_rules(
        #[case] rule: LengthRule,
        #[case] actual: usize,
        #[case] expected: usize,
        #[case] passes: bool,
    ) {
        let values = vec![0u8; actual];
        let result = check(&values, &Length::new(rule, || expected), None);
        assert_eq!(result.is_ok(), passes);
        assert_eq!(rule.holds(actual, expected), passes);
    }

    #[rstest]
    #[case(LengthRule::LessThan, 1, "should have less than 1 element, but has 2 elements")]
    #[case(LengthRule::GreaterThan, 2, "should have greater than 2 elements, but has 2 elements")]
    #[case(
        LengthRule::LessThanOrEqualTo,
        0,
        "should have less than or equal to 0 elements, but has 2 elements"
    )]
    #[case(
        LengthRule::GreaterThanOrEqualTo,
        3,
        "should have greater than or equal to 3 elements, but has 2 elements"
    )]
    fn test_length_messages(
        #[case] rule: LengthRule,
        #[case] bound: usize,
        #[case] expected: &str,
    ) {
        let error = check(&[7, 8], &Length::new(rule, || bound), None).unwrap_err();
        assert!(error.message().contains(expected), "{}", error.message());
    }

    #[test]
    fn test_length_greater_than_zero() {
        assert!(check(&Vec::<i32>::new(), &length_greater_than(|| 0), None).is_err());
        assert!(check(&[1], &length_greater_than(|| 0), None).is_ok());
    }

    #[test]
    fn test_length_bound_is_deferred() {
        let bound = Cell::new(0);
        let assessment = length_equal_to(|| bound.get());
        bound.set(3);
        assert!(check(&[1, 2, 3], &assessment, None).is_ok());
        bound.set(2);
        assert!(check(&[1, 2, 3], &assessment, None).is_err());
    }

    #[test]
    fn test_length_singular_actual() {
        let error = check(&["only"], &length_greater_than(|| 1), None).unwrap_err();
        assert!(error.message().ends_with("but has 1 element."));
    }
}
