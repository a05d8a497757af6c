//! Core traits for the guard system
//!
//! [`Assessment`] is the trait every precondition check implements.
//! [`Nullable`] and [`Sequence`] describe the shapes of values the built-in
//! assessments understand.

use crate::foundation::{Argument, GuardResult};

// ============================================================================
// ASSESSMENT TRAIT
// ============================================================================

/// A single precondition check applied to an [`Argument`].
///
/// Implementations must be side-effect free apart from returning the
/// failure, so running the same assessment twice yields the same outcome.
///
/// `message` is the optional caller-supplied text that is prepended to the
/// assessment's own diagnostic (see [`compose`](crate::foundation::compose)).
///
/// # Examples
///
/// ```
/// use nebula_guard::foundation::{Argument, Assessment, GuardError, GuardResult, compose};
///
/// struct Positive;
///
/// impl Assessment<i64> for Positive {
///     fn assess(&self, argument: &Argument<'_, i64>, message: Option<&str>) -> GuardResult {
///         if *argument.value() > 0 {
///             Ok(())
///         } else {
///             let reason = compose("Provided number should be positive", message);
///             Err(GuardError::out_of_range(
///                 argument.name().to_owned(),
///                 argument.value().to_string(),
///                 reason,
///             ))
///         }
///     }
/// }
/// ```
pub trait Assessment<T: ?Sized> {
    /// Checks the argument, returning the first violated precondition.
    fn assess(&self, argument: &Argument<'_, T>, message: Option<&str>) -> GuardResult;
}

impl<T, F> Assessment<T> for F
where
    T: ?Sized,
    F: Fn(&Argument<'_, T>, Option<&str>) -> GuardResult,
{
    #[inline]
    fn assess(&self, argument: &Argument<'_, T>, message: Option<&str>) -> GuardResult {
        self(argument, message)
    }
}

/// Turns a closure into an [`Assessment`].
///
/// Pins the closure to the higher-ranked signature so its argument types do
/// not need to be spelled out.
///
/// # Examples
///
/// ```
/// use nebula_guard::foundation::{Argument, GuardError, assessment};
///
/// let even = assessment(|argument: &Argument<'_, u32>, _message| {
///     if argument.value() % 2 == 0 {
///         Ok(())
///     } else {
///         Err(GuardError::invalid_argument(argument.name().to_owned(), "Odd."))
///     }
/// });
/// # let _: &dyn nebula_guard::foundation::Assessment<u32> = &even;
/// ```
pub fn assessment<T, F>(check: F) -> F
where
    T: ?Sized,
    F: Fn(&Argument<'_, T>, Option<&str>) -> GuardResult,
{
    check
}

// ============================================================================
// VALUE SHAPES
// ============================================================================

/// A value that may be missing.
///
/// `Option<T>` is the only shape that can actually be `None`; owned and
/// borrowed containers are always present, so the null checks pass for them.
pub trait Nullable {
    /// The type of the present value.
    type Target: ?Sized;

    /// Returns the value if present.
    fn present(&self) -> Option<&Self::Target>;
}

impl<T> Nullable for Option<T> {
    type Target = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl Nullable for String {
    type Target = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self)
    }
}

impl Nullable for str {
    type Target = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T> Nullable for Vec<T> {
    type Target = [T];

    #[inline]
    fn present(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Nullable for [T] {
    type Target = [T];

    #[inline]
    fn present(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Target = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        Some(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    type Target = T::Target;

    #[inline]
    fn present(&self) -> Option<&T::Target> {
        (**self).present()
    }
}

/// A contiguous sequence of elements.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Views the sequence as a slice.
    fn as_slice(&self) -> &[Self::Item];
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline]
    fn as_slice(&self) -> &[S::Item] {
        (**self).as_slice()
    }
}

// ============================================================================
// TESTS
// ============================================================================
