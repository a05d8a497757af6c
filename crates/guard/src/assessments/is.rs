//! Assessments whose names start with "is"
//!
//! Presence checks for single values.
//!
//! # Assessments
//!
//! - [`NotNull`] - the value is present
//! - [`NotNullOrEmpty`] - the string is present and not `""`
//! - [`NotNullOrWhiteSpace`] - the string is present and not blank
//!
//! # Examples
//!
//! ```rust
//! use nebula_guard::{guard, is};
//!
//! let user: Option<&str> = None;
//! let error = guard!(user, is::not_null()).unwrap_err();
//! assert_eq!(error.name(), "user");
//! ```

use crate::foundation::{Argument, Assessment, GuardError, GuardResult, Nullable, compose};

// ============================================================================
// NOT NULL
// ============================================================================

/// Validates that a value is present.
///
/// Fails with [`GuardError::NullArgument`] for `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotNull;

impl<T> Assessment<T> for NotNull
where
    T: Nullable + ?Sized,
{
    fn assess(&self, argument: &Argument<'_, T>, message: Option<&str>) -> GuardResult {
        match argument.value().present() {
            Some(_) => Ok(()),
            None => Err(GuardError::null_argument(
                argument.owned_name(),
                compose("Provided parameter should not be null", message),
            )),
        }
    }
}

/// Creates a [`NotNull`] assessment.
#[must_use]
pub const fn not_null() -> NotNull {
    NotNull
}

// ============================================================================
// NOT NULL OR EMPTY
// ============================================================================

/// Validates that a string is present and not empty.
///
/// Fails with [`GuardError::NullArgument`] for `None` and with
/// [`GuardError::OutOfRangeArgument`] for `""`. Whitespace is not trimmed, so
/// `" "` passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotNullOrEmpty;

impl<T> Assessment<T> for NotNullOrEmpty
where
    T: Nullable + ?Sized,
    T::Target: AsRef<str>,
{
    fn assess(&self, argument: &Argument<'_, T>, message: Option<&str>) -> GuardResult {
        let Some(value) = argument.value().present() else {
            return Err(null_string(argument, message));
        };

        let value = value.as_ref();
        if value.is_empty() {
            return Err(GuardError::out_of_range(
                argument.owned_name(),
                value,
                compose("Provided string should not be empty", message),
            ));
        }

        Ok(())
    }
}

/// Creates a [`NotNullOrEmpty`] assessment.
#[must_use]
pub const fn not_null_or_empty() -> NotNullOrEmpty {
    NotNullOrEmpty
}

// ============================================================================
// NOT NULL OR WHITE SPACE
// ============================================================================

/// Validates that a string is present and contains something besides
/// whitespace.
///
/// Fails with [`GuardError::NullArgument`] for `None` and with
/// [`GuardError::OutOfRangeArgument`] for empty or whitespace-only strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotNullOrWhiteSpace;

impl<T> Assessment<T> for NotNullOrWhiteSpace
where
    T: Nullable + ?Sized,
    T::Target: AsRef<str>,
{
    fn assess(&self, argument: &Argument<'_, T>, message: Option<&str>) -> GuardResult {
        let Some(value) = argument.value().present() else {
            return Err(null_string(argument, message));
        };

        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(GuardError::out_of_range(
                argument.owned_name(),
                value,
                compose("Provided string should not be empty or white space", message),
            ));
        }

        Ok(())
    }
}

/// Creates a [`NotNullOrWhiteSpace`] assessment.
#[must_use]
pub const fn not_null_or_white_space() -> NotNullOrWhiteSpace {
    NotNullOrWhiteSpace
}

fn null_string<T: ?Sized>(argument: &Argument<'_, T>, message: Option<&str>) -> GuardError {
    GuardError::null_argument(
        argument.owned_name(),
        compose("Provided string should not be null", message),
    )
}

// ============================================================================
// TESTS
// ============================================================================
