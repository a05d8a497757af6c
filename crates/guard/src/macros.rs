//! Macros for guarding arguments with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`guard!`] - Run assessments against an argument, naming it after the
//!   guarded expression
//! - [`debug_guard!`] - Same as [`guard!`], compiled away without
//!   `debug_assertions`
//!
//! # Examples
//!
//! ```rust
//! use nebula_guard::{debug_guard, guard, has, is};
//!
//! fn rename(title: Option<&str>, tags: &[&str]) -> Result<(), nebula_guard::GuardError> {
//!     guard!(title, is::not_null_or_white_space())?;
//!     guard!(tags, has::no_duplicates(), message = "Tags must be unique")?;
//!     debug_guard!(tags, has::length_less_than(|| 16))?;
//!     Ok(())
//! }
//!
//! let error = rename(Some("  "), &[]).unwrap_err();
//! assert_eq!(error.name(), "title");
//! ```

// ============================================================================
// GUARD MACRO
// ============================================================================

/// Runs assessments against an argument and returns a
/// [`GuardResult`](crate::GuardResult).
///
/// The parameter name is the source text of the guarded expression, and the
/// call site is the location of the macro invocation. Together they select a
/// cache entry in the guard, so a macro expanding several `guard!` calls at
/// one location still reports each parameter by its own name.
///
/// # Forms
///
/// **Assessment list**, run in order until one fails (an empty list does
/// nothing):
/// ```rust
/// # use nebula_guard::{guard, is};
/// let name = Some("alice");
/// guard!(name, is::not_null(), is::not_null_or_empty())?;
/// # Ok::<(), nebula_guard::GuardError>(())
/// ```
///
/// **Single assessment with a message** prepended to the failure reason:
/// ```rust
/// # use nebula_guard::{guard, is};
/// let name: Option<&str> = None;
/// let error = guard!(name, is::not_null(), message = "A name is required").unwrap_err();
/// assert_eq!(
///     error.message(),
///     "A name is required.\nProvided parameter should not be null."
/// );
/// ```
///
/// **Explicit guard** instead of [`Guard::global`](crate::Guard::global):
/// ```rust
/// # use nebula_guard::{Guard, guard, is};
/// let guard = Guard::new();
/// let name = Some("alice");
/// guard!(in guard; name, is::not_null())?;
/// assert_eq!(guard.cache().len(), 1);
/// # Ok::<(), nebula_guard::GuardError>(())
/// ```
#[macro_export]
macro_rules! guard {
    (in $guard:expr; $value:expr, $assessment:expr, message = $message:expr $(,)?) => {
        $guard.argument_with_message_at(
            $crate::CallSiteKey::new(::core::file!(), ::core::line!(), ::core::column!()),
            ::core::stringify!($value),
            &$value,
            ::core::option::Option::Some(&$assessment),
            $message,
        )
    };

    (in $guard:expr; $value:expr $(, $assessment:expr)* $(,)?) => {
        $guard.argument_at(
            $crate::CallSiteKey::new(::core::file!(), ::core::line!(), ::core::column!()),
            ::core::stringify!($value),
            &$value,
            &[$(&$assessment),*],
        )
    };

    ($value:expr, $assessment:expr, message = $message:expr $(,)?) => {
        $crate::guard!(in $crate::Guard::global(); $value, $assessment, message = $message)
    };

    ($value:expr $(, $assessment:expr)* $(,)?) => {
        $crate::guard!(in $crate::Guard::global(); $value $(, $assessment)*)
    };
}

// ============================================================================
// DEBUG GUARD MACRO
// ============================================================================

/// [`guard!`] in builds with `debug_assertions`, `Ok(())` otherwise.
///
/// Accepts every form of [`guard!`]. Like [`debug_assert!`], the arguments
/// are still type-checked in release builds but never evaluated, so the
/// guarded value is not read and the cache is not touched.
///
/// ```rust
/// # use nebula_guard::{debug_guard, is};
/// let value: Option<u8> = None;
/// let result = debug_guard!(value, is::not_null());
/// assert_eq!(result.is_err(), cfg!(debug_assertions));
/// ```
#[macro_export]
macro_rules! debug_guard {
    ($($tokens:tt)*) => {
        if ::core::cfg!(debug_assertions) {
            $crate::guard!($($tokens)*)
        } else {
            ::core::result::Result::<(), $crate::GuardError>::Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Guard, GuardErrorKind, has, is};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_is_expression_text() {
        let guard = Guard::new();
        let user_name: Option<&str> = None;
        let error = guard!(in guard; user_name, is::not_null()).unwrap_err();
        assert_eq!(error.name(), "user_name");
    }

    #[test]
    fn test_field_expression_name() {
        struct Request {
            tags: Vec<&'static str>,
        }

        let guard = Guard::new();
        let request = Request { tags: vec!["a", "a"] };
        let error = guard!(in guard; request.tags, has::no_duplicates()).unwrap_err();
        assert_eq!(error.name(), "request.tags");
    }

    #[test]
    fn test_assessments_run_in_order() {
        let guard = Guard::new();
        let title = Some("");
        let error = guard!(in guard; title, is::not_null(), is::not_null_or_empty(), is::not_null())
            .unwrap_err();
        assert_eq!(error.kind(), GuardErrorKind::OutOfRangeArgument);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let guard = Guard::new();
        let value = 3;
        assert!(guard!(in guard; value).is_ok());
        assert!(guard.cache().is_empty());
    }

    #[test]
    fn test_trailing_comma() {
        let guard = Guard::new();
        let value = Some(1);
        assert!(guard!(in guard; value, is::not_null(),).is_ok());
        assert!(guard!(in guard; value, is::not_null(), message = "m",).is_ok());
    }

    #[test]
    fn test_message_form() {
        let guard = Guard::new();
        let values = [1, 2];
        let error = guard!(in guard; values, has::length_equal_to(|| 3), message = "Need three")
            .unwrap_err();
        assert_eq!(
            error.message(),
            "Need three.\nProvided array parameter should have 3 elements, but has 2 elements."
        );
    }

    #[test]
    fn test_call_site_is_macro_location() {
        let guard = Guard::new();
        let value = Some(1);
        let line = line!() + 1;
        guard!(in guard; value, is::not_null()).unwrap();

        let stats = guard.cache().stats();
        assert_eq!(stats.entries, 1);
        let key = crate::CallSiteKey::new(file!(), line, 9);
        let site = guard.cache().peek::<Option<i32>>(key, "value").unwrap();
        assert_eq!(site.name(), "value");
    }

    macro_rules! require_all {
        ($guard:expr; $($value:ident),+) => {
            (|| -> $crate::GuardResult {
                $( guard!(in $guard; $value, is::not_null())?; )+
                Ok(())
            })()
        };
    }

    #[test]
    fn test_nested_macro_reports_each_name() {
        let guard = Guard::new();
        let width = Some(3);
        let height: Option<i32> = None;

        let error = require_all!(guard; width, height).unwrap_err();

        assert_eq!(error.name(), "height");
        assert_eq!(guard.cache().len(), 2);
    }

    #[test]
    fn test_debug_guard() {
        let guard = Guard::new();
        let value: Option<u8> = None;
        let result = debug_guard!(in guard; value, is::not_null());
        if cfg!(debug_assertions) {
            assert_eq!(result.unwrap_err().name(), "value");
        } else {
            assert!(result.is_ok());
            assert!(guard.cache().is_empty());
        }
    }
}
