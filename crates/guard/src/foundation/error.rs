//! Error types for guard failures
//!
//! A guard failure always names the offending parameter and carries the fully
//! composed reason (see [`compose`](super::compose)). Range-style failures also
//! keep the actual value that was rejected.
//!
//! Parameter names use `Cow<'static, str>` so names captured at compile time
//! by the macros are never copied.

use std::borrow::Cow;

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A violated argument precondition.
///
/// # Examples
///
/// ```
/// use nebula_guard::foundation::{GuardError, GuardErrorKind};
///
/// let error = GuardError::null_argument("user", "Provided parameter should not be null.");
/// assert_eq!(error.kind(), GuardErrorKind::NullArgument);
/// assert_eq!(error.name(), "user");
/// assert_eq!(
///     error.to_string(),
///     "Provided parameter should not be null.\nParameter name: user"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// A required value is missing entirely.
    #[error("{message}\nParameter name: {name}")]
    NullArgument {
        /// Declared name of the parameter.
        name: Cow<'static, str>,
        /// Composed reason.
        message: String,
    },

    /// A present value lies outside the acceptable domain.
    #[error("{message}\nParameter name: {name}\nActual value was {actual}.")]
    OutOfRangeArgument {
        /// Declared name of the parameter.
        name: Cow<'static, str>,
        /// Composed reason.
        message: String,
        /// The rejected value.
        actual: String,
    },

    /// A present value is structurally ill-formed (nulls, duplicates, length).
    #[error("{message}\nParameter name: {name}")]
    InvalidArgument {
        /// Declared name of the parameter.
        name: Cow<'static, str>,
        /// Composed reason.
        message: String,
    },
}

/// The category of a [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardErrorKind {
    /// See [`GuardError::NullArgument`].
    NullArgument,
    /// See [`GuardError::OutOfRangeArgument`].
    OutOfRangeArgument,
    /// See [`GuardError::InvalidArgument`].
    InvalidArgument,
}

impl GuardErrorKind {
    /// Stable snake-case code, suitable for logs and programmatic matching.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullArgument => "null_argument",
            Self::OutOfRangeArgument => "out_of_range_argument",
            Self::InvalidArgument => "invalid_argument",
        }
    }
}

impl GuardError {
    /// Creates a [`GuardError::NullArgument`].
    pub fn null_argument(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::NullArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a [`GuardError::OutOfRangeArgument`].
    pub fn out_of_range(
        name: impl Into<Cow<'static, str>>,
        actual: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRangeArgument {
            name: name.into(),
            message: message.into(),
            actual: actual.into(),
        }
    }

    /// Creates a [`GuardError::InvalidArgument`].
    pub fn invalid_argument(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            Self::NullArgument { .. } => GuardErrorKind::NullArgument,
            Self::OutOfRangeArgument { .. } => GuardErrorKind::OutOfRangeArgument,
            Self::InvalidArgument { .. } => GuardErrorKind::InvalidArgument,
        }
    }

    /// Returns the stable code of this error's kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Declared name of the offending parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NullArgument { name, .. }
            | Self::OutOfRangeArgument { name, .. }
            | Self::InvalidArgument { name, .. } => name.as_ref(),
        }
    }

    /// The composed reason, without the parameter name.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { message, .. }
            | Self::OutOfRangeArgument { message, .. }
            | Self::InvalidArgument { message, .. } => message.as_str(),
        }
    }

    /// The rejected value, for out-of-range failures.
    #[must_use]
    pub fn actual_value(&self) -> Option<&str> {
        match self {
            Self::OutOfRangeArgument { actual, .. } => Some(actual.as_str()),
            _ => None,
        }
    }
}

/// Result of running an assessment or a guard.
pub type GuardResult = Result<(), GuardError>;

// ============================================================================
// TESTS
// ============================================================================
