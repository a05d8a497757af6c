//! Argument wrappers and call-site identity
//!
//! An [`Argument`] pairs the declared name of a parameter with a live accessor
//! to its value. The name half is resolved once per call site and name and
//! cached as a [`CallSite`]; the value half is bound fresh on every guard call.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::Location;
use std::sync::Arc;

// ============================================================================
// CALL SITE KEY
// ============================================================================

/// Stable identity of the place in source code where a guard is invoked.
///
/// Built at compile time by the [`guard!`](crate::guard) macro, or from
/// [`Location::caller`] by the `#[track_caller]` methods on
/// [`Guard`](crate::Guard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallSiteKey {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSiteKey {
    /// Creates a key from a source location.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Creates a key for the caller of the current `#[track_caller]` frame.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Source file of the call site.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of the call site.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for CallSiteKey {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for CallSiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ============================================================================
// CALL SITE
// ============================================================================

/// The resolved, cacheable half of an argument wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    key: CallSiteKey,
    name: Cow<'static, str>,
    type_name: &'static str,
}

impl CallSite {
    /// Creates a call site for a parameter of type `T`.
    pub fn new<T: ?Sized>(key: CallSiteKey, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            name: name.into(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Key of this call site.
    #[must_use]
    pub fn key(&self) -> CallSiteKey {
        self.key
    }

    /// Declared name of the guarded parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the guarded parameter.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn name_cow(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

// ============================================================================
// ARGUMENT
// ============================================================================

/// A guarded parameter: its cached call site plus a live value accessor.
///
/// The accessor is invoked on every [`value`](Self::value) call, so an
/// assessment always observes the value as it is when the assessment runs.
///
/// Equality and hashing only consider the call-site key. Arguments of
/// different value types cannot be compared at all.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use nebula_guard::foundation::{Argument, CallSite, CallSiteKey};
///
/// let name = String::from("alice");
/// let site = Arc::new(CallSite::new::<String>(CallSiteKey::new("lib.rs", 10, 5), "name"));
/// let accessor = || &name;
/// let argument = Argument::new(site, &accessor);
///
/// assert_eq!(argument.name(), "name");
/// assert_eq!(argument.value(), "alice");
/// ```
pub struct Argument<'a, T: ?Sized> {
    site: Arc<CallSite>,
    accessor: &'a (dyn Fn() -> &'a T + 'a),
}

impl<'a, T: ?Sized> Argument<'a, T> {
    /// Creates an argument from a resolved call site and a value accessor.
    pub fn new(site: Arc<CallSite>, accessor: &'a (dyn Fn() -> &'a T + 'a)) -> Self {
        Self { site, accessor }
    }

    /// Current value of the parameter.
    #[inline]
    pub fn value(&self) -> &'a T {
        (self.accessor)()
    }

    /// Declared name of the parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        self.site.name()
    }

    /// Call-site key this argument was resolved for.
    #[must_use]
    pub fn key(&self) -> CallSiteKey {
        self.site.key()
    }

    /// The cached call site.
    #[must_use]
    pub fn site(&self) -> &Arc<CallSite> {
        &self.site
    }

    /// Owned copy of the parameter name, for building errors.
    pub(crate) fn owned_name(&self) -> Cow<'static, str> {
        self.site.name_cow()
    }
}

impl<T: ?Sized> Clone for Argument<'_, T> {
    fn clone(&self) -> Self {
        Self {
            site: Arc::clone(&self.site),
            accessor: self.accessor,
        }
    }
}

impl<T: ?Sized> PartialEq for Argument<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T: ?Sized> Eq for Argument<'_, T> {}

impl<T: ?Sized> Hash for Argument<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Argument<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("key", &self.key())
            .field("name", &self.name())
            .field("type", &self.site.type_name())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
