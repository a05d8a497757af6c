//! Core guard types and traits
//!
//! This module contains the building blocks every guard is made of:
//!
//! - **Traits**: [`Assessment`], [`Nullable`], [`Sequence`]
//! - **Arguments**: [`Argument`], [`CallSite`], [`CallSiteKey`]
//! - **Errors**: [`GuardError`], [`GuardErrorKind`]
//! - **Reasons**: [`compose`], [`pluralize`]
//!
//! # Architecture
//!
//! An assessment never sees a raw value. It receives an [`Argument`], which
//! knows the declared name of the parameter (resolved once per call site and
//! name, then cached) and reads the value through an accessor on demand. Failures carry
//! that name together with a composed reason:
//!
//! ```rust
//! use nebula_guard::foundation::compose;
//!
//! assert_eq!(
//!     compose("Provided parameter should not be null", Some("Configure a user first")),
//!     "Configure a user first.\nProvided parameter should not be null."
//! );
//! ```

pub mod argument;
pub mod error;
pub mod reason;
pub mod traits;

pub use argument::{Argument, CallSite, CallSiteKey};
pub use error::{GuardError, GuardErrorKind, GuardResult};
pub use reason::{compose, pluralize};
pub use traits::{Assessment, Nullable, Sequence, assessment};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs assessments against an argument in order, stopping at the first
/// failure.
///
/// Every assessment receives the same `message`.
pub fn assess_all<T: ?Sized>(
    argument: &Argument<'_, T>,
    assessments: &[&dyn Assessment<T>],
    message: Option<&str>,
) -> GuardResult {
    assessments
        .iter()
        .try_for_each(|assessment| assessment.assess(argument, message))
}
