//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_guard::prelude::*;` import that brings in
//! the guard façade, the assessment modules and the core types.
//!
//! # Examples
//!
//! ```rust
//! use nebula_guard::prelude::*;
//!
//! fn tag(names: &[Option<&str>]) -> GuardResult {
//!     guard!(names, has::no_nulls(), has::length_greater_than(|| 0))
//! }
//!
//! assert!(tag(&[Some("a")]).is_ok());
//! assert_eq!(tag(&[None]).unwrap_err().kind(), GuardErrorKind::InvalidArgument);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, arguments
// ============================================================================

pub use crate::foundation::{
    Argument, Assessment, CallSiteKey, GuardError, GuardErrorKind, GuardResult, Nullable,
    Sequence, assessment,
};

// ============================================================================
// FAÇADE
// ============================================================================

pub use crate::{ArgumentCache, Guard, GuardConfig, debug_guard, guard};

// ============================================================================
// ASSESSMENTS
// ============================================================================

pub use crate::assessments::{has, is};
