//! # nebula-guard
//!
//! Guard clauses for argument precondition checks in the Nebula workflow
//! engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_guard::prelude::*;
//!
//! fn register(name: Option<&str>, roles: &[&str]) -> GuardResult {
//!     guard!(name, is::not_null_or_white_space())?;
//!     guard!(roles, has::no_duplicates(), message = "Roles must be unique")?;
//!     Ok(())
//! }
//!
//! let error = register(Some("ada"), &["admin", "admin"]).unwrap_err();
//! assert_eq!(error.name(), "roles");
//! assert_eq!(
//!     error.to_string(),
//!     "Roles must be unique.\nProvided enumerable parameter should not have duplicate \
//!      elements, but has same elements at index 0 and index 1.\nParameter name: roles"
//! );
//! ```
//!
//! ## How It Works
//!
//! [`guard!`] captures the source text of the guarded expression as the
//! parameter name and the macro location as the call site. The first call
//! for a site and name resolves a [`CallSite`](foundation::CallSite) and
//! stores it in the guard's [`ArgumentCache`]; later calls reuse it. Each
//! assessment then reads the current value through an [`Argument`](foundation::Argument).
//!
//! [`debug_guard!`] and the `debug_*` methods on [`Guard`] do the same in
//! builds with `debug_assertions` and nothing otherwise.
//!
//! ## Built-in Assessments
//!
//! - **Presence** ([`is`]): [`NotNull`](is::NotNull),
//!   [`NotNullOrEmpty`](is::NotNullOrEmpty),
//!   [`NotNullOrWhiteSpace`](is::NotNullOrWhiteSpace)
//! - **Sequences** ([`has`]): [`NoNulls`](has::NoNulls),
//!   [`NoDuplicates`](has::NoDuplicates), [`Length`](has::Length)

pub mod assessments;
pub mod cache;
pub mod config;
pub mod foundation;
pub mod guard;
mod macros;
pub mod prelude;

pub use assessments::{has, is};
pub use cache::{ArgumentCache, CacheStats};
pub use config::GuardConfig;
pub use foundation::{
    Argument, Assessment, CallSiteKey, GuardError, GuardErrorKind, GuardResult, assessment,
};
pub use guard::Guard;
