//! Built-in assessments
//!
//! Assessments are grouped by how they read at the call site:
//!
//! - [`is`] - presence checks: `is::not_null()`, `is::not_null_or_empty()`,
//!   `is::not_null_or_white_space()`
//! - [`has`] - sequence checks: `has::no_nulls()`, `has::no_duplicates()`,
//!   `has::length_equal_to(..)` and the other length bounds
//!
//! Custom assessments implement [`Assessment`](crate::foundation::Assessment)
//! or wrap a closure with [`assessment`](crate::foundation::assessment).

pub mod has;
pub mod is;

pub use has::{Length, LengthRule, NoDuplicates, NoNulls};
pub use is::{NotNull, NotNullOrEmpty, NotNullOrWhiteSpace};
