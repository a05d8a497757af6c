//! The guard façade
//!
//! A [`Guard`] owns an [`ArgumentCache`] and runs assessments against
//! arguments. Most code reaches it through the [`guard!`](crate::guard) macro,
//! which uses the process-wide [`Guard::global`] instance and captures the
//! parameter name and call site at compile time.

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::cache::ArgumentCache;
use crate::config::GuardConfig;
use crate::foundation::{Argument, Assessment, CallSiteKey, GuardResult, assess_all};

static GLOBAL: LazyLock<Guard> = LazyLock::new(Guard::new);

/// Runs argument assessments, caching call-site resolution.
///
/// Cloning a guard is cheap; clones share the same cache.
///
/// # Examples
///
/// ```
/// use nebula_guard::{Guard, has, is};
///
/// let guard = Guard::new();
/// let tags = vec!["a", "b"];
///
/// guard.argument("tags", &tags, &[&has::no_duplicates(), &has::length_greater_than(|| 0)])?;
/// guard.argument_with_message("title", "", Some(&is::not_null_or_empty()), "A title is required")
///     .unwrap_err();
/// # Ok::<(), nebula_guard::GuardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Guard {
    cache: ArgumentCache,
    config: GuardConfig,
}

impl Guard {
    /// Creates a guard with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GuardConfig::default())
    }

    /// Creates a guard from a configuration.
    #[must_use]
    pub fn with_config(config: GuardConfig) -> Self {
        let cache = match config.cache_capacity {
            Some(capacity) => ArgumentCache::with_capacity(capacity),
            None => ArgumentCache::new(),
        };
        tracing::debug!(
            cache_capacity = config.cache_capacity.map(std::num::NonZeroUsize::get),
            log_failures = config.log_failures,
            "created guard"
        );
        Self { cache, config }
    }

    /// Creates a guard that uses an existing cache.
    #[must_use]
    pub fn with_cache(cache: ArgumentCache) -> Self {
        let config = GuardConfig {
            cache_capacity: cache.capacity(),
            ..GuardConfig::default()
        };
        Self { cache, config }
    }

    /// The process-wide guard used by [`guard!`](crate::guard) and
    /// [`debug_guard!`](crate::debug_guard).
    pub fn global() -> &'static Guard {
        &GLOBAL
    }

    /// The call-site cache of this guard.
    pub fn cache(&self) -> &ArgumentCache {
        &self.cache
    }

    /// The configuration of this guard.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // CHECKED ENTRY POINTS
    // ------------------------------------------------------------------------

    /// Runs `assessments` in order against `value`, stopping at the first
    /// failure. An empty list does nothing.
    ///
    /// The call site is the caller's source location.
    #[track_caller]
    pub fn argument<T, N>(
        &self,
        name: N,
        value: &T,
        assessments: &[&dyn Assessment<T>],
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        self.argument_at(CallSiteKey::caller(), name, value, assessments)
    }

    /// Runs a single assessment against `value`, prepending `message` to the
    /// failure reason. `None` does nothing.
    #[track_caller]
    pub fn argument_with_message<T, N>(
        &self,
        name: N,
        value: &T,
        assessment: Option<&dyn Assessment<T>>,
        message: &str,
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        self.argument_with_message_at(CallSiteKey::caller(), name, value, assessment, message)
    }

    /// Like [`argument`](Self::argument) with an explicit call-site key.
    ///
    /// Each distinct `(key, name)` pair gets its own cache entry, so one key
    /// may be shared by several parameters.
    pub fn argument_at<T, N>(
        &self,
        key: CallSiteKey,
        name: N,
        value: &T,
        assessments: &[&dyn Assessment<T>],
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        if assessments.is_empty() {
            return Ok(());
        }
        self.run(key, name, value, assessments, None)
    }

    /// Like [`argument_with_message`](Self::argument_with_message) with an
    /// explicit call-site key.
    pub fn argument_with_message_at<T, N>(
        &self,
        key: CallSiteKey,
        name: N,
        value: &T,
        assessment: Option<&dyn Assessment<T>>,
        message: &str,
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        let Some(assessment) = assessment else {
            return Ok(());
        };
        self.run(key, name, value, &[assessment], Some(message))
    }

    // ------------------------------------------------------------------------
    // DEBUG-ONLY ENTRY POINTS
    // ------------------------------------------------------------------------

    /// [`argument`](Self::argument) in builds with `debug_assertions`;
    /// otherwise returns `Ok(())` without touching the value or the cache.
    ///
    /// The check is compiled into `nebula-guard` itself, so it follows the
    /// `debug_assertions` setting this crate was built with, which a
    /// per-package profile override can make differ from the calling crate.
    /// Use [`debug_guard!`](crate::debug_guard) to follow the caller's setting.
    #[track_caller]
    #[inline]
    pub fn debug_argument<T, N>(
        &self,
        name: N,
        value: &T,
        assessments: &[&dyn Assessment<T>],
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        if cfg!(debug_assertions) {
            self.argument(name, value, assessments)
        } else {
            Ok(())
        }
    }

    /// [`argument_with_message`](Self::argument_with_message) in builds with
    /// `debug_assertions`; otherwise returns `Ok(())`.
    ///
    /// Follows this crate's `debug_assertions` setting, like
    /// [`debug_argument`](Self::debug_argument).
    #[track_caller]
    #[inline]
    pub fn debug_argument_with_message<T, N>(
        &self,
        name: N,
        value: &T,
        assessment: Option<&dyn Assessment<T>>,
        message: &str,
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        if cfg!(debug_assertions) {
            self.argument_with_message(name, value, assessment, message)
        } else {
            Ok(())
        }
    }

    fn run<T, N>(
        &self,
        key: CallSiteKey,
        name: N,
        value: &T,
        assessments: &[&dyn Assessment<T>],
        message: Option<&str>,
    ) -> GuardResult
    where
        T: ?Sized,
        N: Into<Cow<'static, str>>,
    {
        let site = self.cache.resolve::<T>(key, name);
        let accessor = || value;
        let argument = Argument::new(site, &accessor);

        let result = assess_all(&argument, assessments, message);
        if let Err(error) = &result
            && self.config.log_failures
        {
            tracing::debug!(
                call_site = %key,
                parameter = error.name(),
                code = error.code(),
                "guard rejected argument"
            );
        }
        result
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
