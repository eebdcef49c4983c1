//! Per-call routing options
//!
//! Options are scoped to a single route: passed explicitly, never
//! retained or shared through globals, so every call stays independently
//! testable.

use recourse_diag::Failure;
use std::fmt;
use std::sync::Arc;

/// Observer invoked with the failure a wrapper recovers from.
type FailureHook = Arc<dyn Fn(&Failure) + Send + Sync>;

/// Options controlling how a route wrapper handles faults.
///
/// Built in the usual chained style:
///
/// ```rust
/// use recourse_core::RouteOptions;
///
/// let options = RouteOptions::new()
///     .on_failure(|failure| eprintln!("recovered: {failure}"))
///     .recover_unexpected();
/// ```
#[derive(Clone, Default)]
pub struct RouteOptions {
    /// Invoked at most once per failing invocation, synchronously
    on_failure: Option<FailureHook>,
    /// Opt-in: normalize and recover non-failure errors too
    recover_unexpected: bool,
}

impl RouteOptions {
    /// Default options: no observer, unexpected errors propagate.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe recovered failures.
    ///
    /// The hook runs synchronously with the failure being observed;
    /// side-effect isolation is the caller's responsibility.
    #[must_use]
    pub fn on_failure(mut self, hook: impl Fn(&Failure) + Send + Sync + 'static) -> Self {
        self.on_failure = Some(Arc::new(hook));
        self
    }

    /// Recover arbitrary (non-failure) errors as well.
    ///
    /// They are normalized into failures first, so the cause chain is
    /// preserved in what the hook observes.
    #[inline]
    #[must_use]
    pub fn recover_unexpected(mut self) -> Self {
        self.recover_unexpected = true;
        self
    }

    pub(crate) fn notify(&self, failure: &Failure) {
        if let Some(hook) = &self.on_failure {
            hook(failure);
        }
    }

    pub(crate) fn recovers_unexpected(&self) -> bool {
        self.recover_unexpected
    }
}

impl fmt::Debug for RouteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOptions")
            .field("on_failure", &self.on_failure.as_ref().map(|_| "<hook>"))
            .field("recover_unexpected", &self.recover_unexpected)
            .finish()
    }
}
