//! Failure routing
//!
//! [`Route`] converts an expected failure inside a fallible computation
//! into a caller-supplied fallback value. It is deliberately not a
//! general exception barrier: arbitrary errors propagate with their
//! original identity unless the caller opts in, so bugs are never
//! silently masked.
//!
//! Sync and async entry points share one settlement path, so both give
//! identical semantics; the async form differs only in that completion
//! must be awaited.

use crate::options::RouteOptions;
use futures::future::BoxFuture;
use futures::FutureExt;
use recourse_diag::{Failure, Fault};
use std::future::Future;

/// Result of a routed computation.
///
/// `Ok` carries either the computation's value or the fallback; `Err`
/// carries only an unexpected error the route declined to recover.
pub type RouteResult<T> = Result<T, anyhow::Error>;

/// A fallback value plus the options governing recovery.
///
/// Stateless across invocations: each wrapper owns its fallback and
/// options, and nothing is shared between concurrent routes.
///
/// ```rust
/// use recourse_core::{ensure, Route};
///
/// let parsed = Route::new(0).run(|| {
///     ensure(false)?; // expected invalid input
///     Ok(99)
/// });
/// assert_eq!(parsed.unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Route<T> {
    fallback: T,
    options: RouteOptions,
}

impl<T: Default> Route<T> {
    /// Route with the type's default as fallback.
    #[inline]
    #[must_use]
    pub fn or_default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Route<T> {
    /// Route failures to the given fallback value.
    #[inline]
    #[must_use]
    pub fn new(fallback: T) -> Self {
        Self {
            fallback,
            options: RouteOptions::default(),
        }
    }

    /// Replace the options wholesale.
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Observe recovered failures. See [`RouteOptions::on_failure`].
    #[must_use]
    pub fn on_failure(mut self, hook: impl Fn(&Failure) + Send + Sync + 'static) -> Self {
        self.options = self.options.on_failure(hook);
        self
    }

    /// Recover arbitrary errors too. See [`RouteOptions::recover_unexpected`].
    #[inline]
    #[must_use]
    pub fn recover_unexpected(mut self) -> Self {
        self.options = self.options.recover_unexpected();
        self
    }

    /// Run a computation now, routing failures to the fallback.
    ///
    /// # Errors
    /// Propagates an unexpected error unchanged unless
    /// [`recover_unexpected`](Self::recover_unexpected) was set.
    pub fn run<F>(self, f: F) -> RouteResult<T>
    where
        F: FnOnce() -> Result<T, Fault>,
    {
        self.settle(f())
    }

    /// Await a computation, routing failures to the fallback.
    ///
    /// Failures surfacing before the first suspension and rejections
    /// after it are handled identically. Dropping the returned future
    /// does not cancel the underlying operation.
    ///
    /// # Errors
    /// Propagates an unexpected error unchanged unless
    /// [`recover_unexpected`](Self::recover_unexpected) was set.
    pub async fn run_async<Fut>(self, fut: Fut) -> RouteResult<T>
    where
        Fut: Future<Output = Result<T, Fault>>,
    {
        self.settle(fut.await)
    }

    /// Single settlement path shared by every entry point.
    fn settle(self, outcome: Result<T, Fault>) -> RouteResult<T> {
        match outcome {
            Ok(value) => Ok(value),
            Err(Fault::Failure(failure)) => Ok(self.recover(failure)),
            Err(Fault::Unexpected(error)) => {
                if self.options.recovers_unexpected() {
                    Ok(self.recover(Failure::from_unexpected(error)))
                } else {
                    Err(error)
                }
            }
        }
    }

    fn recover(self, failure: Failure) -> T {
        tracing::debug!(failure = %failure, "routing failure to fallback");
        self.options.notify(&failure);
        self.fallback
    }
}

impl<T: Clone> Route<T> {
    /// Wrap a fallible function into one that routes failures.
    ///
    /// The returned closure is reusable; each failing invocation clones
    /// the fallback and fires the observer hook once.
    pub fn wrap<A, F>(self, f: F) -> impl Fn(A) -> RouteResult<T>
    where
        F: Fn(A) -> Result<T, Fault>,
    {
        move |args| self.clone().settle(f(args))
    }

    /// Wrap an async function into one that routes failures.
    ///
    /// Always returns a pending handle, even when the wrapped function
    /// fails before its first suspension; completion cannot be known
    /// synchronously.
    pub fn wrap_async<A, F, Fut>(self, f: F) -> impl Fn(A) -> BoxFuture<'static, RouteResult<T>>
    where
        T: Send + 'static,
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, Fault>> + Send + 'static,
    {
        move |args| {
            let fut = f(args);
            let route = self.clone();
            async move { route.settle(fut.await) }.boxed()
        }
    }
}
