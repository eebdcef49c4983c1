//! Multi-assert validation
//!
//! Reduces an ordered assertion sequence to a boolean: all checks pass,
//! or the first failure wins. Only expected-invalid-input failures are
//! narrowed to `false`; an arbitrary error re-raises unmodified so a
//! programming error never masquerades as invalid input.

use recourse_diag::Fault;
use std::fmt;

type Rule<A> = Box<dyn Fn(&A) -> Result<(), Fault> + Send + Sync>;

/// An ordered list of assertions evaluated against one argument.
///
/// ```rust
/// use recourse_core::{ensure_msg, Validator};
///
/// let positive_even = Validator::new()
///     .rule(|n: &i64| Ok(ensure_msg(*n > 0, "not positive")?))
///     .rule(|n: &i64| Ok(ensure_msg(n % 2 == 0, "odd")?));
///
/// assert!(positive_even.check(&4).unwrap());
/// assert!(!positive_even.check(&3).unwrap());
/// ```
pub struct Validator<A> {
    rules: Vec<Rule<A>>,
}

impl<A> Validator<A> {
    /// Validator with no rules; vacuously accepts everything.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append an assertion. Rules run in insertion order.
    #[must_use]
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&A) -> Result<(), Fault> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of registered rules.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `args`, in order, first failure wins.
    ///
    /// Rules after a failing one are not run.
    ///
    /// # Errors
    /// Re-raises the first arbitrary (non-failure) error unmodified.
    pub fn check(&self, args: &A) -> Result<bool, anyhow::Error> {
        for (index, rule) in self.rules.iter().enumerate() {
            match rule(args) {
                Ok(()) => {}
                Err(Fault::Failure(failure)) => {
                    tracing::trace!(rule = index, failure = %failure, "validation short-circuited");
                    return Ok(false);
                }
                Err(Fault::Unexpected(error)) => return Err(error),
            }
        }
        Ok(true)
    }
}

impl<A> Default for Validator<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Validator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}
