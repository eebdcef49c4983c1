//! Typed failure model
//!
//! [`Failure`] is the recoverable error kind produced by a failed
//! invariant check: a message, a diagnostic info map, and an optional
//! cause. [`Fault`] is the two-kind taxonomy every fallible guard
//! returns: expected-invalid-input failures versus arbitrary errors that
//! must not be silently recovered.

use crate::summary::summarize;
use serde_json::{Map, Value};
use std::panic::Location;

/// Fixed info key under which the originating call site is recorded.
pub const CALLER_KEY: &str = "caller";

/// Fixed info key holding the offending value, when the check captured one.
pub const VALUE_KEY: &str = "value";

/// A failed invariant check with diagnostic context.
///
/// Immutable once constructed: fields are exposed through accessors
/// only. The message is never empty; when a caller omits it, one is
/// synthesized from the call site recorded via `#[track_caller]`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    /// Resolved human-readable message
    message: String,
    /// Diagnostic key/value context, including the caller location
    info: Map<String, Value>,
    /// Original error, present only when normalized from a non-failure
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Failure {
    /// Create a failure with the given message.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(message.into(), Map::new(), None, Location::caller())
    }

    /// Create a failure with a message and diagnostic info.
    ///
    /// If `info` carries a [`VALUE_KEY`] entry, a `(got: …)` clause built
    /// from its summary is appended to the message.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn with_info(message: impl Into<String>, info: Map<String, Value>) -> Self {
        Self::build(message.into(), info, None, Location::caller())
    }

    /// Normalize an arbitrary error into a failure.
    ///
    /// The error's display form becomes the message and the error itself
    /// is retained as the cause, so the chain survives recovery.
    #[track_caller]
    #[must_use]
    pub fn from_unexpected(error: anyhow::Error) -> Self {
        let message = error.to_string();
        Self::build(message, Map::new(), Some(error.into()), Location::caller())
    }

    fn build(
        message: String,
        mut info: Map<String, Value>,
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
        caller: &Location<'_>,
    ) -> Self {
        let caller_name = format!("{}:{}", caller.file(), caller.line());

        let mut message = if message.is_empty() {
            format!("check at {caller_name} failed")
        } else {
            message
        };
        if let Some(value) = info.get(VALUE_KEY) {
            message.push_str(" (got: ");
            message.push_str(&summarize(value));
            message.push(')');
        }

        // Recorded for downstream tooling; cosmetic only, never load-bearing.
        info.insert(CALLER_KEY.to_string(), Value::String(caller_name));

        Self {
            message,
            info,
            cause,
        }
    }

    /// The resolved message, never empty.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic context recorded at the failure site.
    #[inline]
    #[must_use]
    pub fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// The original triggering error, when this failure was normalized
    /// from a non-failure. Absent for first-hand checks.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// The two error kinds a fallible guard can produce.
///
/// Catch sites narrow by matching: no runtime reflection, no
/// discriminant field. A [`Fault::Failure`] is always recoverable by a
/// route wrapper; a [`Fault::Unexpected`] propagates with its original
/// identity unless the caller opts in to recovery.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// Expected invalid input: recoverable, diagnostic-bearing
    #[error(transparent)]
    Failure(#[from] Failure),

    /// Everything else: programming errors, I/O faults, panics turned
    /// errors. Fatal by default.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Fault {
    /// Whether this fault is a recoverable [`Failure`].
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Normalize to a [`Failure`].
    ///
    /// Identity for failures; unexpected errors are wrapped with their
    /// cause chain intact.
    #[track_caller]
    #[must_use]
    pub fn into_failure(self) -> Failure {
        match self {
            Self::Failure(failure) => failure,
            Self::Unexpected(error) => Failure::from_unexpected(error),
        }
    }
}
