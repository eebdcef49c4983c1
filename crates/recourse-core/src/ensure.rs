//! Fail-fast invariant checks
//!
//! The single fail path every guard predicate routes through. A check
//! either passes with no observable effect or produces a [`Failure`]
//! carrying diagnostic context; guards never invent ad hoc error kinds
//! of their own.
//!
//! Distinct entry points replace optional-argument overloads: pick the
//! one matching the context you have.

use recourse_diag::{capture, Failure, VALUE_KEY};
use serde::Serialize;
use serde_json::{Map, Value};

/// Message used when a check fails without one.
pub const DEFAULT_MESSAGE: &str = "Assertion failed";

/// Check a condition; fail with the default message.
///
/// # Errors
/// Returns a [`Failure`] when `condition` is false.
#[inline]
#[track_caller]
pub fn ensure(condition: bool) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(DEFAULT_MESSAGE))
    }
}

/// Check a condition; fail with the given message.
///
/// An empty message falls back to one synthesized from the call site.
///
/// # Errors
/// Returns a [`Failure`] when `condition` is false.
#[inline]
#[track_caller]
pub fn ensure_msg(condition: bool, message: &str) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

/// Check a condition; fail with a message and diagnostic info.
///
/// # Errors
/// Returns a [`Failure`] when `condition` is false.
#[inline]
#[track_caller]
pub fn ensure_info(
    condition: bool,
    message: &str,
    info: Map<String, Value>,
) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::with_info(message, info))
    }
}

/// Check a condition; on failure, capture the offending value so the
/// message carries a `(got: …)` clause.
///
/// # Errors
/// Returns a [`Failure`] when `condition` is false.
#[track_caller]
pub fn ensure_value<T: Serialize>(
    condition: bool,
    message: &str,
    value: &T,
) -> Result<(), Failure> {
    if condition {
        return Ok(());
    }
    let mut info = Map::new();
    info.insert(VALUE_KEY.to_string(), capture(value));
    Err(Failure::with_info(message, info))
}
