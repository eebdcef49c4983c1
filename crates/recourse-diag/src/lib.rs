//! Recourse diagnostics
//!
//! Leaf crate of the recourse workspace: the typed failure model and the
//! bounded value summarizer used to build failure messages.
//!
//! # Core Concepts
//!
//! - [`Failure`]: immutable failure object with message, info map, cause
//! - [`Fault`]: two-kind taxonomy (recoverable failure vs arbitrary error)
//! - [`summarize`]: bounded human-readable description of a value
//! - [`capture`]: lossy, non-failing conversion into a diagnostic value
//!
//! # Example
//!
//! ```rust
//! use recourse_diag::{summarize, Failure};
//! use serde_json::json;
//!
//! let failure = Failure::new("expected a port number");
//! assert_eq!(failure.message(), "expected a port number");
//! assert_eq!(summarize(&json!([1, 2, 3, 4])), "array(len=4, sample=[1, 2, 3]…)");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod failure;
mod summary;

// Re-exports
pub use failure::{Failure, Fault, CALLER_KEY, VALUE_KEY};
pub use summary::{capture, summarize, summarize_opt, UNSERIALIZABLE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
