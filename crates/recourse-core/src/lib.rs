//! Recourse Core - assertion and failure routing
//!
//! The failure-handling protocol:
//! - Fail-fast checks (`ensure*`) produce typed [`Failure`]s
//! - [`Fault`] separates expected invalid input from arbitrary errors
//! - [`Route`] converts failures into fallback values, sync or async
//! - [`Validator`] reduces an assertion sequence to a boolean
//!
//! Direct checks always fail loudly; routed checks never do for a
//! [`Failure`], yielding the configured fallback instead. Arbitrary
//! errors stay fatal unless a route opts in to recovering them.
//!
//! # Example
//!
//! ```rust
//! use recourse_core::{ensure_value, Route};
//!
//! fn parse_port(input: &str) -> Result<u16, recourse_core::Fault> {
//!     let n: i64 = input.parse().unwrap_or(-1);
//!     ensure_value((0..=65535).contains(&n), "not a port", &n)?;
//!     Ok(n as u16)
//! }
//!
//! let port = Route::new(8080).run(|| parse_port("70000"));
//! assert_eq!(port.unwrap(), 8080);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod ensure;
pub mod options;
pub mod route;
pub mod validator;

// Re-exports for convenience
pub use ensure::{ensure, ensure_info, ensure_msg, ensure_value, DEFAULT_MESSAGE};
pub use options::RouteOptions;
pub use route::{Route, RouteResult};
pub use validator::Validator;

// Diagnostic types are part of the public surface
pub use recourse_diag::{
    capture, summarize, summarize_opt, Failure, Fault, CALLER_KEY, VALUE_KEY,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with recourse
    pub use crate::{
        ensure, ensure_info, ensure_msg, ensure_value, Failure, Fault, Route, RouteOptions,
        RouteResult, Validator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
