//! Buildcheck - check primitives for sample and fixture programs.
//!
//! Two operations, one failure signal:
//! - `check_equal!`: compare two values of possibly different types
//! - `check!`: assert a boolean expression, reporting its source text
//! - `CheckFailure`: returned when the abort policy is active
//!
//! # Failure Policies
//!
//! A [`Checker`] carries exactly one [`FailurePolicy`]. Both policies write the
//! same single-line diagnostic to the checker's sink:
//!
//! ```text
//! check failure (src/main.rs, 14): 12 != 13
//! check failure (src/main.rs, 15): res.len() == 4
//! ```
//!
//! `Continue` then returns `Ok(())`; `Abort` returns `Err(CheckFailure)`.
//! Since both return the same type, a check sequence written with `?` runs
//! unchanged under either policy:
//!
//! ```text
//! fn suite(checker: &Checker) -> Result<(), CheckFailure> {
//!     check_equal!(checker, multiply(3, 4), 12)?;
//!     check!(checker, names.is_empty())?;
//!     Ok(())
//! }
//! ```
//!
//! # Sinks
//!
//! Diagnostics never go to a hidden global. The sink is injected when the
//! checker is built: stderr for programs, a buffer for tests, silent for
//! callers that only care about the returned signal.

mod checker;
mod diagnostic;
mod failure;
mod policy;
mod site;
pub mod sink;

pub use checker::Checker;
pub use diagnostic::{mismatch_message, predicate_message, CHECK_FAILURE_MARKER};
pub use failure::CheckFailure;
pub use policy::{FailurePolicy, ParsePolicyError};
pub use site::CheckSite;
pub use sink::{buffer_sink, silent_sink, stderr_sink, SharedSink, SinkImpl};

/// Capture the current source location as a [`CheckSite`].
#[macro_export]
macro_rules! check_site {
    () => {
        $crate::CheckSite::new(file!(), line!())
    };
}

/// Compare two values through a [`Checker`], capturing the call site.
///
/// Evaluates to `Result<(), CheckFailure>`; use `?` to stop at the first
/// failure under the abort policy.
#[macro_export]
macro_rules! check_equal {
    ($checker:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $checker.check_equal($crate::check_site!(), &$lhs, &$rhs)
    };
}

/// Assert a boolean expression through a [`Checker`], capturing the call site
/// and the literal expression text.
#[macro_export]
macro_rules! check {
    ($checker:expr, $predicate:expr $(,)?) => {
        $checker.check($crate::check_site!(), $predicate, stringify!($predicate))
    };
}
