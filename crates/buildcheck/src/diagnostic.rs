//! Diagnostic message rendering.
//!
//! Both failure policies render through these functions, so a diagnostic
//! reads the same whether execution continues or aborts afterwards.

use std::fmt::Display;

use crate::CheckSite;

/// Fixed marker that prefixes every diagnostic.
pub const CHECK_FAILURE_MARKER: &str = "check failure";

/// Render an equality mismatch: `check failure (<file>, <line>): <lhs> != <rhs>`.
#[cold]
pub fn mismatch_message<A, B>(site: CheckSite, lhs: &A, rhs: &B) -> String
where
    A: Display + ?Sized,
    B: Display + ?Sized,
{
    format!("{CHECK_FAILURE_MARKER} {site}: {lhs} != {rhs}")
}

/// Render a failed predicate: `check failure (<file>, <line>): <predicate_text>`.
#[cold]
pub fn predicate_message(site: CheckSite, predicate_text: &str) -> String {
    format!("{CHECK_FAILURE_MARKER} {site}: {predicate_text}")
}

#[cfg(test)]
mod tests;
