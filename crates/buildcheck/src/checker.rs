//! The check context.

use std::fmt::Display;

use crate::diagnostic::{mismatch_message, predicate_message};
use crate::{stderr_sink, CheckFailure, CheckSite, FailurePolicy, SharedSink};

/// Runs checks under one failure policy and reports to one sink.
///
/// Passing checks have no observable effect: nothing is allocated and nothing
/// is written. Failing checks write one diagnostic line each, with no
/// deduplication across repeated failures.
#[derive(Clone)]
pub struct Checker {
    policy: FailurePolicy,
    sink: SharedSink,
}

impl Checker {
    pub fn new(policy: FailurePolicy, sink: SharedSink) -> Self {
        Checker { policy, sink }
    }

    /// Checker reporting to stderr.
    pub fn stderr(policy: FailurePolicy) -> Self {
        Self::new(policy, stderr_sink())
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Check that `lhs == rhs`.
    ///
    /// On mismatch writes `check failure (<file>, <line>): <lhs> != <rhs>` and
    /// applies the policy. Under `Continue` this always returns `Ok(())`.
    pub fn check_equal<A, B>(&self, site: CheckSite, lhs: &A, rhs: &B) -> Result<(), CheckFailure>
    where
        A: PartialEq<B> + Display + ?Sized,
        B: Display + ?Sized,
    {
        tracing::trace!(file = site.file(), line = site.line(), "check_equal");
        if lhs != rhs {
            return self.fail(site, mismatch_message(site, lhs, rhs));
        }
        Ok(())
    }

    /// Check that `predicate` holds.
    ///
    /// `predicate_text` is the caller's literal source text for the
    /// expression; it is reported as-is on failure.
    pub fn check(
        &self,
        site: CheckSite,
        predicate: bool,
        predicate_text: &str,
    ) -> Result<(), CheckFailure> {
        tracing::trace!(file = site.file(), line = site.line(), "check");
        if !predicate {
            return self.fail(site, predicate_message(site, predicate_text));
        }
        Ok(())
    }

    #[cold]
    fn fail(&self, site: CheckSite, message: String) -> Result<(), CheckFailure> {
        self.sink.report_line(&message);
        tracing::debug!(
            file = site.file(),
            line = site.line(),
            policy = %self.policy,
            "check failed"
        );
        match self.policy {
            FailurePolicy::Continue => Ok(()),
            FailurePolicy::Abort => Err(CheckFailure::new(message)),
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::stderr(FailurePolicy::default())
    }
}
