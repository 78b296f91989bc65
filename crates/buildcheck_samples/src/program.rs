//! The program boundary: where a suite's failure becomes a run outcome.

use std::io::Write;
use std::process::ExitCode;

use buildcheck::{CheckFailure, Checker};

use crate::Suite;

/// Result of running one suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Process exit status: 0 on success, 1 on failure.
    pub fn status(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Run `suite` and turn its result into an [`Outcome`].
///
/// The summary line goes to `out`, never to the checker's sink.
#[tracing::instrument(level = "debug", skip_all, fields(suite = %suite, policy = %checker.policy()))]
pub fn run_suite(suite: Suite, checker: &Checker, out: &mut dyn Write) -> Outcome {
    run_checks(checker, out, |checker| suite.run(checker))
}

/// Run a check sequence at the program boundary.
///
/// Under the abort policy a propagated failure is reported as
/// `Test failed: <diagnostic>`. Under the continue policy the sequence always
/// finishes, and the run fails if the sink received any diagnostic while it
/// ran. On success `All tests passed` is written.
pub fn run_checks<F>(checker: &Checker, out: &mut dyn Write, checks: F) -> Outcome
where
    F: FnOnce(&Checker) -> Result<(), CheckFailure>,
{
    let reported_before = checker.sink().lines_reported();

    // The summary is advisory; the outcome and exit status carry the result
    // even when `out` cannot be written.
    let outcome = match checks(checker) {
        Err(failure) => {
            let _ = writeln!(out, "Test failed: {failure}");
            Outcome::Failed
        }
        Ok(()) => {
            let failed = checker
                .sink()
                .lines_reported()
                .saturating_sub(reported_before);
            if failed == 0 {
                let _ = writeln!(out, "All tests passed");
                Outcome::Passed
            } else {
                let noun = if failed == 1 { "check" } else { "checks" };
                let _ = writeln!(out, "Test failed: {failed} {noun} reported");
                Outcome::Failed
            }
        }
    };

    tracing::debug!(?outcome, "run finished");
    outcome
}
