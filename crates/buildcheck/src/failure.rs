//! The failure signal returned under the abort policy.

use thiserror::Error;

/// A check failed while the abort policy was active.
///
/// Carries the same diagnostic line that was written to the sink. Propagate
/// it with `?` up to the program boundary, which decides how to report it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        CheckFailure {
            message: message.into(),
        }
    }

    /// The diagnostic line describing the failed check.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
