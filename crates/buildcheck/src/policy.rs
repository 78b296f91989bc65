//! Failure policies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a [`Checker`](crate::Checker) does after reporting a failed check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Report the diagnostic and return normally; later checks still run.
    Continue,
    /// Report the diagnostic and return a [`CheckFailure`](crate::CheckFailure).
    #[default]
    Abort,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FailurePolicy::Continue => "continue",
            FailurePolicy::Abort => "abort",
        }
    }

    /// Whether a failed check stops the run.
    pub fn is_abort(self) -> bool {
        matches!(self, FailurePolicy::Abort)
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized failure policy name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown failure policy `{0}` (expected `continue` or `abort`)")]
pub struct ParsePolicyError(pub String);

impl FromStr for FailurePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(FailurePolicy::Continue),
            "abort" => Ok(FailurePolicy::Abort),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_names() {
        assert_eq!("continue".parse(), Ok(FailurePolicy::Continue));
        assert_eq!("abort".parse(), Ok(FailurePolicy::Abort));
        assert_eq!(" Abort ".parse(), Ok(FailurePolicy::Abort));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = ParsePolicyError("retry".to_string());
        assert_eq!("retry".parse::<FailurePolicy>(), Err(err.clone()));
        assert_eq!(
            err.to_string(),
            "unknown failure policy `retry` (expected `continue` or `abort`)"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for policy in [FailurePolicy::Continue, FailurePolicy::Abort] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }

    #[test]
    fn default_is_abort() {
        assert!(FailurePolicy::default().is_abort());
    }
}
