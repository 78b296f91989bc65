//! Command-line configuration for the sample runner.

use buildcheck::{FailurePolicy, ParsePolicyError};
use thiserror::Error;

use crate::Suite;

/// Environment variable consulted when `--policy` is not given.
pub const POLICY_ENV_VAR: &str = "BUILDCHECK_POLICY";

/// What the runner should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the available suite names.
    List,
    /// Run one suite.
    Run(RunConfig),
}

/// Settings for running one suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub suite: Suite,
    pub policy: FailurePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            suite: Suite::Simpletest,
            policy: FailurePolicy::default(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing suite name")]
    MissingSuite,
    #[error("unknown suite `{0}`")]
    UnknownSuite(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error(transparent)]
    InvalidPolicy(#[from] ParsePolicyError),
}

/// Parse arguments (without the program name).
///
/// `env_policy` is the value of [`POLICY_ENV_VAR`], if set; an explicit
/// `--policy=` flag wins over it.
pub fn parse_args(args: &[String], env_policy: Option<&str>) -> Result<Command, ConfigError> {
    let mut suite = None;
    let mut policy = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--policy=") {
            policy = Some(value.parse::<FailurePolicy>()?);
        } else if arg == "list" && suite.is_none() {
            return Ok(Command::List);
        } else if arg.starts_with('-') || suite.is_some() {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        } else {
            let found =
                Suite::from_name(arg).ok_or_else(|| ConfigError::UnknownSuite(arg.clone()))?;
            suite = Some(found);
        }
    }

    let suite = suite.ok_or(ConfigError::MissingSuite)?;
    let policy = match (policy, env_policy) {
        (Some(policy), _) => policy,
        (None, Some(value)) => value.parse()?,
        (None, None) => FailurePolicy::default(),
    };

    Ok(Command::Run(RunConfig { suite, policy }))
}

#[cfg(test)]
mod tests;
