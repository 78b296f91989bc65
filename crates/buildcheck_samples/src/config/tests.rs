use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn suite_alone_uses_default_policy() {
    assert_eq!(
        parse_args(&args(&["simpletest"]), None),
        Ok(Command::Run(RunConfig::default()))
    );
}

#[test]
fn policy_flag_is_honored() {
    assert_eq!(
        parse_args(&args(&["library2", "--policy=continue"]), None),
        Ok(Command::Run(RunConfig {
            suite: Suite::Library2,
            policy: FailurePolicy::Continue,
        }))
    );
}

#[test]
fn flag_wins_over_environment() {
    let parsed = parse_args(&args(&["--policy=abort", "simpletest"]), Some("continue"));
    assert_eq!(
        parsed,
        Ok(Command::Run(RunConfig {
            suite: Suite::Simpletest,
            policy: FailurePolicy::Abort,
        }))
    );
}

#[test]
fn environment_applies_without_flag() {
    let parsed = parse_args(&args(&["simpletest"]), Some("continue"));
    assert_eq!(
        parsed,
        Ok(Command::Run(RunConfig {
            suite: Suite::Simpletest,
            policy: FailurePolicy::Continue,
        }))
    );
}

#[test]
fn list_command() {
    assert_eq!(parse_args(&args(&["list"]), None), Ok(Command::List));
}

#[test]
fn errors() {
    assert_eq!(parse_args(&[], None), Err(ConfigError::MissingSuite));
    assert_eq!(
        parse_args(&args(&["library3"]), None),
        Err(ConfigError::UnknownSuite("library3".to_string()))
    );
    assert_eq!(
        parse_args(&args(&["simpletest", "library2"]), None),
        Err(ConfigError::UnexpectedArgument("library2".to_string()))
    );
    assert_eq!(
        parse_args(&args(&["simpletest", "--verbose"]), None),
        Err(ConfigError::UnexpectedArgument("--verbose".to_string()))
    );
    assert_eq!(
        parse_args(&args(&["simpletest"]), Some("sometimes")),
        Err(ConfigError::InvalidPolicy(ParsePolicyError(
            "sometimes".to_string()
        )))
    );
}
