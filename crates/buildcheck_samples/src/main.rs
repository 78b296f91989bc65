//! Buildcheck sample runner.
//!
//! Runs one sample suite and exits non-zero if any check failed.

use std::io;
use std::process::ExitCode;

use buildcheck::Checker;
use buildcheck_samples::{init_tracing, parse_args, run_suite, Command, Suite, POLICY_ENV_VAR};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_policy = std::env::var(POLICY_ENV_VAR).ok();

    let config = match parse_args(&args, env_policy.as_deref()) {
        Ok(Command::List) => {
            for suite in Suite::ALL {
                println!("{suite}");
            }
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(config)) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    tracing::debug!(suite = %config.suite, policy = %config.policy, "starting run");

    let checker = Checker::stderr(config.policy);
    run_suite(config.suite, &checker, &mut io::stderr()).exit_code()
}

fn print_usage() {
    eprintln!("Usage: buildcheck <suite> [--policy=continue|abort]");
    eprintln!("       buildcheck list");
    eprintln!();
    eprintln!("Suites:");
    for suite in Suite::ALL {
        eprintln!("  {suite}");
    }
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {POLICY_ENV_VAR}   Failure policy when --policy is not given (default: abort)");
    eprintln!("  RUST_LOG            Enable tracing output, e.g. RUST_LOG=buildcheck=debug");
}
