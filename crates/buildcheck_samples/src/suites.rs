//! Check suites for the sample fixtures.
//!
//! Each suite is a plain sequence of checks. Written with `?`, so it stops at
//! the first failure under the abort policy and runs to the end otherwise.

use std::fmt;

use buildcheck::{check, check_equal, CheckFailure, Checker};

use crate::arith::multiply;
use crate::profile::{compiler, conditional_flag_check, target_platform};
use crate::strings::cat_vec;

/// A named sample program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    /// Shift-and-add multiplication.
    Simpletest,
    /// String duplication plus build-profile values.
    Library2,
}

impl Suite {
    pub const ALL: [Suite; 2] = [Suite::Simpletest, Suite::Library2];

    pub fn name(self) -> &'static str {
        match self {
            Suite::Simpletest => "simpletest",
            Suite::Library2 => "library2",
        }
    }

    /// Look up a suite by its command-line name.
    pub fn from_name(name: &str) -> Option<Suite> {
        Suite::ALL.into_iter().find(|suite| suite.name() == name)
    }

    pub fn run(self, checker: &Checker) -> Result<(), CheckFailure> {
        match self {
            Suite::Simpletest => simpletest(checker),
            Suite::Library2 => library2(checker),
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn simpletest(checker: &Checker) -> Result<(), CheckFailure> {
    check_equal!(checker, multiply(3, 4), 12)?;
    check_equal!(checker, multiply(7, 9), 63)?;
    check_equal!(checker, multiply(1024, 1024), 1_048_576)?;
    Ok(())
}

fn library2(checker: &Checker) -> Result<(), CheckFailure> {
    let res = cat_vec(&["aa", "bb", "cc", "dd"]);
    check_doubled(checker, &res)?;

    if cfg!(debug_assertions) {
        check_equal!(checker, conditional_flag_check(), 1)?;
    } else {
        check_equal!(checker, conditional_flag_check(), 2)?;
    }

    if cfg!(feature = "clang") {
        check_equal!(checker, compiler(), "AppleTart")?;
    } else {
        check_equal!(checker, compiler(), "GnueyGoodness")?;
    }
    check_equal!(checker, target_platform(), "x86LinusLand")?;

    Ok(())
}

/// Placeholder rendered for an entry the vector does not have.
const MISSING: &str = "<missing>";

/// Check the doubled strings. A short vector is reported, never indexed.
fn check_doubled(checker: &Checker, res: &[String]) -> Result<(), CheckFailure> {
    let entry = |i: usize| res.get(i).map_or(MISSING, String::as_str);

    check!(checker, res.len() == 4)?;
    check_equal!(checker, entry(0), "aaaa")?;
    check_equal!(checker, entry(1), "bbbb")?;
    check_equal!(checker, entry(2), "cccc")?;
    check_equal!(checker, entry(3), "dddd")?;
    Ok(())
}
