//! Check call sites.

use std::fmt;

/// Where a check was invoked.
///
/// Built at the call site by [`check_site!`](crate::check_site) and consumed by
/// the check call that receives it. Only used to render a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckSite {
    file: &'static str,
    line: u32,
}

impl CheckSite {
    /// Create a check site from a file name and line number.
    #[inline]
    pub const fn new(file: &'static str, line: u32) -> Self {
        CheckSite { file, line }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Renders as `(<file>, <line>)`, the location part of a diagnostic.
impl fmt::Display for CheckSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.line)
    }
}
