//! Values fixed by the build configuration.
//!
//! - Debug flag: `cfg!(debug_assertions)`
//! - Compiler identity: the `clang` cargo feature
//! - Target platform: `BUILDCHECK_TARGET_PLATFORM` at compile time

/// Platform name used when `BUILDCHECK_TARGET_PLATFORM` is not set at build time.
pub const DEFAULT_TARGET_PLATFORM: &str = "x86LinusLand";

/// 1 in debug builds, 2 otherwise.
pub fn conditional_flag_check() -> i32 {
    if cfg!(debug_assertions) {
        1
    } else {
        2
    }
}

/// Identity of the toolchain this crate was configured for.
pub fn compiler() -> &'static str {
    if cfg!(feature = "clang") {
        "AppleTart"
    } else {
        "GnueyGoodness"
    }
}

pub fn target_platform() -> &'static str {
    match option_env!("BUILDCHECK_TARGET_PLATFORM") {
        Some(platform) => platform,
        None => DEFAULT_TARGET_PLATFORM,
    }
}
