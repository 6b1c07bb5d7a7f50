//! # Mode Selection Module / 模式选择模块
//!
//! This module defines the transform mode and its resolution from the
//! process environment. The mode is resolved lazily on first engine use and
//! is immutable for the lifetime of the owning context.
//!
//! 此模块定义了变换模式及其从进程环境中的解析。
//! 模式在引擎首次使用时惰性解析，并在所属上下文的生命周期内保持不变。

use crate::core::transform;
use std::env;

/// The environment variable consulted when resolving the transform mode.
pub const MODE_ENV_VAR: &str = "PSEUDOLOC_MODE";

/// Selects which transform rewrites intercepted strings.
/// Exactly one mode is active per context; dispatch is an exhaustive match,
/// so adding or removing a mode is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bracket framing plus per-glyph accent substitution ("ltr").
    Decorate,
    /// Direction-mark interleaving to simulate RTL rendering ("rtl").
    MarkReverse,
    /// Every string becomes the fixed placeholder text ("malkovich").
    Placeholder,
}

impl Mode {
    /// Maps a raw configuration value to a mode.
    ///
    /// Recognized values are exactly `"ltr"`, `"rtl"` and `"malkovich"`,
    /// case-sensitive. Anything else, including an absent value, silently
    /// selects the default. An unrecognized value is a usability
    /// accommodation rather than an error, so no diagnostic is produced.
    pub fn from_config_value(value: Option<&str>) -> Self {
        match value {
            Some("ltr") => Mode::Decorate,
            Some("rtl") => Mode::MarkReverse,
            Some("malkovich") => Mode::Placeholder,
            _ => Mode::default(),
        }
    }

    /// Resolves the mode from [`MODE_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::from_config_value(env::var(MODE_ENV_VAR).ok().as_deref())
    }

    /// Runs the selected transform over one string.
    pub fn apply(self, input: &str) -> String {
        match self {
            Mode::Decorate => transform::decorate(input),
            Mode::MarkReverse => transform::mark_reverse(input),
            Mode::Placeholder => transform::placeholder(input),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Decorate
    }
}
