//! crates/logging/src/levels.rs
//! Severity levels and their fixed display prefixes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record, ordered from least to most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Information normally of use only when tracing execution.
    Trace,
    /// Information normally of use only when debugging.
    Debug,
    /// Informational messages.
    Info,
    /// Conditions that are not errors but may need special handling.
    Notice,
    /// Non-error conditions more severe than a notice.
    Warning,
    /// Error conditions.
    Error,
    /// Critical errors that usually require immediate attention.
    Critical,
}

impl LogLevel {
    /// Every level in severity order.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the tag printed in front of every record of this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert_eq!(LogLevel::Critical.prefix(), "[🔥CRITICAL]");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Trace => "[💬TRACE]",
            Self::Debug => "[🐞DEBUG]",
            Self::Info => "[ℹ️INFO]",
            Self::Notice => "[📣NOTICE]",
            Self::Warning => "[⚠️WARNING]",
            Self::Error => "[🔧ERROR]",
            Self::Critical => "[🔥CRITICAL]",
        }
    }

    /// Returns the lowercase level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Returns the single-letter macro name for this level.
    #[must_use]
    pub const fn mnemonic(self) -> char {
        match self {
            Self::Trace => 't',
            Self::Debug => 'd',
            Self::Info => 'i',
            Self::Notice => 'n',
            Self::Warning => 'w',
            Self::Error => 'e',
            Self::Critical => 'c',
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text names no known [`LogLevel`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown log level '{input}' (expected one of trace, debug, info, notice, warning, error, critical)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name or its mnemonic letter, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("warn") {
            return Ok(Self::Warning);
        }

        Self::ALL
            .into_iter()
            .find(|level| {
                trimmed.eq_ignore_ascii_case(level.name())
                    || (trimmed.len() == 1
                        && trimmed
                            .chars()
                            .next()
                            .is_some_and(|c| c.eq_ignore_ascii_case(&level.mnemonic())))
            })
            .ok_or_else(|| ParseLevelError {
                input: s.to_owned(),
            })
    }
}
