//! crates/logging/src/record.rs
//! Rendering of a single log line.

use std::fmt::{self, Write as _};

use crate::levels::LogLevel;
use crate::source::CallSite;

/// Separator between the call-site metadata and the message.
pub const MESSAGE_SEPARATOR: &str = " → ";

/// One log event, ready to be rendered.
///
/// The `Display` implementation produces
/// `<timestamp><prefix> [<file>: <line>] <function> → <message>`, where the
/// timestamp already ends with a space and `<file>` is the base name of the
/// call site's path.
///
/// # Examples
///
/// ```
/// use logging::{CallSite, LogLevel, LogRecord};
///
/// let site = CallSite::new("Sources/App/MyFile.swift", 42, "doSomething()");
/// let record = LogRecord::new("2024-01-15 09:30 ", LogLevel::Critical, &site, &"something went wrong");
///
/// assert_eq!(
///     record.to_string(),
///     "2024-01-15 09:30 [🔥CRITICAL] [MyFile.swift: 42] doSomething() → something went wrong"
/// );
/// ```
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    timestamp: &'a str,
    level: LogLevel,
    site: &'a CallSite<'a>,
    message: &'a dyn fmt::Display,
}

impl<'a> LogRecord<'a> {
    /// Bundles the parts of a record.
    #[must_use]
    pub fn new(
        timestamp: &'a str,
        level: LogLevel,
        site: &'a CallSite<'a>,
        message: &'a dyn fmt::Display,
    ) -> Self {
        Self {
            timestamp,
            level,
            site,
            message,
        }
    }

    /// Returns the record's level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the record's call site.
    #[must_use]
    pub const fn site(&self) -> &'a CallSite<'a> {
        self.site
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} [{}: {}] {}{}{}",
            self.timestamp,
            self.level.prefix(),
            self.site.base_name(),
            self.site.line(),
            self.site.function(),
            MESSAGE_SEPARATOR,
            self.message,
        )
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("site", self.site)
            .finish_non_exhaustive()
    }
}

/// Renders a record into a fresh string without a trailing newline.
///
/// Never panics: if the message's `Display` impl reports an error, the text
/// written up to that point is kept.
#[must_use]
pub fn render_line(
    timestamp: &str,
    level: LogLevel,
    site: &CallSite<'_>,
    message: &dyn fmt::Display,
) -> String {
    let mut line = String::with_capacity(96);
    let _ = write!(line, "{}", LogRecord::new(timestamp, level, site, message));
    line
}
