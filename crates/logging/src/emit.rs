//! crates/logging/src/emit.rs
//! The debug-build gate and the functions that put a record on stdout.

use std::fmt;
use std::io::{self, Write};

use logging_sink::{LineSink, write_stdout_line};

use crate::levels::LogLevel;
use crate::record::render_line;
use crate::source::CallSite;
use crate::timestamp;

/// Whether this build emits log records at all.
///
/// `true` only when compiled with `debug_assertions`. The level macros test
/// this constant before doing any work, so release builds fold every call
/// away. This applies to every level, `critical` included.
pub const ENABLED: bool = cfg!(debug_assertions);

/// Writes one record for `level` to standard output.
///
/// Does nothing in release builds. Output errors are discarded; logging
/// never fails from the caller's point of view.
pub fn emit(level: LogLevel, message: impl fmt::Display, site: &CallSite<'_>) {
    if !ENABLED {
        return;
    }

    let line = render_line(&timestamp::now(), level, site, &message);

    #[cfg(any(test, feature = "test-support"))]
    if crate::capture::try_capture(&line) {
        return;
    }

    write_stdout_line(line);
}

/// Writes one record using explicitly supplied call-site metadata.
///
/// This is the form for callers that cannot use the level macros, for
/// example when forwarding records from another logging layer.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, log_at};
///
/// log_at(LogLevel::Notice, "config reloaded", "src/config.rs", 88, "reload");
/// ```
pub fn log_at(
    level: LogLevel,
    message: impl fmt::Display,
    file: &str,
    line: u32,
    function: &str,
) {
    emit(level, message, &CallSite::new(file, line, function));
}

/// Writes one gated record into `sink` instead of stdout.
///
/// Unlike [`emit`], the sink's I/O error is returned. Release builds write
/// nothing and return `Ok(())`.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, call_site, emit_to, ENABLED};
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// emit_to(&mut sink, LogLevel::Info, "ready", &call_site!())?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), usize::from(ENABLED));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn emit_to<W>(
    sink: &mut LineSink<W>,
    level: LogLevel,
    message: impl fmt::Display,
    site: &CallSite<'_>,
) -> io::Result<()>
where
    W: Write,
{
    if !ENABLED {
        return Ok(());
    }

    sink.write_line(render_line(&timestamp::now(), level, site, &message))
}
