//! crates/logging-sink/src/stdout.rs
//! Fire-and-forget line output on the process's standard output.

use std::io;

use crate::sink::LineSink;

/// Writes `line` plus a newline to standard output, discarding any error.
///
/// Stdout stays locked for the whole line, so concurrent callers each get a
/// complete line even though their relative order is unspecified. Unlike
/// `println!`, a closed stdout does not panic.
pub fn write_stdout_line(line: String) {
    let mut sink = LineSink::new(io::stdout().lock());
    let _ = sink.write_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_write_never_panics() {
        write_stdout_line(String::new());
        write_stdout_line("logging-sink stdout smoke line".to_owned());
    }
}
