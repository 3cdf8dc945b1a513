#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output half of the emolog logger: a
//! line-oriented wrapper around any [`std::io::Write`] implementor and a
//! fire-and-forget helper that writes a rendered line to standard output.
//!
//! # Design
//!
//! The crate exposes [`LineSink`], a lightweight wrapper that owns a writer.
//! Each rendered line arrives as an owned `String`; the sink appends the
//! newline in place and hands the result to the writer in a single
//! `write_all`, so a locked [`std::io::Stdout`] never observes half a line.
//!
//! # Invariants
//!
//! - One call to [`LineSink::write_line`] produces exactly one `write_all` on
//!   the wrapped writer.
//! - Every line ends with exactly one `\n`.
//! - [`write_stdout_line`] never panics and never reports an error; a closed
//!   or redirected stdout silently drops the line.
//!
//! # Errors
//!
//! [`LineSink`] operations surface [`std::io::Error`] values originating from
//! the underlying writer. [`write_stdout_line`] discards them.
//!
//! # Examples
//!
//! ```
//! use logging_sink::LineSink;
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_line("first".to_owned()).unwrap();
//! sink.write_line(String::from("second")).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "first\nsecond\n");
//! ```

mod sink;
mod stdout;

pub use sink::LineSink;
pub use stdout::write_stdout_line;
