#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled logger for development builds. Each of the seven
//! severity levels has a one-letter macro ([`t!`], [`d!`], [`i!`], [`n!`],
//! [`w!`], [`e!`], [`c!`]) that prints one line to standard output:
//!
//! ```text
//! 2024-01-15 09:30 [🔥CRITICAL] [main.rs: 42] do_something → something went wrong
//! ```
//!
//! # Design
//!
//! - The call site is captured by the macros themselves through
//!   [`call_site!`], which combines `file!()`, `line!()` and
//!   [`function_name!`]. Callers that cannot use macros pass the metadata to
//!   [`log_at`].
//! - Output only happens when [`ENABLED`] is `true`, i.e. in builds with
//!   `debug_assertions`. The check is a constant, so release builds compile
//!   the calls away for every level.
//! - A record is rendered into one string and handed to
//!   [`logging_sink::write_stdout_line`], which writes it while holding the
//!   stdout lock.
//!
//! # Invariants
//!
//! - The level-to-prefix table of [`LogLevel::prefix`] is fixed.
//! - The timestamp always has the `yyyy-MM-dd HH:mm ` layout.
//! - Logging never panics and never reports an error to the caller.
//!
//! # Examples
//!
//! ```
//! use logging::{c, d, i};
//!
//! #[derive(Debug)]
//! struct Request {
//!     id: u32,
//! }
//!
//! i!("listening on port {}", 8080);
//! d!(?Request { id: 7 });
//! let code = 42;
//! c!(code);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`LogLevel`] by its lowercase name.
//! - `tracing`: `EmojiLayer` renders `tracing` events as emolog records.
//! - `test-support`: the `capture` module redirects a thread's records into
//!   memory.

mod emit;
mod levels;
mod macros;
mod record;
#[doc(hidden)]
pub mod source;
mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod capture;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use emit::{ENABLED, emit, emit_to, log_at};
pub use levels::{LogLevel, ParseLevelError};
pub use record::{LogRecord, MESSAGE_SEPARATOR, render_line};
pub use source::CallSite;
pub use timestamp::{FALLBACK_TIMESTAMP, TIMESTAMP_FORMAT, format_timestamp, local_offset, now};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{EmojiLayer, init_tracing};
