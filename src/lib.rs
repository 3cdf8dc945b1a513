#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `emolog` re-exports the workspace's logger as a single dependency. In
//! debug builds every call prints one line to standard output:
//!
//! ```text
//! 2024-01-15 09:30 [⚠️WARNING] [cache.rs: 88] evict → cache at 91% capacity
//! ```
//!
//! Release builds print nothing.
//!
//! # Examples
//!
//! ```
//! use emolog::{e, i, w};
//!
//! i!("starting");
//! w!("cache at {}% capacity", 91);
//! e!(std::io::Error::from(std::io::ErrorKind::TimedOut));
//! ```
//!
//! The level macros are [`t!`], [`d!`], [`i!`], [`n!`], [`w!`], [`e!`] and
//! [`c!`]; see the `logging` crate for the full API.

pub use logging::*;
pub use logging_sink::{LineSink, write_stdout_line};
