//! crates/logging/src/macros.rs
//! One macro per level, each capturing its own call site.
//!
//! Every macro accepts three forms:
//!
//! - `t!(value)` logs any [`Display`](std::fmt::Display) value;
//! - `t!(?value)` logs any [`Debug`](std::fmt::Debug) value;
//! - `t!("format {}", args)` logs a format string, with or without
//!   arguments, so `t!("copying {path}")` interpolates `path`.
//!
//! A lone literal is always a format string; log a number through a binding
//! or with `t!("{}", 42)`.

/// Logs a record at a level chosen at runtime.
///
/// # Example
/// ```
/// use logging::{log, LogLevel};
///
/// let level: LogLevel = "notice".parse().unwrap();
/// log!(level, "cache warmed with {} entries", 128);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, ?$value:expr $(,)?) => {
        if $crate::ENABLED {
            $crate::emit(
                $level,
                ::core::format_args!("{:?}", $value),
                &$crate::call_site!(),
            );
        }
    };
    ($level:expr, $fmt:literal $(,)?) => {
        if $crate::ENABLED {
            $crate::emit(
                $level,
                ::core::format_args!($fmt),
                &$crate::call_site!(),
            );
        }
    };
    ($level:expr, $value:expr $(,)?) => {
        if $crate::ENABLED {
            $crate::emit($level, &$value, &$crate::call_site!());
        }
    };
    ($level:expr, $($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit(
                $level,
                ::core::format_args!($($arg)+),
                &$crate::call_site!(),
            );
        }
    };
}

/// Logs at [`LogLevel::Trace`](crate::LogLevel::Trace).
///
/// # Example
/// ```
/// logging::t!("entering loop with {} items", 3);
/// ```
#[macro_export]
macro_rules! t {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Trace, $($arg)+)
    };
}

/// Logs at [`LogLevel::Debug`](crate::LogLevel::Debug).
///
/// # Example
/// ```
/// let request = vec![1, 2, 3];
/// logging::d!(?request);
/// ```
#[macro_export]
macro_rules! d {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Logs at [`LogLevel::Info`](crate::LogLevel::Info).
///
/// # Example
/// ```
/// logging::i!("server started");
/// ```
#[macro_export]
macro_rules! i {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Logs at [`LogLevel::Notice`](crate::LogLevel::Notice).
///
/// # Example
/// ```
/// logging::n!("config reloaded from {}", "/etc/app.toml");
/// ```
#[macro_export]
macro_rules! n {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Notice, $($arg)+)
    };
}

/// Logs at [`LogLevel::Warning`](crate::LogLevel::Warning).
///
/// # Example
/// ```
/// let percent = 90;
/// logging::w!(percent);
/// ```
#[macro_export]
macro_rules! w {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $($arg)+)
    };
}

/// Logs at [`LogLevel::Error`](crate::LogLevel::Error).
///
/// # Example
/// ```
/// let error = std::io::Error::from(std::io::ErrorKind::NotFound);
/// logging::e!(error);
/// ```
#[macro_export]
macro_rules! e {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Logs at [`LogLevel::Critical`](crate::LogLevel::Critical).
///
/// # Example
/// ```
/// logging::c!("something went wrong");
/// ```
#[macro_export]
macro_rules! c {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Critical, $($arg)+)
    };
}
