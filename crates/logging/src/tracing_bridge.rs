//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the emolog line format.
//!
//! [`EmojiLayer`] is a tracing-subscriber layer that renders every event as
//! an emolog record, so code instrumented with the standard `tracing`
//! macros prints the same lines as the level macros of this crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//!
//! tracing::warn!(free_mb = 12, "disk almost full");
//! // 2024-01-15 09:30 [⚠️WARNING] [disk.rs: 17] disk → disk almost full free_mb=12
//! ```

use std::fmt::{self, Write as _};
use std::io;

use logging_sink::LineSink;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::LogLevel;
use crate::record::render_line;
use crate::source::CallSite;
use crate::{ENABLED, timestamp};

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => Self::Trace,
            Level::DEBUG => Self::Debug,
            Level::INFO => Self::Info,
            Level::WARN => Self::Warning,
            Level::ERROR => Self::Error,
        }
    }
}

/// A tracing layer that writes events as emolog records.
///
/// The file and line columns come from the event's metadata; the function
/// column holds the last segment of the event's module path, since tracing
/// does not record function names.
pub struct EmojiLayer<M = fn() -> io::Stdout> {
    make_writer: M,
}

impl EmojiLayer {
    /// Creates a layer that writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            make_writer: io::stdout,
        }
    }
}

impl Default for EmojiLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> EmojiLayer<M> {
    /// Replaces the destination of rendered lines.
    #[must_use]
    pub fn with_writer<M2>(self, make_writer: M2) -> EmojiLayer<M2>
    where
        M2: for<'w> MakeWriter<'w> + 'static,
    {
        EmojiLayer { make_writer }
    }

    /// Reduces a module path to its final segment.
    fn module_tail(module_path: &str) -> &str {
        module_path.rsplit("::").next().unwrap_or_default()
    }
}

impl<S, M> Layer<S> for EmojiLayer<M>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    M: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if !ENABLED {
            return;
        }

        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(
            metadata.file().unwrap_or_default(),
            metadata.line().unwrap_or(0),
            metadata.module_path().map(Self::module_tail).unwrap_or_default(),
        );
        let line = render_line(
            &timestamp::now(),
            LogLevel::from(*metadata.level()),
            &site,
            &visitor,
        );

        let mut sink = LineSink::new(self.make_writer.make_writer_for(metadata));
        let _ = sink.write_line(line);
    }
}

/// Collects the `message` field followed by ` key=value` for other fields.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        f.write_str(&self.fields)
    }
}

/// Installs a global subscriber that prints tracing events as emolog records.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(EmojiLayer::new()).init();
}
