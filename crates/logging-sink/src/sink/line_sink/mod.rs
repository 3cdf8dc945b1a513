/// Line-oriented sink that writes pre-rendered text into an [`std::io::Write`] target.
///
/// Every call to [`write_line`](Self::write_line) appends the terminator to
/// the owned line and hands both to the writer in one `write_all`, which
/// keeps lines intact when the writer is a locked shared stream.
///
/// # Examples
///
/// Collect log lines into a [`Vec<u8>`]:
///
/// ```
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("2024-01-15 09:30 [🐞DEBUG] [main.rs: 3] main → ready".to_owned())?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with("ready\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineSink<W> {
    writer: W,
}

mod writing;

impl<W> LineSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
