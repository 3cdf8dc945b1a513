use super::LineSink;
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `line` followed by `\n` in a single `write_all`.
    ///
    /// The terminator is pushed onto the owned string, so a line rendered
    /// with spare capacity reaches the writer without another copy.
    pub fn write_line(&mut self, mut line: String) -> io::Result<()> {
        line.push('\n');
        self.writer.write_all(line.as_bytes())
    }
}
