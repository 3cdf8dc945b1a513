mod line_sink;

pub use line_sink::LineSink;
