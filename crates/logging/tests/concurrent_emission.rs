//! Integration tests for records written from several threads at once.
//!
//! Each record must arrive as one complete line; the relative order between
//! threads is unspecified.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use logging::{CallSite, ENABLED, LogLevel, emit_to};
use logging_sink::LineSink;

const THREADS: usize = 8;
const RECORDS_PER_THREAD: usize = 50;

/// Writer shared between threads; each `write` call is atomic.
#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("writer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn concurrent_records_stay_whole() {
    let shared = SharedWriter::default();

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let writer = shared.clone();
            thread::spawn(move || {
                let mut sink = LineSink::new(writer);
                let site = CallSite::new("src/worker.rs", 10, "worker");
                for index in 0..RECORDS_PER_THREAD {
                    let level = LogLevel::ALL[index % LogLevel::ALL.len()];
                    emit_to(&mut sink, level, format_args!("w{worker}-r{index}"), &site)
                        .expect("shared writes succeed");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread joins");
    }

    let bytes = shared.0.lock().expect("writer lock").clone();
    let output = String::from_utf8(bytes).expect("utf-8");

    if !ENABLED {
        assert!(output.is_empty());
        return;
    }

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * RECORDS_PER_THREAD);
    for line in &lines {
        assert!(line.contains(" [worker.rs: 10] worker → w"), "{line}");
        assert_eq!(line.matches(" → ").count(), 1, "interleaved line: {line}");
    }

    for worker in 0..THREADS {
        for index in 0..RECORDS_PER_THREAD {
            let suffix = format!("→ w{worker}-r{index}");
            assert_eq!(
                lines.iter().filter(|line| line.ends_with(&suffix)).count(),
                1,
                "missing {suffix}"
            );
        }
    }
}
