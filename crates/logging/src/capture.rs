//! crates/logging/src/capture.rs
//! Thread-local capture of emitted lines for tests.
//!
//! While capture is active on a thread, that thread's records are appended
//! to an in-memory buffer instead of reaching stdout. Other threads are
//! unaffected.

use std::cell::RefCell;

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Starts capturing on the current thread, discarding any earlier capture.
pub fn start_capture() {
    CAPTURED.with(|captured| {
        *captured.borrow_mut() = Some(Vec::new());
    });
}

/// Returns the lines captured so far and keeps capturing.
pub fn drain_captured() -> Vec<String> {
    CAPTURED.with(|captured| {
        captured
            .borrow_mut()
            .as_mut()
            .map(|lines| lines.drain(..).collect())
            .unwrap_or_default()
    })
}

/// Stops capturing and returns the remaining lines.
pub fn stop_capture() -> Vec<String> {
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}

/// Runs `f` with capture active and returns the lines it emitted.
///
/// # Examples
///
/// ```
/// use logging::{capture, ENABLED};
///
/// let lines = capture::capture(|| logging::i!("captured"));
/// assert_eq!(lines.len(), usize::from(ENABLED));
/// ```
pub fn capture<F>(f: F) -> Vec<String>
where
    F: FnOnce(),
{
    start_capture();
    f();
    stop_capture()
}

/// Appends `line` when capture is active; reports whether it was taken.
pub(crate) fn try_capture(line: &str) -> bool {
    CAPTURED.with(|captured| match captured.borrow_mut().as_mut() {
        Some(lines) => {
            lines.push(line.to_owned());
            true
        }
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_capture_rejects_lines() {
        stop_capture();
        assert!(!try_capture("ignored"));
        assert!(drain_captured().is_empty());
    }

    #[test]
    fn drain_keeps_capture_active() {
        start_capture();
        assert!(try_capture("one"));
        assert_eq!(drain_captured(), vec!["one".to_owned()]);
        assert!(try_capture("two"));
        assert_eq!(stop_capture(), vec!["two".to_owned()]);
        assert!(!try_capture("three"));
    }

    #[test]
    fn capture_is_per_thread() {
        start_capture();
        let taken_elsewhere = std::thread::spawn(|| try_capture("other thread"))
            .join()
            .expect("thread joins");
        assert!(!taken_elsewhere);
        assert!(stop_capture().is_empty());
    }
}
