//! # UI Log
//!
//! Holds diagnostic lines until the user asks to see them. The dispatch
//! loop can dump the buffer into the output field (Ctrl+L, then Enter) or
//! clear it (Ctrl+F).
//!
//! The buffer is shared between the input relay and the dispatch loop, so
//! the line list sits behind an `RwLock`: appends and flushes take the
//! write lock, dumps take the read lock.
//!
//! Every line is also mirrored to the `log` facade so the file log written
//! by simplelog carries the same trail.

use std::sync::{Arc, RwLock};

use log::{debug, warn};

/// Cloneable handle to a shared, append-only line buffer.
#[derive(Clone, Debug, Default)]
pub struct UiLog {
    lines: Arc<RwLock<Vec<String>>>,
}

impl UiLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. `component` identifies the part of the UI writing it.
    pub fn write(&self, component: &str, message: impl AsRef<str>) {
        let line = format!("{}: {}", component, message.as_ref());
        debug!("{}", line);
        match self.lines.write() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => {
                warn!("UI log lock poisoned, recovering");
                poisoned.into_inner().push(line);
            }
        }
    }

    /// Drop every buffered line.
    pub fn flush(&self) {
        match self.lines.write() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    /// All buffered lines joined with `\n`.
    pub fn dump(&self) -> String {
        match self.lines.read() {
            Ok(lines) => lines.join("\n"),
            Err(poisoned) => poisoned.into_inner().join("\n"),
        }
    }

    pub fn len(&self) -> usize {
        match self.lines.read() {
            Ok(lines) => lines.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_prefixes_component() {
        let log = UiLog::new();
        log.write("tui", "received input: <Tab>");
        log.write("focus", format!("selecting component at index {}", 2));
        assert_eq!(
            log.dump(),
            "tui: received input: <Tab>\nfocus: selecting component at index 2"
        );
    }

    #[test]
    fn test_flush_clears_lines() {
        let log = UiLog::new();
        log.write("tui", "one");
        log.write("tui", "two");
        assert_eq!(log.len(), 2);
        log.flush();
        assert!(log.is_empty());
        assert_eq!(log.dump(), "");
    }

    #[test]
    fn test_clones_share_buffer() {
        let log = UiLog::new();
        let other = log.clone();
        other.write("relay", "hello");
        assert_eq!(log.dump(), "relay: hello");
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let log = UiLog::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.write("worker", format!("{t}-{i}"));
                        let _ = log.dump();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 200);
    }
}
