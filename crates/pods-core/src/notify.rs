//! User-facing informational notices

use std::sync::{Arc, Mutex, PoisonError};

/// Destination for informational lines meant for the user.
pub trait Notifier: Send {
    fn notice(&self, message: &str);
}

/// Writes notices to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notice(&self, message: &str) {
        println!("{message}");
    }
}

/// Keeps every notice in memory. Clones share the same buffer, so a test
/// can hand one clone to a [`Config`](crate::Config) and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
