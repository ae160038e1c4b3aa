//! User-visible notification sinks
//!
//! Notifications are fire-and-forget and only ever report failures.

use std::sync::Mutex;

/// Shows a message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Writes each notice to stderr, prefixed so it stands apart from output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    pub fn new(quiet: bool) -> Self {
        StderrNotifier { quiet }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        if !self.quiet {
            eprintln!("notice: {message}");
        }
    }
}

/// Keeps every notice in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
