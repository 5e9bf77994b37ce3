//! Status notifier — the narrow seam to whatever displays messages.
//!
//! The core never touches presentation. It hands short text lines to a
//! StatusSink; the default sink routes to the log. A message identical
//! to the immediately preceding one is suppressed when less than 4
//! seconds have passed since it was last shown.

use crate::types::Seconds;

pub const REPEAT_SUPPRESS_SECS: Seconds = 4.0;

/// Collaborator interface: receives every message that passes the
/// suppression filter.
pub trait StatusSink: Send {
    fn show(&mut self, message: &str);
}

/// Default sink: status lines go to the log.
pub struct LogSink;

impl StatusSink for LogSink {
    fn show(&mut self, message: &str) {
        log::info!("{message}");
    }
}

pub struct Notifier {
    sink: Box<dyn StatusSink>,
    last_message: Option<String>,
    last_shown_at: Seconds,
}

impl Notifier {
    pub fn new(sink: Box<dyn StatusSink>) -> Self {
        Self {
            sink,
            last_message: None,
            last_shown_at: 0.0,
        }
    }

    /// Show `message`, unless it repeats the previous one inside the
    /// suppression window.
    pub fn notify(&mut self, now: Seconds, message: &str) {
        if let Some(last) = &self.last_message {
            if last == message && now - self.last_shown_at < REPEAT_SUPPRESS_SECS {
                return;
            }
        }
        self.sink.show(message);
        self.last_message = Some(message.to_string());
        self.last_shown_at = now;
    }
}
