//! MAVLink STATUSTEXT Notification System
//!
//! Centralized API for queueing STATUSTEXT messages to the Ground Control
//! Station. Modes, arming and failsafe code call the `send_*()` functions;
//! the telemetry layer drains the queue with [`take_pending_messages`].
//!
//! # Architecture
//!
//! - **Global Static**: StatusNotifier behind a critical-section mutex
//! - **Heapless Queue**: Fixed-capacity queue (16 messages), oldest dropped on overflow
//! - **Severity API**: One function per MAVLink severity (emergency through debug)
//!
//! Messages are limited to a single STATUSTEXT payload (50 bytes). Longer
//! text is truncated on a character boundary.
//!
//! # Usage
//!
//! ```ignore
//! use crate::communication::mavlink::status_notifier::send_info;
//!
//! send_info("#Acrobatics mode for maintenance work");
//! ```

use core::cell::RefCell;
use critical_section::Mutex;
use heapless::{Deque, String, Vec};
use mavlink::common::MavSeverity;

/// Maximum message length (one STATUSTEXT payload)
pub const MAX_MESSAGE_LEN: usize = 50;

/// Queue capacity (16 messages)
pub const QUEUE_CAPACITY: usize = 16;

/// Queued STATUSTEXT message with severity and text
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedMessage {
    pub severity: MavSeverity,
    pub text: String<MAX_MESSAGE_LEN>,
}

/// StatusNotifier manages a queue of pending STATUSTEXT messages
pub struct StatusNotifier {
    queue: Deque<QueuedMessage, QUEUE_CAPACITY>,
    dropped_count: u32,
}

impl StatusNotifier {
    /// Create a new StatusNotifier (const constructor for static initialization)
    const fn new() -> Self {
        Self {
            queue: Deque::new(),
            dropped_count: 0,
        }
    }

    /// Enqueue a message with the given severity and text
    ///
    /// If the queue is full, the oldest message is dropped and `dropped_count` is incremented.
    fn enqueue(&mut self, severity: MavSeverity, text: &str) {
        let text = truncate(text);

        let mut message_text = String::new();
        // Cannot fail: `truncate` keeps the text within capacity
        let _ = message_text.push_str(text);

        if self.queue.is_full() {
            self.queue.pop_front();
            self.dropped_count += 1;
            crate::log_warn!(
                "STATUSTEXT queue full, dropped {} messages",
                self.dropped_count
            );
        }

        let _ = self.queue.push_back(QueuedMessage {
            severity,
            text: message_text,
        });
    }
}

/// Cut `text` to at most [`MAX_MESSAGE_LEN`] bytes without splitting a character
fn truncate(text: &str) -> &str {
    if text.len() <= MAX_MESSAGE_LEN {
        return text;
    }

    let mut end = MAX_MESSAGE_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    crate::log_warn!(
        "STATUSTEXT truncated to {} bytes (was {} bytes)",
        end,
        text.len()
    );
    &text[..end]
}

/// Global StatusNotifier instance
static NOTIFIER: Mutex<RefCell<StatusNotifier>> = Mutex::new(RefCell::new(StatusNotifier::new()));

/// Send an EMERGENCY severity message (severity 0)
pub fn send_emergency(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_EMERGENCY, text);
}

/// Send an ALERT severity message (severity 1)
pub fn send_alert(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_ALERT, text);
}

/// Send a CRITICAL severity message (severity 2)
pub fn send_critical(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_CRITICAL, text);
}

/// Send an ERROR severity message (severity 3)
///
/// Examples: "Thruster override failed"
pub fn send_error(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_ERROR, text);
}

/// Send a WARNING severity message (severity 4)
pub fn send_warning(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_WARNING, text);
}

/// Send a NOTICE severity message (severity 5)
pub fn send_notice(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_NOTICE, text);
}

/// Send an INFORMATIONAL severity message (severity 6)
///
/// Examples: mode advisories on entry
pub fn send_info(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_INFO, text);
}

/// Send a DEBUG severity message (severity 7)
pub fn send_debug(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_DEBUG, text);
}

fn send_statustext(severity: MavSeverity, text: &str) {
    critical_section::with(|cs| {
        NOTIFIER.borrow(cs).borrow_mut().enqueue(severity, text);
    });
}

/// Drain all pending messages, oldest first
///
/// Called by the telemetry layer once per send cycle.
pub fn take_pending_messages() -> Vec<QueuedMessage, QUEUE_CAPACITY> {
    critical_section::with(|cs| {
        let mut notifier = NOTIFIER.borrow(cs).borrow_mut();
        let mut messages = Vec::new();
        while let Some(message) = notifier.queue.pop_front() {
            let _ = messages.push(message);
        }
        messages
    })
}

/// Number of messages dropped on queue overflow since boot
pub fn dropped_count() -> u32 {
    critical_section::with(|cs| NOTIFIER.borrow(cs).borrow().dropped_count)
}

#[cfg(test)]
pub(crate) fn reset() {
    critical_section::with(|cs| {
        let mut notifier = NOTIFIER.borrow(cs).borrow_mut();
        notifier.queue.clear();
        notifier.dropped_count = 0;
    });
}
