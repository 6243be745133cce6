//! Transient notifications (toasts) raised by the page.
//!
//! Rendering toasts is the host's job; the page only emits them.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: StatusKind,
    pub text: String,
    /// How long the host should keep it visible.
    pub ttl: Duration,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier for headless runs: notifications only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            StatusKind::Error => {
                log::warn!("[Notify] {}", notification.text)
            }
            _ => log::info!(
                "[Notify] {}: {}",
                notification.kind.as_str(),
                notification.text
            ),
        }
    }
}
