//! Injected viewport-width signal.
//!
//! Hosts publish the current width (px) here instead of the page reaching
//! for a platform resize API. `None` means the width is unknown, which
//! carousels treat as desktop.

use tokio::sync::watch;

/// Publishing side, owned by the host.
#[derive(Debug, Clone)]
pub struct ViewportSignal {
    tx: watch::Sender<Option<u32>>,
}

/// Subscription held by a mounted page. Dropping it detaches the listener.
pub type ViewportWatch = watch::Receiver<Option<u32>>;

impl ViewportSignal {
    pub fn new(initial_width: Option<u32>) -> Self {
        let (tx, _rx) = watch::channel(initial_width);
        Self { tx }
    }

    /// Publish a resize. Listeners are only woken when the width changed.
    pub fn resize(&self, width: Option<u32>) {
        self.tx.send_if_modified(|current| {
            if *current == width {
                false
            } else {
                *current = width;
                true
            }
        });
    }

    pub fn width(&self) -> Option<u32> {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ViewportWatch {
        self.tx.subscribe()
    }

    /// Number of mounted listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ViewportSignal {
    fn default() -> Self {
        Self::new(None)
    }
}
