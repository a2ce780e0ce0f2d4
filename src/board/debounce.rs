//! Cancellable settle timer for rapidly-changing input.
//!
//! Keystroke-level updates are absorbed here: every push resets the quiet
//! period, and only the value that survives it is emitted downstream. The
//! raw in-flight value stays with the caller for immediate display.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period applied to free-text search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Emits the last pushed value once no further push has arrived for the
/// configured quiet period. Dropping the debouncer cancels any pending
/// emission.
///
pub struct Debouncer<T> {
    delay: Duration,
    sender: mpsc::UnboundedSender<T>,
    receiver: mpsc::UnboundedReceiver<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Returns a new instance with the given quiet period.
    ///
    pub fn new(delay: Duration) -> Debouncer<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        Debouncer {
            delay,
            sender,
            receiver,
            pending: None,
        }
    }

    /// Push a raw value, resetting the quiet-period timer. Any pending
    /// emission for a previous value is cancelled.
    ///
    pub fn push(&mut self, value: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver half lives as long as the debouncer; a send failure
            // just means the whole thing was torn down.
            let _ = sender.send(value);
        }));
    }

    /// Await the next settled value. Returns `None` only if the channel is
    /// closed, which cannot happen while the debouncer is alive.
    ///
    pub async fn settled(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Drain any settled values without waiting, returning the most recent.
    ///
    pub fn try_settled(&mut self) -> Option<T> {
        let mut latest = None;
        while let Ok(value) = self.receiver.try_recv() {
            latest = Some(value);
        }
        latest
    }

    /// Cancel any pending emission.
    ///
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Cancel any pending emission and discard values that already
    /// settled but were never consumed. After a reset, nothing pushed
    /// before it can surface downstream.
    ///
    pub fn reset(&mut self) {
        self.cancel();
        while self.receiver.try_recv().is_ok() {}
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
