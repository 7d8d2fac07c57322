//! Caller-side debouncing for interactive input.
//!
//! `push` replaces the pending value. A value comes out of the receiver only
//! once the quiet period passes with no newer push, so a burst of keystrokes
//! costs one suggestion lookup instead of one per key.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::trace;

/// Quiet period used by the interactive search
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Sending half of a debounced channel.
///
/// Dropping the debouncer closes the receiver. A value still pending at that
/// point is discarded.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task. Must be called inside a tokio runtime.
    pub fn new(quiet_period: Duration) -> (Self, mpsc::Receiver<T>) {
        let (tx, mut incoming) = mpsc::unbounded_channel::<T>();
        let (settled_tx, settled_rx) = mpsc::channel(1);

        tokio::spawn(async move {
            while let Some(mut pending) = incoming.recv().await {
                loop {
                    tokio::select! {
                        next = incoming.recv() => match next {
                            Some(value) => {
                                trace!("Debounce timer reset");
                                pending = value;
                            }
                            None => return,
                        },
                        _ = sleep(quiet_period) => {
                            if settled_tx.send(pending).await.is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        (Self { tx }, settled_rx)
    }

    pub fn with_default_quiet_period() -> (Self, mpsc::Receiver<T>) {
        Self::new(DEFAULT_QUIET_PERIOD)
    }

    /// Replace the pending value and restart the quiet period.
    ///
    /// Returns false once the receiver has gone away.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}
