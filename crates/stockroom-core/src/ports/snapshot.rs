//! Full-snapshot fan-out for live queries.
//!
//! Store adapters publish the complete, ordered product list after every
//! change; subscribers read it through a `SnapshotStream`.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, warn};

use crate::domain::Product;

/// Broadcast channel capacity for product snapshots
const CHANNEL_CAPACITY: usize = 16;

/// Publisher side of a live query.
#[derive(Debug, Clone)]
pub struct SnapshotHub {
    sender: broadcast::Sender<Vec<Product>>,
}

impl SnapshotHub {
    /// Create a new hub
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish a full snapshot to all subscribers
    pub fn publish(&self, products: Vec<Product>) {
        // Nobody listening is the normal case for one-shot commands
        if self.sender.receiver_count() > 0 {
            debug!(count = products.len(), "Publishing product snapshot");
            let _ = self.sender.send(products);
        }
    }

    /// Register a subscriber before the initial snapshot is read.
    ///
    /// Callers fetch the initial snapshot after this so that no change
    /// committed in between is missed.
    pub fn receiver(&self) -> broadcast::Receiver<Vec<Product>> {
        self.sender.subscribe()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber side of a live query.
///
/// Yields the initial snapshot first, then every published snapshot. When
/// several snapshots are queued only the newest is returned, since each one
/// already holds the complete collection.
#[derive(Debug)]
pub struct SnapshotStream {
    initial: Option<Vec<Product>>,
    receiver: broadcast::Receiver<Vec<Product>>,
}

impl SnapshotStream {
    /// Build a stream from an initial snapshot and a receiver obtained
    /// from [`SnapshotHub::receiver`] before that snapshot was read.
    pub fn new(initial: Vec<Product>, receiver: broadcast::Receiver<Vec<Product>>) -> Self {
        Self {
            initial: Some(initial),
            receiver,
        }
    }

    /// Wait for the next snapshot. Returns `None` once the store is gone.
    pub async fn next(&mut self) -> Option<Vec<Product>> {
        if let Some(initial) = self.initial.take() {
            return Some(initial);
        }

        let mut latest = loop {
            match self.receiver.recv().await {
                Ok(snapshot) => break snapshot,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Snapshot subscriber lagged behind");
                }
                Err(RecvError::Closed) => return None,
            }
        };

        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => latest = snapshot,
                Err(TryRecvError::Lagged(_)) => {}
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Some(latest),
            }
        }
    }
}
