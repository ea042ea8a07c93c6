//! Outbound "content changed" notifications.
//!
//! The notifier only knows the [`ReloadChannel`] trait. Delivering the
//! signal to browsers (sockets, SSE, ...) is the job of whatever sits
//! behind the channel.

use std::fmt;
use tokio::sync::broadcast;

/// Receives a zero-payload signal each time an artifact's content changed.
///
/// Implementations must not fail the caller; an unavailable transport is
/// the implementation's concern.
pub trait ReloadChannel: Send + Sync {
    fn content_changed(&self);
}

impl<F> ReloadChannel for F
where
    F: Fn() + Send + Sync,
{
    fn content_changed(&self) {
        self()
    }
}

/// Channel that drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChannel;

impl ReloadChannel for NoopChannel {
    fn content_changed(&self) {}
}

/// The signal value carried by [`BroadcastChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentChanged;

impl ContentChanged {
    /// Wire form understood by live-reload clients.
    pub const MESSAGE: &'static str = "content-changed";
}

impl fmt::Display for ContentChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

/// Default channel capacity for the broadcast channel.
const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Fan-out channel delivering [`ContentChanged`] to every subscriber.
///
/// Sending with no subscribers is not an error. Slow subscribers that fall
/// more than the capacity behind observe `RecvError::Lagged` and can treat
/// it as a single change.
#[derive(Debug, Clone)]
pub struct BroadcastChannel {
    sender: broadcast::Sender<ContentChanged>,
}

impl BroadcastChannel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BROADCAST_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentChanged> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadChannel for BroadcastChannel {
    fn content_changed(&self) {
        match self.sender.send(ContentChanged) {
            Ok(receivers) => tracing::trace!(receivers, "content change broadcast"),
            Err(_) => tracing::trace!("content changed with no listeners"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn closures_are_channels() {
        let calls = AtomicUsize::new(0);
        let channel = || {
            calls.fetch_add(1, Ordering::SeqCst);
        };
        channel.content_changed();
        channel.content_changed();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn noop_channel_does_nothing() {
        NoopChannel.content_changed();
    }

    #[test]
    fn broadcast_without_subscribers_is_fine() {
        let channel = BroadcastChannel::new();
        assert_eq!(channel.receiver_count(), 0);
        channel.content_changed();
    }

    #[tokio::test]
    async fn broadcast_reaches_every_subscriber() {
        let channel = BroadcastChannel::new();
        let mut rx1 = channel.subscribe();
        let mut rx2 = channel.subscribe();
        assert_eq!(channel.receiver_count(), 2);

        channel.content_changed();

        assert_eq!(rx1.recv().await.unwrap(), ContentChanged);
        assert_eq!(rx2.recv().await.unwrap(), ContentChanged);
    }

    #[test]
    fn wire_message() {
        assert_eq!(ContentChanged.to_string(), "content-changed");
    }
}
