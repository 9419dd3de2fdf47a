//! Cancellation signal for long-running reads.

use std::sync::Arc;

use tokio::sync::watch;

/// Handle that cancels an operation observed through a [`CancellationReceiver`].
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

/// Receiving side of a [`CancellationToken`].
#[derive(Debug, Clone)]
pub struct CancellationReceiver {
    receiver: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Creates a connected token/receiver pair.
    #[must_use]
    pub fn new() -> (Self, CancellationReceiver) {
        let (sender, receiver) = watch::channel(false);
        (
            Self {
                sender: Arc::new(sender),
            },
            CancellationReceiver { receiver },
        )
    }

    /// Signals cancellation. Calling this more than once has no extra effect.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl CancellationReceiver {
    /// Completes when the paired token is cancelled.
    ///
    /// Never completes if the token is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_receiver() {
        let (token, mut receiver) = CancellationToken::new();
        assert!(!token.is_cancelled());

        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), receiver.cancelled())
            .await
            .unwrap_or_else(|_| unreachable!("receiver should observe cancellation"));
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_dropped_token_never_cancels() {
        let (token, mut receiver) = CancellationToken::new();
        drop(token);

        let result = tokio::time::timeout(Duration::from_millis(20), receiver.cancelled()).await;
        assert!(result.is_err());
    }
}
