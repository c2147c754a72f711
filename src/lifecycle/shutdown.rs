//! Shutdown coordination.
//!
//! One `Shutdown` is created at startup. The server holds a receiver and
//! stops accepting once anything calls `trigger`, either an OS signal via
//! `trigger_on_signal` or a direct call.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::lifecycle::signals;

#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Tell every subscriber to stop. Returns how many were listening.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Trigger once the process receives Ctrl+C or SIGTERM.
    pub fn trigger_on_signal(&self) -> JoinHandle<()> {
        let shutdown = self.clone();
        tokio::spawn(async move {
            signals::wait_for_signal().await;
            let stopped = shutdown.trigger();
            tracing::info!(subscribers = stopped, "Shutdown triggered by signal");
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_all_subscribers() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        let mut worker = shutdown.clone().subscribe();

        assert_eq!(shutdown.trigger(), 2);
        assert!(server.recv().await.is_ok());
        assert!(worker.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        assert_eq!(Shutdown::new().trigger(), 0);
    }
}
