//! Timer that advances the carousel on its own

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::input::Action;

/// Send [`Action::AutoplayTick`] every `period` until the receiver is gone
pub fn spawn(period: Duration, tx: UnboundedSender<Action>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(Action::AutoplayTick).is_err() {
                debug!("Autoplay receiver dropped, stopping timer");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn(Duration::from_secs(2), tx);

        tokio::time::sleep(Duration::from_millis(1900)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.try_recv().ok(), Some(Action::AutoplayTick));

        drop(rx);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(handle.is_finished());
    }
}
