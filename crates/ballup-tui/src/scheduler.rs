//! Background redraw timer
//!
//! The animation asks for "redraw in 30ms" from inside the draw call. Instead
//! of sleeping there, the request becomes a tokio task that sleeps and then
//! posts [`AppEvent::Redraw`] back to the main loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ballup_core::{Error, RedrawHost};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::AppEvent;

/// Redraw host backed by the tokio runtime
///
/// At most one delayed redraw is in flight; further requests while a timer
/// is pending are merged into it.
#[derive(Clone)]
pub struct FrameScheduler {
    tx: UnboundedSender<AppEvent>,
    runtime: Handle,
    pending: Arc<AtomicBool>,
}

impl FrameScheduler {
    /// Must be called from inside a tokio runtime
    pub fn new(tx: UnboundedSender<AppEvent>) -> Result<Self> {
        let runtime = Handle::try_current().context("frame scheduler needs a tokio runtime")?;
        Ok(Self {
            tx,
            runtime,
            pending: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Whether a delayed redraw is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl RedrawHost for FrameScheduler {
    fn request_redraw(&self) {
        if self.tx.send(AppEvent::Redraw).is_err() {
            debug!("redraw requested after event loop closed");
        }
    }

    fn schedule_redraw(&self, delay: Duration) -> ballup_core::Result<()> {
        if self.tx.is_closed() {
            return Err(Error::Scheduler("event loop closed".to_string()));
        }
        if self.pending.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let tx = self.tx.clone();
        let pending = Arc::clone(&self.pending);
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            pending.store(false, Ordering::Release);
            // Receiver gone means we are shutting down
            let _ = tx.send(AppEvent::Redraw);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_request_redraw_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FrameScheduler::new(tx).unwrap();

        scheduler.request_redraw();
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::Redraw));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_redraw_waits_for_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FrameScheduler::new(tx).unwrap();

        scheduler.schedule_redraw(Duration::from_millis(30)).unwrap();
        assert!(scheduler.is_pending());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(15)).await;
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::Redraw));
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_requests_are_merged() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FrameScheduler::new(tx).unwrap();

        for _ in 0..3 {
            scheduler.schedule_redraw(Duration::from_millis(30)).unwrap();
        }
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(rx.try_recv().ok(), Some(AppEvent::Redraw));
        assert!(rx.try_recv().is_err());

        // Once fired, the next request arms a new timer
        scheduler.schedule_redraw(Duration::from_millis(30)).unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::Redraw));
    }

    #[tokio::test]
    async fn test_closed_loop_is_an_error_not_a_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = FrameScheduler::new(tx).unwrap();
        drop(rx);

        assert!(scheduler.schedule_redraw(Duration::from_millis(30)).is_err());
        scheduler.request_redraw();
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(FrameScheduler::new(tx).is_err());
    }
}
