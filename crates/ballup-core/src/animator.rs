//! Frame loop gate
//!
//! The loop never sleeps itself. While active, every rendered frame runs the
//! frame step once and then asks the host to redraw again after the frame
//! interval; the host owns the timer.

use std::time::Duration;

use tracing::{debug, trace};

use crate::surface::RedrawHost;

/// What the frame step wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// Boolean-gated repeating frame action
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    active: bool,
    frame_interval: Duration,
}

impl AnimationLoop {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            active: false,
            frame_interval,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate and request an immediate redraw
    ///
    /// Does not run the frame step itself. Returns `false` if already active.
    pub fn start<H: RedrawHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        debug!("animation loop started");
        host.request_redraw();
        true
    }

    /// Deactivate; returns `false` if already stopped
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        debug!("animation loop stopped");
        true
    }

    /// Run one frame step if active, then schedule the next redraw
    ///
    /// The redraw is scheduled even when the step stops the loop, so the
    /// settled frame is drawn. Scheduling failures are dropped: the next
    /// host-driven draw picks the animation back up.
    pub fn animate<H, F>(&mut self, host: &H, on_frame: F)
    where
        H: RedrawHost + ?Sized,
        F: FnOnce() -> FrameOutcome,
    {
        if !self.active {
            return;
        }
        trace!("animation frame");
        if on_frame() == FrameOutcome::Stop {
            self.stop();
        }
        if let Err(e) = host.schedule_redraw(self.frame_interval) {
            debug!("skipping forced redraw: {}", e);
        }
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::CountingHost;

    #[test]
    fn test_start_requests_one_redraw() {
        let host = CountingHost::default();
        let mut animator = AnimationLoop::default();

        assert!(animator.start(&host));
        assert!(animator.is_active());
        assert_eq!(host.immediate.get(), 1);

        // Second start is a no-op
        assert!(!animator.start(&host));
        assert_eq!(host.immediate.get(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let host = CountingHost::default();
        let mut animator = AnimationLoop::default();
        assert!(!animator.stop());

        animator.start(&host);
        assert!(animator.stop());
        assert!(!animator.stop());
        assert!(!animator.is_active());
    }

    #[test]
    fn test_animate_inactive_skips_frame() {
        let host = CountingHost::default();
        let mut animator = AnimationLoop::default();
        let mut called = false;
        animator.animate(&host, || {
            called = true;
            FrameOutcome::Continue
        });
        assert!(!called);
        assert!(host.scheduled.borrow().is_empty());
    }

    #[test]
    fn test_animate_runs_step_and_schedules() {
        let host = CountingHost::default();
        let mut animator = AnimationLoop::new(Duration::from_millis(30));
        animator.start(&host);

        let mut frames = 0;
        for _ in 0..3 {
            animator.animate(&host, || {
                frames += 1;
                FrameOutcome::Continue
            });
        }
        assert_eq!(frames, 3);
        assert_eq!(*host.scheduled.borrow(), vec![Duration::from_millis(30); 3]);
        assert!(animator.is_active());
    }

    #[test]
    fn test_stop_outcome_still_schedules_final_frame() {
        let host = CountingHost::default();
        let mut animator = AnimationLoop::default();
        animator.start(&host);

        animator.animate(&host, || FrameOutcome::Stop);
        assert!(!animator.is_active());
        assert_eq!(host.scheduled.borrow().len(), 1);

        animator.animate(&host, || FrameOutcome::Continue);
        assert_eq!(host.scheduled.borrow().len(), 1);
    }

    #[test]
    fn test_scheduling_failure_is_swallowed() {
        let host = CountingHost::default();
        host.fail.set(true);
        let mut animator = AnimationLoop::default();
        animator.start(&host);

        animator.animate(&host, || FrameOutcome::Continue);
        assert!(animator.is_active());
    }
}
