//! Per-frame composition of the controller and the frame loop

use tracing::debug;

use crate::animator::{AnimationLoop, FrameOutcome};
use crate::chain::NodeChain;
use crate::color::Rgb;
use crate::config::AppConfig;
use crate::controller::{Heading, SequenceController};
use crate::geometry::NodeStyle;
use crate::state::UpdateResult;
use crate::surface::{RedrawHost, Surface};

/// Read-only view of the animation for status displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub current: usize,
    pub node_count: usize,
    pub heading: Heading,
    pub scale: f64,
    pub animating: bool,
}

pub struct Renderer<H: RedrawHost> {
    controller: SequenceController,
    animation: AnimationLoop,
    style: NodeStyle,
    background: Rgb,
    host: H,
}

impl<H: RedrawHost> Renderer<H> {
    pub fn new(config: &AppConfig, host: H) -> Self {
        let chain = NodeChain::new(config.animation.node_count, config.animation.step_gap);
        Self {
            controller: SequenceController::new(chain),
            animation: AnimationLoop::new(config.animation.frame_interval()),
            style: NodeStyle::from_config(config),
            background: config.style.background,
            host,
        }
    }

    pub fn controller(&self) -> &SequenceController {
        &self.controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Draw one frame and advance the animation if it is running
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.background);
        self.controller.draw(surface, &self.style);
        self.tick();
    }

    /// Advance one frame without drawing
    ///
    /// Returns the controller's update result, or `None` when the loop is
    /// not running.
    pub fn tick(&mut self) -> Option<UpdateResult> {
        let controller = &mut self.controller;
        let mut outcome = None;
        self.animation.animate(&self.host, || {
            let result = controller.update();
            outcome = Some(result);
            if result.is_settled() {
                FrameOutcome::Stop
            } else {
                FrameOutcome::Continue
            }
        });
        outcome
    }

    /// Start the next transition; `false` if one is already running
    pub fn handle_tap(&mut self) -> bool {
        if !self.controller.start_updating() {
            debug!(node = self.controller.current(), "tap ignored, node busy");
            return false;
        }
        debug!(node = self.controller.current(), "tap accepted");
        self.animation.start(&self.host);
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.controller.current(),
            node_count: self.controller.chain().len(),
            heading: self.controller.heading(),
            scale: self
                .controller
                .current_node()
                .map(|node| node.state.scale)
                .unwrap_or_default(),
            animating: self.animation.is_active(),
        }
    }
}
