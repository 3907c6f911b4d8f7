//! Cursor walking back and forth across the node row

use tracing::debug;

use crate::chain::{Neighbor, Node, NodeChain};
use crate::geometry::NodeStyle;
use crate::state::UpdateResult;
use crate::surface::Surface;

/// Travel direction of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

impl Heading {
    pub fn flipped(self) -> Self {
        match self {
            Heading::Forward => Heading::Backward,
            Heading::Backward => Heading::Forward,
        }
    }
}

/// Owns the row and the single active node
///
/// Starts idle on node 0 heading forward. Each settled transition moves the
/// cursor one node along its heading; hitting either end of the row turns it
/// around and leaves it on the end node.
#[derive(Debug, Clone)]
pub struct SequenceController {
    chain: NodeChain,
    current: usize,
    heading: Heading,
}

impl SequenceController {
    pub fn new(chain: NodeChain) -> Self {
        Self {
            chain,
            current: 0,
            heading: Heading::Forward,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> Option<&Node> {
        self.chain.node(self.current)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.current_node().is_some_and(|node| !node.state.is_idle())
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &NodeStyle) {
        self.chain.draw(surface, self.current, style);
    }

    /// Advance the active node; on settlement hand over to the next node
    pub fn update(&mut self) -> UpdateResult {
        let Some(node) = self.chain.node_mut(self.current) else {
            return UpdateResult::Unsettled;
        };
        let result = node.state.update();

        if let UpdateResult::SettledAt(anchor) = result {
            match self.chain.get_next(self.current, self.heading) {
                Neighbor::Moved(next) => {
                    debug!(from = self.current, to = next, anchor, "node settled");
                    self.current = next;
                }
                Neighbor::Boundary(index) => {
                    self.heading = self.heading.flipped();
                    debug!(node = index, anchor, heading = ?self.heading, "reached end of row, reversing");
                }
            }
        }

        result
    }

    /// Start the active node if it is idle
    pub fn start_updating(&mut self) -> bool {
        self.chain
            .node_mut(self.current)
            .is_some_and(|node| node.state.start_updating())
    }
}
