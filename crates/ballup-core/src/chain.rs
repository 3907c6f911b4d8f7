//! Fixed row of linked nodes
//!
//! Nodes live in a flat arena and point at their neighbours by index, so the
//! row can be walked either way without shared ownership.

use crate::controller::Heading;
use crate::geometry::{draw_node, NodeStyle};
use crate::state::NodeState;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: NodeState,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

/// Result of asking for the neighbour in a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The neighbour exists
    Moved(usize),
    /// Edge of the row; carries the unchanged index
    Boundary(usize),
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Build `count` nodes front to back; `count` is at least one
    pub fn new(count: usize, step_gap: f64) -> Self {
        let count = count.max(1);
        let nodes = (0..count)
            .map(|index| Node {
                index,
                state: NodeState::new(step_gap),
                next: (index + 1 < count).then_some(index + 1),
                prev: index.checked_sub(1),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Neighbour of `index` in `heading`, or `Boundary` at either end
    pub fn get_next(&self, index: usize, heading: Heading) -> Neighbor {
        let neighbor = self.nodes.get(index).and_then(|node| match heading {
            Heading::Backward => node.prev,
            Heading::Forward => node.next,
        });
        match neighbor {
            Some(next) => Neighbor::Moved(next),
            None => Neighbor::Boundary(index),
        }
    }

    /// Draw every node in index order, with the ball on `active`
    ///
    /// Idle nodes keep whatever scale they last settled at.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, active: usize, style: &NodeStyle) {
        let count = self.nodes.len();
        for node in &self.nodes {
            draw_node(
                surface,
                node.index,
                count,
                node.state.scale,
                node.index == active,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn test_chain_links() {
        let chain = NodeChain::new(5, 0.02);
        assert_eq!(chain.len(), 5);

        let mut links = 0;
        let mut cursor = chain.node(0).and_then(|n| n.next);
        while let Some(index) = cursor {
            links += 1;
            cursor = chain.node(index).and_then(|n| n.next);
        }
        assert_eq!(links, 4);

        assert_eq!(chain.node(0).unwrap().prev, None);
        for i in 1..5 {
            assert_eq!(chain.node(i).unwrap().prev, Some(i - 1));
            assert_eq!(chain.node(i).unwrap().index, i);
        }
        assert_eq!(chain.node(4).unwrap().next, None);
    }

    #[test]
    fn test_single_node_chain() {
        let chain = NodeChain::new(1, 0.02);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.get_next(0, Heading::Forward), Neighbor::Boundary(0));
        assert_eq!(chain.get_next(0, Heading::Backward), Neighbor::Boundary(0));
    }

    #[test]
    fn test_get_next_forward() {
        let chain = NodeChain::new(5, 0.02);
        for i in 0..4 {
            assert_eq!(chain.get_next(i, Heading::Forward), Neighbor::Moved(i + 1));
        }
        assert_eq!(chain.get_next(4, Heading::Forward), Neighbor::Boundary(4));
    }

    #[test]
    fn test_get_next_backward() {
        let chain = NodeChain::new(5, 0.02);
        for i in 1..5 {
            assert_eq!(chain.get_next(i, Heading::Backward), Neighbor::Moved(i - 1));
        }
        assert_eq!(chain.get_next(0, Heading::Backward), Neighbor::Boundary(0));
    }

    #[test]
    fn test_draw_covers_every_node_with_one_ball() {
        let chain = NodeChain::new(5, 0.02);
        let mut surface = RecordingSurface::new(600.0, 300.0);
        chain.draw(&mut surface, 3, &NodeStyle::default());

        assert_eq!(surface.lines(), 10);
        let circles = surface.circles();
        assert_eq!(circles.len(), 1);
        // Idle ball of node 3 rests at the slot origin
        assert!((circles[0].0 - 400.0).abs() < 1e-9);
        assert!((circles[0].1 - 150.0).abs() < 1e-9);
    }
}
