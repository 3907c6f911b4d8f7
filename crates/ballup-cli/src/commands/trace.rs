use std::time::Duration;

use anyhow::{bail, Result};
use tracing::info;

use ballup_core::{AppConfig, Heading, RedrawHost, Renderer, UpdateResult};

/// Host for running frames without a terminal
struct Headless;

impl RedrawHost for Headless {
    fn request_redraw(&self) {}

    fn schedule_redraw(&self, _delay: Duration) -> ballup_core::Result<()> {
        Ok(())
    }
}

/// One completed transition
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub tap: usize,
    pub node: usize,
    pub anchor: f64,
    pub ticks: usize,
    pub next: usize,
    pub heading: Heading,
}

/// Tap `taps` times, letting each transition run to completion
pub fn simulate(config: &AppConfig, taps: usize) -> Result<Vec<Settlement>> {
    let mut renderer = Renderer::new(config, Headless);
    // Enough frames for any valid step gap
    let max_ticks = (2.0 / config.animation.step_gap).ceil() as usize + 1;
    let mut settlements = Vec::new();

    for tap in 1..=taps {
        let node = renderer.snapshot().current;
        if !renderer.handle_tap() {
            bail!("tap {} ignored while node {} was still moving", tap, node);
        }

        let mut ticks = 0;
        let anchor = loop {
            ticks += 1;
            if let Some(UpdateResult::SettledAt(anchor)) = renderer.tick() {
                break anchor;
            }
            if ticks > max_ticks {
                bail!("node {} did not settle within {} frames", node, max_ticks);
            }
        };

        let snapshot = renderer.snapshot();
        settlements.push(Settlement {
            tap,
            node,
            anchor,
            ticks,
            next: snapshot.current,
            heading: snapshot.heading,
        });
    }

    Ok(settlements)
}

pub fn run(config: &AppConfig, taps: usize) -> Result<()> {
    info!(taps, nodes = config.animation.node_count, "tracing traversal");
    for s in simulate(config, taps)? {
        let heading = match s.heading {
            Heading::Forward => "forward",
            Heading::Backward => "backward",
        };
        println!(
            "tap {:>3}: node {} settled at {} after {} frames -> node {} ({})",
            s.tap, s.node, s.anchor, s.ticks, s.next, heading
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_walks_out_and_back() {
        let settlements = simulate(&AppConfig::default(), 10).unwrap();
        let nodes: Vec<usize> = settlements.iter().map(|s| s.node).collect();
        assert_eq!(nodes, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0]);
        assert!(settlements.iter().all(|s| s.ticks == 50));

        let anchors: Vec<f64> = settlements.iter().map(|s| s.anchor).collect();
        assert_eq!(anchors, vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        assert_eq!(settlements[4].heading, Heading::Backward);
        assert_eq!(settlements[4].next, 4);
        assert_eq!(settlements[9].heading, Heading::Forward);
        assert_eq!(settlements[9].next, 0);
    }

    #[test]
    fn test_simulate_single_node_bounces_in_place() {
        let mut config = AppConfig::default();
        config.animation.node_count = 1;
        let settlements = simulate(&config, 3).unwrap();
        assert!(settlements.iter().all(|s| s.node == 0 && s.next == 0));
        assert_eq!(settlements[0].heading, Heading::Backward);
        assert_eq!(settlements[1].heading, Heading::Forward);
    }

    #[test]
    fn test_simulate_zero_taps() {
        assert!(simulate(&AppConfig::default(), 0).unwrap().is_empty());
    }
}
