pub mod animator;
pub mod chain;
pub mod color;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod state;
pub mod surface;

pub use animator::{AnimationLoop, FrameOutcome};
pub use chain::{Neighbor, Node, NodeChain};
pub use color::Rgb;
pub use config::{AnimationConfig, AppConfig, StyleConfig};
pub use controller::{Heading, SequenceController};
pub use error::{Error, Result};
pub use geometry::NodeStyle;
pub use renderer::{Renderer, Snapshot};
pub use state::{NodeState, UpdateResult};
pub use surface::{Paint, RedrawHost, Surface};
