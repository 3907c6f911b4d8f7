//! Drawing geometry for a single node
//!
//! Each node sits in an equally spaced horizontal slot at mid-height. Its
//! line is a zig-zag of `segment_count` strokes alternating between the
//! baseline and one gap above it; stroke `k` only starts to grow once stroke
//! `k - 1` is complete. The ball arcs over the line on the active node.

use crate::color::Rgb;
use crate::config::AppConfig;
use crate::easing::{divide_scale, sinify};
use crate::surface::{Paint, Surface};

/// Everything the node drawing needs besides the node itself
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub segment_count: u32,
    pub stroke_divisor: f64,
    pub ball_size_divisor: f64,
    pub color: Rgb,
}

impl NodeStyle {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            segment_count: config.animation.segment_count,
            stroke_divisor: config.style.stroke_divisor,
            ball_size_divisor: config.style.ball_size_divisor,
            color: config.style.foreground,
        }
    }

    /// Foreground paint for a surface of the given width
    pub fn paint(&self, surface_width: f64) -> Paint {
        Paint::new(self.color)
            .stroke_width(surface_width / self.stroke_divisor)
            .round_cap(true)
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Horizontal distance between node slots
#[inline]
pub fn slot_gap(width: f64, node_count: usize) -> f64 {
    width / (node_count + 1) as f64
}

/// Corner `k` of the zig-zag, relative to the node origin
fn corner(k: u32, gap: f64, segments: u32) -> (f64, f64) {
    let x = gap * k as f64 / segments as f64;
    let y = if k % 2 == 0 { 0.0 } else { -gap };
    (x, y)
}

/// Draw the zig-zag line at `scale`
pub fn draw_zigzag<S: Surface + ?Sized>(
    surface: &mut S,
    scale: f64,
    gap: f64,
    style: &NodeStyle,
    paint: &Paint,
) {
    let segments = style.segment_count;
    for k in 0..segments {
        let progress = sinify(divide_scale(scale, k, segments), 2);
        let (x1, y1) = corner(k, gap, segments);
        let (x2, y2) = corner(k + 1, gap, segments);
        surface.draw_line(
            x1,
            y1,
            x1 + (x2 - x1) * progress,
            y1 + (y2 - y1) * progress,
            paint,
        );
    }
}

/// Ball centre relative to the node origin
///
/// The ball moves across the slot linearly with `scale` while its height
/// follows the sine hump, so it passes over the apex of the line at 0.5 and
/// lands on the line's far end at 1.
pub fn ball_center(scale: f64, gap: f64) -> (f64, f64) {
    (gap * scale, -gap * sinify(scale, 1))
}

pub fn draw_ball<S: Surface + ?Sized>(
    surface: &mut S,
    scale: f64,
    gap: f64,
    style: &NodeStyle,
    paint: &Paint,
) {
    let (cx, cy) = ball_center(scale, gap);
    surface.draw_circle(cx, cy, gap / style.ball_size_divisor, paint);
}

/// Draw node `index` of `node_count` at `scale`, with the ball when `active`
pub fn draw_node<S: Surface + ?Sized>(
    surface: &mut S,
    index: usize,
    node_count: usize,
    scale: f64,
    active: bool,
    style: &NodeStyle,
) {
    let (w, h) = surface.size();
    let gap = slot_gap(w, node_count);
    let paint = style.paint(w);

    surface.save();
    surface.translate(gap * (index + 1) as f64, h / 2.0);
    draw_zigzag(surface, scale, gap, style, &paint);
    if active {
        draw_ball(surface, scale, gap, style, &paint);
    }
    surface.restore();
}
