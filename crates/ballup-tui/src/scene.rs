//! Drawing surface over a ratatui braille canvas
//!
//! The renderer draws into a [`Scene`] first; the stage widget then replays
//! the recorded shapes inside `Canvas::paint`. Recording up front lets the
//! cleared background colour reach the canvas widget before painting starts.
//!
//! Surface units are braille dots: each terminal cell is 2 dots wide and 4
//! dots tall. The canvas y axis points up, so y is flipped on the way in.

use ballup_core::{Paint, Rgb, Surface};
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line};

/// Braille dots per terminal cell
pub const DOTS_X: f64 = 2.0;
pub const DOTS_Y: f64 = 4.0;

/// Spacing between the concentric rings used to fill a circle
const FILL_STEP: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    background: Option<Color>,
    shapes: Vec<Shape>,
    offset: (f64, f64),
    saved: Vec<(f64, f64)>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            shapes: Vec::new(),
            offset: (0.0, 0.0),
            saved: Vec::new(),
        }
    }

    /// Scene sized to a terminal area
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width as f64 * DOTS_X, area.height as f64 * DOTS_Y)
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.width]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, self.height]
    }

    /// Surface point to canvas point
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset.0, self.height - (y + self.offset.1))
    }

    /// Longest side, the most dots a stroke or ring stack can usefully cover
    fn extent(&self) -> f64 {
        self.width.max(self.height).max(1.0)
    }

    fn push_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        if !radius.is_finite() {
            return;
        }
        let mut r = radius.min(self.extent());
        while r > 0.0 {
            self.shapes.push(Shape::Circle { x, y, radius: r, color });
            r -= FILL_STEP;
        }
    }

    /// Replay recorded shapes onto a canvas context
    pub fn paint(&self, ctx: &mut Context<'_>) {
        for shape in &self.shapes {
            match *shape {
                Shape::Line { x1, y1, x2, y2, color } => ctx.draw(&Line { x1, y1, x2, y2, color }),
                Shape::Circle { x, y, radius, color } => ctx.draw(&Circle { x, y, radius, color }),
            }
        }
    }
}

impl Surface for Scene {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.background = Some(to_color(color));
        self.shapes.clear();
    }

    /// Thick strokes become parallel one-dot lines; round caps add a dot
    /// at each end
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &Paint) {
        let color = to_color(paint.color);
        let (ax, ay) = self.project(x1, y1);
        let (bx, by) = self.project(x2, y2);

        let width = if paint.stroke_width.is_finite() {
            paint.stroke_width.clamp(1.0, self.extent())
        } else {
            1.0
        };
        let strands = width.round() as usize;
        let (dx, dy) = (bx - ax, by - ay);
        let len = (dx * dx + dy * dy).sqrt();
        let (nx, ny) = if len > f64::EPSILON {
            (-dy / len, dx / len)
        } else {
            (0.0, 0.0)
        };

        for k in 0..strands {
            let shift = k as f64 - (strands - 1) as f64 / 2.0;
            self.shapes.push(Shape::Line {
                x1: ax + nx * shift,
                y1: ay + ny * shift,
                x2: bx + nx * shift,
                y2: by + ny * shift,
                color,
            });
        }

        if paint.round_cap && strands > 1 {
            let radius = width / 2.0;
            self.push_circle(ax, ay, radius, color);
            self.push_circle(bx, by, radius, color);
        }
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint) {
        let (x, y) = self.project(cx, cy);
        self.push_circle(x, y, radius, to_color(paint.color));
    }

    fn save(&mut self) {
        self.saved.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }
}
