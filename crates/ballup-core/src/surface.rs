//! Boundary traits between the animation core and whatever hosts it
//!
//! The core only ever draws through [`Surface`] and only ever asks for frames
//! through [`RedrawHost`]. The terminal frontend implements both.

use std::time::Duration;

use crate::color::Rgb;
use crate::Result;

/// Stroke attributes for lines and circles
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub stroke_width: f64,
    pub round_cap: bool,
    pub anti_alias: bool,
}

impl Paint {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            stroke_width: 1.0,
            round_cap: false,
            anti_alias: true,
        }
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn round_cap(mut self, round: bool) -> Self {
        self.round_cap = round;
        self
    }
}

/// A drawable area with a save/restore translation stack
///
/// Coordinates are in surface units with the origin top-left and y growing
/// downward.
pub trait Surface {
    /// Drawable width and height
    fn size(&self) -> (f64, f64);

    fn clear(&mut self, color: Rgb);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &Paint);

    /// Filled circle
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint);

    /// Push the current translation
    fn save(&mut self);

    /// Pop back to the last saved translation
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);
}

/// Frame requests going back to the host
pub trait RedrawHost {
    /// Ask for a redraw as soon as possible
    fn request_redraw(&self);

    /// Ask for a redraw after `delay`, from a background timer
    fn schedule_redraw(&self, delay: Duration) -> Result<()>;
}

impl<T: RedrawHost + ?Sized> RedrawHost for &T {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }

    fn schedule_redraw(&self, delay: Duration) -> Result<()> {
        (**self).schedule_redraw(delay)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording doubles shared by the core's unit tests

    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::Error;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Rgb),
        Line { x1: f64, y1: f64, x2: f64, y2: f64 },
        Circle { cx: f64, cy: f64, radius: f64 },
    }

    /// Surface that records absolute-coordinate draw calls
    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub ops: Vec<Op>,
        pub paints: Vec<Paint>,
        offset: (f64, f64),
        stack: Vec<(f64, f64)>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
                paints: Vec::new(),
                offset: (0.0, 0.0),
                stack: Vec::new(),
            }
        }

        pub fn lines(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).count()
        }

        pub fn circles(&self) -> Vec<(f64, f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Circle { cx, cy, radius } => Some((*cx, *cy, *radius)),
                    _ => None,
                })
                .collect()
        }

        pub fn depth(&self) -> usize {
            self.stack.len()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn clear(&mut self, color: Rgb) {
            self.ops.push(Op::Clear(color));
        }

        fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &Paint) {
            let (ox, oy) = self.offset;
            self.ops.push(Op::Line {
                x1: x1 + ox,
                y1: y1 + oy,
                x2: x2 + ox,
                y2: y2 + oy,
            });
            self.paints.push(paint.clone());
        }

        fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint) {
            let (ox, oy) = self.offset;
            self.ops.push(Op::Circle {
                cx: cx + ox,
                cy: cy + oy,
                radius,
            });
            self.paints.push(paint.clone());
        }

        fn save(&mut self) {
            self.stack.push(self.offset);
        }

        fn restore(&mut self) {
            if let Some(offset) = self.stack.pop() {
                self.offset = offset;
            }
        }

        fn translate(&mut self, dx: f64, dy: f64) {
            self.offset.0 += dx;
            self.offset.1 += dy;
        }
    }

    /// Host that counts redraw requests
    #[derive(Default)]
    pub struct CountingHost {
        pub immediate: Cell<usize>,
        pub scheduled: RefCell<Vec<Duration>>,
        pub fail: Cell<bool>,
    }

    impl RedrawHost for CountingHost {
        fn request_redraw(&self) {
            self.immediate.set(self.immediate.get() + 1);
        }

        fn schedule_redraw(&self, delay: Duration) -> Result<()> {
            if self.fail.get() {
                return Err(Error::Scheduler("host gone".to_string()));
            }
            self.scheduled.borrow_mut().push(delay);
            Ok(())
        }
    }
}
