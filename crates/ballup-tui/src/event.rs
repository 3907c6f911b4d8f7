use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Shorter poll used while a transition is running
    animation_tick_rate: Duration,
}

impl EventHandler {
    /// Poll faster than the frame interval so scheduled redraws are not late
    pub fn with_frame_interval(tick_rate_ms: u64, frame_interval_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick_rate: Duration::from_millis((frame_interval_ms / 3).max(1)),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation tick rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Any mouse event; only primary button presses matter
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Poll timed out
    Tick,
    /// The animation asked for a new frame
    Redraw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_poll_is_faster() {
        let handler = EventHandler::with_frame_interval(100, 30);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
        assert_eq!(handler.animation_tick_rate, Duration::from_millis(10));
    }

    #[test]
    fn test_tiny_frame_interval_still_polls() {
        let handler = EventHandler::with_frame_interval(100, 1);
        assert_eq!(handler.animation_tick_rate, Duration::from_millis(1));
    }
}
