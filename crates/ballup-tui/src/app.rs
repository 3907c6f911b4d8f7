use std::sync::Arc;

use ballup_core::{AppConfig, RedrawHost, Renderer, Snapshot, Surface};
use tracing::info;

use crate::input::Action;

/// Terminal application state
pub struct App<H: RedrawHost> {
    pub config: Arc<AppConfig>,
    pub renderer: Renderer<H>,
    pub should_quit: bool,
    /// Taps that started a transition
    pub taps: u64,
    /// Taps ignored because a transition was already running
    pub ignored_taps: u64,
    /// A frame needs drawing on the next loop iteration
    pub dirty: bool,
    pub show_status_bar: bool,
}

impl<H: RedrawHost> App<H> {
    pub fn new(config: Arc<AppConfig>, host: H) -> Self {
        let renderer = Renderer::new(&config, host);
        let show_status_bar = config.ui.show_status_bar;
        Self {
            config,
            renderer,
            should_quit: false,
            taps: 0,
            ignored_taps: 0,
            dirty: true,
            show_status_bar,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.renderer.is_animating()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.renderer.snapshot()
    }

    /// Draw the stage and advance the animation by one frame
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.renderer.render(surface);
        self.dirty = false;
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!(taps = self.taps, "quitting");
                self.should_quit = true;
            }
            Action::Tap => {
                if self.renderer.handle_tap() {
                    self.taps += 1;
                } else {
                    self.ignored_taps += 1;
                }
                // Status bar shows tap counts
                if self.show_status_bar {
                    self.dirty = true;
                }
            }
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::scene::Scene;

    #[derive(Default)]
    struct Host {
        immediate: Cell<usize>,
        scheduled: Cell<usize>,
    }

    impl RedrawHost for Host {
        fn request_redraw(&self) {
            self.immediate.set(self.immediate.get() + 1);
        }

        fn schedule_redraw(&self, _delay: Duration) -> ballup_core::Result<()> {
            self.scheduled.set(self.scheduled.get() + 1);
            Ok(())
        }
    }

    fn app() -> App<Host> {
        App::new(Arc::new(AppConfig::default()), Host::default())
    }

    #[test]
    fn test_starts_dirty_and_idle() {
        let app = app();
        assert!(app.dirty);
        assert!(!app.is_animating());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tap_counts() {
        let mut app = app();
        app.handle_action(Action::Tap);
        app.handle_action(Action::Tap);
        assert_eq!(app.taps, 1);
        assert_eq!(app.ignored_taps, 1);
        assert!(app.is_animating());
        assert_eq!(app.renderer.host().immediate.get(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_clears_dirty_and_advances() {
        let mut app = app();
        let mut scene = Scene::new(160.0, 96.0);
        app.handle_action(Action::Tap);

        app.render(&mut scene);
        assert!(!app.dirty);
        assert!(scene.background().is_some());
        assert!(!scene.shapes().is_empty());
        assert_eq!(app.renderer.host().scheduled.get(), 1);
        assert!((app.snapshot().scale - 0.02).abs() < 1e-9);
    }
}
