use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use ballup_core::AppConfig;
use ballup_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_event,
    widgets::{StageWidget, StatusBarWidget},
    FrameScheduler,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Channel the frame scheduler posts redraw requests on
    let (redraw_tx, mut redraw_rx) = mpsc::unbounded_channel::<AppEvent>();
    let scheduler = FrameScheduler::new(redraw_tx)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("ballup"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut app = App::new(config.clone(), scheduler);
    let event_handler = EventHandler::with_frame_interval(
        config.ui.tick_rate_ms,
        config.animation.frame_interval_ms,
    );

    info!(nodes = config.animation.node_count, "animation ready");

    // Run the loop, but restore the terminal whatever happens
    let result = event_loop(&mut terminal, &mut app, &event_handler, &mut redraw_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<FrameScheduler>,
    event_handler: &EventHandler,
    redraw_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        // Process any redraw requests (non-blocking)
        while let Ok(event) = redraw_rx.try_recv() {
            if event == AppEvent::Redraw {
                app.request_redraw();
            }
        }

        // Draw UI only when the animation or the terminal asked for it
        if app.dirty {
            terminal.draw(|frame| {
                let size = frame.area();
                if app.show_status_bar {
                    let layout = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Min(1), Constraint::Length(1)])
                        .split(size);
                    StageWidget::render(frame, layout[0], app);
                    StatusBarWidget::render(frame, layout[1], app);
                } else {
                    // Edge to edge, no chrome
                    StageWidget::render(frame, size, app);
                }
            })?;
        }

        // Poll faster while a transition runs so frames are not late
        let event = if app.is_animating() || app.renderer.host().is_pending() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Resize(_, _) => app.request_redraw(),
                AppEvent::Tick | AppEvent::Redraw => {}
                other => {
                    let action = handle_event(&other);
                    app.handle_action(action);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
