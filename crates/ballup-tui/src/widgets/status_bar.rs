use ballup_core::{Heading, RedrawHost};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::scene::to_color;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<H: RedrawHost>(frame: &mut Frame, area: Rect, app: &App<H>) {
        let snapshot = app.snapshot();

        let state_str = if snapshot.animating { "MOVING" } else { "IDLE" };
        let heading_str = match snapshot.heading {
            Heading::Forward => "->",
            Heading::Backward => "<-",
        };

        let status_text = format!(
            " {} | node {}/{} {} | scale {:.2} | taps: {} ({} ignored)",
            state_str,
            snapshot.current + 1,
            snapshot.node_count,
            heading_str,
            snapshot.scale,
            app.taps,
            app.ignored_taps,
        );

        let fg = to_color(app.config.style.background);
        let bg = to_color(app.config.style.foreground);

        let help_hint = " click/space:tap q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(fg).bg(bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(bg)),
            Span::styled(help_hint, Style::default().fg(fg).bg(bg)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
