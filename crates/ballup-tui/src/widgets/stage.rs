use ballup_core::RedrawHost;
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::Canvas,
    Frame,
};

use crate::app::App;
use crate::scene::Scene;

/// Full-area braille canvas showing the node row
pub struct StageWidget;

impl StageWidget {
    pub fn render<H: RedrawHost>(frame: &mut Frame, area: Rect, app: &mut App<H>) {
        let mut scene = Scene::for_area(area);
        app.render(&mut scene);

        let canvas = Canvas::default()
            .background_color(scene.background().unwrap_or(Color::Reset))
            .marker(Marker::Braille)
            .x_bounds(scene.x_bounds())
            .y_bounds(scene.y_bounds())
            .paint(|ctx| scene.paint(ctx));
        frame.render_widget(canvas, area);
    }
}
