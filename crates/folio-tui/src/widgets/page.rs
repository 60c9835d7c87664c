use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct PageWidget;

impl PageWidget {
    /// Draw the rows of `lines` that fall inside the viewport
    pub fn render(frame: &mut Frame, area: Rect, app: &App, lines: Vec<Line<'static>>) {
        let offset = app.scroller.offset() as usize;
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(offset)
            .take(area.height as usize)
            .collect();

        let paragraph = Paragraph::new(visible).style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }
}
