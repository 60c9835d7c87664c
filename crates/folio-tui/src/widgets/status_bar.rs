use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match &app.mode {
            Mode::Browse => "BROWSE".to_string(),
            Mode::Editing(field) => format!("EDIT {}", field.to_string().to_uppercase()),
            Mode::Help => "HELP".to_string(),
        };

        let max = app.scroller.max();
        let percent = if max == 0 {
            100
        } else {
            app.scroller.offset() as u32 * 100 / max as u32
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} ", msg),
            None => format!(
                " {} | {}% | skills: {} ",
                app.current_section().title(),
                percent,
                app.skills.filter
            ),
        };

        let help_hint = match app.mode {
            Mode::Browse => " q:quit j/k:scroll n/p:section Tab:links ]/[:skills i:message ?:help ",
            Mode::Editing(_) => " Esc:done Tab:next field C-s:send ",
            Mode::Help => " any key:close ",
        };

        let mode_span = Span::styled(
            format!(" {} ", mode_str),
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        let used = mode_span.content.width() + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            mode_span,
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
