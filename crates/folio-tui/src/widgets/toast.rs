use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use folio_core::contact::NotificationKind;

use crate::app::App;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

pub struct ToastWidget;

impl ToastWidget {
    /// Stack active notifications in the top-right corner, newest first
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        if width < 10 {
            return;
        }
        let x = area.x + area.width - width - 1;

        for (i, toast) in app.toasts.iter().rev().enumerate() {
            let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);

            let border = match toast.notification.kind {
                NotificationKind::Success => theme.success,
                NotificationKind::Failure => theme.error,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.bg1));

            let text = vec![
                Line::from(Span::styled(
                    toast.notification.title,
                    Style::default().fg(border).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    toast.notification.description,
                    Style::default().fg(theme.fg1),
                )),
            ];

            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
                rect,
            );
        }
    }
}
