use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key reference
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let rows = help_rows(keymap);
        let area = frame.area();

        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<14}", keys),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled("press any key to close", Style::default().fg(theme.muted)))
                .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn help_rows(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
    let pair = |a: &str, b: &str| format!("{} / {}", a, b);
    vec![
        (pair(&keymap.scroll_down, &keymap.scroll_up), "scroll"),
        (pair(&keymap.scroll_half_down, &keymap.scroll_half_up), "half page"),
        (pair(&keymap.scroll_page_down, &keymap.scroll_page_up), "full page"),
        (pair(&keymap.jump_to_top, &keymap.jump_to_bottom), "top / bottom"),
        (pair(&keymap.next_section, &keymap.prev_section), "next / previous section"),
        ("1 - 5".to_string(), "jump to section"),
        (pair(&keymap.next_link, &keymap.prev_link), "focus link or button"),
        (keymap.follow_link.clone(), "open focused item"),
        (pair(&keymap.next_category, &keymap.prev_category), "skills category"),
        (keymap.edit_form.clone(), "write a message"),
        ("<C-s>".to_string(), "send message while editing"),
        (keymap.quit.clone(), "quit"),
    ]
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
