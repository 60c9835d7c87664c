//! Per-section composers writing into a [`Canvas`](crate::page::Canvas)

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use std::time::Instant;

use folio_core::content::Heading;
use folio_core::motion::presets;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::page::Canvas;

const RULE_WIDTH: usize = 8;

/// Accented section title, rule and subtitle rising in together
pub(crate) fn heading(canvas: &mut Canvas, heading: &Heading, started: Option<Instant>) {
    let pose = canvas.pose(&presets::fade_up(), started);
    let theme = canvas.theme;

    canvas.rise(&pose, |c| {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lead = Span::styled(heading.lead, c.fade(bold.fg(theme.accent), pose.opacity));
        let rest = Span::styled(heading.rest, c.fade(bold.fg(theme.fg0), pose.opacity));
        c.centered(vec![lead, Span::raw(" "), rest], &pose);

        let rule = Span::styled(
            "━".repeat(RULE_WIDTH),
            c.fade(Style::default().fg(theme.accent), pose.opacity),
        );
        c.centered(vec![rule], &pose);
        c.blank();
        c.text_centered(heading.subtitle, Style::default().fg(theme.muted), &pose);
    });
    canvas.blank();
}

/// `[ label ]` button text
pub(crate) fn button(label: &str) -> String {
    format!("[ {} ]", label)
}
