use std::time::Duration;

use folio_core::content::{LinkTarget, SectionId, ABOUT_HEADING, ABOUT_HIGHLIGHTS, PROFILE};
use folio_core::motion::presets;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::{button, heading};
use crate::app::App;
use crate::page::{Canvas, LinkAction};

pub fn compose(canvas: &mut Canvas, app: &App) {
    let started = app.revealed_at(SectionId::About);
    let theme = canvas.theme;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    canvas.blank();
    heading(canvas, &ABOUT_HEADING, started);

    let intro = canvas.pose(&presets::slide_in(-50.0, Duration::from_millis(200)), started);
    canvas.text(PROFILE.headline, bold.fg(theme.fg0), 0, &intro);
    canvas.blank();
    for paragraph in PROFILE.bio {
        canvas.text(paragraph, Style::default().fg(theme.fg1), 0, &intro);
        canvas.blank();
    }

    let touch = canvas.link(
        &button("Get In Touch →"),
        LinkAction::Open(LinkTarget::Section(SectionId::Contact)),
        bold.fg(theme.bg0).bg(theme.accent),
        intro.opacity,
    );
    let resume = canvas.href(
        &button("Download CV"),
        PROFILE.resume_path,
        Style::default().fg(theme.accent),
        intro.opacity,
    );
    canvas.line(vec![touch, Span::raw("  "), resume], 0, &intro);
    canvas.blank();

    let stagger = presets::container_stagger(Duration::from_millis(100), false);
    for (i, highlight) in ABOUT_HIGHLIGHTS.iter().enumerate() {
        let pose = canvas.pose(&stagger.child(presets::spring_item(10.0), i), started);
        canvas.rise(&pose, |c| {
            let marker = Span::styled("▍", c.fade(Style::default().fg(theme.accent), pose.opacity));
            let title = Span::styled(highlight.title, c.fade(bold.fg(theme.fg0), pose.opacity));
            c.line(vec![marker, Span::raw(" "), title], 0, &pose);
            c.text(highlight.description, Style::default().fg(theme.muted), 2, &pose);
        });
    }
    canvas.blank();
}
