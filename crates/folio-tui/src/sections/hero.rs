use std::time::Instant;

use folio_core::content::{LinkTarget, SectionId, HERO_BADGES, PROFILE};
use folio_core::motion::{presets, Pose};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::button;
use crate::app::App;
use crate::page::{Canvas, LinkAction};

/// Rows kept under the content for the scroll cue
const CUE_ROWS: u32 = 3;
const BOUNCE_MS: u128 = 750;

pub fn compose(canvas: &mut Canvas, app: &App, viewport_height: u16) {
    let started = app.revealed_at(SectionId::Hero);
    let theme = canvas.theme;
    let top = canvas.row();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let pose = canvas.pose(&presets::hero_fade(0), started);
    let dot = Span::styled("● ", canvas.fade(Style::default().fg(theme.success), pose.opacity));
    let label = Span::styled(
        PROFILE.availability,
        canvas.fade(Style::default().fg(theme.fg1), pose.opacity),
    );
    canvas.centered(vec![dot, label], &pose);
    canvas.blank();

    let pose = canvas.pose(&presets::hero_fade(1), started);
    let greeting = Span::styled("Hi, I'm ", canvas.fade(bold.fg(theme.fg0), pose.opacity));
    let first = Span::styled(PROFILE.first_name, canvas.fade(bold.fg(theme.accent), pose.opacity));
    let last = Span::styled(
        format!(" {}", PROFILE.last_name),
        canvas.fade(bold.fg(theme.fg0), pose.opacity),
    );
    canvas.centered(vec![greeting, first, last], &pose);
    canvas.blank();

    let pose = canvas.pose(&presets::hero_fade(2), started);
    canvas.text_centered(PROFILE.tagline, Style::default().fg(theme.muted), &pose);
    canvas.blank();

    let pose = canvas.pose(&presets::hero_fade(3), started);
    let cta = canvas.link(
        &button("Check Out My Work ↓"),
        LinkAction::Open(LinkTarget::Section(SectionId::Projects)),
        bold.fg(theme.bg0).bg(theme.accent),
        pose.opacity,
    );
    canvas.centered(vec![cta], &pose);
    canvas.blank();

    let pose = canvas.pose(&presets::hero_fade(4), started);
    let mut badges = Vec::with_capacity(HERO_BADGES.len() * 2);
    for (i, badge) in HERO_BADGES.iter().enumerate() {
        if i > 0 {
            badges.push(Span::raw("   "));
        }
        badges.push(Span::styled(
            format!(" ◆ {} ", badge),
            canvas.fade(Style::default().fg(theme.fg1).bg(theme.bg1), pose.opacity),
        ));
    }
    canvas.centered(badges, &pose);

    // Center vertically in at least one full screen
    let content = canvas.row() - top;
    let height = (viewport_height as u32).max(content + CUE_ROWS + 2);
    let pad = (height - content - CUE_ROWS) / 2;
    canvas.insert_blank_rows(top, pad);
    canvas.fill_to(top + height - CUE_ROWS);

    let pose = canvas.pose(&presets::hero_fade(5), started);
    scroll_cue(canvas, &pose, started);
}

fn scroll_cue(canvas: &mut Canvas, pose: &Pose, started: Option<Instant>) {
    let theme = canvas.theme;
    let hint = Span::styled(
        "Scroll to explore",
        canvas.fade(Style::default().fg(theme.muted), pose.opacity),
    );
    canvas.centered(vec![hint], pose);

    let lowered = !canvas.reduced_motion()
        && started.is_some_and(|at| {
            canvas.now.saturating_duration_since(at).as_millis() / BOUNCE_MS % 2 == 1
        });
    let arrow = Span::styled("↓", canvas.fade(Style::default().fg(theme.accent), pose.opacity));
    if lowered {
        canvas.blank();
        canvas.centered(vec![arrow], pose);
    } else {
        canvas.centered(vec![arrow], pose);
        canvas.blank();
    }
}
