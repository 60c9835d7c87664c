use std::time::{Duration, Instant};

use folio_core::content::{
    filter_skills, CategoryFilter, SectionId, Skill, SKILLS, SKILLS_FOOTER, SKILLS_HEADING,
};
use folio_core::motion::{presets, Pose};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::heading;
use crate::app::App;
use crate::page::{Canvas, LinkAction};

pub fn compose(canvas: &mut Canvas, app: &App) {
    let started = app.revealed_at(SectionId::Skills);
    let filter = app.skills.filter;

    canvas.blank();
    heading(canvas, &SKILLS_HEADING, started);
    category_buttons(canvas, filter, started);
    canvas.blank();

    // A filter change replays the grid entrance, but never before the reveal
    let grid_started = started.map(|revealed| match app.skills.changed_at {
        Some(changed) => changed.max(revealed),
        None => revealed,
    });
    let stagger = presets::container_stagger(Duration::from_millis(50), true);
    for (i, skill) in filter_skills(&SKILLS, filter).into_iter().enumerate() {
        let pose = canvas.pose(&stagger.child(presets::spring_item(10.0), i), grid_started);
        let bar = canvas.pose(&presets::skill_bar(i), grid_started);
        canvas.rise(&pose, |c| skill_card(c, skill, &pose, &bar));
    }

    let pose = canvas.pose(&presets::footer_fade(), started);
    let theme = canvas.theme;
    let footer = Span::styled(
        SKILLS_FOOTER,
        canvas.fade(Style::default().fg(theme.muted), pose.opacity),
    );
    canvas.centered(vec![footer], &pose);
    canvas.blank();
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn category_buttons(canvas: &mut Canvas, active: CategoryFilter, started: Option<Instant>) {
    let theme = canvas.theme;
    let mut spans = Vec::new();
    let mut row_pose = Pose::REST;

    for (i, filter) in CategoryFilter::ALL.into_iter().enumerate() {
        let pose = canvas.pose(&presets::category_button(i), started);
        if i == 0 {
            row_pose = pose;
        } else {
            spans.push(Span::raw(" "));
        }

        let label = if filter == active {
            let count = filter_skills(&SKILLS, filter).len();
            format!(" {} {} ({}) ", filter.glyph(), title_case(filter.label()), count)
        } else {
            format!(" {} {} ", filter.glyph(), title_case(filter.label()))
        };
        let style = if filter == active {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg1).bg(theme.bg1)
        };
        spans.push(canvas.link(&label, LinkAction::Filter(filter), style, pose.opacity));
    }

    // Buttons share one row, so the first one's rise drives it
    canvas.rise(&row_pose, |c| c.centered(spans, &row_pose));
}

fn skill_card(canvas: &mut Canvas, skill: &Skill, pose: &Pose, bar: &Pose) {
    let theme = canvas.theme;
    let name = Span::styled(
        skill.name,
        canvas.fade(
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            pose.opacity,
        ),
    );
    let level = format!("{}%", skill.level);
    let width = canvas.content_width();
    let gap = width.saturating_sub(skill.name.width() + level.width()).max(1);
    let level = Span::styled(level, canvas.fade(Style::default().fg(theme.accent), pose.opacity));
    canvas.line(vec![name, Span::raw(" ".repeat(gap)), level], 0, pose);

    let filled = ((width as f64 * skill.level as f64 / 100.0 * bar.width).round() as usize).min(width);
    let track = vec![
        Span::styled(
            "█".repeat(filled),
            canvas.fade(Style::default().fg(theme.accent), pose.opacity),
        ),
        Span::styled(
            "░".repeat(width - filled),
            canvas.fade(Style::default().fg(theme.bg2), pose.opacity),
        ),
    ];
    canvas.line(track, 0, pose);
}
