use std::time::Duration;

use folio_core::content::{LinkTarget, Project, SectionId, PROJECTS, PROJECTS_HEADING};
use folio_core::motion::{presets, Pose};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::{button, heading};
use crate::app::App;
use crate::page::{Canvas, LinkAction};

pub fn compose(canvas: &mut Canvas, app: &App) {
    let started = app.revealed_at(SectionId::Projects);
    let theme = canvas.theme;

    canvas.blank();
    heading(canvas, &PROJECTS_HEADING, started);

    let stagger = presets::container_stagger(Duration::from_millis(100), false);
    for (i, project) in PROJECTS.iter().enumerate() {
        let pose = canvas.pose(&stagger.child(presets::spring_item(10.0), i), started);
        canvas.rise(&pose, |c| card(c, project, &pose));
    }

    let pose = canvas.pose(&presets::footer_fade(), started);
    let touch = canvas.link(
        &button("Get In Touch →"),
        LinkAction::Open(LinkTarget::Section(SectionId::Contact)),
        Style::default()
            .fg(theme.bg0)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
        pose.opacity,
    );
    canvas.centered(vec![touch], &pose);
    canvas.blank();
}

fn card(canvas: &mut Canvas, project: &Project, pose: &Pose) {
    let theme = canvas.theme;

    let marker = Span::styled("▍", canvas.fade(Style::default().fg(theme.accent), pose.opacity));
    let title = Span::styled(
        project.title,
        canvas.fade(Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD), pose.opacity),
    );
    canvas.line(vec![marker, Span::raw(" "), title], 0, pose);
    canvas.text(project.description, Style::default().fg(theme.fg1), 2, pose);

    let mut tags = Vec::new();
    for tag in project.preview_tags() {
        tags.push(Span::styled(
            format!(" {} ", tag),
            canvas.fade(Style::default().fg(theme.info).bg(theme.bg1), pose.opacity),
        ));
        tags.push(Span::raw(" "));
    }
    canvas.line(tags, 2, pose);

    let mut footer = Vec::new();
    if let Some(primary) = project.primary_tag() {
        footer.push(Span::styled(
            format!("● {}", primary),
            canvas.fade(Style::default().fg(theme.muted), pose.opacity),
        ));
        footer.push(Span::raw("   "));
    }
    let preview = canvas.href(
        "Preview",
        project.image_path,
        Style::default().fg(theme.muted),
        pose.opacity,
    );
    footer.push(preview);
    if let Some(url) = project.github_url {
        footer.push(Span::raw("  "));
        footer.push(canvas.href("GitHub", url, Style::default().fg(theme.accent), pose.opacity));
    }
    if let Some(url) = project.demo_url {
        footer.push(Span::raw("  "));
        footer.push(canvas.href("Live Demo", url, Style::default().fg(theme.accent), pose.opacity));
    }
    canvas.line(footer, 2, pose);
}
