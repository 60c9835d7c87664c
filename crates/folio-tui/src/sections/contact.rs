use std::time::Duration;

use folio_core::contact::FormField;
use folio_core::content::{ContactItem, SectionId, CONTACT_HEADING, CONTACT_ITEMS, SOCIAL_LINKS};
use folio_core::motion::{presets, Pose};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{button, heading};
use crate::app::{App, Mode};
use crate::page::{wrap, Canvas, LinkAction};

/// Visible rows of the message box before it grows
const MESSAGE_ROWS: usize = 5;
const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const SPINNER_FRAME_MS: u128 = 80;

pub fn compose(canvas: &mut Canvas, app: &App) {
    let started = app.revealed_at(SectionId::Contact);
    let theme = canvas.theme;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    canvas.blank();
    heading(canvas, &CONTACT_HEADING, started);

    let info = canvas.pose(&presets::slide_in(-50.0, Duration::from_millis(200)), started);
    let title = Span::styled("Contact Information", canvas.fade(bold.fg(theme.fg0), info.opacity));
    canvas.line(vec![title], 0, &info);
    canvas.blank();

    let stagger = presets::container_stagger(Duration::from_millis(100), true);
    for (i, item) in CONTACT_ITEMS.iter().enumerate() {
        let pose = canvas.pose(&stagger.child(presets::spring_item(12.0), i), started);
        canvas.rise(&pose, |c| contact_item(c, item, &pose));
    }

    let social_title = Span::styled("Connect With Me", canvas.fade(bold.fg(theme.fg0), info.opacity));
    canvas.line(vec![social_title], 0, &info);
    let mut socials = Vec::new();
    for (i, social) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::raw("  "));
        }
        socials.push(canvas.href(
            &button(social.label),
            social.href,
            Style::default().fg(theme.accent),
            info.opacity,
        ));
    }
    canvas.line(socials, 0, &info);
    canvas.blank();
    canvas.blank();

    let form = canvas.pose(&presets::slide_in(50.0, Duration::from_millis(300)), started);
    let title = Span::styled("Send a Message", canvas.fade(bold.fg(theme.fg0), form.opacity));
    canvas.line(vec![title], 0, &form);
    canvas.blank();

    for field in FormField::ALL {
        let pose = canvas.pose(&presets::form_field(field.index()), started);
        canvas.rise(&pose, |c| form_field(c, app, field, &pose));
    }

    let pose = canvas.pose(&presets::form_field(FormField::ALL.len()), started);
    submit_control(canvas, app, &pose);
    canvas.blank();
}

fn contact_icon(item: &ContactItem) -> &'static str {
    match item.title {
        "Email" => "✉",
        "Phone" => "☎",
        _ => "⌖",
    }
}

fn contact_item(canvas: &mut Canvas, item: &ContactItem, pose: &Pose) {
    let theme = canvas.theme;
    let icon = Span::styled(
        format!("{} ", contact_icon(item)),
        canvas.fade(Style::default().fg(theme.accent), pose.opacity),
    );
    let title = Span::styled(
        item.title,
        canvas.fade(
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            pose.opacity,
        ),
    );
    canvas.line(vec![icon, title], 0, pose);

    let value = canvas.href(item.value, item.href, Style::default().fg(theme.fg1), pose.opacity);
    canvas.line(vec![value], 2, pose);
}

/// Right-most part of `value` that fits in `width` columns
fn tail(value: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    value[start..].to_string()
}

fn form_field(canvas: &mut Canvas, app: &App, field: FormField, pose: &Pose) {
    let theme = canvas.theme;
    let editing = app.mode == Mode::Editing(field);

    let label = canvas.link(
        field.label(),
        LinkAction::EditField(field),
        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        pose.opacity,
    );
    canvas.line(vec![label], 0, pose);

    // "│ " + text + cursor + padding
    let inner = canvas.content_width().saturating_sub(4).max(1);
    let value = app.form.value(field);
    let (rows, text_style) = if value.is_empty() {
        (vec![field.placeholder().to_string()], Style::default().fg(theme.muted))
    } else if field.is_multiline() {
        (wrap(value, inner), Style::default().fg(theme.fg0))
    } else {
        (vec![tail(value, inner)], Style::default().fg(theme.fg0))
    };

    let border = if editing { theme.accent } else { theme.bg2 };
    let count = if field.is_multiline() {
        rows.len().max(MESSAGE_ROWS)
    } else {
        1
    };
    let cursor_row = if value.is_empty() { 0 } else { rows.len() - 1 };

    for r in 0..count {
        let text = rows.get(r).cloned().unwrap_or_default();
        let mut used = text.width();
        let mut spans = vec![
            Span::styled("│ ", canvas.fade(Style::default().fg(border).bg(theme.bg1), pose.opacity)),
            Span::styled(text, canvas.fade(text_style.bg(theme.bg1), pose.opacity)),
        ];
        if editing && r == cursor_row {
            spans.push(Span::styled(
                "█",
                canvas.fade(Style::default().fg(theme.accent).bg(theme.bg1), pose.opacity),
            ));
            used += 1;
        }
        spans.push(Span::styled(
            " ".repeat((inner + 1).saturating_sub(used)),
            canvas.fade(Style::default().bg(theme.bg1), pose.opacity),
        ));
        canvas.line(spans, 0, pose);
    }
}

fn submit_control(canvas: &mut Canvas, app: &App, pose: &Pose) {
    let theme = canvas.theme;
    let (label, style) = if app.form.is_submitting() {
        let elapsed = canvas.now.saturating_duration_since(app.started).as_millis();
        let frame = SPINNER[(elapsed / SPINNER_FRAME_MS) as usize % SPINNER.len()];
        (
            button(&format!("{} Sending...", frame)),
            Style::default().fg(theme.muted).bg(theme.bg2),
        )
    } else {
        (
            button("Send Message ➤"),
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    canvas.rise(pose, |c| {
        let control = c.link(&label, LinkAction::Submit, style, pose.opacity);
        c.line(vec![control], 0, pose);
    });
}
