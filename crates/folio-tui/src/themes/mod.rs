//! Theme registry and loader

mod dracula;
mod monokai;
mod nord;
mod one_dark;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str, scale: u8| u8::from_str_radix(s, 16).ok().map(|v| v * scale);
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1], 17)?,
            channel(&hex[1..2], 17)?,
            channel(&hex[2..3], 17)?,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2], 1)?,
            channel(&hex[2..4], 1)?,
            channel(&hex[4..6], 1)?,
        )),
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots = [
        (&mut theme.bg0, &overrides.bg0),
        (&mut theme.bg1, &overrides.bg1),
        (&mut theme.bg2, &overrides.bg2),
        (&mut theme.fg0, &overrides.fg0),
        (&mut theme.fg1, &overrides.fg1),
        (&mut theme.muted, &overrides.muted),
        (&mut theme.accent, &overrides.accent),
        (&mut theme.selection, &overrides.selection),
        (&mut theme.error, &overrides.error),
        (&mut theme.success, &overrides.success),
        (&mut theme.warning, &overrides.warning),
        (&mut theme.info, &overrides.info),
    ];

    for (slot, hex) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Ignoring invalid theme color '{}'", hex),
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula", "one-dark", "monokai"]
}
