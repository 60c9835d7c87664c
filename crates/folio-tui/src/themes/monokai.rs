//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x27, 0x28, 0x22),
        bg1: Color::Rgb(0x3e, 0x3d, 0x32),
        bg2: Color::Rgb(0x49, 0x48, 0x3e),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xf5, 0xf4, 0xf1),
        muted: Color::Rgb(0x75, 0x71, 0x5e),
        accent: Color::Rgb(0xae, 0x81, 0xff),
        selection: Color::Rgb(0x49, 0x48, 0x3e),
        error: Color::Rgb(0xf9, 0x26, 0x72),
        success: Color::Rgb(0xa6, 0xe2, 0x2e),
        warning: Color::Rgb(0xfd, 0x97, 0x1f),
        info: Color::Rgb(0x66, 0xd9, 0xef),
    }
}
