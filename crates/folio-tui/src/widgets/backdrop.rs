//! Blob layer tinting the page background
//!
//! Drawn after the page text and only over cells still showing the page
//! background, so explicit highlights keep their colors.

use std::time::Instant;

use folio_core::backdrop::Blob;
use folio_core::content::SectionId;
use folio_core::reveal::{RegionLookup, Span};
use ratatui::{layout::Rect, style::Color, Frame};

use crate::app::App;
use crate::page::{PX_PER_COL, PX_PER_ROW};
use crate::theme::blend;

/// Hero blobs drift at this fraction of the scroll speed
const HERO_PARALLAX: f64 = 0.2;
/// Tint at the center of a fully opaque blob
const MAX_TINT: f64 = 0.14;

pub struct BackdropWidget;

impl BackdropWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        if !app.config.ui.backdrop || area.width == 0 || area.height == 0 {
            return;
        }

        let offset = app.scroller.offset() as f64;
        let viewport = Span::new(app.scroller.offset() as u32, area.height as u32);
        let elapsed = if app.config.ui.reduced_motion {
            std::time::Duration::ZERO
        } else {
            now.saturating_duration_since(app.started)
        };

        let mut tint = vec![(0.0f64, Color::Reset); area.width as usize * area.height as usize];
        let colors = [app.theme.accent, app.theme.info];

        for section in SectionId::ALL {
            let Some(region) = app.layout.region(section) else {
                continue;
            };
            if region.overlap(&viewport) == 0 && section != SectionId::Hero {
                continue;
            }
            let shift = if section == SectionId::Hero {
                offset * HERO_PARALLAX
            } else {
                0.0
            };

            for (i, blob) in app.section(section).backdrop.blobs().iter().enumerate() {
                let strength = blob.intensity(elapsed) * MAX_TINT;
                let center_x = blob.left * area.width as f64;
                let center_y = region.top as f64 + blob.top * region.height as f64 - offset + shift;
                paint(
                    &mut tint,
                    area,
                    blob,
                    (center_x, center_y),
                    strength,
                    colors[i % colors.len()],
                );
            }
        }

        let base = app.theme.bg0;
        let buf = frame.buffer_mut();
        for row in 0..area.height {
            for col in 0..area.width {
                let (amount, color) = tint[row as usize * area.width as usize + col as usize];
                if amount <= 0.0 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    if cell.bg == base {
                        cell.set_bg(blend(base, color, amount));
                    }
                }
            }
        }
    }
}

/// Accumulate one blob's elliptical falloff; the strongest blob wins per cell
fn paint(
    tint: &mut [(f64, Color)],
    area: Rect,
    blob: &Blob,
    center: (f64, f64),
    strength: f64,
    color: Color,
) {
    let rx = (blob.width / PX_PER_COL / 2.0).max(1.0);
    let ry = (blob.height / PX_PER_ROW / 2.0).max(1.0);

    let top = (center.1 - ry).floor().max(0.0) as i64;
    let bottom = ((center.1 + ry).ceil() as i64).min(area.height as i64);
    let left = (center.0 - rx).floor().max(0.0) as i64;
    let right = ((center.0 + rx).ceil() as i64).min(area.width as i64);

    for y in top..bottom {
        for x in left..right {
            let dx = (x as f64 + 0.5 - center.0) / rx;
            let dy = (y as f64 + 0.5 - center.1) / ry;
            let d = dx * dx + dy * dy;
            if d >= 1.0 {
                continue;
            }
            let amount = strength * (1.0 - d);
            let slot = &mut tint[y as usize * area.width as usize + x as usize];
            if amount > slot.0 {
                *slot = (amount, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn blob(width: f64, height: f64) -> Blob {
        Blob {
            left: 0.5,
            top: 0.5,
            width,
            height,
            opacity: 1.0,
            period: Duration::from_secs(20),
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_paint_is_strongest_at_center() {
        let area = Rect::new(0, 0, 40, 20);
        let mut tint = vec![(0.0, Color::Reset); 40 * 20];
        paint(&mut tint, area, &blob(160.0, 160.0), (20.0, 10.0), 0.1, Color::Red);

        let at = |x: usize, y: usize| tint[y * 40 + x].0;
        assert!(at(20, 10) > at(25, 10));
        assert!(at(20, 10) <= 0.1);
        assert_eq!(at(0, 0), 0.0);
    }

    #[test]
    fn test_paint_clips_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut tint = vec![(0.0, Color::Reset); 10 * 5];
        // Centered far outside the area; must not index out of bounds
        paint(&mut tint, area, &blob(400.0, 400.0), (-30.0, -30.0), 0.1, Color::Red);
        paint(&mut tint, area, &blob(400.0, 400.0), (9.0, 4.0), 0.1, Color::Red);
        assert!(tint.iter().any(|(amount, _)| *amount > 0.0));
    }
}
