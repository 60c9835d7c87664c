//! Page composition
//!
//! Every frame the sections are flattened into one column of styled lines.
//! Row counts never depend on animation progress, so the layout handed to
//! the reveal controllers is stable while entrances play out.

use std::time::Instant;

use folio_core::contact::FormField;
use folio_core::content::{CategoryFilter, LinkTarget, SectionId};
use folio_core::motion::{Pose, Preset};
use folio_core::reveal::{RegionLookup, Span as RowSpan};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::sections;
use crate::theme::{blend, Theme};

/// CSS pixels per terminal column
pub const PX_PER_COL: f64 = 8.0;
/// CSS pixels per terminal row
pub const PX_PER_ROW: f64 = 16.0;

const MAX_CONTENT_WIDTH: u16 = 96;
const MIN_MARGIN: u16 = 2;

/// What happens when a focusable item is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Open(LinkTarget),
    Filter(CategoryFilter),
    EditField(FormField),
    Submit,
}

/// Focusable item placed on a page row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub row: u32,
    pub label: String,
    pub action: LinkAction,
}

/// Section extents in page rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    regions: Vec<(SectionId, RowSpan)>,
    height: u32,
}

impl PageLayout {
    pub fn new(regions: Vec<(SectionId, RowSpan)>) -> Self {
        let height = regions.iter().map(|(_, span)| span.bottom()).max().unwrap_or(0);
        Self { regions, height }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn regions(&self) -> &[(SectionId, RowSpan)] {
        &self.regions
    }

    pub fn top_of(&self, section: SectionId) -> Option<u32> {
        self.region(section).map(|span| span.top)
    }

    /// Section containing `row`
    pub fn section_at(&self, row: u32) -> Option<SectionId> {
        self.regions
            .iter()
            .find(|(_, span)| span.contains(row))
            .map(|(id, _)| *id)
    }
}

impl RegionLookup for PageLayout {
    fn region(&self, id: SectionId) -> Option<RowSpan> {
        self.regions[..].region(id)
    }
}

/// One composed frame of the page
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
    pub links: Vec<PageLink>,
}

impl Page {
    /// Lay out every section for a `width` x `viewport_height` viewport
    pub fn compose(app: &App, width: u16, viewport_height: u16, now: Instant) -> Page {
        let mut canvas = Canvas::new(
            &app.theme,
            width,
            now,
            app.config.ui.reduced_motion,
            app.focused_link,
        );

        let mut regions = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let top = canvas.row();
            match section {
                SectionId::Hero => sections::hero::compose(&mut canvas, app, viewport_height),
                SectionId::About => sections::about::compose(&mut canvas, app),
                SectionId::Projects => sections::projects::compose(&mut canvas, app),
                SectionId::Skills => sections::skills::compose(&mut canvas, app),
                SectionId::Contact => sections::contact::compose(&mut canvas, app),
            }
            regions.push((section, RowSpan::new(top, canvas.row() - top)));
        }

        Page {
            lines: canvas.lines,
            layout: PageLayout::new(regions),
            links: canvas.links,
        }
    }

    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height()
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16
    }
}

/// Line sink shared by the section composers
pub struct Canvas<'a> {
    pub theme: &'a Theme,
    pub now: Instant,
    content_width: u16,
    margin: u16,
    reduced_motion: bool,
    focus: Option<usize>,
    lines: Vec<Line<'static>>,
    links: Vec<PageLink>,
}

impl<'a> Canvas<'a> {
    pub fn new(
        theme: &'a Theme,
        width: u16,
        now: Instant,
        reduced_motion: bool,
        focus: Option<usize>,
    ) -> Self {
        let content_width = width.saturating_sub(MIN_MARGIN * 2).clamp(1, MAX_CONTENT_WIDTH);
        let margin = width.saturating_sub(content_width) / 2;
        Self {
            theme,
            now,
            content_width,
            margin,
            reduced_motion,
            focus,
            lines: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Next row to be written
    #[inline]
    pub fn row(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn content_width(&self) -> usize {
        self.content_width as usize
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Pose of `preset` for an animation that started at `started`
    pub fn pose(&self, preset: &Preset, started: Option<Instant>) -> Pose {
        if self.reduced_motion {
            return preset.shown;
        }
        preset.sample_at(started, self.now)
    }

    /// `style` with its colors seen through `opacity`
    pub fn fade(&self, style: Style, opacity: f64) -> Style {
        let fg = style.fg.unwrap_or(self.theme.fg0);
        let mut faded = style.fg(self.theme.fade(fg, opacity));
        if let Some(bg) = style.bg {
            faded = faded.bg(blend(self.theme.bg0, bg, opacity));
        }
        faded
    }

    fn shift_cols(pose: &Pose) -> i32 {
        (pose.x / PX_PER_COL).round() as i32
    }

    fn indent(&self, extra: usize, pose: &Pose) -> usize {
        (self.margin as i32 + extra as i32 + Self::shift_cols(pose)).max(0) as usize
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Left-aligned line, `extra` columns in from the content edge
    pub fn line(&mut self, spans: Vec<Span<'static>>, extra: usize, pose: &Pose) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(self.indent(extra, pose))));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Line centered within the content column
    pub fn centered(&mut self, spans: Vec<Span<'static>>, pose: &Pose) {
        let width: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = self.content_width().saturating_sub(width) / 2;
        self.line(spans, pad, pose);
    }

    /// Word-wrapped paragraph
    pub fn text(&mut self, text: &str, style: Style, extra: usize, pose: &Pose) {
        let style = self.fade(style, pose.opacity);
        let width = self.content_width().saturating_sub(extra).max(1);
        for row in wrap(text, width) {
            self.line(vec![Span::styled(row, style)], extra, pose);
        }
    }

    /// Word-wrapped paragraph, each row centered
    pub fn text_centered(&mut self, text: &str, style: Style, pose: &Pose) {
        let style = self.fade(style, pose.opacity);
        for row in wrap(text, self.content_width()) {
            self.centered(vec![Span::styled(row, style)], pose);
        }
    }

    /// Emit a block that rises into place
    ///
    /// The block always takes one extra row. While the pose is still
    /// lowered that row sits above the block, afterwards below it.
    pub fn rise(&mut self, pose: &Pose, body: impl FnOnce(&mut Canvas<'a>)) {
        let start = self.row();
        body(self);
        if pose.y >= PX_PER_ROW / 2.0 {
            self.insert_blank_rows(start, 1);
        } else {
            self.blank();
        }
    }

    /// Insert blank rows at `at`, moving links below it down
    pub fn insert_blank_rows(&mut self, at: u32, count: u32) {
        let at = at.min(self.row());
        for _ in 0..count {
            self.lines.insert(at as usize, Line::default());
        }
        for link in self.links.iter_mut().filter(|l| l.row >= at) {
            link.row += count;
        }
    }

    /// Pad with blank rows until the page reaches `row`
    pub fn fill_to(&mut self, row: u32) {
        while self.row() < row {
            self.blank();
        }
    }

    /// Register a focusable item on the row about to be written
    ///
    /// Returns the styled label; the focused item is drawn highlighted.
    pub fn link(&mut self, label: &str, action: LinkAction, style: Style, opacity: f64) -> Span<'static> {
        let focused = self.focus == Some(self.links.len());
        self.links.push(PageLink {
            row: self.row(),
            label: label.to_string(),
            action,
        });

        let style = self.fade(style, opacity);
        let style = if focused {
            style
                .bg(self.theme.selection)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        };
        Span::styled(label.to_string(), style)
    }

    /// Link to an href; dead links render as plain text
    pub fn href(&mut self, label: &str, href: &str, style: Style, opacity: f64) -> Span<'static> {
        match LinkTarget::parse(href) {
            Some(target) => self.link(label, LinkAction::Open(target), style, opacity),
            None => Span::styled(label.to_string(), self.fade(style, opacity)),
        }
    }
}

/// Greedy word wrap by display width
///
/// Explicit newlines start a new row; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                    if current_width + w > width && !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_core::reveal::intersection_ratio;
    use folio_core::AppConfig;

    use crate::theme::Theme;

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(rows.iter().all(|r| r.width() <= 10));
        assert_eq!(rows.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_keeps_newlines_and_splits_long_words() {
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_rise_reserves_one_row_either_way() {
        let theme = Theme::default();
        let now = Instant::now();
        let mut canvas = Canvas::new(&theme, 80, now, false, None);

        let lowered = Pose::faded(0.0, 20.0);
        canvas.rise(&lowered, |c| {
            let span = c.link("Go", LinkAction::Submit, Style::default(), 1.0);
            c.line(vec![span], 0, &Pose::REST);
        });
        assert_eq!(canvas.row(), 2);
        assert!(canvas.lines[0].spans.is_empty());
        assert_eq!(canvas.links[0].row, 1);

        canvas.rise(&Pose::REST, |c| c.blank());
        assert_eq!(canvas.row(), 4);
    }

    #[test]
    fn test_link_focus_highlights_by_index() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, 80, Instant::now(), false, Some(1));

        let first = canvas.link("one", LinkAction::Submit, Style::default(), 1.0);
        let second = canvas.link("two", LinkAction::Submit, Style::default(), 1.0);
        assert_eq!(first.style.bg, None);
        assert_eq!(second.style.bg, Some(theme.selection));
    }

    #[test]
    fn test_dead_href_is_not_focusable() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, 80, Instant::now(), false, None);
        canvas.href("Mumbai", "#", Style::default(), 1.0);
        canvas.href("Mail", "mailto:a@b.c", Style::default(), 1.0);
        assert_eq!(canvas.links.len(), 1);
    }

    #[test]
    fn test_layout_covers_every_section_in_order() {
        let app = App::new(Arc::new(AppConfig::default()), Theme::default());
        let page = Page::compose(&app, 100, 40, Instant::now());

        let regions = page.layout.regions();
        assert_eq!(regions.len(), SectionId::ALL.len());
        let mut expected_top = 0;
        for ((id, span), section) in regions.iter().zip(SectionId::ALL) {
            assert_eq!(*id, section);
            assert_eq!(span.top, expected_top);
            assert!(span.height > 0);
            expected_top = span.bottom();
        }
        assert_eq!(page.height() as usize, page.lines.len());

        // Hero fills at least the first screen
        let hero = page.layout.region(SectionId::Hero).unwrap();
        assert!(hero.height >= 40);
        assert_eq!(intersection_ratio(&hero, &RowSpan::new(0, 40)), 40.0 / hero.height as f64);
    }

    #[test]
    fn test_layout_is_stable_while_animating() {
        let app = App::new(Arc::new(AppConfig::default()), Theme::default());
        let now = Instant::now();
        let first = Page::compose(&app, 100, 40, now);
        let later = Page::compose(&app, 100, 40, now + std::time::Duration::from_millis(700));
        assert_eq!(first.layout, later.layout);
        assert_eq!(first.links, later.links);
    }

    #[test]
    fn test_links_sorted_by_row() {
        let app = App::new(Arc::new(AppConfig::default()), Theme::default());
        let page = Page::compose(&app, 100, 40, Instant::now());
        assert!(!page.links.is_empty());
        assert!(page.links.windows(2).all(|w| w[0].row <= w[1].row));
        assert!(page
            .links
            .iter()
            .any(|l| l.action == LinkAction::Open(LinkTarget::Section(SectionId::Projects))));
        assert!(page.links.iter().any(|l| l.action == LinkAction::Submit));
    }
}
