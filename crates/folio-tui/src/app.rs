use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_core::backdrop::Backdrop;
use folio_core::contact::{ContactForm, FormField, Notification, SubmitRejected, Submission};
use folio_core::content::{CategoryFilter, SectionId};
use folio_core::reveal::{RevealController, Span};
use folio_core::AppConfig;
use tracing::{debug, info};

use crate::page::{LinkAction, Page, PageLayout, PageLink};
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// How long after a trigger entrance animations may still be moving
const ANIMATION_WINDOW: Duration = Duration::from_secs(3);

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    /// Typing into a contact form field
    Editing(FormField),
    Help,
}

/// Per-section runtime state
#[derive(Debug)]
pub struct SectionState {
    pub reveal: RevealController,
    pub backdrop: Backdrop,
}

impl SectionState {
    fn new(section: SectionId) -> Self {
        Self {
            reveal: RevealController::new(section),
            backdrop: Backdrop::random(section),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsState {
    pub filter: CategoryFilter,
    /// When the filter last changed; the grid replays its entrance from here
    pub changed_at: Option<Instant>,
}

/// Notification on screen since `shown_at`
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub mode: Mode,
    pub scroller: PageScroller,
    sections: Vec<SectionState>,
    mounted: bool,
    pub skills: SkillsState,
    pub form: ContactForm,
    pub toasts: Vec<Toast>,
    /// Index into `links`
    pub focused_link: Option<usize>,
    pub links: Vec<PageLink>,
    pub layout: PageLayout,
    pub viewport_height: u16,
    pub status_message: Option<String>,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub started: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let scroller = PageScroller::new(config.ui.scroll.clone());
        Self {
            config,
            theme,
            mode: Mode::Browse,
            scroller,
            sections: SectionId::ALL.into_iter().map(SectionState::new).collect(),
            mounted: false,
            skills: SkillsState::default(),
            form: ContactForm::new(),
            toasts: Vec::new(),
            focused_link: None,
            links: Vec::new(),
            layout: PageLayout::default(),
            viewport_height: 0,
            status_message: None,
            pending_key: None,
            should_quit: false,
            started: Instant::now(),
        }
    }

    pub fn section(&self, id: SectionId) -> &SectionState {
        &self.sections[id.index()]
    }

    pub fn revealed_at(&self, id: SectionId) -> Option<Instant> {
        self.section(id).reveal.revealed_at()
    }

    /// Advance time-driven state
    pub fn tick(&mut self, now: Instant) {
        self.scroller.update(now);
        self.expire_toasts(now);
    }

    /// Adopt the layout of a freshly composed page
    ///
    /// Reveal observations are registered against the first layout only.
    pub fn sync_layout(&mut self, page: &Page, viewport_height: u16) {
        self.layout = page.layout.clone();
        self.links = page.links.clone();
        self.viewport_height = viewport_height;
        self.scroller.set_max(page.max_scroll(viewport_height));

        if let Some(index) = self.focused_link {
            if index >= self.links.len() {
                self.focused_link = self.links.len().checked_sub(1);
            }
        }

        if !self.mounted {
            for state in &mut self.sections {
                state.reveal.mount(&self.layout);
            }
            self.mounted = true;
        }
    }

    /// Rows currently on screen
    pub fn viewport(&self) -> Span {
        Span::new(self.scroller.offset() as u32, self.viewport_height as u32)
    }

    /// Feed the viewport to every section still waiting to reveal
    pub fn observe_viewport(&mut self, now: Instant) {
        let viewport = self.viewport();
        for state in &mut self.sections {
            state.reveal.observe(&self.layout, &viewport, now);
        }
    }

    /// Whether frames should be drawn at animation rate
    pub fn is_animating(&self, now: Instant) -> bool {
        let recent = |at: Option<Instant>| {
            at.is_some_and(|at| now.saturating_duration_since(at) < ANIMATION_WINDOW)
        };
        self.scroller.needs_update()
            || !self.toasts.is_empty()
            || self.form.is_submitting()
            || recent(self.skills.changed_at)
            || SectionId::ALL.iter().any(|id| recent(self.revealed_at(*id)))
    }

    // Scrolling

    pub fn scroll_down(&mut self) {
        self.scroller.line_down();
    }

    pub fn scroll_up(&mut self) {
        self.scroller.line_up();
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        self.scroller.half_page(self.viewport_height, down);
    }

    pub fn scroll_page(&mut self, down: bool) {
        self.scroller.full_page(self.viewport_height, down);
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.scroller.scroll_to(0, now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        let max = self.scroller.max();
        self.scroller.scroll_to(max, now);
    }

    /// Section holding the upper third of the viewport
    pub fn current_section(&self) -> SectionId {
        let anchor_row = self.scroller.offset() as u32 + self.viewport_height as u32 / 3;
        self.layout.section_at(anchor_row).unwrap_or(SectionId::Hero)
    }

    pub fn jump_to_section(&mut self, section: SectionId, now: Instant) {
        if let Some(top) = self.layout.top_of(section) {
            debug!(%section, top, "Jumping to section");
            self.scroller.scroll_to(top.min(u16::MAX as u32) as u16, now);
        }
    }

    pub fn next_section(&mut self, now: Instant) {
        let from = self.scroller.target() as u32;
        let next = self.layout.regions().iter().find(|(_, span)| span.top > from).map(|(id, _)| *id);
        match next {
            Some(section) => self.jump_to_section(section, now),
            None => self.jump_to_bottom(now),
        }
    }

    pub fn prev_section(&mut self, now: Instant) {
        let from = self.scroller.target() as u32;
        let prev = self
            .layout
            .regions()
            .iter()
            .rev()
            .find(|(_, span)| span.top < from)
            .map(|(id, _)| *id);
        if let Some(section) = prev {
            self.jump_to_section(section, now);
        }
    }

    // Links

    pub fn focused_action(&self) -> Option<&LinkAction> {
        self.focused_link.and_then(|i| self.links.get(i)).map(|link| &link.action)
    }

    fn first_visible_link(&self) -> Option<usize> {
        let viewport = self.viewport();
        self.links.iter().position(|link| viewport.contains(link.row))
    }

    pub fn focus_next_link(&mut self, now: Instant) {
        if self.links.is_empty() {
            return;
        }
        let next = match self.focused_link {
            Some(i) => (i + 1) % self.links.len(),
            None => self.first_visible_link().unwrap_or(0),
        };
        self.focus_link(next, now);
    }

    pub fn focus_prev_link(&mut self, now: Instant) {
        if self.links.is_empty() {
            return;
        }
        let len = self.links.len();
        let prev = match self.focused_link {
            Some(i) => (i + len - 1) % len,
            None => self.first_visible_link().unwrap_or(len - 1),
        };
        self.focus_link(prev, now);
    }

    fn focus_link(&mut self, index: usize, now: Instant) {
        self.focused_link = Some(index);
        if let Some(row) = self.links.get(index).map(|link| link.row) {
            self.scroll_into_view(row, now);
        }
    }

    fn scroll_into_view(&mut self, row: u32, now: Instant) {
        let viewport = Span::new(self.scroller.target() as u32, self.viewport_height as u32);
        if !viewport.contains(row) {
            let top = row.saturating_sub(self.viewport_height as u32 / 3);
            self.scroller.scroll_to(top.min(u16::MAX as u32) as u16, now);
        }
    }

    // Skills filter

    pub fn set_filter(&mut self, filter: CategoryFilter, now: Instant) {
        if self.skills.filter == filter {
            return;
        }
        debug!(%filter, "Skills filter changed");
        self.skills = SkillsState {
            filter,
            changed_at: Some(now),
        };
    }

    pub fn next_category(&mut self, now: Instant) {
        self.set_filter(self.skills.filter.next(), now);
    }

    pub fn prev_category(&mut self, now: Instant) {
        self.set_filter(self.skills.filter.prev(), now);
    }

    // Contact form

    /// Start typing into `field`, bringing it on screen
    pub fn edit_field(&mut self, field: FormField, now: Instant) {
        self.mode = Mode::Editing(field);
        let index = self
            .links
            .iter()
            .position(|link| link.action == LinkAction::EditField(field));
        if let Some(index) = index {
            self.focus_link(index, now);
        }
    }

    pub fn next_field(&mut self, now: Instant) {
        if let Mode::Editing(field) = self.mode {
            self.edit_field(field.next(), now);
        }
    }

    pub fn prev_field(&mut self, now: Instant) {
        if let Mode::Editing(field) = self.mode {
            self.edit_field(field.prev(), now);
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Mode::Editing(field) = self.mode {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Mode::Editing(field) = self.mode {
            self.form.pop_char(field);
        }
    }

    /// Validate and start a submission
    ///
    /// Invalid input moves the cursor to the offending field and nothing is sent.
    pub fn begin_submit(&mut self, now: Instant) -> Option<Submission> {
        match self.form.begin_submit() {
            Ok(submission) => {
                self.mode = Mode::Browse;
                self.set_status("Sending...");
                Some(submission)
            }
            Err(SubmitRejected::InFlight) => {
                self.set_status("A message is already being sent");
                None
            }
            Err(SubmitRejected::Invalid(e)) => {
                self.set_status(e.to_string());
                self.edit_field(e.field(), now);
                None
            }
        }
    }

    /// Settle the in-flight submission and show its toast
    ///
    /// An outcome with no submission in flight changes nothing.
    pub fn finish_submit(&mut self, outcome: folio_core::Result<()>, now: Instant) {
        let Some(notification) = self.form.finish(outcome) else {
            return;
        };
        self.clear_status();
        self.push_toast(notification, now);
    }

    // Notifications

    pub fn push_toast(&mut self, notification: Notification, now: Instant) {
        info!(title = notification.title, "Showing notification");
        self.toasts.push(Toast {
            notification,
            shown_at: now,
        });
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        let ttl = Duration::from_millis(self.config.ui.toast_duration_ms);
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio_core::content::{LinkTarget, SkillCategory};
    use folio_core::{Error, ScrollConfig};

    use crate::input::{handle_key_event, Action};
    use crate::keymap::Keymap;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn instant_scroll_config() -> Arc<AppConfig> {
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        Arc::new(config)
    }

    fn laid_out(now: Instant) -> App {
        let mut app = App::new(instant_scroll_config(), Theme::default());
        relayout(&mut app, now);
        app
    }

    fn relayout(app: &mut App, now: Instant) {
        let page = Page::compose(app, WIDTH, HEIGHT, now);
        app.sync_layout(&page, HEIGHT);
    }

    #[test]
    fn test_hero_reveals_on_first_observation() {
        let now = Instant::now();
        let mut app = laid_out(now);
        assert!(app.revealed_at(SectionId::Hero).is_none());

        app.observe_viewport(now);
        assert_eq!(app.revealed_at(SectionId::Hero), Some(now));
        assert!(app.revealed_at(SectionId::Contact).is_none());
        assert!(app.section(SectionId::Contact).reveal.is_observing());
    }

    #[test]
    fn test_sections_reveal_once_when_scrolled_into_view() {
        let start = Instant::now();
        let mut app = laid_out(start);
        app.observe_viewport(start);

        let later = start + Duration::from_secs(1);
        app.jump_to_section(SectionId::Skills, later);
        app.tick(later);
        app.observe_viewport(later);
        assert_eq!(app.revealed_at(SectionId::Skills), Some(later));
        assert!(!app.section(SectionId::Skills).reveal.is_observing());

        // Scrolling away and back keeps the first reveal time
        let after = later + Duration::from_secs(1);
        app.jump_to_top(after);
        app.tick(after);
        app.observe_viewport(after);
        app.jump_to_section(SectionId::Skills, after);
        app.tick(after);
        app.observe_viewport(after);
        assert_eq!(app.revealed_at(SectionId::Skills), Some(later));
    }

    #[test]
    fn test_section_navigation() {
        let now = Instant::now();
        let mut app = laid_out(now);

        app.next_section(now);
        app.tick(now);
        assert_eq!(app.scroller.offset() as u32, app.layout.top_of(SectionId::About).unwrap());
        assert_eq!(app.current_section(), SectionId::About);

        app.prev_section(now);
        app.tick(now);
        assert_eq!(app.scroller.offset(), 0);
        assert_eq!(app.current_section(), SectionId::Hero);
    }

    #[test]
    fn test_link_focus_wraps() {
        let now = Instant::now();
        let mut app = laid_out(now);
        let count = app.links.len();
        assert!(count > 1);

        app.focus_prev_link(now);
        assert!(app.focused_link.is_some());
        app.focused_link = Some(count - 1);
        app.focus_next_link(now);
        assert_eq!(app.focused_link, Some(0));
        app.focus_prev_link(now);
        assert_eq!(app.focused_link, Some(count - 1));
    }

    #[test]
    fn test_first_focus_picks_visible_link() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.focus_next_link(now);
        assert_eq!(
            app.focused_action(),
            Some(&LinkAction::Open(LinkTarget::Section(SectionId::Projects)))
        );
    }

    #[test]
    fn test_filter_change_restarts_grid() {
        let now = Instant::now();
        let mut app = laid_out(now);

        app.set_filter(CategoryFilter::All, now);
        assert!(app.skills.changed_at.is_none());

        app.next_category(now);
        assert_eq!(app.skills.filter, CategoryFilter::Only(SkillCategory::Frontend));
        assert_eq!(app.skills.changed_at, Some(now));

        app.prev_category(now);
        app.prev_category(now);
        assert_eq!(app.skills.filter, CategoryFilter::Only(SkillCategory::Tools));
    }

    #[test]
    fn test_invalid_submit_focuses_field() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.form.set(FormField::Name, "Asha");

        assert!(app.begin_submit(now).is_none());
        assert_eq!(app.mode, Mode::Editing(FormField::Email));
        assert!(!app.form.is_submitting());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_submit_round_trip_shows_toast() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.form.set(FormField::Name, "Asha");
        app.form.set(FormField::Email, "asha@example.com");
        app.form.set(FormField::Message, "Hello");

        let submission = app.begin_submit(now);
        assert!(submission.is_some());
        assert!(app.begin_submit(now).is_none());

        app.finish_submit(Err(Error::Delivery("status 500".into())), now);
        assert_eq!(app.toasts.len(), 1);
        assert!(!app.toasts[0].notification.is_success());
        assert_eq!(app.form.value(FormField::Name), "Asha");
    }

    #[test]
    fn test_duplicate_outcome_adds_no_toast() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.form.set(FormField::Name, "Asha");
        app.form.set(FormField::Email, "asha@example.com");
        app.form.set(FormField::Message, "Hello");

        assert!(app.begin_submit(now).is_some());
        app.finish_submit(Ok(()), now);
        assert_eq!(app.toasts.len(), 1);

        app.form.set(FormField::Name, "Bob");
        app.finish_submit(Ok(()), now);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.form.value(FormField::Name), "Bob");
    }

    #[test]
    fn test_toasts_expire() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.push_toast(Notification::success(), now);
        assert!(app.is_animating(now));

        app.expire_toasts(now + Duration::from_millis(4_999));
        assert_eq!(app.toasts.len(), 1);
        app.expire_toasts(now + Duration::from_millis(5_000));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_typing_only_in_editing_mode() {
        let now = Instant::now();
        let mut app = laid_out(now);
        app.input_char('x');
        assert_eq!(app.form.value(FormField::Name), "");

        app.edit_field(FormField::Name, now);
        app.input_char('A');
        app.input_char('b');
        app.backspace();
        assert_eq!(app.form.value(FormField::Name), "A");
        assert_eq!(app.focused_action(), Some(&LinkAction::EditField(FormField::Name)));

        app.next_field(now);
        assert_eq!(app.mode, Mode::Editing(FormField::Email));
    }

    #[test]
    fn test_browse_keys_resolve_through_keymap() {
        let now = Instant::now();
        let mut app = laid_out(now);
        let keymap = Keymap::from_config(&app.config.keymap);
        let press = |app: &App, code| handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app, &keymap);

        assert_eq!(press(&app, KeyCode::Char('j')), Action::ScrollDown);
        assert_eq!(press(&app, KeyCode::Char(']')), Action::NextCategory);
        assert_eq!(press(&app, KeyCode::Char('3')), Action::JumpToSection(SectionId::Projects));
        assert_eq!(press(&app, KeyCode::Char('g')), Action::PendingG);

        app.pending_key = Some('g');
        assert_eq!(press(&app, KeyCode::Char('g')), Action::JumpToTop);

        app.mode = Mode::Help;
        assert_eq!(press(&app, KeyCode::Char('j')), Action::ExitMode);
    }
}
