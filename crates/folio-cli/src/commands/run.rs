use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use folio_core::{
    contact::{EmailCollaborator, EmailCredentials, EmailJsClient, FormField},
    content::LinkTarget,
    AppConfig,
};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler, SubmitResult},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    page::{LinkAction, Page},
    widgets::{BackdropWidget, PageWidget, PopupWidget, StatusBarWidget, ToastWidget},
};

/// Where contact form submissions go
struct Delivery {
    mailer: Arc<dyn EmailCollaborator>,
    credentials: EmailCredentials,
    results: mpsc::UnboundedSender<SubmitResult>,
}

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let credentials = config.emailjs.credentials();
    if !credentials.is_complete() {
        warn!("EmailJS credentials are incomplete; contact form deliveries will fail");
    }
    let mailer: Arc<dyn EmailCollaborator> = Arc::new(EmailJsClient::from_config(&config.emailjs)?);
    let (submit_tx, submit_rx) = mpsc::unbounded_channel::<SubmitResult>();
    let delivery = Delivery {
        mailer,
        credentials,
        results: submit_tx,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);
    let app = App::new(config.clone(), theme);

    let result = main_loop(&mut terminal, app, &keymap, &delivery, submit_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    keymap: &Keymap,
    delivery: &Delivery,
    mut submit_rx: mpsc::UnboundedReceiver<SubmitResult>,
) -> Result<()> {
    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.animation_fps,
    );

    // Start fast so the hero entrance plays smoothly
    let mut needs_fast_update = true;

    loop {
        // Process any finished deliveries (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            app.finish_submit(result.into_outcome(), Instant::now());
        }

        let now = Instant::now();
        app.tick(now);

        // Page area is everything above the status bar
        let size = terminal.size()?;
        let page_height = size.height.saturating_sub(1);
        let page = Page::compose(&app, size.width, page_height, now);
        app.sync_layout(&page, page_height);
        app.observe_viewport(now);
        let lines = page.lines;

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            PageWidget::render(frame, chunks[0], &app, lines);
            BackdropWidget::render(frame, chunks[0], &app, now);
            ToastWidget::render(frame, chunks[0], &app);
            StatusBarWidget::render(frame, chunks[1], &app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
            }
        })?;

        // Handle events (use faster tick rate while anything is moving)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(AppEvent::Key(key)) = event {
            let action = handle_key_event(key, &app, keymap);
            handle_action(&mut app, action, delivery);
        }

        needs_fast_update = app.is_animating(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action, delivery: &Delivery) {
    let now = Instant::now();

    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None && !app.form.is_submitting() {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page(true),
        Action::ScrollHalfPageUp => app.scroll_half_page(false),
        Action::ScrollPageDown => app.scroll_page(true),
        Action::ScrollPageUp => app.scroll_page(false),
        Action::JumpToTop => app.jump_to_top(now),
        Action::JumpToBottom => app.jump_to_bottom(now),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextSection => app.next_section(now),
        Action::PrevSection => app.prev_section(now),
        Action::JumpToSection(section) => app.jump_to_section(section, now),
        Action::NextLink => app.focus_next_link(now),
        Action::PrevLink => app.focus_prev_link(now),
        Action::FollowLink => follow_focused(app, delivery, now),
        Action::NextCategory => app.next_category(now),
        Action::PrevCategory => app.prev_category(now),
        Action::EditForm => app.edit_field(FormField::Name, now),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::ExitMode => match app.mode {
            Mode::Browse => app.focused_link = None,
            _ => app.mode = Mode::Browse,
        },
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
        Action::NextField => app.next_field(now),
        Action::PrevField => app.prev_field(now),
        Action::Submit => submit(app, delivery, now),
        Action::None => {}
    }
}

fn follow_focused(app: &mut App, delivery: &Delivery, now: Instant) {
    let Some(action) = app.focused_action().cloned() else {
        app.set_status("Nothing focused, press Tab to pick a link");
        return;
    };

    match action {
        LinkAction::Open(LinkTarget::Section(section)) => app.jump_to_section(section, now),
        LinkAction::Open(LinkTarget::External(url)) => {
            if let Err(e) = open::that(&url) {
                app.set_status(format!("Failed to open link: {}", e));
            } else {
                app.set_status(format!("Opening: {}", url));
            }
        }
        LinkAction::Open(LinkTarget::Asset(path)) => {
            let full = app.config.assets_dir().join(&path);
            if !full.exists() {
                app.set_status(format!("Asset not found: {}", full.display()));
            } else if let Err(e) = open::that(&full) {
                app.set_status(format!("Failed to open file: {}", e));
            } else {
                app.set_status(format!("Opening: {}", path));
            }
        }
        LinkAction::Filter(filter) => app.set_filter(filter, now),
        LinkAction::EditField(field) => app.edit_field(field, now),
        LinkAction::Submit => submit(app, delivery, now),
    }
}

/// Start a delivery in the background; the outcome comes back on the channel
fn submit(app: &mut App, delivery: &Delivery, now: Instant) {
    let Some(submission) = app.begin_submit(now) else {
        return;
    };

    let request = submission.into_request(delivery.credentials.clone());
    let mailer = delivery.mailer.clone();
    let tx = delivery.results.clone();
    info!("Spawning contact form delivery");
    tokio::spawn(async move {
        let outcome = mailer.send_form(&request).await;
        let _ = tx.send(SubmitResult::from_outcome(outcome));
    });
}
