use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

/// Result of a contact form delivery running in the background
#[derive(Debug)]
pub enum SubmitResult {
    /// The email service accepted the message
    Delivered,
    /// Delivery failed; the detail is only logged
    Failed { error: folio_core::Error },
}

impl SubmitResult {
    pub fn from_outcome(outcome: folio_core::Result<()>) -> Self {
        match outcome {
            Ok(()) => SubmitResult::Delivered,
            Err(error) => SubmitResult::Failed { error },
        }
    }

    pub fn into_outcome(self) -> folio_core::Result<()> {
        match self {
            SubmitResult::Delivered => Ok(()),
            SubmitResult::Failed { error } => Err(error),
        }
    }
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    /// Idle ticks at `tick_rate_ms`, animation frames at `fps`
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let animation_tick = match fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis(1000 / fps as u64),
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll for the next event at the idle rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        match event::read()? {
            // Ignore release events (crossterm 0.27+ sends them on some systems)
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
