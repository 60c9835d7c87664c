use std::time::{Duration, Instant};

use folio_core::{EasingType, ScrollConfig};

use super::easing::EasingTypeExt;

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Glide {
    fn position_at(&self, now: Instant) -> Option<u16> {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return None;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(t);
        let from = self.from as f64;
        Some((from + (self.to as f64 - from) * eased).round() as u16)
    }
}

/// Page scroll offset with eased transitions
///
/// `set_max` must be called whenever the page or viewport height changes;
/// every position is clamped to it.
#[derive(Debug, Clone)]
pub struct PageScroller {
    config: ScrollConfig,
    glide: Option<Glide>,
    offset: u16,
    max: u16,
    pending_delta: i32,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            glide: None,
            offset: 0,
            max: 0,
            pending_delta: 0,
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    /// Frame interval while a glide is running
    pub fn frame_interval(&self) -> Duration {
        match self.config.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis(1000 / fps as u64),
        }
    }

    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Where the page settles once the current glide finishes
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0
    }

    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
        if let Some(glide) = self.glide.as_mut() {
            glide.to = glide.to.min(max);
        }
    }

    /// Jump without animation
    pub fn set_offset(&mut self, offset: u16) {
        self.glide = None;
        self.pending_delta = 0;
        self.offset = offset.min(self.max);
    }

    /// Glide to an absolute row, e.g. a section anchor
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        let target = target.min(self.max);
        self.pending_delta = 0;
        if !self.is_smooth() || target == self.offset {
            self.set_offset(target);
            return;
        }
        self.glide = Some(Glide {
            start: now,
            from: self.offset,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
    }

    /// Queue a relative move; positive is down
    pub fn scroll_by(&mut self, delta: i32) {
        if self.is_smooth() {
            self.pending_delta += delta;
        } else {
            let offset = (self.offset as i32 + delta).clamp(0, self.max as i32);
            self.set_offset(offset as u16);
        }
    }

    pub fn line_down(&mut self) {
        self.scroll_by(self.line_step());
    }

    pub fn line_up(&mut self) {
        self.scroll_by(-self.line_step());
    }

    fn line_step(&self) -> i32 {
        if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i32
        }
    }

    pub fn half_page(&mut self, viewport_height: u16, down: bool) {
        let step = (viewport_height / 2).max(1) as i32;
        self.scroll_by(if down { step } else { -step });
    }

    pub fn full_page(&mut self, viewport_height: u16, down: bool) {
        let step = viewport_height.max(1) as i32;
        self.scroll_by(if down { step } else { -step });
    }

    /// Fold pending input into the glide and advance it to `now`
    pub fn update(&mut self, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = (self.target() as i32 + self.pending_delta).clamp(0, self.max as i32) as u16;
            self.pending_delta = 0;
            if target != self.offset {
                self.glide = Some(Glide {
                    start: now,
                    from: self.offset,
                    to: target,
                    duration: Duration::from_millis(self.config.animation_duration_ms),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(glide) = &self.glide {
            match glide.position_at(now) {
                Some(position) => self.offset = position.min(self.max),
                None => {
                    self.offset = glide.to.min(self.max);
                    self.glide = None;
                }
            }
        }

        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> PageScroller {
        let mut scroller = PageScroller::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        });
        scroller.set_max(200);
        scroller
    }

    #[test]
    fn test_instant_when_disabled() {
        let mut scroller = PageScroller::new(ScrollConfig {
            smooth_enabled: false,
            scroll_lines: 3,
            ..Default::default()
        });
        scroller.set_max(200);

        scroller.scroll_to(100, Instant::now());
        assert_eq!(scroller.offset(), 100);
        assert!(!scroller.needs_update());

        scroller.line_down();
        assert_eq!(scroller.offset(), 103);
    }

    #[test]
    fn test_deltas_batch_into_one_glide() {
        let mut scroller = smooth();
        let now = Instant::now();

        scroller.scroll_by(10);
        scroller.scroll_by(10);
        scroller.scroll_by(10);
        scroller.update(now);
        assert_eq!(scroller.target(), 30);

        let end = scroller.update(now + Duration::from_millis(150));
        assert_eq!(end, 30);
        assert!(!scroller.needs_update());
    }

    #[test]
    fn test_glide_moves_monotonically() {
        let mut scroller = smooth();
        let start = Instant::now();
        scroller.scroll_to(80, start);

        let mut prev = 0;
        for ms in (0..=120).step_by(10) {
            let offset = scroller.update(start + Duration::from_millis(ms));
            assert!(offset >= prev);
            prev = offset;
        }
        assert_eq!(prev, 80);
    }

    #[test]
    fn test_clamped_to_max() {
        let mut scroller = smooth();
        let now = Instant::now();
        scroller.scroll_to(500, now);
        assert_eq!(scroller.target(), 200);

        scroller.set_offset(150);
        scroller.set_max(120);
        assert_eq!(scroller.offset(), 120);

        scroller.scroll_by(-1000);
        scroller.update(now + Duration::from_secs(1));
        scroller.update(now + Duration::from_secs(2));
        assert_eq!(scroller.offset(), 0);
    }
}
