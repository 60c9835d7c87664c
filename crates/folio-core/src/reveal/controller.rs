use std::time::Instant;

use tracing::{debug, trace};

use crate::content::SectionId;

use super::geometry::{RegionLookup, Span};
use super::observer::IntersectionObserver;

/// Fraction of a section that must be on screen before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Two states, one irreversible transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityFlag {
    #[default]
    Hidden,
    Shown { at: Instant },
}

impl VisibilityFlag {
    pub fn is_shown(&self) -> bool {
        matches!(self, VisibilityFlag::Shown { .. })
    }

    /// Move to `Shown`; returns false if already shown
    fn show(&mut self, at: Instant) -> bool {
        match self {
            VisibilityFlag::Hidden => {
                *self = VisibilityFlag::Shown { at };
                true
            }
            VisibilityFlag::Shown { .. } => false,
        }
    }
}

/// Single-fire reveal for one section
///
/// Owns its observer exclusively. The observer is dropped as soon as the
/// section reveals, on `unmount`, or when the controller itself is dropped.
#[derive(Debug)]
pub struct RevealController {
    section: SectionId,
    threshold: f64,
    flag: VisibilityFlag,
    observer: Option<IntersectionObserver>,
}

impl RevealController {
    pub fn new(section: SectionId) -> Self {
        Self::with_threshold(section, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(section: SectionId, threshold: f64) -> Self {
        Self {
            section,
            threshold,
            flag: VisibilityFlag::Hidden,
            observer: None,
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn flag(&self) -> VisibilityFlag {
        self.flag
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.flag.is_shown()
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        match self.flag {
            VisibilityFlag::Shown { at } => Some(at),
            VisibilityFlag::Hidden => None,
        }
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Register the observation if the section is laid out
    ///
    /// A missing region is not an error: the section stays hidden for the
    /// lifetime of this controller.
    pub fn mount<R: RegionLookup + ?Sized>(&mut self, regions: &R) {
        if self.is_revealed() || self.is_observing() {
            return;
        }
        if regions.region(self.section).is_none() {
            debug!(section = %self.section, "Reveal target missing at mount, skipping observation");
            return;
        }
        self.observer = Some(IntersectionObserver::new(self.section, self.threshold));
        trace!(section = %self.section, "Reveal observation registered");
    }

    /// Feed the current viewport; returns true on the hidden → shown transition
    pub fn observe<R: RegionLookup + ?Sized>(
        &mut self,
        regions: &R,
        viewport: &Span,
        now: Instant,
    ) -> bool {
        let Some(observer) = self.observer.as_mut() else {
            return false;
        };
        let Some(region) = regions.region(self.section) else {
            return false;
        };
        let Some(entry) = observer.check(&region, viewport) else {
            return false;
        };
        if !entry.is_intersecting {
            return false;
        }

        let fired = self.flag.show(now);
        self.observer = None;
        if fired {
            debug!(section = %self.section, ratio = entry.ratio, "Section revealed");
        }
        fired
    }

    /// Release the observation if still active
    pub fn unmount(&mut self) {
        if self.observer.take().is_some() {
            trace!(section = %self.section, "Reveal observation released");
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn layout() -> Vec<(SectionId, Span)> {
        vec![
            (SectionId::Hero, Span::new(0, 40)),
            (SectionId::About, Span::new(40, 50)),
            (SectionId::Skills, Span::new(90, 100)),
        ]
    }

    #[test]
    fn test_starts_hidden_and_unregistered() {
        let controller = RevealController::new(SectionId::About);
        assert!(!controller.is_revealed());
        assert!(!controller.is_observing());
        assert_eq!(controller.flag(), VisibilityFlag::Hidden);
    }

    #[test]
    fn test_reveals_once_at_threshold() {
        let regions = layout();
        let mut controller = RevealController::new(SectionId::Skills);
        controller.mount(&regions[..]);
        assert!(controller.is_observing());

        let now = Instant::now();
        // 9 of 100 rows visible: below threshold
        assert!(!controller.observe(&regions[..], &Span::new(51, 48), now));
        assert!(!controller.is_revealed());

        // 10 of 100 rows visible
        let later = now + Duration::from_millis(50);
        assert!(controller.observe(&regions[..], &Span::new(52, 48), later));
        assert!(controller.is_revealed());
        assert_eq!(controller.revealed_at(), Some(later));
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_never_hides_again() {
        let regions = layout();
        let mut controller = RevealController::new(SectionId::About);
        controller.mount(&regions[..]);

        let now = Instant::now();
        assert!(controller.observe(&regions[..], &Span::new(0, 60), now));

        let mut transitions = 0;
        for top in [500, 0, 45, 900, 0] {
            if controller.observe(&regions[..], &Span::new(top, 40), now) {
                transitions += 1;
            }
            assert!(controller.is_revealed());
        }
        assert_eq!(transitions, 0);
        assert_eq!(controller.revealed_at(), Some(now));
    }

    #[test]
    fn test_missing_region_stays_hidden() {
        let regions = layout();
        let mut controller = RevealController::new(SectionId::Contact);
        controller.mount(&regions[..]);
        assert!(!controller.is_observing());

        let now = Instant::now();
        assert!(!controller.observe(&regions[..], &Span::new(0, 10_000), now));
        assert!(!controller.is_revealed());
    }

    #[test]
    fn test_unmount_before_intersection_releases_observer() {
        let regions = layout();
        let mut controller = RevealController::new(SectionId::Skills);
        controller.mount(&regions[..]);
        assert!(controller.is_observing());

        controller.unmount();
        assert!(!controller.is_observing());

        // No longer observing, so scrolling into view does nothing
        assert!(!controller.observe(&regions[..], &Span::new(90, 100), Instant::now()));
        assert!(!controller.is_revealed());
    }

    #[test]
    fn test_remount_after_reveal_is_noop() {
        let regions = layout();
        let mut controller = RevealController::new(SectionId::Hero);
        controller.mount(&regions[..]);
        assert!(controller.observe(&regions[..], &Span::new(0, 40), Instant::now()));

        controller.mount(&regions[..]);
        assert!(!controller.is_observing());
    }
}
