use crate::content::SectionId;

use super::geometry::{intersection_ratio, Span};

/// One threshold-crossing report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Watches a single target and reports when it crosses a visibility threshold
///
/// The first check always reports, mirroring the initial callback a browser
/// delivers right after `observe`. Later checks report only on a crossing.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    target: SectionId,
    threshold: f64,
    last_intersecting: Option<bool>,
}

impl IntersectionObserver {
    pub fn new(target: SectionId, threshold: f64) -> Self {
        Self {
            target,
            threshold: threshold.clamp(0.0, 1.0),
            last_intersecting: None,
        }
    }

    pub fn target(&self) -> SectionId {
        self.target
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare the target's current extent against the viewport
    pub fn check(&mut self, region: &Span, viewport: &Span) -> Option<IntersectionEntry> {
        let ratio = intersection_ratio(region, viewport);
        let is_intersecting = region.height > 0 && ratio >= self.threshold;

        if self.last_intersecting == Some(is_intersecting) {
            return None;
        }
        self.last_intersecting = Some(is_intersecting);

        Some(IntersectionEntry {
            target: self.target,
            ratio,
            is_intersecting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_check_always_reports() {
        let mut observer = IntersectionObserver::new(SectionId::About, 0.1);
        let entry = observer
            .check(&Span::new(500, 40), &Span::new(0, 40))
            .expect("initial report");
        assert!(!entry.is_intersecting);
        assert_eq!(entry.ratio, 0.0);
    }

    #[test]
    fn test_reports_only_on_crossing() {
        let mut observer = IntersectionObserver::new(SectionId::About, 0.1);
        let region = Span::new(100, 50);

        assert!(observer.check(&region, &Span::new(0, 40)).is_some());
        // Still hidden, no report
        assert!(observer.check(&region, &Span::new(10, 40)).is_none());
        // 5 of 50 rows visible: exactly the threshold
        let entry = observer.check(&region, &Span::new(65, 40)).unwrap();
        assert!(entry.is_intersecting);
        // Still intersecting, no report
        assert!(observer.check(&region, &Span::new(80, 40)).is_none());
        // Scrolled back out
        let entry = observer.check(&region, &Span::new(0, 40)).unwrap();
        assert!(!entry.is_intersecting);
    }
}
