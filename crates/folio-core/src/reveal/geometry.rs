//! Vertical extents in page-row coordinates

use crate::content::SectionId;

/// A half-open vertical range `[top, top + height)` measured in page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    #[inline]
    pub fn contains(&self, row: u32) -> bool {
        row >= self.top && row < self.bottom()
    }

    /// Overlapping rows between two spans
    pub fn overlap(&self, other: &Span) -> u32 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }
}

/// Fraction of `target` that lies inside `viewport`, in `[0, 1]`
///
/// A zero-height target never counts as visible.
pub fn intersection_ratio(target: &Span, viewport: &Span) -> f64 {
    if target.height == 0 {
        return 0.0;
    }
    target.overlap(viewport) as f64 / target.height as f64
}

/// Resolves a section to its current extent on the page
///
/// Returns `None` while the section is not laid out.
pub trait RegionLookup {
    fn region(&self, section: SectionId) -> Option<Span>;
}

impl RegionLookup for [(SectionId, Span)] {
    fn region(&self, section: SectionId) -> Option<Span> {
        self.iter().find(|(id, _)| *id == section).map(|(_, span)| *span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_fully_visible() {
        let target = Span::new(10, 20);
        let viewport = Span::new(0, 100);
        assert!((intersection_ratio(&target, &viewport) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_partial() {
        // Rows 90..100 of a 40-row section are on screen
        let target = Span::new(90, 40);
        let viewport = Span::new(0, 100);
        assert!((intersection_ratio(&target, &viewport) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_disjoint_and_empty() {
        let viewport = Span::new(0, 50);
        assert_eq!(intersection_ratio(&Span::new(50, 10), &viewport), 0.0);
        assert_eq!(intersection_ratio(&Span::new(10, 0), &viewport), 0.0);
    }

    #[test]
    fn test_region_lookup_on_slice() {
        let regions = [
            (SectionId::Hero, Span::new(0, 30)),
            (SectionId::About, Span::new(30, 40)),
        ];
        assert_eq!(regions[..].region(SectionId::About), Some(Span::new(30, 40)));
        assert_eq!(regions[..].region(SectionId::Contact), None);
    }
}
