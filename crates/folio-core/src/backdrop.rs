//! Decorative background blobs
//!
//! Every generation scatters a fresh set; two runs never look alike.

use std::f64::consts::TAU;
use std::time::Duration;

use rand::Rng;

use crate::content::SectionId;

const PULSE_MIN_SECS: f64 = 15.0;
const PULSE_SPREAD_SECS: f64 = 10.0;
const MAX_DELAY_SECS: f64 = 5.0;
/// Lowest point of the pulse, relative to the blob's own opacity
const PULSE_FLOOR: f64 = 0.8;

/// How a section scatters its blobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobSpec {
    pub count: usize,
    /// Smallest diameter in CSS pixels
    pub min_size: f64,
    /// Random extra diameter on top of `min_size`
    pub size_spread: f64,
    /// Base opacity range `(low, high)`
    pub opacity: (f64, f64),
}

impl BlobSpec {
    pub fn for_section(section: SectionId) -> Self {
        let (count, min_size, size_spread) = match section {
            SectionId::Hero => (8, 50.0, 300.0),
            SectionId::About => (4, 100.0, 300.0),
            SectionId::Projects => (6, 100.0, 300.0),
            SectionId::Skills => (5, 50.0, 200.0),
            SectionId::Contact => (6, 50.0, 200.0),
        };
        let opacity = match section {
            SectionId::Hero => (0.4, 0.7),
            _ => (1.0, 1.0),
        };
        Self {
            count,
            min_size,
            size_spread,
            opacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Horizontal position as a fraction of the section width
    pub left: f64,
    /// Vertical position as a fraction of the section height
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub period: Duration,
    pub delay: Duration,
}

impl Blob {
    fn scatter<R: Rng + ?Sized>(spec: &BlobSpec, rng: &mut R) -> Self {
        let (low, high) = spec.opacity;
        Self {
            left: rng.gen::<f64>(),
            top: rng.gen::<f64>(),
            width: spec.min_size + rng.gen::<f64>() * spec.size_spread,
            height: spec.min_size + rng.gen::<f64>() * spec.size_spread,
            opacity: low + rng.gen::<f64>() * (high - low),
            period: Duration::from_secs_f64(PULSE_MIN_SECS + rng.gen::<f64>() * PULSE_SPREAD_SECS),
            delay: Duration::from_secs_f64(rng.gen::<f64>() * MAX_DELAY_SECS),
        }
    }

    /// Opacity at `elapsed` into the infinite pulse
    pub fn intensity(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.opacity;
        };
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return self.opacity;
        }
        let phase = (active.as_secs_f64() / period).fract();
        // 1 at both ends of the cycle, PULSE_FLOOR halfway through
        let wave = 0.5 + 0.5 * (phase * TAU).cos();
        self.opacity * (PULSE_FLOOR + (1.0 - PULSE_FLOOR) * wave)
    }
}

/// Blob layer behind one section
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    section: SectionId,
    blobs: Vec<Blob>,
}

impl Backdrop {
    pub fn generate<R: Rng + ?Sized>(section: SectionId, rng: &mut R) -> Self {
        let spec = BlobSpec::for_section(section);
        let blobs = (0..spec.count).map(|_| Blob::scatter(&spec, rng)).collect();
        Self { section, blobs }
    }

    /// Scatter with the thread-local generator
    pub fn random(section: SectionId) -> Self {
        Self::generate(section, &mut rand::thread_rng())
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_section() {
        let expected = [
            (SectionId::Hero, 8),
            (SectionId::About, 4),
            (SectionId::Projects, 6),
            (SectionId::Skills, 5),
            (SectionId::Contact, 6),
        ];
        for (section, count) in expected {
            assert_eq!(Backdrop::random(section).blobs().len(), count, "{}", section);
        }
    }

    #[test]
    fn test_blobs_within_bounds() {
        for section in SectionId::ALL {
            let spec = BlobSpec::for_section(section);
            for blob in Backdrop::random(section).blobs() {
                assert!((0.0..1.0).contains(&blob.left));
                assert!((0.0..1.0).contains(&blob.top));
                assert!(blob.width >= spec.min_size && blob.width <= spec.min_size + spec.size_spread);
                assert!(blob.opacity >= spec.opacity.0 && blob.opacity <= spec.opacity.1);
                assert!(blob.period >= Duration::from_secs(15) && blob.period <= Duration::from_secs(25));
                assert!(blob.delay <= Duration::from_secs(5));
            }
        }
    }

    #[test]
    fn test_intensity_stays_in_pulse_band() {
        let blob = Backdrop::random(SectionId::Hero).blobs()[0].clone();
        for secs in 0..60 {
            let value = blob.intensity(Duration::from_secs(secs));
            assert!(value <= blob.opacity + 1e-9);
            assert!(value >= blob.opacity * PULSE_FLOOR - 1e-9);
        }
    }
}
