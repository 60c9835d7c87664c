use std::time::{Duration, Instant};

use super::easing::Easing;
use super::spring::Spring;

/// Animated properties of one element
///
/// `x` and `y` are offsets in CSS pixels, `width` is a fraction of the
/// element's full extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Pose {
    /// Fully visible and in place
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        width: 1.0,
    };

    pub const fn faded(x: f64, y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
            width: 1.0,
        }
    }

    /// Interpolate toward `to`; `t` may exceed 1 for spring overshoot
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            width: mix(self.width, to.width).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Spring(Spring),
    Tween { duration: Duration, easing: Easing },
}

impl Curve {
    pub fn progress(&self, elapsed: Duration) -> f64 {
        match self {
            Curve::Spring(spring) => {
                if elapsed >= spring.settle_time() {
                    1.0
                } else {
                    spring.position(elapsed.as_secs_f64())
                }
            }
            Curve::Tween { duration, easing } => {
                if duration.is_zero() {
                    return 1.0;
                }
                let t = elapsed.as_secs_f64() / duration.as_secs_f64();
                easing.apply(t)
            }
        }
    }

    pub fn settle_time(&self) -> Duration {
        match self {
            Curve::Spring(spring) => spring.settle_time(),
            Curve::Tween { duration, .. } => *duration,
        }
    }
}

/// Entrance animation from a hidden pose to its resting pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub hidden: Pose,
    pub shown: Pose,
    pub curve: Curve,
    pub delay: Duration,
}

impl Preset {
    pub fn delayed(mut self, extra: Duration) -> Self {
        self.delay += extra;
        self
    }

    /// Curve progress `elapsed` after the trigger, delay included
    pub fn progress(&self, elapsed: Duration) -> f64 {
        match elapsed.checked_sub(self.delay) {
            Some(active) => self.curve.progress(active),
            None => 0.0,
        }
    }

    pub fn sample(&self, elapsed: Duration) -> Pose {
        self.hidden.lerp(&self.shown, self.progress(elapsed))
    }

    /// Pose at `now` for an animation triggered at `started`, hidden if never triggered
    pub fn sample_at(&self, started: Option<Instant>, now: Instant) -> Pose {
        match started {
            Some(start) => self.sample(now.saturating_duration_since(start)),
            None => self.hidden,
        }
    }

    /// Time from trigger until the element is at rest
    pub fn finish_time(&self) -> Duration {
        self.delay + self.curve.settle_time()
    }
}

/// Incremental delays across siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub interval: Duration,
    /// Time the parent animates before the first child starts
    pub lead: Duration,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> Duration {
        self.lead + self.interval * index as u32
    }

    /// `preset` for the child at `index`
    pub fn child(&self, preset: Preset, index: usize) -> Preset {
        preset.delayed(self.delay_for(index))
    }
}

const FADE_DURATION: Duration = Duration::from_millis(600);
const CONTAINER_FADE: Duration = Duration::from_millis(300);
const HERO_FADE: Duration = Duration::from_millis(700);
const HERO_STEP: Duration = Duration::from_millis(200);
const ITEM_STIFFNESS: f64 = 100.0;

fn tween(duration: Duration) -> Curve {
    Curve::Tween {
        duration,
        easing: Easing::EaseOut,
    }
}

/// Section header: rise 20px while fading in
pub fn fade_up() -> Preset {
    Preset {
        hidden: Pose::faded(0.0, 20.0),
        shown: Pose::REST,
        curve: tween(FADE_DURATION),
        delay: Duration::ZERO,
    }
}

/// Column sliding in horizontally; negative `from_x` enters from the left
pub fn slide_in(from_x: f64, delay: Duration) -> Preset {
    Preset {
        hidden: Pose::faded(from_x, 0.0),
        shown: Pose::REST,
        curve: tween(FADE_DURATION),
        delay,
    }
}

/// Grid item: springs up 20px
pub fn spring_item(damping: f64) -> Preset {
    Preset {
        hidden: Pose::faded(0.0, 20.0),
        shown: Pose::REST,
        curve: Curve::Spring(Spring::new(ITEM_STIFFNESS, damping)),
        delay: Duration::ZERO,
    }
}

/// The wrapper around a staggered grid
pub fn container_fade() -> Preset {
    Preset {
        hidden: Pose::faded(0.0, 0.0),
        shown: Pose::REST,
        curve: tween(CONTAINER_FADE),
        delay: Duration::ZERO,
    }
}

/// Stagger children; with `before_children` they wait for the container fade
pub fn container_stagger(interval: Duration, before_children: bool) -> Stagger {
    Stagger {
        interval,
        lead: if before_children {
            CONTAINER_FADE
        } else {
            Duration::ZERO
        },
    }
}

/// Skills filter button at `index`
pub fn category_button(index: usize) -> Preset {
    Preset {
        hidden: Pose::faded(0.0, 10.0),
        shown: Pose::REST,
        curve: Curve::Spring(Spring::new(500.0, 25.0)),
        delay: Duration::from_millis(100) + Duration::from_millis(50) * index as u32,
    }
}

/// Contact form row at `index` (three fields, then the submit control)
pub fn form_field(index: usize) -> Preset {
    spring_item(12.0).delayed(Duration::from_millis(400) + Duration::from_millis(50) * index as u32)
}

/// Skill level bar growing from zero width
pub fn skill_bar(index: usize) -> Preset {
    Preset {
        hidden: Pose {
            width: 0.0,
            ..Pose::REST
        },
        shown: Pose::REST,
        curve: Curve::Tween {
            duration: Duration::from_millis(1500),
            easing: Easing::OUT_EXPO,
        },
        delay: Duration::from_millis(200) + Duration::from_millis(30) * index as u32,
    }
}

/// Hero line at `step` of the staggered fade-in sequence
pub fn hero_fade(step: u32) -> Preset {
    Preset {
        hidden: Pose::faded(0.0, 10.0),
        shown: Pose::REST,
        curve: tween(HERO_FADE),
        delay: HERO_STEP * step,
    }
}

/// Closing line under a section
pub fn footer_fade() -> Preset {
    fade_up().delayed(Duration::from_millis(400))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_delay_and_rest_after_finish() {
        let preset = slide_in(-50.0, Duration::from_millis(200));
        assert_eq!(preset.sample(Duration::from_millis(100)), preset.hidden);

        let done = preset.sample(preset.finish_time());
        assert_eq!(done, Pose::REST);
    }

    #[test]
    fn test_deterministic() {
        let presets = [
            fade_up(),
            spring_item(10.0),
            form_field(2),
            skill_bar(4),
            category_button(1),
            hero_fade(3),
        ];
        for preset in presets {
            for ms in [0u64, 37, 250, 610, 999, 2400] {
                let elapsed = Duration::from_millis(ms);
                assert_eq!(preset.sample(elapsed), preset.sample(elapsed));
            }
        }
    }

    #[test]
    fn test_spring_item_settles_to_rest() {
        let preset = spring_item(10.0);
        let pose = preset.sample(preset.finish_time() + Duration::from_millis(1));
        assert_eq!(pose, Pose::REST);
    }

    #[test]
    fn test_stagger_offsets_are_increasing() {
        let stagger = container_stagger(Duration::from_millis(100), false);
        assert_eq!(stagger.delay_for(0), Duration::ZERO);
        assert_eq!(stagger.delay_for(3), Duration::from_millis(300));

        let before = container_stagger(Duration::from_millis(50), true);
        assert_eq!(before.delay_for(0), Duration::from_millis(300));
        assert_eq!(before.delay_for(2), Duration::from_millis(400));
    }

    #[test]
    fn test_staggered_children_start_in_order() {
        let stagger = container_stagger(Duration::from_millis(100), false);
        let first = stagger.child(spring_item(10.0), 0);
        let second = stagger.child(spring_item(10.0), 1);

        let at = Duration::from_millis(80);
        assert!(first.progress(at) > 0.0);
        assert_eq!(second.progress(at), 0.0);
    }

    #[test]
    fn test_form_and_bar_delays() {
        assert_eq!(form_field(0).delay, Duration::from_millis(400));
        assert_eq!(form_field(3).delay, Duration::from_millis(550));
        assert_eq!(skill_bar(0).delay, Duration::from_millis(200));
        assert_eq!(skill_bar(10).delay, Duration::from_millis(500));
        assert_eq!(category_button(2).delay, Duration::from_millis(200));
    }

    #[test]
    fn test_skill_bar_grows_width() {
        let bar = skill_bar(0);
        assert_eq!(bar.sample(Duration::ZERO).width, 0.0);
        let mid = bar.sample(Duration::from_millis(700)).width;
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(bar.sample(bar.finish_time()).width, 1.0);
    }

    #[test]
    fn test_sample_at_untriggered_is_hidden() {
        let now = Instant::now();
        assert_eq!(fade_up().sample_at(None, now), fade_up().hidden);
    }
}
