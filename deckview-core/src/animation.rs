//! Decorative per-slide animation timelines.
//!
//! Each slide entrance starts a [`SlideAnimation`]; renderers sample it with
//! the elapsed session time to get per-item progress. Staggering mirrors the
//! five hooks of the pitch deck: floating thought bubbles, a spinning wheel,
//! growing bars, streaming revenue items and scaling projection cards.

use std::f64::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Named animation hook for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Items bob up and down, staggered start.
    Float,
    /// A wheel rotates continuously.
    Spin,
    /// Bars grow from zero to their value.
    Grow,
    /// Items fade and slide in one after another.
    Stream,
    /// Cards scale up from 80 %.
    ScaleIn,
    None,
}

impl AnimationKind {
    /// Hook used when a slide does not name one: the pitch deck order.
    pub fn default_for(index: usize) -> Self {
        match index {
            0 => AnimationKind::Float,
            1 => AnimationKind::Spin,
            2 => AnimationKind::Grow,
            3 => AnimationKind::Stream,
            4 => AnimationKind::ScaleIn,
            _ => AnimationKind::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationKind::Float => "float",
            AnimationKind::Spin => "spin",
            AnimationKind::Grow => "grow",
            AnimationKind::Stream => "stream",
            AnimationKind::ScaleIn => "scale-in",
            AnimationKind::None => "none",
        }
    }

    /// `(start delay, run length)` for item `i`. Looping kinds report their period.
    fn schedule(self, i: usize) -> (Duration, Duration) {
        let i = i as u64;
        let ms = Duration::from_millis;
        match self {
            AnimationKind::Float => (ms(100 + i * 200), ms(3000)),
            AnimationKind::Spin => (ms(300), ms(4000)),
            AnimationKind::Grow => (ms(200 + i * 200), ms(1000)),
            AnimationKind::Stream => (ms(i * 200), ms(600)),
            AnimationKind::ScaleIn => (ms(i * 150), ms(500)),
            AnimationKind::None => (Duration::ZERO, Duration::ZERO),
        }
    }

    fn loops(self) -> bool {
        matches!(self, AnimationKind::Float | AnimationKind::Spin)
    }

    /// Extra wait between an item appearing and its loop starting.
    fn loop_delay(self, i: usize) -> Duration {
        match self {
            AnimationKind::Float => Duration::from_millis(i as u64 * 500),
            _ => Duration::ZERO,
        }
    }
}

/// A running entrance animation for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideAnimation {
    pub kind: AnimationKind,
    pub slide: usize,
    pub started_at: Duration,
    pub item_count: usize,
    pub reduced_motion: bool,
}

impl SlideAnimation {
    pub fn start(
        kind: AnimationKind,
        slide: usize,
        item_count: usize,
        started_at: Duration,
        reduced_motion: bool,
    ) -> Self {
        Self {
            kind,
            slide,
            started_at,
            item_count,
            reduced_motion,
        }
    }

    fn elapsed_for(&self, item: usize, now: Duration) -> Option<Duration> {
        let (delay, _) = self.kind.schedule(item);
        now.checked_sub(self.started_at)?.checked_sub(delay)
    }

    /// Entrance progress of `item` in `[0, 1]`; looping kinds report 1 once started.
    pub fn item_progress(&self, item: usize, now: Duration) -> f64 {
        if self.reduced_motion || self.kind == AnimationKind::None {
            return 1.0;
        }
        let Some(elapsed) = self.elapsed_for(item, now) else {
            return 0.0;
        };
        if self.kind.loops() {
            return 1.0;
        }
        let (_, run) = self.kind.schedule(item);
        let t = elapsed.as_secs_f64() / run.as_secs_f64();
        ease_out(t.clamp(0.0, 1.0))
    }

    /// Loop phase of `item` in `[0, 1)` for looping kinds; 0 otherwise.
    pub fn loop_phase(&self, item: usize, now: Duration) -> f64 {
        if self.reduced_motion || !self.kind.loops() {
            return 0.0;
        }
        let Some(elapsed) = self
            .elapsed_for(item, now)
            .and_then(|e| e.checked_sub(self.kind.loop_delay(item)))
        else {
            return 0.0;
        };
        let (_, period) = self.kind.schedule(item);
        (elapsed.as_secs_f64() / period.as_secs_f64()).fract()
    }

    /// Vertical bob offset in rows for a floating item, in `[-1, 1]`.
    pub fn float_offset(&self, item: usize, now: Duration) -> f64 {
        if self.kind != AnimationKind::Float {
            return 0.0;
        }
        (self.loop_phase(item, now) * 2.0 * PI).sin()
    }

    /// True once every item has finished its entrance.
    pub fn is_complete(&self, now: Duration) -> bool {
        if self.reduced_motion || self.kind.loops() || self.kind == AnimationKind::None {
            return true;
        }
        (0..self.item_count).all(|i| self.item_progress(i, now) >= 1.0)
    }
}

/// Smooth deceleration, `t` in `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn default_hooks_follow_deck_order() {
        assert_eq!(AnimationKind::default_for(0), AnimationKind::Float);
        assert_eq!(AnimationKind::default_for(4), AnimationKind::ScaleIn);
        assert_eq!(AnimationKind::default_for(5), AnimationKind::None);
    }

    #[test]
    fn stream_items_stagger() {
        let anim = SlideAnimation::start(AnimationKind::Stream, 3, 3, ms(1000), false);
        // Item 0 starts immediately, item 2 after 400ms.
        assert!(anim.item_progress(0, ms(1100)) > 0.0);
        assert_eq!(anim.item_progress(2, ms(1300)), 0.0);
        assert_eq!(anim.item_progress(2, ms(2000)), 1.0);
        assert!(!anim.is_complete(ms(1500)));
        assert!(anim.is_complete(ms(2000)));
    }

    #[test]
    fn grow_waits_for_delay() {
        let anim = SlideAnimation::start(AnimationKind::Grow, 2, 4, Duration::ZERO, false);
        assert_eq!(anim.item_progress(0, ms(199)), 0.0);
        assert!(anim.item_progress(0, ms(700)) > 0.5);
        assert_eq!(anim.item_progress(3, ms(1800)), 1.0);
    }

    #[test]
    fn before_start_is_zero() {
        let anim = SlideAnimation::start(AnimationKind::ScaleIn, 4, 2, ms(500), false);
        assert_eq!(anim.item_progress(0, ms(100)), 0.0);
    }

    #[test]
    fn reduced_motion_completes_immediately() {
        let anim = SlideAnimation::start(AnimationKind::Grow, 2, 4, ms(0), true);
        assert_eq!(anim.item_progress(3, ms(0)), 1.0);
        assert_eq!(anim.loop_phase(0, ms(5000)), 0.0);
        assert!(anim.is_complete(ms(0)));
    }

    #[test]
    fn spin_phase_loops() {
        let anim = SlideAnimation::start(AnimationKind::Spin, 1, 6, Duration::ZERO, false);
        assert_eq!(anim.loop_phase(0, ms(200)), 0.0);
        let a = anim.loop_phase(0, ms(1300));
        let b = anim.loop_phase(0, ms(5300));
        assert!((a - 0.25).abs() < 1e-9);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn bubbles_appear_before_they_bob() {
        let anim = SlideAnimation::start(AnimationKind::Float, 0, 3, Duration::ZERO, false);
        // Bubble 2 appears at 500ms and starts bobbing at 1500ms.
        assert_eq!(anim.item_progress(2, ms(499)), 0.0);
        assert_eq!(anim.item_progress(2, ms(500)), 1.0);
        assert_eq!(anim.loop_phase(2, ms(1400)), 0.0);
        assert!((anim.loop_phase(2, ms(2250)) - 0.25).abs() < 1e-9);
        // Bubble 0 has no extra wait.
        assert!((anim.loop_phase(0, ms(850)) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn float_offset_bounded() {
        let anim = SlideAnimation::start(AnimationKind::Float, 0, 3, Duration::ZERO, false);
        for t in (0..6000).step_by(137) {
            let off = anim.float_offset(1, ms(t));
            assert!((-1.0..=1.0).contains(&off));
        }
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
