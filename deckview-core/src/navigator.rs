//! Slide navigator — the guarded transition state machine.
//!
//! Two states: `Idle` and `Transitioning`. A transition deactivates the
//! outgoing slide immediately, then activates the target after
//! `activate_delay`, then releases the guard after a further `settle_delay`.
//! Requests arriving while a transition is in flight are dropped, not queued.
//! Navigation past either end wraps around.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::timer::TimerQueue;

/// Visual marker a slide carries on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideMark {
    #[default]
    Inactive,
    Active,
    /// Outgoing slide on a backwards transition (exit animation runs the other way).
    Prev,
}

/// Output side of the navigator: slides, indicators and progress by index.
pub trait Surface {
    fn mark_slide(&mut self, index: usize, mark: SlideMark);
    fn mark_indicator(&mut self, index: usize, active: bool);
    /// Fraction in `(0, 1]`.
    fn set_progress(&mut self, fraction: f64);
    /// Start the decorative animation hook for the slide at `index`.
    fn play_animation(&mut self, index: usize);
}

/// Observable navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub current_index: usize,
    pub total_slides: usize,
    pub is_transitioning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Delays between transition stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Outgoing slide removed → target slide activated.
    pub activate_delay: Duration,
    /// Target activated → guard released.
    pub settle_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            activate_delay: Duration::from_millis(50),
            settle_delay: Duration::from_millis(600),
        }
    }
}

impl TransitionTiming {
    /// Total time a transition holds the guard.
    pub fn total(&self) -> Duration {
        self.activate_delay + self.settle_delay
    }
}

/// Why a navigation request did not start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// A transition is already in flight.
    Busy,
    /// Target is the current slide.
    SameSlide,
    /// Target index is past the end of the deck.
    OutOfRange,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Started { from: usize, to: usize },
    Dropped(DropReason),
}

impl NavOutcome {
    pub fn started(self) -> bool {
        matches!(self, NavOutcome::Started { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Activate,
    Release,
}

/// Owns the navigator state and serializes transitions.
#[derive(Debug)]
pub struct SlideNavigator {
    state: NavigatorState,
    timing: TransitionTiming,
    timers: TimerQueue<Stage>,
}

impl SlideNavigator {
    pub fn new(total_slides: NonZeroUsize, timing: TransitionTiming) -> Self {
        Self {
            state: NavigatorState {
                current_index: 0,
                total_slides: total_slides.get(),
                is_transitioning: false,
            },
            timing,
            timers: TimerQueue::new(),
        }
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.state.total_slides
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Virtual time of the navigator's timer clock.
    pub fn clock(&self) -> Duration {
        self.timers.now()
    }

    /// `(current + 1) / total`.
    pub fn progress(&self) -> f64 {
        (self.state.current_index + 1) as f64 / self.state.total_slides as f64
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress() * 100.0
    }

    /// Paint the startup state: first slide active, no transition.
    pub fn initialize(&mut self, surface: &mut dyn Surface) {
        self.activate(surface);
    }

    /// Move to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self, surface: &mut dyn Surface) -> NavOutcome {
        if self.state.is_transitioning {
            return self.dropped(DropReason::Busy, "advance");
        }
        let next = (self.state.current_index + 1) % self.state.total_slides;
        self.jump_to(next, surface)
    }

    /// Move to the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self, surface: &mut dyn Surface) -> NavOutcome {
        if self.state.is_transitioning {
            return self.dropped(DropReason::Busy, "retreat");
        }
        let total = self.state.total_slides;
        let prev = (self.state.current_index + total - 1) % total;
        self.jump_to(prev, surface)
    }

    /// Start a transition to `target`.
    pub fn jump_to(&mut self, target: usize, surface: &mut dyn Surface) -> NavOutcome {
        if self.state.is_transitioning {
            return self.dropped(DropReason::Busy, "jump");
        }
        if target >= self.state.total_slides {
            tracing::warn!(
                target,
                total = self.state.total_slides,
                "jump target outside deck"
            );
            return NavOutcome::Dropped(DropReason::OutOfRange);
        }
        let from = self.state.current_index;
        if target == from {
            return self.dropped(DropReason::SameSlide, "jump");
        }

        self.state.is_transitioning = true;

        surface.mark_slide(from, SlideMark::Inactive);
        surface.mark_indicator(from, false);
        if target < from {
            surface.mark_slide(from, SlideMark::Prev);
        }

        self.state.current_index = target;
        self.timers.schedule(self.timing.activate_delay, Stage::Activate);

        tracing::debug!(from, to = target, "transition started");
        NavOutcome::Started { from, to: target }
    }

    /// Advance the timer clock to `now` and run every stage that is due.
    pub fn tick(&mut self, now: Duration, surface: &mut dyn Surface) {
        while let Some(stage) = self.timers.pop_due(now) {
            self.run_stage(stage, surface);
        }
    }

    /// Run every pending stage, jumping the clock forward as needed.
    pub fn settle(&mut self, surface: &mut dyn Surface) {
        while let Some(stage) = self.timers.pop_next() {
            self.run_stage(stage, surface);
        }
    }

    fn run_stage(&mut self, stage: Stage, surface: &mut dyn Surface) {
        match stage {
            Stage::Activate => {
                self.activate(surface);
                self.timers.schedule(self.timing.settle_delay, Stage::Release);
            }
            Stage::Release => {
                self.state.is_transitioning = false;
                tracing::debug!(index = self.state.current_index, "transition settled");
            }
        }
    }

    fn activate(&mut self, surface: &mut dyn Surface) {
        let current = self.state.current_index;
        for index in 0..self.state.total_slides {
            surface.mark_slide(index, SlideMark::Inactive);
        }
        surface.mark_slide(current, SlideMark::Active);
        surface.mark_indicator(current, true);
        surface.set_progress(self.progress());
        surface.play_animation(current);
    }

    fn dropped(&self, reason: DropReason, op: &'static str) -> NavOutcome {
        tracing::trace!(op, ?reason, index = self.state.current_index, "navigation dropped");
        NavOutcome::Dropped(reason)
    }
}
