//! Rendering surface — what the navigator writes and the renderer reads.

use std::time::Duration;

use deckview_core::{AnimationKind, Deck, SlideAnimation, SlideMark, Surface};

/// Per-slide marks, indicator states, progress and the running animation.
#[derive(Debug, Clone)]
pub struct DeckView {
    pub marks: Vec<SlideMark>,
    pub indicators: Vec<bool>,
    pub progress: f64,
    pub animation: Option<SlideAnimation>,
    hooks: Vec<(AnimationKind, usize)>,
    reduced_motion: bool,
    now: Duration,
    entered: Option<usize>,
}

impl DeckView {
    pub fn new(deck: &Deck, reduced_motion: bool) -> Self {
        let n = deck.len();
        let hooks = deck
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| (deck.animation_for(i), s.items.len()))
            .collect();
        Self {
            marks: vec![SlideMark::Inactive; n],
            indicators: vec![false; n],
            progress: 0.0,
            animation: None,
            hooks,
            reduced_motion,
            now: Duration::ZERO,
            entered: None,
        }
    }

    /// Session time stamped on animations started by the next navigator call.
    pub fn set_clock(&mut self, now: Duration) {
        self.now = now;
    }

    /// Slide whose animation hook ran since the last call, if any.
    pub fn take_entered(&mut self) -> Option<usize> {
        self.entered.take()
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.marks.iter().position(|m| *m == SlideMark::Active)
    }

    /// Slide leaving backwards, while its exit is in progress.
    pub fn exiting_slide(&self) -> Option<usize> {
        self.marks.iter().position(|m| *m == SlideMark::Prev)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl Surface for DeckView {
    fn mark_slide(&mut self, index: usize, mark: SlideMark) {
        if let Some(slot) = self.marks.get_mut(index) {
            *slot = mark;
        }
    }

    fn mark_indicator(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = active;
        }
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    fn play_animation(&mut self, index: usize) {
        let (kind, items) = self
            .hooks
            .get(index)
            .copied()
            .unwrap_or((AnimationKind::None, 0));
        self.animation = Some(SlideAnimation::start(
            kind,
            index,
            items,
            self.now,
            self.reduced_motion,
        ));
        self.entered = Some(index);
        tracing::debug!(slide = index, kind = kind.label(), "animation hook");
    }
}
