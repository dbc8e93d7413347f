//! Shared test surface: remembers the latest mark per slide and indicator.

use deckview_core::{SlideMark, Surface};

#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub slides: Vec<SlideMark>,
    pub indicators: Vec<bool>,
    pub progress: f64,
    pub animations: Vec<usize>,
}

#[allow(dead_code)]
impl FakeSurface {
    pub fn new(n: usize) -> Self {
        Self {
            slides: vec![SlideMark::Inactive; n],
            indicators: vec![false; n],
            progress: 0.0,
            animations: Vec::new(),
        }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == SlideMark::Active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Surface for FakeSurface {
    fn mark_slide(&mut self, index: usize, mark: SlideMark) {
        self.slides[index] = mark;
    }

    fn mark_indicator(&mut self, index: usize, active: bool) {
        self.indicators[index] = active;
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction;
    }

    fn play_animation(&mut self, index: usize) {
        self.animations.push(index);
    }
}
