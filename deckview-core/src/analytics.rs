//! Session analytics — slide views, dwell time, interactions.
//!
//! Counters live in memory for the session only. Every event is reported as a
//! `tracing` event under the `deckview::analytics` target; nothing is sent
//! anywhere else.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

const TARGET: &str = "deckview::analytics";

/// Per-slide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideStats {
    pub views: u32,
    pub time_spent: Duration,
    pub entry_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Keyboard,
    Click,
    Swipe,
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub target: String,
    pub at_ms: u64,
    pub slide: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideSummary {
    pub index: usize,
    pub views: u32,
    pub time_spent_ms: u64,
}

/// Snapshot reported at the end of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Local>,
    pub duration_secs: f64,
    pub interactions: u64,
    pub slides: Vec<SlideSummary>,
}

#[derive(Debug)]
pub struct Analytics {
    started_at: DateTime<Local>,
    slides: BTreeMap<usize, SlideStats>,
    current: Option<usize>,
    interactions: u64,
}

impl Analytics {
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            slides: BTreeMap::new(),
            current: None,
            interactions: 0,
        }
    }

    pub fn current_slide(&self) -> Option<usize> {
        self.current
    }

    pub fn stats(&self, index: usize) -> Option<&SlideStats> {
        self.slides.get(&index)
    }

    pub fn interaction_count(&self) -> u64 {
        self.interactions
    }

    /// Record that slide `index` became the viewed slide at session time `now`.
    pub fn track_slide_view(&mut self, index: usize, now: Duration) {
        let entry = self.slides.entry(index).or_default();
        entry.views += 1;
        entry.entry_time = now;
        let views = entry.views;

        if let Some(prev) = self.current.filter(|&p| p != index) {
            if let Some(stats) = self.slides.get_mut(&prev) {
                stats.time_spent += now.saturating_sub(stats.entry_time);
            }
        }
        self.current = Some(index);

        tracing::info!(target: TARGET, slide = index, views, "slide view tracked");
    }

    /// Record a key press, click or swipe.
    pub fn track_interaction(
        &mut self,
        kind: InteractionKind,
        target: impl Into<String>,
        now: Duration,
    ) -> Interaction {
        self.interactions += 1;
        let interaction = Interaction {
            kind,
            target: target.into(),
            at_ms: now.as_millis() as u64,
            slide: self.current,
        };
        tracing::debug!(
            target: TARGET,
            kind = ?interaction.kind,
            target_name = %interaction.target,
            at_ms = interaction.at_ms,
            slide = ?interaction.slide,
            "interaction tracked"
        );
        interaction
    }

    /// Summary at session time `now`. Time on the open slide counts up to `now`.
    pub fn session_summary(&self, now: Duration) -> SessionSummary {
        let slides = self
            .slides
            .iter()
            .map(|(&index, stats)| {
                let mut spent = stats.time_spent;
                if self.current == Some(index) {
                    spent += now.saturating_sub(stats.entry_time);
                }
                SlideSummary {
                    index,
                    views: stats.views,
                    time_spent_ms: spent.as_millis() as u64,
                }
            })
            .collect();
        SessionSummary {
            started_at: self.started_at,
            duration_secs: now.as_secs_f64(),
            interactions: self.interactions,
            slides,
        }
    }

    /// Log the session summary; called once when the presenter exits.
    pub fn report_session(&self, now: Duration) -> SessionSummary {
        let summary = self.session_summary(now);
        match serde_json::to_string(&summary) {
            Ok(json) => tracing::info!(
                target: TARGET,
                duration_secs = summary.duration_secs,
                summary = %json,
                "session finished"
            ),
            Err(e) => tracing::warn!(target: TARGET, error = %e, "session summary not serializable"),
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn analytics() -> Analytics {
        Analytics::new(Local::now())
    }

    #[test]
    fn counts_views_and_dwell_time() {
        let mut a = analytics();
        a.track_slide_view(0, ms(0));
        a.track_slide_view(1, ms(4000));
        a.track_slide_view(0, ms(6000));

        let s0 = a.stats(0).unwrap();
        assert_eq!(s0.views, 2);
        assert_eq!(s0.time_spent, ms(4000));
        let s1 = a.stats(1).unwrap();
        assert_eq!(s1.views, 1);
        assert_eq!(s1.time_spent, ms(2000));
        assert_eq!(a.current_slide(), Some(0));
    }

    #[test]
    fn summary_includes_open_slide() {
        let mut a = analytics();
        a.track_slide_view(0, ms(0));
        a.track_slide_view(2, ms(1000));
        let summary = a.session_summary(ms(3500));

        assert_eq!(summary.slides.len(), 2);
        assert_eq!(summary.slides[0].time_spent_ms, 1000);
        assert_eq!(summary.slides[1].index, 2);
        assert_eq!(summary.slides[1].time_spent_ms, 2500);
        assert_eq!(summary.duration_secs, 3.5);
    }

    #[test]
    fn interactions_carry_current_slide() {
        let mut a = analytics();
        let before = a.track_interaction(InteractionKind::Keyboard, "Right", ms(10));
        assert_eq!(before.slide, None);

        a.track_slide_view(3, ms(20));
        let click = a.track_interaction(InteractionKind::Click, "indicator 2", ms(30));
        assert_eq!(click.slide, Some(3));
        assert_eq!(click.at_ms, 30);
        assert_eq!(a.interaction_count(), 2);
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut a = analytics();
        a.track_slide_view(0, ms(0));
        let json = serde_json::to_value(a.report_session(ms(100))).unwrap();
        assert_eq!(json["slides"][0]["views"], 1);
    }
}
