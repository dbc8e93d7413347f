//! Application state — single-owner, main-thread only.
//!
//! Everything the presenter needs is constructed once in `main` and owned
//! here. Methods take the current session time so the event loop, not the
//! state, owns the clock.

use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

use deckview_core::{
    Analytics, AnimationKind, Command, Deck, NavAction, NavOutcome, RouletteWheel, Slide,
    SlideNavigator, SwipeTracker, ViewerConfig,
};

use crate::keymap::Keymap;
use crate::surface::DeckView;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// Placeholder text from a call-to-action button.
    Alert(String),
}

/// Top-level application state.
pub struct AppState {
    pub deck: Deck,
    pub navigator: SlideNavigator,
    pub view: DeckView,
    pub analytics: Analytics,
    pub keymap: Keymap,
    pub swipe: SwipeTracker,
    pub wheel: RouletteWheel,
    rng: StdRng,

    pub running: bool,
    pub fullscreen: bool,
    pub overlay: Overlay,
    /// Focused call-to-action button on the current slide.
    pub cta_focus: Option<usize>,
    pub status_message: Option<(String, StatusLevel)>,
    /// Last known terminal area, for mouse hit testing.
    pub viewport: Rect,

    auto_advance: Option<Duration>,
    last_interaction: Duration,
}

impl AppState {
    pub fn new(deck: Deck, config: &ViewerConfig, now: Duration) -> Self {
        let mut navigator = SlideNavigator::new(deck.slide_count(), config.timing());
        let mut view = DeckView::new(&deck, config.reduced_motion);
        view.set_clock(now);
        navigator.initialize(&mut view);

        let mut analytics = Analytics::new(Local::now());
        analytics.track_slide_view(0, now);

        let keymap = Keymap::for_deck(deck.len());
        let mut app = Self {
            navigator,
            view,
            analytics,
            keymap,
            swipe: SwipeTracker::new(config.swipe_threshold),
            wheel: RouletteWheel::new(1).frozen(config.reduced_motion),
            rng: StdRng::from_entropy(),
            running: true,
            fullscreen: false,
            overlay: Overlay::None,
            cta_focus: None,
            status_message: None,
            viewport: Rect::default(),
            auto_advance: config.auto_advance(),
            last_interaction: now,
            deck,
        };
        app.after_navigation(now);
        app
    }

    /// Slide the navigator currently points at.
    pub fn current_slide(&self) -> &Slide {
        let index = self.navigator.current_index();
        &self.deck.slides()[index]
    }

    pub fn current_animation_kind(&self) -> AnimationKind {
        self.deck.animation_for(self.navigator.current_index())
    }

    /// Run due transition stages and auto-advance.
    pub fn tick(&mut self, now: Duration) {
        self.view.set_clock(now);
        self.navigator.tick(now, &mut self.view);
        self.after_navigation(now);

        if let Some(idle) = self.auto_advance {
            let quiet = now.saturating_sub(self.last_interaction) >= idle;
            if quiet && !self.navigator.is_transitioning() && self.overlay == Overlay::None {
                self.last_interaction = now;
                self.navigate(NavAction::Next, now);
            }
        }
    }

    /// Any user input resets the auto-advance countdown.
    pub fn note_interaction(&mut self, now: Duration) {
        self.last_interaction = now;
    }

    pub fn navigate(&mut self, action: NavAction, now: Duration) -> NavOutcome {
        self.view.set_clock(now);
        // Stages already due run before the request is judged.
        self.navigator.tick(now, &mut self.view);
        let outcome = match action {
            NavAction::Next => self.navigator.advance(&mut self.view),
            NavAction::Previous => self.navigator.retreat(&mut self.view),
            NavAction::JumpTo(index) => self.navigator.jump_to(index, &mut self.view),
        };
        if let NavOutcome::Started { to, .. } = outcome {
            self.analytics.track_slide_view(to, now);
            self.cta_focus = None;
        }
        self.after_navigation(now);
        outcome
    }

    /// Execute a logical command.
    pub fn dispatch(&mut self, command: Command, now: Duration) {
        match command {
            Command::Nav(action) => {
                self.navigate(action, now);
            }
            Command::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                let label = if self.fullscreen { "on" } else { "off" };
                self.set_status(format!("Fullscreen {label}"));
            }
            Command::ToggleHelp => {
                self.overlay = match self.overlay {
                    Overlay::Help => Overlay::None,
                    _ => Overlay::Help,
                };
            }
            Command::SpinWheel => self.spin_wheel(now),
            Command::FocusNextCta => {
                let count = self.current_slide().calls_to_action.len();
                self.cta_focus = match (count, self.cta_focus) {
                    (0, _) => None,
                    (n, Some(i)) => Some((i + 1) % n),
                    (_, None) => Some(0),
                };
            }
            Command::ActivateCta => {
                let text = self
                    .cta_focus
                    .and_then(|i| self.current_slide().calls_to_action.get(i))
                    .map(|cta| cta.activate());
                if let Some(text) = text {
                    self.overlay = Overlay::Alert(text);
                }
            }
            Command::Dismiss => {
                if self.overlay != Overlay::None {
                    self.overlay = Overlay::None;
                } else {
                    self.cta_focus = None;
                }
            }
            Command::Quit => self.running = false,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Log the session summary at exit.
    pub fn finish(&self, now: Duration) {
        self.analytics.report_session(now);
    }

    fn spin_wheel(&mut self, now: Duration) {
        if self.current_animation_kind() != AnimationKind::Spin
            || self.view.active_slide().is_none()
        {
            self.set_warning("Nothing to spin on this slide");
            return;
        }
        if self.view.reduced_motion() {
            self.set_warning("Wheel spin disabled (reduced motion)");
            return;
        }
        if !self.wheel.spin(&mut self.rng, now) {
            self.set_warning("Wheel is already spinning");
        }
    }

    /// React to animation hooks that ran during the last navigator call.
    fn after_navigation(&mut self, now: Duration) {
        if let Some(index) = self.view.take_entered() {
            if self.deck.animation_for(index) == AnimationKind::Spin {
                let segments = self.deck.slides()[index].items.len();
                self.wheel = RouletteWheel::new(segments).frozen(self.view.reduced_motion());
                self.wheel.reset(now);
            }
        }
    }
}
