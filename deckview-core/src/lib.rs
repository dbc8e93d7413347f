//! deckview core — the presentation engine behind the terminal presenter.
//!
//! - Slide navigator: guarded, wrap-around transition state machine
//! - Timer queue: virtual-clock scheduling of staged visual updates
//! - Deck model loaded from TOML
//! - Per-slide animation timelines and the roulette wheel
//! - Input commands and swipe detection
//! - Session analytics reported through `tracing`
//! - Viewer configuration

pub mod analytics;
pub mod animation;
pub mod config;
pub mod cta;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigator;
pub mod timer;
pub mod wheel;

pub use analytics::{Analytics, InteractionKind, SessionSummary};
pub use animation::{AnimationKind, SlideAnimation};
pub use config::{LoggingConfig, ViewerConfig};
pub use cta::{CallToAction, CtaAction};
pub use deck::{Deck, Slide};
pub use error::{ConfigError, DeckError};
pub use input::{Command, NavAction, Point, SwipeTracker};
pub use navigator::{
    DropReason, NavOutcome, NavigatorState, Phase, SlideMark, SlideNavigator, Surface,
    TransitionTiming,
};
pub use timer::TimerQueue;
pub use wheel::RouletteWheel;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: engine types stay Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Deck>();
        require_sync::<Deck>();
        require_send::<SlideNavigator>();
        require_sync::<SlideNavigator>();
        require_send::<Analytics>();
        require_sync::<Analytics>();
        require_send::<ViewerConfig>();
        require_sync::<ViewerConfig>();
    }
}
