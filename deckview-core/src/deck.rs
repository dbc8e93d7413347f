//! Deck model — slides loaded from a TOML file.
//!
//! ```toml
//! title = "Pitch"
//!
//! [[slides]]
//! title = "The Problem"
//! body = ["Choosing is exhausting."]
//! items = ["What to eat?", "Where to go?"]
//! animation = "float"
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationKind;
use crate::cta::{CallToAction, CtaAction};
use crate::error::DeckError;

/// One visual panel of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
    /// Animated elements: bubbles, wheel segments, bars, streams or cards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Bar heights for `grow` slides, parallel to `items`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,
    /// Animation hook; defaults from the slide position when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationKind>,
    #[serde(default, rename = "cta", skip_serializing_if = "Vec::is_empty")]
    pub calls_to_action: Vec<CallToAction>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body: Vec::new(),
            items: Vec::new(),
            values: Vec::new(),
            animation: None,
            calls_to_action: Vec::new(),
        }
    }
}

/// A validated, non-empty deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck, rejecting empty or malformed slide lists.
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Result<Self, DeckError> {
        let deck = Self {
            title: title.into(),
            slides,
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Load a deck from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a deck from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Serialize the deck to TOML.
    pub fn to_toml(&self) -> Result<String, DeckError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a validated deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Animation hook for the slide at `index`.
    pub fn animation_for(&self, index: usize) -> AnimationKind {
        self.slides
            .get(index)
            .and_then(|s| s.animation)
            .unwrap_or_else(|| AnimationKind::default_for(index))
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (index, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(DeckError::InvalidSlide {
                    index,
                    reason: "title is empty".into(),
                });
            }
            if !slide.values.is_empty() && slide.values.len() != slide.items.len() {
                return Err(DeckError::InvalidSlide {
                    index,
                    reason: format!(
                        "{} values for {} items",
                        slide.values.len(),
                        slide.items.len()
                    ),
                });
            }
            if slide.values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(DeckError::InvalidSlide {
                    index,
                    reason: "values must be finite and non-negative".into(),
                });
            }
        }
        Ok(())
    }

    /// Built-in five-slide pitch deck.
    pub fn demo() -> Self {
        let mut problem = Slide::new("The Problem");
        problem.subtitle = Some("Decision fatigue is real".into());
        problem.body = vec![
            "People make thousands of small choices every day.".into(),
            "Most of them do not matter, yet all of them cost energy.".into(),
        ];
        problem.items = vec![
            "Where should we eat?".into(),
            "Which movie tonight?".into(),
            "Who picks the playlist?".into(),
        ];
        problem.animation = Some(AnimationKind::Float);

        let mut solution = Slide::new("The Solution");
        solution.subtitle = Some("Let the wheel decide".into());
        solution.body = vec![
            "A shared roulette wheel for everyday group decisions.".into(),
            "Press s to spin it.".into(),
        ];
        solution.items = vec![
            "Pizza".into(),
            "Sushi".into(),
            "Tacos".into(),
            "Curry".into(),
            "Burgers".into(),
            "Salad".into(),
        ];
        solution.animation = Some(AnimationKind::Spin);

        let mut market = Slide::new("Market Opportunity");
        market.subtitle = Some("Casual apps keep growing".into());
        market.items = vec!["2022".into(), "2023".into(), "2024".into(), "2025".into()];
        market.values = vec![2.1, 3.4, 5.0, 7.8];
        market.animation = Some(AnimationKind::Grow);

        let mut business = Slide::new("Business Model");
        business.subtitle = Some("Three revenue streams".into());
        business.items = vec![
            "Premium wheels and themes".into(),
            "Venue partnerships".into(),
            "Team subscriptions".into(),
        ];
        business.animation = Some(AnimationKind::Stream);

        let mut ask = Slide::new("The Ask");
        ask.subtitle = Some("Seed round".into());
        ask.items = vec![
            "Year 1: 50k users".into(),
            "Year 2: 400k users".into(),
            "Year 3: 2M users".into(),
        ];
        ask.animation = Some(AnimationKind::ScaleIn);
        ask.calls_to_action = vec![
            CallToAction::new("Schedule Demo", CtaAction::ScheduleDemo),
            CallToAction::new("View Pitch Deck", CtaAction::ViewDeck),
        ];

        Self {
            title: "Spin Decide".into(),
            slides: vec![problem, solution, market, business, ask],
        }
    }
}
