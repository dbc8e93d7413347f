//! Call-to-action buttons.
//!
//! Activation only produces placeholder alert text; there is no booking or
//! download integration behind these.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaAction {
    ScheduleDemo,
    ViewDeck,
    /// Show a custom alert text.
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub action: CtaAction,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, action: CtaAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Alert text shown when the button is activated.
    pub fn activate(&self) -> String {
        tracing::info!(label = %self.label, action = ?self.action, "call to action");
        match &self.action {
            CtaAction::ScheduleDemo => {
                "Demo scheduling would be integrated here (e.g. a calendar booking widget).".into()
            }
            CtaAction::ViewDeck => "Pitch deck download/viewer would be integrated here.".into(),
            CtaAction::Message(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_actions_have_placeholder_text() {
        let demo = CallToAction::new("Schedule Demo", CtaAction::ScheduleDemo);
        assert!(demo.activate().contains("scheduling"));
        let deck = CallToAction::new("View Pitch Deck", CtaAction::ViewDeck);
        assert!(deck.activate().contains("Pitch deck"));
    }

    #[test]
    fn custom_message_passes_through() {
        let cta = CallToAction::new("Hi", CtaAction::Message("hello".into()));
        assert_eq!(cta.activate(), "hello");
    }
}
