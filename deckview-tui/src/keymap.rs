//! Key dispatch table — one lookup from key binding to logical command.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use deckview_core::{Command, NavAction};

/// A key plus the modifiers that matter for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Normalize an incoming event. Shift is dropped for characters since the
    /// character itself already reflects it ('?' arrives as Shift+'?').
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
        if matches!(key.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self {
            code: key.code,
            modifiers,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Command>,
}

impl Keymap {
    /// Default bindings for a deck of `slide_count` slides.
    ///
    /// Digit keys are bound only for slides that exist, so a jump request
    /// never leaves the deck.
    pub fn for_deck(slide_count: usize) -> Self {
        use Command::*;
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, cmd: Command| {
            bindings.insert(KeyBinding::plain(code), cmd);
        };

        bind(KeyCode::Right, Nav(NavAction::Next));
        bind(KeyCode::Char(' '), Nav(NavAction::Next));
        bind(KeyCode::Char('l'), Nav(NavAction::Next));
        bind(KeyCode::PageDown, Nav(NavAction::Next));
        bind(KeyCode::Left, Nav(NavAction::Previous));
        bind(KeyCode::Char('h'), Nav(NavAction::Previous));
        bind(KeyCode::PageUp, Nav(NavAction::Previous));
        bind(KeyCode::Home, Nav(NavAction::JumpTo(0)));
        bind(KeyCode::End, Nav(NavAction::JumpTo(slide_count.saturating_sub(1))));

        for n in 1..=slide_count.min(9) {
            let digit = char::from_digit(n as u32, 10).unwrap_or('0');
            bind(KeyCode::Char(digit), Nav(NavAction::JumpTo(n - 1)));
        }

        bind(KeyCode::Char('f'), ToggleFullscreen);
        bind(KeyCode::Char('F'), ToggleFullscreen);
        bind(KeyCode::Char('?'), ToggleHelp);
        bind(KeyCode::Char('s'), SpinWheel);
        bind(KeyCode::Tab, FocusNextCta);
        bind(KeyCode::Enter, ActivateCta);
        bind(KeyCode::Esc, Dismiss);
        bind(KeyCode::Char('q'), Quit);

        bindings.insert(KeyBinding::ctrl('c'), Quit);

        Self { bindings }
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Key bindings help text.
pub fn help_entries(slide_count: usize) -> Vec<(String, &'static str)> {
    let last = slide_count.min(9);
    vec![
        ("→ / Space / l".into(), "Next slide"),
        ("← / h".into(), "Previous slide"),
        (format!("1-{last}"), "Jump to slide"),
        ("Home / End".into(), "First / last slide"),
        ("click ● / drag".into(), "Jump / swipe"),
        ("f".into(), "Toggle fullscreen"),
        ("s".into(), "Spin the wheel"),
        ("Tab / Enter".into(), "Focus / press button"),
        ("?".into(), "Toggle help"),
        ("Esc".into(), "Close overlay"),
        ("q / Ctrl+C".into(), "Quit"),
    ]
}

/// Short, stable name for a key, used in interaction logs.
pub fn key_name(key: &KeyEvent) -> String {
    match key.code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => format!("Ctrl+{c}"),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}
