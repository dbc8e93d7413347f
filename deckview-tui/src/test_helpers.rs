//! Shared fixtures for unit tests.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, KeyModifiers};
use deckview_core::{Deck, ViewerConfig};

use crate::app::AppState;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Demo deck with default settings, started at time zero.
pub fn demo_app() -> AppState {
    AppState::new(Deck::demo(), &ViewerConfig::default(), Duration::ZERO)
}

/// Demo app moved to `index` and fully settled, at `ms(1000)`.
pub fn demo_app_at(index: usize) -> AppState {
    let mut app = demo_app();
    app.navigate(deckview_core::NavAction::JumpTo(index), ms(0));
    app.tick(ms(1000));
    app
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
