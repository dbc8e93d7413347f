//! Input dispatch — overlays first, then the key table; mouse clicks on the
//! navigation bar, buttons and wheel, drags as swipes.
//!
//! Every key press and every click is recorded as an interaction.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use deckview_core::{Command, InteractionKind, NavAction, Point};

use crate::app::{AppState, Overlay};
use crate::keymap::key_name;
use crate::ui::{self, ClickTarget};

/// Handle a key event at session time `now`.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Duration) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }
    app.note_interaction(now);
    app.analytics
        .track_interaction(InteractionKind::Keyboard, key_name(&key), now);

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Alert(_) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Dispatch table.
    if let Some(command) = app.keymap.resolve(&key) {
        app.dispatch(command, now);
    }
}

/// Handle a mouse event at session time `now`.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Duration) {
    let at = Point::new(i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.note_interaction(now);
            if app.overlay != Overlay::None {
                app.analytics
                    .track_interaction(InteractionKind::Click, "overlay", now);
                app.overlay = Overlay::None;
                return;
            }
            let target = ui::hit_test(app, mouse.column, mouse.row);
            let name = target.map_or_else(|| "body".to_string(), ClickTarget::label);
            app.analytics
                .track_interaction(InteractionKind::Click, name, now);
            match target {
                Some(ClickTarget::Nav(nav)) => app.dispatch(Command::Nav(nav.action()), now),
                Some(ClickTarget::Cta(i)) => {
                    app.cta_focus = Some(i);
                    app.dispatch(Command::ActivateCta, now);
                }
                Some(ClickTarget::Wheel) => app.dispatch(Command::SpinWheel, now),
                None => app.swipe.press(at),
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(action) = app.swipe.release(at) {
                app.note_interaction(now);
                let name = match action {
                    NavAction::Next => "swipe-left",
                    _ => "swipe-right",
                };
                app.analytics
                    .track_interaction(InteractionKind::Swipe, name, now);
                app.navigate(action, now);
            }
        }
        _ => {}
    }
}
