//! Drive the presenter the way a user would: keys and clicks over time,
//! rendered into an in-memory terminal.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use deckview_core::{Deck, ViewerConfig};
use deckview_tui::{input, ui, AppState};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen(app: &mut AppState, now: Duration) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app, now);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn walk_through_demo_deck() {
    let mut app = AppState::new(Deck::demo(), &ViewerConfig::default(), Duration::ZERO);
    let mut now = ms(0);

    for expected in ["The Solution", "Market Opportunity", "Business Model", "The Ask"] {
        input::handle_key(&mut app, key(KeyCode::Right), now);
        now += ms(700);
        app.tick(now);
        assert!(screen(&mut app, now).contains(expected));
    }
    assert!(screen(&mut app, now).contains("100%"));

    // Wraps back to the start.
    input::handle_key(&mut app, key(KeyCode::Char(' ')), now);
    now += ms(700);
    app.tick(now);
    assert!(screen(&mut app, now).contains("The Problem"));
    assert_eq!(app.analytics.interaction_count(), 5);
}

#[test]
fn mashing_keys_moves_one_slide() {
    let mut app = AppState::new(Deck::demo(), &ViewerConfig::default(), Duration::ZERO);
    for i in 0..10 {
        input::handle_key(&mut app, key(KeyCode::Right), ms(i * 20));
        app.tick(ms(i * 20));
    }
    app.tick(ms(1000));
    assert_eq!(app.navigator.current_index(), 1);
    assert!(!app.navigator.is_transitioning());
}

#[test]
fn click_next_button_after_render() {
    let mut app = AppState::new(Deck::demo(), &ViewerConfig::default(), Duration::ZERO);
    screen(&mut app, ms(0));
    assert_eq!(app.viewport, Rect::new(0, 0, 80, 24));

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 76,
        row: 22,
        modifiers: KeyModifiers::NONE,
    };
    input::handle_mouse(&mut app, click, ms(10));
    app.tick(ms(800));
    assert!(screen(&mut app, ms(800)).contains("The Solution"));
}

#[test]
fn reduced_motion_shows_items_immediately() {
    let config = ViewerConfig {
        reduced_motion: true,
        ..ViewerConfig::default()
    };
    let mut app = AppState::new(Deck::demo(), &config, Duration::ZERO);
    input::handle_key(&mut app, key(KeyCode::Char('4')), ms(0));
    app.tick(ms(50));
    let text = screen(&mut app, ms(50));
    assert!(text.contains("Premium wheels and themes"));
    assert!(text.contains("Team subscriptions"));
}
