//! Top-level UI layout — progress gauge, slide body, navigation bar, status bar.

pub mod nav_bar;
pub mod overlays;
pub mod slide_view;
pub mod status_bar;

use std::time::Duration;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme::{self, Theme};

pub use nav_bar::NavTarget;

/// Screen regions. In fullscreen everything but the body is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub progress: Rect,
    pub body: Rect,
    pub nav: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, fullscreen: bool) -> ScreenLayout {
    if fullscreen {
        return ScreenLayout {
            progress: Rect::default(),
            body: area,
            nav: Rect::default(),
            status: Rect::default(),
        };
    }
    let [progress, body, nav, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenLayout {
        progress,
        body,
        nav,
        status,
    }
}

/// Draw the entire UI at session time `now`.
pub fn draw(f: &mut Frame, app: &AppState, now: Duration) {
    let layout = screen_layout(f.area(), app.fullscreen);

    slide_view::render(f, layout.body, app, now);

    if !app.fullscreen {
        draw_progress(f, layout.progress, app);
        nav_bar::render(f, layout.nav, app);
        status_bar::render(f, layout.status, app);
    }

    match &app.overlay {
        Overlay::Help => overlays::render_help(f, layout.body, app.deck.len()),
        Overlay::Alert(text) => overlays::render_alert(f, layout.body, text),
        Overlay::None => {}
    }
}

fn draw_progress(f: &mut Frame, area: Rect, app: &AppState) {
    let fraction = app.view.progress;
    let label = format!(
        "Slide {} / {}  {:.0}%",
        app.navigator.current_index() + 1,
        app.navigator.total_slides(),
        fraction * 100.0
    );
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(Theme::default().progress_color(fraction))
                .bg(theme::BACKGROUND),
        )
        .ratio(fraction)
        .use_unicode(true)
        .label(Span::styled(label, theme::text()));
    f.render_widget(gauge, area);
}

/// Anything on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Nav(NavTarget),
    /// Call-to-action button by position on the slide.
    Cta(usize),
    Wheel,
}

impl ClickTarget {
    /// Name used in interaction logs.
    pub fn label(self) -> String {
        match self {
            ClickTarget::Nav(target) => target.label(),
            ClickTarget::Cta(i) => format!("cta-{}", i + 1),
            ClickTarget::Wheel => "wheel".into(),
        }
    }
}

/// Target under a mouse position, using the last drawn viewport.
pub fn hit_test(app: &AppState, column: u16, row: u16) -> Option<ClickTarget> {
    let layout = screen_layout(app.viewport, app.fullscreen);
    if let Some(target) = nav_bar::target_at(layout.nav, app.deck.len(), column, row) {
        return Some(ClickTarget::Nav(target));
    }
    slide_view::targets(app, layout.body)
        .into_iter()
        .find(|(_, r)| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
        .map(|(target, _)| target)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
