//! Navigation bar — prev button, indicator dots, slide counter, next button.
//!
//! Rendering and mouse hit testing share [`nav_targets`] so a click lands on
//! exactly what was drawn.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use deckview_core::NavAction;

use crate::app::AppState;
use crate::theme;

const BUTTON_WIDTH: u16 = 8;
const DOT_WIDTH: u16 = 2;
const COUNTER_WIDTH: u16 = 9;

/// Clickable element of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Prev,
    Next,
    Indicator(usize),
}

impl NavTarget {
    pub fn action(self) -> NavAction {
        match self {
            NavTarget::Prev => NavAction::Previous,
            NavTarget::Next => NavAction::Next,
            NavTarget::Indicator(i) => NavAction::JumpTo(i),
        }
    }

    /// Name used in interaction logs.
    pub fn label(self) -> String {
        match self {
            NavTarget::Prev => "prev-button".into(),
            NavTarget::Next => "next-button".into(),
            NavTarget::Indicator(i) => format!("indicator-{}", i + 1),
        }
    }
}

/// Hit rectangles for every clickable element in `area`.
///
/// Dots that do not fit between the buttons are left out.
pub fn nav_targets(area: Rect, slide_count: usize) -> Vec<(NavTarget, Rect)> {
    if area.height == 0 || area.width < BUTTON_WIDTH * 2 {
        return Vec::new();
    }
    let row = Rect::new(area.x, area.y, 0, 1);
    let mut targets = vec![
        (NavTarget::Prev, Rect { width: BUTTON_WIDTH, ..row }),
        (
            NavTarget::Next,
            Rect {
                x: area.right() - BUTTON_WIDTH,
                width: BUTTON_WIDTH,
                ..row
            },
        ),
    ];

    let inner_left = area.x + BUTTON_WIDTH;
    let inner_right = area.right() - BUTTON_WIDTH - COUNTER_WIDTH.min(area.width - BUTTON_WIDTH * 2);
    let dots_width = (slide_count as u16).saturating_mul(DOT_WIDTH);
    let start = (area.x + area.width.saturating_sub(dots_width) / 2).max(inner_left);
    for i in 0..slide_count {
        let x = start + i as u16 * DOT_WIDTH;
        if x + DOT_WIDTH > inner_right {
            break;
        }
        targets.push((
            NavTarget::Indicator(i),
            Rect {
                x,
                width: DOT_WIDTH,
                ..row
            },
        ));
    }
    targets
}

/// Target under a cell, if any.
pub fn target_at(area: Rect, slide_count: usize, column: u16, row: u16) -> Option<NavTarget> {
    nav_targets(area, slide_count)
        .into_iter()
        .find(|(_, r)| {
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
        .map(|(t, _)| t)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let count = app.deck.len();
    for (target, rect) in nav_targets(area, count) {
        let span = match target {
            NavTarget::Prev => Span::styled(" ◀ Prev ", theme::accent()),
            NavTarget::Next => Span::styled(" Next ▶ ", theme::accent()),
            NavTarget::Indicator(i) => {
                if app.view.indicators.get(i).copied().unwrap_or(false) {
                    Span::styled("● ", theme::accent_bold())
                } else {
                    Span::styled("○ ", theme::muted())
                }
            }
        };
        f.render_widget(Paragraph::new(Line::from(span)), rect);
    }

    if area.width >= BUTTON_WIDTH * 2 + COUNTER_WIDTH {
        let counter = Rect::new(
            area.right() - BUTTON_WIDTH - COUNTER_WIDTH,
            area.y,
            COUNTER_WIDTH,
            1,
        );
        let text = format!(
            "{:>3} / {:<3}",
            app.navigator.current_index() + 1,
            app.navigator.total_slides()
        );
        f.render_widget(Paragraph::new(Span::styled(text, theme::secondary())), counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn buttons_sit_at_both_ends() {
        let area = Rect::new(0, 10, 80, 1);
        let targets = nav_targets(area, 5);
        assert_eq!(targets[0], (NavTarget::Prev, Rect::new(0, 10, 8, 1)));
        assert_eq!(targets[1], (NavTarget::Next, Rect::new(72, 10, 8, 1)));
    }

    #[test]
    fn dots_are_centered() {
        let area = Rect::new(0, 0, 80, 1);
        let dots: Vec<Rect> = nav_targets(area, 5)
            .into_iter()
            .filter_map(|(t, r)| matches!(t, NavTarget::Indicator(_)).then_some(r))
            .collect();
        assert_eq!(dots.len(), 5);
        assert_eq!(dots[0].x, 35);
        assert_eq!(dots[4].x, 43);
    }

    #[test]
    fn hit_test_maps_cells_to_targets() {
        let area = Rect::new(0, 20, 80, 1);
        assert_eq!(target_at(area, 5, 3, 20), Some(NavTarget::Prev));
        assert_eq!(target_at(area, 5, 79, 20), Some(NavTarget::Next));
        assert_eq!(target_at(area, 5, 38, 20), Some(NavTarget::Indicator(1)));
        assert_eq!(target_at(area, 5, 20, 20), None);
        assert_eq!(target_at(area, 5, 3, 19), None);
    }

    #[test]
    fn overflowing_dots_are_dropped() {
        let area = Rect::new(0, 0, 40, 1);
        let dots = nav_targets(area, 30)
            .into_iter()
            .filter(|(t, _)| matches!(t, NavTarget::Indicator(_)))
            .count();
        assert!(dots < 30);
        assert!(dots > 0);
    }

    #[test]
    fn too_narrow_bar_has_no_targets() {
        assert!(nav_targets(Rect::new(0, 0, 10, 1), 3).is_empty());
    }

    #[test]
    fn target_actions() {
        assert_eq!(NavTarget::Indicator(2).action(), NavAction::JumpTo(2));
        assert_eq!(NavTarget::Prev.action(), NavAction::Previous);
        assert_eq!(NavTarget::Indicator(2).label(), "indicator-3");
    }

    proptest! {
        #[test]
        fn every_drawn_target_hits_itself(
            width in 16u16..200,
            y in 0u16..50,
            count in 1usize..40,
        ) {
            let area = Rect::new(0, y, width, 1);
            let targets = nav_targets(area, count);
            prop_assert!(targets.len() >= 2);
            for (target, rect) in targets {
                for x in rect.x..rect.right() {
                    prop_assert_eq!(target_at(area, count, x, y), Some(target));
                }
            }
        }
    }
}
