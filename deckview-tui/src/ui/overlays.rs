//! Overlay widgets — key bindings help and call-to-action alert.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::keymap::help_entries;
use crate::theme;
use crate::ui::centered_rect;

/// Key bindings overlay.
pub fn render_help(f: &mut Frame, area: Rect, slide_count: usize) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Navigation");
    for (keys, desc) in help_entries(slide_count) {
        key(&mut lines, &keys, desc);
    }
    lines.push(Line::from(""));
    section(&mut lines, "Mouse");
    key(&mut lines, "click ◀ / ▶", "Previous / next slide");
    key(&mut lines, "click dot", "Jump to that slide");
    key(&mut lines, "drag left/right", "Swipe to next / previous");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Placeholder text from a call-to-action button.
pub fn render_alert(f: &mut Frame, area: Rect, text: &str) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(" Notice ")
        .title_style(theme::warning());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, theme::text())),
        Line::from(""),
        Line::from(Span::styled("Press Esc or Enter to close", theme::muted())),
    ];
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
