//! Slide body — header, per-kind animated content and call-to-action row.

use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use deckview_core::{AnimationKind, RouletteWheel, Slide, SlideAnimation};

use crate::app::AppState;
use crate::theme::{self, Theme};
use crate::ui::ClickTarget;

const WHEEL_WINDOW: isize = 2;
const CTA_GAP: u16 = 3;

/// Areas inside the slide frame.
struct Regions {
    header: Rect,
    content: Rect,
    ctas: Rect,
}

fn regions(area: Rect, slide: &Slide) -> Regions {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let header_height = 2 + u16::from(slide.subtitle.is_some()) + slide.body.len() as u16;
    let cta_height = if slide.calls_to_action.is_empty() { 0 } else { 3 };
    let [header, content, ctas] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(cta_height),
    ])
    .areas(inner);
    Regions {
        header,
        content,
        ctas,
    }
}

fn cta_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// One rect per button, centered on the first row of `area`.
fn cta_buttons(area: Rect, slide: &Slide) -> Vec<Rect> {
    if area.height == 0 {
        return Vec::new();
    }
    let widths: Vec<u16> = slide
        .calls_to_action
        .iter()
        .map(|cta| Span::raw(cta_text(&cta.label)).width() as u16)
        .collect();
    let gaps = CTA_GAP * widths.len().saturating_sub(1) as u16;
    let total = widths.iter().sum::<u16>() + gaps;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|w| {
            let rect = Rect::new(x, area.y, w, 1).intersection(area);
            x = x.saturating_add(w + CTA_GAP);
            rect
        })
        .collect()
}

/// Pointer and reel rows of the wheel.
fn wheel_rect(content: Rect) -> Rect {
    Rect::new(content.x, content.y + 1, content.width, 2).intersection(content)
}

/// Clickable elements of the active slide drawn in `area`.
pub fn targets(app: &AppState, area: Rect) -> Vec<(ClickTarget, Rect)> {
    let Some(index) = app.view.active_slide() else {
        return Vec::new();
    };
    let Some(slide) = app.deck.slide(index) else {
        return Vec::new();
    };
    let regions = regions(area, slide);
    let mut targets: Vec<(ClickTarget, Rect)> = cta_buttons(regions.ctas, slide)
        .into_iter()
        .enumerate()
        .map(|(i, rect)| (ClickTarget::Cta(i), rect))
        .collect();
    if app.deck.animation_for(index) == AnimationKind::Spin && !slide.items.is_empty() {
        targets.push((ClickTarget::Wheel, wheel_rect(regions.content)));
    }
    targets
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState, now: Duration) {
    let Some(index) = app.view.active_slide() else {
        render_between(f, area, app);
        return;
    };
    let Some(slide) = app.deck.slide(index) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", app.deck.title))
        .title_style(theme::panel_title(true));
    f.render_widget(block, area);

    let Regions {
        header,
        content,
        ctas,
    } = regions(area, slide);
    render_header(f, header, slide);

    let anim = app.view.animation.as_ref().filter(|a| a.slide == index);
    let theme = Theme::default();
    match app.deck.animation_for(index) {
        AnimationKind::Float => render_float(f, content, slide, anim, now, &theme),
        AnimationKind::Spin => render_wheel(f, content, slide, &app.wheel, now, &theme),
        AnimationKind::Grow => render_bars(f, content, slide, anim, now, &theme),
        AnimationKind::Stream => render_stream(f, content, slide, anim, now),
        AnimationKind::ScaleIn => render_cards(f, content, slide, anim, now, &theme),
        AnimationKind::None => render_list(f, content, slide),
    }

    if ctas.height > 0 {
        render_ctas(f, ctas, slide, app.cta_focus);
    }
}

/// No slide is active between the two transition stages. A slide leaving
/// backwards keeps a dimmed title.
fn render_between(f: &mut Frame, area: Rect, app: &AppState) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    if let Some(slide) = app.view.exiting_slide().and_then(|i| app.deck.slide(i)) {
        block = block
            .title(format!(" ◀ {} ", slide.title))
            .title_style(theme::panel_title(false));
    }
    f.render_widget(block, area);
}

fn render_header(f: &mut Frame, area: Rect, slide: &Slide) {
    let mut lines = vec![Line::from(Span::styled(
        slide.title.as_str(),
        theme::accent_bold(),
    ))];
    if let Some(subtitle) = &slide.subtitle {
        lines.push(Line::from(Span::styled(subtitle.as_str(), theme::neutral())));
    }
    lines.push(Line::from(""));
    for text in &slide.body {
        lines.push(Line::from(Span::styled(text.as_str(), theme::text())));
    }
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn item_progress(anim: Option<&SlideAnimation>, item: usize, now: Duration) -> f64 {
    anim.map_or(1.0, |a| a.item_progress(item, now))
}

fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::horizontal(constraints).split(area).to_vec()
}

/// Bubbles bobbing up and down, one per column.
fn render_float(
    f: &mut Frame,
    area: Rect,
    slide: &Slide,
    anim: Option<&SlideAnimation>,
    now: Duration,
    theme: &Theme,
) {
    if area.height < 5 {
        render_list(f, area, slide);
        return;
    }
    for (i, (item, col)) in slide.items.iter().zip(columns(area, slide.items.len())).enumerate() {
        if item_progress(anim, i, now) <= 0.0 {
            continue;
        }
        let offset = anim.map_or(0.0, |a| a.float_offset(i, now)).round() as i32;
        let y = (col.y as i32 + 1 + offset).max(col.y as i32) as u16;
        let bubble = Rect::new(col.x, y, col.width, 3).intersection(col);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.item_color(i)));
        let para = Paragraph::new(Span::styled(item.as_str(), theme::text()))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, bubble);
    }
}

/// Reel of segments under a fixed pointer; the segment under the pointer is
/// the one the wheel currently selects.
fn render_wheel(
    f: &mut Frame,
    area: Rect,
    slide: &Slide,
    wheel: &RouletteWheel,
    now: Duration,
    theme: &Theme,
) {
    let n = slide.items.len();
    if n == 0 {
        let para = Paragraph::new(Span::styled("No segments", theme::muted()))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }
    let selected = wheel.selected_segment(now) % n;

    let mut reel: Vec<Span> = Vec::new();
    for k in -WHEEL_WINDOW..=WHEEL_WINDOW {
        let idx = (selected as isize + k).rem_euclid(n as isize) as usize;
        let style = Style::default().fg(theme.item_color(idx));
        let style = if k == 0 {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        };
        reel.push(Span::styled(format!(" {} ", slide.items[idx]), style));
        reel.push(Span::raw(" "));
    }

    let status = if wheel.is_spinning(now) {
        Span::styled("spinning…", theme::warning())
    } else {
        Span::styled(format!("selected: {}", slide.items[selected]), theme::positive())
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("▼", theme::negative())),
        Line::from(reel),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:>3.0}°  ", wheel.angle(now)), theme::muted()),
            status,
        ]),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(para, area);
}

/// Bars rising to their values.
fn render_bars(
    f: &mut Frame,
    area: Rect,
    slide: &Slide,
    anim: Option<&SlideAnimation>,
    now: Duration,
    theme: &Theme,
) {
    let n = slide.items.len().min(slide.values.len());
    if n == 0 {
        render_list(f, area, slide);
        return;
    }
    let max = slide.values[..n].iter().copied().fold(0.0_f64, f64::max);
    let bars: Vec<Bar> = (0..n)
        .map(|i| {
            let value = slide.values[i];
            let height = value * item_progress(anim, i, now) * 10.0;
            Bar::default()
                .value(height.round() as u64)
                .label(Line::from(slide.items[i].as_str()))
                .text_value(format!("{value:.1}"))
                .style(Style::default().fg(theme.item_color(i)))
        })
        .collect();

    let slot = area.width / n as u16;
    let bar_width = slot.saturating_sub(2).clamp(3, 12);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max((max * 10.0).ceil() as u64)
        .value_style(theme::text().add_modifier(Modifier::BOLD));
    f.render_widget(chart, area.inner(Margin::new(2, 0)));
}

/// Items typed out one after another.
fn render_stream(
    f: &mut Frame,
    area: Rect,
    slide: &Slide,
    anim: Option<&SlideAnimation>,
    now: Duration,
) {
    let lines: Vec<Line> = slide
        .items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let p = item_progress(anim, i, now);
            if p <= 0.0 {
                return None;
            }
            let total = item.chars().count();
            let shown = ((total as f64) * p).ceil() as usize;
            let text: String = item.chars().take(shown).collect();
            Some(Line::from(vec![
                Span::styled("  → ", theme::accent()),
                Span::styled(text, theme::text()),
            ]))
        })
        .collect();
    let para = Paragraph::new(lines).block(Block::default().padding(Padding::vertical(1)));
    f.render_widget(para, area);
}

/// Cards growing from their centers.
fn render_cards(
    f: &mut Frame,
    area: Rect,
    slide: &Slide,
    anim: Option<&SlideAnimation>,
    now: Duration,
    theme: &Theme,
) {
    let card_height = area.height.min(5);
    for (i, (item, col)) in slide.items.iter().zip(columns(area, slide.items.len())).enumerate() {
        let p = item_progress(anim, i, now);
        if p <= 0.0 {
            continue;
        }
        let slot = col.inner(Margin::new(1, 0));
        let width = ((slot.width as f64) * p).round() as u16;
        let height = ((card_height as f64) * p).round() as u16;
        if width < 4 || height < 3 {
            let dot = Rect::new(slot.x + slot.width / 2, slot.y + card_height / 2, 1, 1)
                .intersection(area);
            f.render_widget(Paragraph::new(Span::styled("·", theme::muted())), dot);
            continue;
        }
        let card = Rect::new(
            slot.x + (slot.width - width) / 2,
            slot.y + (card_height - height) / 2,
            width,
            height,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.item_color(i)));
        let para = Paragraph::new(Span::styled(item.as_str(), theme::text()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(para, card);
    }
}

fn render_list(f: &mut Frame, area: Rect, slide: &Slide) {
    let lines: Vec<Line> = slide
        .items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", theme::muted()),
                Span::styled(item.as_str(), theme::text()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_ctas(f: &mut Frame, area: Rect, slide: &Slide, focus: Option<usize>) {
    for (i, (cta, rect)) in slide
        .calls_to_action
        .iter()
        .zip(cta_buttons(area, slide))
        .enumerate()
    {
        let span = Span::styled(cta_text(&cta.label), theme::button(focus == Some(i)));
        f.render_widget(Paragraph::new(Line::from(span)), rect);
    }
    let hint = Rect::new(area.x, area.y + 1, area.width, 1).intersection(area);
    let para = Paragraph::new(Span::styled(
        "Click, or Tab to focus and Enter to press",
        theme::muted(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(para, hint);
}
