use std::str::FromStr;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::{App, KeyDisplay};
use crate::layout::{Align, Scene, Shape};
use crate::scale::ScaleFamily;

// ── Top-level routing ─────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // title bar
            Constraint::Length(8),  // toggles + key display
            Constraint::Min(12),    // fretboard
            Constraint::Length(3),  // status
            Constraint::Length(3),  // help
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    draw_title(f, chunks[0]);
    draw_toggles(f, middle[0], app);
    draw_key_display(f, middle[1], app);
    draw_fretboard(f, chunks[2], app);
    draw_status(f, chunks[3], app);
    draw_help(f, chunks[4]);
}

// ── Title bar ─────────────────────────────────────────────────────────────────

fn draw_title(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("  FretKeys  ─  random key & scale practice")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

// ── Scale type toggles ────────────────────────────────────────────────────────

fn draw_toggles(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = ScaleFamily::ALL.iter().enumerate().map(|(i, &family)| {
        let on  = app.enabled.contains(family);
        let box_ = if on { "[x]" } else { "[ ]" };
        let sty = if i == app.cursor {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if on {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} {}", box_, family.name()), sty),
        ])
    }).collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Scale Types ").borders(Borders::ALL)),
        area,
    );
}

// ── Key display ───────────────────────────────────────────────────────────────

fn draw_key_display(f: &mut Frame, area: Rect, app: &App) {
    let lines = app.display.lines();
    let (name_sty, notes_sty) = match app.display {
        KeyDisplay::Key(_) => (
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        KeyDisplay::Prompt => (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default(),
        ),
        KeyDisplay::Idle => (Style::default().fg(Color::DarkGray), Style::default()),
    };

    let mut text = vec![Line::raw("")];
    for (i, line) in lines.into_iter().enumerate() {
        text.push(Line::styled(line, if i == 0 { name_sty } else { notes_sty }));
        text.push(Line::raw(""));
    }

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Key ").borders(Borders::ALL)),
        area,
    );
}

// ── Fretboard canvas ──────────────────────────────────────────────────────────

/// Scene colour to terminal colour. ratatui reads names and `#rrggbb`;
/// the short `#rgb` form is widened first. Unreadable colours draw grey.
pub fn hex_color(s: &str) -> Color {
    let short = s.strip_prefix('#')
        .filter(|h| h.len() == 3 && h.chars().all(|c| c.is_ascii_hexdigit()));
    let full = match short {
        Some(h) => h.chars().fold(String::from("#"), |mut acc, c| { acc.push(c); acc.push(c); acc }),
        None    => s.to_string(),
    };
    Color::from_str(&full).unwrap_or(Color::Gray)
}

fn paint_scene(ctx: &mut Context, scene: &Scene, units_per_col: f64) {
    // Canvas y grows upwards.
    let flip = |y: f64| scene.height - y;

    for shape in &scene.shapes {
        match shape {
            Shape::Fill { .. } => {}
            Shape::Line { x1, y1, x2, y2, width, color } => {
                let color  = hex_color(color);
                let passes = width.round().max(1.0) as usize;
                let vertical = x1 == x2;
                for k in 0..passes {
                    let off = k as f64 - (passes - 1) as f64 / 2.0;
                    let (dx, dy) = if vertical { (off, 0.0) } else { (0.0, off) };
                    ctx.draw(&CanvasLine {
                        x1: x1 + dx, y1: flip(y1 + dy),
                        x2: x2 + dx, y2: flip(y2 + dy),
                        color,
                    });
                }
            }
            Shape::Circle { x, y, radius, color } => {
                let color = hex_color(color);
                let mut r = *radius;
                while r > 0.0 {
                    ctx.draw(&Circle { x: *x, y: flip(*y), radius: r, color });
                    r -= 1.5;
                }
            }
            Shape::Text { .. } => {}
        }
    }

    // Labels on their own layer so dots do not overwrite them.
    ctx.layer();
    for shape in &scene.shapes {
        if let Shape::Text { x, y, text, align, color, .. } = shape {
            let span_units = text.chars().count() as f64 * units_per_col;
            let left = match align {
                Align::Center => x - span_units / 2.0,
                Align::Right  => x - span_units,
            };
            ctx.print(left, flip(*y), Span::styled(text.clone(), Style::default().fg(hex_color(color))));
        }
    }
}

fn draw_fretboard(f: &mut Frame, area: Rect, app: &App) {
    let scene = app.scene();
    let block = Block::default().title(" Fretboard ").borders(Borders::ALL);
    let inner = block.inner(area);
    let units_per_col = scene.width / inner.width.max(1) as f64;

    let background = scene.shapes.iter().find_map(|s| match s {
        Shape::Fill { color } => Some(hex_color(color)),
        _ => None,
    }).unwrap_or(Color::Reset);

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .background_color(background)
        .x_bounds([0.0, scene.width])
        .y_bounds([0.0, scene.height])
        .paint(|ctx| paint_scene(ctx, &scene, units_per_col));

    f.render_widget(canvas, area);
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let enabled = app.enabled.iter().count();
    let count_color = if app.enabled.is_empty() { Color::Red } else { Color::Green };
    let mut spans = vec![
        Span::styled("Enabled: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}/6", enabled),
                     Style::default().fg(count_color).add_modifier(Modifier::BOLD)),
        Span::raw("  │  "),
        Span::styled("Pool: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.pool_size().to_string(), Style::default().fg(Color::White)),
    ];
    if let KeyDisplay::Key(key) = &app.display {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled("Family: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(key.family.name(), Style::default().fg(Color::Cyan)));
    }
    if !app.status_msg.is_empty() {
        spans.push(Span::styled(format!("  │  {}", app.status_msg), Style::default().fg(Color::Yellow)));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(Block::default().title(" Status ").borders(Borders::ALL)),
        area,
    );
}

// ── Help ──────────────────────────────────────────────────────────────────────

fn draw_help(f: &mut Frame, area: Rect) {
    let w = Style::default().fg(Color::White);
    let line = Line::from(vec![
        Span::styled("[Enter/G] ", w), Span::raw("Generate  │  "),
        Span::styled("[↑↓] ",      w), Span::raw("Cursor  │  "),
        Span::styled("[Space] ",   w), Span::raw("Toggle  │  "),
        Span::styled("[1-6] ",     w), Span::raw("Toggle type  │  "),
        Span::styled("[A/N] ",     w), Span::raw("All/None  │  "),
        Span::styled("[Esc/Q] ",   w), Span::raw("Quit"),
    ]);

    f.render_widget(
        Paragraph::new(line)
            .block(Block::default().title(" Help ").borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
