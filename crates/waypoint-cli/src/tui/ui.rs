//! TUI rendering — single-coordinate design.
//!
//! ┌──────────────────────────────────────────────┐
//! │  🌍 Waypoint       anywhere · light          │
//! ├──────────────────────────────────────────────┤
//! │                  Latitude                    │
//! │                 48.500000°                   │
//! │                    ────                      │
//! │                 Longitude                    │
//! │                -110.000000°                  │
//! ├──────────────────────────────────────────────┤
//! │  ████████████░░░░░░░░  (while generating)    │
//! ├──────────────────────────────────────────────┤
//! │  [g] Generate   [c] Copy   [m] Open map      │
//! └──────────────────────────────────────────────┘
//!   g generate  o oceans  c copy  m map  t theme  ? about  q quit

use super::app::App;
use ratatui::{prelude::*, widgets::*};
use waypoint_core::{Browser, Clipboard, RandomSource, REPOSITORY_URL, Theme};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::Rgb(240, 253, 250),
                fg: Color::Rgb(31, 41, 55),
                accent: Color::Rgb(15, 118, 110),
                muted: Color::Rgb(107, 114, 128),
                border: Color::Rgb(153, 246, 228),
            },
            Theme::Dark => Self {
                bg: Color::Rgb(17, 24, 39),
                fg: Color::Rgb(229, 231, 235),
                accent: Color::Rgb(45, 212, 191),
                muted: Color::Rgb(156, 163, 175),
                border: Color::Rgb(55, 65, 81),
            },
        }
    }
}

pub fn draw<C: Clipboard, B: Browser, R: RandomSource>(f: &mut Frame, app: &App<C, B, R>) {
    let palette = Palette::for_theme(app.waypoint().preferences().theme());
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(7),    // coordinates
            Constraint::Length(3), // progress / mode
            Constraint::Length(3), // actions
            Constraint::Length(1), // tagline
            Constraint::Length(1), // keys
        ])
        .split(area);

    draw_title(f, rows[0], app, &palette);
    draw_coordinates(f, rows[1], app, &palette);
    draw_status(f, rows[2], app, &palette);
    draw_actions(f, rows[3], app, &palette);
    draw_tagline(f, rows[4], &palette);
    draw_keys(f, rows[5], &palette);

    if app.waypoint().preferences().about_open() {
        draw_about(f, area, &palette);
    }
}

fn draw_title<C: Clipboard, B: Browser, R: RandomSource>(
    f: &mut Frame,
    area: Rect,
    app: &App<C, B, R>,
    palette: &Palette,
) {
    let prefs = app.waypoint().preferences();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(vec![
            Span::styled(" 🌍 Waypoint ", Style::default().bold().fg(palette.accent)),
            Span::styled(
                format!(
                    "  {} · {} ",
                    prefs.sampling_mode().label(),
                    prefs.theme().label()
                ),
                Style::default().fg(palette.muted),
            ),
        ]));
    let subtitle = Paragraph::new("Discover random places on Earth")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(subtitle, area);
}

fn draw_coordinates<C: Clipboard, B: Browser, R: RandomSource>(
    f: &mut Frame,
    area: Rect,
    app: &App<C, B, R>,
    palette: &Palette,
) {
    let session = app.waypoint().session();
    let shown = session.displayed();

    let mut value_style = Style::default().bold().fg(palette.accent);
    if session.is_animating() {
        value_style = value_style.add_modifier(Modifier::DIM | Modifier::ITALIC);
    }
    let label_style = Style::default().fg(palette.muted);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Latitude", label_style)),
        Line::from(Span::styled(format_degrees(shown.latitude), value_style)),
        Line::from(Span::styled("────", Style::default().fg(palette.border))),
        Line::from(Span::styled("Longitude", label_style)),
        Line::from(Span::styled(format_degrees(shown.longitude), value_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, area);
}

fn draw_status<C: Clipboard, B: Browser, R: RandomSource>(
    f: &mut Frame,
    area: Rect,
    app: &App<C, B, R>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    if let Some(progress) = app.waypoint().session().progress(app.now()) {
        let gauge = Gauge::default()
            .block(block.title(" Generating... "))
            .gauge_style(Style::default().fg(palette.accent).bg(palette.bg))
            .ratio(progress.clamp(0.0, 1.0))
            .label("");
        f.render_widget(gauge, area);
        return;
    }

    let text = if app.waypoint().preferences().include_oceans() {
        "Oceans included · press o for land only"
    } else {
        "Land only · press o to include oceans"
    };
    let p = Paragraph::new(text)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, area);
}

fn draw_actions<C: Clipboard, B: Browser, R: RandomSource>(
    f: &mut Frame,
    area: Rect,
    app: &App<C, B, R>,
    palette: &Palette,
) {
    let waypoint = app.waypoint();
    let key = Style::default().bold().fg(palette.accent);
    let text = Style::default().fg(palette.fg);

    let mut spans = if waypoint.session().is_animating() {
        vec![Span::styled(
            "⟳ Generating...",
            Style::default().fg(palette.muted),
        )]
    } else {
        vec![
            Span::styled("[g]", key),
            Span::styled(" Generate random location", text),
        ]
    };

    if waypoint.session().has_coordinates() {
        let copy_label = if waypoint.preferences().copied_feedback_active() {
            " Copied!"
        } else {
            " Copy"
        };
        spans.extend([
            Span::raw("   "),
            Span::styled("[c]", key),
            Span::styled(copy_label, text),
            Span::raw("   "),
            Span::styled("[m]", key),
            Span::styled(" Open map", text),
        ]);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let p = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, area);
}

fn draw_tagline(f: &mut Frame, area: Rect, palette: &Palette) {
    let p = Paragraph::new("Every keypress takes you to a unique place on Earth!")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}

fn draw_keys(f: &mut Frame, area: Rect, palette: &Palette) {
    let keys = [
        ("g", "generate"),
        ("o", "oceans"),
        ("c", "copy"),
        ("m", "map"),
        ("t", "theme"),
        ("?", "about"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (k, label) in keys {
        spans.push(Span::styled(
            format!(" {k} "),
            Style::default().bold().fg(palette.accent),
        ));
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(palette.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_about(f: &mut Frame, area: Rect, palette: &Palette) {
    let popup = centered_rect(70, 60, area);
    let lines = vec![
        Line::from(Span::styled(
            "Waypoint",
            Style::default().bold().fg(palette.accent),
        )),
        Line::from(""),
        Line::from("A tiny tool that spits out random coordinates, so you can wander"),
        Line::from("the map beyond the places you already know."),
        Line::from(""),
        Line::from(Span::styled(
            "Land only picks one of seven continental boxes, each equally likely.",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(REPOSITORY_URL, Style::default().fg(palette.accent)),
            Span::styled("  (r to open)", Style::default().fg(palette.muted)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(palette.muted),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" About ");
    let p = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg).fg(palette.fg))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(Clear, popup);
    f.render_widget(p, popup);
}

/// Value with six decimals and a degree sign.
pub fn format_degrees(v: f64) -> String {
    format!("{v:.6}°")
}

/// A rectangle of the given percentages, centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
