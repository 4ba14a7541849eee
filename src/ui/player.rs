//! Now-playing card: spinning disc with the bar ring, track details,
//! progress, transport, volume and the playlist panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, LineGauge, List, ListItem, ListState, Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use super::{ACCENT, MUTED, ROSE, TEXT, centered_rect_sized};
use crate::app::App;
use crate::palette::{fade, white_alpha};
use crate::player::{DISC_COVER_FALLBACK, PROGRESS_MAX, ROW_COVER_FALLBACK, Track, VOLUME_MAX};
use crate::visualizer::Visualizer;

/// Smallest area the disc canvas is drawn into.
const MIN_CANVAS: (u16, u16) = (8, 4);
/// Disc radius relative to the inner ring radius.
const DISC_SCALE: f64 = 0.8;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (card_area, playlist_area) = if app.player.is_playlist_visible() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    draw_card(frame, card_area, app);
    if let Some(rect) = playlist_area {
        draw_playlist(frame, rect, app);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let track = app.player.current_track();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(track.gradient.from.color()))
        .title(" Now Playing ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!("from {}", track.album), Style::default().fg(MUTED)),
        Span::styled(
            format!("  ·  {}", track.cover_or(DISC_COVER_FALLBACK)),
            Style::default().fg(fade(MUTED, 0.6)),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    draw_disc(frame, rows[1], &app.visualizer, track);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            track.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(track.byline(), Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(info, rows[2]);

    draw_progress(frame, rows[3], app, track);
    frame.render_widget(
        Paragraph::new(transport_line(app)).alignment(Alignment::Center),
        rows[4],
    );
    draw_volume(frame, rows[5], app);
}

/// Square-ish canvas: a terminal cell is about twice as tall as it is wide.
fn disc_rect(area: Rect) -> Option<Rect> {
    if area.width < MIN_CANVAS.0 || area.height < MIN_CANVAS.1 {
        return None;
    }
    let side = area.height.min(area.width / 2);
    Some(centered_rect_sized(side * 2, side, area))
}

fn draw_disc(frame: &mut Frame, area: Rect, visualizer: &Visualizer, track: &Track) {
    let Some(rect) = disc_rect(area) else {
        return;
    };
    let shape = visualizer.shape();
    let size = shape.canvas_size;
    let (cx, cy) = shape.center();
    let disc = shape.radius() * DISC_SCALE * visualizer.pulse();
    let angle = visualizer.disc_angle();
    let from = track.gradient.from.color();
    let to = track.gradient.to.color();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: disc,
                color: from,
            });
            for groove in [0.75, 0.5] {
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: disc * groove,
                    color: fade(from, 0.5),
                });
            }
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: disc * 0.2,
                color: to,
            });
            let (sin, cos) = angle.sin_cos();
            ctx.draw(&CanvasLine::new(
                cx + cos * disc * 0.2,
                cy + sin * disc * 0.2,
                cx + cos * disc,
                cy + sin * disc,
                to,
            ));
            if let Some(bars) = visualizer.frame() {
                ctx.layer();
                for seg in bars.segments(shape) {
                    ctx.draw(&CanvasLine::new(
                        seg.x1,
                        seg.y1,
                        seg.x2,
                        seg.y2,
                        white_alpha(seg.opacity),
                    ));
                }
            }
        });
    frame.render_widget(canvas, rect);
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App, track: &Track) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(6),
        ])
        .split(area);
    let progress = app.player.progress();
    let ratio = (progress / PROGRESS_MAX).clamp(0.0, 1.0);

    frame.render_widget(
        Paragraph::new(app.player.elapsed_text()).style(Style::default().fg(MUTED)),
        cols[0],
    );
    let gauge = LineGauge::default()
        .ratio(ratio)
        .label("")
        .filled_style(Style::default().fg(track.gradient.at(ratio)))
        .unfilled_style(Style::default().fg(fade(MUTED, 0.4)));
    frame.render_widget(gauge, cols[1]);
    frame.render_widget(
        Paragraph::new(track.duration.clone())
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn transport_line(app: &App) -> Line<'static> {
    let player = &app.player;
    let heart = if player.is_liked() {
        Span::styled("♥", Style::default().fg(ROSE))
    } else {
        Span::styled("♡", Style::default().fg(MUTED))
    };
    let play = if player.is_playing() { "⏸" } else { "▶" };
    let list_style = if player.is_playlist_visible() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    };
    Line::from(vec![
        heart,
        Span::raw("    "),
        Span::styled("⏮", Style::default().fg(TEXT)),
        Span::raw("   "),
        Span::styled(
            play,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("⏭", Style::default().fg(TEXT)),
        Span::raw("    "),
        Span::styled("☰", list_style),
    ])
}

fn draw_volume(frame: &mut Frame, area: Rect, app: &App) {
    let volume = app.player.effective_volume();
    let icon = if app.player.is_silent() { "🔇" } else { "🔊" };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(icon), cols[0]);
    let gauge = LineGauge::default()
        .ratio(f64::from(volume) / f64::from(VOLUME_MAX))
        .label("")
        .filled_style(Style::default().fg(TEXT))
        .unfilled_style(Style::default().fg(fade(MUTED, 0.4)));
    frame.render_widget(gauge, cols[1]);
    frame.render_widget(
        Paragraph::new(if app.player.is_muted() {
            "mute".to_string()
        } else {
            format!("{volume:>3}")
        })
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn draw_playlist(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Up Next ");
    let inner_width = block.inner(area).width;
    let current = app.player.index();
    let playing = app.player.is_playing();

    let items: Vec<ListItem> = app
        .player
        .playlist()
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = match (i == current, playing) {
                (true, true) => "❚❚ ",
                (true, false) => "▶  ",
                _ => "   ",
            };
            let title_style = if i == current {
                Style::default()
                    .fg(track.gradient.from.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(format!("{:>2}. ", track.id), Style::default().fg(MUTED)),
                Span::styled(track.title.clone(), title_style),
                Span::styled(format!(" · {}", track.artist), Style::default().fg(MUTED)),
                Span::styled(format!("  {}", track.duration), Style::default().fg(MUTED)),
            ];
            if inner_width >= 60 {
                spans.push(Span::styled(
                    format!("  {}", track.cover_or(ROW_COVER_FALLBACK)),
                    Style::default().fg(fade(MUTED, 0.6)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.playlist_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
