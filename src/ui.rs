//! UI rendering for the terminal user interface.
//!
//! This module dispatches to the landing page or the player renderer and
//! draws the shared controls footer, using `ratatui`.

mod landing;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::{App, View};

/// Default foreground for body copy.
pub(crate) const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
/// Secondary copy.
pub(crate) const MUTED: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
/// Accent for focus and highlights.
pub(crate) const ACCENT: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
/// Liked heart.
pub(crate) const ROSE: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

const LANDING_CONTROLS: [(&str, &str); 8] = [
    ("j/k", "scroll"),
    ("PgUp/PgDn", "page"),
    ("1-4", "jump"),
    ("m", "menu"),
    ("tab", "focus"),
    ("enter", "press"),
    ("v", "player"),
    ("q", "quit"),
];

const PLAYER_CONTROLS: [(&str, &str); 10] = [
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("H/L", "seek"),
    ("+/-", "volume"),
    ("M", "mute"),
    ("f", "like"),
    ("P", "playlist"),
    ("enter", "play selected"),
    ("v", "landing"),
    ("q", "quit"),
];

/// Render the controls help text for the active view.
fn controls_text(view: View) -> String {
    let pairs: &[(&str, &str)] = match view {
        View::Landing => &LANDING_CONTROLS,
        View::Player => &PLAYER_CONTROLS,
    };
    pairs
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the active view into `frame`.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    match app.view {
        View::Landing => landing::draw(frame, chunks[0], &mut app.landing),
        View::Player => player::draw(frame, chunks[0], app),
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        controls_text(app.view),
        Style::default().fg(MUTED),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[1]);
}

/// Compute a centered rectangle with given size constrained to `r`.
pub(crate) fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Greedy word wrap on `width` characters. Long words are split.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let len = word.len();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word);
        current_len += len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
