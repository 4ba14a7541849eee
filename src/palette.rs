//! Color tones and two-stop gradients shared by the player and the landing page.

use ratatui::style::Color;

/// The handful of 500-weight tones the widgets are themed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Purple,
    Violet,
    Indigo,
    Blue,
    Cyan,
    Pink,
    Orange,
    Green,
    Emerald,
    Amber,
    Yellow,
}

impl Tone {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tone::Purple => (0xa8, 0x55, 0xf7),
            Tone::Violet => (0x8b, 0x5c, 0xf6),
            Tone::Indigo => (0x63, 0x66, 0xf1),
            Tone::Blue => (0x3b, 0x82, 0xf6),
            Tone::Cyan => (0x06, 0xb6, 0xd4),
            Tone::Pink => (0xec, 0x48, 0x99),
            Tone::Orange => (0xf9, 0x73, 0x16),
            Tone::Green => (0x22, 0xc5, 0x5e),
            Tone::Emerald => (0x10, 0xb9, 0x81),
            Tone::Amber => (0xf5, 0x9e, 0x0b),
            Tone::Yellow => (0xea, 0xb3, 0x08),
        }
    }

    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// A `from -> to` gradient tag, e.g. purple to blue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub from: Tone,
    pub to: Tone,
}

impl Gradient {
    pub const fn new(from: Tone, to: Tone) -> Self {
        Self { from, to }
    }

    /// Color at position `t` (clamped to `0..=1`) along the gradient.
    pub fn at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = self.from.rgb();
        let (r2, g2, b2) = self.to.rgb();
        Color::Rgb(lerp_u8(r1, r2, t), lerp_u8(g1, g2, t), lerp_u8(b1, b2, t))
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// White at the given opacity over a black background.
pub fn white_alpha(opacity: f64) -> Color {
    let v = (255.0 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(v, v, v)
}

/// Fade `color` towards black; non-RGB colors are returned as-is.
pub fn fade(color: Color, opacity: f64) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let o = opacity.clamp(0.0, 1.0);
            Color::Rgb(
                (r as f64 * o).round() as u8,
                (g as f64 * o).round() as u8,
                (b as f64 * o).round() as u8,
            )
        }
        other => other,
    }
}
