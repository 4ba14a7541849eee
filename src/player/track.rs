use crate::palette::{Gradient, Tone};

/// Fallback art for the spinning disc.
pub const DISC_COVER_FALLBACK: &str = "/image1.png";
/// Fallback art for playlist rows.
pub const ROW_COVER_FALLBACK: &str = "/placeholder.svg";

const DEFAULT_COVER: &str = "/placeholder.svg?height=500&width=500";

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length as `M:SS`.
    pub duration: String,
    pub cover: Option<String>,
    pub gradient: Gradient,
}

impl Track {
    /// The cover reference, or `fallback` when it is absent or blank.
    pub fn cover_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.cover
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(fallback)
    }

    /// `Artist • Album`, as shown under the title.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.artist, self.album)
    }
}

fn track(
    id: u32,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    gradient: Gradient,
) -> Track {
    Track {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration: duration.to_string(),
        cover: Some(DEFAULT_COVER.to_string()),
        gradient,
    }
}

/// The built-in five-track list the player ships with.
pub fn default_tracks() -> Vec<Track> {
    vec![
        track(
            1,
            "Midnight Serenade",
            "Luna Eclipse",
            "Cosmic Journey",
            "3:45",
            Gradient::new(Tone::Purple, Tone::Blue),
        ),
        track(
            2,
            "Electric Dreams",
            "Neon Pulse",
            "Synthetic Emotions",
            "4:12",
            Gradient::new(Tone::Pink, Tone::Orange),
        ),
        track(
            3,
            "Ocean Whispers",
            "Aqua Mirage",
            "Deep Blue",
            "3:28",
            Gradient::new(Tone::Cyan, Tone::Blue),
        ),
        track(
            4,
            "Urban Jungle",
            "Metro Beats",
            "City Lights",
            "5:02",
            Gradient::new(Tone::Green, Tone::Emerald),
        ),
        track(
            5,
            "Desert Mirage",
            "Sahara Sounds",
            "Golden Sands",
            "4:37",
            Gradient::new(Tone::Amber, Tone::Yellow),
        ),
    ]
}
