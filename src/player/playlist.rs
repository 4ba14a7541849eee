use super::track::{Track, default_tracks};

/// A non-empty, ordered, immutable list of tracks.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Returns `None` for an empty list so every index the player holds resolves.
    pub fn new(tracks: Vec<Track>) -> Option<Self> {
        if tracks.is_empty() {
            None
        } else {
            Some(Self { tracks })
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `index`, wrapping past the end to 0.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    /// Index before `index`, wrapping from 0 to the last track.
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.tracks.len() - 1
        } else {
            index - 1
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
        }
    }
}
