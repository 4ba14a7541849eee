use tracing::{debug, trace, warn};

use super::format::elapsed_text;
use super::playlist::Playlist;
use super::track::Track;

pub const PROGRESS_MAX: f64 = 100.0;
pub const VOLUME_MAX: u8 = 100;

/// What a progress tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused; the tick was ignored.
    Idle,
    /// Progress moved forward within the current track.
    Advanced,
    /// The track had finished; moved to the next one at progress 0.
    NextTrack,
}

/// Simulated playback state of the player widget.
///
/// `index` always resolves into `playlist`; `progress` stays in `0..=100`
/// and `volume` in `0..=100`.
#[derive(Debug, Clone)]
pub struct PlayerState {
    playlist: Playlist,
    index: usize,
    playing: bool,
    progress: f64,
    volume: u8,
    muted: bool,
    liked: bool,
    playlist_visible: bool,
}

impl PlayerState {
    /// Start paused at the first track. An `initial_volume` of zero starts muted.
    pub fn new(playlist: Playlist, initial_volume: u8) -> Self {
        let volume = initial_volume.min(VOLUME_MAX);
        Self {
            playlist,
            index: 0,
            playing: false,
            progress: 0.0,
            volume,
            muted: volume == 0,
            liked: false,
            playlist_visible: false,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist.tracks()[self.index]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The stored numeric volume, kept while muted.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Volume as heard: zero while muted, the stored volume otherwise.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }

    /// True when the mute icon should show.
    pub fn is_silent(&self) -> bool {
        self.effective_volume() == 0
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn is_playlist_visible(&self) -> bool {
        self.playlist_visible
    }

    /// Elapsed time of the current track at the current progress, `M:SS`.
    pub fn elapsed_text(&self) -> String {
        elapsed_text(&self.current_track().duration, self.progress)
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        if !self.playing {
            debug!(index = self.index, "playback started");
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        if self.playing {
            debug!(index = self.index, progress = self.progress, "playback paused");
        }
        self.playing = false;
    }

    /// Advance to the next track, wrapping past the end, at progress 0.
    pub fn next(&mut self) {
        self.index = self.playlist.next_index(self.index);
        self.progress = 0.0;
        debug!(index = self.index, "next track");
    }

    /// Go back one track, wrapping from the first to the last, at progress 0.
    pub fn previous(&mut self) {
        self.index = self.playlist.prev_index(self.index);
        self.progress = 0.0;
        debug!(index = self.index, "previous track");
    }

    /// Jump to `index` and start playing from the top. Indices outside the
    /// playlist are ignored.
    pub fn select_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            warn!(index, len = self.playlist.len(), "ignoring out-of-range track selection");
            return;
        }
        self.index = index;
        self.progress = 0.0;
        self.playing = true;
        debug!(index, "track selected");
    }

    /// One step of the simulated clock.
    ///
    /// A tick that finds the track finished moves to the next track;
    /// otherwise progress grows by `step`, capped at 100.
    pub fn tick(&mut self, step: f64) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        if self.progress >= PROGRESS_MAX {
            self.next();
            return TickOutcome::NextTrack;
        }
        self.progress = (self.progress + step.max(0.0)).min(PROGRESS_MAX);
        trace!(progress = self.progress, "progress tick");
        TickOutcome::Advanced
    }

    /// Drag the progress slider.
    pub fn seek(&mut self, percent: f64) {
        if percent.is_nan() {
            return;
        }
        self.progress = percent.clamp(0.0, PROGRESS_MAX);
    }

    pub fn seek_by(&mut self, delta: f64) {
        self.seek(self.progress + delta);
    }

    /// Drag the volume slider. Zero mutes and keeps the stored volume so
    /// un-muting restores it; anything else stores the value and un-mutes.
    pub fn set_volume(&mut self, value: u8) {
        let value = value.min(VOLUME_MAX);
        if value == 0 {
            self.muted = true;
        } else {
            self.volume = value;
            self.muted = false;
        }
        debug!(volume = self.volume, muted = self.muted, "volume changed");
    }

    /// Step the heard volume up; starts from zero when muted.
    pub fn volume_up(&mut self, step: u8) {
        let next = self.effective_volume().saturating_add(step);
        self.set_volume(next.min(VOLUME_MAX));
    }

    pub fn volume_down(&mut self, step: u8) {
        self.set_volume(self.effective_volume().saturating_sub(step));
    }

    /// Flip mute without touching the stored volume.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        debug!(muted = self.muted, "mute toggled");
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_playlist(&mut self) {
        self.playlist_visible = !self.playlist_visible;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Playlist::default(), 80)
    }
}
