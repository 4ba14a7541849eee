//! Application model types: `App` and `View`.
//!
//! The `App` struct owns the landing page, the player and its visualizer.
//! Input handlers mutate it; `reconcile` reports which timers should run.

use std::time::Duration;

use tracing::info;

use crate::config::{Settings, StartView};
use crate::landing::{Landing, LandingAction};
use crate::player::{Playlist, PlayerState, TickOutcome};
use crate::timer::{TimerDemand, TimerEvent};
use crate::visualizer::Visualizer;

/// Which widget fills the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Player,
}

impl From<StartView> for View {
    fn from(v: StartView) -> Self {
        match v {
            StartView::Landing => View::Landing,
            StartView::Player => View::Player,
        }
    }
}

/// Per-event amounts taken from settings.
#[derive(Debug, Copy, Clone)]
struct Steps {
    tick: f64,
    volume: u8,
    seek: f64,
    visualizer_frame: Duration,
    landing_frame: Duration,
}

/// The main application model.
pub struct App {
    pub view: View,
    pub player: PlayerState,
    pub visualizer: Visualizer,
    pub landing: Landing,
    /// Highlighted row of the playlist panel.
    pub playlist_cursor: usize,
    steps: Steps,
}

impl App {
    /// Create an `App` with the built-in playlist.
    pub fn new(settings: &Settings) -> Self {
        Self::with_parts(
            settings,
            Playlist::default(),
            Visualizer::new(&settings.visualizer),
        )
    }

    /// Create an `App` from an explicit playlist and visualizer.
    pub fn with_parts(settings: &Settings, playlist: Playlist, visualizer: Visualizer) -> Self {
        Self {
            view: View::from(settings.ui.start_view),
            player: PlayerState::new(playlist, settings.player.initial_volume),
            visualizer,
            landing: Landing::new(&settings.landing),
            playlist_cursor: 0,
            steps: Steps {
                tick: settings.player.tick_step,
                volume: settings.player.volume_step,
                seek: settings.player.seek_step,
                visualizer_frame: Duration::from_millis(settings.visualizer.frame_ms),
                landing_frame: Duration::from_millis(settings.landing.frame_ms),
            },
        }
    }

    /// Flip between the landing page and the player.
    pub fn toggle_view(&mut self) {
        let next = match self.view {
            View::Landing => View::Player,
            View::Player => View::Landing,
        };
        self.set_view(next);
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            info!(?view, "view switched");
        }
        self.view = view;
    }

    /// Apply one timer event.
    pub fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ProgressTick => {
                if self.player.tick(self.steps.tick) == TickOutcome::NextTrack {
                    self.playlist_cursor = self.player.index();
                }
            }
            TimerEvent::VisualizerFrame => {
                if self.player.is_playing() && self.view == View::Player {
                    self.visualizer.on_frame(self.steps.visualizer_frame);
                }
            }
            TimerEvent::LandingFrame => {
                if self.view == View::Landing {
                    self.landing.update(self.steps.landing_frame);
                }
            }
        }
    }

    /// Timers the current state needs. Clears the visualizer frame when its
    /// loop is not wanted so a paused ring is drawn empty.
    pub fn reconcile(&mut self) -> TimerDemand {
        let playing = self.player.is_playing();
        let demand = TimerDemand {
            progress: playing,
            visualizer: playing && self.view == View::Player,
            landing: self.view == View::Landing && self.landing.is_animating(),
        };
        if !demand.visualizer {
            self.visualizer.stop();
        }
        demand
    }

    pub fn toggle_play(&mut self) {
        self.player.toggle_play();
    }

    pub fn next_track(&mut self) {
        self.player.next();
        self.playlist_cursor = self.player.index();
    }

    pub fn previous_track(&mut self) {
        self.player.previous();
        self.playlist_cursor = self.player.index();
    }

    pub fn volume_up(&mut self) {
        self.player.volume_up(self.steps.volume);
    }

    pub fn volume_down(&mut self) {
        self.player.volume_down(self.steps.volume);
    }

    pub fn seek_forward(&mut self) {
        self.player.seek_by(self.steps.seek);
    }

    pub fn seek_back(&mut self) {
        self.player.seek_by(-self.steps.seek);
    }

    /// Show/hide the playlist panel; opening it puts the cursor on the current track.
    pub fn toggle_playlist(&mut self) {
        self.player.toggle_playlist();
        if self.player.is_playlist_visible() {
            self.playlist_cursor = self.player.index();
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.player.playlist().len();
        self.playlist_cursor = (self.playlist_cursor + 1) % len;
    }

    pub fn cursor_up(&mut self) {
        let len = self.player.playlist().len();
        self.playlist_cursor = (self.playlist_cursor + len - 1) % len;
    }

    /// Play the track under the playlist cursor.
    pub fn select_cursor(&mut self) {
        self.player.select_track(self.playlist_cursor);
    }

    /// Press the focused landing element and follow up on what it asks for.
    pub fn activate_landing(&mut self) {
        if self.landing.activate() == LandingAction::OpenPlayer {
            self.set_view(View::Player);
        }
    }
}
