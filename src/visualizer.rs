//! Decorative circular visualizer.
//!
//! Every frame while playing, a ring of radial bars is regenerated with
//! random lengths and opacities. Nothing is derived from audio.

mod frame;

pub use frame::*;

use std::f64::consts::TAU;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::VisualizerSettings;
use crate::motion::triangle_wave;

/// Fixed geometry and random ranges of the ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisualizerShape {
    pub bar_count: usize,
    pub bar_min: f64,
    pub bar_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub radius_inset: f64,
    pub canvas_size: f64,
}

impl VisualizerShape {
    pub fn center(&self) -> (f64, f64) {
        (self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    /// Inner radius of the ring: `min(cx, cy) - inset`, never negative.
    pub fn radius(&self) -> f64 {
        let (cx, cy) = self.center();
        (cx.min(cy) - self.radius_inset).max(0.0)
    }
}

impl From<&VisualizerSettings> for VisualizerShape {
    fn from(s: &VisualizerSettings) -> Self {
        Self {
            bar_count: s.bar_count,
            bar_min: s.bar_min,
            bar_max: s.bar_max,
            opacity_min: s.opacity_min,
            opacity_max: s.opacity_max,
            radius_inset: s.radius_inset,
            canvas_size: s.canvas_size,
        }
    }
}

impl Default for VisualizerShape {
    fn default() -> Self {
        Self::from(&VisualizerSettings::default())
    }
}

/// Per-widget visualizer state: the latest frame plus the disc spin and
/// glow pulse clocks.
#[derive(Debug)]
pub struct Visualizer {
    shape: VisualizerShape,
    rng: StdRng,
    frame: Option<VisualizerFrame>,
    disc_angle: f64,
    pulse_clock: f64,
    revolution_secs: f64,
    pulse_secs: f64,
}

impl Visualizer {
    /// Seeded from `settings.seed` when set, otherwise from the thread RNG.
    pub fn new(settings: &VisualizerSettings) -> Self {
        match settings.seed {
            Some(seed) => Self::with_seed(settings, seed),
            None => Self::with_rng(settings, StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Deterministic visualizer, for tests and reproducible captures.
    pub fn with_seed(settings: &VisualizerSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &VisualizerSettings, rng: StdRng) -> Self {
        Self {
            shape: VisualizerShape::from(settings),
            rng,
            frame: None,
            disc_angle: 0.0,
            pulse_clock: 0.0,
            revolution_secs: settings.revolution_secs,
            pulse_secs: settings.pulse_secs,
        }
    }

    pub fn shape(&self) -> &VisualizerShape {
        &self.shape
    }

    /// The frame to draw, if the loop is running.
    pub fn frame(&self) -> Option<&VisualizerFrame> {
        self.frame.as_ref()
    }

    /// Disc rotation in radians, `0..TAU`.
    pub fn disc_angle(&self) -> f64 {
        self.disc_angle
    }

    /// Glow scale, cycling `1 -> 1.05 -> 1` while the loop runs.
    pub fn pulse(&self) -> f64 {
        if self.frame.is_none() {
            return 1.0;
        }
        1.0 + 0.05 * triangle_wave(self.pulse_clock, self.pulse_secs)
    }

    /// Replace the frame with fresh random bars and advance the clocks by `dt`.
    pub fn on_frame(&mut self, dt: Duration) {
        self.frame = Some(VisualizerFrame::generate(&self.shape, &mut self.rng));
        let secs = dt.as_secs_f64();
        if self.revolution_secs > 0.0 {
            self.disc_angle = (self.disc_angle + TAU * secs / self.revolution_secs).rem_euclid(TAU);
        }
        self.pulse_clock += secs;
    }

    /// Drop the current frame; the ring is drawn empty until the next frame.
    pub fn stop(&mut self) {
        self.frame = None;
        self.pulse_clock = 0.0;
    }
}

#[cfg(test)]
mod tests;
