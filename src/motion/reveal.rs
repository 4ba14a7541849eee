use std::time::Duration;

use super::interpolate::ease_out;

/// Timing of one element's appear transition, relative to its section
/// coming into view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reveal {
    pub delay: f64,
    pub duration: f64,
    /// Offset in pixels the element slides in from.
    pub distance: f64,
}

impl Reveal {
    pub const fn new(delay: f64, duration: f64) -> Self {
        Self {
            delay,
            duration,
            distance: 20.0,
        }
    }

    pub const fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Eased opacity after `clock` seconds in view.
    pub fn opacity(&self, clock: f64) -> f64 {
        if self.duration <= 0.0 {
            return if clock >= self.delay { 1.0 } else { 0.0 };
        }
        ease_out((clock - self.delay) / self.duration)
    }

    /// Remaining slide offset in pixels after `clock` seconds in view.
    pub fn offset(&self, clock: f64) -> f64 {
        self.distance * (1.0 - self.opacity(clock))
    }

    /// Seconds until this transition has finished.
    pub fn end(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }
}

/// Seconds a section has been in view; resets whenever it leaves.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RevealClock {
    in_view: bool,
    elapsed: f64,
}

impl RevealClock {
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn update(&mut self, in_view: bool, dt: Duration) {
        if in_view {
            if self.in_view {
                self.elapsed += dt.as_secs_f64();
            }
        } else {
            self.elapsed = 0.0;
        }
        self.in_view = in_view;
    }
}

/// Visible fraction of a span `[top, top + height)` inside the viewport
/// `[view_top, view_top + view_height)`.
pub fn visible_fraction(top: f64, height: f64, view_top: f64, view_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    ((end - start) / height).clamp(0.0, 1.0)
}

/// Whether at least `amount` of the span is visible.
pub fn in_view(top: f64, height: f64, view_top: f64, view_height: f64, amount: f64) -> bool {
    let fraction = visible_fraction(top, height, view_top, view_height);
    fraction > 0.0 && fraction >= amount
}
