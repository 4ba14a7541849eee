use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::debug;

use super::ticker::{Ticker, TickerGuard, TimerEvent};
use crate::config::Settings;
use crate::error::VinylResult;

/// Which recurring timers the current state wants running.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TimerDemand {
    pub progress: bool,
    pub visualizer: bool,
    pub landing: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct TimerPeriods {
    pub progress: Duration,
    pub visualizer: Duration,
    pub landing: Duration,
}

impl From<&Settings> for TimerPeriods {
    fn from(s: &Settings) -> Self {
        Self {
            progress: Duration::from_millis(s.player.tick_ms),
            visualizer: Duration::from_millis(s.visualizer.frame_ms),
            landing: Duration::from_millis(s.landing.frame_ms),
        }
    }
}

/// The set of live timers, reconciled against a `TimerDemand` after every
/// state change. Dropping `Effects` stops all of them.
pub struct Effects {
    tx: Sender<TimerEvent>,
    periods: TimerPeriods,
    progress: Option<TickerGuard>,
    visualizer: Option<TickerGuard>,
    landing: Option<TickerGuard>,
}

impl Effects {
    pub fn new(tx: Sender<TimerEvent>, periods: TimerPeriods) -> Self {
        Self {
            tx,
            periods,
            progress: None,
            visualizer: None,
            landing: None,
        }
    }

    /// Start the timers `demand` asks for and stop the others.
    pub fn sync(&mut self, demand: TimerDemand) -> VinylResult<()> {
        reconcile(
            &mut self.progress,
            demand.progress,
            "progress",
            self.periods.progress,
            &self.tx,
            TimerEvent::ProgressTick,
        )?;
        reconcile(
            &mut self.visualizer,
            demand.visualizer,
            "visualizer",
            self.periods.visualizer,
            &self.tx,
            TimerEvent::VisualizerFrame,
        )?;
        reconcile(
            &mut self.landing,
            demand.landing,
            "landing",
            self.periods.landing,
            &self.tx,
            TimerEvent::LandingFrame,
        )?;
        Ok(())
    }

    /// The demand currently being served.
    pub fn running(&self) -> TimerDemand {
        TimerDemand {
            progress: self.progress.is_some(),
            visualizer: self.visualizer.is_some(),
            landing: self.landing.is_some(),
        }
    }

    /// Stop everything.
    pub fn stop_all(&mut self) {
        self.progress = None;
        self.visualizer = None;
        self.landing = None;
    }
}

fn reconcile(
    slot: &mut Option<TickerGuard>,
    wanted: bool,
    name: &'static str,
    period: Duration,
    tx: &Sender<TimerEvent>,
    event: TimerEvent,
) -> VinylResult<()> {
    match (slot.is_some(), wanted) {
        (false, true) => {
            *slot = Some(Ticker::start(name, period, tx.clone(), event)?);
            debug!(timer = name, "timer started");
        }
        (true, false) => {
            if let Some(guard) = slot.take() {
                debug!(timer = guard.name(), "timer stopped");
                guard.stop();
            }
        }
        _ => {}
    }
    Ok(())
}
