use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{trace, warn};

/// Events the timers feed into the runtime loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Advance the simulated playback clock.
    ProgressTick,
    /// Redraw the visualizer with a fresh frame.
    VisualizerFrame,
    /// Step the landing page springs and reveal clocks.
    LandingFrame,
}

/// Owns a running ticker thread. Dropping it stops the thread.
#[derive(Debug)]
pub struct TickerGuard {
    name: &'static str,
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl TickerGuard {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop the ticker and wait for its thread to exit. Returns false when
    /// the thread had panicked.
    pub fn stop(mut self) -> bool {
        self.shutdown()
    }

    fn shutdown(&mut self) -> bool {
        // Disconnecting the stop channel wakes the thread immediately.
        self.stop.take();
        match self.join.take().map(JoinHandle::join) {
            Some(Err(_)) => {
                warn!(ticker = self.name, "ticker thread panicked");
                false
            }
            _ => true,
        }
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub struct Ticker;

impl Ticker {
    /// Send `event` on `tx` every `period` until the returned guard is dropped
    /// or the receiving side goes away.
    pub fn start<E>(
        name: &'static str,
        period: Duration,
        tx: Sender<E>,
        event: E,
    ) -> io::Result<TickerGuard>
    where
        E: Clone + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let period = period.max(Duration::from_millis(1));

        let join = thread::Builder::new()
            .name(format!("vinyl-{name}"))
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tx.send(event.clone()).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                trace!(ticker = name, "ticker exited");
            })?;

        trace!(ticker = name, ?period, "ticker started");
        Ok(TickerGuard {
            name,
            stop: Some(stop_tx),
            join: Some(join),
        })
    }
}
