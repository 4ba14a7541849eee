//! Recurring timers for the progress clock and the animation loops.
//!
//! Each timer is a small thread that sends an event into the runtime's
//! channel every period. Starting one yields a `TickerGuard`; dropping the
//! guard stops and joins the thread, so no event is sent afterwards.

mod effects;
mod ticker;

pub use effects::*;
pub use ticker::*;
