//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds both widgets, the active
//! view and the per-event wiring between them and the timers.

mod model;

pub use model::*;
