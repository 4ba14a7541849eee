//! Animation primitives for the landing page and the player disc.
//!
//! `interpolate` maps a driver value onto an output range, `Spring` smooths a
//! moving target and `Reveal` times the appear transition of in-view content.

mod interpolate;
mod reveal;
mod spring;

pub use interpolate::*;
pub use reveal::*;
pub use spring::*;
