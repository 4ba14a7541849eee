//! Landing page composer.
//!
//! The page is a fixed stack of sections with static copy. What moves is
//! derived from the scroll position: spring-smoothed hero drift, the
//! parallax band and per-section reveal transitions.

pub mod content;
mod form;
mod page;

pub use form::*;
pub use page::*;

#[cfg(test)]
mod tests;
