//! Player module: the playlist, its tracks and the simulated playback state.
//!
//! Nothing here plays audio. `PlayerState` is a presentational clock plus the
//! flags the player view renders (volume, mute, like, playlist panel).

mod format;
mod playlist;
mod state;
mod track;

pub use format::*;
pub use playlist::*;
pub use state::*;
pub use track::*;
