//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and portable:
//! - Fixed timestep only, one tick per call
//! - Seeded RNG only
//! - Logical coordinate space only
//! - No rendering or platform dependencies

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{Rect, rects_overlap};
pub use state::{Cue, GamePhase, GameState, Intent, Obstacle, Player};
pub use tick::tick;
