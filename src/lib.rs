//! Dino Dash - a side-scrolling obstacle-dodging runner
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step simulation (physics, spawning, collision, phases)
//! - `viewport`: Logical 640x360 space mapped onto the physical canvas
//! - `input`: Key/pointer to intent routing and UI button hit testing
//! - `render`: Immediate-mode canvas-2D painting of a state snapshot
//! - `assets`: Image/audio registry with pending/ready/failed tracking
//! - `highscores`: LocalStorage-backed leaderboard

pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical design resolution; everything in the sim lives in this space
    pub const BASE_WIDTH: f32 = 640.0;
    pub const BASE_HEIGHT: f32 = 360.0;

    /// Player and obstacle sprites are square
    pub const SPRITE_SIZE: f32 = 64.0;
    /// Height of the ground band at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 30.0;
    /// Top of the ground; nothing rests below this line
    pub const GROUND_Y: f32 = BASE_HEIGHT - GROUND_HEIGHT;

    /// Nominal display refresh; one tick per callback
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Vertical acceleration while airborne, logical units per tick squared
    pub const GRAVITY: f32 = 1.0;
    /// Horizontal strafe speed, logical units per tick
    pub const MOVE_SPEED: f32 = 5.0;

    /// Obstacle approach speed before difficulty scaling, units per tick
    pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
    /// Base delay between spawns; jittered and scaled down as speed rises
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;

    /// Difficulty rises every this many points
    pub const SPEEDUP_SCORE_STEP: u32 = 5;
    /// Global multiplier increment at each difficulty step
    pub const SPEED_MULTIPLIER_STEP: f32 = 0.1;
    /// Base obstacle speed increment at each difficulty step
    pub const OBSTACLE_SPEED_STEP: f32 = 0.5;
}

/// Initial jump velocity, derived so the apex reaches 40% of the base height
/// under one unit of gravity per tick. Recomputed from the constants rather
/// than hardcoded.
#[inline]
pub fn jump_velocity() -> f32 {
    -(2.0 * consts::GRAVITY * consts::BASE_HEIGHT * 0.4).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_apex_reaches_40_percent_of_base_height() {
        let v0 = jump_velocity();
        assert!(v0 < 0.0);

        // Integrate the tick-discretized arc and find the apex rise
        let mut y = 0.0_f32;
        let mut dy = v0;
        let mut peak = 0.0_f32;
        for _ in 0..200 {
            dy += consts::GRAVITY;
            y += dy;
            peak = peak.min(y);
        }
        let apex = -peak;
        let target = consts::BASE_HEIGHT * 0.4;
        // Discrete integration lands within a tick's worth of the closed form
        assert!((apex - target).abs() < consts::BASE_HEIGHT * 0.05);
    }
}
