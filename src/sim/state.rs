//! Game state and core simulation types
//!
//! The sim owns all gameplay state and is the only thing that mutates it,
//! either inside `tick` or synchronously through `trigger`. Everything is in
//! logical 640x360 units; rendering scales at the edge.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use crate::consts::*;
use crate::jump_velocity;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, waiting for the start intent
    Idle,
    /// Active gameplay
    Running,
    /// Frozen mid-run
    Paused,
    /// Run ended on a collision; only restart leaves this phase
    GameOver,
}

/// A discrete input command aimed at the sim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Pause,
    Resume,
    Restart,
    MoveLeft,
    MoveRight,
    StopMove,
    Jump,
}

/// Side-effect signal emitted by a phase transition or a tick
///
/// The sim stays pure; the loop driver maps cues onto audio and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Started,
    Paused,
    Resumed,
    Jumped,
    Scored,
    Collided,
    Reset,
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub jumping: bool,
}

impl Player {
    /// Centered horizontally, resting on the ground
    fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                BASE_WIDTH / 2.0 - SPRITE_SIZE / 2.0,
                GROUND_Y - SPRITE_SIZE,
            ),
            size: Vec2::splat(SPRITE_SIZE),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// An approaching obstacle
///
/// `speed` is captured at spawn time from the base speed and the multiplier
/// in force at that moment; it never re-scales afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state for one run
#[derive(Clone, PartialEq)]
pub struct GameState {
    /// Seed for reproducible spawn jitter
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Spawn order; removal never skips elements (single survivor pass)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Global difficulty scalar, non-decreasing over a run
    pub speed_multiplier: f32,
    /// Base per-obstacle speed, grows with difficulty
    pub obstacle_speed: f32,
    /// Base spawn cadence; the effective interval shrinks with the multiplier
    pub spawn_interval_ms: f32,
    /// Ticks until the next spawn; None until the first Running tick schedules it
    pub(crate) spawn_countdown: Option<u32>,
    pub time_ticks: u64,
    next_id: u32,
}

// Manual impl: Pcg32 keeps its internals opaque
impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("player", &self.player)
            .field("obstacles", &self.obstacles)
            .field("score", &self.score)
            .field("speed_multiplier", &self.speed_multiplier)
            .field("obstacle_speed", &self.obstacle_speed)
            .field("spawn_interval_ms", &self.spawn_interval_ms)
            .field("spawn_countdown", &self.spawn_countdown)
            .field("time_ticks", &self.time_ticks)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Fresh Idle state with the given jitter seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            player: Player::spawn(),
            obstacles: Vec::new(),
            score: 0,
            speed_multiplier: 1.0,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_countdown: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Reinitialize everything from the stored seed, back to Idle
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an obstacle at the right edge, speed frozen at spawn
    pub(crate) fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(BASE_WIDTH, GROUND_Y - SPRITE_SIZE),
            size: Vec2::splat(SPRITE_SIZE),
            speed: self.obstacle_speed * self.speed_multiplier,
        });
    }

    /// Apply a discrete intent, phase-gated; anything else is a no-op.
    ///
    /// Returns the cue the transition fires, if any.
    pub fn trigger(&mut self, intent: Intent) -> Option<Cue> {
        match (intent, self.phase) {
            (Intent::Start, GamePhase::Idle) => {
                self.phase = GamePhase::Running;
                Some(Cue::Started)
            }
            (Intent::Pause, GamePhase::Running) => {
                self.phase = GamePhase::Paused;
                Some(Cue::Paused)
            }
            (Intent::Resume, GamePhase::Paused) => {
                self.phase = GamePhase::Running;
                Some(Cue::Resumed)
            }
            (Intent::Restart, GamePhase::GameOver) => {
                self.reset();
                Some(Cue::Reset)
            }
            (Intent::MoveLeft, GamePhase::Running) => {
                self.player.vel.x = -MOVE_SPEED;
                None
            }
            (Intent::MoveRight, GamePhase::Running) => {
                self.player.vel.x = MOVE_SPEED;
                None
            }
            // Releasing movement is safe in any phase
            (Intent::StopMove, _) => {
                self.player.vel.x = 0.0;
                None
            }
            (Intent::Jump, GamePhase::Running) if !self.player.jumping => {
                self.player.vel.y = jump_velocity();
                self.player.jumping = true;
                Some(Cue::Jumped)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_at_base_difficulty() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.obstacle_speed, BASE_OBSTACLE_SPEED);
        assert_eq!(state.spawn_countdown, None);
        assert!(!state.player.jumping);
    }

    #[test]
    fn player_spawns_on_the_ground() {
        let state = GameState::new(7);
        let p = &state.player;
        assert_eq!(p.pos.y + p.size.y, GROUND_Y);
        assert_eq!(p.pos.x, BASE_WIDTH / 2.0 - SPRITE_SIZE / 2.0);
    }

    #[test]
    fn start_pause_resume_restart_cycle() {
        let mut state = GameState::new(7);

        assert_eq!(state.trigger(Intent::Start), Some(Cue::Started));
        assert_eq!(state.phase, GamePhase::Running);

        assert_eq!(state.trigger(Intent::Pause), Some(Cue::Paused));
        assert_eq!(state.phase, GamePhase::Paused);

        assert_eq!(state.trigger(Intent::Resume), Some(Cue::Resumed));
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::GameOver;
        assert_eq!(state.trigger(Intent::Restart), Some(Cue::Reset));
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn intents_are_rejected_outside_their_phase() {
        let mut state = GameState::new(7);

        // Idle: no pause, no resume, no restart, no movement, no jump
        assert_eq!(state.trigger(Intent::Pause), None);
        assert_eq!(state.trigger(Intent::Resume), None);
        assert_eq!(state.trigger(Intent::Restart), None);
        assert_eq!(state.trigger(Intent::Jump), None);
        assert_eq!(state.trigger(Intent::MoveLeft), None);
        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.phase, GamePhase::Idle);

        // GameOver: only restart works
        state.phase = GamePhase::GameOver;
        assert_eq!(state.trigger(Intent::Start), None);
        assert_eq!(state.trigger(Intent::Pause), None);
        assert_eq!(state.trigger(Intent::Jump), None);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn jump_while_airborne_is_a_noop() {
        let mut state = GameState::new(7);
        state.trigger(Intent::Start);

        assert_eq!(state.trigger(Intent::Jump), Some(Cue::Jumped));
        assert!(state.player.jumping);
        let dy = state.player.vel.y;

        assert_eq!(state.trigger(Intent::Jump), None);
        assert_eq!(state.player.vel.y, dy);
        assert!(state.player.jumping);
    }

    #[test]
    fn reset_matches_a_fresh_state() {
        let mut state = GameState::new(42);
        state.trigger(Intent::Start);
        state.trigger(Intent::MoveRight);
        state.spawn_obstacle();
        state.score = 12;
        state.speed_multiplier = 1.3;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state, GameState::new(42));
    }

    #[test]
    fn obstacle_speed_is_captured_at_spawn() {
        let mut state = GameState::new(7);
        state.spawn_obstacle();
        state.speed_multiplier = 2.0;
        state.obstacle_speed = 9.0;
        state.spawn_obstacle();

        assert_eq!(state.obstacles[0].speed, BASE_OBSTACLE_SPEED);
        assert_eq!(state.obstacles[1].speed, 18.0);
    }
}
