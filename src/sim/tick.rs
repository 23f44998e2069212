//! Fixed-step simulation tick
//!
//! One call advances exactly one tick; the loop driver calls it once per
//! display-refresh callback with no elapsed-time scaling, so sim speed is
//! coupled to the achieved frame rate. That coupling is a deliberate
//! characteristic of the game feel, not something to "fix" with
//! variable-step integration.

use rand::Rng;

use super::geom::rects_overlap;
use super::state::{Cue, GamePhase, GameState};
use crate::consts::*;

/// Advance the game by one tick. No-op unless the phase is Running.
///
/// Returns the side-effect cues the tick produced, in the order they fired.
pub fn tick(state: &mut GameState) -> Vec<Cue> {
    let mut cues = Vec::new();
    if state.phase != GamePhase::Running {
        return cues;
    }

    state.time_ticks += 1;

    // Horizontal strafe, clamped to the viewport
    let player = &mut state.player;
    player.pos.x += player.vel.x;
    player.pos.x = player.pos.x.clamp(0.0, BASE_WIDTH - player.size.x);

    // Jump arc: gravity first, then integrate, then ground clamp
    if player.jumping {
        player.vel.y += GRAVITY;
    }
    player.pos.y += player.vel.y;
    if player.pos.y + player.size.y >= GROUND_Y {
        player.pos.y = GROUND_Y - player.size.y;
        player.jumping = false;
        player.vel.y = 0.0;
    }

    advance_spawner(state);

    // Single survivor pass over the obstacles. The off-screen exit check
    // precedes the collision check for each obstacle, so an obstacle can
    // never both score and collide in the same tick.
    let player_box = state.player.bounds();
    let mut collided = false;
    let obstacles = std::mem::take(&mut state.obstacles);
    let mut survivors = Vec::with_capacity(obstacles.len());
    for mut obstacle in obstacles {
        obstacle.pos.x -= obstacle.speed;

        if obstacle.pos.x + obstacle.size.x <= 0.0 {
            state.score += 1;
            cues.push(Cue::Scored);
            apply_difficulty_step(state);
            continue;
        }

        if !collided && rects_overlap(&player_box, &obstacle.bounds()) {
            collided = true;
        }
        survivors.push(obstacle);
    }
    state.obstacles = survivors;

    if collided {
        state.phase = GamePhase::GameOver;
        cues.push(Cue::Collided);
    }

    cues
}

/// Self-rescheduling spawner with jitter, folded into the tick so it can
/// only ever fire during a Running tick: no spawns while paused, no catch-up
/// burst after a resume, stops dead on game over.
fn advance_spawner(state: &mut GameState) {
    let remaining = match state.spawn_countdown {
        // First Running tick of a run schedules the opening spawn
        None => next_spawn_delay(state),
        Some(n) if n > 1 => n - 1,
        Some(_) => {
            state.spawn_obstacle();
            next_spawn_delay(state)
        }
    };
    state.spawn_countdown = Some(remaining);
}

/// Uniform draw from [interval/2, interval], where the interval shrinks as
/// the speed multiplier rises, so spawn density tracks difficulty.
fn next_spawn_delay(state: &mut GameState) -> u32 {
    let interval_ms = state.spawn_interval_ms / state.speed_multiplier;
    let interval = ((interval_ms / 1000.0) * TICKS_PER_SECOND).round() as u32;
    let min = (interval / 2).max(1);
    let max = interval.max(min);
    state.rng.random_range(min..=max)
}

/// Checked once per obstacle removal, not per tick: each time the score
/// lands on a positive multiple of the step, difficulty rises by the fixed
/// increments.
fn apply_difficulty_step(state: &mut GameState) {
    if state.score > 0 && state.score % SPEEDUP_SCORE_STEP == 0 {
        state.speed_multiplier += SPEED_MULTIPLIER_STEP;
        state.obstacle_speed += OBSTACLE_SPEED_STEP;
    }
}
