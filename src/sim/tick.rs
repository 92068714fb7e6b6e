//! Variable timestep simulation tick
//!
//! `tick` is pure: it reads the previous state and returns the next one along
//! with the events that happened in between. Any scheduler can drive it.

use glam::Vec2;

use super::collision::{PaddleContact, out_of_bounds, paddle_contact, wall_bounce};
use super::state::{GameEvent, GameState, Phase, Side};
use crate::consts::*;
use crate::{clamp_paddle, sign};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Milliseconds since the previous tick
    pub elapsed_ms: f32,
    /// Pointer motion since the previous tick (pixels). `x` drives the left
    /// paddle, `y` the right one.
    pub pointer: Vec2,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: GameState,
    /// In the order they happened
    pub events: Vec<GameEvent>,
}

/// Advance the game by `input.elapsed_ms`
pub fn tick(prev: &GameState, input: &TickInput) -> TickOutcome {
    let mut state = *prev;
    let mut events = Vec::new();
    // Time never runs backwards; NaN collapses to a zero-length tick
    let dt = input.elapsed_ms.max(0.0);

    // Paddles move even while the ball is frozen
    move_paddles(&mut state, finite_or_zero(input.pointer));

    match state.phase {
        Phase::Serving { remaining_ms } => {
            let remaining_ms = remaining_ms - dt;
            state.phase = if remaining_ms > 0.0 {
                Phase::Serving { remaining_ms }
            } else {
                Phase::RallyArmed
            };
        }

        Phase::RallyArmed | Phase::RallyUnarmed => {
            // Bounce before moving so a ball sitting on a wall can't be
            // carried further out
            if let Some(vel) = wall_bounce(state.ball_pos, state.ball_vel) {
                state.ball_vel = vel;
                events.push(GameEvent::WallBounce);
            }

            state.ball_pos += state.ball_vel * dt;

            if state.phase == Phase::RallyArmed {
                let side = Side::facing(state.ball_vel.x);
                match paddle_contact(state.ball_pos, state.ball_vel, state.paddle(side)) {
                    PaddleContact::Clear => {}
                    PaddleContact::Hit { pos, vel } => {
                        state.ball_pos = pos;
                        state.ball_vel = vel;
                        events.push(GameEvent::PaddleHit);
                    }
                    PaddleContact::Miss => {
                        state.phase = Phase::RallyUnarmed;
                    }
                }
            }

            if state.phase == Phase::RallyUnarmed {
                if let Some(scorer) = out_of_bounds(state.ball_pos) {
                    respawn(&mut state, scorer);
                    events.push(GameEvent::Score);
                }
            }
        }
    }

    TickOutcome { state, events }
}

/// Paddle controller: pointer motion times sensitivity, then clamp
fn move_paddles(state: &mut GameState, pointer: Vec2) {
    state.left_paddle = clamp_paddle(state.left_paddle + pointer.x * POINTER_SENSITIVITY);
    state.right_paddle = clamp_paddle(state.right_paddle + pointer.y * POINTER_SENSITIVITY);
}

/// Drop NaN and infinite components of a pointer delta
fn finite_or_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}

/// Award the point and freeze a fresh ball at center
///
/// The serve keeps the direction the ball was travelling in, so it heads
/// toward the player who just scored. A ball with no horizontal speed
/// takes its direction from the side it left through instead.
fn respawn(state: &mut GameState, scorer: Side) {
    state.award_point(scorer);
    state.phase = Phase::Serving {
        remaining_ms: RESPAWN_DELAY_MS,
    };
    let dir = if state.ball_vel.x != 0.0 {
        sign(state.ball_vel.x)
    } else {
        sign(state.ball_pos.x)
    };
    state.ball_vel = Vec2::new(dir * BALL_BASE_SPEED, -state.ball_vel.y);
    state.ball_pos.x = 0.0;
}
