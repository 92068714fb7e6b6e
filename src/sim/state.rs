//! Game state and core simulation types
//!
//! Everything the tick function reads and writes lives here. The pointer
//! accumulator deliberately does not: deltas arrive between ticks and are
//! handed to `tick` through `TickInput`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a rally
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball frozen at the serve position, counting down
    Serving { remaining_ms: f32 },
    /// Ball in flight, can still be returned on this crossing
    RallyArmed,
    /// Ball already missed, travelling out of bounds
    RallyUnarmed,
}

/// Feedback emitted by a tick, consumed by audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball returned by a paddle
    PaddleHit,
    /// Ball left the arena, a point was awarded
    Score,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The paddle plane a ball moving along `vx` is approaching
    pub fn facing(vx: f32) -> Self {
        if vx > 0.0 { Side::Right } else { Side::Left }
    }
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub left_score: u32,
    pub right_score: u32,
    /// Left paddle center (vertical offset)
    pub left_paddle: f32,
    /// Right paddle center (vertical offset)
    pub right_paddle: f32,
    pub ball_pos: Vec2,
    /// Units per millisecond
    pub ball_vel: Vec2,
    pub phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session: centered paddles and ball, first serve toward the right
    pub fn new() -> Self {
        Self {
            left_score: 0,
            right_score: 0,
            left_paddle: 0.0,
            right_paddle: 0.0,
            ball_pos: Vec2::ZERO,
            ball_vel: Vec2::new(BALL_BASE_SPEED, 0.0),
            phase: Phase::Serving {
                remaining_ms: INITIAL_SERVE_DELAY_MS,
            },
        }
    }

    /// Time left before the ball moves again, zero during a rally
    pub fn respawn_timer(&self) -> f32 {
        match self.phase {
            Phase::Serving { remaining_ms } => remaining_ms.max(0.0),
            _ => 0.0,
        }
    }

    /// Whether the current crossing can still register a paddle hit
    pub fn collision_armed(&self) -> bool {
        !matches!(self.phase, Phase::RallyUnarmed)
    }

    pub fn is_serving(&self) -> bool {
        matches!(self.phase, Phase::Serving { .. })
    }

    pub fn paddle(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Award a point, saturating rather than wrapping
    pub fn award_point(&mut self, side: Side) {
        let score = match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score = score.saturating_add(1);
    }
}
