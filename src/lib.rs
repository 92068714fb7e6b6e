//! Mouse Pong - two paddles, one mouse
//!
//! Core modules:
//! - `sim`: Pure simulation (physics, collisions, scoring, snapshots)
//! - `session`: Start/stop lifecycle wiring the simulation to its collaborators
//! - `input`: Pointer delta accumulation
//! - `audio`: Event tones
//! - `renderer`: Snapshot drawing
//! - `platform`: Clocks and browser input plumbing

pub mod audio;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
///
/// Positions live on a normalized axis where the walls sit at `y = ±1` and
/// the paddle planes at `x = ±1`. Speeds are in units per millisecond.
pub mod consts {
    /// Paddle movement per pixel of pointer motion
    pub const POINTER_SENSITIVITY: f32 = 0.0015;

    /// Half the paddle length
    pub const PADDLE_HALF_SIZE: f32 = 0.15;
    /// Furthest a paddle center may travel from the middle
    pub const PADDLE_LIMIT: f32 = 1.0 - PADDLE_HALF_SIZE;

    /// Ball horizontal speed at every serve
    pub const BALL_BASE_SPEED: f32 = 0.0012;
    /// Horizontal speed cap
    pub const BALL_MAX_SPEED: f32 = 0.005;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_SPEEDUP: f32 = 1.1;
    /// Vertical speed given to a ball returned off the very edge of a paddle
    pub const RETURN_ANGLE_SPEED: f32 = 0.0015;

    /// Top/bottom walls
    pub const WALL_Y: f32 = 1.0;
    /// Paddle planes
    pub const PADDLE_PLANE_X: f32 = 1.0;
    /// A missed ball scores once it passes this distance from center
    pub const OUT_OF_BOUNDS_X: f32 = 1.4;

    /// Grace period before the first serve (ms)
    pub const INITIAL_SERVE_DELAY_MS: f32 = 5000.0;
    /// Grace period after each point (ms)
    pub const RESPAWN_DELAY_MS: f32 = 1000.0;
}

/// Clamp a paddle center into its legal travel range
#[inline]
pub fn clamp_paddle(pos: f32) -> f32 {
    pos.clamp(-consts::PADDLE_LIMIT, consts::PADDLE_LIMIT)
}

/// `x.signum()` but with zero staying zero
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_paddle() {
        assert_eq!(clamp_paddle(0.3), 0.3);
        assert_eq!(clamp_paddle(5.0), consts::PADDLE_LIMIT);
        assert_eq!(clamp_paddle(-5.0), -consts::PADDLE_LIMIT);
        assert_eq!(clamp_paddle(f32::INFINITY), consts::PADDLE_LIMIT);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(0.002), 1.0);
        assert_eq!(sign(-0.002), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
    }
}
