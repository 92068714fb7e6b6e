//! Collision detection and response
//!
//! Walls and paddle planes are axis-aligned lines, so every check here is a
//! comparison on one coordinate plus the sign of the matching velocity
//! component. A ball that has overshot a line but is already heading back
//! is left alone.

use glam::Vec2;

use super::state::Side;
use crate::consts::*;

/// Result of checking the ball against a paddle plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleContact {
    /// Ball is not past a paddle plane while moving toward it
    Clear,
    /// Paddle returned the ball
    Hit { pos: Vec2, vel: Vec2 },
    /// Ball got past the paddle
    Miss,
}

/// Reflect vertical velocity off the top/bottom walls
///
/// Returns the new velocity if the ball is beyond a wall and still moving
/// further out.
pub fn wall_bounce(pos: Vec2, vel: Vec2) -> Option<Vec2> {
    let escaping = (pos.y > WALL_Y && vel.y > 0.0) || (pos.y < -WALL_Y && vel.y < 0.0);
    escaping.then(|| Vec2::new(vel.x, -vel.y))
}

/// Paddle plane the ball has crossed while moving toward it, if any
pub fn crossed_plane(pos: Vec2, vel: Vec2) -> Option<Side> {
    if pos.x > PADDLE_PLANE_X && vel.x > 0.0 {
        Some(Side::Right)
    } else if pos.x < -PADDLE_PLANE_X && vel.x < 0.0 {
        Some(Side::Left)
    } else {
        None
    }
}

/// Hit offset from paddle center: 0 = center, ±1 = edges
pub fn deviation(ball_y: f32, paddle_y: f32) -> f32 {
    (ball_y - paddle_y) / PADDLE_HALF_SIZE
}

/// Check the ball against the paddle guarding `side`'s plane
///
/// A hit reverses and speeds up the horizontal velocity (capped at
/// `BALL_MAX_SPEED`), sets the return angle from the hit offset and pins the
/// ball to the plane. Exactly `|deviation| == 1` is a miss.
pub fn paddle_contact(pos: Vec2, vel: Vec2, paddle_y: f32) -> PaddleContact {
    if crossed_plane(pos, vel).is_none() {
        return PaddleContact::Clear;
    }

    let offset = deviation(pos.y, paddle_y);
    if offset.abs() < 1.0 {
        let vx = -(vel.x * PADDLE_SPEEDUP).clamp(-BALL_MAX_SPEED, BALL_MAX_SPEED);
        let vy = offset * RETURN_ANGLE_SPEED;
        let x = pos.x.clamp(-PADDLE_PLANE_X, PADDLE_PLANE_X);
        PaddleContact::Hit {
            pos: Vec2::new(x, pos.y),
            vel: Vec2::new(vx, vy),
        }
    } else {
        PaddleContact::Miss
    }
}

/// Side awarded the point once a missed ball passes the out-of-bounds line
pub fn out_of_bounds(pos: Vec2) -> Option<Side> {
    if pos.x.abs() <= OUT_OF_BOUNDS_X {
        return None;
    }
    // Ball exited past the right paddle, so the left player scores
    if pos.x > 0.0 { Some(Side::Left) } else { Some(Side::Right) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bounce_top() {
        let vel = Vec2::new(0.001, 0.0007);
        let bounced = wall_bounce(Vec2::new(0.0, 1.01), vel);
        assert_eq!(bounced, Some(Vec2::new(0.001, -0.0007)));
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let bounced = wall_bounce(Vec2::new(0.3, -1.2), Vec2::new(-0.001, -0.0004));
        assert_eq!(bounced, Some(Vec2::new(-0.001, 0.0004)));
    }

    #[test]
    fn test_no_bounce_when_returning() {
        // Past the wall but already heading back in
        assert_eq!(wall_bounce(Vec2::new(0.0, 1.05), Vec2::new(0.0, -0.001)), None);
        // Exactly on the wall does not count as beyond it
        assert_eq!(wall_bounce(Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.001)), None);
        assert_eq!(wall_bounce(Vec2::new(0.0, 0.5), Vec2::new(0.0, 0.001)), None);
    }

    #[test]
    fn test_crossed_plane() {
        let right = Vec2::new(0.001, 0.0);
        let left = Vec2::new(-0.001, 0.0);
        assert_eq!(crossed_plane(Vec2::new(1.01, 0.0), right), Some(Side::Right));
        assert_eq!(crossed_plane(Vec2::new(-1.01, 0.0), left), Some(Side::Left));
        assert_eq!(crossed_plane(Vec2::new(1.01, 0.0), left), None);
        assert_eq!(crossed_plane(Vec2::new(0.99, 0.0), right), None);
    }

    #[test]
    fn test_paddle_hit_center() {
        let contact = paddle_contact(Vec2::new(1.02, 0.3), Vec2::new(0.002, 0.0004), 0.3);
        let PaddleContact::Hit { pos, vel } = contact else {
            panic!("expected hit, got {contact:?}");
        };
        assert_eq!(pos, Vec2::new(1.0, 0.3));
        assert!((vel.x - (-0.002 * PADDLE_SPEEDUP)).abs() < 1e-9);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_paddle_hit_offset_sets_angle() {
        // Upper half of the left paddle sends the ball upward
        let contact = paddle_contact(Vec2::new(-1.01, 0.075), Vec2::new(-0.001, 0.0), 0.0);
        let PaddleContact::Hit { pos, vel } = contact else {
            panic!("expected hit, got {contact:?}");
        };
        assert_eq!(pos.x, -1.0);
        assert!(vel.x > 0.0);
        assert!((vel.y - 0.5 * RETURN_ANGLE_SPEED).abs() < 1e-7);
    }

    #[test]
    fn test_paddle_hit_speed_cap() {
        let contact = paddle_contact(Vec2::new(1.05, 0.0), Vec2::new(0.0048, 0.0), 0.0);
        let PaddleContact::Hit { vel, .. } = contact else {
            panic!("expected hit, got {contact:?}");
        };
        assert_eq!(vel.x, -BALL_MAX_SPEED);
    }

    #[test]
    fn test_paddle_edge_is_miss() {
        // deviation == 1.0 exactly
        let contact = paddle_contact(
            Vec2::new(1.01, PADDLE_HALF_SIZE),
            Vec2::new(0.001, 0.0),
            0.0,
        );
        assert_eq!(contact, PaddleContact::Miss);
    }

    #[test]
    fn test_paddle_clear_away_from_plane() {
        let contact = paddle_contact(Vec2::new(0.5, 0.0), Vec2::new(0.001, 0.0), 0.0);
        assert_eq!(contact, PaddleContact::Clear);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(out_of_bounds(Vec2::new(1.3, 0.0)), None);
        assert_eq!(out_of_bounds(Vec2::new(OUT_OF_BOUNDS_X, 0.0)), None);
        assert_eq!(out_of_bounds(Vec2::new(1.41, 0.0)), Some(Side::Left));
        assert_eq!(out_of_bounds(Vec2::new(-1.41, 0.0)), Some(Side::Right));
    }
}
