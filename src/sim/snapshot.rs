//! Read-only view of the game handed to renderers

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// What a renderer gets to see each frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub left_score: u32,
    pub right_score: u32,
    pub left_paddle: f32,
    pub right_paddle: f32,
    pub ball_x: f32,
    pub ball_y: f32,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            left_score: state.left_score,
            right_score: state.right_score,
            left_paddle: state.left_paddle,
            right_paddle: state.right_paddle,
            ball_x: state.ball_pos.x,
            ball_y: state.ball_pos.y,
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Snapshot {
    /// Score line as shown in logs
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.left_score, self.right_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_snapshot_projects_visible_fields() {
        let mut state = GameState::new();
        state.left_score = 3;
        state.right_score = 7;
        state.left_paddle = -0.2;
        state.right_paddle = 0.4;
        state.ball_pos = Vec2::new(0.25, -0.5);

        let snap = state.snapshot();
        assert_eq!(
            snap,
            Snapshot {
                left_score: 3,
                right_score: 7,
                left_paddle: -0.2,
                right_paddle: 0.4,
                ball_x: 0.25,
                ball_y: -0.5,
            }
        );
        assert_eq!(snap.score_line(), "3 - 7");
    }

    #[test]
    fn test_snapshot_hides_internal_fields() {
        let json = serde_json::to_value(GameState::new().snapshot()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 6);
        assert!(!keys.iter().any(|k| k.contains("phase") || k.contains("vel")));
    }
}
