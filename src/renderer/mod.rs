//! Rendering module
//!
//! Renderers are a pure function of the `Snapshot` they are handed. They
//! never feed anything back into the simulation, and a renderer that fails
//! to draw logs it and carries on.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

use crate::consts::PADDLE_HALF_SIZE;
use crate::sim::Snapshot;

/// Anything that can present a snapshot
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Map a normalized coordinate in `[-1, 1]` to a percentage of the arena
#[inline]
pub fn to_percent(v: f32) -> f32 {
    v * 50.0 + 50.0
}

/// Snapshot projected onto the arena box, in percent
///
/// Positions are element centers; `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub ball_left: f32,
    pub ball_top: f32,
    pub left_paddle_top: f32,
    pub right_paddle_top: f32,
    /// Paddle length as a share of arena height
    pub paddle_height: f32,
}

impl Layout {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            ball_left: to_percent(snapshot.ball_x),
            ball_top: to_percent(snapshot.ball_y),
            left_paddle_top: to_percent(snapshot.left_paddle),
            right_paddle_top: to_percent(snapshot.right_paddle),
            paddle_height: PADDLE_HALF_SIZE * 100.0,
        }
    }
}

/// Logs the score whenever it changes (headless runs)
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_score: Option<(u32, u32)>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        let score = (snapshot.left_score, snapshot.right_score);
        if self.last_score != Some(score) {
            log::info!("Score {}", snapshot.score_line());
            self.last_score = Some(score);
        }
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "frame {}: {}",
                self.frames,
                serde_json::to_string(snapshot).unwrap_or_default()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_percent() {
        assert_eq!(to_percent(-1.0), 0.0);
        assert_eq!(to_percent(0.0), 50.0);
        assert_eq!(to_percent(1.0), 100.0);
    }

    #[test]
    fn test_layout_from_snapshot() {
        let snap = Snapshot {
            left_score: 0,
            right_score: 0,
            left_paddle: -0.5,
            right_paddle: 0.5,
            ball_x: 1.2,
            ball_y: 0.0,
        };
        let layout = Layout::from_snapshot(&snap);
        assert_eq!(layout.left_paddle_top, 25.0);
        assert_eq!(layout.right_paddle_top, 75.0);
        assert!((layout.ball_left - 110.0).abs() < 1e-4);
        assert_eq!(layout.ball_top, 50.0);
        assert!((layout.paddle_height - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new();
        let mut snap = Snapshot::default();
        renderer.draw(&snap);
        snap.left_score = 1;
        renderer.draw(&snap);
        renderer.draw(&snap);
        assert_eq!(renderer.frames(), 3);
        assert_eq!(renderer.last_score, Some((1, 0)));
    }
}
