//! Enemy admission timer
//!
//! The base interval shrinks with the cube root of the score, so the first
//! points speed things up noticeably and later ones barely matter.

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_SCORE_CAP;

/// Effective admission interval for a given score (ms)
pub fn spawn_interval(base_interval: f32, score: i64) -> f32 {
    // Clamp keeps the divisor >= 1 for zero or negative scores
    let difficulty = (score as f32).clamp(1.0, SPAWN_SCORE_CAP);
    base_interval / difficulty.cbrt()
}

/// Decides when the next enemy enters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnController {
    pub timer: f32,
    pub base_interval: f32,
}

impl SpawnController {
    pub fn new(base_interval: f32) -> Self {
        Self {
            timer: 0.0,
            base_interval,
        }
    }

    pub fn interval(&self, score: i64) -> f32 {
        spawn_interval(self.base_interval, score)
    }

    /// Advance by `dt` ms. Returns true when one enemy should be admitted.
    /// The timer keeps running after game over, but nothing is admitted.
    pub fn advance(&mut self, dt: f32, score: i64, game_over: bool) -> bool {
        if self.timer > self.interval(score) && !game_over {
            self.timer = 0.0;
            true
        } else {
            self.timer += dt;
            false
        }
    }
}
