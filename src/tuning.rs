//! Data-driven game balance
//!
//! Every number a designer might want to tweak between sessions. Entity
//! geometry lives in [`crate::consts`]; this is the pacing of a run.

use serde::{Deserialize, Serialize};

/// Gameplay balance for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Session length before the timeout check kicks in (ms)
    pub time_limit_ms: f32,
    /// Score the player must stay at or above to survive the timeout
    pub winning_score: i64,
    /// Ammo at session start
    pub starting_ammo: f32,
    /// Ammo ceiling
    pub max_ammo: f32,
    /// Passive regeneration: one round per interval (ms)
    pub ammo_interval_ms: f32,
    /// Base enemy admission interval before difficulty scaling (ms)
    pub enemy_interval_ms: f32,
    /// World scroll speed (px/frame)
    pub scroll_speed: f32,
    /// Firing cooldown (ms)
    pub shoot_interval_ms: f32,
    /// Power-up lifetime (ms)
    pub power_up_duration_ms: f32,
    /// Extra ammo trickled in every frame while powered up
    pub power_up_ammo_regen: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            time_limit_ms: 30_000.0,
            winning_score: 80,
            starting_ammo: 20.0,
            max_ammo: 50.0,
            ammo_interval_ms: 350.0,
            enemy_interval_ms: 2000.0,
            scroll_speed: 1.0,
            shoot_interval_ms: 100.0,
            power_up_duration_ms: 10_000.0,
            power_up_ammo_regen: 0.1,
        }
    }
}

impl Tuning {
    /// Starting ammo, never above the ceiling
    pub fn clamped_starting_ammo(&self) -> f32 {
        self.starting_ammo.clamp(0.0, self.max_ammo.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_arcade_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.winning_score, 80);
        assert_eq!(tuning.starting_ammo, 20.0);
        assert_eq!(tuning.max_ammo, 50.0);
        assert_eq!(tuning.time_limit_ms, 30_000.0);
    }

    #[test]
    fn test_starting_ammo_clamped_to_ceiling() {
        let tuning = Tuning {
            starting_ammo: 80.0,
            max_ammo: 50.0,
            ..Default::default()
        };
        assert_eq!(tuning.clamped_starting_ammo(), 50.0);
    }
}
