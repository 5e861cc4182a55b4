//! Game state and core simulation types
//!
//! One `GameState` is authoritative per session; reset builds a new one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{Explosion, Particle};
use super::enemy::Enemy;
use super::player::Player;
use super::spawn::SpawnController;
use crate::consts::*;
use crate::input::KeySet;
use crate::tuning::Tuning;

/// Read-only view of shared state handed to entities each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub width: f32,
    pub height: f32,
    /// World scroll speed (px/frame)
    pub scroll_speed: f32,
    /// Frame delta (ms)
    pub dt: f32,
    pub game_over: bool,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Ammo counter, always within `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ammo {
    current: f32,
    max: f32,
}

impl Ammo {
    pub fn new(current: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Whole rounds shown on the HUD (a partly regenerated round counts)
    pub fn bars(&self) -> u32 {
        self.current.ceil() as u32
    }

    pub fn spend_round(&mut self) {
        self.current = (self.current - 1.0).max(0.0);
    }

    pub fn add(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    /// Refill to the ceiling (never lowers)
    pub fn top_up(&mut self) {
        if self.current < self.max {
            self.current = self.max;
        }
    }
}

/// One parallax strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Index into the layer sprites (0 = farthest)
    pub index: usize,
    pub x: f32,
    pub speed_modifier: f32,
}

impl Layer {
    pub fn update(&mut self, scroll_speed: f32) {
        if self.x <= -LAYER_WIDTH {
            self.x = 0.0;
        }
        self.x -= scroll_speed * self.speed_modifier;
    }
}

/// Four parallax layers; the last is also drawn in front of everything
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub layers: Vec<Layer>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: LAYER_SPEED_MODIFIERS
                .iter()
                .enumerate()
                .map(|(index, &speed_modifier)| Layer {
                    index,
                    x: 0.0,
                    speed_modifier,
                })
                .collect(),
        }
    }
}

impl Background {
    pub fn update(&mut self, scroll_speed: f32) {
        for layer in &mut self.layers {
            layer.update(scroll_speed);
        }
    }

    pub fn foreground(&self) -> Option<&Layer> {
        self.layers.last()
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Stream position is saved, so a restored session draws the same numbers
    pub rng: Pcg32,
    /// Balance in force for this session
    pub tuning: Tuning,
    /// Playfield dimensions (fixed for the session)
    pub width: f32,
    pub height: f32,
    /// Elapsed game time (ms), frozen after game over
    pub game_time: f32,
    pub score: i64,
    pub game_over: bool,
    /// Host wall-clock time (ms) when the game ended
    pub game_over_at: Option<f64>,
    /// World scroll speed (px/frame)
    pub scroll_speed: f32,
    /// Keys held this frame
    pub keys: KeySet,
    pub ammo: Ammo,
    pub ammo_timer: f32,
    /// Hitbox overlay
    pub debug: bool,
    pub background: Background,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    pub spawner: SpawnController,
}

impl GameState {
    /// Create a new session on a `width` x `height` playfield
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        log::info!("New session {}x{} with seed {}", width, height, seed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            game_time: 0.0,
            score: 0,
            game_over: false,
            game_over_at: None,
            scroll_speed: tuning.scroll_speed,
            keys: KeySet::default(),
            ammo: Ammo::new(tuning.clamped_starting_ammo(), tuning.max_ammo),
            ammo_timer: 0.0,
            debug: false,
            background: Background::default(),
            player: Player::new(&tuning),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            spawner: SpawnController::new(tuning.enemy_interval_ms),
            tuning,
        }
    }

    /// Session on the default 1000x500 playfield
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Tuning::default(), seed)
    }

    pub fn frame_context(&self, dt: f32) -> FrameContext {
        FrameContext {
            width: self.width,
            height: self.height,
            scroll_speed: self.scroll_speed,
            dt,
            game_over: self.game_over,
        }
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Result of the session, once it is over
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        if self.score > self.tuning.winning_score {
            Some(Outcome::Won)
        } else {
            Some(Outcome::Lost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_bounds() {
        let mut ammo = Ammo::new(49.5, 50.0);
        ammo.add(3.0);
        assert_eq!(ammo.current(), 50.0);
        let mut empty = Ammo::new(0.4, 50.0);
        empty.spend_round();
        assert_eq!(empty.current(), 0.0);
        assert_eq!(Ammo::new(-3.0, 50.0).current(), 0.0);
        assert_eq!(Ammo::new(80.0, 50.0).current(), 50.0);
    }

    #[test]
    fn test_ammo_top_up_never_lowers() {
        let mut ammo = Ammo::new(12.0, 50.0);
        ammo.top_up();
        assert_eq!(ammo.current(), 50.0);
        assert_eq!(ammo.bars(), 50);
    }

    #[test]
    fn test_partial_round_shows_as_bar() {
        let ammo = Ammo::new(3.2, 50.0);
        assert_eq!(ammo.bars(), 4);
    }

    #[test]
    fn test_layers_scroll_at_own_speed_and_wrap() {
        let mut bg = Background::default();
        bg.update(1.0);
        let xs: Vec<f32> = bg.layers.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![-0.5, -0.8, -1.2, -1.5]);

        let layer = &mut bg.layers[0];
        layer.x = -LAYER_WIDTH;
        layer.update(1.0);
        assert_eq!(layer.x, -0.5);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::with_seed(1);
        assert_eq!(state.ammo.current(), 20.0);
        assert_eq!(state.ammo.max(), 50.0);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.outcome().is_none());
        assert_eq!(state.player.pos, PLAYER_START);
        assert_eq!(state.background.layers.len(), 4);
    }

    #[test]
    fn test_json_restore_continues_rng_stream() {
        use rand::Rng;

        let mut state = GameState::with_seed(42);
        let _: u64 = state.rng.random();
        let json = serde_json::to_string(&state).expect("serializable");
        let mut restored: GameState = serde_json::from_str(&json).expect("parseable");
        assert_eq!(restored.seed, 42);
        for _ in 0..8 {
            assert_eq!(restored.rng.random::<u64>(), state.rng.random::<u64>());
        }
    }

    #[test]
    fn test_outcome_needs_score_above_threshold() {
        let mut state = GameState::with_seed(1);
        state.game_over = true;
        state.score = 80;
        assert_eq!(state.outcome(), Some(Outcome::Lost));
        state.score = 81;
        assert_eq!(state.outcome(), Some(Outcome::Won));
    }
}
