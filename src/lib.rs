//! Angler Raid - A side-scrolling steampunk arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, spawning, scoring)
//! - `renderer`: Draw-command pass over the simulation state
//! - `audio`: Sound effect triggers and volume handling
//! - `input`: Logical keys and the held-key snapshot
//! - `settings` / `tuning`: Data-driven preferences and game balance
//! - `game`: Session wrapper tying the above together

pub mod audio;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1000.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Last column index of the player/enemy sprite sheets
    pub const SPRITE_MAX_FRAME: u32 = 37;

    /// Player sprite and movement
    pub const PLAYER_SIZE: Vec2 = Vec2::new(120.0, 190.0);
    pub const PLAYER_START: Vec2 = Vec2::new(20.0, 100.0);
    pub const PLAYER_MIN_X: f32 = 20.0;
    pub const PLAYER_MAX_SPEED: f32 = 2.0;
    /// Where bolts leave the sprite, relative to its top-left corner
    pub const MUZZLE_TOP: Vec2 = Vec2::new(80.0, 30.0);
    pub const MUZZLE_BOTTOM: Vec2 = Vec2::new(80.0, 175.0);

    /// Projectile defaults
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(10.0, 3.0);
    pub const PROJECTILE_SPEED: f32 = 3.0;

    /// Particle (gear debris) defaults
    pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    pub const PARTICLE_BOUNCE_DAMPING: f32 = 0.7;
    pub const PARTICLE_MAX_BOUNCES: u32 = 1;

    /// Explosion animation
    pub const EXPLOSION_SIZE: f32 = 200.0;
    pub const EXPLOSION_FPS: f32 = 30.0;
    pub const EXPLOSION_LAST_FRAME: u32 = 8;

    /// Parallax background
    pub const LAYER_WIDTH: f32 = 1768.0;
    pub const LAYER_HEIGHT: f32 = 500.0;
    pub const LAYER_SPEED_MODIFIERS: [f32; 4] = [0.5, 0.8, 1.2, 1.5];

    /// Enemies are placed within this fraction of the playfield height
    pub const ENEMY_SPAWN_HEIGHT_FACTOR: f32 = 0.95;
    /// Drones released by a destroyed hive
    pub const HIVE_DRONE_COUNT: usize = 5;

    /// Score is clamped to [1, SPAWN_SCORE_CAP] before scaling the spawn interval
    pub const SPAWN_SCORE_CAP: f32 = 200.0;

    /// Wall-clock delay after game over before a restart is accepted (ms)
    pub const RESTART_DELAY_MS: f64 = 5000.0;
}
