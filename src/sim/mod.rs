//! Simulation module
//!
//! All gameplay logic lives here. Rules of the road:
//! - Seeded RNG only (same seed + same inputs = same run)
//! - No rendering or platform dependencies
//! - Entities only flag themselves for deletion; owners sweep after each pass

pub mod collision;
pub mod effects;
pub mod enemy;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, Rect, check_collision};
pub use effects::{Explosion, ExplosionKind, Particle, Projectile};
pub use enemy::{Enemy, EnemyKind, EnemyStats};
pub use player::{Player, PlayerEvent};
pub use spawn::{SpawnController, spawn_interval};
pub use state::{Ammo, Background, FrameContext, GameState, Layer, Outcome};
pub use tick::{TickInput, tick};
