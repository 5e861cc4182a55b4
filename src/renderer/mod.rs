//! Rendering module
//!
//! Turns a `GameState` into an ordered list of draw commands. Pixels belong to
//! the host's [`Surface`]; nothing here mutates the simulation.

pub mod commands;
pub mod hud;
pub mod shapes;

pub use commands::{DrawCommand, SpriteId, Surface, TextAlign};

use crate::sim::GameState;

/// Draw one frame, back to front
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    for layer in &state.background.layers {
        shapes::layer(surface, layer);
    }
    if !state.game_over {
        hud::draw(surface, state);
    }
    shapes::player(surface, &state.player, state.debug);
    for particle in &state.particles {
        shapes::particle(surface, particle);
    }
    for enemy in &state.enemies {
        shapes::enemy(surface, enemy, state.debug);
    }
    for explosion in &state.explosions {
        shapes::explosion(surface, explosion);
    }
    if let Some(front) = state.background.foreground() {
        shapes::layer(surface, front);
    }
    // The end screen sits on top of everything
    if state.game_over {
        hud::draw(surface, state);
    }
}
