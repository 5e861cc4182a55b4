//! Session wrapper
//!
//! Owns the authoritative `GameState` plus the collaborators around it. The
//! host calls `advance` then `render` once per animation frame.

use rand::Rng;

use crate::audio::{AudioManager, AudioSink};
use crate::consts::RESTART_DELAY_MS;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// A running game session
pub struct Game {
    state: GameState,
    settings: Settings,
    audio: AudioManager,
}

impl Game {
    pub fn new(
        width: f32,
        height: f32,
        settings: Settings,
        sink: Box<dyn AudioSink>,
        seed: u64,
    ) -> Self {
        let audio = AudioManager::from_settings(sink, &settings);
        let mut state = GameState::new(width, height, settings.tuning.clone(), seed);
        state.debug = settings.debug_overlay;
        Self { state, settings, audio }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the simulation by `dt` ms and forward triggered sounds
    pub fn advance(&mut self, input: &TickInput, dt: f32) {
        for effect in tick(&mut self.state, input, dt) {
            self.audio.play(effect);
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::render(&self.state, surface);
    }

    /// Throw the session away and start over on the same playfield
    pub fn reset(&mut self) {
        let seed = self.state.rng.random();
        self.reset_with_seed(seed);
    }

    pub fn reset_with_seed(&mut self, seed: u64) {
        let debug = self.state.debug;
        let (width, height) = (self.state.width, self.state.height);
        self.state = GameState::new(width, height, self.settings.tuning.clone(), seed);
        self.state.debug = debug;
        log::info!("Session reset");
    }

    /// Whether enough wall-clock time has passed since game over to restart
    pub fn can_restart(&self, now_ms: f64) -> bool {
        match self.state.game_over_at {
            Some(at) => self.state.game_over && now_ms > at + RESTART_DELAY_MS,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{NullAudio, SoundEffect};
    use crate::consts::*;
    use crate::input::Key;
    use crate::renderer::DrawCommand;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<SoundEffect>>>);

    impl AudioSink for Shared {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.borrow_mut().push(effect);
        }
    }

    fn game() -> Game {
        Game::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Settings::default(), Box::new(NullAudio), 77)
    }

    #[test]
    fn test_sounds_forwarded_to_sink() {
        let shared = Shared::default();
        let mut game = Game::new(
            PLAYFIELD_WIDTH,
            PLAYFIELD_HEIGHT,
            Settings::default(),
            Box::new(shared.clone()),
            1,
        );
        let fire = TickInput {
            keys: [Key::Fire].into_iter().collect(),
            ..Default::default()
        };
        // Cooldown starts at zero: 100ms of holding fire before the first shot
        for _ in 0..10 {
            game.advance(&fire, 16.0);
        }
        assert!(shared.0.borrow().contains(&SoundEffect::Shoot));
    }

    #[test]
    fn test_reset_keeps_playfield() {
        let mut game = Game::new(800.0, 400.0, Settings::default(), Box::new(NullAudio), 3);
        game.advance(&TickInput::default(), 5000.0);
        game.reset();
        let state = game.state();
        assert_eq!((state.width, state.height), (800.0, 400.0));
        assert_eq!(state.game_time, 0.0);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_restart_gate() {
        let mut game = game();
        assert!(!game.can_restart(1e9));

        let input = TickInput {
            now_ms: 10_000.0,
            ..Default::default()
        };
        game.advance(&input, game.state().tuning.time_limit_ms + 1.0);
        assert!(game.state().game_over);
        assert!(!game.can_restart(14_000.0));
        assert!(game.can_restart(15_001.0));
    }

    #[test]
    fn test_render_is_read_only() {
        let mut game = game();
        game.advance(&TickInput::default(), 16.0);
        let before = format!("{:?}", game.state());
        let mut out: Vec<DrawCommand> = Vec::new();
        game.render(&mut out);
        assert!(!out.is_empty());
        assert_eq!(format!("{:?}", game.state()), before);
    }

    #[test]
    fn test_debug_overlay_from_settings() {
        let settings = Settings {
            debug_overlay: true,
            ..Default::default()
        };
        let game = Game::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, settings, Box::new(NullAudio), 1);
        assert!(game.state().debug);
    }
}
