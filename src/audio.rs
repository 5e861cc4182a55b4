//! Audio triggers
//!
//! The simulation only names the effect; synthesis and playback belong to
//! whatever [`AudioSink`] the host plugs in. Playback is fire-and-forget.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player pulled the trigger (with or without ammo)
    Shoot,
    /// Lucky fish caught, power-up started
    PowerUp,
    /// Player rammed by an enemy
    Damage,
    /// Enemy destroyed by a bolt
    EnemyDestroyed,
}

impl SoundEffect {
    /// Synth preset name for sfxr-style generators
    pub fn preset(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "laserShoot",
            SoundEffect::PowerUp => "powerUp",
            SoundEffect::Damage => "explosion",
            SoundEffect::EnemyDestroyed => "laserShoot2",
        }
    }
}

/// Something that can play a sound effect at a given volume
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
}

/// Logs every trigger at debug level (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {} @ {:.2}", effect.preset(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullAudio))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build a manager with volumes taken from settings
    pub fn from_settings(sink: Box<dyn AudioSink>, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioSink for Shared {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    #[test]
    fn test_volume_applied() {
        let shared = Shared::default();
        let mut audio = AudioManager::new(Box::new(shared.clone()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::Shoot);

        let played = shared.0.borrow();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, SoundEffect::Shoot);
        assert!((played[0].1 - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_muted_skips_sink() {
        let shared = Shared::default();
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::from_settings(Box::new(shared.clone()), &settings);
        audio.play(SoundEffect::Damage);
        assert!(shared.0.borrow().is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(1.0);
        assert_eq!(audio.effective_volume(), 1.0);
    }
}
