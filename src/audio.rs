//! Sound cue system
//!
//! The simulation never touches an audio device. Managers request effects by
//! name and the `AudioManager` turns them into volume-resolved cues queued
//! for whatever platform layer drains them.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Enemy bullet hits the mothership
    Explosion1,
    /// Player bullet hits an enemy
    Explosion2,
    /// Enemy destroyed
    Explosion3,
    /// Player turret fires
    PlayerShoot,
    /// Enemy fires
    EnemyShoot,
}

impl SoundEffect {
    /// Relative volume preset applied on top of the requested volume.
    pub fn relative_volume(&self) -> f32 {
        match self {
            SoundEffect::Explosion1 => 1.0,
            SoundEffect::Explosion2 => 0.6,
            SoundEffect::Explosion3 => 0.5,
            SoundEffect::PlayerShoot => 0.4,
            SoundEffect::EnemyShoot => 0.5,
        }
    }
}

/// A queued playback request with its final volume resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    sound_volume: f32,
    music_volume: f32,
    queue: Vec<SoundCue>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            sound_volume: 1.0,
            music_volume: 1.0,
            queue: Vec::new(),
        }
    }

    /// Set master volumes for sound effects and music (0.0 - 1.0)
    pub fn change_volume(&mut self, sound_volume: f32, music_volume: f32) {
        self.sound_volume = sound_volume.clamp(0.0, 1.0);
        self.music_volume = music_volume.clamp(0.0, 1.0);
    }

    pub fn sound_volume(&self) -> f32 {
        self.sound_volume
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// Queue a sound effect at its preset volume.
    pub fn play(&mut self, effect: SoundEffect) {
        self.play_with_volume(effect, 1.0);
    }

    /// Queue a sound effect scaled by an extra volume factor.
    pub fn play_with_volume(&mut self, effect: SoundEffect, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        let final_volume = volume * effect.relative_volume() * self.sound_volume;
        if final_volume <= 0.0 {
            return;
        }
        log::debug!("sound cue: {:?} at {:.2}", effect, final_volume);
        self.queue.push(SoundCue {
            effect,
            volume: final_volume,
        });
    }

    /// Hand the queued cues to the platform layer, leaving the queue empty.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.queue)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
