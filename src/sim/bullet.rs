//! Bullet pool
//!
//! Bullets are pre-allocated into an inactive pool and migrate to the active
//! set when fired, never constructed per shot while pooled instances remain.
//! Expired and spent bullets go back to the pool instead of being dropped,
//! so the pool only grows when a frame genuinely needs more than it holds.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::sim::object::GameObject;

/// A projectile. Ownership decides its lifetime and collision target set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub object: GameObject,
    pub direction: Vec2,
    pub speed: f32,
    pub player_owned: bool,
}

impl Bullet {
    fn pooled() -> Self {
        Self {
            object: GameObject::new(Vec2::ZERO, Vec2::splat(BULLET_SIZE)),
            direction: Vec2::ZERO,
            speed: BULLET_SPEED,
            player_owned: false,
        }
    }

    /// Advance one tick: move by `direction * speed`, burn lifetime.
    pub fn update(&mut self, dt_ms: f64) {
        self.object.position += self.direction * self.speed;
        self.object.ttl_ms -= dt_ms;
    }

    /// Re-arm a pooled bullet at a new position and heading.
    fn arm(&mut self, position: Vec2, direction: Vec2) {
        self.object.position = position;
        self.direction = direction;
    }

    pub fn is_alive(&self) -> bool {
        self.object.is_alive()
    }
}

/// Owns every bullet in the game, pooled or in flight.
#[derive(Debug, Clone)]
pub struct BulletManager {
    inactive: Vec<Bullet>,
    active: Vec<Bullet>,
}

impl Default for BulletManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletManager {
    pub fn new() -> Self {
        let mut inactive = Vec::with_capacity(BULLET_POOL_SIZE);
        for _ in 0..BULLET_POOL_SIZE {
            inactive.push(Bullet::pooled());
        }
        Self {
            inactive,
            active: Vec::new(),
        }
    }

    pub fn active(&self) -> &[Bullet] {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut [Bullet] {
        &mut self.active
    }

    pub fn pooled_count(&self) -> usize {
        self.inactive.len()
    }

    /// Fire a bullet from `source`. Grows the pool by one if it ran dry -
    /// firing never fails.
    ///
    /// The bullet inherits the source's attack value and leaves along the
    /// source's forward vector rotated -90° (sprite orientation convention).
    pub fn fire(&mut self, source: &mut GameObject, player_owned: bool, audio: &mut AudioManager) {
        source.fired();

        let mut bullet = self.inactive.pop().unwrap_or_else(Bullet::pooled);

        bullet.object.attack = source.attack;
        bullet.player_owned = player_owned;
        if player_owned {
            audio.play(SoundEffect::PlayerShoot);
            bullet.object.ttl_ms = PLAYER_BULLET_TTL_MS;
        } else {
            audio.play(SoundEffect::EnemyShoot);
            bullet.object.ttl_ms = ENEMY_BULLET_TTL_MS;
        }
        bullet.arm(source.position, source.forward(-FRAC_PI_2));

        self.active.push(bullet);
    }

    /// Advance all active bullets and recycle every one that expired or was
    /// killed by a collision this frame.
    pub fn update(&mut self, dt_ms: f64) {
        for bullet in &mut self.active {
            bullet.update(dt_ms);
        }
        let mut index = 0;
        while index < self.active.len() {
            if self.active[index].is_alive() {
                index += 1;
            } else {
                let spent = self.active.swap_remove(index);
                self.inactive.push(spent);
            }
        }
    }

    /// Recycle every active bullet unconditionally (wave end - stray enemy
    /// bullets must not persist into downtime).
    pub fn clear_bullets(&mut self) {
        self.inactive.append(&mut self.active);
    }
}
