//! Enemy ships and their manager
//!
//! Enemies spawn on a ring far outside the mothership, fly radially inward
//! toward a destination just off its hull, brake, and once parked open fire.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::sim::bullet::BulletManager;
use crate::sim::geometry::Circle;
use crate::sim::object::GameObject;
use crate::sim::score::ScoreTracker;

/// Movement phase of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Moving at full speed toward the destination
    Approaching,
    /// Close to the destination, braking but still moving
    Slowing,
    /// Parked at the destination; the only state that fires
    Stopped,
}

/// A single attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub object: GameObject,
    /// Fixed heading computed once at spawn, toward the destination
    direction: Vec2,
    destination: Vec2,
    speed: f32,
    max_speed: f32,
    brake_speed: f32,
    pub state: EnemyState,
    /// Engine flame animation toggle; cosmetic but stateful
    pulse: bool,
    since_last_pulse_ms: f64,
}

impl Enemy {
    pub fn new(destination: Vec2, position: Vec2, fire_rate_ms: f64) -> Self {
        let mut object =
            GameObject::new(position, Vec2::splat(ENEMY_SIZE)).with_fire_rate(fire_rate_ms);
        let direction = (destination - position).normalize();
        // Sprites point "up"; forward(-π/2) must equal the travel direction
        object.set_rotation(direction.y.atan2(direction.x) + FRAC_PI_2);
        object.can_fire = true;
        Self {
            object,
            direction,
            destination,
            speed: 0.0,
            max_speed: 0.0,
            brake_speed: 0.0,
            state: EnemyState::Approaching,
            pulse: false,
            since_last_pulse_ms: 0.0,
        }
    }

    /// Set the travel speed (also establishes max speed for pulse scaling).
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.max_speed = speed;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    pub fn engine_pulse(&self) -> bool {
        self.pulse
    }

    fn distance_to_destination(&self) -> f32 {
        self.object.position.distance(self.destination)
    }

    fn travel(&mut self) {
        self.object.position += self.direction * self.speed;
    }

    /// Full-speed flight; hand over to braking inside the slow threshold.
    pub fn approach(&mut self) {
        self.travel();
        if self.distance_to_destination() < ENEMY_SLOW_DISTANCE {
            self.state = EnemyState::Slowing;
            self.brake_speed = self.speed * ENEMY_BRAKE_FACTOR;
        }
    }

    /// Braking flight; stop on zero speed or destination proximity,
    /// whichever comes first, so the ship never drifts past its mark.
    pub fn slow(&mut self) {
        self.travel();
        self.speed -= self.brake_speed;
        if self.speed < 0.0 || self.distance_to_destination() < ENEMY_STOP_DISTANCE {
            self.state = EnemyState::Stopped;
        }
    }

    /// Toggle the engine flame. The timer runs at a rate proportional to
    /// current speed over max speed, so the flicker dies down while braking.
    pub fn engine_update(&mut self, dt_ms: f64) {
        if ENGINE_PULSE_MS < self.since_last_pulse_ms {
            self.since_last_pulse_ms = 0.0;
            self.pulse = !self.pulse;
        } else if self.max_speed > 0.0 {
            self.since_last_pulse_ms += dt_ms * (self.speed / self.max_speed) as f64;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.object.is_alive()
    }
}

/// Owns every live enemy plus the seeded RNG their spawns draw from.
#[derive(Debug, Clone)]
pub struct EnemyManager {
    enemies: Vec<Enemy>,
    rng: Pcg32,
    /// Spawn-ring geometry; same circle as the mothership's bounding circle
    map_circle: Circle,
}

impl EnemyManager {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            enemies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            map_circle: Circle::new(0.0, 0.0, MOTHERSHIP_SIZE / 2.0),
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.len()
    }

    /// Spawn one enemy at a random angle on the outer ring, aimed at the
    /// matching point on the inner ring so the approach is radial.
    pub fn create_enemy(&mut self) {
        let angle = self.rng.random::<f32>() * TAU;
        let position = self.map_circle.position_on_edge(angle, SPAWN_RING_FACTOR);
        let destination = self.map_circle.position_on_edge(angle, DEST_RING_FACTOR);
        let speed = self.rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);

        let mut enemy = Enemy::new(destination, position, ENEMY_FIRE_RATE_MS);
        enemy.set_speed(speed);
        enemy.object.scale = ENEMY_SCALE;
        enemy.object.attack = ENEMY_ATTACK;
        enemy.object.set_max_hp_and_shields(0, ENEMY_HEALTH);
        self.enemies.push(enemy);
    }

    /// Advance every enemy one tick.
    ///
    /// Dead enemies are all reaped up front (each credits a kill and plays
    /// the death explosion), then survivors animate and dispatch on state.
    pub fn update(
        &mut self,
        dt_ms: f64,
        bullets: &mut BulletManager,
        score: &mut ScoreTracker,
        audio: &mut AudioManager,
    ) {
        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                score.enemy_killed();
                audio.play(SoundEffect::Explosion3);
                false
            }
        });

        for enemy in &mut self.enemies {
            enemy.engine_update(dt_ms);
            match enemy.state {
                EnemyState::Approaching => enemy.approach(),
                EnemyState::Slowing => enemy.slow(),
                EnemyState::Stopped => {
                    if enemy.object.can_fire {
                        bullets.fire(&mut enemy.object, false, audio);
                    }
                    enemy.object.update_fire_rate(dt_ms);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn push_for_test(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }
}
