//! Shared entity state
//!
//! Every world entity (bullet, enemy, turret, mothership) embeds a
//! `GameObject` rather than inheriting from one: position, rotation,
//! health/shields, lifetime, and the fire-rate gate all live here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_angle;
use crate::sim::geometry::{Circle, Rect};

/// Common state embedded in every entity variant.
///
/// An object is alive iff its time-to-live AND health are both positive.
/// `die` forces both negative, which is terminal - nothing revives an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    /// Position in world coordinates
    pub position: Vec2,
    /// Rotation in radians, normalized to [-π, π)
    pub rotation: f32,
    /// Uniform scale multiplier (affects bound and bounding circle)
    pub scale: f32,
    /// Sprite footprint in world units (width, height)
    pub size: Vec2,
    /// Damage dealt by bullets this object fires
    pub attack: i32,
    current_shields: i32,
    max_shields: i32,
    current_health: i32,
    max_health: i32,
    /// Remaining lifetime in milliseconds
    pub ttl_ms: f64,
    /// Minimum interval between shots; 0 disables the fire-rate gate
    fire_rate_ms: f64,
    since_last_fire_ms: f64,
    /// Open when enough time has passed since the last shot
    pub can_fire: bool,
}

impl GameObject {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: 1.0,
            size,
            attack: 0,
            current_shields: 1,
            max_shields: 1,
            current_health: 1,
            max_health: 1,
            ttl_ms: 1.0,
            fire_rate_ms: 0.0,
            since_last_fire_ms: 0.0,
            can_fire: false,
        }
    }

    pub fn with_fire_rate(mut self, fire_rate_ms: f64) -> Self {
        self.fire_rate_ms = fire_rate_ms;
        self
    }

    pub fn current_shields(&self) -> i32 {
        self.current_shields
    }

    pub fn max_shields(&self) -> i32 {
        self.max_shields
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Set new maximums and heal to full. Not for use mid-fight.
    pub fn set_max_hp_and_shields(&mut self, new_max_shields: i32, new_max_health: i32) {
        self.current_shields = new_max_shields;
        self.max_shields = new_max_shields;
        self.current_health = new_max_health;
        self.max_health = new_max_health;
    }

    /// Raise max shields by `increase` and refill to max.
    pub fn restore_shields(&mut self, increase: i32) {
        self.max_shields += increase;
        self.current_shields = self.max_shields;
    }

    /// Alive iff both lifetime and health are positive.
    pub fn is_alive(&self) -> bool {
        self.ttl_ms > 0.0 && self.current_health > 0
    }

    /// Force the object dead. Idempotent and irreversible.
    pub fn die(&mut self) {
        self.current_health = -1;
        self.ttl_ms = -1.0;
    }

    /// Shields absorb first; damage past the shields spills into health in
    /// the same application. Shields floor at zero. Health below zero kills.
    pub fn take_damage(&mut self, incoming: i32) {
        if self.current_shields > 0 {
            self.current_shields -= incoming;
            if self.current_shields < 0 {
                // spillage: the negative remainder comes out of health
                self.current_health += self.current_shields;
                self.current_shields = 0;
            }
        } else {
            self.current_health -= incoming;
        }

        if self.current_health < 0 {
            self.die();
        }
    }

    /// Axis-aligned bound from the scaled footprint, centered on position.
    pub fn bound(&self) -> Rect {
        let half = self.size * self.scale / 2.0;
        Rect::new(
            self.position.x - half.x,
            self.position.y - half.y,
            self.size.x * self.scale,
            self.size.y * self.scale,
        )
    }

    /// Bounding circle: radius is the larger half-extent times scale.
    pub fn circle(&self) -> Circle {
        Circle::new(
            self.position.x,
            self.position.y,
            self.size.max_element() / 2.0 * self.scale,
        )
    }

    /// Close the fire gate after a shot.
    pub fn fired(&mut self) {
        self.can_fire = false;
        self.since_last_fire_ms = 0.0;
    }

    /// Accumulate cooldown time; opens the gate once the interval elapses.
    pub fn update_fire_rate(&mut self, dt_ms: f64) {
        if self.fire_rate_ms != 0.0 {
            if self.fire_rate_ms < self.since_last_fire_ms {
                self.since_last_fire_ms = 0.0;
                self.can_fire = true;
            } else {
                self.since_last_fire_ms += dt_ms;
            }
        }
    }

    /// Unit vector for this object's rotation plus `offset` radians.
    pub fn forward(&self, offset: f32) -> Vec2 {
        let angle = self.rotation + offset;
        Vec2::new(angle.cos(), angle.sin())
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = normalize_angle(rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn object() -> GameObject {
        GameObject::new(Vec2::ZERO, Vec2::splat(100.0))
    }

    #[test]
    fn test_alive_requires_health_and_ttl() {
        let mut o = object();
        o.set_max_hp_and_shields(0, 10);
        assert!(o.is_alive());
        o.ttl_ms = 0.0;
        assert!(!o.is_alive());
        o.ttl_ms = 1.0;
        o.take_damage(10);
        assert!(!o.is_alive());
    }

    #[test]
    fn test_die_is_idempotent_and_permanent() {
        let mut o = object();
        o.set_max_hp_and_shields(5, 10);
        o.die();
        assert!(!o.is_alive());
        o.die();
        assert!(!o.is_alive());
        assert_eq!(o.current_health(), -1);
    }

    #[test]
    fn test_damage_spills_from_shields_to_health() {
        let mut o = object();
        o.set_max_hp_and_shields(10, 20);
        o.take_damage(15);
        assert_eq!(o.current_shields(), 0);
        assert_eq!(o.current_health(), 15);
    }

    #[test]
    fn test_damage_hits_health_when_shields_depleted() {
        let mut o = object();
        o.set_max_hp_and_shields(0, 20);
        o.take_damage(5);
        assert_eq!(o.current_health(), 15);
        assert_eq!(o.current_shields(), 0);
    }

    #[test]
    fn test_lethal_damage_kills() {
        let mut o = object();
        o.set_max_hp_and_shields(0, 5);
        o.take_damage(10);
        assert!(!o.is_alive());
    }

    #[test]
    fn test_restore_shields_with_increase() {
        let mut o = object();
        o.set_max_hp_and_shields(50, 100);
        o.take_damage(30);
        assert_eq!(o.current_shields(), 20);
        o.restore_shields(10);
        assert_eq!(o.max_shields(), 60);
        assert_eq!(o.current_shields(), 60);
    }

    #[test]
    fn test_fire_rate_gate() {
        let mut o = object().with_fire_rate(350.0);
        assert!(!o.can_fire);
        // 350ms has not elapsed yet
        o.update_fire_rate(200.0);
        assert!(!o.can_fire);
        o.update_fire_rate(200.0);
        // 400ms accumulated > 350ms: next check opens the gate
        o.update_fire_rate(0.0);
        assert!(o.can_fire);
        o.fired();
        assert!(!o.can_fire);
    }

    #[test]
    fn test_fire_rate_zero_never_opens() {
        let mut o = object();
        o.update_fire_rate(10_000.0);
        assert!(!o.can_fire);
    }

    #[test]
    fn test_forward_with_bullet_offset() {
        let mut o = object();
        // Rotation π/2 with a -π/2 offset points along +X
        o.set_rotation(FRAC_PI_2);
        let dir = o.forward(-FRAC_PI_2);
        assert!((dir.x - 1.0).abs() < 1e-5);
        assert!(dir.y.abs() < 1e-5);
    }

    #[test]
    fn test_bound_and_circle_respect_scale() {
        let mut o = GameObject::new(Vec2::new(10.0, 10.0), Vec2::new(600.0, 400.0));
        o.scale = 0.2;
        let b = o.bound();
        assert!((b.w - 120.0).abs() < 1e-3);
        assert!((b.h - 80.0).abs() < 1e-3);
        assert!((b.x - (10.0 - 60.0)).abs() < 1e-3);
        let c = o.circle();
        assert!((c.radius - 60.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn damage_never_leaves_negative_shields(
            shields in 0i32..100, health in 1i32..100, dmg in 0i32..300,
        ) {
            let mut o = object();
            o.set_max_hp_and_shields(shields, health);
            o.take_damage(dmg);
            prop_assert!(o.current_shields() >= 0);
            // total absorbed never exceeds the incoming damage
            let lost = (shields - o.current_shields()) + (health - o.current_health());
            prop_assert!(lost == dmg || !o.is_alive());
        }
    }
}
