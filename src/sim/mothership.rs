//! The defended base entity at the center of the world

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::object::GameObject;

/// The player's singular defended entity.
///
/// Tracks a one-shot `took_damage` flag the HUD consumes each frame to
/// trigger its transient hit indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mothership {
    pub object: GameObject,
    took_damage: bool,
}

impl Default for Mothership {
    fn default() -> Self {
        Self::new()
    }
}

impl Mothership {
    pub fn new() -> Self {
        let mut object = GameObject::new(Vec2::ZERO, Vec2::splat(MOTHERSHIP_SIZE));
        object.set_max_hp_and_shields(MOTHERSHIP_MAX_SHIELDS, MOTHERSHIP_MAX_HEALTH);
        Self {
            object,
            took_damage: false,
        }
    }

    /// Apply damage and raise the hit-indicator flag.
    pub fn take_damage(&mut self, incoming: i32) {
        self.took_damage = true;
        self.object.take_damage(incoming);
    }

    /// Refill shields to max, optionally raising the max first.
    /// Called at the end of every cleared wave.
    pub fn restore_shields(&mut self, increase_max_by: i32) {
        self.object.restore_shields(increase_max_by);
    }

    /// Read and clear the one-shot hit flag. Consumed by the HUD once per frame.
    pub fn consume_took_damage(&mut self) -> bool {
        std::mem::take(&mut self.took_damage)
    }

    pub fn is_alive(&self) -> bool {
        self.object.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full_strength() {
        let ship = Mothership::new();
        assert_eq!(ship.object.current_health(), MOTHERSHIP_MAX_HEALTH);
        assert_eq!(ship.object.current_shields(), MOTHERSHIP_MAX_SHIELDS);
        assert!(ship.is_alive());
        assert!((ship.object.circle().radius - MOTHERSHIP_SIZE / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_took_damage_flag_is_one_shot() {
        let mut ship = Mothership::new();
        ship.take_damage(10);
        assert!(ship.consume_took_damage());
        assert!(!ship.consume_took_damage());
    }

    #[test]
    fn test_wave_clear_restores_shields() {
        let mut ship = Mothership::new();
        ship.take_damage(40);
        assert_eq!(ship.object.current_shields(), 10);
        ship.restore_shields(0);
        assert_eq!(ship.object.current_shields(), MOTHERSHIP_MAX_SHIELDS);
    }
}
