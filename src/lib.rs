//! Mothership - a wave-defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, waves, collisions, camera)
//! - `input`: Two-state keyboard/mouse diff sampled once per frame
//! - `audio`: Sound cue queue with per-effect volume presets
//! - `hud` / `minimap`: Read-only view models over the simulation
//! - `settings` / `highscores`: JSON persistence with default fallback

pub mod audio;
pub mod highscores;
pub mod hud;
pub mod input;
pub mod minimap;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Half-extent of the square world map (world spans ±MAP_HALF_EXTENT on both axes)
    pub const MAP_HALF_EXTENT: f32 = 2000.0;

    /// Mothership sprite footprint (bounding radius = half of this)
    pub const MOTHERSHIP_SIZE: f32 = 928.0;
    pub const MOTHERSHIP_MAX_HEALTH: i32 = 100;
    pub const MOTHERSHIP_MAX_SHIELDS: i32 = 50;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 600.0;
    pub const ENEMY_SCALE: f32 = 0.2;
    pub const ENEMY_HEALTH: i32 = 5;
    pub const ENEMY_ATTACK: i32 = 10;
    pub const ENEMY_FIRE_RATE_MS: f64 = 2500.0;
    /// Enemy spawn speed range (world units per tick)
    pub const ENEMY_SPEED_MIN: f32 = 3.0;
    pub const ENEMY_SPEED_MAX: f32 = 7.0;
    /// Distance from destination at which an enemy starts braking
    pub const ENEMY_SLOW_DISTANCE: f32 = 500.0;
    /// Destination proximity that forces a stop (prevents overshoot)
    pub const ENEMY_STOP_DISTANCE: f32 = 20.0;
    /// Per-tick brake amount as a fraction of speed at the moment braking starts
    pub const ENEMY_BRAKE_FACTOR: f32 = 0.005;
    /// Engine pulse period at full speed
    pub const ENGINE_PULSE_MS: f64 = 160.0;
    /// Spawn ring radius as a multiple of the mothership bounding radius
    pub const SPAWN_RING_FACTOR: f32 = 6.5;
    /// Destination ring radius as a multiple of the mothership bounding radius
    pub const DEST_RING_FACTOR: f32 = 1.1;

    /// Turret defaults
    pub const TURRET_COUNT: usize = 6;
    pub const TURRET_SIZE: f32 = 128.0;
    pub const TURRET_ATTACK: i32 = 3;
    pub const TURRET_FIRE_RATE_MS: f64 = 350.0;
    /// Turrets sit at 90% of the mothership radius from its center
    pub const TURRET_EDGE_FACTOR: f32 = 0.9;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 16.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_POOL_SIZE: usize = 100;
    pub const PLAYER_BULLET_TTL_MS: f64 = 1000.0;
    pub const ENEMY_BULLET_TTL_MS: f64 = 2000.0;

    /// Camera defaults
    pub const CAMERA_DEFAULT_ZOOM: f32 = 1.2;
    pub const CAMERA_ZOOM_MIN: f32 = 0.6;
    pub const CAMERA_ZOOM_MAX: f32 = 2.0;
    /// Fraction of remaining distance covered per tick while auto-panning
    pub const CAMERA_PAN_LERP: f32 = 0.05;
    /// Auto-pan stops once within this many world units of the target
    pub const CAMERA_PAN_EPSILON: f32 = 0.5;
    pub const CAMERA_ZOOM_SPEED_MIN: f32 = 0.01;
    pub const CAMERA_PAN_SPEED_MIN: f32 = 1.0;

    /// Minimap texture is square, this many pixels per side
    pub const MINIMAP_SIZE: f32 = 200.0;

    /// HUD hit indicator display time
    pub const HIT_INDICATOR_MS: f64 = 500.0;

    /// Explosion animation sheet layout
    pub const EXPLOSION_ROWS: u32 = 5;
    pub const EXPLOSION_COLS: u32 = 5;

    /// Score values
    pub const SCORE_PER_KILL: i32 = 10;
    pub const SCORE_PER_WAVE: i32 = 100;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI) - (-PI)).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn normalize_angle_in_range(angle in -100.0f32..100.0) {
            let n = normalize_angle(angle);
            prop_assert!((-PI..PI).contains(&n));
        }
    }
}
