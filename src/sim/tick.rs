//! Per-frame orchestration
//!
//! One `tick` is one frame: input is sampled once by the caller into a
//! `TickInput`, managers mutate their own collections in a fixed pass
//! order, and render consumers (HUD, minimap) read the settled state
//! afterwards without mutating anything.

use glam::Vec2;

use crate::audio::AudioManager;
use crate::settings::Settings;
use crate::sim::bullet::BulletManager;
use crate::sim::camera::Camera;
use crate::sim::collision;
use crate::sim::enemy::EnemyManager;
use crate::sim::explosion::ExplosionManager;
use crate::sim::mothership::Mothership;
use crate::sim::score::{Score, ScoreTracker};
use crate::sim::turret::{TurretInput, TurretManager};
use crate::sim::wave::WaveManager;

/// Input commands for a single tick, edge-detected upstream.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the next wave (Enter edge)
    pub start_wave: bool,
    /// Toggle pause (Escape edge)
    pub pause: bool,
    /// Cycle to the previous turret (Q edge)
    pub cycle_previous: bool,
    /// Cycle to the next turret (E edge)
    pub cycle_next: bool,
    /// Fire the active turret (left button held)
    pub fire: bool,
    /// Left button newly pressed (turret pick attempt)
    pub select_click: bool,
    /// Cursor position in screen coordinates
    pub cursor: Vec2,
    /// Held manual camera pan direction (unit components)
    pub pan: Vec2,
    /// Zoom wheel notches this frame
    pub zoom_delta: f32,
}

/// Everything the simulation owns for one game run.
#[derive(Debug, Clone)]
pub struct World {
    pub mothership: Mothership,
    pub camera: Camera,
    pub turrets: TurretManager,
    pub bullets: BulletManager,
    pub enemies: EnemyManager,
    pub waves: WaveManager,
    pub explosions: ExplosionManager,
    pub score: ScoreTracker,
    pub audio: AudioManager,
    paused: bool,
    game_over: bool,
}

impl World {
    pub fn new(seed: u64, viewport: Vec2, settings: &Settings) -> Self {
        let mothership = Mothership::new();
        let mut camera = Camera::new(viewport, settings);
        let turrets = TurretManager::new(&mothership, &mut camera, settings.turret_focus);
        let mut audio = AudioManager::new();
        audio.change_volume(settings.sound_volume, settings.music_volume);
        log::info!("world created with seed {seed}");
        Self {
            mothership,
            camera,
            turrets,
            bullets: BulletManager::new(),
            enemies: EnemyManager::new(seed),
            waves: WaveManager::new(),
            explosions: ExplosionManager::new(),
            score: ScoreTracker::new(),
            audio,
            paused: false,
            game_over: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Final score for the game-over and high-score screens.
    pub fn final_score(&self) -> Score {
        self.score.snapshot()
    }
}

/// Advance the world by one frame.
///
/// Pass order is fixed: waves decide spawning, enemies move or fire,
/// turrets read aim input and fire, bullets fly and expire, collisions
/// resolve, explosion animations advance, and the camera settles last so
/// every consumer sees one consistent transform per frame.
pub fn tick(world: &mut World, input: &TickInput, dt_ms: f64) {
    if input.pause && !world.game_over {
        world.paused = !world.paused;
    }
    if world.paused || world.game_over {
        return;
    }

    world.waves.update(
        input.start_wave,
        &mut world.enemies,
        &mut world.mothership,
        &mut world.bullets,
        &mut world.score,
    );

    world
        .enemies
        .update(dt_ms, &mut world.bullets, &mut world.score, &mut world.audio);

    let turret_input = TurretInput {
        fire: input.fire,
        select_click: input.select_click,
        cycle_previous: input.cycle_previous,
        cycle_next: input.cycle_next,
        cursor: input.cursor,
    };
    world.turrets.update(
        dt_ms,
        &turret_input,
        &mut world.camera,
        &mut world.bullets,
        &mut world.audio,
    );

    world.bullets.update(dt_ms);

    collision::resolve(
        &mut world.bullets,
        &mut world.enemies,
        &mut world.mothership,
        &mut world.explosions,
        &mut world.audio,
    );

    world.explosions.update();

    world.camera.update(input.pan, input.zoom_delta);

    if !world.mothership.is_alive() {
        world.game_over = true;
        let score = world.score.snapshot();
        log::info!(
            "game over: {} kills, {} waves, total {}",
            score.kills,
            score.wave,
            score.total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn world() -> World {
        World::new(1234, Vec2::new(800.0, 600.0), &Settings::default())
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_wave_start_spawns_enemies_over_ticks() {
        let mut w = world();
        let start = TickInput {
            start_wave: true,
            ..Default::default()
        };
        tick(&mut w, &start, 16.0);
        assert!(w.waves.wave_alive());

        for _ in 0..5 {
            tick(&mut w, &idle(), 16.0);
        }
        // Wave 1: quota 5, cap 3
        assert_eq!(w.enemies.alive_count(), 3);
        assert_eq!(w.waves.enemy_count(&w.enemies), 5);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut w = world();
        tick(
            &mut w,
            &TickInput {
                start_wave: true,
                ..Default::default()
            },
            16.0,
        );
        for _ in 0..5 {
            tick(&mut w, &idle(), 16.0);
        }
        let positions: Vec<_> = w.enemies.enemies().iter().map(|e| e.object.position).collect();

        tick(
            &mut w,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            16.0,
        );
        assert!(w.is_paused());
        for _ in 0..10 {
            tick(&mut w, &idle(), 16.0);
        }
        let frozen: Vec<_> = w.enemies.enemies().iter().map(|e| e.object.position).collect();
        assert_eq!(positions, frozen);

        // Unpause resumes movement
        tick(
            &mut w,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            16.0,
        );
        tick(&mut w, &idle(), 16.0);
        let moved: Vec<_> = w.enemies.enemies().iter().map(|e| e.object.position).collect();
        assert_ne!(positions, moved);
    }

    #[test]
    fn test_mothership_death_ends_game() {
        let mut w = world();
        w.mothership.object.die();
        tick(&mut w, &idle(), 16.0);
        assert!(w.is_game_over());

        // Further ticks are no-ops
        let score = w.final_score();
        tick(
            &mut w,
            &TickInput {
                start_wave: true,
                ..Default::default()
            },
            16.0,
        );
        assert!(!w.waves.wave_alive());
        assert_eq!(w.final_score(), score);
    }

    #[test]
    fn test_enemies_advance_toward_destination() {
        let mut w = world();
        tick(
            &mut w,
            &TickInput {
                start_wave: true,
                ..Default::default()
            },
            16.0,
        );
        tick(&mut w, &idle(), 16.0);
        let before = w.enemies.enemies()[0].object.position.length();
        for _ in 0..50 {
            tick(&mut w, &idle(), 16.0);
        }
        let after = w.enemies.enemies()[0].object.position.length();
        assert!(after < before);
    }

    #[test]
    fn test_full_round_trip_to_wave_clear() {
        let mut w = world();
        tick(
            &mut w,
            &TickInput {
                start_wave: true,
                ..Default::default()
            },
            16.0,
        );

        // Let the wave spawn everyone, then execute them all
        let mut guard = 0;
        while w.waves.wave_alive() && guard < 10_000 {
            if w.enemies.alive_count() > 0 && w.waves.enemies_to_spawn() == 0 {
                for enemy in w.enemies.enemies_mut() {
                    enemy.object.die();
                }
            } else if w.enemies.alive_count() == w.waves.max_enemies_at_once() {
                w.enemies.enemies_mut()[0].object.die();
            }
            tick(&mut w, &idle(), 16.0);
            guard += 1;
        }

        assert!(!w.waves.wave_alive());
        assert_eq!(w.score.waves_survived(), 1);
        assert_eq!(w.score.enemies_killed(), 5);
        // Shields restored, stray bullets swept
        assert_eq!(
            w.mothership.object.current_shields(),
            w.mothership.object.max_shields()
        );
        assert!(w.bullets.active().is_empty());
        assert_eq!(w.bullets.pooled_count(), BULLET_POOL_SIZE);
    }
}
