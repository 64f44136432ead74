//! Wave progression
//!
//! A wave is a spawn quota drained under a concurrency cap. The live count
//! is always read off the enemy manager's collection - the wave manager
//! never tracks it independently.

use serde::{Deserialize, Serialize};

use crate::sim::bullet::BulletManager;
use crate::sim::enemy::EnemyManager;
use crate::sim::mothership::Mothership;
use crate::sim::score::ScoreTracker;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveManager {
    wave_alive: bool,
    wave_number: i32,
    max_enemies_at_once: usize,
    enemies_to_spawn: i32,
}

impl Default for WaveManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveManager {
    pub fn new() -> Self {
        Self {
            wave_alive: false,
            wave_number: 0,
            max_enemies_at_once: 2,
            enemies_to_spawn: 0,
        }
    }

    pub fn wave_alive(&self) -> bool {
        self.wave_alive
    }

    pub fn wave_number(&self) -> i32 {
        self.wave_number
    }

    pub fn max_enemies_at_once(&self) -> usize {
        self.max_enemies_at_once
    }

    pub fn enemies_to_spawn(&self) -> i32 {
        self.enemies_to_spawn
    }

    /// Enemies remaining in the wave: live plus yet to spawn (HUD text).
    pub fn enemy_count(&self, enemies: &EnemyManager) -> i32 {
        enemies.alive_count() as i32 + self.enemies_to_spawn
    }

    /// Begin the next wave: bump the wave number, raise the concurrency cap
    /// by one, and seed the spawn quota at five enemies per wave number.
    pub fn start_wave(&mut self) {
        self.wave_alive = true;
        self.max_enemies_at_once += 1;
        self.wave_number += 1;
        self.enemies_to_spawn = self.wave_number * 5;
        log::info!(
            "wave {} started: {} to spawn, max {} at once",
            self.wave_number,
            self.enemies_to_spawn,
            self.max_enemies_at_once
        );
    }

    /// One tick of wave logic.
    ///
    /// While idle, `start_requested` (the Enter edge) launches the next
    /// wave. While active: the wave is cleared exactly when live + quota
    /// reaches zero - credit the survival, refill the mothership's shields,
    /// and sweep stray bullets; otherwise spawn one enemy whenever the live
    /// count is under the cap and quota remains.
    pub fn update(
        &mut self,
        start_requested: bool,
        enemies: &mut EnemyManager,
        mothership: &mut Mothership,
        bullets: &mut BulletManager,
        score: &mut ScoreTracker,
    ) {
        if !self.wave_alive {
            if start_requested {
                self.start_wave();
            }
            return;
        }

        let alive = enemies.alive_count() as i32;
        if alive + self.enemies_to_spawn == 0 {
            self.wave_alive = false;
            score.wave_survived();
            mothership.restore_shields(0);
            bullets.clear_bullets();
            log::info!("wave {} cleared", self.wave_number);
            return;
        }

        if (enemies.alive_count() as i32) < self.max_enemies_at_once as i32
            && self.enemies_to_spawn > 0
        {
            enemies.create_enemy();
            self.enemies_to_spawn -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;

    fn fixtures() -> (
        WaveManager,
        EnemyManager,
        Mothership,
        BulletManager,
        ScoreTracker,
        AudioManager,
    ) {
        (
            WaveManager::new(),
            EnemyManager::new(99),
            Mothership::new(),
            BulletManager::new(),
            ScoreTracker::new(),
            AudioManager::new(),
        )
    }

    #[test]
    fn test_first_wave_quota_and_cap() {
        let mut waves = WaveManager::new();
        waves.start_wave();
        assert!(waves.wave_alive());
        assert_eq!(waves.wave_number(), 1);
        assert_eq!(waves.enemies_to_spawn(), 5);
        assert_eq!(waves.max_enemies_at_once(), 3);
    }

    #[test]
    fn test_wave_n_quota_is_five_n() {
        let mut waves = WaveManager::new();
        for n in 1..=4 {
            let cap_before = waves.max_enemies_at_once();
            waves.start_wave();
            assert_eq!(waves.enemies_to_spawn(), n * 5);
            assert_eq!(waves.max_enemies_at_once(), cap_before + 1);
            // Drain the quota so the next start is clean
            waves.enemies_to_spawn = 0;
            waves.wave_alive = false;
        }
    }

    #[test]
    fn test_spawning_respects_concurrency_cap() {
        let (mut waves, mut enemies, mut ship, mut bullets, mut score, _audio) = fixtures();
        waves.start_wave();
        // Cap is 3 after the first start; spawn until throttled
        for _ in 0..10 {
            waves.update(false, &mut enemies, &mut ship, &mut bullets, &mut score);
        }
        assert_eq!(enemies.alive_count(), 3);
        assert_eq!(waves.enemies_to_spawn(), 2);
    }

    #[test]
    fn test_idle_without_start_does_nothing() {
        let (mut waves, mut enemies, mut ship, mut bullets, mut score, _audio) = fixtures();
        waves.update(false, &mut enemies, &mut ship, &mut bullets, &mut score);
        assert!(!waves.wave_alive());
        assert_eq!(enemies.alive_count(), 0);
    }

    #[test]
    fn test_wave_clear_awards_and_restores() {
        let (mut waves, mut enemies, mut ship, mut bullets, mut score, _audio) = fixtures();
        ship.take_damage(30);
        waves.start_wave();
        waves.enemies_to_spawn = 0;

        // No live enemies and no quota: this tick closes the wave
        waves.update(false, &mut enemies, &mut ship, &mut bullets, &mut score);

        assert!(!waves.wave_alive());
        assert_eq!(score.waves_survived(), 1);
        assert_eq!(ship.object.current_shields(), ship.object.max_shields());
    }

    #[test]
    fn test_full_wave_lifecycle() {
        let (mut waves, mut enemies, mut ship, mut bullets, mut score, mut audio) = fixtures();
        // Tighten the cap so the throttling is observable
        waves.max_enemies_at_once = 1;
        waves.start_wave(); // cap becomes 2, quota 5

        let mut spawned_total = 0;
        let mut max_concurrent = 0;
        for _ in 0..1000 {
            let before = enemies.alive_count();
            waves.update(false, &mut enemies, &mut ship, &mut bullets, &mut score);
            if enemies.alive_count() > before {
                spawned_total += 1;
            }
            max_concurrent = max_concurrent.max(enemies.alive_count());
            // Kill one enemy every few ticks to let the wave drain
            if enemies.alive_count() == 2
                || (waves.enemies_to_spawn() == 0 && enemies.alive_count() > 0)
            {
                enemies.enemies_mut()[0].object.die();
                // reap on the enemy manager's own pass
                enemies.update(16.0, &mut bullets, &mut score, &mut audio);
            }
            if !waves.wave_alive() {
                break;
            }
        }

        assert_eq!(spawned_total, 5);
        assert!(max_concurrent <= 2);
        assert!(!waves.wave_alive());
        assert_eq!(score.waves_survived(), 1);
    }
}
