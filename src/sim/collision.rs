//! Per-frame collision resolution
//!
//! Runs after every movement pass. Player bullets test against enemy
//! bounding circles, enemy bullets against the mothership. Hits are
//! collected during the scan and applied afterwards, so iteration never
//! mutates the collections it is walking; the owning managers reap the
//! killed bullets on their own next update.

use glam::Vec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::sim::bullet::BulletManager;
use crate::sim::enemy::EnemyManager;
use crate::sim::explosion::ExplosionManager;
use crate::sim::mothership::Mothership;

/// A resolved bullet hit, recorded during the scan.
#[derive(Debug, Clone, Copy)]
enum Hit {
    /// (bullet index, enemy index, damage, impact point)
    Enemy(usize, usize, i32, Vec2),
    /// (bullet index, damage, impact point)
    Mothership(usize, i32, Vec2),
}

/// Resolve every bullet-vs-target overlap for this frame.
///
/// All simultaneous hits resolve; a bullet is killed by its first hit and
/// cannot hit twice.
pub fn resolve(
    bullets: &mut BulletManager,
    enemies: &mut EnemyManager,
    mothership: &mut Mothership,
    explosions: &mut ExplosionManager,
    audio: &mut AudioManager,
) {
    let mothership_circle = mothership.object.circle();
    let mut hits = Vec::new();

    for (bullet_index, bullet) in bullets.active().iter().enumerate() {
        if !bullet.is_alive() {
            continue;
        }
        let bullet_circle = bullet.object.circle();

        if bullet.player_owned {
            for (enemy_index, enemy) in enemies.enemies().iter().enumerate() {
                if !enemy.is_alive() {
                    continue;
                }
                if enemy.object.circle().intersects(&bullet_circle) {
                    hits.push(Hit::Enemy(
                        bullet_index,
                        enemy_index,
                        bullet.object.attack,
                        bullet.object.position,
                    ));
                    // the bullet is spent; no further targets this frame
                    break;
                }
            }
        } else if bullet_circle.intersects(&mothership_circle) {
            hits.push(Hit::Mothership(
                bullet_index,
                bullet.object.attack,
                bullet.object.position,
            ));
        }
    }

    for hit in hits {
        match hit {
            Hit::Enemy(bullet_index, enemy_index, damage, impact) => {
                enemies.enemies_mut()[enemy_index].object.take_damage(damage);
                audio.play(SoundEffect::Explosion2);
                bullets.active_mut()[bullet_index].object.die();
                explosions.create_explosion(impact);
            }
            Hit::Mothership(bullet_index, damage, impact) => {
                mothership.take_damage(damage);
                audio.play(SoundEffect::Explosion1);
                bullets.active_mut()[bullet_index].object.die();
                explosions.create_explosion(impact);
            }
        }
    }
}
