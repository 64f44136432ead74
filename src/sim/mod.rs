//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update pass per frame tick, driven by the caller's elapsed-ms clock
//! - Seeded RNG only (enemy spawn parameters)
//! - Managers exclusively own their entity collections; cross-manager
//!   interaction is read + mutate-through-call, and removal always happens
//!   on the owning manager's own update pass
//! - No rendering or platform dependencies

pub mod bullet;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod explosion;
pub mod geometry;
pub mod mothership;
pub mod object;
pub mod score;
pub mod tick;
pub mod turret;
pub mod wave;

pub use bullet::{Bullet, BulletManager};
pub use camera::Camera;
pub use enemy::{Enemy, EnemyManager, EnemyState};
pub use explosion::{Explosion, ExplosionManager};
pub use geometry::{Circle, Rect};
pub use mothership::Mothership;
pub use object::GameObject;
pub use score::{Score, ScoreTracker};
pub use tick::{TickInput, World, tick};
pub use turret::{Turret, TurretManager};
pub use wave::WaveManager;
