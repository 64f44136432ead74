//! Minimap coordinate mapping
//!
//! Scales world positions down onto a square minimap texture and projects
//! the camera's visible region as a box. Pure math - the renderer decides
//! where on screen the map actually sits.

use glam::Vec2;

use crate::consts::{MAP_HALF_EXTENT, MINIMAP_SIZE};
use crate::sim::camera::Camera;
use crate::sim::enemy::EnemyManager;
use crate::sim::geometry::Rect;

/// World-to-minimap projection.
#[derive(Debug, Clone)]
pub struct Minimap {
    /// World units per minimap pixel
    world_to_map: f32,
    /// Minimap-space bounds, centered on the map origin
    bounds: Rect,
}

impl Default for Minimap {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimap {
    pub fn new() -> Self {
        let world_to_map = MAP_HALF_EXTENT / (MINIMAP_SIZE / 2.0);
        let half = MAP_HALF_EXTENT / world_to_map;
        Self {
            world_to_map,
            bounds: Rect::new(-half, -half, half * 2.0, half * 2.0),
        }
    }

    pub fn world_to_map(&self) -> f32 {
        self.world_to_map
    }

    /// Map a world position into minimap coordinates (origin at map center).
    pub fn project(&self, world: Vec2) -> Vec2 {
        world / self.world_to_map
    }

    /// Enemy dot positions, dropping anything outside the map bounds.
    pub fn enemy_dots(&self, enemies: &EnemyManager) -> Vec<Vec2> {
        enemies
            .enemies()
            .iter()
            .map(|enemy| self.project(enemy.object.position))
            .filter(|dot| self.bounds.contains(*dot))
            .collect()
    }

    /// The camera's visible world region as a minimap-space box, clamped to
    /// the map edges. Built from the screen corners pushed through the
    /// camera's inverse transform.
    pub fn camera_box(&self, camera: &Camera, viewport: Vec2) -> Rect {
        let half = self.bounds.w / 2.0;
        let mut top_left = self.project(camera.screen_to_world(Vec2::ZERO));
        let mut bottom_right = self.project(camera.screen_to_world(viewport));

        top_left.x = top_left.x.clamp(-half, half);
        top_left.y = top_left.y.clamp(-half, half);
        bottom_right.x = bottom_right.x.clamp(-half, half);
        bottom_right.y = bottom_right.y.clamp(-half, half);

        Rect::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }
}
