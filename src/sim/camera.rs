//! Camera and coordinate-space mapping
//!
//! The view transform (rotation ∘ uniform scale ∘ translation to viewport
//! center) and its exact inverse are recomputed every frame. Every other
//! coordinate-dependent feature - turret aiming, cursor hit tests, the
//! minimap box - goes through `screen_to_world`/`world_to_screen`.

use glam::{Affine2, Vec2};

use crate::consts::*;
use crate::normalize_angle;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec2,
    rotation: f32,
    zoom: f32,
    viewport: Vec2,
    map_half_extent: f32,
    zoom_speed: f32,
    pan_speed: f32,
    panning: bool,
    pan_point: Vec2,
    transform: Affine2,
    inverse: Affine2,
}

impl Camera {
    pub fn new(viewport: Vec2, settings: &Settings) -> Self {
        let zoom_speed = settings.zoom_speed.max(CAMERA_ZOOM_SPEED_MIN);
        let pan_speed = (settings.pan_speed * 10.0).max(CAMERA_PAN_SPEED_MIN);
        let mut camera = Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport,
            map_half_extent: MAP_HALF_EXTENT,
            zoom_speed,
            pan_speed,
            panning: false,
            pan_point: Vec2::ZERO,
            transform: Affine2::IDENTITY,
            inverse: Affine2::IDENTITY,
        };
        camera.recompute_transform();
        camera
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    pub fn inverse_transform(&self) -> Affine2 {
        self.inverse
    }

    /// One tick of camera logic.
    ///
    /// `pan` is the held manual pan direction, `zoom_delta` the wheel delta
    /// in notches; both are ignored while an auto pan is in flight. All
    /// derived values are clamped rather than rejected.
    pub fn update(&mut self, pan: Vec2, zoom_delta: f32) {
        if !self.panning {
            self.position += pan * self.pan_speed;
            self.zoom += zoom_delta * self.zoom_speed;
        }

        self.zoom = self.zoom.clamp(CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);
        self.rotation = normalize_angle(self.rotation);
        self.position.x = self
            .position
            .x
            .clamp(-self.map_half_extent, self.map_half_extent);
        self.position.y = self
            .position
            .y
            .clamp(-self.map_half_extent, self.map_half_extent);

        self.recompute_transform();

        if self.panning {
            self.pan_step();
        }
    }

    fn recompute_transform(&mut self) {
        let mut offset = -self.position * self.zoom;
        offset += self.viewport / 2.0;
        self.transform =
            Affine2::from_scale_angle_translation(Vec2::splat(self.zoom), self.rotation, offset);
        self.inverse = self.transform.inverse();
    }

    /// Begin auto-panning toward a world position.
    pub fn pan_to_point(&mut self, target: Vec2) {
        self.panning = true;
        self.pan_point = target;
    }

    /// Move 5% of the remaining distance; release once within epsilon.
    fn pan_step(&mut self) {
        self.position += (self.pan_point - self.position) * CAMERA_PAN_LERP;
        if self.pan_point.distance(self.position) < CAMERA_PAN_EPSILON {
            self.panning = false;
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.inverse.transform_point2(screen)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.transform.transform_point2(world)
    }

    /// Rotation that points an object's -90° forward vector from
    /// `origin_world` at the given screen-space cursor position.
    pub fn aim_angle(&self, origin_world: Vec2, screen_point: Vec2) -> f32 {
        let target = self.screen_to_world(screen_point);
        let direction = (target - origin_world).normalize_or_zero();
        direction.y.atan2(direction.x) + std::f32::consts::FRAC_PI_2
    }
}
