//! Perimeter turrets
//!
//! Six turrets sit evenly spaced on the mothership's hull. Exactly one is
//! active at a time: it tracks the cursor and is the only one whose fire
//! commands are honored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::AudioManager;
use crate::consts::*;
use crate::sim::bullet::BulletManager;
use crate::sim::camera::Camera;
use crate::sim::mothership::Mothership;
use crate::sim::object::GameObject;

/// A player weapon fixed to the mothership's perimeter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    pub object: GameObject,
    active: bool,
}

impl Turret {
    /// Attach a turret on the mothership hull at `angle`. The attachment
    /// point is computed once; turrets never move afterwards.
    pub fn new(mothership: &Mothership, angle: f32, fire_rate_ms: f64) -> Self {
        let position = mothership
            .object
            .circle()
            .position_on_edge(angle, TURRET_EDGE_FACTOR);
        let mut object =
            GameObject::new(position, Vec2::splat(TURRET_SIZE)).with_fire_rate(fire_rate_ms);
        // Rest rotation points away from the hull until the cursor takes over
        object.set_rotation(-(angle + std::f32::consts::PI));
        Self {
            object,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    fn bound_contains(&self, world_point: Vec2) -> bool {
        self.object.bound().contains(world_point)
    }
}

/// Per-frame turret commands, already edge-detected by the input layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurretInput {
    /// Left button held: fire the active turret
    pub fire: bool,
    /// Left button newly pressed this frame: try a direct pick first
    pub select_click: bool,
    /// Cycle to the previous turret (Q)
    pub cycle_previous: bool,
    /// Cycle to the next turret (E)
    pub cycle_next: bool,
    /// Cursor position in screen coordinates
    pub cursor: Vec2,
}

/// Owns the turret ring and the active-turret selection.
#[derive(Debug, Clone)]
pub struct TurretManager {
    turrets: Vec<Turret>,
    current: usize,
    /// Pan the camera to a turret when selection changes
    turret_focus: bool,
}

impl TurretManager {
    pub fn new(mothership: &Mothership, camera: &mut Camera, turret_focus: bool) -> Self {
        let mut turrets = Vec::with_capacity(TURRET_COUNT);
        for i in 0..TURRET_COUNT {
            let angle = i as f32 * (std::f32::consts::TAU / TURRET_COUNT as f32);
            let mut turret = Turret::new(mothership, angle, TURRET_FIRE_RATE_MS);
            turret.object.attack = TURRET_ATTACK;
            turrets.push(turret);
        }

        let mut manager = Self {
            turrets,
            current: 0,
            turret_focus,
        };
        manager.turrets[0].activate();
        if turret_focus {
            camera.pan_to_point(manager.turrets[0].object.position);
        }
        manager
    }

    pub fn turrets(&self) -> &[Turret] {
        &self.turrets
    }

    pub fn active_turret(&self) -> &Turret {
        &self.turrets[self.current]
    }

    fn active_turret_mut(&mut self) -> &mut Turret {
        &mut self.turrets[self.current]
    }

    /// One tick of turret logic: cooldown, selection, firing, aiming.
    pub fn update(
        &mut self,
        dt_ms: f64,
        input: &TurretInput,
        camera: &mut Camera,
        bullets: &mut BulletManager,
        audio: &mut AudioManager,
    ) {
        self.active_turret_mut().object.update_fire_rate(dt_ms);

        if input.fire {
            let picked = input.select_click && self.pick_under_cursor(input.cursor, camera);
            if !picked && self.active_turret().object.can_fire {
                bullets.fire(&mut self.active_turret_mut().object, true, audio);
            }
        }
        if input.cycle_next {
            self.change_turret(false, camera);
        }
        if input.cycle_previous {
            self.change_turret(true, camera);
        }

        // Aim the active turret at the cursor
        let origin = self.active_turret().object.position;
        let rotation = camera.aim_angle(origin, input.cursor);
        self.active_turret_mut().object.set_rotation(rotation);
    }

    /// Hit-test every turret's bound against the cursor (mapped into world
    /// space through the camera inverse). A hit switches the selection and
    /// closes the new turret's fire gate so the click doesn't also shoot.
    fn pick_under_cursor(&mut self, cursor: Vec2, camera: &mut Camera) -> bool {
        let world_cursor = camera.screen_to_world(cursor);
        for i in 0..self.turrets.len() {
            if self.turrets[i].bound_contains(world_cursor) {
                self.active_turret_mut().deactivate();
                self.current = i;
                self.turrets[i].object.fired();
                self.turrets[i].activate();
                if self.turret_focus {
                    camera.pan_to_point(self.turrets[i].object.position);
                }
                return true;
            }
        }
        false
    }

    /// Step the selection forward or backward, wrapping around the ring.
    fn change_turret(&mut self, previous: bool, camera: &mut Camera) {
        self.active_turret_mut().deactivate();
        self.current = if previous {
            (self.current + 1) % self.turrets.len()
        } else {
            (self.current + self.turrets.len() - 1) % self.turrets.len()
        };
        self.active_turret_mut().activate();
        if self.turret_focus {
            camera.pan_to_point(self.active_turret().object.position);
        }
    }
}
