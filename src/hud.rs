//! HUD read-model
//!
//! The HUD never mutates simulation state except for consuming the
//! mothership's one-shot damage flag, which feeds a transient hit
//! indicator. Everything else is derived text and bar fractions for the
//! renderer.

use crate::consts::HIT_INDICATOR_MS;
use crate::sim::tick::World;

/// What the HUD shows this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    /// "Current Wave: " or "Next Wave: "
    pub wave_label: &'static str,
    pub wave_number: i32,
    /// Live plus unspawned enemies; only shown while a wave is active
    pub enemies_left: Option<i32>,
    pub health_text: String,
    pub shield_text: String,
    /// Bar fill fractions, clamped to [0, 1]
    pub health_fraction: f32,
    pub shield_fraction: f32,
    /// Hit indicator opacity, 0 when hidden
    pub hit_indicator_alpha: f32,
    /// Full-screen message (pause / wave prompt), if any
    pub center_text: Option<&'static str>,
}

/// HUD state that persists across frames (the hit-indicator timer).
#[derive(Debug, Clone, Default)]
pub struct Hud {
    indicator_remaining_ms: f64,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-frame HUD pass: consume the damage flag, run the timer down.
    pub fn update(&mut self, dt_ms: f64, world: &mut World) {
        if world.waves.wave_alive() && world.mothership.consume_took_damage() {
            self.indicator_remaining_ms = HIT_INDICATOR_MS;
        }
        if self.indicator_remaining_ms > 0.0 {
            self.indicator_remaining_ms -= dt_ms;
        }
    }

    /// Build the frame's view. Pure read of settled simulation state.
    pub fn view(&self, world: &World) -> HudView {
        let ship = &world.mothership.object;
        let health_fraction =
            (ship.current_health() as f32 / ship.max_health() as f32).clamp(0.0, 1.0);
        let shield_fraction =
            (ship.current_shields() as f32 / ship.max_shields() as f32).clamp(0.0, 1.0);

        let wave_active = world.waves.wave_alive();
        let (wave_label, wave_number) = if wave_active {
            ("Current Wave: ", world.waves.wave_number())
        } else {
            // Idle shows what's coming, not what was
            ("Next Wave: ", world.waves.wave_number() + 1)
        };

        let center_text = if world.is_game_over() {
            Some("GAME OVER")
        } else if world.is_paused() {
            Some("PAUSED. Press Escape to resume.")
        } else if !wave_active {
            Some("Press Enter to start the next wave.")
        } else {
            None
        };

        HudView {
            wave_label,
            wave_number,
            enemies_left: wave_active.then(|| world.waves.enemy_count(&world.enemies)),
            health_text: format!("HP: {}/{}", ship.current_health(), ship.max_health()),
            shield_text: format!("Shields: {}/{}", ship.current_shields(), ship.max_shields()),
            health_fraction,
            shield_fraction,
            hit_indicator_alpha: (self.indicator_remaining_ms / HIT_INDICATOR_MS).clamp(0.0, 1.0)
                as f32,
            center_text,
        }
    }
}
