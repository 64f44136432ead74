//! Mothership entry point
//!
//! Headless demo driver: feeds the input tracker with a simple autopilot
//! (start every wave, aim the active turret at the nearest enemy, hold
//! fire), runs the simulation, and merges the resulting score into the
//! on-disk table. Useful for exercising the full game loop without a
//! renderer attached.

use std::path::Path;

use glam::Vec2;

use mothership::hud::Hud;
use mothership::input::{InputState, InputTracker, Key};
use mothership::minimap::Minimap;
use mothership::sim::{World, tick};
use mothership::{HighScores, Settings};

/// Frame cap for one demo run (~5 minutes of game time at 60 fps)
const MAX_TICKS: u32 = 20_000;
const FRAME_MS: f64 = 16.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let settings_path = Path::new("settings.json");
    let scores_path = Path::new("highscores.json");
    let settings = Settings::load(settings_path);
    let mut high_scores = HighScores::load(scores_path);

    let viewport = Vec2::new(1280.0, 720.0);
    let mut world = World::new(seed, viewport, &settings);
    let mut tracker = InputTracker::new();
    let mut hud = Hud::new();
    let minimap = Minimap::new();

    log::info!("demo run starting (seed {seed})");

    for frame in 0..MAX_TICKS {
        tracker.update(autopilot(&world, frame));
        let input = tracker.tick_input();
        tick(&mut world, &input, FRAME_MS);
        hud.update(FRAME_MS, &mut world);

        // A real platform layer would hand these to the mixer
        let cues = world.audio.drain_cues();
        if !cues.is_empty() {
            log::debug!("frame {frame}: {} sound cues", cues.len());
        }

        if frame % 600 == 0 {
            let view = hud.view(&world);
            let dots = minimap.enemy_dots(&world.enemies).len();
            log::info!(
                "{}{} | {} | {} | {dots} minimap dots",
                view.wave_label,
                view.wave_number,
                view.health_text,
                view.shield_text,
            );
        }

        if world.is_game_over() {
            break;
        }
    }

    let score = world.final_score();
    println!(
        "run finished: {} kills, {} waves survived, total score {}",
        score.kills, score.wave, score.total
    );

    if let Some(rank) = high_scores.add_score(mothership::sim::Score {
        name: "DEMO".to_string(),
        ..score
    }) {
        println!("new high score, rank {rank}");
        high_scores.save(scores_path);
    }
}

/// Minimal stand-in for a player: press Enter whenever no wave is running,
/// track the closest enemy with the cursor, and hold the trigger down.
fn autopilot(world: &World, frame: u32) -> InputState {
    let mut state = InputState::default();

    if !world.waves.wave_alive() {
        state.press(Key::Enter);
        return state;
    }

    let turret_pos = world.turrets.active_turret().object.position;
    let nearest = world
        .enemies
        .enemies()
        .iter()
        .min_by(|a, b| {
            let da = a.object.position.distance_squared(turret_pos);
            let db = b.object.position.distance_squared(turret_pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|enemy| enemy.object.position);

    if let Some(target) = nearest {
        state.cursor = world.camera.world_to_screen(target);
        state.left_button = true;
    }

    // Nudge the camera around occasionally so the transform path is hit too
    if frame % 600 < 30 {
        state.press(Key::D);
    }

    state
}
