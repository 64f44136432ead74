//! Score tracking for a single game run

use serde::{Deserialize, Serialize};

use crate::consts::{SCORE_PER_KILL, SCORE_PER_WAVE};

/// A finished run's score, as shown on the game-over and high-score screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Player name, at most 5 characters
    pub name: String,
    /// Waves survived
    pub wave: i32,
    /// Enemies killed
    pub kills: i32,
    /// Computed total
    pub total: i32,
}

/// Accumulates kills and cleared waves over one game instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    enemies_killed: i32,
    waves_survived: i32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enemies_killed(&self) -> i32 {
        self.enemies_killed
    }

    pub fn waves_survived(&self) -> i32 {
        self.waves_survived
    }

    pub fn enemy_killed(&mut self) {
        self.enemies_killed += 1;
    }

    pub fn wave_survived(&mut self) {
        self.waves_survived += 1;
    }

    pub fn reset(&mut self) {
        self.enemies_killed = 0;
        self.waves_survived = 0;
    }

    pub fn total(&self) -> i32 {
        self.enemies_killed * SCORE_PER_KILL + self.waves_survived * SCORE_PER_WAVE
    }

    /// Snapshot the current run as a Score record (name filled in later).
    pub fn snapshot(&self) -> Score {
        Score {
            name: String::new(),
            wave: self.waves_survived,
            kills: self.enemies_killed,
            total: self.total(),
        }
    }
}
