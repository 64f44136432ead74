//! High score table
//!
//! Five entries, sorted descending by total. Persisted as JSON with the
//! same fallback-and-rewrite policy as the settings file: a bad file is
//! replaced by a placeholder table rather than surfacing an error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sim::score::Score;

/// Number of high scores kept on disk
pub const MAX_HIGH_SCORES: usize = 5;

/// High score table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<Score>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self {
            entries: (0..MAX_HIGH_SCORES)
                .map(|_| Score {
                    name: "-----".to_string(),
                    wave: 0,
                    kills: 0,
                    total: 0,
                })
                .collect(),
        }
    }
}

impl HighScores {
    /// A score makes the table if it beats the lowest entry.
    pub fn qualifies(&self, total: i32) -> bool {
        if total <= 0 {
            return false;
        }
        self.entries
            .last()
            .map(|entry| total > entry.total)
            .unwrap_or(true)
    }

    /// Insert a score at its sorted position, dropping the table past five
    /// entries. Returns the 1-indexed rank, or None if it didn't qualify.
    pub fn add_score(&mut self, score: Score) -> Option<usize> {
        if !self.qualifies(score.total) {
            return None;
        }

        let position = self
            .entries
            .iter()
            .position(|entry| score.total > entry.total)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(position + 1)
    }

    pub fn top_total(&self) -> i32 {
        self.entries.first().map(|entry| entry.total).unwrap_or(0)
    }

    /// Load the table from disk, falling back to placeholders (and
    /// rewriting the file) on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("invalid high score file ({err}), rewriting defaults");
                    let scores = Self::default();
                    scores.save(path);
                    scores
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, creating one", path.display());
                let scores = Self::default();
                scores.save(path);
                scores
            }
        }
    }

    /// Save the table. Failures are logged, never propagated.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save high scores: {err}");
                } else {
                    log::info!("high scores saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("failed to serialize high scores: {err}"),
        }
    }
}
