//! Impact explosion animations
//!
//! Purely visual: each explosion walks the cells of a 5×5 sprite sheet, one
//! cell per tick, and is reaped once the last cell has played.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{EXPLOSION_COLS, EXPLOSION_ROWS};

/// One playing explosion animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    col: u32,
    row: u32,
}

impl Explosion {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            col: 0,
            row: 0,
        }
    }

    /// Current sheet cell (column, row) for the renderer.
    pub fn frame(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    /// Step to the next cell. Returns true when the animation has finished.
    pub fn advance(&mut self) -> bool {
        self.col += 1;
        if self.col >= EXPLOSION_COLS {
            self.col = 0;
            self.row += 1;
            if self.row >= EXPLOSION_ROWS {
                return true;
            }
        }
        false
    }
}

/// Owns all playing explosions.
#[derive(Debug, Clone, Default)]
pub struct ExplosionManager {
    explosions: Vec<Explosion>,
}

impl ExplosionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn create_explosion(&mut self, position: Vec2) {
        self.explosions.push(Explosion::new(position));
    }

    /// Advance every animation and drop all that finished this frame.
    pub fn update(&mut self) {
        self.explosions.retain_mut(|explosion| !explosion.advance());
    }
}
