//! Cosmetic explosion animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Number of cells in the explosion sheet
pub const EXPLOSION_FRAMES: usize = EXPLOSION_COLUMNS * EXPLOSION_ROWS;

/// An explosion playing through the animation sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    /// Destination box (one sheet cell, centered on the destroyed tank)
    pub bounds: Rect,
    /// Current sheet cell
    pub frame: usize,
    /// Time spent on the current cell
    pub frame_timer: f32,
    pub finished: bool,
}

impl Explosion {
    pub fn at(center: Vec2) -> Self {
        Self {
            bounds: Rect::centered_on(
                center,
                Vec2::new(EXPLOSION_CELL_WIDTH, EXPLOSION_CELL_HEIGHT),
            ),
            frame: 0,
            frame_timer: 0.0,
            finished: false,
        }
    }

    /// Seconds each cell is shown
    pub fn frame_duration() -> f32 {
        EXPLOSION_LIFE_SPAN / EXPLOSION_FRAMES as f32
    }

    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.frame_timer += dt;
        let duration = Self::frame_duration();
        while self.frame_timer >= duration {
            self.frame_timer -= duration;
            self.frame += 1;
            if self.frame >= EXPLOSION_FRAMES {
                self.frame = EXPLOSION_FRAMES - 1;
                self.finished = true;
                return;
            }
        }
    }

    /// Source rectangle of the current cell in the sheet
    pub fn source_cell(&self) -> Rect {
        let col = self.frame % EXPLOSION_COLUMNS;
        let row = self.frame / EXPLOSION_COLUMNS;
        Rect::new(
            col as f32 * EXPLOSION_CELL_WIDTH,
            row as f32 * EXPLOSION_CELL_HEIGHT,
            EXPLOSION_CELL_WIDTH,
            EXPLOSION_CELL_HEIGHT,
        )
    }
}
