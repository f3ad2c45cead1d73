//! Mapping between world pixels and terminal cells.
//!
//! The world is a fixed 600×800 pixel field; the terminal is whatever size the
//! user has. Each cell covers a rectangular patch of pixels, so the same world
//! renders (stretched) on any terminal and the mouse maps back into pixels.

use crate::collision::{Point, Rect};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Rows reserved above the playfield for the HUD.
pub const HUD_ROWS: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    /// Playfield rows (terminal rows minus the HUD).
    pub rows: u16,
}

impl Viewport {
    /// Viewport for a terminal of `cols × term_rows` cells.
    pub fn new(cols: u16, term_rows: u16) -> Self {
        Viewport {
            cols: cols.max(1),
            rows: term_rows.saturating_sub(HUD_ROWS).max(1),
        }
    }

    /// Terminal cell containing world point (`x`, `y`), or `None` off-screen.
    pub fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= WORLD_WIDTH || y >= WORLD_HEIGHT {
            return None;
        }
        let (col, row) = self.project(x, y);
        Some((col as u16, row as u16))
    }

    /// Like `to_cell` but unclipped: points off the world land on cells
    /// outside the terminal (possibly negative).
    pub fn project(&self, x: i32, y: i32) -> (i32, i32) {
        let col = (x as i64 * self.cols as i64).div_euclid(WORLD_WIDTH as i64);
        let row = (y as i64 * self.rows as i64).div_euclid(WORLD_HEIGHT as i64);
        (col as i32, row as i32 + HUD_ROWS as i32)
    }

    /// True if terminal cell (`col`, `row`) lies on the playfield.
    pub fn contains_cell(&self, col: i32, row: i32) -> bool {
        col >= 0
            && col < self.cols as i32
            && row >= HUD_ROWS as i32
            && row < (self.rows + HUD_ROWS) as i32
    }

    /// World point at the centre of terminal cell (`col`, `row`). Rows inside
    /// the HUD map to the top edge; cells past the playfield map past the
    /// world edge, since the ship is free to leave the screen.
    pub fn to_world(&self, col: u16, row: u16) -> Point {
        let row = row.saturating_sub(HUD_ROWS) as i64;
        let x = (2 * col as i64 + 1) * WORLD_WIDTH as i64 / (2 * self.cols as i64);
        let y = (2 * row + 1) * WORLD_HEIGHT as i64 / (2 * self.rows as i64);
        Point::new(x as i32, y as i32)
    }

    /// Cells covered by `rect`, clipped to the playfield, as
    /// `(first_col, first_row, last_col, last_row)` inclusive.
    pub fn cell_span(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let left = rect.left().max(0);
        let top = rect.top().max(0);
        let right = rect.right().min(WORLD_WIDTH) - 1;
        let bottom = rect.bottom().min(WORLD_HEIGHT) - 1;
        if left > right || top > bottom {
            return None;
        }
        let (c0, r0) = self.to_cell(left, top)?;
        let (c1, r1) = self.to_cell(right, bottom)?;
        Some((c0, r0, c1, r1))
    }
}
