//! Sky module - precomputed circular star field
//!
//! The dome is a lookup table sized from the screen and field of view at
//! startup and never mutated afterward. Columns are angular: the table wraps
//! all the way around the player, and the visible window slides across it as
//! the heading changes, so stars hold still in the world while walls move.

use std::f64::consts::TAU;

use tui_maze_types::{SKY_SHIFT, SKY_STAR_DENSITY};

use crate::player::wrap_angle;
use crate::rng::SimpleRng;

/// Immutable circular star-field buffer, indexed `[angular_column][row]`.
#[derive(Debug, Clone)]
pub struct SkyDome {
    /// Angular columns all the way around the player.
    circumference: usize,
    /// Rows in the buffer; the sky band is the top half of the screen.
    height: usize,
    /// Projected dome radius: screen columns per radian.
    apparent_radius: f64,
    cells: Vec<char>,
}

impl SkyDome {
    /// Build the dome for a fixed screen size and field of view.
    pub fn build(screen_width: u16, screen_height: u16, fov: f64, seed: u32) -> Self {
        let apparent_radius = f64::from(screen_width) / fov;
        // At least one column so the modulo index below is always defined.
        let circumference = ((TAU * apparent_radius).round() as usize).max(1);
        let height = usize::from(screen_height / 2);

        let mut rng = SimpleRng::new(seed);
        let mut cells = Vec::with_capacity(circumference * height);
        for _ in 0..circumference * height {
            cells.push(if rng.next_f64() < SKY_STAR_DENSITY {
                '.'
            } else {
                ' '
            });
        }

        Self {
            circumference,
            height,
            apparent_radius,
            cells,
        }
    }

    pub fn circumference(&self) -> usize {
        self.circumference
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn apparent_radius(&self) -> f64 {
        self.apparent_radius
    }

    /// Angular column for a screen column under the given heading.
    ///
    /// Always in `[0, circumference)`.
    pub fn column_for(&self, screen_column: u16, heading: f64) -> usize {
        let offset = wrap_angle(heading - SKY_SHIFT);
        let shift = (self.apparent_radius * offset).round() as usize;
        (usize::from(screen_column) + shift) % self.circumference
    }

    /// Read one cell; rows past the buffer read as blank sky.
    pub fn glyph(&self, angular_column: usize, row: usize) -> char {
        if row >= self.height {
            return ' ';
        }
        self.cells
            .get(angular_column * self.height + row)
            .copied()
            .unwrap_or(' ')
    }
}
