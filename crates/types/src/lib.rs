//! Core types module - shared constants and data structures
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core simulation, render math, terminal I/O).
//!
//! # World Dimensions
//!
//! The bundled maze is a fixed 16x16 tile grid:
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 16 rows (indexed 0-15)
//! - **Player spawn**: (14.4, 14.7) facing heading pi
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 15 | Fixed timestep interval (~66 FPS) |
//! | `TICK_SECONDS` | 0.015 | The `dt` fed to movement and turning |
//!
//! Movement and turning always integrate over `TICK_SECONDS`, never over
//! measured wall-clock time, so simulation speed is independent of how long
//! a frame actually took to draw.
//!
//! # Render Constants
//!
//! - `FOV`: pi/4 horizontal field of view, split evenly across screen columns
//! - `MAX_DEPTH`: 16.0 world units; rays never report farther than this
//! - `RAY_STEP`: 0.1 world units per march increment
//! - `SEAM_THRESHOLD`: 0.01 rad angular window for tile-edge seam detection
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Command, Tile, MAP_WIDTH, MAP_HEIGHT};
//!
//! assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
//! assert_eq!(Tile::from_char('.'), Some(Tile::Empty));
//! assert_eq!(Tile::from_char('?'), None);
//!
//! assert!(Command::MoveForward.is_directional());
//! assert!(!Command::ToggleHud.is_directional());
//!
//! assert_eq!(MAP_WIDTH, 16);
//! assert_eq!(MAP_HEIGHT, 16);
//! ```

use std::f64::consts::{FRAC_PI_4, PI};

/// Bundled maze width in tiles (16 columns)
pub const MAP_WIDTH: usize = 16;

/// Bundled maze height in tiles (16 rows)
pub const MAP_HEIGHT: usize = 16;

/// Fixed timestep interval in milliseconds (15ms ~ 66 FPS)
pub const TICK_MS: u32 = 15;

/// Fixed timestep in seconds; the `dt` used for all movement math
pub const TICK_SECONDS: f64 = TICK_MS as f64 / 1000.0;

/// Horizontal field of view in radians
pub const FOV: f64 = FRAC_PI_4;

/// Maximum ray depth in world units; also the reported distance for misses
pub const MAX_DEPTH: f64 = 16.0;

/// Ray march increment in world units
///
/// Smaller steps raise precision and cost in equal measure.
pub const RAY_STEP: f64 = 0.1;

/// Angular window (radians) for tile-boundary seam detection
///
/// Tunable, not derived: the visual effect depends on screen size and FOV.
pub const SEAM_THRESHOLD: f64 = 0.01;

/// Player walk speed in world units per second
pub const MOVE_SPEED: f64 = 9.0;

/// Player turn rate in radians per second
pub const TURN_SPEED: f64 = MOVE_SPEED * 0.75;

/// Probability that a sky cell holds a star glyph
pub const SKY_STAR_DENSITY: f64 = 0.02;

/// Fixed angular shift applied to the heading when sampling the sky dome
pub const SKY_SHIFT: f64 = PI / 8.0;

/// Seed for the star-field RNG; a fixed seed keeps the dome reproducible
pub const DEFAULT_SKY_SEED: u32 = 0x5EED;

/// Player spawn X coordinate
pub const PLAYER_START_X: f64 = 14.4;

/// Player spawn Y coordinate
pub const PLAYER_START_Y: f64 = 14.7;

/// Player spawn heading in radians
pub const PLAYER_START_HEADING: f64 = PI;

/// A single maze tile
///
/// The map stores only these two states; everything else (out-of-range
/// addresses reading as walls, shading tiers, seams) is derived at query
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    /// Parse a tile from its map-layout glyph (`'#'` wall, `'.'` empty)
    ///
    /// Returns `None` for any other character so malformed layouts are
    /// rejected at construction rather than misread at query time.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }

    /// Whether this tile blocks movement and rays
    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Discrete player commands produced by the input layer
///
/// The tick loop applies at most one directional command per tick.
/// `ToggleHud` is handled by the presentation loop and ignored by the
/// simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotate heading counter-clockwise
    TurnLeft,
    /// Rotate heading clockwise
    TurnRight,
    /// Walk along the heading vector
    MoveForward,
    /// Walk against the heading vector
    MoveBackward,
    /// Show/hide the diagnostics overlay
    ToggleHud,
}

impl Command {
    /// Whether this command moves or turns the player
    pub fn is_directional(&self) -> bool {
        !matches!(self, Command::ToggleHud)
    }
}
