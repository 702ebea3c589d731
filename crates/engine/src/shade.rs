//! Shade module - distance and row position to discrete glyphs
//!
//! Threshold tables, not branch chains, so the tier boundaries are data the
//! tests can probe directly.

use crate::raycast::RayHit;

/// Wall tiers: fraction of max depth paired with the glyph drawn inside it.
///
/// Checked in order; a distance past every tier renders blank.
const WALL_TIERS: [(f64, char); 3] = [(1.0 / 3.0, '█'), (1.0 / 2.0, '▓'), (1.0 / 1.1, '░')];

/// Floor tiers: upper bound on the normalized row depth `b`, paired glyph.
///
/// `b` runs from 1 at the screen midline down to 0 at the bottom edge, so
/// low `b` means near the viewer and dense shading.
const FLOOR_TIERS: [(f64, char); 4] = [(0.25, '#'), (0.5, 'x'), (0.75, '.'), (0.9, '-')];

/// Glyph for a wall slice.
///
/// A boundary seam renders blank regardless of distance, which is what makes
/// tile edges visible at all.
pub fn wall_glyph(hit: &RayHit, max_depth: f64) -> char {
    if hit.boundary {
        return ' ';
    }
    for (fraction, glyph) in WALL_TIERS {
        if hit.distance <= max_depth * fraction {
            return glyph;
        }
    }
    ' '
}

/// Glyph for a floor row.
///
/// Purely a function of row position; no ray result involved. Rows closer to
/// the bottom of the screen read as nearer floor and shade denser.
pub fn floor_glyph(row: u16, screen_height: u16) -> char {
    let half = f64::from(screen_height) / 2.0;
    let b = 1.0 - (f64::from(row) - half) / half;
    for (bound, glyph) in FLOOR_TIERS {
        if b < bound {
            return glyph;
        }
    }
    ' '
}
