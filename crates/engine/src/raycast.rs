//! Raycast module - per-column ray marching against the tile grid
//!
//! One ray per screen column. The march steps a fixed increment until it
//! enters a solid cell or runs out of depth; a hit on a cell whose corner
//! lines up with the ray direction is additionally flagged as a boundary
//! seam, which renders as a visible edge between adjacent wall tiles.

use arrayvec::ArrayVec;

use tui_maze_core::{Player, WorldMap};
use tui_maze_types::{FOV, MAX_DEPTH, RAY_STEP, SEAM_THRESHOLD};

/// Tunables for the ray march.
///
/// Exposed as configuration rather than constants so precision/cost can be
/// tuned and tests can run small deterministic maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastConfig {
    /// Horizontal field of view in radians.
    pub fov: f64,
    /// March increment in world units.
    pub step_size: f64,
    /// Depth cutoff; also the reported distance for misses.
    pub max_depth: f64,
    /// Angular window for corner-alignment seam detection.
    pub seam_threshold: f64,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            step_size: RAY_STEP,
            max_depth: MAX_DEPTH,
            seam_threshold: SEAM_THRESHOLD,
        }
    }
}

/// Result of marching a single ray.
///
/// Ephemeral: built per column per frame and discarded after shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Marched distance, clamped into `[step_size, max_depth]`.
    pub distance: f64,
    /// The hit grazes a tile edge nearly edge-on.
    pub boundary: bool,
}

/// Casts rays for screen columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCaster {
    config: RaycastConfig,
}

impl RayCaster {
    pub fn new(config: RaycastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RaycastConfig {
        &self.config
    }

    /// The world angle of a screen column's ray.
    ///
    /// Column 0 looks along the left edge of the view cone; the last column
    /// along the right edge.
    pub fn column_angle(&self, heading: f64, column: u16, screen_width: u16) -> f64 {
        heading - self.config.fov / 2.0
            + (f64::from(column) / f64::from(screen_width)) * self.config.fov
    }

    /// Cast the ray for one screen column from the player's pose.
    pub fn cast_column(
        &self,
        map: &WorldMap,
        player: &Player,
        column: u16,
        screen_width: u16,
    ) -> RayHit {
        let angle = self.column_angle(player.heading, column, screen_width);
        self.cast_angle(map, player.x, player.y, angle)
    }

    /// March a ray from (origin_x, origin_y) along `angle`.
    ///
    /// Distance grows monotonically in `step_size` increments. Leaving the
    /// grid clamps the distance to `max_depth` with no seam; an in-bounds
    /// wall hit stops the march and runs seam detection on the hit cell.
    pub fn cast_angle(&self, map: &WorldMap, origin_x: f64, origin_y: f64, angle: f64) -> RayHit {
        let eye_x = angle.sin();
        let eye_y = angle.cos();

        let mut distance = 0.0;
        let mut boundary = false;

        loop {
            distance += self.config.step_size;
            if distance >= self.config.max_depth {
                distance = self.config.max_depth;
                break;
            }

            let test_x = (origin_x + eye_x * distance).floor() as i32;
            let test_y = (origin_y + eye_y * distance).floor() as i32;

            if !map.in_bounds(test_x, test_y) {
                distance = self.config.max_depth;
                break;
            }

            if map.is_wall(test_x, test_y) {
                boundary =
                    self.grazes_corner(origin_x, origin_y, eye_x, eye_y, test_x, test_y, distance);
                break;
            }
        }

        RayHit {
            // Floor at one step so downstream inverse-distance math stays finite.
            distance: distance.max(self.config.step_size),
            boundary,
        }
    }

    /// Boundary-seam test for an in-bounds wall hit.
    ///
    /// Considers the 4 integer corners of the hit cell; the hit is a seam
    /// when either of the 2 corners nearest the player sits almost exactly
    /// on the ray (angular gap below the threshold) and closer than the
    /// marched hit distance.
    fn grazes_corner(
        &self,
        origin_x: f64,
        origin_y: f64,
        eye_x: f64,
        eye_y: f64,
        cell_x: i32,
        cell_y: i32,
        hit_distance: f64,
    ) -> bool {
        let mut corners: ArrayVec<(f64, f64), 4> = ArrayVec::new();
        for offset_x in 0..2 {
            for offset_y in 0..2 {
                let corner_x = f64::from(cell_x + offset_x) - origin_x;
                let corner_y = f64::from(cell_y + offset_y) - origin_y;
                let length = (corner_x * corner_x + corner_y * corner_y).sqrt();
                let cosine = (eye_x * corner_x + eye_y * corner_y) / length;
                corners.push((length, cosine));
            }
        }

        corners.sort_by(|a, b| a.0.total_cmp(&b.0));

        corners.iter().take(2).any(|&(length, cosine)| {
            length < hit_distance && cosine.clamp(-1.0, 1.0).acos() < self.config.seam_threshold
        })
    }
}
