//! Render math module - ray marching, projection, and shading
//!
//! Everything here is pure: a pose and a map go in, distances and glyphs
//! come out. The terminal layer composes these per column; tests drive them
//! headless.
//!
//! # Module Structure
//!
//! - [`raycast`]: fixed-step ray marching with tile-boundary seam detection
//! - [`projection`]: wall distance to vertical screen extents
//! - [`shade`]: threshold tables mapping distances and rows to glyphs
//!
//! # Example
//!
//! ```
//! use tui_maze_core::WorldMap;
//! use tui_maze_engine::{wall_extents, RayCaster, RaycastConfig};
//!
//! let map = WorldMap::bundled();
//! let caster = RayCaster::new(RaycastConfig::default());
//!
//! let hit = caster.cast_angle(&map, 8.5, 8.5, 0.0);
//! assert!(hit.distance <= caster.config().max_depth);
//!
//! let span = wall_extents(hit.distance, 24);
//! assert_eq!(span.ceiling + span.floor, 24.0);
//! ```

pub mod projection;
pub mod raycast;
pub mod shade;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use projection::{wall_extents, WallSpan};
pub use raycast::{RayCaster, RaycastConfig, RayHit};
pub use shade::{floor_glyph, wall_glyph};
