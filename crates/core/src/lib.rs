//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the world model and movement rules. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a fixed timestep and a seeded RNG produce identical
//!   runs
//! - **Testable**: movement and collision can be driven headless
//! - **Portable**: usable from the terminal binary, benchmarks, or tests
//!
//! # Module Structure
//!
//! - [`map`]: immutable tile grid with out-of-range-reads-as-wall queries
//! - [`player`]: player pose, heading normalization, collision rules
//! - [`sky`]: precomputed circular star-field buffer
//! - [`game_state`]: the owned simulation root threaded through the loop
//! - [`rng`]: seeded LCG for world construction
//!
//! # Movement Rules
//!
//! - Heading is renormalized into `[0, 2*pi)` after every turn, using
//!   floored modulo so negative angles wrap correctly.
//! - Collision tests the destination cell once with both axes combined; a
//!   blocked move is dropped whole (no sliding along walls).
//! - `dt` is the fixed tick interval; measured frame time is never fed into
//!   movement math.
//!
//! # Example
//!
//! ```
//! use tui_maze_core::GameState;
//! use tui_maze_core::types::{Command, TICK_SECONDS};
//!
//! let mut game = GameState::new();
//! game.apply(Command::TurnLeft, TICK_SECONDS);
//! game.apply(Command::MoveForward, TICK_SECONDS);
//!
//! assert!(game.player.heading >= 0.0);
//! assert!(game.player.heading < std::f64::consts::TAU);
//! ```

pub mod game_state;
pub mod map;
pub mod player;
pub mod rng;
pub mod sky;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use map::WorldMap;
pub use player::{wrap_angle, Motion, MovementController, Player};
pub use rng::SimpleRng;
pub use sky::SkyDome;
