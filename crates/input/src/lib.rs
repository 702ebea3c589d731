//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and provides a
//! per-tick latch so the simulation applies at most one directional command
//! per tick, no matter how fast events arrive.

pub mod handler;
pub mod map;

pub use tui_maze_types as types;

pub use handler::InputHandler;
pub use map::{map_key_event, should_quit};
